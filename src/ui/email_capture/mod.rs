//! Email capture modal
//!
//! Offers the newsletter sign-up once per browser profile, either after a
//! short delay or once the visitor has scrolled far enough, whichever comes
//! first. All gating decisions live in [`EmailCaptureController`]; this
//! module only wires it to the DOM.

#[cfg(not(feature = "ssr"))]
mod api;
mod host;
#[cfg(not(feature = "ssr"))]
mod storage;

use leptos::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::email_capture::{ClickTarget, EmailCaptureController, ModalState};
use crate::ui::common::{BaseModal, ErrorMessage, FormField, SuccessMessage};
use crate::ui::locale::use_locale;

use host::CaptureHost;

/// Newsletter capture dialog
#[component]
pub fn EmailCaptureModal() -> impl IntoView {
    let config = SiteConfig::from_build_env();
    let controller = RwSignal::new(EmailCaptureController::new(config.capture));
    let host = CaptureHost::new(controller, config.subscribe_url());
    let locale = use_locale();

    // Client only: effects never run during server rendering
    Effect::new(move |_| host.mount());
    on_cleanup(move || host.dispatch(|c| c.teardown()));

    let state = Memo::new(move |_| controller.with(|c| c.state()));
    let is_open = Signal::derive(move || state.get().is_visible());
    let name = Signal::derive(move || {
        controller.with(|c| c.form().map(|f| f.name.clone()).unwrap_or_default())
    });
    let email = Signal::derive(move || {
        controller.with(|c| c.form().map(|f| f.email.clone()).unwrap_or_default())
    });
    let submitting = Signal::derive(move || {
        controller.with(|c| c.form().is_some_and(|f| f.submitting))
    });
    let error = Signal::derive(move || {
        let copy = locale.capture_copy();
        controller.with(|c| {
            c.form()
                .and_then(|f| f.error.as_ref())
                .map(|e| copy.error_text(e))
        })
    });
    let has_error = Signal::derive(move || error.with(Option::is_some));

    let on_name = Callback::new(move |value: String| controller.update(|c| c.set_name(value)));
    let on_email = Callback::new(move |value: String| controller.update(|c| c.set_email(value)));
    let on_close = Callback::new(move |_: ()| host.dispatch(|c| c.dismiss()));
    let on_overlay_click =
        Callback::new(move |target: ClickTarget| host.dispatch(|c| c.clicked(target)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        host.dispatch(|c| c.submit());
    };

    view! {
        <BaseModal
            title=Signal::derive(move || locale.capture_copy().title.to_string())
            subtitle=Signal::derive(move || locale.capture_copy().subtitle.to_string())
            close_label=Signal::derive(move || locale.capture_copy().close_label.to_string())
            is_open=is_open
            on_close=on_close
            on_overlay_click=on_overlay_click
        >
            <Show
                when=move || state.get() == ModalState::VisibleSuccess
                fallback=move || view! {
                    <form class="space-y-4" novalidate=true on:submit=on_submit>
                        <FormField
                            label=Signal::derive(move || locale.capture_copy().name_label.to_string())
                            placeholder=Signal::derive(move || locale.capture_copy().name_placeholder.to_string())
                            autocomplete="name"
                            value=name
                            on_input=on_name
                            disabled=submitting
                        />
                        <FormField
                            label=Signal::derive(move || locale.capture_copy().email_label.to_string())
                            placeholder=Signal::derive(move || locale.capture_copy().email_placeholder.to_string())
                            input_type="email"
                            autocomplete="email"
                            required=true
                            value=email
                            on_input=on_email
                            disabled=submitting
                            invalid=has_error
                        />
                        <ErrorMessage error=error />
                        <button
                            type="submit"
                            class="btn-primary w-full"
                            disabled=move || submitting.get()
                        >
                            {move || {
                                let copy = locale.capture_copy();
                                if submitting.get() { copy.submitting } else { copy.submit }
                            }}
                        </button>
                    </form>
                }
            >
                <SuccessMessage
                    title=Signal::derive(move || locale.capture_copy().success_title.to_string())
                    body=Signal::derive(move || locale.capture_copy().success_body.to_string())
                />
            </Show>
        </BaseModal>
    }
}
