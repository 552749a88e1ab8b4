use crate::core::email_capture::ClickTarget;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Decide whether a click landed on the overlay itself or inside the dialog.
///
/// The handler sits on the overlay, so the overlay is the current target;
/// anything that bubbled up from the dialog has a different origin.
pub fn click_target(ev: &leptos::ev::MouseEvent) -> ClickTarget {
    if ev.target().is_some() && ev.target() == ev.current_target() {
        ClickTarget::Backdrop
    } else {
        ClickTarget::Content
    }
}

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    #[prop(into)]
    title: Signal<String>,
    /// Optional subtitle/description
    #[prop(into, optional)]
    subtitle: Option<Signal<String>>,
    /// Accessible label for the close button
    #[prop(into)]
    close_label: Signal<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Close button or Escape key
    on_close: Callback<()>,
    /// Any click on the overlay, classified
    on_overlay_click: Callback<ClickTarget>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-md)
    #[prop(default = "max-w-md")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 backdrop-theme transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 backdrop-theme opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            aria-hidden=move || if is_open.get() { "false" } else { "true" }
            // Closed dialog must not take focus
            inert=move || !is_open.get()
            on:click=move |e| on_overlay_click.run(click_target(&e))
        >
            <div
                class=format!("w-full {} card theme-transition", max_width)
                role="dialog"
                aria-modal="true"
            >
                // Header
                <div class="card-header">
                    <div>
                        <h3 class="title-lg">{move || title.get()}</h3>
                        {subtitle.map(|s| view! { <p class="subtitle">{move || s.get()}</p> })}
                    </div>
                    <button
                        type="button"
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title=move || close_label.get()
                        aria-label=move || close_label.get()
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                // Content
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
