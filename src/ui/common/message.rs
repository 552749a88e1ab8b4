//! Inline status messages

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success panel with a check icon, a heading and a line of body text
#[component]
pub fn SuccessMessage(
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    body: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="success-message flex flex-col items-center text-center gap-3 py-4" role="status">
            <Icon name=icons::CHECK class="w-12 h-12"/>
            <h4 class="title-md">{move || title.get()}</h4>
            <p class="text-theme-secondary">{move || body.get()}</p>
        </div>
    }
}
