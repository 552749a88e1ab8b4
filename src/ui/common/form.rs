use leptos::prelude::*;

/// Labelled text input bound to a signal
#[component]
pub fn FormField(
    /// Field label text
    #[prop(into)]
    label: Signal<String>,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(into)]
    placeholder: Signal<String>,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Marks the field invalid for styling and assistive tech
    #[prop(into, default = Signal::stored(false))]
    invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="block space-y-1.5">
            <span class="label">
                {move || label.get()}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </span>
            <input
                type=input_type
                class="input-base"
                class:border-red-500=move || invalid.get()
                aria-invalid=move || if invalid.get() { "true" } else { "false" }
                autocomplete=autocomplete
                required=required
                placeholder=move || placeholder.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </label>
    }
}
