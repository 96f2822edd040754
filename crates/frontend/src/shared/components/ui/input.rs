use leptos::prelude::*;

use crate::shared::icons::icon;

/// Pill-shaped text input with a leading icon, a screen-reader label and an
/// inline validation message
#[component]
pub fn Input(
    /// Label text, visually hidden
    #[prop(into)]
    label: String,
    /// ID for the input element; the error paragraph gets `<id>-error`
    #[prop(into)]
    id: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Blur event handler
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Validation message; shown and marks the field invalid when present
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Leading icon name from `shared::icons`
    #[prop(optional)]
    icon_name: Option<&'static str>,
) -> impl IntoView {
    let label_for = id.clone();
    let error_id = format!("{}-error", id);
    let described_by = {
        let error_id = error_id.clone();
        move || error.get().map(|_| error_id.clone())
    };
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();

    view! {
        <div class="form__group form__group--icon">
            <label class="sr-only" for=label_for>{label}</label>
            {icon_name.map(|name| view! { <span class="form__icon">{icon(name)}</span> })}
            <input
                id=id
                class="pill-input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                autocomplete=input_autocomplete
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                aria-describedby=described_by
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            />
            {move || error.get().map(|message| view! {
                <p id=error_id.clone() class="form__error">{message}</p>
            })}
        </div>
    }
}
