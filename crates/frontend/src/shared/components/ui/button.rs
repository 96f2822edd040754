use leptos::prelude::*;

/// Button component with variants (primary, launch, ghost)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "launch", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state. A disabled button never runs `on_click`.
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Looks disabled and sets `aria-disabled`, but still receives clicks
    #[prop(optional, into)]
    inactive: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let is_inactive = move || inactive.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || {
                class_list(
                    variant.get().as_deref(),
                    is_inactive(),
                    &class.get().unwrap_or_default(),
                )
            }
            disabled=is_disabled
            aria-disabled=move || aria_disabled(is_disabled() || is_inactive())
            on:click=move |ev| {
                if is_disabled() {
                    return;
                }
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

fn class_list(variant: Option<&str>, inactive: bool, extra: &str) -> String {
    let variant_class = match variant.unwrap_or("primary") {
        "launch" => "button--launch",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let mut classes = vec!["button", variant_class];
    if inactive {
        classes.push("button--inactive");
    }
    if !extra.is_empty() {
        classes.push(extra);
    }
    classes.join(" ")
}

fn aria_disabled(disabled: bool) -> &'static str {
    if disabled {
        "true"
    } else {
        "false"
    }
}
