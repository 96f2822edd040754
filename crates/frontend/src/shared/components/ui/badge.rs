use leptos::prelude::*;

use crate::shared::icons::icon;

/// Overlay chip placed on top of a card image
#[component]
pub fn Badge(
    /// Badge variant: "success", "muted", or "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Leading icon name from `shared::icons`
    #[prop(optional)]
    icon_name: Option<&'static str>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "success" => "chip-overlay--success",
        "muted" => "chip-overlay--muted",
        _ => "",
    };

    view! {
        <span class=move || format!("chip-overlay {}", variant_class())>
            {icon_name.map(icon)}
            {children()}
        </span>
    }
}
