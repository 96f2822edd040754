use contracts::domain::training_catalog::seed::bundled_catalog;
use contracts::domain::training_catalog::Catalog;
use leptos::prelude::*;

use crate::routes::routes::AppRoutes;

#[component]
pub fn App() -> impl IntoView {
    // Loaded once; the catalog page receives it as an explicit prop.
    let catalog = bundled_catalog().unwrap_or_else(|e| {
        log::error!("training catalog unavailable: {}", e);
        Catalog::default()
    });

    view! {
        <AppRoutes catalog=catalog />
    }
}
