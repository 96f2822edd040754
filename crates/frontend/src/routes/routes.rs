use contracts::domain::training_catalog::Catalog;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::training_catalog::ui::gallery::TrainingGalleryPage;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes(catalog: Catalog) -> impl IntoView {
    view! {
        <Router>
            // Unknown paths land on the login form.
            <Routes fallback=|| view! { <LoginPage /> }>
                <Route path=path!("/") view=LoginPage />
                <Route
                    path=path!("/gallery")
                    view=move || view! { <TrainingGalleryPage catalog=catalog.clone() /> }
                />
            </Routes>
        </Router>
    }
}
