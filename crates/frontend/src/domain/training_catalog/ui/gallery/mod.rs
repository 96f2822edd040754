pub mod card;
pub mod presenter;

use contracts::domain::training_catalog::Catalog;
use leptos::prelude::*;

use crate::layout::header::Topbar;
use card::TrainingCard;
use presenter::CatalogPresenter;

/// Catalog view: every training once, grouped by module, in seed order
#[component]
pub fn TrainingGalleryPage(catalog: Catalog) -> impl IntoView {
    let presenter = CatalogPresenter::new(catalog);
    let is_empty = presenter.is_empty();

    let sections = presenter
        .sections()
        .into_iter()
        .map(|section| {
            let cards = section
                .cards
                .into_iter()
                .map(|card| view! { <TrainingCard card=card /> })
                .collect_view();

            view! {
                <div class="module-section" data-module-id=section.id.as_str().to_string()>
                    <div class="module-section__header">
                        <h2>{section.name}</h2>
                        <div class="module-section__rule"></div>
                    </div>
                    <div class="module-section__grid">{cards}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <main class="immersia-bg">
            <Topbar presenter=presenter.clone() />

            <section class="container-page">
                <h1 class="gallery-title">"Welcome back"</h1>
                <p class="gallery-subtitle">"Choose a training to continue."</p>

                <Show when=move || is_empty>
                    <p class="gallery-empty">"No trainings available yet."</p>
                </Show>
                <div class="gallery-modules">{sections}</div>
            </section>
        </main>
    }
}
