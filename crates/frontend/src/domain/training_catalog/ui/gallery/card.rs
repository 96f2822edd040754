use leptos::prelude::*;

use super::presenter::{CatalogPresenter, TrainingCardModel};
use crate::shared::components::ui::{Badge, Button};
use crate::shared::external_link::WindowOpener;
use crate::shared::icons::modality_icon_name;

/// Card for one training: image with chips, text, and the launch button
#[component]
pub fn TrainingCard(card: TrainingCardModel) -> impl IntoView {
    let TrainingCardModel {
        training,
        duration,
        completion,
        affordance,
    } = card;
    let completion_variant = if training.completed { "success" } else { "muted" };

    let image = match training.image_url.clone() {
        Some(src) => view! {
            <img src=src alt="" class="card-training__image" loading="lazy" />
        }
        .into_any(),
        None => view! { <div class="card-training__placeholder">"image"</div> }.into_any(),
    };

    let on_launch = {
        let training = training.clone();
        Callback::new(move |_| {
            CatalogPresenter::launch(&training, &WindowOpener);
        })
    };

    view! {
        <article class="card-training" data-training-id=training.id.as_str().to_string()>
            <div class="card-training__media">
                {image}
                <div class="card-training__shade"></div>
                <div class="card-training__chips">
                    <Badge icon_name=modality_icon_name(training.modality)>
                        {training.modality.code()}
                    </Badge>
                    <Badge icon_name="clock">{duration}</Badge>
                    <Badge variant=completion_variant icon_name="check-circle">
                        {completion}
                    </Badge>
                </div>
            </div>

            <div class="card-training__body">
                <h3 class="card-training__title">{training.title.clone()}</h3>
                <p class="card-training__description">{training.description.clone()}</p>

                <Button
                    variant=if affordance.is_ready() { "launch" } else { "ghost" }
                    class="card-training__launch"
                    disabled=!affordance.is_ready()
                    on_click=on_launch
                >
                    {affordance.label()}
                </Button>
            </div>
        </article>
    }
}
