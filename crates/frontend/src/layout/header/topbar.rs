use leptos::prelude::*;

use crate::domain::training_catalog::ui::gallery::presenter::CatalogPresenter;
use crate::routes::navigation::{use_app_navigator, Destination, Navigator};
use crate::shared::icons::icon;

/// Top bar of the catalog: home link and the profile menu with logout
#[component]
pub fn Topbar(presenter: CatalogPresenter) -> impl IntoView {
    let navigator = StoredValue::new_local(use_app_navigator());
    let presenter = StoredValue::new(presenter);
    let menu_open = RwSignal::new(false);

    let on_home = move |_: leptos::ev::MouseEvent| {
        navigator.with_value(|nav| nav.navigate(Destination::Catalog));
    };
    let on_logout = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        navigator.with_value(|nav| presenter.with_value(|p| p.logout(nav)));
    };

    view! {
        <header data-zone="header" class="topbar">
            <div class="topbar__content">
                <button type="button" class="button button--ghost" on:click=on_home>
                    "Home"
                </button>

                <div class="profile-menu">
                    <button
                        type="button"
                        class="chip"
                        aria-label="Open user menu"
                        aria-haspopup="menu"
                        aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "Profile"
                        {icon("chevron-down")}
                    </button>

                    <Show when=move || menu_open.get()>
                        <div class="profile-menu__content" role="menu">
                            <button type="button" role="menuitem" class="profile-menu__item" on:click=on_logout>
                                {icon("log-out")}
                                "Log out"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
