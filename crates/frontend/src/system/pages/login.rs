use leptos::prelude::*;

use crate::config::brand_initial;
use crate::routes::navigation::use_app_navigator;
use crate::shared::components::ui::{Button, Input};
use crate::system::auth::view_model::LoginViewModel;

#[component]
pub fn LoginPage() -> impl IntoView {
    // Fresh state on every entry; nothing survives navigating away.
    let vm = LoginViewModel::new();
    let navigator = StoredValue::new_local(use_app_navigator());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigator.with_value(|nav| vm.submit(nav));
    };

    view! {
        <main class="immersia-bg">
            <div class="login-container">
                <section class="glass-card" aria-label="Login screen">
                    <header class="login-header">
                        <div class="login-logo">
                            <span>{brand_initial()}</span>
                        </div>
                        <h1>"Login"</h1>
                    </header>

                    <form on:submit=on_submit novalidate=true class="login-form">
                        <Input
                            id="login"
                            label="Username or e-mail"
                            placeholder="Username or e-mail"
                            autocomplete="username"
                            icon_name="user"
                            value=Signal::derive(move || vm.identifier())
                            on_input=Callback::new(move |v: String| vm.set_identifier(v))
                            on_blur=Callback::new(move |_| vm.blur_identifier())
                            error=Signal::derive(move || vm.identifier_error())
                        />

                        <Input
                            id="password"
                            label="Password"
                            placeholder="Password"
                            input_type="password"
                            autocomplete="current-password"
                            icon_name="lock"
                            value=Signal::derive(move || vm.secret())
                            on_input=Callback::new(move |v: String| vm.set_secret(v))
                            on_blur=Callback::new(move |_| vm.blur_secret())
                            error=Signal::derive(move || vm.secret_error())
                        />

                        <div class="login-options">
                            // No persistence and no reset flow: both controls are inert.
                            <label class="login-options__remember">
                                <input type="checkbox" />
                                "Remember me"
                            </label>
                            <Button variant="ghost">"Forgot password"</Button>
                        </div>

                        // Stays clickable so a submit attempt reveals validation messages.
                        <Button button_type="submit" inactive=Signal::derive(move || !vm.can_submit())>
                            "Sign in"
                        </Button>
                    </form>
                </section>
            </div>
        </main>
    }
}
