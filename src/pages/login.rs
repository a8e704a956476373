//! Login page: email/password form that trades credentials for a bearer
//! token.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::forms::login::{LoginForm, LoginFormErrors};
use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::{session, toasts};

pub const INVALID_CREDENTIALS: &str = "Email or password is incorrect.";
pub const LOGIN_FAILED: &str = "Could not sign in. Please try again.";

/// Login page.
///
/// Empty fields short-circuit with inline messages and no network call.
/// The submit button is disabled while a request is in flight.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginFormErrors::default());
    let submitting = RwSignal::new(false);

    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(LoginFormErrors::default());
        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            submit_login(request, navigate).await;
            submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-page__card" on:submit=on_submit>
                <h1>"Stockroom"</h1>
                <p class="login-page__hint">"Sign in to manage products."</p>

                <label class="field">
                    "Email"
                    <input
                        class="field__input"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    errors.get().email.map(|msg| view! { <p class="field__error">{msg}</p> })
                }}

                <label class="field">
                    "Password"
                    <input
                        class="field__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    errors.get().password.map(|msg| view! { <p class="field__error">{msg}</p> })
                }}

                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

/// Submit credentials; on success store the token and move to the products
/// page. An HTTP 200 without a token in the body still counts as a failure.
async fn submit_login(request: LoginRequest, navigate: impl Fn(&str, NavigateOptions)) {
    match api::login(&request).await {
        Ok(response) => match response.token() {
            Some(token) => {
                session::set_token(token);
                toasts::success("Signed in.");
                navigate("/products", NavigateOptions::default());
            }
            None => toasts::error(LOGIN_FAILED),
        },
        Err(err) if err.is_bad_request() => toasts::error(INVALID_CREDENTIALS),
        Err(err) => {
            log::warn!("login failed: {err}");
            toasts::error(LOGIN_FAILED);
        }
    }
}
