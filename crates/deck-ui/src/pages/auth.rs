use deck_client::ApiError;
use deck_types::{LoginRequest, RegisterRequest};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::{spawn, use_api};
use crate::routes::AppRoute;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

fn auth_error_message(mode: AuthMode, error: &ApiError) -> String {
    match (mode, error) {
        (AuthMode::Login, ApiError::Unauthorized) => "Invalid username or password".into(),
        (AuthMode::Login, ApiError::RequestFailed { status: 400 }) => {
            "Username and password are required".into()
        }
        (AuthMode::Register, ApiError::RequestFailed { status: 400 }) => {
            "Username or email already taken, or a field is missing".into()
        }
        (_, ApiError::Network { .. }) => "Cannot reach the server".into(),
        (_, other) => format!("{other} ({})", other.status()),
    }
}

/// Serves both `/login` and `/register`.
#[component]
pub fn AuthPage(mode: AuthMode) -> impl IntoView {
    let api = use_api();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errorText = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        errorText.set(None);

        let api = api.clone();
        spawn(async move {
            let result = match mode {
                AuthMode::Login => {
                    let request = LoginRequest {
                        username: username.get_untracked().trim().to_string(),
                        password: password.get_untracked(),
                    };
                    api.client().login(&request).await
                }
                AuthMode::Register => {
                    let request = RegisterRequest {
                        username: username.get_untracked().trim().to_string(),
                        email: email.get_untracked().trim().to_string(),
                        password: password.get_untracked(),
                    };
                    api.client().register(&request).await
                }
            };
            busy.set(false);
            match result {
                Ok(_) => api.navigate(AppRoute::Dashboard),
                Err(e) => errorText.set(Some(auth_error_message(mode, &e))),
            }
        });
    };

    let (heading, submitLabel, switchHref, switchText) = match mode {
        AuthMode::Login => (
            "Sign in",
            "Sign In",
            AppRoute::Register.path(),
            "No account yet? Register",
        ),
        AuthMode::Register => (
            "Create an account",
            "Register",
            AppRoute::Login.path(),
            "Already registered? Sign in",
        ),
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"F"</div>
                    <h1>"Flashdeck"</h1>
                    <p>{heading}</p>
                </div>

                {move || {
                    errorText
                        .get()
                        .map(|message| view! { <div class="login-error">{message}</div> })
                }}

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    {(mode == AuthMode::Register)
                        .then(|| {
                            view! {
                                <div class="form-group">
                                    <label for="email">"Email"</label>
                                    <input
                                        type="email"
                                        id="email"
                                        required
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </div>
                            }
                        })}
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        {submitLabel}
                    </button>
                </form>

                <a class="login-switch" href=switchHref>{switchText}</a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejection_reads_as_bad_credentials() {
        assert_eq!(
            auth_error_message(AuthMode::Login, &ApiError::Unauthorized),
            "Invalid username or password"
        );
    }

    #[test]
    fn register_conflict() {
        let message =
            auth_error_message(AuthMode::Register, &ApiError::RequestFailed { status: 400 });
        assert!(message.starts_with("Username or email already taken"));
    }

    #[test]
    fn server_errors_show_status() {
        assert_eq!(
            auth_error_message(AuthMode::Login, &ApiError::RequestFailed { status: 500 }),
            "Request failed (500)"
        );
        assert_eq!(
            auth_error_message(AuthMode::Register, &ApiError::network("refused")),
            "Cannot reach the server"
        );
    }
}
