use super::{AuthCard, ErrorBanner};
use crate::routes::{ReplaceRedirect, Route, navigate_to_path};
use erp_core::FieldErrors;
use erp_core::session::safe_redirect_target;
use erp_core::validation::LoginForm;
use erp_frontend_common::auth::AuthAction;
use erp_frontend_common::components::input_classes;
use erp_frontend_common::services::AuthService;
use erp_frontend_common::{FormField, Spinner, use_auth, use_snackbar};
use serde::Deserialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Default, Deserialize)]
struct LoginQuery {
    from: Option<String>,
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let location = use_location();
    let snackbar = use_snackbar();

    let form = use_state(LoginForm::default);
    let errors = use_state(FieldErrors::new);
    let server_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let from = location
        .and_then(|l| l.query::<LoginQuery>().ok())
        .unwrap_or_default()
        .from;
    let target = safe_redirect_target(from.as_deref());

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let form = form.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        let submitting = submitting.clone();
        let target = target.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = match form.validate() {
                Ok(request) => request,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(FieldErrors::new());
            server_error.set(None);
            submitting.set(true);

            let auth = auth.clone();
            let navigator = navigator.clone();
            let snackbar = snackbar.clone();
            let errors = errors.clone();
            let server_error = server_error.clone();
            let submitting = submitting.clone();
            let target = target.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match AuthService::new().login(&request).await {
                    Ok(session) => {
                        snackbar.success("Login successful");
                        if let Some(navigator) = &navigator {
                            navigate_to_path(navigator, &target);
                        }
                        auth.dispatch(AuthAction::Login(session));
                    }
                    Err(e) => {
                        tracing::info!(error = %e, "Login rejected");
                        if let Some(fields) = e.field_errors() {
                            errors.set(fields.clone());
                        }
                        server_error.set(Some(e.user_message("Login failed. Please try again.")));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    if auth.is_authenticated() {
        return html! { <ReplaceRedirect to={Route::Dashboard} /> };
    }

    let expired_notice = auth
        .session_expired
        .then(|| "Your session has expired. Please sign in again.".to_string());

    html! {
        <AuthCard title="Sign in" subtitle="Manage enquiries, bookings and your team">
            <ErrorBanner message={(*server_error).clone().or(expired_notice)} />
            <form onsubmit={on_submit} novalidate=true>
                <FormField label="Email" id="email" required=true error={errors.get("email").map(str::to_string)}>
                    <input
                        id="email"
                        type="email"
                        autocomplete="username"
                        class={input_classes(errors.get("email").is_some())}
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                </FormField>
                <FormField label="Password" id="password" required=true error={errors.get("password").map(str::to_string)}>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        class={input_classes(errors.get("password").is_some())}
                        value={form.password.clone()}
                        oninput={on_password}
                    />
                </FormField>
                <button
                    type="submit"
                    disabled={*submitting}
                    class="w-full mt-2 px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                >
                    if *submitting {
                        <Spinner small=true />
                    } else {
                        {"Sign in"}
                    }
                </button>
            </form>
            <p class="mt-4 text-sm text-center text-gray-600 dark:text-gray-400">
                {"New organization? "}
                <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline dark:text-blue-400">
                    {"Register here"}
                </Link<Route>>
            </p>
        </AuthCard>
    }
}
