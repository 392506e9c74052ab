use super::{AuthCard, ErrorBanner};
use crate::routes::Route;
use erp_core::FieldErrors;
use erp_core::validation::RegisterOrgForm;
use erp_frontend_common::components::input_classes;
use erp_frontend_common::services::AuthService;
use erp_frontend_common::{AppConfig, FormField, Spinner, use_snackbar};
use gloo::timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Text fields of the registration form, in display order
const FIELDS: [(&str, &str, &str, &str); 6] = [
    ("organization_name", "Organization name", "text", "organization"),
    ("country_code", "Country code", "text", "country"),
    ("admin_name", "Admin name", "text", "name"),
    ("email", "Admin email", "email", "email"),
    ("mobile", "Mobile", "tel", "tel"),
    ("password", "Password", "password", "new-password"),
];

fn field_value<'a>(form: &'a RegisterOrgForm, field: &str) -> &'a str {
    match field {
        "organization_name" => &form.organization_name,
        "country_code" => &form.country_code,
        "admin_name" => &form.admin_name,
        "email" => &form.email,
        "mobile" => &form.mobile,
        "password" => &form.password,
        _ => "",
    }
}

fn set_field(form: &mut RegisterOrgForm, field: &str, value: String) {
    match field {
        "organization_name" => form.organization_name = value,
        "country_code" => form.country_code = value,
        "admin_name" => form.admin_name = value,
        "email" => form.email = value,
        "mobile" => form.mobile = value,
        "password" => form.password = value,
        _ => {}
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator();
    let snackbar = use_snackbar();

    let form = use_state(RegisterOrgForm::default);
    let errors = use_state(FieldErrors::new);
    let server_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let redirect_timer = use_mut_ref(|| None::<Timeout>);

    let on_input = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |(field, value): (&'static str, String)| {
            let mut next = (*form).clone();
            set_field(&mut next, field, value);
            form.set(next);
            if errors.get(field).is_some() {
                let remaining = errors
                    .iter()
                    .filter(|(name, _)| *name != field)
                    .collect::<FieldErrors>();
                errors.set(remaining);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        let submitting = submitting.clone();
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

            let navigator = navigator.clone();
            let snackbar = snackbar.clone();
            let errors = errors.clone();
            let server_error = server_error.clone();
            let submitting = submitting.clone();
            let redirect_timer = redirect_timer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match AuthService::new().register(&request).await {
                    Ok(response) => {
                        tracing::info!(organization = %request.organization.name, "Organization registered");
                        snackbar.success(response.message.unwrap_or_else(|| {
                            "Organization registered. Please sign in.".to_string()
                        }));
                        *redirect_timer.borrow_mut() = Some(Timeout::new(
                            AppConfig::REGISTER_REDIRECT_DELAY_MS,
                            move || {
                                if let Some(navigator) = navigator {
                                    navigator.push(&Route::Login);
                                }
                            },
                        ));
                    }
                    Err(e) => {
                        if let Some(fields) = e.field_errors() {
                            errors.set(RegisterOrgForm::map_server_errors(fields));
                        }
                        let message = e.user_message("Registration failed. Please try again.");
                        snackbar.error(message.clone());
                        server_error.set(Some(message));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let fields = FIELDS
        .iter()
        .map(|&(name, label, kind, autocomplete)| {
            let oninput = {
                let on_input = on_input.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_input.emit((name, input.value()));
                })
            };
            let error = errors.get(name).map(str::to_string);
            let help = match name {
                "country_code" => Some("Two-letter ISO code, e.g. IN".to_string()),
                "password" => Some("8 to 72 characters".to_string()),
                _ => None,
            };
            html! {
                <FormField
                    key={name}
                    label={label}
                    id={name}
                    required={name != "mobile"}
                    error={error.clone()}
                    help_text={help}
                >
                    <input
                        id={name}
                        type={kind}
                        autocomplete={autocomplete}
                        class={input_classes(error.is_some())}
                        value={field_value(&form, name).to_string()}
                        {oninput}
                    />
                </FormField>
            }
        })
        .collect::<Html>();

    html! {
        <AuthCard title="Register organization" subtitle="Set up your agency and its first administrator">
            <ErrorBanner message={(*server_error).clone()} />
            <form onsubmit={on_submit} novalidate=true>
                {fields}
                <button
                    type="submit"
                    disabled={*submitting}
                    class="w-full mt-2 px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                >
                    if *submitting {
                        <Spinner small=true />
                    } else {
                        {"Create organization"}
                    }
                </button>
            </form>
            <p class="mt-4 text-sm text-center text-gray-600 dark:text-gray-400">
                {"Already registered? "}
                <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline dark:text-blue-400">
                    {"Sign in"}
                </Link<Route>>
            </p>
        </AuthCard>
    }
}
