use super::PageHeader;
use crate::components::EnquiryForm;
use crate::pages::ErrorBanner;
use crate::routes::Route;
use crate::services::EnquiryService;
use erp_core::{EnquiryInput, FieldErrors};
use erp_frontend_common::use_snackbar;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(EnquiryCreatePage)]
pub fn enquiry_create_page() -> Html {
    let navigator = use_navigator();
    let snackbar = use_snackbar();
    let saving = use_state(|| false);
    let server_errors = use_state(FieldErrors::new);
    let banner = use_state(|| None::<String>);

    let on_submit = {
        let navigator = navigator.clone();
        let saving = saving.clone();
        let server_errors = server_errors.clone();
        let banner = banner.clone();
        let snackbar = snackbar.clone();
        Callback::from(move |input: EnquiryInput| {
            let navigator = navigator.clone();
            let saving = saving.clone();
            let server_errors = server_errors.clone();
            let banner = banner.clone();
            let snackbar = snackbar.clone();
            saving.set(true);
            banner.set(None);

            spawn_local(async move {
                match EnquiryService::new().create(&input).await {
                    Ok(ack) => {
                        tracing::info!(enquiry_id = ?ack.id, "Enquiry created");
                        snackbar.success(ack.message.unwrap_or_else(|| "Enquiry created".to_string()));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Enquiries);
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to create enquiry");
                        let message = e.user_message("Failed to create enquiry");
                        if let Some(fields) = e.field_errors() {
                            server_errors.set(fields.clone());
                        }
                        snackbar.error(message.clone());
                        banner.set(Some(message));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Enquiries);
        }
    });

    html! {
        <div class="max-w-5xl">
            <PageHeader title="New enquiry" subtitle={AttrValue::Static("Capture a customer's travel request")} />
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 space-y-4">
                <ErrorBanner message={(*banner).clone()} />
                <EnquiryForm
                    submit_label="Create enquiry"
                    busy={*saving}
                    server_errors={(*server_errors).clone()}
                    {on_submit}
                    {on_cancel}
                />
            </div>
        </div>
    }
}
