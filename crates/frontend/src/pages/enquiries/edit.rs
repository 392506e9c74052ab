use super::{DetailState, PageHeader, use_enquiry};
use crate::components::EnquiryForm;
use crate::pages::ErrorBanner;
use crate::routes::Route;
use crate::services::EnquiryService;
use erp_core::validation::EnquiryFormDraft;
use erp_core::{EnquiryInput, FieldErrors};
use erp_frontend_common::{Spinner, use_snackbar};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EnquiryEditPageProps {
    pub id: i64,
}

#[function_component(EnquiryEditPage)]
pub fn enquiry_edit_page(props: &EnquiryEditPageProps) -> Html {
    let id = props.id;
    let navigator = use_navigator();
    let snackbar = use_snackbar();
    let detail = use_enquiry(id);
    let saving = use_state(|| false);
    let server_errors = use_state(FieldErrors::new);
    let banner = use_state(|| None::<String>);

    let initial = use_memo(detail.clone(), |detail| match detail {
        DetailState::Loaded(detail) => Some(EnquiryFormDraft::from_detail(detail)),
        _ => None,
    });

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
                match EnquiryService::new().update(id, &input).await {
                    Ok(ack) => {
                        tracing::info!(enquiry_id = id, "Enquiry updated");
                        snackbar.success(ack.message.unwrap_or_else(|| "Enquiry updated".to_string()));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::EnquiryView { id });
                        }
                    }
                    Err(e) => {
                        tracing::error!(enquiry_id = id, error = %e, "Failed to update enquiry");
                        let message = e.user_message("Failed to update enquiry");
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
            navigator.push(&Route::EnquiryView { id });
        }
    });

    let content = match (&detail, &*initial) {
        (DetailState::Failed(message), _) => html! {
            <ErrorBanner message={Some(message.clone())} />
        },
        (DetailState::Loaded(_), Some(draft)) => html! {
            <>
                <ErrorBanner message={(*banner).clone()} />
                <EnquiryForm
                    initial={draft.clone()}
                    submit_label="Save changes"
                    busy={*saving}
                    server_errors={(*server_errors).clone()}
                    {on_submit}
                    {on_cancel}
                />
            </>
        },
        _ => html! { <Spinner text="Loading enquiry..." /> },
    };

    html! {
        <div class="max-w-5xl">
            <PageHeader title={format!("Edit enquiry #{id}")} />
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 space-y-4">
                {content}
            </div>
        </div>
    }
}
