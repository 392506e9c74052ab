mod create;
mod edit;
mod list;
mod view;

pub use create::EnquiryCreatePage;
pub use edit::EnquiryEditPage;
pub use list::EnquiryListPage;
pub use view::EnquiryViewPage;

use crate::services::EnquiryService;
use erp_core::EnquiryDetail;
use erp_frontend_common::use_request_generation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Load state of a single enquiry
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(EnquiryDetail),
    Failed(String),
}

/// Fetch an enquiry, refetching when the id changes
#[hook]
pub fn use_enquiry(id: i64) -> DetailState {
    let state = use_state(|| DetailState::Loading);
    let generation = use_request_generation();

    {
        let state = state.clone();
        use_effect_with(id, move |&id| {
            let ticket = generation.begin();
            state.set(DetailState::Loading);
            spawn_local(async move {
                let result = EnquiryService::new().get(id).await;
                if !ticket.is_current() {
                    return;
                }
                match result {
                    Ok(detail) => state.set(DetailState::Loaded(detail)),
                    Err(e) => {
                        tracing::error!(enquiry_id = id, error = %e, "Failed to load enquiry");
                        state.set(DetailState::Failed(e.user_message("Failed to load enquiry")));
                    }
                }
            });
        });
    }

    (*state).clone()
}

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Page title with actions on the right
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
            <div>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-gray-100">{&props.title}</h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-sm text-gray-500 dark:text-gray-400">{subtitle}</p>
                }
            </div>
            <div class="flex items-center gap-2 print:hidden">{props.children.clone()}</div>
        </div>
    }
}
