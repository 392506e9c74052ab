use super::{DetailState, PageHeader, use_enquiry};
use crate::components::StatusChip;
use crate::pages::ErrorBanner;
use crate::routes::Route;
use erp_core::enquiry::format_created_at;
use erp_core::{ENQUIRY_MENU_KEY, EnquiryDetail};
use erp_frontend_common::{Spinner, use_permission};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EnquiryViewPageProps {
    pub id: i64,
}

#[function_component(EnquiryViewPage)]
pub fn enquiry_view_page(props: &EnquiryViewPageProps) -> Html {
    let id = props.id;
    let navigator = use_navigator();
    let perms = use_permission(ENQUIRY_MENU_KEY);
    let detail = use_enquiry(id);

    let push = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    let on_print = Callback::from(|_: MouseEvent| {
        if let Err(e) = gloo::utils::window().print() {
            tracing::warn!(error = ?e, "Print dialog unavailable");
        }
    });

    let secondary = "px-4 py-2 rounded-md text-sm font-medium border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700";
    let loaded = matches!(detail, DetailState::Loaded(_));

    let content = match &detail {
        DetailState::Loading => html! { <Spinner text="Loading enquiry..." /> },
        DetailState::Failed(message) => html! { <ErrorBanner message={Some(message.clone())} /> },
        DetailState::Loaded(enquiry) => render_detail(enquiry),
    };

    html! {
        <div class="max-w-5xl">
            <PageHeader title={format!("Enquiry #{id}")}>
                <button type="button" class={secondary} onclick={push(Route::Enquiries)}>
                    {"Back"}
                </button>
                if loaded && perms.can_print {
                    <button type="button" class={secondary} onclick={on_print}>
                        {"Print"}
                    </button>
                }
                if loaded && perms.can_edit {
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                        onclick={push(Route::EnquiryEdit { id })}
                    >
                        {"Edit"}
                    </button>
                }
            </PageHeader>
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                {content}
            </div>
        </div>
    }
}

fn render_detail(enquiry: &EnquiryDetail) -> Html {
    let text = |value: Option<&str>| {
        value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("-")
            .to_string()
    };

    let rows = [
        ("Customer", html! { {&enquiry.customer_name} }),
        ("Mobile", html! { {text(enquiry.customer_mobile.as_deref())} }),
        ("Email", html! { {text(enquiry.customer_email.as_deref())} }),
        ("Package", html! { {text(enquiry.package_name.as_deref())} }),
        ("PAX", html! { {enquiry.pax_count} }),
        ("Lead source", html! { {enquiry.lead_source.label()} }),
        (
            "Priority",
            html! { <StatusChip label={enquiry.priority.label()} tone={enquiry.priority.tone()} /> },
        ),
        (
            "Conversion",
            html! {
                <StatusChip
                    label={enquiry.conversion_status.label()}
                    tone={enquiry.conversion_status.tone()}
                />
            },
        ),
        ("Agent", html! { {text(enquiry.agent_name.as_deref())} }),
        ("Created on", html! { {format_created_at(&enquiry.created_at)} }),
    ];

    html! {
        <div class="space-y-6">
            <dl class="grid grid-cols-1 sm:grid-cols-2 gap-x-8 gap-y-4">
                {rows.into_iter().map(|(label, value)| html! {
                    <div>
                        <dt class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">{label}</dt>
                        <dd class="mt-1 text-sm text-gray-900 dark:text-gray-100">{value}</dd>
                    </div>
                }).collect::<Html>()}
            </dl>
            <div>
                <h2 class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">{"Description"}</h2>
                <p class="mt-1 text-sm text-gray-900 dark:text-gray-100 whitespace-pre-line">
                    {text(enquiry.description.as_deref())}
                </p>
            </div>
        </div>
    }
}
