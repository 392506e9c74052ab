//! New/existing pickers for the enquiry's customer and package
//!
//! In `Existing` mode the selector searches the backend and reports the
//! chosen record; in `New` mode it only shows the toggle and the form
//! renders the free-text fields itself.

use crate::services::EnquiryService;
use erp_core::enquiry::{CustomerOption, PackageOption};
use erp_core::validation::SelectionMode;
use erp_frontend_common::{SearchInput, Spinner, use_request_generation};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CustomerSelectorProps {
    pub mode: SelectionMode,
    pub on_mode: Callback<SelectionMode>,
    pub selected: Option<i64>,
    /// Name of the selected customer, shown above the results
    #[prop_or_default]
    pub selected_name: AttrValue,
    pub on_select: Callback<CustomerOption>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(CustomerSelector)]
pub fn customer_selector(props: &CustomerSelectorProps) -> Html {
    let lookup = use_lookup::<CustomerOption, _, _>(|term| async move {
        EnquiryService::new().search_customers(&term).await
    });

    let options = lookup
        .results
        .iter()
        .map(|customer| {
            let on_select = props.on_select.clone();
            let chosen = customer.clone();
            LookupRow {
                id: customer.id,
                title: customer.name.clone(),
                detail: customer.mobile.clone(),
                on_click: Callback::from(move |_| on_select.emit(chosen.clone())),
            }
        })
        .collect();

    render_selector(SelectorView {
        legend: "Customer",
        placeholder: "Search customers by name or mobile",
        mode: props.mode,
        on_mode: &props.on_mode,
        selected: props.selected,
        selected_name: &props.selected_name,
        error: props.error.as_deref(),
        lookup: &lookup,
        options,
    })
}

#[derive(Properties, PartialEq)]
pub struct PackageSelectorProps {
    pub mode: SelectionMode,
    pub on_mode: Callback<SelectionMode>,
    pub selected: Option<i64>,
    #[prop_or_default]
    pub selected_name: AttrValue,
    pub on_select: Callback<PackageOption>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(PackageSelector)]
pub fn package_selector(props: &PackageSelectorProps) -> Html {
    let lookup = use_lookup::<PackageOption, _, _>(|term| async move {
        EnquiryService::new().search_packages(&term).await
    });

    let options = lookup
        .results
        .iter()
        .map(|package| {
            let on_select = props.on_select.clone();
            let chosen = package.clone();
            LookupRow {
                id: package.id,
                title: package.name.clone(),
                detail: None,
                on_click: Callback::from(move |_| on_select.emit(chosen.clone())),
            }
        })
        .collect();

    render_selector(SelectorView {
        legend: "Package",
        placeholder: "Search packages",
        mode: props.mode,
        on_mode: &props.on_mode,
        selected: props.selected,
        selected_name: &props.selected_name,
        error: props.error.as_deref(),
        lookup: &lookup,
        options,
    })
}

struct Lookup<T> {
    term: String,
    results: Rc<Vec<T>>,
    loading: bool,
    failed: bool,
    on_search: Callback<String>,
}

/// Backend search where only the latest request may update the results
#[hook]
fn use_lookup<T, F, Fut>(fetch: F) -> Lookup<T>
where
    T: Clone + 'static,
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, erp_http::ClientError>> + 'static,
{
    let term = use_state(String::new);
    let results = use_state(|| Rc::new(Vec::<T>::new()));
    let loading = use_state(|| false);
    let failed = use_state(|| false);
    let generation = use_request_generation();
    let fetch = use_memo((), move |_| fetch);

    let on_search = {
        let term = term.clone();
        let results = results.clone();
        let loading = loading.clone();
        let failed = failed.clone();
        let generation = generation.clone();
        Callback::from(move |text: String| {
            let ticket = generation.begin();
            term.set(text.clone());

            if text.trim().is_empty() {
                results.set(Rc::new(Vec::new()));
                loading.set(false);
                failed.set(false);
                return;
            }

            loading.set(true);
            let results = results.clone();
            let loading = loading.clone();
            let failed = failed.clone();
            let request = fetch(text.trim().to_string());
            spawn_local(async move {
                let outcome = request.await;
                if !ticket.is_current() {
                    return;
                }
                match outcome {
                    Ok(found) => {
                        results.set(Rc::new(found));
                        failed.set(false);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Lookup failed");
                        results.set(Rc::new(Vec::new()));
                        failed.set(true);
                    }
                }
                loading.set(false);
            });
        })
    };

    Lookup {
        term: (*term).clone(),
        results: (*results).clone(),
        loading: *loading,
        failed: *failed,
        on_search,
    }
}

struct LookupRow {
    id: i64,
    title: String,
    detail: Option<String>,
    on_click: Callback<MouseEvent>,
}

struct SelectorView<'a, T> {
    legend: &'static str,
    placeholder: &'static str,
    mode: SelectionMode,
    on_mode: &'a Callback<SelectionMode>,
    selected: Option<i64>,
    selected_name: &'a AttrValue,
    error: Option<&'a str>,
    lookup: &'a Lookup<T>,
    options: Vec<LookupRow>,
}

fn render_selector<T>(view: SelectorView<'_, T>) -> Html {
    let toggle = |mode: SelectionMode, label: &'static str| {
        let on_mode = view.on_mode.clone();
        let active = view.mode == mode;
        html! {
            <button
                type="button"
                class={classes!(
                    "px-3", "py-1.5", "text-sm", "font-medium", "first:rounded-l-md", "last:rounded-r-md", "border",
                    if active {
                        "bg-blue-600 border-blue-600 text-white"
                    } else {
                        "bg-white dark:bg-gray-800 border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-200"
                    }
                )}
                aria-pressed={active.to_string()}
                onclick={Callback::from(move |_| on_mode.emit(mode))}
            >
                {label}
            </button>
        }
    };

    let lookup = view.lookup;
    let body = if view.mode == SelectionMode::Existing {
        let results = if lookup.loading {
            html! { <Spinner small=true text="Searching..." /> }
        } else if lookup.failed {
            html! { <p class="text-sm text-red-600 dark:text-red-400">{"Search failed, try again"}</p> }
        } else if !lookup.term.trim().is_empty() && view.options.is_empty() {
            html! { <p class="text-sm text-gray-500 dark:text-gray-400">{"No matches"}</p> }
        } else {
            html! {
                <ul class="max-h-48 overflow-y-auto divide-y divide-gray-100 dark:divide-gray-700 border border-gray-200 dark:border-gray-700 rounded-md">
                    {view.options.into_iter().map(|row| {
                        let chosen = view.selected == Some(row.id);
                        html! {
                            <li key={row.id.to_string()}>
                                <button
                                    type="button"
                                    class={classes!(
                                        "w-full", "text-left", "px-3", "py-2", "text-sm", "hover:bg-gray-50", "dark:hover:bg-gray-700",
                                        chosen.then_some("bg-blue-50 dark:bg-blue-900/20")
                                    )}
                                    onclick={row.on_click}
                                >
                                    <span class="font-medium text-gray-900 dark:text-gray-100">{row.title}</span>
                                    if let Some(detail) = row.detail {
                                        <span class="ml-2 text-gray-500 dark:text-gray-400">{detail}</span>
                                    }
                                </button>
                            </li>
                        }
                    }).collect::<Html>()}
                </ul>
            }
        };

        html! {
            <div class="space-y-2">
                if view.selected.is_some() {
                    <p class="text-sm text-gray-700 dark:text-gray-300">
                        {"Selected: "}
                        <span class="font-medium">{view.selected_name.clone()}</span>
                    </p>
                }
                <SearchInput
                    value={AttrValue::from(lookup.term.clone())}
                    on_search={lookup.on_search.clone()}
                    placeholder={view.placeholder}
                />
                {results}
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <fieldset class="space-y-3">
            <div class="flex items-center justify-between">
                <legend class="text-sm font-medium text-gray-700 dark:text-gray-300">
                    {view.legend}<span class="text-red-500">{" *"}</span>
                </legend>
                <div class="inline-flex" role="group">
                    {toggle(SelectionMode::New, "New")}
                    {toggle(SelectionMode::Existing, "Existing")}
                </div>
            </div>
            {body}
            if let Some(error) = view.error {
                if view.mode == SelectionMode::Existing {
                    <p class="text-xs text-red-600 dark:text-red-400" role="alert">{error}</p>
                }
            }
        </fieldset>
    }
}
