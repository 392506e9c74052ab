//! Enquiry list: search, filters, paging, bulk actions, import and export
//!
//! The URL query is the list state. Every toolbar action navigates to a new
//! query and the fetch effect follows the parsed value.

use crate::components::{EnquiryFiltersPanel, EnquiryTable, PaginationBar, RowAction};
use crate::routes::Route;
use crate::services::EnquiryService;
use erp_core::{ENQUIRY_MENU_KEY, EnquiryFilters, EnquiryListQuery, EnquiryListResponse, ExportFormat};
use erp_frontend_common::{
    AppConfig, ConfirmDialog, SearchInput, Spinner, use_permission, use_request_generation,
    use_snackbar,
};
use std::collections::HashSet;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// What the confirmation dialog is about to delete
#[derive(Clone, Debug, PartialEq)]
enum PendingDelete {
    One(i64),
    Selected(Vec<i64>),
}

impl PendingDelete {
    fn message(&self) -> String {
        match self {
            Self::One(id) => format!("Delete enquiry #{id}? This cannot be undone."),
            Self::Selected(ids) => {
                format!("Delete {} selected enquiries? This cannot be undone.", ids.len())
            }
        }
    }
}

#[function_component(EnquiryListPage)]
pub fn enquiry_list_page() -> Html {
    let navigator = use_navigator();
    let location = use_location();
    let snackbar = use_snackbar();
    let perms = use_permission(ENQUIRY_MENU_KEY);

    let query = location
        .map(|l| EnquiryListQuery::from_query_str(l.query_str()))
        .unwrap_or_default();

    let response = use_state(|| None::<EnquiryListResponse>);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);
    let generation = use_request_generation();
    let selected = use_state(HashSet::<i64>::new);
    let filters_open = use_state(|| !query.filters.is_empty());
    let export_open = use_state(|| false);
    let pending_delete = use_state(|| None::<PendingDelete>);
    let deleting = use_state(|| false);
    let importing = use_state(|| false);
    let file_input = use_node_ref();

    let go = {
        let navigator = navigator.clone();
        Callback::from(move |next: EnquiryListQuery| {
            let Some(navigator) = &navigator else { return };
            if let Err(e) = navigator.push_with_query(&Route::Enquiries, &next.to_pairs()) {
                tracing::warn!(error = %e, "Could not update list query");
            }
        })
    };

    {
        let response = response.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let selected = selected.clone();
        let navigator = navigator.clone();
        use_effect_with((query.clone(), *reload), move |(query, _)| {
            let ticket = generation.begin();
            let query = query.clone();
            loading.set(true);
            selected.set(HashSet::new());

            spawn_local(async move {
                let result = EnquiryService::new().list(&query).await;
                if !ticket.is_current() {
                    return;
                }
                match result {
                    Ok(list) => {
                        if list.data.is_empty()
                            && let Some(clamped) = query.clamp_to(&list.pagination)
                            && let Some(navigator) = &navigator
                        {
                            tracing::debug!(page = clamped.page, "Page past the end, moving back");
                            if let Err(e) =
                                navigator.replace_with_query(&Route::Enquiries, &clamped.to_pairs())
                            {
                                tracing::warn!(error = %e, "Could not move back to the last page");
                            }
                        }
                        load_error.set(None);
                        response.set(Some(list));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load enquiries");
                        load_error.set(Some(e.user_message("Failed to load enquiries")));
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_search = {
        let go = go.clone();
        let query = query.clone();
        Callback::from(move |text: String| {
            let next = query.with_search(&text);
            if next != query {
                go.emit(next);
            }
        })
    };

    let on_apply_filters = {
        let go = go.clone();
        let query = query.clone();
        Callback::from(move |filters: EnquiryFilters| go.emit(query.with_filters(filters)))
    };

    let on_reset_filters = {
        let go = go.clone();
        let query = query.clone();
        Callback::from(move |()| go.emit(query.reset_filters()))
    };

    let on_page = {
        let go = go.clone();
        let query = query.clone();
        Callback::from(move |page: u32| go.emit(query.with_page(page)))
    };

    let on_page_size = {
        let go = go.clone();
        let query = query.clone();
        Callback::from(move |size: u32| go.emit(query.with_page_size(size)))
    };

    let toggle_filters = {
        let filters_open = filters_open.clone();
        Callback::from(move |_: MouseEvent| filters_open.set(!*filters_open))
    };

    let on_refresh = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(reload.wrapping_add(1)))
    };

    let on_add = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::EnquiryCreate);
            }
        })
    };

    let on_toggle_row = {
        let selected = selected.clone();
        Callback::from(move |id: i64| {
            let mut next = (*selected).clone();
            if !next.remove(&id) {
                next.insert(id);
            }
            selected.set(next);
        })
    };

    let on_toggle_all = {
        let selected = selected.clone();
        let response = response.clone();
        Callback::from(move |select_all: bool| {
            let next = match (select_all, (*response).as_ref()) {
                (true, Some(list)) => list.data.iter().map(|row| row.id).collect(),
                _ => HashSet::new(),
            };
            selected.set(next);
        })
    };

    let on_row_action = {
        let navigator = navigator.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |(action, id): (RowAction, i64)| match action {
            RowAction::View => {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::EnquiryView { id });
                }
            }
            RowAction::Edit => {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::EnquiryEdit { id });
                }
            }
            RowAction::Delete => pending_delete.set(Some(PendingDelete::One(id))),
        })
    };

    let on_bulk_delete = {
        let selected = selected.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: MouseEvent| {
            let mut ids: Vec<i64> = selected.iter().copied().collect();
            ids.sort_unstable();
            if !ids.is_empty() {
                pending_delete.set(Some(PendingDelete::Selected(ids)));
            }
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |()| pending_delete.set(None))
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let deleting = deleting.clone();
        let reload = reload.clone();
        let snackbar = snackbar.clone();
        Callback::from(move |()| {
            let Some(target) = (*pending_delete).clone() else { return };
            let pending_delete = pending_delete.clone();
            let deleting = deleting.clone();
            let reload = reload.clone();
            let snackbar = snackbar.clone();
            deleting.set(true);

            spawn_local(async move {
                let service = EnquiryService::new();
                match target {
                    PendingDelete::One(id) => match service.delete(id).await {
                        Ok(()) => {
                            tracing::info!(enquiry_id = id, "Enquiry deleted");
                            snackbar.success("Enquiry deleted");
                        }
                        Err(e) => {
                            tracing::error!(enquiry_id = id, error = %e, "Failed to delete enquiry");
                            snackbar.error(e.user_message("Failed to delete enquiry"));
                        }
                    },
                    PendingDelete::Selected(ids) => match service.delete_many(&ids).await {
                        Ok(outcome) if outcome.failed.is_empty() => {
                            snackbar.success(outcome.message());
                        }
                        Ok(outcome) => snackbar.error(outcome.message()),
                        Err(e) => snackbar.error(e.user_message("Failed to delete enquiries")),
                    },
                }
                deleting.set(false);
                pending_delete.set(None);
                reload.set(reload.wrapping_add(1));
            });
        })
    };

    let on_import_click = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_import_file = {
        let importing = importing.clone();
        let reload = reload.clone();
        let snackbar = snackbar.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Allow picking the same file again
            input.set_value("");

            let file = gloo::file::File::from(file);
            if file.size() > AppConfig::IMPORT_MAX_BYTES {
                snackbar.error("File is too large to import");
                return;
            }

            let importing = importing.clone();
            let reload = reload.clone();
            let snackbar = snackbar.clone();
            importing.set(true);
            spawn_local(async move {
                let name = file.name();
                let mime = file.raw_mime_type();
                match gloo::file::futures::read_as_bytes(&file).await {
                    Ok(bytes) => {
                        match EnquiryService::new().import(name.clone(), bytes, &mime).await {
                            Ok(summary) => {
                                tracing::info!(file = %name, imported = summary.imported, failed = summary.failed, "Import finished");
                                if summary.failed == 0 {
                                    snackbar.success(summary.describe());
                                } else {
                                    snackbar.info(summary.describe());
                                }
                                reload.set(reload.wrapping_add(1));
                            }
                            Err(e) => {
                                tracing::error!(file = %name, error = %e, "Import failed");
                                snackbar.error(e.user_message("Import failed"));
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!(file = %name, error = %e, "Could not read import file");
                        snackbar.error("Could not read the selected file");
                    }
                }
                importing.set(false);
            });
        })
    };

    let toggle_export = {
        let export_open = export_open.clone();
        Callback::from(move |_: MouseEvent| export_open.set(!*export_open))
    };

    let export_item = |format: ExportFormat| {
        let export_open = export_open.clone();
        let snackbar = snackbar.clone();
        let query = query.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            export_open.set(false);
            let opened = EnquiryService::new()
                .export_url(format, &query)
                .map_err(|e| e.user_message("Export failed"))
                .and_then(|url| {
                    tracing::info!(format = format.as_param(), "Opening export");
                    gloo::utils::window()
                        .open_with_url_and_target(&url, "_blank")
                        .ok()
                        .flatten()
                        .map(drop)
                        .ok_or_else(|| "Allow pop-ups to download the export".to_string())
                });
            if let Err(message) = opened {
                snackbar.error(message);
            }
        });
        html! {
            <button
                type="button"
                class="block w-full text-left px-4 py-2 text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700"
                {onclick}
            >
                {format.label()}
            </button>
        }
    };

    let active_filters = query.filters.active_count();
    let selection_count = selected.len();
    let toolbar_button = "inline-flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-200 bg-white dark:bg-gray-800 hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-50";

    let body = match (&*response, &*load_error) {
        (_, Some(message)) => html! {
            <div class="p-8 text-center">
                <p class="text-red-600 dark:text-red-400">{message}</p>
                <button type="button" class={classes!(toolbar_button, "mt-4")} onclick={on_refresh.clone()}>
                    {"Try again"}
                </button>
            </div>
        },
        (None, None) => html! { <div class="p-8"><Spinner text="Loading enquiries..." /></div> },
        (Some(list), None) if list.data.is_empty() => html! {
            <div class="p-8 text-center text-gray-500 dark:text-gray-400">
                {if query.search.is_some() || active_filters > 0 {
                    "No enquiries match the current search and filters"
                } else {
                    "No enquiries yet"
                }}
            </div>
        },
        (Some(list), None) => html! {
            <>
                <div class={classes!("relative", loading.then_some("opacity-60"))}>
                    <EnquiryTable
                        rows={list.data.clone()}
                        selected={(*selected).clone()}
                        selectable={perms.can_delete}
                        can_view={perms.can_view}
                        can_edit={perms.can_edit}
                        can_delete={perms.can_delete}
                        on_toggle_row={on_toggle_row}
                        on_toggle_all={on_toggle_all}
                        on_action={on_row_action}
                    />
                </div>
                <PaginationBar
                    pagination={list.pagination}
                    on_page={on_page}
                    on_page_size={on_page_size}
                />
            </>
        },
    };

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-gray-100">{"Enquiries"}</h1>
                    if let Some(list) = &*response {
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            {format!("{} total", list.pagination.total)}
                        </p>
                    }
                </div>
                <div class="flex flex-wrap items-center gap-2">
                    if perms.can_import {
                        <input
                            ref={file_input}
                            type="file"
                            class="hidden"
                            accept={AppConfig::IMPORT_ACCEPT}
                            onchange={on_import_file}
                        />
                        <button type="button" class={toolbar_button} onclick={on_import_click} disabled={*importing}>
                            {if *importing { "Importing..." } else { "Import" }}
                        </button>
                    }
                    if perms.can_export {
                        <div class="relative">
                            <button type="button" class={toolbar_button} onclick={toggle_export} aria-haspopup="menu">
                                {"Export"}
                            </button>
                            if *export_open {
                                <div class="absolute right-0 mt-2 w-44 z-20 rounded-md shadow-lg bg-white dark:bg-gray-800 ring-1 ring-black/5 py-1" role="menu">
                                    {ExportFormat::ALL.into_iter().map(export_item).collect::<Html>()}
                                </div>
                            }
                        </div>
                    }
                    if perms.can_create {
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                            onclick={on_add}
                        >
                            {"Add enquiry"}
                        </button>
                    }
                </div>
            </div>

            <div class="bg-white dark:bg-gray-800 rounded-lg shadow">
                <div class="flex flex-wrap items-center gap-3 p-4 border-b border-gray-200 dark:border-gray-700">
                    <div class="flex-1 min-w-[16rem]">
                        <SearchInput
                            value={AttrValue::from(query.search.clone().unwrap_or_default())}
                            on_search={on_search}
                            placeholder="Search by customer, mobile or package"
                        />
                    </div>
                    <button type="button" class={toolbar_button} onclick={toggle_filters} aria-expanded={filters_open.to_string()}>
                        {"Filters"}
                        if active_filters > 0 {
                            <span class="inline-flex items-center justify-center w-5 h-5 rounded-full bg-blue-600 text-white text-xs">
                                {active_filters}
                            </span>
                        }
                    </button>
                    <button type="button" class={toolbar_button} onclick={on_refresh} disabled={*loading}>
                        {"Refresh"}
                    </button>
                    if perms.can_delete && selection_count > 0 {
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium text-white bg-red-600 hover:bg-red-700"
                            onclick={on_bulk_delete}
                        >
                            {format!("Delete selected ({selection_count})")}
                        </button>
                    }
                </div>

                if *filters_open {
                    <EnquiryFiltersPanel
                        filters={query.filters.clone()}
                        on_apply={on_apply_filters}
                        on_reset={on_reset_filters}
                    />
                }

                {body}
            </div>

            <ConfirmDialog
                open={pending_delete.is_some()}
                title="Delete enquiry"
                message={(*pending_delete).as_ref().map(PendingDelete::message).unwrap_or_default()}
                confirm_label="Delete"
                busy={*deleting}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_prompts_name_their_target() {
        assert_eq!(
            PendingDelete::One(12).message(),
            "Delete enquiry #12? This cannot be undone."
        );
        assert_eq!(
            PendingDelete::Selected(vec![1, 2, 3]).message(),
            "Delete 3 selected enquiries? This cannot be undone."
        );
    }
}
