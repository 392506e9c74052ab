//! Collapsible filter panel of the enquiry list

use erp_core::{ConversionStatus, EnquiryFilters, LeadSource};
use erp_frontend_common::FormField;
use erp_frontend_common::components::input_classes;
use std::str::FromStr;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EnquiryFiltersPanelProps {
    /// Filters currently applied to the list
    pub filters: EnquiryFilters,
    pub on_apply: Callback<EnquiryFilters>,
    pub on_reset: Callback<()>,
}

/// Edits a local copy of the filters; nothing reaches the list until Apply
#[function_component(EnquiryFiltersPanel)]
pub fn enquiry_filters_panel(props: &EnquiryFiltersPanelProps) -> Html {
    let draft = use_state(|| props.filters.clone());

    {
        let draft = draft.clone();
        use_effect_with(props.filters.clone(), move |filters| {
            draft.set(filters.clone());
        });
    }

    let update = |apply: fn(&mut EnquiryFilters, String)| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        }
    };

    let on_status = select_handler(update(|f, v| f.conversion_status = parse_choice(&v)));
    let on_source = select_handler(update(|f, v| f.lead_source = parse_choice(&v)));
    let on_agent = input_handler(update(|f, v| f.agent_name = Some(v)));
    let on_from = input_handler(update(|f, v| f.from_date = Some(v)));
    let on_to = input_handler(update(|f, v| f.to_date = Some(v)));

    let on_submit = {
        let draft = draft.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_apply.emit((*draft).clone().normalized());
        })
    };

    let on_reset = {
        let draft = draft.clone();
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(EnquiryFilters::default());
            on_reset.emit(());
        })
    };

    let range_error = match (&draft.from_date, &draft.to_date) {
        (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() && from > to => {
            Some("From date is after To date".to_string())
        }
        _ => None,
    };

    html! {
        <form
            class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-5 gap-4 p-4 border-b border-gray-200 dark:border-gray-700 bg-gray-50 dark:bg-gray-900/40"
            onsubmit={on_submit}
        >
            <FormField label="Conversion status" id="filter-status">
                <select id="filter-status" class={input_classes(false)} onchange={on_status}>
                    <option value="" selected={draft.conversion_status.is_none()}>{"All"}</option>
                    {ConversionStatus::ALL.iter().map(|status| html! {
                        <option
                            value={status.as_str()}
                            selected={draft.conversion_status == Some(*status)}
                        >
                            {status.label()}
                        </option>
                    }).collect::<Html>()}
                </select>
            </FormField>
            <FormField label="Agent" id="filter-agent">
                <input
                    id="filter-agent"
                    type="text"
                    class={input_classes(false)}
                    placeholder="Agent name"
                    value={draft.agent_name.clone().unwrap_or_default()}
                    oninput={on_agent}
                />
            </FormField>
            <FormField label="From date" id="filter-from" error={range_error.clone()}>
                <input
                    id="filter-from"
                    type="date"
                    class={input_classes(range_error.is_some())}
                    value={draft.from_date.clone().unwrap_or_default()}
                    oninput={on_from}
                />
            </FormField>
            <FormField label="To date" id="filter-to">
                <input
                    id="filter-to"
                    type="date"
                    class={input_classes(false)}
                    value={draft.to_date.clone().unwrap_or_default()}
                    oninput={on_to}
                />
            </FormField>
            <FormField label="Lead source" id="filter-source">
                <select id="filter-source" class={input_classes(false)} onchange={on_source}>
                    <option value="" selected={draft.lead_source.is_none()}>{"All"}</option>
                    {LeadSource::ALL.iter().map(|source| html! {
                        <option value={source.as_str()} selected={draft.lead_source == Some(*source)}>
                            {source.label()}
                        </option>
                    }).collect::<Html>()}
                </select>
            </FormField>
            <div class="md:col-span-3 lg:col-span-5 flex justify-end gap-3">
                <button
                    type="button"
                    class="px-4 py-2 rounded-md text-sm font-medium text-gray-700 dark:text-gray-200 border border-gray-300 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-700"
                    onclick={on_reset}
                >
                    {"Reset"}
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                    disabled={range_error.is_some()}
                >
                    {"Apply"}
                </button>
            </div>
        </form>
    }
}

fn parse_choice<T: FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

fn select_handler(apply: impl Fn(String) + 'static) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        apply(select.value());
    })
}

fn input_handler(apply: impl Fn(String) + 'static) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        apply(input.value());
    })
}
