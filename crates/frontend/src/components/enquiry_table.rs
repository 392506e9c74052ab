//! Enquiry list table

use super::StatusChip;
use erp_core::enquiry::{CellValue, ColumnAlign, ENQUIRY_COLUMNS};
use erp_core::EnquiryListItem;
use std::collections::HashSet;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

#[derive(Properties, PartialEq)]
pub struct EnquiryTableProps {
    pub rows: Vec<EnquiryListItem>,
    pub selected: HashSet<i64>,
    /// Checkbox column; shown only when bulk actions are allowed
    pub selectable: bool,
    pub can_view: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub on_toggle_row: Callback<i64>,
    pub on_toggle_all: Callback<bool>,
    pub on_action: Callback<(RowAction, i64)>,
}

#[function_component(EnquiryTable)]
pub fn enquiry_table(props: &EnquiryTableProps) -> Html {
    let all_selected =
        !props.rows.is_empty() && props.rows.iter().all(|row| props.selected.contains(&row.id));

    let on_toggle_all = {
        let callback = props.on_toggle_all.clone();
        Callback::from(move |_: Event| callback.emit(!all_selected))
    };

    let header_class = "px-4 py-3 text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider whitespace-nowrap";

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900">
                    <tr>
                        if props.selectable {
                            <th scope="col" class="px-4 py-3 w-10">
                                <input
                                    type="checkbox"
                                    checked={all_selected}
                                    onchange={on_toggle_all}
                                    aria-label="Select all"
                                />
                            </th>
                        }
                        {ENQUIRY_COLUMNS.iter().map(|column| html! {
                            <th
                                scope="col"
                                class={classes!(header_class, align_class(column.align))}
                                style={format!("min-width: {}px", column.min_width)}
                            >
                                {column.label}
                            </th>
                        }).collect::<Html>()}
                        <th scope="col" class={classes!(header_class, "text-right")}>
                            {"Actions"}
                        </th>
                    </tr>
                </thead>
                <tbody class="bg-white dark:bg-gray-800 divide-y divide-gray-200 dark:divide-gray-700">
                    {props.rows.iter().map(|row| render_row(props, row)).collect::<Html>()}
                </tbody>
            </table>
        </div>
    }
}

const fn align_class(align: ColumnAlign) -> &'static str {
    match align {
        ColumnAlign::Left => "text-left",
        ColumnAlign::Center => "text-center",
    }
}

fn render_row(props: &EnquiryTableProps, row: &EnquiryListItem) -> Html {
    let id = row.id;
    let is_selected = props.selected.contains(&id);

    let on_toggle = {
        let callback = props.on_toggle_row.clone();
        Callback::from(move |_: Event| callback.emit(id))
    };

    let action = |kind: RowAction| {
        let callback = props.on_action.clone();
        Callback::from(move |_: MouseEvent| callback.emit((kind, id)))
    };

    let link = "text-sm font-medium hover:underline";

    html! {
        <tr key={id.to_string()} class={if is_selected { "bg-blue-50/50 dark:bg-blue-900/10" } else { "" }}>
            if props.selectable {
                <td class="px-4 py-3">
                    <input
                        type="checkbox"
                        checked={is_selected}
                        onchange={on_toggle}
                        aria-label={format!("Select enquiry {id}")}
                    />
                </td>
            }
            {ENQUIRY_COLUMNS.iter().map(|column| {
                let content = match row.cell(column) {
                    CellValue::Text(text) => html! { {text} },
                    CellValue::Chip { label, tone } => html! { <StatusChip {label} {tone} /> },
                };
                html! {
                    <td class={classes!(
                        "px-4", "py-3", "text-sm", "text-gray-700", "dark:text-gray-300", "whitespace-nowrap",
                        align_class(column.align)
                    )}>
                        {content}
                    </td>
                }
            }).collect::<Html>()}
            <td class="px-4 py-3 whitespace-nowrap text-right">
                <div class="flex items-center justify-end gap-3">
                    if props.can_view {
                        <button type="button" class={classes!(link, "text-blue-600", "dark:text-blue-400")} onclick={action(RowAction::View)}>
                            {"View"}
                        </button>
                    }
                    if props.can_edit {
                        <button type="button" class={classes!(link, "text-yellow-600", "dark:text-yellow-400")} onclick={action(RowAction::Edit)}>
                            {"Edit"}
                        </button>
                    }
                    if props.can_delete {
                        <button type="button" class={classes!(link, "text-red-600", "dark:text-red-400")} onclick={action(RowAction::Delete)}>
                            {"Delete"}
                        </button>
                    }
                </div>
            </td>
        </tr>
    }
}
