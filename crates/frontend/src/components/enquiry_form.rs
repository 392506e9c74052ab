//! Create/edit form for a CRM enquiry

use super::{CustomerSelector, PackageSelector};
use erp_core::enquiry::{CustomerOption, PackageOption};
use erp_core::validation::{EnquiryFormDraft, SelectionMode};
use erp_core::{ConversionStatus, EnquiryInput, FieldErrors, LeadSource, Priority};
use erp_frontend_common::FormField;
use erp_frontend_common::components::input_classes;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

type Editor = Rc<dyn Fn(&'static [&'static str], Box<dyn FnOnce(&mut EnquiryFormDraft)>)>;

#[derive(Properties, PartialEq)]
pub struct EnquiryFormProps {
    /// Starting values; the form resets when this changes
    #[prop_or_default]
    pub initial: EnquiryFormDraft,
    /// Field errors returned by the backend for the last submit
    #[prop_or_default]
    pub server_errors: FieldErrors,
    pub submit_label: AttrValue,
    #[prop_or(false)]
    pub busy: bool,
    pub on_submit: Callback<EnquiryInput>,
    pub on_cancel: Callback<()>,
}

#[function_component(EnquiryForm)]
pub fn enquiry_form(props: &EnquiryFormProps) -> Html {
    let draft = use_state(|| props.initial.clone());
    let errors = use_state(FieldErrors::new);

    {
        let draft = draft.clone();
        let errors = errors.clone();
        use_effect_with(props.initial.clone(), move |initial| {
            draft.set(initial.clone());
            errors.set(FieldErrors::new());
        });
    }

    {
        let errors = errors.clone();
        use_effect_with(props.server_errors.clone(), move |server| {
            if !server.is_empty() {
                errors.set(EnquiryFormDraft::map_server_errors(server));
            }
        });
    }

    // Apply an edit and clear the errors of the fields it touches
    let edit: Editor = {
        let draft = draft.clone();
        let errors = errors.clone();
        Rc::new(
            move |fields: &'static [&'static str], apply: Box<dyn FnOnce(&mut EnquiryFormDraft)>| {
                let mut next = (*draft).clone();
                apply(&mut next);
                draft.set(next);

                if fields.iter().any(|f| errors.get(f).is_some()) {
                    let mut remaining = (*errors).clone();
                    for field in fields {
                        remaining.remove(field);
                    }
                    errors.set(remaining);
                }
            },
        )
    };

    let on_customer_mode = {
        let edit = edit.clone();
        Callback::from(move |mode: SelectionMode| {
            edit(CUSTOMER_FIELDS, Box::new(move |d: &mut EnquiryFormDraft| d.set_customer_mode(mode)));
        })
    };
    let on_customer = {
        let edit = edit.clone();
        Callback::from(move |customer: CustomerOption| {
            edit(CUSTOMER_FIELDS, Box::new(move |d: &mut EnquiryFormDraft| d.select_customer(&customer)));
        })
    };
    let on_package_mode = {
        let edit = edit.clone();
        Callback::from(move |mode: SelectionMode| {
            edit(PACKAGE_FIELDS, Box::new(move |d: &mut EnquiryFormDraft| d.set_package_mode(mode)));
        })
    };
    let on_package = {
        let edit = edit.clone();
        Callback::from(move |package: PackageOption| {
            edit(PACKAGE_FIELDS, Box::new(move |d: &mut EnquiryFormDraft| d.select_package(&package)));
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        let busy = props.busy;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if busy {
                return;
            }
            match draft.validate() {
                Ok(input) => {
                    errors.set(FieldErrors::new());
                    on_submit.emit(input);
                }
                Err(found) => errors.set(found),
            }
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let error = |field: &str| errors.get(field).map(str::to_string);
    let d = &*draft;

    html! {
        <form class="space-y-6" onsubmit={on_submit} novalidate=true>
            <section class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="space-y-4">
                    <CustomerSelector
                        mode={d.customer_mode}
                        on_mode={on_customer_mode}
                        selected={d.cust_id}
                        selected_name={AttrValue::from(d.customer_name.clone())}
                        on_select={on_customer}
                        error={error("customer_name")}
                    />
                    if d.customer_mode == SelectionMode::New {
                        <FormField label="Customer name" id="customer_name" required=true error={error("customer_name")}>
                            <input
                                id="customer_name"
                                type="text"
                                class={input_classes(error("customer_name").is_some())}
                                value={d.customer_name.clone()}
                                oninput={input(&edit, &["customer_name"], |d, v| d.customer_name = v)}
                            />
                        </FormField>
                        <FormField label="Mobile" id="customer_mobile" error={error("customer_mobile")}>
                            <input
                                id="customer_mobile"
                                type="tel"
                                class={input_classes(error("customer_mobile").is_some())}
                                value={d.customer_mobile.clone()}
                                oninput={input(&edit, &["customer_mobile"], |d, v| d.customer_mobile = v)}
                            />
                        </FormField>
                        <FormField label="Email" id="customer_email" error={error("customer_email")}>
                            <input
                                id="customer_email"
                                type="email"
                                class={input_classes(error("customer_email").is_some())}
                                value={d.customer_email.clone()}
                                oninput={input(&edit, &["customer_email"], |d, v| d.customer_email = v)}
                            />
                        </FormField>
                    }
                </div>
                <div class="space-y-4">
                    <PackageSelector
                        mode={d.package_mode}
                        on_mode={on_package_mode}
                        selected={d.pkg_id}
                        selected_name={AttrValue::from(d.package_name.clone())}
                        on_select={on_package}
                        error={error("package_name")}
                    />
                    if d.package_mode == SelectionMode::New {
                        <FormField label="Package name" id="package_name" required=true error={error("package_name")}>
                            <input
                                id="package_name"
                                type="text"
                                class={input_classes(error("package_name").is_some())}
                                value={d.package_name.clone()}
                                oninput={input(&edit, &["package_name"], |d, v| d.package_name = v)}
                            />
                        </FormField>
                    }
                </div>
            </section>

            <section class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <FormField label="PAX" id="pax_count" required=true error={error("pax_count")}>
                    <input
                        id="pax_count"
                        type="number"
                        min="1"
                        class={input_classes(error("pax_count").is_some())}
                        value={d.pax_count.clone()}
                        oninput={input(&edit, &["pax_count"], |d, v| d.pax_count = v)}
                    />
                </FormField>
                <FormField label="Lead source" id="lead_source" required=true error={error("lead_source")}>
                    <select
                        id="lead_source"
                        class={input_classes(error("lead_source").is_some())}
                        onchange={select(&edit, &["lead_source"], |d, v| d.lead_source = v.parse().ok())}
                    >
                        <option value="" selected={d.lead_source.is_none()} disabled=true>{"Select..."}</option>
                        {LeadSource::ALL.iter().map(|s| html! {
                            <option value={s.as_str()} selected={d.lead_source == Some(*s)}>{s.label()}</option>
                        }).collect::<Html>()}
                    </select>
                </FormField>
                <FormField label="Priority" id="priority" required=true error={error("priority")}>
                    <select
                        id="priority"
                        class={input_classes(error("priority").is_some())}
                        onchange={select(&edit, &["priority"], |d, v| d.priority = v.parse().ok())}
                    >
                        <option value="" selected={d.priority.is_none()} disabled=true>{"Select..."}</option>
                        {Priority::ALL.iter().map(|p| html! {
                            <option value={p.as_str()} selected={d.priority == Some(*p)}>{p.label()}</option>
                        }).collect::<Html>()}
                    </select>
                </FormField>
                <FormField label="Conversion status" id="conversion_status" error={error("conversion_status")}>
                    <select
                        id="conversion_status"
                        class={input_classes(error("conversion_status").is_some())}
                        onchange={select(&edit, &["conversion_status"], |d, v| {
                            if let Ok(status) = v.parse() {
                                d.conversion_status = status;
                            }
                        })}
                    >
                        {ConversionStatus::ALL.iter().map(|c| html! {
                            <option value={c.as_str()} selected={d.conversion_status == *c}>{c.label()}</option>
                        }).collect::<Html>()}
                    </select>
                </FormField>
            </section>

            <FormField label="Description" id="description" error={error("description")}>
                <textarea
                    id="description"
                    rows="4"
                    class={input_classes(error("description").is_some())}
                    value={d.description.clone()}
                    oninput={textarea(&edit, &["description"], |d, v| d.description = v)}
                />
            </FormField>

            <div class="flex justify-end gap-3 pt-4 border-t border-gray-200 dark:border-gray-700">
                <button
                    type="button"
                    class="px-4 py-2 rounded-md text-sm font-medium text-gray-700 dark:text-gray-200 border border-gray-300 dark:border-gray-600 hover:bg-gray-50 dark:hover:bg-gray-700"
                    onclick={on_cancel}
                    disabled={props.busy}
                >
                    {"Cancel"}
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                    disabled={props.busy}
                >
                    {if props.busy { "Saving..." } else { props.submit_label.as_str() }}
                </button>
            </div>
        </form>
    }
}

const CUSTOMER_FIELDS: &[&str] = &["customer_name", "customer_mobile", "customer_email"];
const PACKAGE_FIELDS: &[&str] = &["package_name"];

fn input(
    edit: &Editor,
    fields: &'static [&'static str],
    apply: fn(&mut EnquiryFormDraft, String),
) -> Callback<InputEvent> {
    let edit = edit.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        edit(fields, Box::new(move |d: &mut EnquiryFormDraft| apply(d, value)));
    })
}

fn textarea(
    edit: &Editor,
    fields: &'static [&'static str],
    apply: fn(&mut EnquiryFormDraft, String),
) -> Callback<InputEvent> {
    let edit = edit.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
        edit(fields, Box::new(move |d: &mut EnquiryFormDraft| apply(d, value)));
    })
}

fn select(
    edit: &Editor,
    fields: &'static [&'static str],
    apply: fn(&mut EnquiryFormDraft, String),
) -> Callback<Event> {
    let edit = edit.clone();
    Callback::from(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        edit(fields, Box::new(move |d: &mut EnquiryFormDraft| apply(d, value)));
    })
}
