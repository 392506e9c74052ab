use yew::prelude::*;

/// Base classes for text inputs and selects
pub const INPUT_CLASSES: &str = "block w-full px-3 py-2 border rounded-md bg-white dark:bg-gray-800 \
     text-gray-900 dark:text-gray-100 placeholder-gray-400 focus:outline-none focus:ring-1 sm:text-sm";

/// Input classes with the border colour reflecting the field's error state
pub fn input_classes(has_error: bool) -> Classes {
    classes!(
        INPUT_CLASSES,
        if has_error {
            "border-red-500 focus:ring-red-500 focus:border-red-500"
        } else {
            "border-gray-300 dark:border-gray-600 focus:ring-blue-500 focus:border-blue-500"
        }
    )
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    pub children: Html,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(false)]
    pub required: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub help_text: Option<String>,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let note = match (&props.error, &props.help_text) {
        (Some(error), _) => html! {
            <p class="mt-1 text-xs text-red-600 dark:text-red-400" role="alert">{error}</p>
        },
        (None, Some(help)) => html! {
            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">{help}</p>
        },
        (None, None) => html! {},
    };

    html! {
        <div class="mb-4">
            <label
                for={props.id.clone()}
                class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
            >
                {&props.label}
                if props.required {
                    <span class="text-red-500 ml-0.5">{"*"}</span>
                }
            </label>
            {props.children.clone()}
            {note}
        </div>
    }
}
