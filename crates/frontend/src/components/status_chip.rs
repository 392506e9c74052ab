use erp_core::enquiry::ChipTone;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusChipProps {
    pub label: AttrValue,
    pub tone: ChipTone,
}

#[function_component(StatusChip)]
pub fn status_chip(props: &StatusChipProps) -> Html {
    html! {
        <span class={classes!(
            "inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium",
            props.tone.classes()
        )}>
            {&props.label}
        </span>
    }
}
