//! Modal confirmation dialog

use super::Spinner;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Confirm"))]
    pub confirm_label: AttrValue,
    /// Red confirm button for destructive actions
    #[prop_or(true)]
    pub danger: bool,
    /// Disables both buttons while the confirmed action runs
    #[prop_or(false)]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_confirm = {
        let callback = props.on_confirm.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            callback.emit(());
        })
    };

    let on_cancel = {
        let callback = props.on_cancel.clone();
        let busy = props.busy;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !busy {
                callback.emit(());
            }
        })
    };

    let confirm_class = classes!(
        "px-4", "py-2", "rounded-md", "text-sm", "font-medium", "text-white",
        "disabled:opacity-50", "disabled:cursor-not-allowed",
        if props.danger {
            "bg-red-600 hover:bg-red-700"
        } else {
            "bg-blue-600 hover:bg-blue-700"
        }
    );

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50" role="dialog" aria-modal="true">
            <div class="bg-white dark:bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4 shadow-xl">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">
                    {&props.title}
                </h2>
                <p class="text-gray-600 dark:text-gray-300 mb-6">
                    {&props.message}
                </p>
                <div class="flex justify-end gap-3">
                    <button
                        type="button"
                        onclick={on_cancel}
                        disabled={props.busy}
                        class="px-4 py-2 rounded-md text-sm font-medium border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700"
                    >
                        {"Cancel"}
                    </button>
                    <button type="button" onclick={on_confirm} disabled={props.busy} class={confirm_class}>
                        if props.busy {
                            <Spinner small=true />
                        } else {
                            {&props.confirm_label}
                        }
                    </button>
                </div>
            </div>
        </div>
    }
}
