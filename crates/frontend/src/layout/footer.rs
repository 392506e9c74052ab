use erp_frontend_common::AppConfig;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="px-6 py-3 border-t border-gray-200 dark:border-gray-700 text-xs text-gray-500 dark:text-gray-400 flex justify-between">
            <span>{AppConfig::APP_TITLE}</span>
            <span>{concat!("v", env!("CARGO_PKG_VERSION"))}</span>
        </footer>
    }
}
