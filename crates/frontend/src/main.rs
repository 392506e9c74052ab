mod app;
mod components;
mod guard;
mod layout;
mod pages;
mod routes;
mod services;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    erp_frontend_common::logging::init();
    tracing::info!(
        api = erp_frontend_common::AppConfig::API_BASE_URL,
        "Starting Travel ERP"
    );
    yew::Renderer::<App>::new().render();
}
