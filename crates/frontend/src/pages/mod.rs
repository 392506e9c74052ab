mod dashboard;
mod enquiries;
mod login;
mod register;
mod unauthorized;

pub use dashboard::DashboardPage;
pub use enquiries::{EnquiryCreatePage, EnquiryEditPage, EnquiryListPage, EnquiryViewPage};
pub use login::LoginPage;
pub use register::RegisterPage;
pub use unauthorized::UnauthorizedPage;

use yew::prelude::*;

/// Card wrapper shared by the login and registration screens
#[derive(Properties, PartialEq)]
pub struct AuthCardProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub children: Html,
}

#[function_component(AuthCard)]
pub fn auth_card(props: &AuthCardProps) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 flex items-center justify-center px-4 py-8">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {erp_frontend_common::AppConfig::APP_TITLE}
                    </h1>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{&props.subtitle}</p>
                </div>
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
                    <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100 mb-4">{&props.title}</h2>
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}

/// Banner for errors that belong to no single field
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="mb-4 p-3 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-md" role="alert">
                <p class="text-sm text-red-700 dark:text-red-300">{message}</p>
            </div>
        },
        None => html! {},
    }
}
