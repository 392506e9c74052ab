use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(UnauthorizedPage)]
pub fn unauthorized_page() -> Html {
    html! {
        <div class="max-w-lg mx-auto mt-16 text-center">
            <div class="mx-auto h-12 w-12 text-yellow-500">
                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                        d="M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z" />
                </svg>
            </div>
            <h1 class="mt-4 text-2xl font-bold text-gray-900 dark:text-gray-100">{"Access denied"}</h1>
            <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">
                {"Your role does not allow this action. Ask an administrator if you need access."}
            </p>
            <Link<Route> to={Route::Dashboard} classes="inline-block mt-6 px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700">
                {"Back to dashboard"}
            </Link<Route>>
        </div>
    }
}
