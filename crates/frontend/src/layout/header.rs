use crate::routes::Route;
use erp_frontend_common::auth::logout;
use erp_frontend_common::{AppConfig, use_auth};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_toggle_sidebar: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let profile_open = use_state(|| false);
    let signing_out = use_state(|| false);

    let on_menu = {
        let callback = props.on_toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let toggle_profile = {
        let profile_open = profile_open.clone();
        Callback::from(move |_: MouseEvent| profile_open.set(!*profile_open))
    };

    let on_logout = {
        let auth = auth.clone();
        let signing_out = signing_out.clone();
        let profile_open = profile_open.clone();
        Callback::from(move |_: MouseEvent| {
            if *signing_out {
                return;
            }
            signing_out.set(true);
            profile_open.set(false);
            let navigator = navigator.clone();
            logout(
                &auth,
                Callback::from(move |()| {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Login);
                    }
                }),
            );
        })
    };

    let Some(session) = auth.session.clone() else {
        return html! {};
    };

    html! {
        <header class="h-14 px-4 flex items-center justify-between bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700 sticky top-0 z-30">
            <div class="flex items-center gap-3">
                <button
                    type="button"
                    onclick={on_menu}
                    class="lg:hidden p-2 rounded-md text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
                    aria-label="Toggle navigation"
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                    </svg>
                </button>
                <Link<Route> to={Route::Dashboard} classes="text-lg font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                    {AppConfig::APP_TITLE}
                </Link<Route>>
            </div>

            <div class="relative">
                <button
                    type="button"
                    onclick={toggle_profile}
                    class="w-9 h-9 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center text-white font-semibold"
                    aria-haspopup="true"
                    aria-expanded={profile_open.to_string()}
                >
                    {session.initial().to_string()}
                </button>
                if *profile_open {
                    <div class="absolute right-0 mt-2 w-64 bg-white dark:bg-gray-800 rounded-lg shadow-lg border border-gray-200 dark:border-gray-700 p-4">
                        <p class="text-sm font-medium text-gray-900 dark:text-gray-100 truncate">{&session.email}</p>
                        <p class="text-xs text-gray-500 dark:text-gray-400 mt-0.5">
                            {format!("Organization #{}", session.org_id)}
                        </p>
                        <button
                            type="button"
                            onclick={on_logout}
                            disabled={*signing_out}
                            class="mt-4 w-full px-3 py-2 rounded-md text-sm font-medium text-red-600 dark:text-red-400 border border-red-200 dark:border-red-800 hover:bg-red-50 dark:hover:bg-red-900/20 disabled:opacity-50"
                        >
                            {if *signing_out { "Signing out..." } else { "Logout" }}
                        </button>
                    </div>
                }
            </div>
        </header>
    }
}
