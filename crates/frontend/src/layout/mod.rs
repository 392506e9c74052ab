//! Authenticated application shell

mod footer;
mod header;
mod sidebar;

use footer::Footer;
use header::Header;
use sidebar::Sidebar;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    pub children: Html,
}

#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    // Mobile drawer; the sidebar is always visible from `lg` up
    let sidebar_open = use_state(|| false);

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |()| sidebar_open.set(!*sidebar_open))
    };

    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |()| sidebar_open.set(false))
    };

    html! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <Header on_toggle_sidebar={toggle_sidebar} />
            <div class="flex flex-1 min-h-0">
                <Sidebar open={*sidebar_open} on_navigate={close_sidebar} />
                <main class="flex-1 min-w-0 flex flex-col">
                    <div class="flex-1 p-4 sm:p-6">
                        {props.children.clone()}
                    </div>
                    <Footer />
                </main>
            </div>
        </div>
    }
}
