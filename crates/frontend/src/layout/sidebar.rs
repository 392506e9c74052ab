//! Permission-filtered navigation

use crate::routes::Route;
use erp_core::menu::path_matches;
use erp_core::{MenuItem, MenuTree};
use erp_frontend_common::{Spinner, use_menu};
use std::collections::HashSet;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// Drawer state on small screens
    pub open: bool,
    pub on_navigate: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let menu = use_menu();
    let location = use_location();
    let current_path = location.map(|l| l.path().to_string()).unwrap_or_default();

    let visible = use_memo(menu.tree.clone(), MenuTree::visible);
    let expanded = use_state(HashSet::<String>::new);

    // Open the group holding the current page
    {
        let expanded = expanded.clone();
        use_effect_with(
            (current_path.clone(), visible.clone()),
            move |(path, visible)| {
                if let Some(key) = visible.open_group_for(path)
                    && !expanded.contains(key)
                {
                    let mut next = (*expanded).clone();
                    next.insert(key.to_string());
                    expanded.set(next);
                }
            },
        );
    }

    let on_toggle_group = {
        let expanded = expanded.clone();
        Callback::from(move |key: String| {
            let mut next = (*expanded).clone();
            if !next.remove(&key) {
                next.insert(key);
            }
            expanded.set(next);
        })
    };

    let body = if menu.is_loading {
        html! { <Spinner /> }
    } else if let Some(error) = &menu.error {
        html! { <p class="px-4 py-3 text-sm text-red-600 dark:text-red-400">{error}</p> }
    } else if visible.is_empty() {
        html! { <p class="px-4 py-3 text-sm text-gray-500 dark:text-gray-400">{"No modules available"}</p> }
    } else {
        let ctx = NavContext {
            current_path: &current_path,
            expanded: &*expanded,
            on_toggle_group: &on_toggle_group,
            on_navigate: &props.on_navigate,
        };
        visible
            .items()
            .iter()
            .map(|item| ctx.render(item, 0))
            .collect::<Html>()
    };

    let on_backdrop = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(()))
    };

    html! {
        <>
            if props.open {
                <div class="fixed inset-0 bg-black/40 z-30 lg:hidden" onclick={on_backdrop}></div>
            }
            <aside class={classes!(
                "w-64", "shrink-0", "bg-white", "dark:bg-gray-800", "border-r", "border-gray-200",
                "dark:border-gray-700", "overflow-y-auto", "z-40",
                "fixed", "inset-y-0", "left-0", "top-14", "transition-transform", "duration-200",
                "lg:static", "lg:translate-x-0",
                if props.open { "translate-x-0" } else { "-translate-x-full" }
            )}>
                <nav class="py-3" aria-label="Main">
                    {body}
                </nav>
            </aside>
        </>
    }
}

struct NavContext<'a> {
    current_path: &'a str,
    expanded: &'a HashSet<String>,
    on_toggle_group: &'a Callback<String>,
    on_navigate: &'a Callback<()>,
}

impl NavContext<'_> {
    fn render(&self, item: &MenuItem, depth: usize) -> Html {
        let indent = match depth {
            0 => "pl-4",
            1 => "pl-8",
            _ => "pl-12",
        };

        if item.has_children() {
            let is_open = self.expanded.contains(&item.id);
            let on_click = {
                let key = item.id.clone();
                let toggle = self.on_toggle_group.clone();
                Callback::from(move |_: MouseEvent| toggle.emit(key.clone()))
            };
            return html! {
                <div key={item.id.clone()}>
                    <button
                        type="button"
                        onclick={on_click}
                        class={classes!(
                            "w-full", "flex", "items-center", "justify-between", "pr-4", "py-2", "text-sm",
                            "font-medium", "text-gray-700", "dark:text-gray-200", "hover:bg-gray-100",
                            "dark:hover:bg-gray-700", indent
                        )}
                        aria-expanded={is_open.to_string()}
                    >
                        <span>{&item.title}</span>
                        <svg
                            class={classes!("w-4", "h-4", "transition-transform", if is_open { "rotate-180" } else { "" })}
                            fill="none"
                            stroke="currentColor"
                            viewBox="0 0 24 24"
                        >
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                        </svg>
                    </button>
                    if is_open {
                        {item.children().iter().map(|child| self.render(child, depth + 1)).collect::<Html>()}
                    }
                </div>
            };
        }

        let Some(path) = item.path.as_deref() else {
            return html! {};
        };
        let active = path_matches(self.current_path, path);
        let class = classes!(
            "block", "pr-4", "py-2", "text-sm", "transition-colors", indent,
            if active {
                "bg-blue-50 text-blue-700 dark:bg-blue-900/30 dark:text-blue-300 font-medium border-r-2 border-blue-600"
            } else {
                "text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
            }
        );
        let on_click = {
            let on_navigate = self.on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(()))
        };

        match Route::recognize(path).filter(|route| *route != Route::NotFound) {
            Some(route) => html! {
                <div key={item.id.clone()} onclick={on_click}>
                    <Link<Route> to={route} classes={class}>{&item.title}</Link<Route>>
                </div>
            },
            // Modules this client does not serve yet are plain links
            None => html! {
                <a key={item.id.clone()} href={path.to_string()} class={class}>{&item.title}</a>
            },
        }
    }
}
