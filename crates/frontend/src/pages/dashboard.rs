use crate::routes::Route;
use erp_core::{MenuItem, MenuTree};
use erp_frontend_common::{Spinner, use_menu, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

/// Leaf pages of the visible tree other than the dashboard itself,
/// flattened for the quick-access grid
fn shortcuts(tree: &MenuTree) -> Vec<MenuItem> {
    fn collect(items: &[MenuItem], out: &mut Vec<MenuItem>) {
        for item in items {
            if item.has_children() {
                collect(item.children(), out);
            } else if item
                .path
                .as_deref()
                .is_some_and(|p| p != erp_core::session::DASHBOARD_PATH)
            {
                out.push(item.clone());
            }
        }
    }
    let mut out = Vec::new();
    collect(tree.visible().items(), &mut out);
    out
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let menu = use_menu();
    let shortcut_items = use_memo(menu.tree.clone(), shortcuts);

    let greeting = session
        .as_ref()
        .map_or_else(|| "Welcome".to_string(), |s| format!("Welcome, {}", s.email));

    let cards = if menu.is_loading {
        html! { <Spinner /> }
    } else if shortcut_items.is_empty() {
        html! {
            <p class="text-sm text-gray-500 dark:text-gray-400">
                {"No modules have been assigned to your role yet. Contact your administrator."}
            </p>
        }
    } else {
        shortcut_items
            .iter()
            .map(|item| {
                let path = item.path.as_deref().unwrap_or_default();
                let scope = item.permissions.data_scope.map(|s| s.label());
                let body = html! {
                    <>
                        <h3 class="text-base font-medium text-gray-900 dark:text-gray-100">{&item.title}</h3>
                        if let Some(scope) = scope {
                            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">{format!("Scope: {scope}")}</p>
                        }
                    </>
                };
                let class = "block bg-white dark:bg-gray-800 rounded-lg shadow p-5 hover:shadow-md transition-shadow";
                match Route::recognize(path).filter(|r| *r != Route::NotFound) {
                    Some(route) => html! {
                        <Link<Route> to={route} classes={class}>{body}</Link<Route>>
                    },
                    None => html! { <a href={path.to_string()} class={class}>{body}</a> },
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="max-w-7xl mx-auto">
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-gray-100">{greeting}</h1>
                <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                    {"Pick up where you left off"}
                </p>
            </div>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {cards}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erp_core::MenuPermission;

    fn item(id: &str, path: Option<&str>, can_view: bool, children: Option<Vec<MenuItem>>) -> MenuItem {
        MenuItem {
            id: id.into(),
            title: id.into(),
            path: path.map(str::to_string),
            icon: None,
            permissions: MenuPermission {
                can_view,
                ..MenuPermission::default()
            },
            children,
        }
    }

    #[test]
    fn shortcuts_are_visible_leaves() {
        let tree = MenuTree::new(vec![
            item("dashboard", Some("/app/dashboard"), true, None),
            item(
                "crm",
                None,
                true,
                Some(vec![
                    item("crm_enquiries", Some("/app/crm/enquiries"), true, None),
                    item("crm_customers", Some("/app/crm/customers"), false, None),
                ]),
            ),
        ]);
        let ids: Vec<_> = shortcuts(&tree).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["crm_enquiries"]);
    }
}
