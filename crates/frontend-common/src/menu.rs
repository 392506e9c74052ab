//! Navigation menu and permission context
//!
//! The menu tree is fetched once a session exists and cleared when it goes
//! away. Every permission gate in the application reads from here.

use crate::auth::use_auth;
use crate::client::api_client;
use crate::request::use_request_generation;
use crate::services::with_auth_error_handling;
use erp_core::{MenuPermission, MenuTree};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuContextData {
    pub tree: MenuTree,
    /// True until the first fetch for the current session has settled
    pub is_loading: bool,
    pub error: Option<String>,
    revision: u32,
}

pub enum MenuAction {
    Loading,
    Loaded(MenuTree),
    Failed(String),
    /// Session ended
    Clear,
    /// Fetch the tree again, e.g. after a role change
    Refresh,
}

pub type MenuContext = UseReducerHandle<MenuContextData>;

impl Default for MenuContextData {
    fn default() -> Self {
        // Loading from the start so guards wait for the first fetch
        Self {
            tree: MenuTree::default(),
            is_loading: true,
            error: None,
            revision: 0,
        }
    }
}

impl MenuContextData {
    pub fn permissions(&self, key: &str) -> MenuPermission {
        self.tree.permissions(key)
    }
}

impl Reducible for MenuContextData {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MenuAction::Loading => Rc::new(Self {
                is_loading: true,
                error: None,
                ..(*self).clone()
            }),
            MenuAction::Loaded(tree) => Rc::new(Self {
                tree,
                is_loading: false,
                error: None,
                revision: self.revision,
            }),
            MenuAction::Failed(error) => Rc::new(Self {
                tree: MenuTree::default(),
                is_loading: false,
                error: Some(error),
                revision: self.revision,
            }),
            // Back to loading: the next session must wait for its own tree
            MenuAction::Clear => Rc::new(Self {
                revision: self.revision,
                ..Self::default()
            }),
            MenuAction::Refresh => Rc::new(Self {
                revision: self.revision.wrapping_add(1),
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuProviderProps {
    pub children: Children,
}

#[function_component(MenuProvider)]
pub fn menu_provider(props: &MenuProviderProps) -> Html {
    let auth = use_auth();
    let menu = use_reducer(MenuContextData::default);
    let generation = use_request_generation();

    {
        let menu = menu.clone();
        let user_id = auth.session.as_ref().map(|s| s.user_id);
        use_effect_with((user_id, menu.revision), move |(user_id, _)| {
            if user_id.is_some() {
                let ticket = generation.begin();
                menu.dispatch(MenuAction::Loading);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = match api_client() {
                        Ok(client) => with_auth_error_handling(client.navigation()).await,
                        Err(e) => Err(e),
                    };
                    // Superseded by a newer fetch or a logout
                    if !ticket.is_current() {
                        return;
                    }
                    match result {
                        Ok(tree) => menu.dispatch(MenuAction::Loaded(tree)),
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to load navigation");
                            menu.dispatch(MenuAction::Failed(
                                e.user_message("Failed to load navigation"),
                            ));
                        }
                    }
                });
            } else {
                generation.invalidate();
                menu.dispatch(MenuAction::Clear);
            }
        });
    }

    html! {
        <ContextProvider<MenuContext> context={menu}>
            {props.children.clone()}
        </ContextProvider<MenuContext>>
    }
}

#[hook]
pub fn use_menu() -> MenuContext {
    use_context::<MenuContext>()
        .expect("MenuContext not found. Make sure to wrap your component with MenuProvider")
}

/// Permission set of one menu key; empty while loading or when unknown
#[hook]
pub fn use_permission(key: &str) -> MenuPermission {
    let menu = use_menu();
    menu.permissions(key)
}

pub fn refresh_menu(menu: &MenuContext) {
    menu.dispatch(MenuAction::Refresh);
}

#[cfg(test)]
mod tests {
    use super::*;
    use erp_core::{MenuItem, PermissionAction};

    fn tree() -> MenuTree {
        MenuTree::new(vec![MenuItem {
            id: "crm_enquiries".into(),
            title: "Enquiries".into(),
            path: Some("/app/crm/enquiries".into()),
            icon: None,
            permissions: MenuPermission {
                can_view: true,
                can_export: true,
                ..MenuPermission::default()
            },
            children: None,
        }])
    }

    #[test]
    fn loading_until_first_fetch() {
        let state = Rc::new(MenuContextData::default());
        assert!(state.is_loading);

        let state = state.reduce(MenuAction::Loaded(tree()));
        assert!(!state.is_loading);
        assert!(state.tree.can("crm_enquiries", PermissionAction::Export));
        assert!(!state.permissions("crm_enquiries").can_delete);
    }

    #[test]
    fn failure_and_logout_drop_permissions() {
        let loaded = Rc::new(MenuContextData::default()).reduce(MenuAction::Loaded(tree()));
        let failed = loaded.clone().reduce(MenuAction::Failed("boom".into()));
        assert!(failed.tree.is_empty());
        assert_eq!(failed.error.as_deref(), Some("boom"));

        let cleared = loaded.reduce(MenuAction::Clear);
        assert!(cleared.tree.is_empty());
        assert!(cleared.is_loading);
    }

    #[test]
    fn refresh_bumps_revision_and_keeps_tree() {
        let loaded = Rc::new(MenuContextData::default()).reduce(MenuAction::Loaded(tree()));
        let refreshed = loaded.clone().reduce(MenuAction::Refresh);
        assert_eq!(refreshed.revision, loaded.revision + 1);
        assert_eq!(refreshed.tree, loaded.tree);
    }
}
