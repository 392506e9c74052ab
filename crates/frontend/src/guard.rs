//! Route guards

use crate::routes::{ReplaceRedirect, Route};
use erp_core::PermissionAction;
use erp_frontend_common::{Spinner, use_auth, use_menu};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Html,
}

/// Renders children only with a session; otherwise sends the user to
/// login with the current location as `from`.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let location = use_location();
    let signed_in = auth.is_authenticated();

    let from = location
        .map(|l| format!("{}{}", l.path(), l.query_str()))
        .unwrap_or_default();

    use_effect_with(signed_in, move |signed_in| {
        if !*signed_in && let Some(navigator) = navigator {
            let query = vec![("from", from)];
            if let Err(e) = navigator.replace_with_query(&Route::Login, &query) {
                tracing::warn!(error = %e, "Could not carry return path to login");
                navigator.replace(&Route::Login);
            }
        }
    });

    if signed_in {
        props.children.clone()
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct PermissionRouteProps {
    pub menu_key: AttrValue,
    pub action: PermissionAction,
    pub children: Html,
}

/// Permission gate on one flag of one menu node
#[function_component(PermissionRoute)]
pub fn permission_route(props: &PermissionRouteProps) -> Html {
    let menu = use_menu();

    if menu.is_loading {
        return html! { <Spinner text="Checking permissions..." /> };
    }

    if menu.tree.can(&props.menu_key, props.action) {
        props.children.clone()
    } else {
        tracing::info!(
            menu_key = %props.menu_key,
            action = props.action.flag(),
            "Permission denied"
        );
        html! { <ReplaceRedirect to={Route::Unauthorized} /> }
    }
}
