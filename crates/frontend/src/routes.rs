//! Route table and per-route permission gates

use erp_core::query::decode_pairs;
use erp_core::{ENQUIRY_MENU_KEY, PermissionAction};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/")]
    Root,
    #[at("/dashboard")]
    LegacyDashboard,
    #[at("/app/dashboard")]
    Dashboard,
    #[at("/app/unauthorized")]
    Unauthorized,
    #[at("/app/crm")]
    Crm,
    #[at("/app/crm/enquiries")]
    Enquiries,
    #[at("/app/crm/enquiries/create")]
    EnquiryCreate,
    #[at("/app/crm/enquiries/:id/edit")]
    EnquiryEdit { id: i64 },
    #[at("/app/crm/enquiries/:id/view")]
    EnquiryView { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// One flag of one menu node that a route requires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermissionGate {
    pub menu_key: &'static str,
    pub action: PermissionAction,
}

/// Permission a route demands beyond being signed in
pub const fn required_permission(route: &Route) -> Option<PermissionGate> {
    let action = match route {
        Route::Enquiries | Route::EnquiryView { .. } => PermissionAction::View,
        Route::EnquiryCreate => PermissionAction::Create,
        Route::EnquiryEdit { .. } => PermissionAction::Edit,
        _ => return None,
    };
    Some(PermissionGate {
        menu_key: ENQUIRY_MENU_KEY,
        action,
    })
}

/// Where a forwarding-only route sends the user
pub const fn redirect_target(route: &Route) -> Option<Route> {
    match route {
        Route::Root | Route::LegacyDashboard | Route::NotFound => Some(Route::Dashboard),
        Route::Crm => Some(Route::Enquiries),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct ReplaceRedirectProps {
    pub to: Route,
}

/// Redirect that replaces the current history entry, so Back skips the
/// route that forwarded here
#[function_component(ReplaceRedirect)]
pub fn replace_redirect(props: &ReplaceRedirectProps) -> Html {
    let navigator = use_navigator();

    use_effect_with(props.to.clone(), move |to| {
        if let Some(navigator) = navigator {
            navigator.replace(to);
        }
    });

    html! {}
}

/// Navigate to an in-app `path?query` string, such as a login return path.
///
/// Paths the router does not know fall back to the dashboard.
pub fn navigate_to_path(navigator: &Navigator, target: &str) {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let route = Route::recognize(path)
        .filter(|route| *route != Route::NotFound)
        .unwrap_or(Route::Dashboard);
    let pairs = decode_pairs(query);

    let result = if pairs.is_empty() {
        navigator.push(&route);
        Ok(())
    } else {
        navigator.push_with_query(&route, &pairs)
    };
    if let Err(e) = result {
        tracing::warn!(error = %e, target, "Navigation with query failed");
        navigator.push(&route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        assert_eq!(Route::Dashboard.to_path(), "/app/dashboard");
        assert_eq!(
            Route::EnquiryEdit { id: 42 }.to_path(),
            "/app/crm/enquiries/42/edit"
        );
        assert_eq!(
            Route::recognize("/app/crm/enquiries/7/view"),
            Some(Route::EnquiryView { id: 7 })
        );
        assert_eq!(
            Route::recognize("/app/crm/enquiries/create"),
            Some(Route::EnquiryCreate)
        );
    }

    #[test]
    fn enquiry_routes_are_gated() {
        let gate = |route: Route| required_permission(&route).map(|g| (g.menu_key, g.action));

        assert_eq!(
            gate(Route::Enquiries),
            Some((ENQUIRY_MENU_KEY, PermissionAction::View))
        );
        assert_eq!(
            gate(Route::EnquiryView { id: 1 }),
            Some((ENQUIRY_MENU_KEY, PermissionAction::View))
        );
        assert_eq!(
            gate(Route::EnquiryCreate),
            Some((ENQUIRY_MENU_KEY, PermissionAction::Create))
        );
        assert_eq!(
            gate(Route::EnquiryEdit { id: 1 }),
            Some((ENQUIRY_MENU_KEY, PermissionAction::Edit))
        );
    }

    #[test]
    fn forwarding_routes() {
        assert_eq!(redirect_target(&Route::Root), Some(Route::Dashboard));
        assert_eq!(redirect_target(&Route::LegacyDashboard), Some(Route::Dashboard));
        assert_eq!(redirect_target(&Route::NotFound), Some(Route::Dashboard));
        assert_eq!(redirect_target(&Route::Crm), Some(Route::Enquiries));
        assert_eq!(redirect_target(&Route::Enquiries), None);
        assert_eq!(redirect_target(&Route::Login), None);
    }

    #[test]
    fn shell_routes_need_only_a_session() {
        for route in [
            Route::Dashboard,
            Route::Unauthorized,
            Route::Crm,
            Route::Login,
            Route::Register,
        ] {
            assert_eq!(required_permission(&route), None);
        }
    }
}
