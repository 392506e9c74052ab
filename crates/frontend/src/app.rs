use crate::guard::{PermissionRoute, RequireAuth};
use crate::layout::AppLayout;
use crate::pages::{
    DashboardPage, EnquiryCreatePage, EnquiryEditPage, EnquiryListPage, EnquiryViewPage,
    LoginPage, RegisterPage, UnauthorizedPage,
};
use crate::routes::{ReplaceRedirect, Route, redirect_target, required_permission};
use erp_frontend_common::{AuthProvider, MenuProvider, SnackbarProvider};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SnackbarProvider>
                <AuthProvider>
                    <MenuProvider>
                        <Switch<Route> render={switch} />
                    </MenuProvider>
                </AuthProvider>
            </SnackbarProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    if let Some(to) = redirect_target(&route) {
        return html! { <ReplaceRedirect {to} /> };
    }
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        route => {
            let page = gated(&route);
            html! {
                <RequireAuth>
                    <AppLayout>{page}</AppLayout>
                </RequireAuth>
            }
        }
    }
}

fn gated(route: &Route) -> Html {
    let page = page(route);
    match required_permission(route) {
        Some(gate) => html! {
            <PermissionRoute menu_key={gate.menu_key} action={gate.action}>
                {page}
            </PermissionRoute>
        },
        None => page,
    }
}

fn page(route: &Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Unauthorized => html! { <UnauthorizedPage /> },
        Route::Enquiries => html! { <EnquiryListPage /> },
        Route::EnquiryCreate => html! { <EnquiryCreatePage /> },
        Route::EnquiryEdit { id } => html! { <EnquiryEditPage id={*id} /> },
        Route::EnquiryView { id } => html! { <EnquiryViewPage id={*id} /> },
        Route::Login
        | Route::Register
        | Route::Root
        | Route::LegacyDashboard
        | Route::Crm
        | Route::NotFound => html! { <ReplaceRedirect to={Route::Dashboard} /> },
    }
}
