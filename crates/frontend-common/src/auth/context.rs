//! Global authentication context and provider

use super::error_handler::{clear_auth_error_callback, set_auth_error_callback};
use crate::components::Spinner;
use crate::services::AuthService;
use erp_core::Session;
use std::rc::Rc;
use yew::prelude::*;

/// Authentication context data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthContextData {
    pub session: Option<Session>,
    /// True until the cookie session check on startup has finished
    pub is_loading: bool,
    /// Set when the backend rejected the session mid-use
    pub session_expired: bool,
}

/// Authentication context actions
pub enum AuthAction {
    /// Result of the startup session check
    Restored(Option<Session>),
    Login(Session),
    Logout,
    SessionExpired,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            session: None,
            is_loading: true,
            session_expired: false,
        }
    }
}

impl AuthContextData {
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Restored(session) => Rc::new(Self {
                session,
                is_loading: false,
                session_expired: false,
            }),
            AuthAction::Login(session) => Rc::new(Self {
                session: Some(session),
                is_loading: false,
                session_expired: false,
            }),
            AuthAction::Logout => Rc::new(Self {
                session: None,
                is_loading: false,
                session_expired: false,
            }),
            AuthAction::SessionExpired => {
                if self.session.is_none() {
                    return self;
                }
                Rc::new(Self {
                    session: None,
                    is_loading: false,
                    session_expired: true,
                })
            }
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component.
///
/// Children render only once the startup session check has finished, so
/// guards never see a half-restored state.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Set up global auth error handler
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            set_auth_error_callback(Rc::new(move || {
                tracing::warn!("Session rejected by backend");
                auth_state.dispatch(AuthAction::SessionExpired);
            }));

            clear_auth_error_callback
        });
    }

    // Restore the cookie session on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let session = match AuthService::new().me().await {
                    Ok(session) => {
                        tracing::debug!(user_id = session.user_id, "Session restored");
                        Some(session)
                    }
                    Err(e) => {
                        if !e.is_auth_expired() {
                            tracing::warn!(error = %e, "Session check failed");
                        }
                        None
                    }
                };
                auth_state.dispatch(AuthAction::Restored(session));
            });
        });
    }

    if auth_state.is_loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900">
                <Spinner />
            </div>
        };
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the current session
#[hook]
pub fn use_session() -> Option<Session> {
    let auth = use_auth();
    auth.session.clone()
}

/// End the session on the backend, then locally.
///
/// The local state is cleared even when the backend call fails.
/// `on_done` runs just before the state change, so a navigation issued
/// there lands in the same render.
pub fn logout(auth: &AuthContext, on_done: Callback<()>) {
    let auth = auth.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = AuthService::new().logout().await {
            tracing::warn!(error = %e, "Logout request failed; clearing local session anyway");
        }
        on_done.emit(());
        auth.dispatch(AuthAction::Logout);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: 1,
            org_id: 2,
            email: "ops@acme.test".into(),
        }
    }

    #[test]
    fn starts_loading_without_session() {
        let state = AuthContextData::default();
        assert!(state.is_loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn restore_and_logout() {
        let state = Rc::new(AuthContextData::default());
        let state = state.reduce(AuthAction::Restored(Some(session())));
        assert!(!state.is_loading);
        assert!(state.is_authenticated());

        let state = state.reduce(AuthAction::Logout);
        assert!(!state.is_authenticated());
        assert!(!state.session_expired);
    }

    #[test]
    fn expiry_only_marks_live_sessions() {
        let anonymous = Rc::new(AuthContextData::default()).reduce(AuthAction::Restored(None));
        let still_anonymous = anonymous.clone().reduce(AuthAction::SessionExpired);
        assert!(!still_anonymous.session_expired);

        let expired = Rc::new(AuthContextData::default())
            .reduce(AuthAction::Login(session()))
            .reduce(AuthAction::SessionExpired);
        assert!(expired.session_expired);
        assert!(expired.session.is_none());
    }
}
