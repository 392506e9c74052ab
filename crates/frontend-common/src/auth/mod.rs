//! Authentication module

pub mod context;
pub mod error_handler;

pub use context::{
    AuthAction, AuthContext, AuthContextData, AuthProvider, logout, use_auth, use_session,
};
