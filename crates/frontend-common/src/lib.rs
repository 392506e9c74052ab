//! Shared building blocks for the Travel ERP web client
//!
//! Contexts (session, menu permissions, snackbar), the process-wide API
//! client and the small set of widgets every screen uses.

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod logging;
pub mod menu;
pub mod request;
pub mod services;

pub use auth::context::{AuthContext, AuthProvider, use_auth, use_session};
pub use client::api_client;
pub use components::{
    ConfirmDialog, FormField, SearchInput, Snackbar, SnackbarProvider, Spinner, use_snackbar,
};
pub use config::AppConfig;
pub use menu::{MenuContext, MenuProvider, use_menu, use_permission};
pub use request::{RequestGeneration, RequestTicket, use_request_generation};
