pub mod api_wrapper;
pub mod auth;

pub use api_wrapper::with_auth_error_handling;
pub use auth::AuthService;
