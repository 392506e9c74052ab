//! Frontend configuration

use std::time::Duration;

/// Application configuration, fixed at build time
pub struct AppConfig;

impl AppConfig {
    /// Backend origin; override with `ERP_API_BASE_URL` when building
    pub const API_BASE_URL: &'static str = match option_env!("ERP_API_BASE_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Product name shown in the header and page titles
    pub const APP_TITLE: &'static str = "Travel ERP";

    /// Request timeout for native builds; browsers apply their own
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    /// How long a snackbar stays visible
    pub const SNACKBAR_DURATION_MS: u32 = 4_000;

    /// Pause between a successful registration and the jump to login
    pub const REGISTER_REDIRECT_DELAY_MS: u32 = 900;

    /// Debounce for free-text search boxes
    pub const SEARCH_DEBOUNCE_MS: u32 = 400;

    /// Largest spreadsheet accepted by the enquiry import
    pub const IMPORT_MAX_BYTES: u64 = 5 * 1024 * 1024;

    /// File types offered by the import picker
    pub const IMPORT_ACCEPT: &'static str = ".csv,.xlsx,.xls";
}
