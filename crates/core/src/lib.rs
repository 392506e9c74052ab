//! Travel ERP core types and client-side rules
//!
//! Everything in this crate is plain data and pure functions so it can be
//! shared between the HTTP client, the browser application and native tests.

pub mod api_error;
pub mod enquiry;
pub mod menu;
pub mod query;
pub mod session;
pub mod validation;

pub use api_error::ApiErrorBody;
pub use enquiry::{
    ConversionStatus, EnquiryDetail, EnquiryInput, EnquiryListItem, EnquiryListResponse,
    ExportFormat, LeadSource, Pagination, Priority,
};
pub use menu::{DataScope, MenuItem, MenuPermission, MenuTree, PermissionAction};
pub use query::{EnquiryFilters, EnquiryListQuery};
pub use session::Session;
pub use validation::FieldErrors;

/// Menu key of the CRM enquiries screen
pub const ENQUIRY_MENU_KEY: &str = "crm_enquiries";

/// Error returned when a wire string does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
