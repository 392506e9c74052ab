//! Service modules for API interactions

pub mod enquiry;

pub use enquiry::{BulkDeleteOutcome, EnquiryService};
