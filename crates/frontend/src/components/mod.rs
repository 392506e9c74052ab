mod enquiry_filters;
mod enquiry_form;
mod enquiry_table;
mod pagination;
mod selectors;
mod status_chip;

pub use enquiry_filters::EnquiryFiltersPanel;
pub use enquiry_form::EnquiryForm;
pub use enquiry_table::{EnquiryTable, RowAction};
pub use pagination::PaginationBar;
pub use selectors::{CustomerSelector, PackageSelector};
pub use status_chip::StatusChip;
