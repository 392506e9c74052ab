mod confirm_dialog;
mod form_field;
mod search_input;
mod snackbar;
mod spinner;

pub use confirm_dialog::ConfirmDialog;
pub use form_field::{FormField, INPUT_CLASSES, input_classes};
pub use search_input::SearchInput;
pub use snackbar::{Snackbar, SnackbarKind, SnackbarProvider, use_snackbar};
pub use spinner::LoadingSpinner as Spinner;
