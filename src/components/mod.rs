//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod login_modal;
mod search_inputs;
mod redirect_table;
mod redirect_row;
mod add_redirect_form;
mod confirm_button;

pub use header::Header;
pub use login_modal::LoginModal;
pub use search_inputs::SearchInputs;
pub use redirect_table::RedirectTable;
pub use redirect_row::RedirectRow;
pub use add_redirect_form::AddRedirectForm;
pub use confirm_button::ConfirmButton;
