//! Common reusable UI components
//!
//! Building blocks shared by the page sections and the capture modal.

pub mod form;
pub mod message;
pub mod modal;

pub use form::FormField;
pub use message::{ErrorMessage, SuccessMessage};
pub use modal::{BaseModal, click_target};
