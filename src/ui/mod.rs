pub mod common;
pub mod email_capture;
pub mod icon;
pub mod locale;
pub mod pages;

pub use email_capture::EmailCaptureModal;
pub use icon::{Icon, icons};
pub use locale::{LocaleContext, provide_locale_context, use_locale};
