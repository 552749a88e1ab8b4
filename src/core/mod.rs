//! Platform-independent logic: capture modal gating, localized copy and
//! site configuration.

pub mod config;
pub mod email_capture;
pub mod i18n;
#[cfg(test)]
mod tests;
