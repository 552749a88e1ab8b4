//! Error kinds surfaced inside the capture form.

/// Fallback copy used when the backend rejects a subscription without
/// giving a usable `detail`, and when the request never completes.
pub const SUBSCRIBE_FALLBACK_MESSAGE: &str = "Failed to subscribe. Please try again.";

/// Failures the capture form can show.
///
/// Every variant is handled inside the form and cleared on the next edit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// The email field was empty after trimming. Raised before any request.
    #[error("Email is required")]
    Validation,

    /// The backend answered with a non-success status.
    #[error("{0}")]
    ServerRejected(String),

    /// The request never completed (offline, DNS, aborted).
    #[error("Failed to subscribe. Please try again.")]
    Transport,
}

impl CaptureError {
    /// Build a rejection from the optional server-provided detail.
    pub fn rejected(detail: Option<String>) -> Self {
        match detail {
            Some(detail) if !detail.trim().is_empty() => CaptureError::ServerRejected(detail),
            _ => CaptureError::ServerRejected(SUBSCRIBE_FALLBACK_MESSAGE.to_string()),
        }
    }

    /// Whether the message came from the server rather than the fallback copy.
    pub fn has_server_detail(&self) -> bool {
        matches!(self, CaptureError::ServerRejected(msg) if msg != SUBSCRIBE_FALLBACK_MESSAGE)
    }

    /// Short stable name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            CaptureError::Validation => "validation",
            CaptureError::ServerRejected(_) => "server_rejected",
            CaptureError::Transport => "transport",
        }
    }
}
