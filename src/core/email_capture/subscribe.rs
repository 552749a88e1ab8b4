//! Wire contract for the subscription backend.

use serde::{Deserialize, Serialize};

use super::error::CaptureError;

/// Path appended to the configured backend base URL.
pub const SUBSCRIBE_PATH: &str = "/api/email/subscribe";

/// Join the backend base URL and the subscribe path.
///
/// An empty base gives the same-origin relative path.
pub fn subscribe_url(base: &str) -> String {
    format!("{}{}", base.trim().trim_end_matches('/'), SUBSCRIBE_PATH)
}

/// JSON body of the subscribe request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
}

impl SubscribeRequest {
    /// Build a request from raw form fields.
    ///
    /// Both fields are trimmed; a blank name is omitted rather than sent empty.
    pub fn from_form(name: &str, email: &str) -> Result<Self, CaptureError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CaptureError::Validation);
        }
        let name = name.trim();
        Ok(Self {
            email: email.to_string(),
            name: (!name.is_empty()).then(|| name.to_string()),
        })
    }
}

/// Error payload the backend may send with a non-success status.
#[derive(Debug, Default, Deserialize)]
pub struct SubscribeErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl SubscribeErrorBody {
    /// The detail, when it is a usable string.
    ///
    /// Structured details (lists of validation issues and the like) are not
    /// shown to visitors.
    pub fn message(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Map a completed HTTP exchange to an outcome.
pub fn interpret_response(status: u16, body: &str) -> Result<(), CaptureError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let detail = serde_json::from_str::<SubscribeErrorBody>(body)
        .ok()
        .and_then(|b| b.message());
    Err(CaptureError::rejected(detail))
}
