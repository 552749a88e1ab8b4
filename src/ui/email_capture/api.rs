//! Subscription request over `fetch`

use gloo_net::http::Request;

use crate::core::email_capture::{CaptureError, SubscribeRequest, interpret_response};

/// POST the subscription and map the outcome.
///
/// A request that never completes is a transport error; any response is
/// interpreted by status and `detail`.
pub async fn subscribe(url: &str, request: &SubscribeRequest) -> Result<(), CaptureError> {
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|_| CaptureError::Transport)?
        .send()
        .await
        .map_err(|_| CaptureError::Transport)?;

    let status = response.status();
    let body = if response.ok() {
        String::new()
    } else {
        response.text().await.unwrap_or_default()
    };

    interpret_response(status, &body)
}
