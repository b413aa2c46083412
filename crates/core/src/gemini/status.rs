use super::types::ErrorResponse;
use crate::error::CompletionError;

/// Classify a non-success HTTP response into a [`CompletionError`].
///
/// `body` is the raw response body; it is parsed as the API error envelope
/// when possible and otherwise reported as-is.
pub fn classify_error(status: u16, body: &str) -> CompletionError {
    let error = serde_json::from_str::<ErrorResponse>(body)
        .map(|envelope| envelope.error)
        .ok();

    let message = match &error {
        Some(error) if !error.message.is_empty() => error.message.clone(),
        _ if body.trim().is_empty() => format!("HTTP {status}"),
        _ => format!("HTTP {status}: {}", body.trim()),
    };

    let api_status = error.as_ref().and_then(|error| error.status.as_deref());
    let has_reason = |wanted: &str| {
        error.as_ref().is_some_and(|error| {
            error
                .details
                .iter()
                .any(|detail| detail.reason.as_deref() == Some(wanted))
        })
    };

    if status == 429 || api_status == Some("RESOURCE_EXHAUSTED") {
        return CompletionError::QuotaExceeded(message);
    }

    let safety_precondition = api_status == Some("FAILED_PRECONDITION")
        && message.to_lowercase().contains("safety");

    if has_reason("SAFETY") || safety_precondition {
        return CompletionError::ContentRejected(message);
    }

    if matches!(status, 401 | 403 | 404)
        || has_reason("API_KEY_INVALID")
        || matches!(api_status, Some("UNAUTHENTICATED" | "PERMISSION_DENIED" | "NOT_FOUND"))
    {
        return CompletionError::ClientConstruction(message);
    }

    CompletionError::Network(message)
}
