/// Every way a single-turn completion can fail.
///
/// None of these are recovered locally: the shell surfaces them to the
/// process boundary and exits without printing a response.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Missing API credential: set GEMINI_API_KEY or pass --api-key")]
    MissingCredential,

    #[error("Failed to construct the model client: {0}")]
    ClientConstruction(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Content rejected by the model: {0}")]
    ContentRejected(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("The model returned an empty response")]
    EmptyResponse,
}
