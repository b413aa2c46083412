use promptcast_core::gemini::{classify_error, GenerateContentRequest, GenerateContentResponse};
use promptcast_core::generation::GenerationConfig;
use promptcast_core::CompletionError;

use crate::config::Config;

/// A model bound to one generation config that can answer a request.
///
/// The runner only talks to this trait, so tests can swap in a stub.
#[allow(async_fn_in_trait)]
pub trait GenerativeModel {
    fn generation_config(&self) -> &GenerationConfig;

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, CompletionError>;
}

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// Construction does not touch the network; an invalid key or an unknown
/// model surfaces on the first request.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        let model = config.model.trim();
        let model = model.strip_prefix("models/").unwrap_or(model);

        if model.is_empty() {
            return Err(CompletionError::ClientConstruction(
                "model identifier is empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("promptcast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CompletionError::ClientConstruction(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: generate_content_url(&config.base_url, model),
            api_key: config.api_key().to_string(),
            generation_config: config.generation.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// `{base_url}/models/{model}:generateContent`
pub fn generate_content_url(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}

impl GenerativeModel for GeminiClient {
    fn generation_config(&self) -> &GenerationConfig {
        &self.generation_config
    }

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, CompletionError> {
        log::debug!(
            "POST {} ({} turn(s))",
            self.endpoint,
            request.contents.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        log::debug!("Response status {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(classify_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| CompletionError::Network(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    fn config(model: &str, base_url: &str) -> Config {
        Config::new(Some("key".to_string()), model, base_url).unwrap()
    }

    #[test]
    fn test_generate_content_url() {
        assert_eq!(
            generate_content_url(DEFAULT_BASE_URL, "gemini-2.0-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_generate_content_url_trailing_slash() {
        assert_eq!(
            generate_content_url("http://localhost:8080/", "m"),
            "http://localhost:8080/models/m:generateContent"
        );
    }

    #[test]
    fn test_client_accepts_prefixed_model_name() {
        let client = GeminiClient::new(&config("models/gemini-2.0-flash", DEFAULT_BASE_URL)).unwrap();
        assert!(client.endpoint().ends_with("/models/gemini-2.0-flash:generateContent"));
    }

    #[test]
    fn test_client_rejects_empty_model() {
        let err = GeminiClient::new(&config("  ", DEFAULT_BASE_URL)).unwrap_err();
        assert!(matches!(err, CompletionError::ClientConstruction(_)));
    }

    #[test]
    fn test_client_carries_generation_config() {
        let client = GeminiClient::new(&config("gemini-2.0-flash", DEFAULT_BASE_URL)).unwrap();
        assert_eq!(client.generation_config(), &GenerationConfig::default());
    }
}
