use std::fmt;

use promptcast_core::generation::GenerationConfig;
use promptcast_core::CompletionError;

use crate::Global;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Everything the client needs, resolved once at program entry.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    pub model: String,
    pub base_url: String,
    pub generation: GenerationConfig,
}

impl Config {
    /// Build the configuration, rejecting an absent or blank credential.
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, CompletionError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(CompletionError::MissingCredential)?;

        Ok(Self {
            api_key,
            model: model.into(),
            base_url: base_url.into(),
            generation: GenerationConfig::default(),
        })
    }

    pub fn from_global(global: &Global) -> Result<Self, CompletionError> {
        Self::new(
            global.api_key.clone(),
            global.model.clone(),
            global.base_url.clone(),
        )
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("generation", &self.generation)
            .finish()
    }
}
