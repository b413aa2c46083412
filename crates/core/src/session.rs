//! Single-turn chat session.
//!
//! The session lifecycle is encoded in the types: a [`ChatSession`] is
//! consumed by [`ChatSession::send_message`], which yields a [`PendingTurn`]
//! holding the one outbound request. Resolving the pending turn yields a
//! [`CompletedTurn`] or the error that failed it. No path back to a
//! sendable session exists, so a run can submit at most one message.

use crate::error::CompletionError;
use crate::gemini::{extract_text, Content, GenerateContentRequest, GenerateContentResponse};
use crate::generation::GenerationConfig;

/// A session that has not sent anything yet.
#[derive(Debug, Clone)]
pub struct ChatSession {
    generation_config: GenerationConfig,
    history: Vec<Content>,
}

/// A session waiting for the response to its only message.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    request: GenerateContentRequest,
}

/// A session whose single exchange finished successfully.
#[derive(Debug, Clone)]
pub struct CompletedTurn {
    history: Vec<Content>,
    text: String,
}

impl ChatSession {
    /// Open a session with the given prior history (empty for a fresh run).
    pub fn start(generation_config: GenerationConfig, history: Vec<Content>) -> Self {
        Self {
            generation_config,
            history,
        }
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Append `prompt` as a user turn and build the request that carries it.
    pub fn send_message(self, prompt: impl Into<String>) -> PendingTurn {
        let mut contents = self.history;
        contents.push(Content::user(prompt));

        PendingTurn {
            request: GenerateContentRequest {
                contents,
                generation_config: self.generation_config,
            },
        }
    }
}

impl PendingTurn {
    /// The request to submit to the model.
    pub fn request(&self) -> &GenerateContentRequest {
        &self.request
    }

    /// Finish the turn with the outcome of the request.
    pub fn resolve(
        self,
        outcome: Result<GenerateContentResponse, CompletionError>,
    ) -> Result<CompletedTurn, CompletionError> {
        let text = extract_text(&outcome?)?;

        let mut history = self.request.contents;
        history.push(Content::model(text.clone()));

        Ok(CompletedTurn { history, text })
    }
}

impl CompletedTurn {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// The full exchange: prior history, the user turn, and the model turn.
    pub fn history(&self) -> &[Content] {
        &self.history
    }
}
