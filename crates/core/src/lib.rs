//! Core library for promptcast
//!
//! This crate implements the **Functional Core** of promptcast, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`promptcast_core`** (this crate): Pure transformation functions with zero I/O
//! - **`promptcast`**: Configuration, HTTP, and stdout (the Imperative Shell)
//!
//! Everything here is deterministic: composing the same template with the
//! same payload always yields the same prompt, and classifying the same
//! response always yields the same outcome. The only non-determinism in a
//! run lives at the remote model boundary.
//!
//! # Module Organization
//!
//! - [`generation`]: Sampling parameters sent with every request
//! - [`template`]: Named prompt templates and prompt composition
//! - [`session`]: The single-turn chat session state machine
//! - [`gemini`]: `generateContent` wire types, text extraction, error classification
//! - [`error`]: The completion error taxonomy
//!
//! # Example Usage
//!
//! ```rust
//! use promptcast_core::template::{code_template, CodeLanguage};
//! use promptcast_core::session::ChatSession;
//! use promptcast_core::generation::GenerationConfig;
//!
//! let prompt = code_template(CodeLanguage::C).compose("int main() { return 0; }");
//! let pending = ChatSession::start(GenerationConfig::default(), Vec::new()).send_message(prompt);
//!
//! assert_eq!(pending.request().contents.len(), 1);
//! ```

pub mod error;
pub mod gemini;
pub mod generation;
pub mod session;
pub mod template;

pub use error::CompletionError;
