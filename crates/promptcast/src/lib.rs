//! Imperative shell for promptcast.
//!
//! Each binary parses its [`clap`] arguments, composes a prompt with the
//! pure core, and hands it to [`runner::run_prompt`], which loads the
//! configuration, builds the client, runs one chat turn, and writes the
//! response to stdout.

use promptcast_core::generation::DEFAULT_MODEL;

pub mod client;
pub mod code_opt;
pub mod config;
pub mod content_mod;
pub mod prelude;
pub mod runner;
pub mod sink;

pub use config::DEFAULT_BASE_URL;

/// Options shared by every binary.
#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Gemini API key
    #[clap(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier
    #[clap(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the generative language API
    #[clap(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Print the composed prompt and exit without calling the model
    #[clap(long)]
    pub dry_run: bool,

    /// Whether to display additional information.
    #[clap(long, env = "PROMPTCAST_VERBOSE", default_value = "false")]
    pub verbose: bool,
}
