use crate::prelude::*;
use crate::Global;
use promptcast_core::template::{code_template, CodeLanguage, SAMPLE_CODE};

#[derive(Debug, clap::Parser)]
#[command(name = "code-opt")]
#[command(version)]
#[command(about = "Summarize, format, and optimize a code snippet with Gemini")]
pub struct App {
    /// Source code to review. Defaults to a sample C program.
    pub payload: Option<String>,

    /// Language of the source code
    #[clap(long, short, default_value = "c")]
    pub language: CodeLanguage,

    #[clap(flatten)]
    pub global: Global,
}

pub async fn run(app: App) -> Result<()> {
    let payload = app.payload.as_deref().unwrap_or(SAMPLE_CODE);
    let template = code_template(app.language);

    log::debug!("Reviewing {} bytes of {} code", payload.len(), app.language);

    crate::runner::run_prompt(&template, payload, &app.global).await
}
