use std::io::Write;

use crate::client::{GeminiClient, GenerativeModel};
use crate::config::Config;
use crate::prelude::{eprintln, *};
use crate::sink::write_response;
use crate::Global;
use promptcast_core::session::{ChatSession, CompletedTurn};
use promptcast_core::template::PromptTemplate;

/// Run one chat turn: empty history, one message, one response.
pub async fn run_single_turn<M: GenerativeModel>(
    model: &M,
    prompt: String,
) -> std::result::Result<String, CompletionError> {
    let pending =
        ChatSession::start(model.generation_config().clone(), Vec::new()).send_message(prompt);

    let outcome = model.generate_content(pending.request()).await;

    if let Err(err) = &outcome {
        log::debug!("Request failed: {}", err);
    }

    pending.resolve(outcome).map(CompletedTurn::into_text)
}

/// Run one turn and write the response to `out`.
///
/// Nothing is written unless the turn completes.
pub async fn execute<M: GenerativeModel, W: Write>(
    model: &M,
    prompt: String,
    out: &mut W,
) -> Result<()> {
    let text = run_single_turn(model, prompt)
        .await
        .wrap_err("Model generation failed")?;

    write_response(out, &text).wrap_err("Failed to write the response")?;

    Ok(())
}

/// Entry point shared by the binaries.
///
/// Loads the configuration, builds the client, composes the prompt, and
/// prints the model's answer. With `--dry-run` only the composed prompt is
/// printed and no credential is required.
pub async fn run_prompt(template: &PromptTemplate, payload: &str, global: &Global) -> Result<()> {
    if global.dry_run {
        let prompt = template.compose(payload);
        return write_response(&mut std::io::stdout(), &prompt)
            .wrap_err("Failed to write the prompt");
    }

    let config = Config::from_global(global).wrap_err("Invalid configuration")?;
    let client = GeminiClient::new(&config).wrap_err("Failed to create the Gemini client")?;

    let prompt = template.compose(payload);

    if global.verbose {
        eprintln!("{}", run_summary(template, &config, client.endpoint(), &prompt));
    }

    execute(&client, prompt, &mut std::io::stdout()).await
}

/// Lines printed to stderr with `--verbose`.
fn run_summary(template: &PromptTemplate, config: &Config, endpoint: &str, prompt: &str) -> String {
    format!(
        "Template: {}\nModel: {}\nEndpoint: {}\nResponse format: {}\nPrompt length: {} bytes",
        template.name,
        config.model,
        endpoint,
        config.generation.response_format.mime_type(),
        prompt.len()
    )
}
