use crate::prelude::*;
use crate::Global;
use promptcast_core::template::{social_template, Platform, SAMPLE_DESCRIPTION};

#[derive(Debug, clap::Parser)]
#[command(name = "content-mod")]
#[command(version)]
#[command(about = "Turn a short description into social media post copy with Gemini")]
pub struct App {
    /// Description of what to post about. Defaults to a sample IoT project.
    pub payload: Option<String>,

    /// Platform to write the post for
    #[clap(long, short, default_value = "linkedin")]
    pub platform: Platform,

    #[clap(flatten)]
    pub global: Global,
}

pub async fn run(app: App) -> Result<()> {
    let payload = app.payload.as_deref().unwrap_or(SAMPLE_DESCRIPTION);
    let template = social_template(app.platform);

    log::debug!("Writing a {} post from {} bytes", app.platform, payload.len());

    crate::runner::run_prompt(&template, payload, &app.global).await
}
