use clap::Parser;
use promptcast::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();
    env_logger::init();
    color_eyre::install()?;

    let app = promptcast::content_mod::App::parse();

    promptcast::content_mod::run(app).await
}
