use clap::Parser;
use color_eyre::eyre::Result;

mod cli;
mod lint;

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = cli::App::parse();

    match app.command {
        cli::Commands::Lint(args) => lint::run(&args),
    }
}
