use clap::Parser;
use std::path::PathBuf;

use pro_trivia::config::Config;
use pro_trivia::logging::init_tracing;
use pro_trivia::ui;

/// Pro-Trivia: a timed multiple-choice trivia quiz for the terminal.
#[derive(Debug, Parser)]
#[command(name = "pro-trivia", version, about)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.config {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };

    ui::run(config)?;
    Ok(())
}
