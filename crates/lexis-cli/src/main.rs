//! Lexis CLI - Word counts and adjective scoreboards for PDF and DOCX documents.

use clap::Parser;
use lexis_cli::commands;
use lexis_cli::repl;
use lexis_cli::{Cli, Command, Config, Formatter};
use lexis_nlp::NlpCapability;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> lexis_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let mut config = if config_path.exists() {
        Config::load_from(&config_path)?
    } else {
        let cfg = Config::default();
        if cli.config.is_none() {
            cfg.save_to(&config_path).ok();
        }
        cfg
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let mut formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Init) => {
            commands::execute_init(&config, &config_path, &formatter)?;
        }
        None | Some(Command::Repl) => {
            let capability = initialize(&config)?;
            repl::run_repl(&mut config, capability, &mut formatter).await?;
        }
        Some(Command::Analyze(args)) => {
            let capability = initialize(&config)?;
            commands::execute_analyze(args, capability, &config, &formatter).await?;
        }
    }

    Ok(())
}

/// Ready the tokenizer/tagger before any document is read; failure is fatal.
fn initialize(config: &Config) -> lexis_cli::Result<Arc<NlpCapability>> {
    Ok(Arc::new(NlpCapability::initialize(&config.nlp)?))
}
