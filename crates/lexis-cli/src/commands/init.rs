//! Init command implementation.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lexis_nlp::provision;
use std::path::Path;

/// Execute the init command.
///
/// Installs the tokenizer/tagger data if missing and writes the default
/// configuration file when none exists yet.
pub fn execute_init(config: &Config, config_path: &Path, formatter: &Formatter) -> Result<()> {
    let data_dir = config
        .nlp
        .resolved_data_dir()
        .ok_or_else(|| CliError::Config("Could not determine a data directory".into()))?;

    let lexicon = provision::ensure_lexicon(&data_dir, &config.nlp.lexicon_file, true)?;
    println!("{}", formatter.success(&format!("Lexicon ready at {}", lexicon.display())));

    if config_path.exists() {
        println!("{}", formatter.info(&format!("Using config {}", config_path.display())));
    } else {
        config.save_to(config_path)?;
        println!("{}", formatter.success(&format!("Wrote config {}", config_path.display())));
    }

    Ok(())
}
