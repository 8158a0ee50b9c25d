//! Provisioning of capability data before first use

use crate::lexicon::{Lexicon, BUNDLED_LEXICON};
use crate::NlpError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Make sure the lexicon exists in `data_dir`, installing the bundled copy if
/// it is missing and `install` is set. Returns the lexicon path.
pub fn ensure_lexicon(
    data_dir: &Path,
    file_name: &str,
    install: bool,
) -> Result<PathBuf, NlpError> {
    let path = data_dir.join(file_name);

    if path.is_file() {
        return Ok(path);
    }

    if !install {
        return Err(NlpError::Initialization(format!(
            "Lexicon not found at '{}' and provisioning is disabled",
            path.display()
        )));
    }

    info!("Installing bundled lexicon to '{}'", path.display());

    fs::create_dir_all(data_dir).map_err(|e| {
        NlpError::Initialization(format!(
            "Could not create data directory '{}': {}",
            data_dir.display(),
            e
        ))
    })?;
    fs::write(&path, BUNDLED_LEXICON).map_err(|e| {
        NlpError::Initialization(format!("Could not write lexicon '{}': {}", path.display(), e))
    })?;

    info!("Lexicon installed");
    Ok(path)
}

/// Provision and load the lexicon in one step
pub fn load_or_install(
    data_dir: &Path,
    file_name: &str,
    install: bool,
) -> Result<Lexicon, NlpError> {
    let path = ensure_lexicon(data_dir, file_name, install)?;
    Lexicon::load(&path)
}
