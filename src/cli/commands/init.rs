use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{CommandResult, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

/// Write a default config file into `dir`. Fails if one already exists.
pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

    Ok(CommandResult::Init(InitSummary {
        config_path: Path::new(CONFIG_FILE_NAME).to_path_buf(),
    }))
}
