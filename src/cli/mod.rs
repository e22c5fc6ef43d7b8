//! Command-line interface module.

mod args;
pub mod check;
pub mod footer;
pub mod init;
pub mod show;

pub use args::{Cli, Commands, ShowFormat};

use anyhow::{Result, bail};
use lumen::config::{self, ConfigError, SiteConfig, find_config_file};
use lumen::{debug, log, logger};
use std::path::Path;

/// Locate, read and validate the config file named by `--config`.
///
/// Unknown keys are printed as warnings; validation errors abort.
pub fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let Some(path) = find_config_file(&cli.config) else {
        bail!(
            "config file '{}' not found. Run 'lumen init' to create one.",
            cli.config.display()
        );
    };
    debug!("config"; "using {}", path.display());

    let raw = config::read_raw(&path)?;

    let unknown = config::unknown_fields(&raw);
    if !unknown.is_empty() {
        log!("warning"; "unknown fields in {}, ignoring:", display_name(&path));
        logger::log_list(unknown.iter().map(|f| f.as_str()));
    }

    let config = SiteConfig::from_raw(&raw).map_err(ConfigError::from)?;
    Ok(config)
}

/// File name only, since the config usually sits at the site root.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
