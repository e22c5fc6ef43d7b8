//! `show` command.

use super::ShowFormat;
use anyhow::Result;
use lumen::config::SiteConfig;

/// Normalized config in the requested format.
pub fn format_config(config: &SiteConfig, format: ShowFormat) -> Result<String> {
    let out = match format {
        ShowFormat::Json => serde_json::to_string_pretty(config)?,
        ShowFormat::Toml => toml::to_string_pretty(config)?,
    };
    Ok(out)
}
