//! `footer` command.

use super::{Cli, load_config};
use anyhow::Result;
use lumen::render::render_copyright;

/// Footer markup for `text`, or for the config's `copyright` when omitted.
pub fn footer_markup(cli: &Cli, text: Option<&str>) -> Result<String> {
    match text {
        Some(text) => Ok(render_copyright(text)),
        None => {
            let config = load_config(cli)?;
            Ok(render_copyright(config.copyright()))
        }
    }
}
