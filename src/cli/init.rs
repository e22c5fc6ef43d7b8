//! `init` command: configuration file generation.

use anyhow::{Context, Result, bail};
use lumen::log;
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "site.toml";

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# Lumen site configuration (v{version})

# Absolute base URL of the deployed site.
url = "https://example.com"
# Path the site is served under, e.g. "/blog/".
pathPrefix = "/"
title = "My Blog"
subtitle = ""
copyright = "© All rights reserved."
# Leave empty to disable comments.
disqusShortname = ""
postsPerPage = 4
# Leave empty to disable analytics.
googleAnalyticsId = ""
useKatex = false

# Navigation, rendered in this order. Paths start with "/".
[[menu]]
label = "Articles"
path = "/"

[[menu]]
label = "About me"
path = "/pages/about"

[author]
name = "Your Name"
photo = "/photo.jpg"
bio = "A few words about you."

# Empty or missing channels are not shown.
[author.contacts]
email = ""
twitter = ""
github = ""
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Write the template into `root`, refusing to overwrite an existing config.
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "created {}", path.display());
    Ok(())
}

/// Run `init` for an optional directory name relative to cwd.
pub fn new_site(name: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };
    write_config(&root)
}
