//! Lumen - configuration loader for a personal blog theme.
//!
//! The theme's build consumes one [`config::SiteConfig`]: loaded once from
//! an owner-authored record, validated, then shared read-only. The same
//! crate ships the few markup helpers that depend on it (see [`render`]).
//!
//! ```ignore
//! let config = SiteConfig::from_path(Path::new("site.toml"))?;
//! for item in config.menu() {
//!     nav.push(item.label(), item.path());
//! }
//! let footer = render::render_copyright(config.copyright());
//! ```

pub mod config;
pub mod logger;
pub mod render;
pub mod utils;
