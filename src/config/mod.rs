//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # author, contacts, menu
//! ├── types/         # ConfigError, FieldPath, RawTable
//! ├── util           # URL / path prefix normalization, config lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Loading
//!
//! The owner-authored record is read as an untyped `serde_json::Value` first
//! (from TOML or JSON), then converted into a [`SiteConfig`] in one pass.
//! Every problem found along the way is collected into [`ConfigDiagnostics`];
//! a config is either fully valid or rejected.
//!
//! | Key                 | Default | Notes                                   |
//! |---------------------|---------|-----------------------------------------|
//! | `url`               |         | required, absolute http(s) URL          |
//! | `pathPrefix`        | `/`     |                                         |
//! | `title`             |         | required, non-empty                     |
//! | `subtitle`          | `""`    |                                         |
//! | `copyright`         | `""`    |                                         |
//! | `disqusShortname`   | `""`    | empty disables comments                 |
//! | `postsPerPage`      | `4`     | must be > 0                             |
//! | `googleAnalyticsId` | `""`    | empty disables analytics                |
//! | `useKatex`          | `false` |                                         |
//! | `menu`              |         | required, at least one entry            |
//! | `author`            |         | required, `author.name` required        |

pub mod section;
pub mod types;
mod util;

pub use section::{AuthorConfig, Contacts, KNOWN_CHANNELS, MenuItem};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigErrorKind, FieldPath};
pub use util::find_config_file;

use section::{AUTHOR_KEYS, MENU_ITEM_KEYS};
use serde::Serialize;
use serde_json::Value;
use std::{fs, num::NonZeroU32, path::Path};
use types::RawTable;
use util::{normalize_path_prefix, normalize_site_url};

/// Default number of posts on one index page.
pub const DEFAULT_POSTS_PER_PAGE: NonZeroU32 = NonZeroU32::new(4).unwrap();

/// Keys accepted at the top level.
const ROOT_KEYS: &[&str] = &[
    "url",
    "pathPrefix",
    "title",
    "subtitle",
    "copyright",
    "disqusShortname",
    "postsPerPage",
    "googleAnalyticsId",
    "useKatex",
    "menu",
    "author",
];

// ============================================================================
// root configuration
// ============================================================================

/// Validated site configuration.
///
/// Only obtainable through [`SiteConfig::from_raw`] and friends, so holding
/// one means every invariant already holds. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    url: String,
    path_prefix: String,
    title: String,
    subtitle: String,
    copyright: String,
    disqus_shortname: String,
    posts_per_page: NonZeroU32,
    google_analytics_id: String,
    use_katex: bool,
    menu: Vec<MenuItem>,
    author: AuthorConfig,
}

impl SiteConfig {
    /// Validate an untyped config record and fill in defaults.
    ///
    /// All problems are reported at once; nothing is returned unless the
    /// whole record is valid.
    pub fn from_raw(raw: &Value) -> Result<Self, ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        let config = Self::parse(raw, &mut diag);
        diag.finish(config)
    }

    fn parse(raw: &Value, diag: &mut ConfigDiagnostics) -> Option<Self> {
        let root = RawTable::root(raw, diag)?;

        let url = if root.get("url").is_none() {
            diag.missing(root.field("url"));
            None
        } else {
            root.string("url", diag)
                .and_then(|url| normalize_site_url(&url, root.field("url"), diag))
        };
        let path_prefix = root
            .string("pathPrefix", diag)
            .map(|prefix| normalize_path_prefix(&prefix));
        let title = root.required_string("title", diag);
        let subtitle = root.string("subtitle", diag).unwrap_or_default();
        let copyright = root.string("copyright", diag).unwrap_or_default();
        let disqus_shortname = root.string("disqusShortname", diag).unwrap_or_default();
        let posts_per_page = match root.get("postsPerPage") {
            None => Some(DEFAULT_POSTS_PER_PAGE),
            Some(_) => root.positive_int("postsPerPage", diag),
        };
        let google_analytics_id = root.string("googleAnalyticsId", diag).unwrap_or_default();
        let use_katex = root.bool("useKatex", diag).unwrap_or(false);
        let menu = MenuItem::parse_all(&root, diag);
        let author = AuthorConfig::parse(&root, diag);

        Some(Self {
            url: url?,
            path_prefix: path_prefix.unwrap_or_else(|| "/".to_owned()),
            title: title?.trim().to_owned(),
            subtitle,
            copyright,
            disqus_shortname: disqus_shortname.trim().to_owned(),
            posts_per_page: posts_per_page?,
            google_analytics_id: google_analytics_id.trim().to_owned(),
            use_katex,
            menu: menu?,
            author: author?,
        })
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: Value = toml::from_str(content)?;
        Ok(Self::from_raw(&raw)?)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let raw: Value = serde_json::from_str(content)?;
        Ok(Self::from_raw(&raw)?)
    }

    /// Load configuration from a `.toml` or `.json` file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = read_raw(path)?;
        Ok(Self::from_raw(&raw)?)
    }

    /// The camelCase record this config was loaded from, with defaults filled in.
    ///
    /// Feeding it back to [`SiteConfig::from_raw`] yields an equal config.
    pub fn to_raw(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Base URL without trailing slash.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[inline]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// `url` joined with `path_prefix`, never containing `//` after the scheme.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.url, self.path_prefix)
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[inline]
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Disqus shortname, `None` when comments are disabled.
    pub fn comments(&self) -> Option<&str> {
        non_empty(&self.disqus_shortname)
    }

    #[inline]
    pub fn posts_per_page(&self) -> u32 {
        self.posts_per_page.get()
    }

    /// Google Analytics id, `None` when analytics is disabled.
    pub fn analytics_id(&self) -> Option<&str> {
        non_empty(&self.google_analytics_id)
    }

    #[inline]
    pub fn use_katex(&self) -> bool {
        self.use_katex
    }

    /// Navigation entries in authored order; never empty.
    #[inline]
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    #[inline]
    pub fn author(&self) -> &AuthorConfig {
        &self.author
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// Read a config file into an untyped record, picking the parser by extension.
pub fn read_raw(path: &Path) -> Result<Value, ConfigError> {
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Keys in the raw record that the loader does not read.
///
/// These are ignored by [`SiteConfig::from_raw`]; callers surface them as
/// warnings since they are usually typos. Custom contact channels are not
/// reported.
pub fn unknown_fields(raw: &Value) -> Vec<FieldPath> {
    let Value::Object(map) = raw else {
        return Vec::new();
    };
    let root = RawTable::new(map, FieldPath::new(""));
    let mut unknown = root.unknown_keys(ROOT_KEYS);

    if let Some(Value::Object(author)) = root.get("author") {
        unknown.extend(RawTable::new(author, root.field("author")).unknown_keys(AUTHOR_KEYS));
    }

    if let Some(Value::Array(items)) = root.get("menu") {
        for (i, item) in items.iter().enumerate() {
            if let Value::Object(entry) = item {
                let table = RawTable::new(entry, root.field("menu").index(i));
                unknown.extend(table.unknown_keys(MENU_ITEM_KEYS));
            }
        }
    }

    unknown
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Smallest valid record, with `extra` merged over the top level.
#[cfg(test)]
pub fn test_raw(extra: Value) -> Value {
    let mut raw = serde_json::json!({
        "url": "https://x.com",
        "title": "T",
        "menu": [{ "label": "A", "path": "/" }],
        "author": { "name": "N", "contacts": {} },
    });
    if let (Value::Object(base), Value::Object(extra)) = (&mut raw, extra) {
        base.extend(extra);
    }
    raw
}

/// Load [`test_raw`], panicking on diagnostics.
#[cfg(test)]
pub fn test_load(extra: Value) -> SiteConfig {
    SiteConfig::from_raw(&test_raw(extra)).unwrap_or_else(|diag| panic!("{diag}"))
}

// ============================================================================
// tests
// ============================================================================
