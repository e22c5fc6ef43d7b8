//! `author.contacts` channel handles.
//!
//! # Example
//!
//! ```toml
//! [author.contacts]
//! email = "ivor@devpie.io"
//! github = "ivorscott"
//! cv = "https://hire.ivorscott.com"
//! ```
//!
//! Every well-known channel is present after loading. Channels the owner did
//! not fill in hold `""`, and templates omit them.

use crate::config::types::{ConfigDiagnostics, RawTable, type_name};
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

/// Channels the theme knows how to link and draw an icon for.
pub const KNOWN_CHANNELS: [&str; 16] = [
    "email",
    "facebook",
    "telegram",
    "twitter",
    "github",
    "rss",
    "vkontakte",
    "linkedin",
    "instagram",
    "line",
    "gitlab",
    "weibo",
    "codepen",
    "youtube",
    "soundcloud",
    "medium",
];

/// Ordered channel → handle mapping.
///
/// Channels appear in authored order, followed by any well-known channel the
/// author left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contacts {
    entries: Vec<(String, String)>,
}

impl Default for Contacts {
    fn default() -> Self {
        Self::with_known(Vec::new())
    }
}

impl Contacts {
    fn with_known(mut entries: Vec<(String, String)>) -> Self {
        for channel in KNOWN_CHANNELS {
            if !entries.iter().any(|(name, _)| name == channel) {
                entries.push((channel.to_owned(), String::new()));
            }
        }
        Self { entries }
    }

    /// Parse the optional `contacts` table of `author`.
    ///
    /// Values are trimmed, so a whitespace-only handle counts as not provided.
    pub(crate) fn parse(author: &RawTable<'_>, diag: &mut ConfigDiagnostics) -> Option<Self> {
        let Some(table) = author.table("contacts", diag) else {
            return author.get("contacts").is_none().then(Self::default);
        };

        let before = diag.len();
        let mut entries = Vec::new();
        for (channel, value) in table.entries() {
            match value {
                Value::String(handle) => entries.push((channel.clone(), handle.trim().to_owned())),
                Value::Null => entries.push((channel.clone(), String::new())),
                other => diag.invalid_type(table.field(channel), "string", type_name(other)),
            }
        }

        (diag.len() == before).then(|| Self::with_known(entries))
    }

    /// Handle for `channel`, or `""` when not provided.
    pub fn get(&self, channel: &str) -> &str {
        self.entries
            .iter()
            .find(|(name, _)| name == channel)
            .map_or("", |(_, handle)| handle.as_str())
    }

    /// All channels, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Channels with a handle, in display order.
    pub fn visible(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, handle)| !handle.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Contacts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (channel, handle) in &self.entries {
            map.serialize_entry(channel, handle)?;
        }
        map.end()
    }
}
