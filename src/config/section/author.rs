//! `author` section: bio block shown in the sidebar.
//!
//! # Example
//!
//! ```toml
//! [author]
//! name = "Ivor Scott"
//! photo = "/photo.jpg"
//! bio = "Artist, Software Engineer. Based in Berlin."
//! ```

use super::Contacts;
use crate::config::types::{ConfigDiagnostics, RawTable};
use serde::Serialize;

/// Keys accepted in the `author` table.
pub const AUTHOR_KEYS: &[&str] = &["name", "photo", "bio", "contacts"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorConfig {
    name: String,
    photo: String,
    bio: String,
    contacts: Contacts,
}

impl AuthorConfig {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Avatar path or URL; empty when not set.
    #[inline]
    pub fn photo(&self) -> &str {
        &self.photo
    }

    /// Free text, may span several lines.
    #[inline]
    pub fn bio(&self) -> &str {
        &self.bio
    }

    #[inline]
    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    pub(crate) fn parse(root: &RawTable<'_>, diag: &mut ConfigDiagnostics) -> Option<Self> {
        if root.get("author").is_none() {
            diag.missing(root.field("author"));
            return None;
        }
        let table = root.table("author", diag)?;

        let name = table.required_string("name", diag);
        let photo = table.string("photo", diag).unwrap_or_default();
        let bio = table.string("bio", diag).unwrap_or_default();
        let contacts = Contacts::parse(&table, diag);

        Some(Self {
            name: name?.trim().to_owned(),
            photo: photo.trim().to_owned(),
            bio,
            contacts: contacts?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigErrorKind;
    use serde_json::{Value, json};

    fn parse(value: Value) -> (Option<AuthorConfig>, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let root = RawTable::root(&value, &mut diag).unwrap();
        let author = AuthorConfig::parse(&root, &mut diag);
        (author, diag)
    }

    #[test]
    fn test_defaults() {
        let (author, diag) = parse(json!({ "author": { "name": "N" } }));
        let author = author.unwrap();
        assert!(diag.is_empty());
        assert_eq!(author.name(), "N");
        assert_eq!(author.photo(), "");
        assert_eq!(author.bio(), "");
        assert_eq!(author.contacts().get("email"), "");
    }

    #[test]
    fn test_bio_keeps_newlines() {
        let (author, _) = parse(json!({ "author": { "name": "N", "bio": "line one\nline two" } }));
        assert_eq!(author.unwrap().bio(), "line one\nline two");
    }

    #[test]
    fn test_missing_author() {
        let (_, diag) = parse(json!({}));
        assert_eq!(diag.find("author").unwrap().kind, ConfigErrorKind::MissingField);
    }

    #[test]
    fn test_missing_name() {
        let (author, diag) = parse(json!({ "author": { "photo": "/photo.jpg" } }));
        assert!(author.is_none());
        assert_eq!(
            diag.find("author.name").unwrap().kind,
            ConfigErrorKind::MissingField
        );
    }

    #[test]
    fn test_errors_reported_together() {
        let (_, diag) = parse(json!({ "author": { "bio": 1, "contacts": { "github": false } } }));
        assert!(diag.find("author.name").is_some());
        assert!(diag.find("author.bio").is_some());
        assert!(diag.find("author.contacts.github").is_some());
    }
}
