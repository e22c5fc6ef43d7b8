//! `menu` navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[menu]]
//! label = "Articles"
//! path = "/"
//!
//! [[menu]]
//! label = "About me"
//! path = "/pages/about"
//! ```
//!
//! Entries render in the order they are written.

use crate::config::types::{ConfigDiagnostics, ConfigErrorKind, FieldPath, RawTable, type_name};
use serde::Serialize;
use serde_json::Value;

/// Keys accepted in a menu entry.
pub const MENU_ITEM_KEYS: &[&str] = &["label", "path"];

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    label: String,
    path: String,
}

impl MenuItem {
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Site-relative path, always starting with a single `/`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parse the `menu` array of the root table.
    ///
    /// # Checks
    /// - `menu` is present and holds at least one entry
    /// - each entry is a table with a non-empty `label`
    /// - each `path` starts with `/` (and is not protocol-relative `//`)
    pub(crate) fn parse_all(root: &RawTable<'_>, diag: &mut ConfigDiagnostics) -> Option<Vec<Self>> {
        let field = root.field("menu");
        if root.get("menu").is_none() {
            diag.error_with_hint(
                ConfigErrorKind::MissingField,
                field,
                "required",
                "add at least one [[menu]] entry with label and path",
            );
            return None;
        }

        let entries = root.array("menu", diag)?;
        if entries.is_empty() {
            diag.error_with_hint(
                ConfigErrorKind::InvalidMenuEntry,
                field,
                "must contain at least one entry",
                "add an entry like { label = \"Articles\", path = \"/\" }",
            );
            return None;
        }

        let before = diag.len();
        let items: Vec<_> = entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| Self::parse(entry, field.index(i), diag))
            .collect();

        (diag.len() == before).then_some(items)
    }

    fn parse(entry: &Value, field: FieldPath, diag: &mut ConfigDiagnostics) -> Option<Self> {
        let Value::Object(map) = entry else {
            diag.error(
                ConfigErrorKind::InvalidMenuEntry,
                field,
                format!("expected table with label and path, found {}", type_name(entry)),
            );
            return None;
        };
        let table = RawTable::new(map, field);

        let label = Self::entry_string(&table, "label", diag);
        let path = Self::entry_string(&table, "path", diag);

        let label = label.filter(|label| {
            let ok = !label.is_empty();
            if !ok {
                diag.error(
                    ConfigErrorKind::InvalidMenuEntry,
                    table.field("label"),
                    "must not be empty",
                );
            }
            ok
        });
        let path = path.filter(|path| {
            let ok = path.starts_with('/') && !path.starts_with("//");
            if !ok {
                diag.error_with_hint(
                    ConfigErrorKind::InvalidMenuEntry,
                    table.field("path"),
                    format!("`{path}` must start with a single `/`"),
                    "use a site-relative path like \"/pages/about\"",
                );
            }
            ok
        });

        Some(Self {
            label: label?,
            path: path?,
        })
    }

    /// Menu entry fields are reported as `InvalidMenuEntry` whatever is wrong with them.
    fn entry_string(table: &RawTable<'_>, key: &str, diag: &mut ConfigDiagnostics) -> Option<String> {
        match table.get(key) {
            Some(Value::String(s)) => Some(s.trim().to_owned()),
            Some(other) => {
                diag.error(
                    ConfigErrorKind::InvalidMenuEntry,
                    table.field(key),
                    format!("expected string, found {}", type_name(other)),
                );
                None
            }
            None => {
                diag.error(ConfigErrorKind::InvalidMenuEntry, table.field(key), "required");
                None
            }
        }
    }
}
