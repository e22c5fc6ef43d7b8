//! Typed reads from the untyped config record.
//!
//! The loader never deserializes straight into `SiteConfig`. It walks the
//! raw `serde_json::Value` through `RawTable`, which records a diagnostic for
//! every field of the wrong shape and keeps going.
//!
//! `null` is treated the same as an absent key.

use super::{ConfigDiagnostics, ConfigErrorKind, FieldPath};
use serde_json::{Map, Value};
use std::num::NonZeroU32;

/// A borrowed object in the raw record, with its position in the document.
#[derive(Debug, Clone)]
pub struct RawTable<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> RawTable<'a> {
    pub fn new(map: &'a Map<String, Value>, path: FieldPath) -> Self {
        Self { map, path }
    }

    /// Wrap the document root, which must be an object.
    pub fn root(value: &'a Value, diag: &mut ConfigDiagnostics) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::new(map, FieldPath::new(""))),
            other => {
                diag.invalid_type(FieldPath::new("<root>"), "table", type_name(other));
                None
            }
        }
    }

    /// Path of `key` inside this table.
    #[inline]
    pub fn field(&self, key: &str) -> FieldPath {
        self.path.key(key)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> + use<'a> {
        self.map.iter()
    }

    /// Optional string. Wrong type records `InvalidType`.
    pub fn string(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            other => {
                diag.invalid_type(self.field(key), "string", type_name(other));
                None
            }
        }
    }

    /// Required non-blank string. Absent or blank records `MissingField`.
    pub fn required_string(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<String> {
        if self.get(key).is_none() {
            diag.missing(self.field(key));
            return None;
        }
        let value = self.string(key, diag)?;
        if value.trim().is_empty() {
            diag.error(
                ConfigErrorKind::MissingField,
                self.field(key),
                "must not be empty",
            );
            return None;
        }
        Some(value)
    }

    pub fn bool(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            other => {
                diag.invalid_type(self.field(key), "boolean", type_name(other));
                None
            }
        }
    }

    /// Optional integer that must be greater than zero.
    pub fn positive_int(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<NonZeroU32> {
        let value = self.get(key)?;
        let Value::Number(number) = value else {
            diag.invalid_type(self.field(key), "positive integer", type_name(value));
            return None;
        };

        if let Some(n) = number.as_u64() {
            let parsed = u32::try_from(n).ok().and_then(NonZeroU32::new);
            if parsed.is_none() {
                diag.error_with_hint(
                    ConfigErrorKind::InvalidType,
                    self.field(key),
                    format!("expected positive integer, found {n}"),
                    format!("value must be between 1 and {}", u32::MAX),
                );
            }
            return parsed;
        }

        let found = if number.is_i64() { "negative integer" } else { "float" };
        diag.invalid_type(self.field(key), "positive integer", found);
        None
    }

    /// Optional nested table.
    pub fn table(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<RawTable<'a>> {
        match self.get(key)? {
            Value::Object(map) => Some(RawTable::new(map, self.field(key))),
            other => {
                diag.invalid_type(self.field(key), "table", type_name(other));
                None
            }
        }
    }

    /// Optional array.
    pub fn array(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<&'a [Value]> {
        match self.get(key)? {
            Value::Array(items) => Some(items.as_slice()),
            other => {
                diag.invalid_type(self.field(key), "array", type_name(other));
                None
            }
        }
    }

    /// Keys present in this table that are not listed in `known`.
    pub fn unknown_keys(&self, known: &[&str]) -> Vec<FieldPath> {
        self.map
            .keys()
            .filter(|key| !known.contains(&key.as_str()))
            .map(|key| self.field(key))
            .collect()
    }
}

/// Human-readable name of a raw value's type, used in diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_table<R>(
        value: Value,
        f: impl FnOnce(&RawTable<'_>, &mut ConfigDiagnostics) -> R,
    ) -> (R, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let table = RawTable::root(&value, &mut diag).unwrap();
        let out = f(&table, &mut diag);
        (out, diag)
    }

    #[test]
    fn test_root_must_be_table() {
        let mut diag = ConfigDiagnostics::new();
        let value = json!([1, 2]);
        assert!(RawTable::root(&value, &mut diag).is_none());
        assert_eq!(diag.errors()[0].kind, ConfigErrorKind::InvalidType);
    }

    #[test]
    fn test_null_is_absent() {
        let (value, diag) = with_table(json!({ "subtitle": null }), |t, d| t.string("subtitle", d));
        assert_eq!(value, None);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_required_string_blank() {
        let (value, diag) = with_table(json!({ "title": "  " }), |t, d| t.required_string("title", d));
        assert_eq!(value, None);
        assert_eq!(diag.find("title").unwrap().kind, ConfigErrorKind::MissingField);
    }

    #[test]
    fn test_required_string_wrong_type() {
        let (_, diag) = with_table(json!({ "title": 42 }), |t, d| t.required_string("title", d));
        let err = diag.find("title").unwrap();
        assert_eq!(err.kind, ConfigErrorKind::InvalidType);
        assert_eq!(err.message, "expected string, found integer");
    }

    #[test]
    fn test_positive_int() {
        let (value, diag) = with_table(json!({ "n": 7 }), |t, d| t.positive_int("n", d));
        assert_eq!(value.map(NonZeroU32::get), Some(7));
        assert!(diag.is_empty());

        let (value, diag) = with_table(json!({ "n": 0 }), |t, d| t.positive_int("n", d));
        assert!(value.is_none());
        assert_eq!(diag.find("n").unwrap().kind, ConfigErrorKind::InvalidType);

        let (_, diag) = with_table(json!({ "n": -3 }), |t, d| t.positive_int("n", d));
        assert_eq!(
            diag.find("n").unwrap().message,
            "expected positive integer, found negative integer"
        );

        let (_, diag) = with_table(json!({ "n": 2.5 }), |t, d| t.positive_int("n", d));
        assert_eq!(
            diag.find("n").unwrap().message,
            "expected positive integer, found float"
        );
    }

    #[test]
    fn test_nested_paths() {
        let (value, diag) = with_table(json!({ "author": { "contacts": 3 } }), |t, d| {
            t.table("author", d)
                .and_then(|author| author.table("contacts", d))
                .is_some()
        });
        assert!(!value);
        assert_eq!(
            diag.find("author.contacts").unwrap().message,
            "expected table, found integer"
        );
    }

    #[test]
    fn test_unknown_keys() {
        let (unknown, _) = with_table(json!({ "title": "T", "tittle": "T" }), |t, _| {
            t.unknown_keys(&["title"])
        });
        assert_eq!(unknown, vec![FieldPath::new("tittle")]);
    }
}
