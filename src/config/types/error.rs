//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Errors raised while reading and loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}`, expected a .toml or .json file")]
    UnsupportedFormat(PathBuf),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigErrorKind
// ============================================================================

/// Category of a single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// A required field is absent or empty.
    MissingField,
    /// A field holds a value of the wrong shape.
    InvalidType,
    /// A navigation menu entry is malformed.
    InvalidMenuEntry,
    /// The site URL does not parse or is not http(s).
    InvalidUrl,
}

impl ConfigErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing field",
            Self::InvalidType => "invalid type",
            Self::InvalidMenuEntry => "invalid menu entry",
            Self::InvalidUrl => "invalid url",
        }
    }
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub kind: ConfigErrorKind,
    /// Config field path (e.g., "menu[1].path")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(kind: ConfigErrorKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}: {}", "→".red(), self.kind, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Validation errors collected over a whole config record.
///
/// Loading never stops at the first problem; every invalid field is recorded
/// and reported together.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, kind: ConfigErrorKind, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(kind, field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        kind: ConfigErrorKind,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(kind, field, message).with_hint(hint));
    }

    pub fn missing(&mut self, field: FieldPath) {
        self.error(ConfigErrorKind::MissingField, field, "required");
    }

    pub fn invalid_type(&mut self, field: FieldPath, expected: &str, found: &str) {
        self.error(
            ConfigErrorKind::InvalidType,
            field,
            format!("expected {expected}, found {found}"),
        );
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// First error reported for `field`, if any.
    pub fn find(&self, field: &str) -> Option<&ConfigDiagnostic> {
        self.errors.iter().find(|e| e.field.as_str() == field)
    }

    /// Pair a parsed value with the errors found while parsing it.
    ///
    /// Any recorded error wins over the value. A missing value with no
    /// recorded error still fails, with a root-level error, so an `Err`
    /// never carries an empty list.
    pub fn finish<T>(mut self, value: Option<T>) -> Result<T, Self> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            Some(_) => Err(self),
            None => {
                if self.errors.is_empty() {
                    self.error(
                        ConfigErrorKind::InvalidType,
                        FieldPath::new("<root>"),
                        "config could not be loaded",
                    );
                }
                Err(self)
            }
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

impl From<ConfigDiagnostics> for ConfigError {
    fn from(diag: ConfigDiagnostics) -> Self {
        Self::Diagnostics(diag)
    }
}
