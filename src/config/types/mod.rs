//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Field path used in diagnostics               |
//! | `raw`    | Typed reads from the untyped config record   |

mod error;
mod field;
mod raw;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigErrorKind};
pub use field::FieldPath;
pub use raw::{RawTable, type_name};
