//! Configuration utility functions.

use super::types::{ConfigDiagnostics, ConfigErrorKind, FieldPath};
use std::path::{Path, PathBuf};

/// Check a site URL and return its parsed form without trailing slashes.
///
/// Uses `url` crate for proper parsing; the serialized URL is returned, so
/// spellings the parser repairs (`https:x.com`) come back corrected. The URL must be absolute http(s) with
/// a host, and carry no query string or fragment since paths are appended to it.
///
/// # Examples
/// ```ignore
/// normalize_site_url("https://x.com/")          -> Some("https://x.com")
/// normalize_site_url("https://x.github.io/blog") -> Some("https://x.github.io/blog")
/// normalize_site_url("x.com")                   -> None (InvalidUrl recorded)
/// ```
pub fn normalize_site_url(
    raw: &str,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<String> {
    let trimmed = raw.trim();
    let hint = "use format like https://example.com";

    let parsed = match url::Url::parse(trimmed) {
        Ok(parsed) => parsed,
        Err(e) => {
            diag.error_with_hint(
                ConfigErrorKind::InvalidUrl,
                field,
                format!("invalid URL `{trimmed}`: {e}"),
                hint,
            );
            return None;
        }
    };

    let before = diag.len();
    if !matches!(parsed.scheme(), "http" | "https") {
        diag.error_with_hint(
            ConfigErrorKind::InvalidUrl,
            field.clone(),
            format!(
                "scheme '{}' not supported, must be http or https",
                parsed.scheme()
            ),
            hint,
        );
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        diag.error_with_hint(
            ConfigErrorKind::InvalidUrl,
            field.clone(),
            "URL must have a valid host",
            hint,
        );
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        diag.error_with_hint(
            ConfigErrorKind::InvalidUrl,
            field,
            "URL must not contain a query string or fragment",
            hint,
        );
    }

    (diag.len() == before).then(|| parsed.as_str().trim_end_matches('/').to_owned())
}

/// Normalize a path prefix to start with exactly one `/` and contain no `//`.
///
/// # Examples
/// ```ignore
/// normalize_path_prefix("")        -> "/"
/// normalize_path_prefix("blog/")   -> "/blog/"
/// normalize_path_prefix("//a//b")  -> "/a/b"
/// ```
pub fn normalize_path_prefix(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 1);
    out.push('/');
    for c in raw.trim().chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/content/posts/  ← cwd
/// /home/user/blog/site.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn check_url(raw: &str) -> (Option<String>, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let url = normalize_site_url(raw, FieldPath::new("url"), &mut diag);
        (url, diag)
    }

    #[test]
    fn test_normalize_site_url() {
        assert_eq!(check_url("https://x.com").0.as_deref(), Some("https://x.com"));
        assert_eq!(check_url("https://x.com/").0.as_deref(), Some("https://x.com"));
        assert_eq!(
            check_url(" https://example.github.io/my-project/ ").0.as_deref(),
            Some("https://example.github.io/my-project")
        );
        assert_eq!(
            check_url("http://localhost:8000").0.as_deref(),
            Some("http://localhost:8000")
        );
    }

    #[test]
    fn test_site_url_is_stored_parsed() {
        assert_eq!(check_url("https:x.com").0.as_deref(), Some("https://x.com"));
        assert_eq!(check_url("https:\\x.com").0.as_deref(), Some("https://x.com"));
        assert_eq!(check_url("https://x.\ncom").0.as_deref(), Some("https://x.com"));
        assert_eq!(
            check_url("https://x.com/a b").0.as_deref(),
            Some("https://x.com/a%20b")
        );
        assert_eq!(check_url("HTTPS://X.COM/").0.as_deref(), Some("https://x.com"));
    }

    #[test]
    fn test_invalid_site_urls() {
        for raw in [
            "invalid-url",
            "ftp://x.com",
            "https://x.com/?draft=1",
            "https://x.com/#top",
            "",
        ] {
            let (url, diag) = check_url(raw);
            assert!(url.is_none(), "{raw} should be rejected");
            assert!(
                diag.errors()
                    .iter()
                    .all(|e| e.kind == ConfigErrorKind::InvalidUrl)
            );
        }
    }

    #[test]
    fn test_normalize_path_prefix() {
        assert_eq!(normalize_path_prefix(""), "/");
        assert_eq!(normalize_path_prefix("/"), "/");
        assert_eq!(normalize_path_prefix("blog/"), "/blog/");
        assert_eq!(normalize_path_prefix("/blog"), "/blog");
        assert_eq!(normalize_path_prefix("//a//b/"), "/a/b/");
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        assert_eq!(find_config_file(&path), None);

        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }
}
