//! Shared helpers.

pub mod html;

/// Format count with noun: `1 error`, `3 errors`.
pub fn plural_count(count: usize, noun: &str) -> String {
    let s = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{s}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "warning"), "0 warnings");
        assert_eq!(plural_count(1, "menu entry"), "1 menu entry");
        assert_eq!(plural_count(3, "contact"), "3 contacts");
    }
}
