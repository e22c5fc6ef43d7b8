//! Links for author contact channels.

use crate::config::Contacts;

/// Link target for a contact handle.
///
/// Handles that are already absolute URLs are returned as-is; channels
/// without a known profile URL (rss, linkedin, cv, ...) are expected to hold
/// full URLs.
///
/// # Examples
/// ```ignore
/// contact_href("email", "ivor@devpie.io") -> "mailto:ivor@devpie.io"
/// contact_href("github", "ivorscott")     -> "https://github.com/ivorscott"
/// contact_href("cv", "https://hire.ivorscott.com") -> unchanged
/// ```
pub fn contact_href(channel: &str, handle: &str) -> String {
    if is_absolute(handle) {
        return handle.to_owned();
    }

    let prefix = match channel {
        "email" => "mailto:",
        "twitter" => "https://www.twitter.com/",
        "github" => "https://github.com/",
        "facebook" => "https://www.facebook.com/",
        "telegram" => "telegram:",
        "vkontakte" => "https://vk.com/",
        "line" => "line://ti/p/",
        "gitlab" => "https://www.gitlab.com/",
        "weibo" => "https://www.weibo.com/",
        "codepen" => "https://www.codepen.io/",
        "youtube" => "https://www.youtube.com/channel/",
        "soundcloud" => "https://soundcloud.com/",
        "medium" => "https://medium.com/",
        _ => "",
    };
    format!("{prefix}{handle}")
}

fn is_absolute(handle: &str) -> bool {
    url::Url::parse(handle).is_ok_and(|u| matches!(u.scheme(), "http" | "https" | "mailto"))
}

/// `(channel, href)` for every contact that should be displayed.
///
/// Empty handles are skipped so the template never renders a blank icon.
pub fn contact_links(contacts: &Contacts) -> Vec<(&str, String)> {
    contacts
        .visible()
        .map(|(channel, handle)| (channel, contact_href(channel, handle)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_load;
    use serde_json::json;

    #[test]
    fn test_contact_href() {
        assert_eq!(contact_href("email", "ivor@devpie.io"), "mailto:ivor@devpie.io");
        assert_eq!(contact_href("twitter", "ivorsco77"), "https://www.twitter.com/ivorsco77");
        assert_eq!(contact_href("github", "ivorscott"), "https://github.com/ivorscott");
        assert_eq!(contact_href("telegram", "ivor"), "telegram:ivor");
        assert_eq!(contact_href("youtube", "UC123"), "https://www.youtube.com/channel/UC123");
    }

    #[test]
    fn test_absolute_handles_unchanged() {
        assert_eq!(
            contact_href("cv", "https://hire.ivorscott.com"),
            "https://hire.ivorscott.com"
        );
        assert_eq!(
            contact_href("github", "https://github.com/ivorscott"),
            "https://github.com/ivorscott"
        );
        assert_eq!(contact_href("rss", "https://x.com/rss.xml"), "https://x.com/rss.xml");
    }

    #[test]
    fn test_contact_links_skip_empty() {
        let config = test_load(json!({
            "author": { "name": "N", "contacts": { "email": "n@x.com", "twitter": "", "art": "https://art.x.com" } }
        }));
        let links = contact_links(config.author().contacts());
        assert_eq!(
            links,
            vec![
                ("email", "mailto:n@x.com".to_owned()),
                ("art", "https://art.x.com".to_owned()),
            ]
        );
    }
}
