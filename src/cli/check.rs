//! `check` command.

use lumen::config::SiteConfig;
use lumen::render::contact_links;
use lumen::utils::plural_count;
use lumen::{debug, log};

/// Report a validated config.
///
/// Loading already failed with diagnostics if anything was wrong, so this
/// only summarizes what templates will see.
pub fn check_site(config: &SiteConfig) {
    log!("check"; "\"{}\" at {}", config.title(), config.base_url());
    log!(
        "check";
        "{}, {}, {} per page",
        plural_count(config.menu().len(), "menu entry"),
        plural_count(config.author().contacts().visible().count(), "contact"),
        plural_count(config.posts_per_page() as usize, "post")
    );

    debug!("check"; "comments: {}", config.comments().unwrap_or("disabled"));
    debug!("check"; "analytics: {}", config.analytics_id().unwrap_or("disabled"));
    debug!("check"; "katex: {}", config.use_katex());
    for (channel, href) in contact_links(config.author().contacts()) {
        debug!("check"; "contact {}: {}", channel, href);
    }
}
