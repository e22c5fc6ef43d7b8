//! Sidebar copyright block with the Ko-fi support button.

use crate::utils::html::escape;

/// Ko-fi page opened by the support button.
pub const DONATION_URL: &str = "https://ko-fi.com/G2G01SD6G";

/// Button image served by Ko-fi.
pub const DONATION_IMAGE: &str = "https://cdn.ko-fi.com/cdn/kofi3.png?v=2";

const DONATION_ALT: &str = "Buy Me a Coffee at ko-fi.com";

/// Render the copyright footer.
///
/// Any text is accepted, including an empty string; it is HTML-escaped.
/// The support link is the same on every page.
///
/// ```html
/// <div class="copyright">© All rights reserved.<div class="support">…</div></div>
/// ```
pub fn render_copyright(copyright: &str) -> String {
    format!(
        concat!(
            r#"<div class="copyright">{text}"#,
            r#"<div class="support">"#,
            r#"<a href="{href}" target="_blank">"#,
            r#"<img height="36" src="{img}" border="0" alt="{alt}">"#,
            r#"</a></div></div>"#,
        ),
        text = escape(copyright),
        href = DONATION_URL,
        img = DONATION_IMAGE,
        alt = DONATION_ALT,
    )
}
