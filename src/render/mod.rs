//! Markup helpers handed to the theme's templates.
//!
//! | Module    | Purpose                                     |
//! |-----------|---------------------------------------------|
//! | `contact` | Profile links for author contact channels   |
//! | `footer`  | Copyright block with the support button     |

mod contact;
mod footer;

pub use contact::{contact_href, contact_links};
pub use footer::{DONATION_IMAGE, DONATION_URL, render_copyright};
