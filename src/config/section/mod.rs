//! Configuration section definitions.
//!
//! | Module     | Key                | Purpose                             |
//! |------------|--------------------|-------------------------------------|
//! | `author`   | `author`           | Author name, photo, bio             |
//! | `contacts` | `author.contacts`  | Contact channel handles             |
//! | `menu`     | `menu`             | Ordered navigation entries          |

mod author;
mod contacts;
mod menu;

pub use author::{AUTHOR_KEYS, AuthorConfig};
pub use contacts::{Contacts, KNOWN_CHANNELS};
pub use menu::{MENU_ITEM_KEYS, MenuItem};
