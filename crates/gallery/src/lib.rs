//! Gallery crate for the MCU movie gallery.
//!
//! This crate turns filtered, ordered movies into page content:
//!
//! - **dom**: the page collaborators (`GalleryView`, `Control`)
//! - **card**: display cards, poster fallback handling, date formatting
//! - **markup**: escaping for text placed into HTML
//! - **render**: the view renderer and option population
//! - **page**: `PageDocument`, an in-memory page that serialises to HTML
//! - **app**: `GalleryApp`, the session state tying loader, engine and view together

pub mod app;
pub mod card;
pub mod dom;
pub mod markup;
pub mod page;
pub mod render;

pub use app::GalleryApp;
pub use card::{Card, PosterImage, DEFAULT_CHARACTER_LABEL, PLACEHOLDER_POSTER};
pub use dom::{Control, GalleryView};
pub use page::PageDocument;
pub use render::{populate_filters, render_movies};
