//! Shared value types used by every stage of the gallery.
//!
//! These types cross the catalog loader, the shuffle, the engine and the
//! renderer, and are serialized to JSON by `showcase-gal shuffle --json`.

use serde::{Deserialize, Serialize};

/// The wildcard category. Selecting it shows the whole catalog.
pub const ALL: &str = "all";

/// One image the gallery can display.
///
/// Immutable once built. An image belongs to exactly one category; an image
/// that should show up under two categories is listed twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryImage {
    /// URL or path of the full-size image.
    pub source: String,
    /// Alt text, also used as the slide caption.
    pub alt: String,
    /// Category tag, one of the page-defined categories.
    pub category: String,
}

impl GalleryImage {
    pub fn new(
        source: impl Into<String>,
        alt: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            alt: alt.into(),
            category: category.into(),
        }
    }
}

/// Direction of a relative carousel move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}
