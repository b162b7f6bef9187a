//! Shared test utilities for the showcase-gal test suite.
//!
//! Catalog builders mirroring the two sites the gallery ships on (a motorbike
//! rental and a tattoo studio), plus assertions over shuffled outputs.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let images = scooter_catalog();
//! let gallery = Gallery::with_catalog(&SCOOTER_CATEGORIES, images);
//! assert_eq!(gallery.filtered_len(), 4);
//! ```

use crate::types::GalleryImage;
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

pub const SCOOTER_CATEGORIES: [&str; 3] = ["nmax", "vario", "scoopy"];
pub const TATTOO_CATEGORIES: [&str; 3] = ["balinese", "modern", "custom"];

// =========================================================================
// Catalog builders
// =========================================================================

/// An image whose alt text is derived from its source.
pub fn image(source: &str, category: &str) -> GalleryImage {
    GalleryImage::new(source, format!("{category} {source}"), category)
}

/// 2 nmax + 1 vario + 1 scoopy.
pub fn scooter_catalog() -> Vec<GalleryImage> {
    vec![
        image("/bikes/nmax-1.jpg", "nmax"),
        image("/bikes/nmax-2.jpg", "nmax"),
        image("/bikes/vario-1.jpg", "vario"),
        image("/bikes/scoopy-1.jpg", "scoopy"),
    ]
}

/// The ten-piece studio gallery: 3 balinese, 4 modern, 3 custom.
pub fn tattoo_catalog() -> Vec<GalleryImage> {
    vec![
        image("/work/dragon.jpg", "balinese"),
        image("/work/lines.jpg", "modern"),
        image("/work/portrait.jpg", "custom"),
        image("/work/geometry.jpg", "modern"),
        image("/work/barong.jpg", "balinese"),
        image("/work/dotwork.jpg", "modern"),
        image("/work/koi.jpg", "custom"),
        image("/work/garuda.jpg", "balinese"),
        image("/work/minimal.jpg", "modern"),
        image("/work/lettering.jpg", "custom"),
    ]
}

pub fn categories_of(images: &[GalleryImage]) -> Vec<&str> {
    images.iter().map(|i| i.category.as_str()).collect()
}

/// Assert two image lists hold the same multiset of images.
pub fn assert_same_images(expected: &[GalleryImage], actual: &[GalleryImage]) {
    let count = |images: &[GalleryImage]| {
        let mut counts: HashMap<GalleryImage, usize> = HashMap::new();
        for image in images {
            *counts.entry(image.clone()).or_default() += 1;
        }
        counts
    };
    assert_eq!(expected.len(), actual.len(), "image count mismatch");
    assert_eq!(count(expected), count(actual), "image multiset mismatch");
}

// =========================================================================
// Filesystem fixtures
// =========================================================================

/// Write an empty file (and its parent directories) under `root`.
pub fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"").unwrap();
}

/// A catalog directory laid out the way `scan_catalog` expects.
pub fn scooter_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "010-nmax/001-matte-black.jpg");
    touch(tmp.path(), "010-nmax/002-pearl-white.jpg");
    touch(tmp.path(), "020-vario/001-red.png");
    touch(tmp.path(), "030-scoopy/001-cream.webp");
    tmp
}
