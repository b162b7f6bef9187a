//! Catalog loading.
//!
//! A catalog is the full image set a gallery may show plus the fixed category
//! list that orders the filter tabs and the shuffle lanes. It can come from a
//! file or from a directory of images.
//!
//! ## Catalog Files
//!
//! TOML or JSON, picked by extension. Unknown keys are rejected:
//!
//! ```toml
//! categories = ["nmax", "vario", "scoopy"]
//!
//! [[images]]
//! source = "/images/nmax-1.jpg"
//! alt = "Yamaha NMAX, matte black"
//! category = "nmax"
//! ```
//!
//! When `categories` is omitted it is derived from the images, in order of
//! first appearance.
//!
//! ## Catalog Directories
//!
//! ```text
//! gallery/
//! ├── 010-nmax/               # category "nmax" (first tab)
//! │   ├── 001-matte-black.jpg # alt "matte black"
//! │   └── 002-pearl-white.jpg
//! ├── 020-vario/
//! │   └── 001-red.png
//! └── 030-scoopy/
//!     └── 001-cream.webp
//! ```
//!
//! Subdirectories are categories, ordered by number prefix and then name.
//! Image sources are paths relative to the root, with `/` separators.

use crate::naming::parse_entry_name;
use crate::shuffle::balanced_shuffle;
use crate::types::{ALL, GalleryImage};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Unsupported catalog format (expected .toml, .json or a directory): {0}")]
    UnsupportedFormat(PathBuf),
    #[error("Category name \"all\" is reserved")]
    ReservedCategory,
    #[error("Category listed twice: {0}")]
    DuplicateCategory(String),
    #[error("Image has an empty category: {0}")]
    MissingCategory(String),
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif", "svg"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

impl Catalog {
    /// Check category names and image tags.
    ///
    /// Images tagged with a category missing from the list are allowed (the
    /// shuffle gives them their own lane) but logged.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.eq_ignore_ascii_case(ALL) {
                return Err(CatalogError::ReservedCategory);
            }
            if !seen.insert(category.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.clone()));
            }
        }
        for image in &self.images {
            if image.category.trim().is_empty() {
                return Err(CatalogError::MissingCategory(image.source.clone()));
            }
            if image.category.eq_ignore_ascii_case(ALL) {
                return Err(CatalogError::ReservedCategory);
            }
            if !seen.contains(image.category.as_str()) {
                tracing::warn!(
                    source = %image.source,
                    category = %image.category,
                    "image category is not in the category list"
                );
            }
        }
        Ok(())
    }

    /// Image counts per category: listed categories first (including empty
    /// ones), then unlisted categories in order of first appearance.
    pub fn counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> =
            self.categories.iter().map(|c| (c.as_str(), 0)).collect();
        for image in &self.images {
            match counts.iter_mut().find(|(c, _)| *c == image.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((image.category.as_str(), 1)),
            }
        }
        counts
    }

    /// Display order for a fresh mount.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<GalleryImage> {
        balanced_shuffle(&self.images, &self.categories, rng)
    }

    fn fill_missing_categories(&mut self) {
        if !self.categories.is_empty() {
            return;
        }
        for image in &self.images {
            if !self.categories.contains(&image.category) {
                self.categories.push(image.category.clone());
            }
        }
    }
}

/// Load a catalog from a `.toml`/`.json` file or an image directory.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let catalog = if path.is_dir() {
        scan_catalog(path)?
    } else {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let content = fs::read_to_string(path)?;
        match ext.as_str() {
            "toml" => parse_toml(&content)?,
            "json" => parse_json(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    };
    catalog.validate()?;
    tracing::debug!(
        path = %path.display(),
        images = catalog.images.len(),
        categories = catalog.categories.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn parse_toml(content: &str) -> Result<Catalog, CatalogError> {
    let mut catalog: Catalog = toml::from_str(content)?;
    catalog.fill_missing_categories();
    Ok(catalog)
}

pub fn parse_json(content: &str) -> Result<Catalog, CatalogError> {
    let mut catalog: Catalog = serde_json::from_str(content)?;
    catalog.fill_missing_categories();
    Ok(catalog)
}

/// Build a catalog from a directory whose subdirectories are categories.
pub fn scan_catalog(root: &Path) -> Result<Catalog, CatalogError> {
    let mut category_dirs = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() && !is_hidden(entry.path()) {
            category_dirs.push(entry.into_path());
        }
    }
    category_dirs.sort_by_key(|dir| parse_entry_name(&file_name(dir)).sort_key());

    let mut catalog = Catalog::default();
    for dir in category_dirs {
        let dir_name = file_name(&dir);
        let parsed = parse_entry_name(&dir_name);
        let category = if parsed.name.is_empty() {
            dir_name
        } else {
            parsed.name
        };
        if catalog.categories.contains(&category) {
            return Err(CatalogError::DuplicateCategory(category));
        }

        for (position, file) in collect_images(&dir)?.into_iter().enumerate() {
            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            let label = parse_entry_name(&stem).label;
            let alt = if label.trim().is_empty() {
                format!("{} {}", category.replace('-', " "), position + 1)
            } else {
                label
            };
            catalog.images.push(GalleryImage {
                source: relative_source(root, &file),
                alt,
                category: category.clone(),
            });
        }
        catalog.categories.push(category);
    }
    Ok(catalog)
}

fn collect_images(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let mut images = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() && is_image(entry.path()) && !is_hidden(entry.path()) {
            images.push(entry.into_path());
        }
    }
    images.sort_by_key(|path| {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        parse_entry_name(&stem).sort_key()
    });
    Ok(images)
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

fn is_hidden(path: &Path) -> bool {
    file_name(path).starts_with('.')
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn relative_source(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
