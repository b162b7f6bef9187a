//! The gallery engine: catalog, category filter, ring navigation, lightbox.
//!
//! [`Gallery`] owns every piece of mutable gallery state and exposes one
//! method per transition. It does no I/O and knows nothing about time; the
//! [`carousel`](crate::carousel) module wraps it with input handling and the
//! autoplay scheduler.
//!
//! ## State
//!
//! ```text
//! catalog          Option<Vec<GalleryImage>>   None while loading
//! active_category  "all" | page category
//! filtered         indices into catalog matching active_category
//! active_index     position in filtered, always < filtered.len() when non-empty
//! lightbox         Closed | Open(image)
//! ```
//!
//! The filtered view is stored as indices and recomputed on every catalog or
//! category change, so it can never drift from its inputs.

use crate::lightbox::{CloseTrigger, Lightbox};
use crate::types::{ALL, Direction, GalleryImage};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Index {index} out of range for a view of {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Outcome of [`Gallery::select_category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// The requested category is now active.
    Selected,
    /// The requested category had no images; `"all"` is active instead.
    FellBack { requested: String },
}

/// What the gallery should currently display.
#[derive(Debug, PartialEq)]
pub enum GalleryView<'a> {
    /// The catalog has not arrived yet.
    Loading,
    /// The catalog is ready but nothing matches the active category.
    Empty { category: &'a str },
    /// One slide is showing.
    Showing(Slide<'a>),
}

#[derive(Debug, PartialEq)]
pub struct Slide<'a> {
    pub image: &'a GalleryImage,
    pub index: usize,
    pub total: usize,
    /// Leading thumbnails of the filtered view.
    pub thumbnails: Vec<Thumbnail<'a>>,
}

#[derive(Debug, PartialEq)]
pub struct Thumbnail<'a> {
    pub index: usize,
    pub image: &'a GalleryImage,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    categories: Vec<String>,
    catalog: Option<Vec<GalleryImage>>,
    active_category: String,
    filtered: Vec<usize>,
    active_index: usize,
    lightbox: Lightbox,
    broken: HashSet<String>,
}

impl Gallery {
    /// A gallery still waiting for its catalog.
    pub fn new<S: AsRef<str>>(categories: &[S]) -> Self {
        Self {
            categories: categories.iter().map(|c| c.as_ref().to_string()).collect(),
            catalog: None,
            active_category: ALL.to_string(),
            filtered: Vec::new(),
            active_index: 0,
            lightbox: Lightbox::Closed,
            broken: HashSet::new(),
        }
    }

    /// A gallery whose catalog is already known.
    pub fn with_catalog<S: AsRef<str>>(categories: &[S], images: Vec<GalleryImage>) -> Self {
        let mut gallery = Self::new(categories);
        gallery.set_catalog(images);
        gallery
    }

    /// Page-defined categories, in filter-tab order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_none()
    }

    /// The full catalog. Empty while loading.
    pub fn catalog(&self) -> &[GalleryImage] {
        self.catalog.as_deref().unwrap_or(&[])
    }

    /// Install (or replace) the catalog.
    ///
    /// The active category is kept. The active index is kept when it still
    /// points into the new filtered view, otherwise it goes back to 0.
    pub fn set_catalog(&mut self, images: Vec<GalleryImage>) {
        self.catalog = Some(images);
        self.refilter();
        if self.active_index >= self.filtered.len() {
            self.active_index = 0;
        }
    }

    /// Record that building the catalog failed.
    ///
    /// The gallery leaves the loading state with an empty catalog so the page
    /// shows the empty state instead of a placeholder that never resolves.
    pub fn fail_catalog(&mut self, error: &dyn std::error::Error) {
        tracing::error!(%error, "gallery catalog failed to load; showing empty gallery");
        self.set_catalog(Vec::new());
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Images matching the active category, in catalog order.
    pub fn filtered_view(&self) -> impl Iterator<Item = &GalleryImage> + '_ {
        let catalog = self.catalog();
        self.filtered.iter().map(move |&i| &catalog[i])
    }

    /// The image under the active index, if the view is non-empty.
    pub fn active_image(&self) -> Option<&GalleryImage> {
        self.filtered
            .get(self.active_index)
            .map(|&i| &self.catalog()[i])
    }

    /// Switch the filter.
    ///
    /// A category with no images falls back to `"all"` and logs a warning.
    /// The active index resets to 0 either way.
    pub fn select_category(&mut self, category: &str) -> CategorySelection {
        let has_images = if category == ALL {
            true
        } else {
            self.catalog().iter().any(|image| image.category == category)
        };

        let selection = if has_images {
            self.active_category = category.to_string();
            CategorySelection::Selected
        } else {
            tracing::warn!(
                requested = category,
                "no images in category; falling back to \"all\""
            );
            self.active_category = ALL.to_string();
            CategorySelection::FellBack {
                requested: category.to_string(),
            }
        };

        self.refilter();
        self.active_index = 0;
        selection
    }

    /// Move one step around the ring. Returns `false` on an empty view.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let len = self.filtered.len();
        if len == 0 {
            return false;
        }
        self.active_index = match direction {
            Direction::Next if self.active_index + 1 >= len => 0,
            Direction::Next => self.active_index + 1,
            Direction::Prev if self.active_index == 0 => len - 1,
            Direction::Prev => self.active_index - 1,
        };
        true
    }

    /// Jump straight to `index` (dot and thumbnail clicks).
    pub fn set_index(&mut self, index: usize) -> Result<(), GalleryError> {
        let len = self.filtered.len();
        if index >= len {
            return Err(GalleryError::IndexOutOfRange { index, len });
        }
        self.active_index = index;
        Ok(())
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Open the lightbox on the image currently displayed.
    ///
    /// Returns `false` when nothing is displayed.
    pub fn open_lightbox(&mut self) -> bool {
        match self.active_image().cloned() {
            Some(image) => {
                self.lightbox.open(image);
                true
            }
            None => false,
        }
    }

    pub fn close_lightbox(&mut self, trigger: CloseTrigger) -> bool {
        self.lightbox.close(trigger)
    }

    /// Record that `source` failed to load. Navigation is unaffected.
    pub fn mark_broken(&mut self, source: &str) {
        if self.broken.insert(source.to_string()) {
            tracing::warn!(source, "gallery image failed to load; using placeholder");
        }
    }

    pub fn is_broken(&self, source: &str) -> bool {
        self.broken.contains(source)
    }

    /// Snapshot of what to display, with at most `thumbnail_count` thumbnails.
    pub fn view(&self, thumbnail_count: usize) -> GalleryView<'_> {
        if self.is_loading() {
            return GalleryView::Loading;
        }
        let Some(image) = self.active_image() else {
            return GalleryView::Empty {
                category: &self.active_category,
            };
        };
        let thumbnails = self
            .filtered_view()
            .take(thumbnail_count)
            .enumerate()
            .map(|(index, image)| Thumbnail {
                index,
                image,
                active: index == self.active_index,
            })
            .collect();
        GalleryView::Showing(Slide {
            image,
            index: self.active_index,
            total: self.filtered.len(),
            thumbnails,
        })
    }

    fn refilter(&mut self) {
        let catalog = self.catalog.as_deref().unwrap_or(&[]);
        let category = self.active_category.as_str();
        self.filtered = catalog
            .iter()
            .enumerate()
            .filter(|(_, image)| category == ALL || image.category == category)
            .map(|(i, _)| i)
            .collect();
    }
}
