//! Modal "view larger" overlay.
//!
//! The lightbox holds its own copy of the image it was opened on. The
//! carousel behind it may be re-filtered or advanced while the overlay is
//! visible (it is not, in practice, because opening suspends autoplay), but
//! the overlay never follows the live index.

use crate::types::GalleryImage;

/// What dismissed the overlay. Every trigger runs the same close transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The explicit close control.
    CloseButton,
    /// Escape / cancel key.
    Escape,
    /// Pointer interaction outside the content region.
    Backdrop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(GalleryImage),
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    /// The captured image, if open.
    pub fn image(&self) -> Option<&GalleryImage> {
        match self {
            Lightbox::Open(image) => Some(image),
            Lightbox::Closed => None,
        }
    }

    /// Open on `image`, replacing any image already shown.
    pub fn open(&mut self, image: GalleryImage) {
        *self = Lightbox::Open(image);
    }

    /// Close the overlay. Returns `false` if it was already closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        match std::mem::take(self) {
            Lightbox::Open(image) => {
                tracing::debug!(?trigger, source = %image.source, "lightbox closed");
                true
            }
            Lightbox::Closed => false,
        }
    }
}
