//! # showcase-gal
//!
//! The gallery carousel behind small studio and rental showcase sites: a
//! filterable image slider with autoplay, keyboard and swipe navigation, a
//! lightbox, and a shuffle that keeps categories interleaved.
//!
//! # Architecture
//!
//! ```text
//! catalog.toml / gallery dir ──► Catalog ──► balanced_shuffle ──► Carousel
//!                                                                  │
//!                          keys, swipes, clicks, timer ticks ────► │ Gallery + Autoplay
//!                                                                  ▼
//!                                                            GalleryView ──► HTML
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `GalleryImage`, `Direction`, the `"all"` wildcard |
//! | [`catalog`] | Loads catalogs from TOML/JSON files or category directories |
//! | [`shuffle`] | Category-balanced round-robin ordering over an injected `Rng` |
//! | [`gallery`] | The engine: filter, ring navigation, lightbox, view model |
//! | [`lightbox`] | Closed / open(image) overlay state |
//! | [`autoplay`] | Single-deadline auto-advance scheduler |
//! | [`carousel`] | Event handling and autoplay re-arming around the engine |
//! | [`render`] | Maud HTML for the gallery view |
//! | [`booking`] | Messaging-app deep link for booking requests |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`naming`] | `NNN-name` parser used by directory catalogs |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Owner, One Method Per Transition
//!
//! All mutable gallery state lives in [`gallery::Gallery`]. Category changes,
//! moves, jumps and lightbox transitions are methods on it, so the
//! reset-on-filter and ring-navigation rules are unit-tested without any UI.
//!
//! ## Time Is an Argument
//!
//! The autoplay scheduler never reads a clock. Hosts pass `Instant`s into
//! [`carousel::Carousel::handle`], which makes timer behaviour deterministic
//! in tests and means a dropped carousel has nothing left that could fire.
//!
//! ## Shuffle Over an Injected `Rng`
//!
//! [`shuffle::balanced_shuffle`] is a pure function of the catalog, the
//! category order and a random source. Seeded `StdRng` in tests,
//! an entropy-seeded `StdRng` on every real run.

pub mod autoplay;
pub mod booking;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod gallery;
pub mod lightbox;
pub mod naming;
pub mod output;
pub mod render;
pub mod shuffle;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
