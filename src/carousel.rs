//! Event-driven carousel: the gallery engine plus input handling and autoplay.
//!
//! The host (a page, a test, the CLI) feeds [`CarouselEvent`]s in together
//! with the current instant. Every event runs to completion under `&mut self`,
//! so a timer tick can never observe a half-applied category change.
//!
//! ## Autoplay Rules
//!
//! - Armed only while the catalog is ready, the filtered view is non-empty and
//!   the lightbox is closed.
//! - Re-armed from `now` whenever the active index, active category, lightbox
//!   state or catalog changes, and after every user navigation. A manual move
//!   therefore always gets a full interval before the next automatic one.
//! - A tick advances at most once, however late it arrives.
//! - Opening the lightbox disarms; closing it starts a fresh interval.
//!
//! [`Carousel::unmount`] consumes the carousel, so no tick can reach it after
//! the gallery is gone.

use crate::autoplay::Autoplay;
use crate::config::GalleryConfig;
use crate::gallery::{CategorySelection, Gallery, GalleryError, GalleryView};
use crate::lightbox::CloseTrigger;
use crate::types::{Direction, GalleryImage};
use std::time::Instant;

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    Key(Key),
    /// A completed horizontal touch gesture, in CSS pixels.
    Swipe { start_x: f32, end_x: f32 },
    PrevArrow,
    NextArrow,
    /// Filter tab click.
    SelectCategory(String),
    /// Dot or thumbnail click.
    JumpTo(usize),
    /// "View larger" on the current slide.
    ViewLarger,
    CloseLightbox(CloseTrigger),
    /// The browser reported that an image source failed to load.
    ImageFailed(String),
    /// Timer wake-up.
    Tick,
}

/// Snapshot of the fields whose change re-arms autoplay.
#[derive(PartialEq)]
struct Watched {
    index: usize,
    category: String,
    lightbox_open: bool,
    filtered_len: usize,
    loading: bool,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    gallery: Gallery,
    autoplay: Autoplay,
    thumbnail_count: usize,
    swipe_threshold: f32,
}

impl Carousel {
    /// Mount a carousel whose catalog is still being prepared.
    pub fn mount<S: AsRef<str>>(categories: &[S], config: &GalleryConfig) -> Self {
        Self {
            gallery: Gallery::new(categories),
            autoplay: Autoplay::new(config.autoplay_interval()),
            thumbnail_count: config.thumbnail_count,
            swipe_threshold: config.swipe_threshold_px as f32,
        }
    }

    /// Mount with a ready catalog; autoplay starts at `now`.
    pub fn mount_with_catalog<S: AsRef<str>>(
        categories: &[S],
        images: Vec<GalleryImage>,
        config: &GalleryConfig,
        now: Instant,
    ) -> Self {
        let mut carousel = Self::mount(categories, config);
        carousel.catalog_loaded(Ok::<_, std::convert::Infallible>(images), now);
        carousel
    }

    /// Tear the carousel down. The autoplay deadline goes with it.
    pub fn unmount(self) {
        tracing::debug!(
            armed = self.autoplay.is_armed(),
            "carousel unmounted; autoplay released"
        );
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Instant at which the host should deliver the next [`CarouselEvent::Tick`].
    pub fn next_deadline(&self) -> Option<Instant> {
        self.autoplay.deadline()
    }

    pub fn view(&self) -> GalleryView<'_> {
        self.gallery.view(self.thumbnail_count)
    }

    /// Deliver the result of the asynchronous catalog build.
    ///
    /// A failed build leaves the carousel with an empty, non-loading catalog.
    pub fn catalog_loaded<E>(&mut self, result: Result<Vec<GalleryImage>, E>, now: Instant)
    where
        E: std::error::Error,
    {
        let before = self.watched();
        match result {
            Ok(images) => self.gallery.set_catalog(images),
            Err(error) => self.gallery.fail_catalog(&error),
        }
        self.reschedule_if_changed(before, now);
    }

    /// Apply one event.
    ///
    /// Only an out-of-range [`CarouselEvent::JumpTo`] is an error; it leaves
    /// the carousel untouched.
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) -> Result<(), GalleryError> {
        let before = self.watched();
        let navigated = match event {
            CarouselEvent::Tick => {
                self.tick(now);
                return Ok(());
            }
            CarouselEvent::Key(key) => self.on_key(key),
            CarouselEvent::Swipe { start_x, end_x } => self.on_swipe(start_x, end_x),
            CarouselEvent::PrevArrow => self.navigate(Direction::Prev),
            CarouselEvent::NextArrow => self.navigate(Direction::Next),
            CarouselEvent::SelectCategory(category) => {
                if let CategorySelection::FellBack { requested } =
                    self.gallery.select_category(&category)
                {
                    tracing::debug!(%requested, "category tab fell back to all");
                }
                true
            }
            CarouselEvent::JumpTo(index) => {
                self.gallery.set_index(index)?;
                true
            }
            CarouselEvent::ViewLarger => {
                self.gallery.open_lightbox();
                false
            }
            CarouselEvent::CloseLightbox(trigger) => {
                self.gallery.close_lightbox(trigger);
                false
            }
            CarouselEvent::ImageFailed(source) => {
                self.gallery.mark_broken(&source);
                false
            }
        };

        if navigated {
            self.reschedule(now);
        } else {
            self.reschedule_if_changed(before, now);
        }
        Ok(())
    }

    fn tick(&mut self, now: Instant) {
        if !self.autoplay.take_due(now) {
            return;
        }
        if self.can_autoplay() {
            self.gallery.advance(Direction::Next);
            tracing::debug!(index = self.gallery.active_index(), "autoplay advanced");
        }
        self.reschedule(now);
    }

    /// Returns whether the key was a navigation.
    fn on_key(&mut self, key: Key) -> bool {
        if self.gallery.lightbox().is_open() {
            if key == Key::Escape {
                self.gallery.close_lightbox(CloseTrigger::Escape);
            }
            return false;
        }
        match key {
            Key::ArrowLeft => self.navigate(Direction::Prev),
            Key::ArrowRight => self.navigate(Direction::Next),
            Key::Escape | Key::Other => false,
        }
    }

    fn on_swipe(&mut self, start_x: f32, end_x: f32) -> bool {
        if self.gallery.lightbox().is_open() {
            return false;
        }
        let dx = end_x - start_x;
        if dx.abs() < self.swipe_threshold {
            return false;
        }
        // Dragging content leftwards reveals the next slide.
        let direction = if dx < 0.0 {
            Direction::Next
        } else {
            Direction::Prev
        };
        self.navigate(direction)
    }

    fn navigate(&mut self, direction: Direction) -> bool {
        if self.gallery.lightbox().is_open() {
            return false;
        }
        self.gallery.advance(direction)
    }

    fn can_autoplay(&self) -> bool {
        !self.gallery.is_loading()
            && !self.gallery.lightbox().is_open()
            && self.gallery.filtered_len() > 0
    }

    fn watched(&self) -> Watched {
        Watched {
            index: self.gallery.active_index(),
            category: self.gallery.active_category().to_string(),
            lightbox_open: self.gallery.lightbox().is_open(),
            filtered_len: self.gallery.filtered_len(),
            loading: self.gallery.is_loading(),
        }
    }

    fn reschedule_if_changed(&mut self, before: Watched, now: Instant) {
        if self.watched() != before {
            self.reschedule(now);
        }
    }

    fn reschedule(&mut self, now: Instant) {
        if self.can_autoplay() {
            self.autoplay.arm(now);
        } else {
            self.autoplay.disarm();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::ALL;
    use std::time::Duration;

    const INTERVAL: Duration = Duration::from_secs(5);

    fn config() -> GalleryConfig {
        GalleryConfig::default()
    }

    fn scooters(now: Instant) -> Carousel {
        Carousel::mount_with_catalog(&SCOOTER_CATEGORIES, scooter_catalog(), &config(), now)
    }

    fn index(c: &Carousel) -> usize {
        c.gallery().active_index()
    }

    // =========================================================================
    // Mounting and catalog arrival
    // =========================================================================

    #[test]
    fn loading_carousel_does_not_autoplay() {
        let t0 = Instant::now();
        let mut c = Carousel::mount(&SCOOTER_CATEGORIES, &config());
        assert_eq!(c.view(), GalleryView::Loading);
        assert_eq!(c.next_deadline(), None);
        c.handle(CarouselEvent::Tick, t0 + INTERVAL).unwrap();
        assert_eq!(c.view(), GalleryView::Loading);
    }

    #[test]
    fn catalog_arrival_arms_autoplay() {
        let t0 = Instant::now();
        let mut c = Carousel::mount(&SCOOTER_CATEGORIES, &config());
        c.catalog_loaded(Ok::<_, std::io::Error>(scooter_catalog()), t0);
        assert_eq!(c.next_deadline(), Some(t0 + INTERVAL));
    }

    #[test]
    fn failed_catalog_shows_empty_state() {
        let t0 = Instant::now();
        let mut c = Carousel::mount(&SCOOTER_CATEGORIES, &config());
        c.catalog_loaded(Err(std::io::Error::other("shuffle failed")), t0);
        assert_eq!(c.view(), GalleryView::Empty { category: ALL });
        assert_eq!(c.next_deadline(), None);
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    #[test]
    fn tick_advances_after_interval() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::Tick, t0 + Duration::from_secs(4)).unwrap();
        assert_eq!(index(&c), 0);
        c.handle(CarouselEvent::Tick, t0 + INTERVAL).unwrap();
        assert_eq!(index(&c), 1);
        assert_eq!(c.next_deadline(), Some(t0 + INTERVAL * 2));
    }

    #[test]
    fn autoplay_wraps_around() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        let mut now = t0;
        for _ in 0..4 {
            now += INTERVAL;
            c.handle(CarouselEvent::Tick, now).unwrap();
        }
        assert_eq!(index(&c), 0);
    }

    #[test]
    fn late_tick_advances_once() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::Tick, t0 + INTERVAL * 3).unwrap();
        assert_eq!(index(&c), 1);
    }

    #[test]
    fn manual_navigation_restarts_interval() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        let t1 = t0 + Duration::from_secs(4);
        c.handle(CarouselEvent::NextArrow, t1).unwrap();
        assert_eq!(index(&c), 1);

        // The original deadline has passed but was replaced.
        c.handle(CarouselEvent::Tick, t0 + INTERVAL).unwrap();
        assert_eq!(index(&c), 1);

        c.handle(CarouselEvent::Tick, t1 + INTERVAL).unwrap();
        assert_eq!(index(&c), 2);
    }

    #[test]
    fn tick_reads_current_filter() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::SelectCategory("nmax".into()), t0).unwrap();
        c.handle(CarouselEvent::Tick, t0 + INTERVAL).unwrap();
        c.handle(CarouselEvent::Tick, t0 + INTERVAL * 2).unwrap();
        assert_eq!(index(&c), 0);
        assert_eq!(c.gallery().active_image().unwrap().category, "nmax");
    }

    #[test]
    fn empty_filter_disarms_autoplay() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::SelectCategory("scoopy".into()), t0).unwrap();
        c.catalog_loaded(Ok::<_, std::io::Error>(scooter_catalog()[..2].to_vec()), t0);
        assert_eq!(c.next_deadline(), None);
        c.handle(CarouselEvent::NextArrow, t0).unwrap();
        assert_eq!(index(&c), 0);
        assert_eq!(c.view(), GalleryView::Empty { category: "scoopy" });
    }

    // =========================================================================
    // Lightbox interaction
    // =========================================================================

    #[test]
    fn lightbox_suspends_autoplay() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::ViewLarger, t0 + Duration::from_secs(1)).unwrap();
        assert_eq!(c.next_deadline(), None);

        c.handle(CarouselEvent::Tick, t0 + INTERVAL * 10).unwrap();
        assert_eq!(index(&c), 0);
        assert_eq!(c.gallery().lightbox().image().unwrap().source, "/bikes/nmax-1.jpg");
    }

    #[test]
    fn closing_lightbox_starts_fresh_interval() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::ViewLarger, t0).unwrap();
        let closed_at = t0 + Duration::from_secs(60);
        c.handle(CarouselEvent::CloseLightbox(CloseTrigger::CloseButton), closed_at)
            .unwrap();
        assert_eq!(c.next_deadline(), Some(closed_at + INTERVAL));

        c.handle(CarouselEvent::Tick, closed_at + Duration::from_secs(1)).unwrap();
        assert_eq!(index(&c), 0, "no burst of catch-up advances");
    }

    #[test]
    fn all_close_paths_converge() {
        let events = [
            CarouselEvent::CloseLightbox(CloseTrigger::CloseButton),
            CarouselEvent::CloseLightbox(CloseTrigger::Backdrop),
            CarouselEvent::Key(Key::Escape),
        ];
        for event in events {
            let t0 = Instant::now();
            let mut c = scooters(t0);
            c.handle(CarouselEvent::JumpTo(2), t0).unwrap();
            c.handle(CarouselEvent::ViewLarger, t0).unwrap();
            c.handle(event, t0 + INTERVAL).unwrap();
            assert!(!c.gallery().lightbox().is_open());
            assert_eq!(index(&c), 2);
            assert_eq!(c.next_deadline(), Some(t0 + INTERVAL * 2));
        }
    }

    #[test]
    fn arrows_are_ignored_while_lightbox_open() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::ViewLarger, t0).unwrap();
        c.handle(CarouselEvent::Key(Key::ArrowRight), t0).unwrap();
        c.handle(CarouselEvent::NextArrow, t0).unwrap();
        c.handle(CarouselEvent::Swipe { start_x: 300.0, end_x: 10.0 }, t0)
            .unwrap();
        assert_eq!(index(&c), 0);
        assert!(c.gallery().lightbox().is_open());
    }

    // =========================================================================
    // Input mapping
    // =========================================================================

    #[test]
    fn arrow_keys_navigate() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::Key(Key::from_dom("ArrowLeft")), t0).unwrap();
        assert_eq!(index(&c), 3);
        c.handle(CarouselEvent::Key(Key::from_dom("ArrowRight")), t0).unwrap();
        assert_eq!(index(&c), 0);
    }

    #[test]
    fn unrelated_keys_do_not_reset_timer() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::Key(Key::from_dom("a")), t0 + Duration::from_secs(3))
            .unwrap();
        assert_eq!(c.next_deadline(), Some(t0 + INTERVAL));
    }

    #[test]
    fn swipes_respect_threshold() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::Swipe { start_x: 200.0, end_x: 170.0 }, t0)
            .unwrap();
        assert_eq!(index(&c), 0);
        c.handle(CarouselEvent::Swipe { start_x: 200.0, end_x: 100.0 }, t0)
            .unwrap();
        assert_eq!(index(&c), 1);
        c.handle(CarouselEvent::Swipe { start_x: 100.0, end_x: 200.0 }, t0)
            .unwrap();
        assert_eq!(index(&c), 0);
    }

    #[test]
    fn jump_out_of_range_is_error_and_keeps_state() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::JumpTo(1), t0).unwrap();
        let err = c.handle(CarouselEvent::JumpTo(9), t0).unwrap_err();
        assert_eq!(err, GalleryError::IndexOutOfRange { index: 9, len: 4 });
        assert_eq!(index(&c), 1);
    }

    #[test]
    fn image_failure_keeps_position_and_timer() {
        let t0 = Instant::now();
        let mut c = scooters(t0);
        c.handle(CarouselEvent::ImageFailed("/bikes/nmax-1.jpg".into()), t0 + Duration::from_secs(2))
            .unwrap();
        assert!(c.gallery().is_broken("/bikes/nmax-1.jpg"));
        assert_eq!(index(&c), 0);
        assert_eq!(c.next_deadline(), Some(t0 + INTERVAL));
    }

    #[test]
    fn unmount_consumes_carousel() {
        let t0 = Instant::now();
        let c = scooters(t0);
        assert!(c.next_deadline().is_some());
        c.unmount();
    }
}
