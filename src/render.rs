//! HTML rendering of the gallery view.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating, so
//! alt text and captions from the catalog are escaped automatically.
//!
//! ## Markup
//!
//! ```text
//! div.gallery
//! ├── nav.gallery-tabs          "All" + one button per category
//! ├── div.gallery-slider        loading placeholder | empty message | slide
//! │   ├── figure.gallery-slide  image, caption, "View Larger"
//! │   ├── button.gallery-arrow  prev / next
//! │   └── div.gallery-dots
//! ├── div.gallery-thumbnails    leading thumbnails of the filtered view
//! └── div.gallery-modal         lightbox, class "open" when shown
//! ```
//!
//! Broken or empty sources are swapped for the configured placeholder.

use crate::config::GalleryConfig;
use crate::gallery::{Gallery, GalleryView, Slide};
use crate::types::{ALL, GalleryImage};
use maud::{DOCTYPE, Markup, html};

const STYLE: &str = r#"
.gallery { position: relative; }
.gallery-tabs { display: flex; justify-content: center; gap: .25rem; margin-bottom: 2rem; }
.gallery-tabs button { text-transform: uppercase; letter-spacing: .1em; }
.gallery-tabs button.active { background: #c81e1e; color: #fff; }
.gallery-slider { position: relative; height: 500px; overflow: hidden; border-radius: .75rem; }
.gallery-slide img { width: 100%; height: 100%; object-fit: cover; }
.gallery-arrow.prev { position: absolute; left: 1rem; top: 50%; }
.gallery-arrow.next { position: absolute; right: 1rem; top: 50%; }
.gallery-dot.active { background: #c81e1e; }
.gallery-thumbnails { display: grid; grid-template-columns: repeat(5, 1fr); gap: .5rem; margin-top: 1rem; }
.gallery-thumbnails .active { outline: 2px solid #c81e1e; }
.gallery-modal { display: none; }
.gallery-modal.open { display: flex; position: fixed; inset: 0; background: rgba(0,0,0,.9); }
"#;

/// Source to display for `image`, substituting the placeholder when needed.
pub fn display_source<'a>(gallery: &Gallery, image: &'a GalleryImage, config: &'a GalleryConfig) -> &'a str {
    if image.source.trim().is_empty() || gallery.is_broken(&image.source) {
        &config.placeholder
    } else {
        &image.source
    }
}

/// Render the gallery component.
pub fn render_gallery(gallery: &Gallery, config: &GalleryConfig) -> Markup {
    html! {
        div.gallery {
            (render_tabs(gallery))
            div.gallery-slider aria-live="polite" {
                @match gallery.view(config.thumbnail_count) {
                    GalleryView::Loading => {
                        div.gallery-loading { p { (config.loading_message) } }
                    }
                    GalleryView::Empty { .. } => {
                        div.gallery-empty { p { (config.empty_message) } }
                    }
                    GalleryView::Showing(slide) => {
                        (render_slide(gallery, &slide, config))
                    }
                }
            }
            (render_thumbnails(gallery, config))
            (render_lightbox(gallery, config))
        }
    }
}

/// Render a standalone HTML page around the gallery.
pub fn render_page(title: &str, gallery: &Gallery, config: &GalleryConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLE) }
            }
            body {
                main { (render_gallery(gallery, config)) }
            }
        }
    }
}

fn render_tabs(gallery: &Gallery) -> Markup {
    let active = gallery.active_category();
    html! {
        nav.gallery-tabs {
            button.active[active == ALL] type="button" data-category=(ALL) { "All" }
            @for category in gallery.categories() {
                button.active[active == category.as_str()] type="button" data-category=(category) {
                    (category)
                }
            }
        }
    }
}

fn render_slide(gallery: &Gallery, slide: &Slide<'_>, config: &GalleryConfig) -> Markup {
    let image = slide.image;
    html! {
        figure.gallery-slide data-index=(slide.index) {
            img src=(display_source(gallery, image, config)) alt=(image.alt);
            figcaption {
                h3 { (image.alt) }
                p.gallery-category { (image.category) }
                span.gallery-counter { (slide.index + 1) " / " (slide.total) }
            }
            button.gallery-view-larger type="button" { "View Larger" }
        }
        button.gallery-arrow.prev type="button" aria-label="Previous image" { "‹" }
        button.gallery-arrow.next type="button" aria-label="Next image" { "›" }
        div.gallery-dots {
            @for i in 0..slide.total {
                button.gallery-dot.active[i == slide.index] type="button" data-index=(i) {}
            }
        }
    }
}

fn render_thumbnails(gallery: &Gallery, config: &GalleryConfig) -> Markup {
    html! {
        @if let GalleryView::Showing(slide) = gallery.view(config.thumbnail_count) {
            div.gallery-thumbnails {
                @for thumb in &slide.thumbnails {
                    button.gallery-thumbnail.active[thumb.active] type="button" data-index=(thumb.index) {
                        img src=(display_source(gallery, thumb.image, config))
                            alt={ "Thumbnail " (thumb.index + 1) } loading="lazy";
                    }
                }
            }
        }
    }
}

fn render_lightbox(gallery: &Gallery, config: &GalleryConfig) -> Markup {
    let lightbox = gallery.lightbox();
    html! {
        div.gallery-modal.open[lightbox.is_open()] role="dialog" aria-modal="true" {
            button.gallery-modal-close type="button" aria-label="Close" { "×" }
            div.gallery-modal-content {
                @if let Some(image) = lightbox.image() {
                    img src=(display_source(gallery, image, config)) alt=(image.alt);
                }
            }
        }
    }
}
