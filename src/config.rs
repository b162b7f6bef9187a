//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is deep-merged on top, so a
//! config file only needs the keys it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [gallery]
//! autoplay_interval_ms = 5000   # Time between automatic advances
//! thumbnail_count = 5           # Thumbnails shown under the slider
//! swipe_threshold_px = 50       # Minimum horizontal travel for a swipe
//! placeholder = "/placeholder.svg"
//! empty_message = "No images found in this category"
//! loading_message = "Loading gallery..."
//!
//! [booking]
//! messaging_url = "https://wa.me"
//! phone_number = ""             # Studio number, country code first
//! item_label = "Type"           # e.g. "Tattoo Type", "Motorbike"
//! greeting = "Hello, I would like to make a booking."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Slider behaviour and copy.
    pub gallery: GalleryConfig,
    /// Messaging-app booking link.
    pub booking: BookingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.autoplay_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "gallery.autoplay_interval_ms must be greater than 0".into(),
            ));
        }
        if self.gallery.placeholder.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gallery.placeholder must not be empty".into(),
            ));
        }
        let url = self.booking.messaging_url.as_str();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Validation(
                "booking.messaging_url must be an http(s) URL".into(),
            ));
        }
        if self
            .booking
            .phone_number
            .chars()
            .any(|c| !(c.is_ascii_digit() || c == '+' || c == ' ' || c == '-'))
        {
            return Err(ConfigError::Validation(
                "booking.phone_number may only contain digits, '+', spaces and dashes".into(),
            ));
        }
        Ok(())
    }
}

/// Slider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Milliseconds between automatic advances.
    pub autoplay_interval_ms: u64,
    /// Number of leading thumbnails rendered under the slider.
    pub thumbnail_count: usize,
    /// Minimum horizontal pointer travel, in pixels, that counts as a swipe.
    pub swipe_threshold_px: u32,
    /// Image shown in place of a missing or broken source.
    pub placeholder: String,
    /// Text shown when the active category has no images.
    pub empty_message: String,
    /// Text shown until the catalog is ready.
    pub loading_message: String,
}

impl GalleryConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
            thumbnail_count: 5,
            swipe_threshold_px: 50,
            placeholder: "/placeholder.svg".to_string(),
            empty_message: "No images found in this category".to_string(),
            loading_message: "Loading gallery...".to_string(),
        }
    }
}

/// Booking deep-link settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingConfig {
    /// Base URL of the messaging service; the phone number is appended as a path segment.
    pub messaging_url: String,
    /// Number that receives booking messages.
    pub phone_number: String,
    /// Label for the item-type line of the message.
    pub item_label: String,
    /// First line of every booking message.
    pub greeting: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            messaging_url: "https://wa.me".to_string(),
            phone_number: String::new(),
            item_label: "Type".to_string(),
            greeting: "Hello, I would like to make a booking.".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in `dir`, falling back to stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# showcase-gal configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Gallery slider
# ---------------------------------------------------------------------------
[gallery]
# Milliseconds between automatic advances. Paused while the lightbox is open.
autoplay_interval_ms = 5000

# Leading thumbnails shown under the slider.
thumbnail_count = 5

# Minimum horizontal swipe distance in pixels.
swipe_threshold_px = 50

# Image shown when a source is missing or fails to load.
placeholder = "/placeholder.svg"

# Shown when the selected category has no images.
empty_message = "No images found in this category"

# Shown until the catalog is ready.
loading_message = "Loading gallery..."

# ---------------------------------------------------------------------------
# Booking via messaging app
# ---------------------------------------------------------------------------
[booking]
# Base URL of the messaging service. The phone number is appended as a path.
messaging_url = "https://wa.me"

# Number receiving booking requests, country code first (e.g. "6281234567890").
phone_number = ""

# Label of the item-type line ("Tattoo Type", "Motorbike", ...).
item_label = "Type"

# First line of every booking message.
greeting = "Hello, I would like to make a booking."
"##
}
