//! "Book via messaging app" link composition.
//!
//! The booking form never submits anywhere. It turns the visitor's answers
//! into a plain-text message and opens the studio's messaging deep link:
//!
//! ```text
//! https://wa.me/6281234567890?text=Hello%2C%20I%20would%20like...
//! ```
//!
//! Message lines are always in the same order: greeting, name, phone, date,
//! time, item type, notes. Optional answers left blank read `Not specified`.

use crate::config::BookingConfig;
use thiserror::Error;

/// Text used for optional answers the visitor left blank.
pub const NOT_SPECIFIED: &str = "Not specified";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("Missing required booking field: {0}")]
    MissingField(&'static str),
    #[error("No destination phone number configured (booking.phone_number)")]
    NoDestination,
}

/// Answers collected by the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub item_type: Option<String>,
    pub notes: Option<String>,
}

impl BookingRequest {
    fn validate(&self) -> Result<(), BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::MissingField("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(BookingError::MissingField("phone"));
        }
        Ok(())
    }
}

fn or_not_specified(value: &Option<String>) -> &str {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}

/// Compose the plain-text booking message.
pub fn compose_message(request: &BookingRequest, config: &BookingConfig) -> Result<String, BookingError> {
    request.validate()?;
    let lines = [
        config.greeting.trim().to_string(),
        String::new(),
        format!("Name: {}", request.name.trim()),
        format!("Phone: {}", request.phone.trim()),
        format!("Date: {}", or_not_specified(&request.date)),
        format!("Time: {}", or_not_specified(&request.time)),
        format!("{}: {}", config.item_label, or_not_specified(&request.item_type)),
        format!("Notes: {}", or_not_specified(&request.notes)),
    ];
    Ok(lines.join("\n"))
}

/// Build the deep link that opens the messaging app with `message` prefilled.
///
/// The phone number is reduced to its digits, which is the form
/// click-to-chat links expect.
pub fn deep_link(config: &BookingConfig, message: &str) -> Result<String, BookingError> {
    let digits: String = config
        .phone_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return Err(BookingError::NoDestination);
    }
    Ok(format!(
        "{}/{}?text={}",
        config.messaging_url.trim_end_matches('/'),
        digits,
        urlencoding::encode(message)
    ))
}

/// Compose the message and wrap it in the deep link.
pub fn booking_link(request: &BookingRequest, config: &BookingConfig) -> Result<String, BookingError> {
    let message = compose_message(request, config)?;
    deep_link(config, &message)
}
