//! Filename parsing for catalog directories.
//!
//! Image files inside a category directory follow the `NNN-name` convention:
//! an optional numeric prefix that orders the images, followed by a name that
//! doubles as alt text. Category directories use the same convention, so
//! `010-nmax/` sorts before `020-vario/` and is labelled `nmax`.
//!
//! ## Alt Text
//!
//! Dashes in the name portion become spaces:
//! - `001-matte-black-nmax.jpg` → "matte black nmax"
//! - `balinese-dragon.png` → "balinese dragon"
//! - `007.jpg` → "" (caller substitutes a fallback)

/// Result of parsing a name like `020-My-Best-Piece`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Ordering prefix if present (`20` from `020-My-Best-Piece`).
    pub number: Option<u32>,
    /// Raw name after the prefix, dashes kept. Full input when unnumbered.
    pub name: String,
    /// Name with dashes turned into spaces.
    pub label: String,
}

impl ParsedName {
    /// Sort key placing numbered entries first, by number, then unnumbered
    /// entries by name.
    pub fn sort_key(&self) -> (u32, String) {
        (self.number.unwrap_or(u32::MAX), self.name.clone())
    }
}

/// Parse an entry name following the `NNN-name` convention.
///
/// - `"020-My-Best-Piece"` → number=Some(20), name="My-Best-Piece", label="My Best Piece"
/// - `"001"` → number=Some(1), name="", label=""
/// - `"wip-sketches"` → number=None, name="wip-sketches", label="wip sketches"
pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some((prefix, rest)) = name.split_once('-')
        && let Ok(number) = prefix.parse::<u32>()
    {
        return ParsedName {
            number: Some(number),
            name: rest.to_string(),
            label: rest.replace('-', " "),
        };
    }
    if let Ok(number) = name.parse::<u32>() {
        return ParsedName {
            number: Some(number),
            name: String::new(),
            label: String::new(),
        };
    }
    ParsedName {
        number: None,
        name: name.to_string(),
        label: name.replace('-', " "),
    }
}
