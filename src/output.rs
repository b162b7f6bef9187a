//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ## Check
//!
//! ```text
//! Categories
//! 001 nmax (2 images)
//! 002 vario (1 image)
//! 003 scoopy (0 images)
//!
//! 3 images in 3 categories
//! ```
//!
//! ## Shuffle
//!
//! ```text
//! 001 [nmax] NMAX matte black
//!     Source: /bikes/nmax-1.jpg
//! 002 [vario] Vario red
//!     Source: /bikes/vario-1.jpg
//! ```

use crate::catalog::Catalog;
use crate::types::GalleryImage;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn count_of(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

pub fn format_check_output(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    let counts = catalog.counts();
    for (i, (category, n)) in counts.iter().enumerate() {
        let mut line = format!(
            "{} {} ({})",
            format_index(i + 1),
            category,
            count_of(*n, "image", "images")
        );
        if !catalog.categories.iter().any(|c| c.as_str() == *category) {
            line.push_str(" [unlisted]");
        }
        lines.push(line);
    }
    lines.push(String::new());
    lines.push(format!(
        "{} in {}",
        count_of(catalog.images.len(), "image", "images"),
        count_of(counts.len(), "category", "categories")
    ));
    lines
}

pub fn format_shuffle_output(images: &[GalleryImage]) -> Vec<String> {
    let mut lines = Vec::with_capacity(images.len() * 2);
    for (i, image) in images.iter().enumerate() {
        lines.push(format!("{} [{}] {}", format_index(i + 1), image.category, image.alt));
        lines.push(format!("    Source: {}", image.source));
    }
    lines
}

pub fn print_check_output(catalog: &Catalog) {
    for line in format_check_output(catalog) {
        println!("{}", line);
    }
}

pub fn print_shuffle_output(images: &[GalleryImage]) {
    for line in format_shuffle_output(images) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn check_output_lists_counts() {
        let catalog = Catalog {
            categories: vec!["nmax".into(), "vario".into(), "scoopy".into()],
            images: scooter_catalog()[..3].to_vec(),
        };
        assert_eq!(
            format_check_output(&catalog),
            vec![
                "Categories",
                "001 nmax (2 images)",
                "002 vario (1 image)",
                "003 scoopy (0 images)",
                "",
                "3 images in 3 categories",
            ]
        );
    }

    #[test]
    fn check_output_flags_unlisted_categories() {
        let catalog = Catalog {
            categories: vec!["nmax".into()],
            images: vec![image("/p.jpg", "pcx")],
        };
        let lines = format_check_output(&catalog);
        assert_eq!(lines[2], "002 pcx (1 image) [unlisted]");
        assert_eq!(lines.last().unwrap(), "1 image in 2 categories");
    }

    #[test]
    fn shuffle_output_shows_position_category_and_source() {
        let lines = format_shuffle_output(&scooter_catalog()[2..]);
        assert_eq!(
            lines,
            vec![
                "001 [vario] vario /bikes/vario-1.jpg",
                "    Source: /bikes/vario-1.jpg",
                "002 [scoopy] scoopy /bikes/scoopy-1.jpg",
                "    Source: /bikes/scoopy-1.jpg",
            ]
        );
    }
}
