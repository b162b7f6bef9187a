//! Category-balanced catalog ordering.
//!
//! A plain shuffle of a mixed catalog regularly produces runs of three or four
//! images from the same category, which reads badly in a showcase slider.
//! [`balanced_shuffle`] randomizes *within* each category and then deals the
//! categories out round-robin:
//!
//! ```text
//! buckets (after per-bucket shuffle)     output
//! nmax:   [n2, n1]                       round 0: n2 v1 s1
//! vario:  [v1]                    →      round 1: n1
//! scoopy: [s1]
//! ```
//!
//! Two neighbours can only share a category once every other bucket has run
//! dry, so clustering is bounded by how unequal the bucket sizes are.
//!
//! The function is pure apart from the injected random source: pass a seeded
//! [`rand::rngs::StdRng`] for reproducible orders, or an entropy-seeded one so
//! every page load gets a fresh order.

use crate::types::GalleryImage;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Order `images` so that categories are interleaved round-robin.
///
/// `categories` fixes the lane order. Categories with no images are skipped in
/// every round. Images tagged with a category missing from the list are not
/// dropped: their categories become extra lanes after the listed ones, in
/// order of first appearance. The output is always a permutation of the input.
pub fn balanced_shuffle<R, S>(images: &[GalleryImage], categories: &[S], rng: &mut R) -> Vec<GalleryImage>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let mut lane_of: HashMap<&str, usize> = HashMap::new();
    let mut lanes: Vec<Vec<GalleryImage>> = Vec::new();

    for category in categories {
        let category = category.as_ref();
        if !lane_of.contains_key(category) {
            lane_of.insert(category, lanes.len());
            lanes.push(Vec::new());
        }
    }
    let listed = lanes.len();

    for image in images {
        let lane = *lane_of.entry(image.category.as_str()).or_insert_with(|| {
            lanes.push(Vec::new());
            lanes.len() - 1
        });
        lanes[lane].push(image.clone());
    }

    if lanes.len() > listed {
        tracing::debug!(
            extra = lanes.len() - listed,
            "catalog has categories outside the configured list; appending them as extra lanes"
        );
    }

    for lane in &mut lanes {
        lane.shuffle(rng);
    }

    let rounds = lanes.iter().map(Vec::len).max().unwrap_or(0);
    let mut lanes: Vec<_> = lanes.into_iter().map(Vec::into_iter).collect();
    let mut ordered = Vec::with_capacity(images.len());
    for _ in 0..rounds {
        for lane in &mut lanes {
            if let Some(image) = lane.next() {
                ordered.push(image);
            }
        }
    }
    ordered
}
