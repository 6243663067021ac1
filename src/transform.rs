//! Display-order transforms for a working set.
//!
//! Each transform takes the current sequence by value and hands back the
//! reordered one; entities themselves are never touched.

use std::cmp::Ordering;

use rand::{Rng, seq::SliceRandom};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::types::{Named, Track};

/// Uniformly random permutation of `items`.
pub fn shuffle<T>(items: Vec<T>) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

pub fn shuffle_with<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items
}

/// Ascending by display name. Ties keep their previous relative order.
pub fn sort_by_name<T: Named>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by(|a, b| collate(a.name(), b.name()));
    items
}

/// Ascending by the first credited artist's name, stable for ties.
pub fn sort_by_artist(mut tracks: Vec<Track>) -> Vec<Track> {
    tracks.sort_by(|a, b| collate(a.primary_artist(), b.primary_artist()));
    tracks
}

/// Locale-aware name comparison used for every name ordering.
///
/// Names are compared first on their base letters, ignoring case and
/// accents, so `Émile` sorts between `Bjork` and `Zoe`. Names equal on base
/// letters are then ordered by their accents (`Elan` before `Élan`). Case
/// alone never orders two names.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
}

fn with_accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    with_accents(s).filter(|c| !is_combining_mark(*c))
}
