//! Place merging and deduplication.
//!
//! Three independent stages, all pure over in-memory lists:
//!
//! 1. [`apply_translations`]: rewrite titles with labeling-service
//!    translations.
//! 2. [`union_sources`]: unite two source lists on exact title match,
//!    copying secondary-only attributes onto the primary records.
//! 3. [`dedup_places`]: left fold that drops resolver-duplicates, with a
//!    source-language preference replacement rule.

use crate::places::identity::NameMatcher;
use crate::places::place::{Place, PlacePosition};

/// Distances below this are considered "here" and normalized to zero.
const NEAR_DISTANCE_M: f64 = 100.0;

/// A translated title produced by the external labeling service.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleTranslation {
    /// Title as delivered by the source
    pub original: String,
    /// Translated title
    pub translated: String,
}

/// Rewrite place titles using labeling-service translations.
///
/// A translation entry applies to the first place it matches by name;
/// when the translation differs from the place's title, the title becomes
/// `"{translation} ({original})"`.
pub fn apply_translations(
    places: &mut [Place],
    translations: &[TitleTranslation],
    matcher: &NameMatcher,
) {
    for place in places.iter_mut() {
        let translation = translations
            .iter()
            .find(|t| matcher.is_same_name(&t.original, &place.title));
        if let Some(t) = translation {
            if t.translated != place.title && !t.translated.is_empty() {
                place.title = format!("{} ({})", t.translated, place.title);
            }
        }
    }
}

/// Unite two source lists, keyed by exact title match.
///
/// Attributes present only in the secondary record (type, URL, Wikipedia
/// reference) are copied onto the matching primary record; secondary
/// records without a title match are appended as new places.
pub fn union_sources(mut primary: Vec<Place>, secondary: Vec<Place>) -> Vec<Place> {
    for record in secondary {
        match primary.iter().position(|p| p.title == record.title) {
            Some(i) => {
                let target = &mut primary[i];
                if target.place_type.is_none() {
                    target.place_type = record.place_type;
                }
                if target.url.is_none() {
                    target.url = record.url;
                }
                if target.wikipedia.is_none() {
                    target.wikipedia = record.wikipedia;
                }
            }
            None => primary.push(record),
        }
    }
    primary
}

/// Fold places left-to-right, dropping resolver-duplicates.
///
/// When a new place duplicates an accepted one, it is dropped, unless
/// the accepted place's language differs from the presentation language
/// while the new place's matches it, in which case the new place replaces
/// the accepted entry. Name matching is not transitive, so a replacing
/// title can duplicate accepted entries the replaced one did not; those
/// are dropped as well. The output contains no two places the resolver
/// judges duplicates, so merging an already-merged list is a no-op.
pub fn dedup_places(
    places: Vec<Place>,
    presentation_language: &str,
    matcher: &NameMatcher,
) -> Vec<Place> {
    let mut accepted: Vec<Place> = Vec::new();

    for place in places {
        let duplicate_of = accepted
            .iter()
            .position(|existing| matcher.is_same_name(&place.title, &existing.title));
        match duplicate_of {
            None => accepted.push(place),
            Some(i) => {
                let existing_is_target =
                    accepted[i].language.as_deref() == Some(presentation_language);
                let place_is_target = place.language.as_deref() == Some(presentation_language);
                if !existing_is_target && place_is_target {
                    accepted[i] = place;
                    let title = accepted[i].title.clone();
                    let mut index = 0;
                    accepted.retain(|existing| {
                        let keep = index == i || !matcher.is_same_name(&title, &existing.title);
                        index += 1;
                        keep
                    });
                }
            }
        }
    }

    accepted
}

/// Normalize near distances: anything below 100 m becomes exactly 0.
pub fn normalize_distances(places: &mut [Place]) {
    for place in places.iter_mut() {
        if let PlacePosition::DistanceMeters(d) = &mut place.position {
            if *d < NEAR_DISTANCE_M {
                *d = 0.0;
            }
        }
    }
}
