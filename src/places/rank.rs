//! Place ranking.
//!
//! Computes the `stars` relevance score of a place from its own fields
//! and the caller's preferred topic labels. No external calls, no hidden
//! state: re-rating with unchanged inputs yields an identical score and
//! explanation list.

use crate::places::place::{Place, ScoreExplanation};

/// Maximum star contribution from matching topic labels.
const MAX_LABEL_POINTS: usize = 2;

/// Scores places against a set of user-preferred topic labels.
#[derive(Clone, Debug, Default)]
pub struct Ranker {
    preferred: Vec<String>,
}

impl Ranker {
    /// Create a ranker for the given preferred labels.
    pub fn new(preferred: &[String]) -> Self {
        Self {
            preferred: preferred.to_vec(),
        }
    }

    /// Recompute a place's stars and explanation list.
    ///
    /// Rules, in order:
    /// - +1 when the place has an article/page reference
    /// - +(importance − 3) when importance exceeds 3
    /// - +min(matching labels, 2)
    ///
    /// Each contributing rule appends one structured explanation. The
    /// score and explanations are rebuilt from scratch, so the function
    /// is idempotent.
    pub fn rate(&self, place: &mut Place) -> f32 {
        place.stars = 0.0;
        place.explanations.clear();

        if place.page_ref.is_some() {
            add(place, 1.0, "has an article");
        }

        if let Some(importance) = place.importance {
            if importance > 3.0 {
                let reason = if importance > 4.0 {
                    "widely known sight"
                } else {
                    "locally notable sight"
                };
                add(place, importance - 3.0, reason);
            }
        }

        let matching = place
            .labels
            .iter()
            .filter(|label| {
                self.preferred
                    .iter()
                    .any(|preferred| preferred.eq_ignore_ascii_case(label))
            })
            .count();
        if matching > 0 {
            let reason = if matching > 1 {
                "matches several of your interests"
            } else {
                "matches one of your interests"
            };
            add(place, matching.min(MAX_LABEL_POINTS) as f32, reason);
        }

        place.stars
    }
}

fn add(place: &mut Place, points: f32, reason: &str) {
    place.stars += points;
    place.explanations.push(ScoreExplanation {
        points,
        reason: reason.to_string(),
    });
}
