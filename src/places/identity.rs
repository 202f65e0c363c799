//! Place-name identity resolution.
//!
//! Decides whether two place names (possibly one of them translated)
//! denote the same real-world entity. Names are normalized, digit
//! sequences are compared exactly, an optional town-name substring is
//! stripped, and the remainder is compared with Levenshtein distance
//! under an adaptive threshold.

/// Extra characters a name may have beyond the town name before the town
/// substring is stripped from it.
const TOWN_STRIP_SLACK: usize = 5;

/// Name comparison with an optional known town name.
#[derive(Clone, Debug, Default)]
pub struct NameMatcher {
    town: Option<String>,
}

impl NameMatcher {
    /// Matcher without town context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher that strips the given town name from long names.
    pub fn with_town(town: &str) -> Self {
        Self {
            town: Some(normalize(town)),
        }
    }

    /// Decide whether `a` and `b` denote the same place.
    ///
    /// Digit-bearing names must agree on their concatenated digit
    /// sequences exactly (station/address disambiguation); otherwise the
    /// normalized names are compared with an adaptive edit-distance
    /// threshold. Substring containment gets the lenient threshold
    /// `max(3, len_diff + min_len/10)`, everything else the stricter
    /// `max(2, min_len * 15 / 100)`; a match requires identity or a
    /// distance strictly below the threshold.
    pub fn is_same_name(&self, a: &str, b: &str) -> bool {
        let digits_a = digit_signature(a);
        let digits_b = digit_signature(b);
        if (!digits_a.is_empty() || !digits_b.is_empty()) && digits_a != digits_b {
            return false;
        }

        let mut norm_a = normalize(a);
        let mut norm_b = normalize(b);

        if let Some(town) = &self.town {
            norm_a = strip_town(norm_a, town);
            norm_b = strip_town(norm_b, town);
        }

        if norm_a == norm_b {
            return true;
        }
        if norm_a.is_empty() || norm_b.is_empty() {
            return false;
        }

        let chars_a: Vec<char> = norm_a.chars().collect();
        let chars_b: Vec<char> = norm_b.chars().collect();
        let min_len = chars_a.len().min(chars_b.len());
        let len_diff = chars_a.len().abs_diff(chars_b.len());

        let allowed = if norm_a.contains(&norm_b) || norm_b.contains(&norm_a) {
            // Containment already signals intent; tolerate suffixes and
            // abbreviations.
            3usize.max(len_diff + min_len / 10)
        } else {
            2usize.max(min_len * 15 / 100)
        };

        levenshtein(&chars_a, &chars_b) < allowed
    }
}

/// Lowercase, drop parenthetical content, keep only alphanumerics.
fn normalize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut paren_depth = 0u32;
    for ch in name.to_lowercase().chars() {
        match ch {
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if paren_depth == 0 && ch.is_alphanumeric() => result.push(ch),
            _ => {}
        }
    }
    result
}

/// Concatenated digit sequences of the raw name.
fn digit_signature(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Strip the town substring from a normalized name when the name is
/// clearly longer than the town name alone.
fn strip_town(name: String, town: &str) -> String {
    if town.is_empty() {
        return name;
    }
    let name_len = name.chars().count();
    let town_len = town.chars().count();
    if name_len > town_len + TOWN_STRIP_SLACK {
        name.replacen(town, "", 1)
    } else {
        name
    }
}

/// Levenshtein edit distance, two-row dynamic programming.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_case_space_insensitive() {
        let matcher = NameMatcher::new();
        assert!(matcher.is_same_name("Münchner Hof", "munchnerhof"));
    }

    #[test]
    fn test_digit_mismatch_forces_non_match() {
        let matcher = NameMatcher::new();
        assert!(!matcher.is_same_name("Altes Rathaus 12", "Altes Rathaus 14"));
        // Same digits still match
        assert!(matcher.is_same_name("Altes Rathaus 12", "altes rathaus 12"));
    }

    #[test]
    fn test_distinct_compound_names_do_not_match() {
        let matcher = NameMatcher::new();
        assert!(!matcher.is_same_name("Alte Brauerei", "Neue Brauerei"));
    }

    #[test]
    fn test_identical_after_normalization() {
        let matcher = NameMatcher::new();
        assert!(matcher.is_same_name("St. Peter (Dom)", "st peter"));
    }

    #[test]
    fn test_substring_containment_is_lenient() {
        let matcher = NameMatcher::new();
        // Suffix difference: containment grants the lenient threshold
        assert!(matcher.is_same_name("Steinerne Brücke", "Steinerne Brücke Regensburg"));
    }

    #[test]
    fn test_town_stripping() {
        let matcher = NameMatcher::with_town("Regensburg");
        assert!(matcher.is_same_name("Dom Sankt Peter Regensburg", "Dom Sankt Peter"));
        // Short names keep the town: "Regensburg" itself is not stripped
        assert!(matcher.is_same_name("Regensburg", "regensburg"));
    }

    #[test]
    fn test_empty_names() {
        let matcher = NameMatcher::new();
        assert!(matcher.is_same_name("", ""));
        assert!(!matcher.is_same_name("Dom", ""));
        assert!(!matcher.is_same_name("", "Dom"));
    }

    #[test]
    fn test_symmetry() {
        let matcher = NameMatcher::new();
        let pairs = [
            ("Münchner Hof", "munchnerhof"),
            ("Alte Brauerei", "Neue Brauerei"),
            ("Steinerne Brücke", "Steinerne Brücke Regensburg"),
        ];
        for (a, b) in pairs {
            assert_eq!(matcher.is_same_name(a, b), matcher.is_same_name(b, a));
        }
    }

    #[test]
    fn test_levenshtein() {
        let to_chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert_eq!(levenshtein(&to_chars("kitten"), &to_chars("sitting")), 3);
        assert_eq!(levenshtein(&to_chars("abc"), &to_chars("abc")), 0);
        assert_eq!(levenshtein(&to_chars(""), &to_chars("abc")), 3);
    }
}
