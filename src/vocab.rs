//! Fixed vocabularies for the status table.

/// Status abbreviation to long-form label.
pub const STATUS_CODES: &[(&str, &str)] = &[
    ("N", "native"),
    ("NN", "non-native"),
    ("SOC", "species of concern"),
    ("E", "endemic"),
    ("I", "introduced"),
    ("R", "reported"),
    ("W", "watchlist"),
    ("X", "extinct"),
];

/// Region name to numeric code. Not written to the store; regions are kept
/// as raw text.
pub const REGION_CODES: &[(&str, u8)] = &[
    ("North America", 2),
    ("Great Lakes Basin", 3),
    ("Planet Earth", 4),
];

/// Map a status term to its label, returning the term itself when unknown.
pub fn status_label(term: &str) -> &str {
    STATUS_CODES
        .iter()
        .find(|(code, _)| *code == term)
        .map_or(term, |(_, label)| *label)
}

/// Numeric code for a region, 0 when the region is not in the vocabulary.
pub fn region_code(region: &str) -> u8 {
    REGION_CODES
        .iter()
        .find(|(name, _)| *name == region)
        .map_or(0, |(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_codes() {
        assert_eq!(status_label("N"), "native");
        assert_eq!(status_label("NN"), "non-native");
        assert_eq!(status_label("SOC"), "species of concern");
        assert_eq!(status_label("X"), "extinct");
    }

    #[test]
    fn test_unknown_status_passes_through() {
        assert_eq!(status_label("unknown_code"), "unknown_code");
        assert_eq!(status_label(""), "");
        // case sensitive
        assert_eq!(status_label("n"), "n");
    }

    #[test]
    fn test_region_codes() {
        assert_eq!(region_code("North America"), 2);
        assert_eq!(region_code("Great Lakes Basin"), 3);
        assert_eq!(region_code("Planet Earth"), 4);
        assert_eq!(region_code("Atlantis"), 0);
    }
}
