//! Text normalization and signal extraction
//!
//! Pure functions that turn a raw chat message into the structured signals
//! the intent router works with: a normalized form for keyword matching,
//! candidate airport codes and word-boundary containment checks.

/// Keywords that mark a liquids/toiletries policy question
pub const LIQUID_KEYWORDS: &[&str] = &["liquid", "toiletries", "3-1-1", "100ml", "100 ml"];

/// Keywords that mark a battery/power-bank policy question
pub const BATTERY_KEYWORDS: &[&str] = &[
    "power bank",
    "powerbank",
    "battery",
    "lithium",
    "mah",
    "wh",
];

/// Keywords that mark a baggage policy question
pub const BAGGAGE_KEYWORDS: &[&str] = &[
    "baggage",
    "bags",
    "luggage",
    "checked bag",
    "carry-on",
    "carry on",
];

/// Normalize a raw message for keyword matching: trim, collapse internal
/// whitespace runs to a single space, lowercase. Total over any input.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Check whether normalized text contains any keyword from a set
#[must_use]
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Check whether `needle` occurs in `text` bounded by word boundaries,
/// i.e. not flanked by ASCII alphanumeric characters on either side.
#[must_use]
pub fn contains_word(text: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(pos) = text[start..].find(needle) {
        let begin = start + pos;
        let end = begin + needle.len();
        let bounded_left = begin == 0 || !bytes[begin - 1].is_ascii_alphanumeric();
        let bounded_right = end >= bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if bounded_left && bounded_right {
            return true;
        }
        start = begin + 1;
    }
    false
}

/// Extract candidate IATA airport codes from the *original-case* message.
///
/// A 3-letter alphabetic token counts only when it appears entirely in
/// uppercase and `is_valid` accepts it; lowercase 3-letter words ("the",
/// "lax") are deliberately ignored to avoid false positives in ordinary
/// sentences. If the scan finds nothing and the trimmed message is exactly
/// 3 characters long, its uppercased form is tried as a single candidate.
/// Codes are returned in order of first appearance, duplicates collapsed.
pub fn extract_airport_codes<F>(message: &str, is_valid: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut codes: Vec<String> = Vec::new();

    for token in message.split(|c: char| !c.is_ascii_alphabetic()) {
        if token.len() != 3 {
            continue;
        }
        if !token.chars().all(|c| c.is_ascii_uppercase()) {
            continue;
        }
        if is_valid(token) && !codes.iter().any(|c| c == token) {
            codes.push(token.to_string());
        }
    }

    // Single-word special case: "lax" on its own is unambiguous enough
    if codes.is_empty() {
        let trimmed = message.trim();
        if trimmed.chars().count() == 3 {
            let upper = trimmed.to_uppercase();
            if is_valid(&upper) {
                codes.push(upper);
            }
        }
    }

    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(code: &str) -> bool {
        matches!(code, "LAX" | "JFK" | "BOS" | "SFO")
    }

    #[test]
    fn test_normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize("  Flights   FROM\tLAX  "), "flights from lax");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("can i bring a power bank", BATTERY_KEYWORDS));
        assert!(contains_any("what is the 3-1-1 rule", LIQUID_KEYWORDS));
        assert!(!contains_any("hello there", BAGGAGE_KEYWORDS));
    }

    #[test]
    fn test_contains_word_boundaries() {
        assert!(contains_word("aa baggage rules", "aa"));
        assert!(contains_word("fly with aa", "aa"));
        assert!(!contains_word("kaalund airport", "aa"));
        assert!(contains_word("delta baggage", "delta"));
        assert!(!contains_word("deltadeck", "delta"));
    }

    #[test]
    fn test_extract_uppercase_tokens_only() {
        assert_eq!(
            extract_airport_codes("Flights from LAX to JFK", valid),
            vec!["LAX", "JFK"]
        );
        // Lowercase codes in a sentence are not accepted
        assert!(extract_airport_codes("flights from lax", valid).is_empty());
        // Ordinary uppercase words that are not valid codes are ignored
        assert!(extract_airport_codes("WHY is THE sky blue", valid).is_empty());
    }

    #[test]
    fn test_extract_single_word_special_case() {
        assert_eq!(extract_airport_codes("lax", valid), vec!["LAX"]);
        assert_eq!(extract_airport_codes("  bos ", valid), vec!["BOS"]);
        assert!(extract_airport_codes("zzz", valid).is_empty());
    }

    #[test]
    fn test_extract_preserves_first_appearance_order() {
        assert_eq!(
            extract_airport_codes("JFK or LAX or JFK", valid),
            vec!["JFK", "LAX"]
        );
    }

    #[test]
    fn test_extract_respects_word_boundaries() {
        // Embedded in a longer run of letters, not a token
        assert!(extract_airport_codes("RELAXING trip", valid).is_empty());
        // Punctuation delimits tokens
        assert_eq!(extract_airport_codes("LAX, please", valid), vec!["LAX"]);
    }
}
