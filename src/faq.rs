//! Static policy content: FAQ summaries and the airline baggage table
//!
//! All answers here are fixed strings with a citation URL, so the same
//! question always produces a byte-identical response.

use crate::text;

/// Fixed FAQ topics with a canned summary and citation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqTopic {
    Liquids,
    Batteries,
}

/// Citation URL for the liquids rule
pub const LIQUIDS_SOURCE: &str = "https://www.tsa.gov/travel/security-screening/liquids-rule";

/// Citation URL for lithium battery rules
pub const BATTERIES_SOURCE: &str = "https://www.faa.gov/hazmat/packsafe/lithium-batteries";

const LIQUIDS_SUMMARY: &str = "Liquids in carry-on baggage must be in containers of 100 ml \
     (3.4 oz) or less, all fitting in a single quart-sized resealable bag (the 3-1-1 rule). \
     Larger containers go in checked baggage. Medications and infant food are exempt but \
     should be declared at screening.";

const BATTERIES_SUMMARY: &str = "Spare lithium batteries and power banks must travel in \
     carry-on baggage only, never in checked bags. Batteries up to 100 Wh need no approval; \
     100-160 Wh require airline approval; over 160 Wh are forbidden. Terminals should be \
     protected against short circuits.";

impl FaqTopic {
    /// The canned summary text for this topic
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            FaqTopic::Liquids => LIQUIDS_SUMMARY,
            FaqTopic::Batteries => BATTERIES_SUMMARY,
        }
    }

    /// The citation URL backing this topic
    #[must_use]
    pub fn source(self) -> &'static str {
        match self {
            FaqTopic::Liquids => LIQUIDS_SOURCE,
            FaqTopic::Batteries => BATTERIES_SOURCE,
        }
    }
}

/// An airline with a public baggage-policy page
#[derive(Debug, Clone, Copy)]
pub struct Airline {
    /// Token looked for in the normalized message (2-letter code or name)
    pub alias: &'static str,
    /// Canonical display name
    pub name: &'static str,
    /// Baggage policy URL
    pub url: &'static str,
}

/// Alias table in declaration order. When several aliases of the same
/// message match (a code and the full name, say), the first-declared alias
/// wins; this ordering is the documented tie-break.
pub const AIRLINE_BAGGAGE: &[Airline] = &[
    Airline {
        alias: "aa",
        name: "American Airlines",
        url: "https://www.aa.com/i18n/travel-info/baggage/baggage.jsp",
    },
    Airline {
        alias: "american",
        name: "American Airlines",
        url: "https://www.aa.com/i18n/travel-info/baggage/baggage.jsp",
    },
    Airline {
        alias: "dl",
        name: "Delta Air Lines",
        url: "https://www.delta.com/us/en/baggage/overview",
    },
    Airline {
        alias: "delta",
        name: "Delta Air Lines",
        url: "https://www.delta.com/us/en/baggage/overview",
    },
    Airline {
        alias: "ua",
        name: "United Airlines",
        url: "https://www.united.com/en/us/fly/travel/baggage.html",
    },
    Airline {
        alias: "united",
        name: "United Airlines",
        url: "https://www.united.com/en/us/fly/travel/baggage.html",
    },
    Airline {
        alias: "wn",
        name: "Southwest Airlines",
        url: "https://www.southwest.com/help/baggage",
    },
    Airline {
        alias: "southwest",
        name: "Southwest Airlines",
        url: "https://www.southwest.com/help/baggage",
    },
    Airline {
        alias: "lh",
        name: "Lufthansa",
        url: "https://www.lufthansa.com/us/en/baggage-overview",
    },
    Airline {
        alias: "lufthansa",
        name: "Lufthansa",
        url: "https://www.lufthansa.com/us/en/baggage-overview",
    },
    Airline {
        alias: "ryanair",
        name: "Ryanair",
        url: "https://www.ryanair.com/gb/en/useful-info/help-centre/fees",
    },
    Airline {
        alias: "easyjet",
        name: "easyJet",
        url: "https://www.easyjet.com/en/help/baggage/cabin-bag-and-hold-luggage",
    },
];

/// Find the first airline whose alias appears (word-bounded) in the
/// normalized message, in table declaration order.
#[must_use]
pub fn find_airline(normalized: &str) -> Option<&'static Airline> {
    AIRLINE_BAGGAGE
        .iter()
        .find(|airline| text::contains_word(normalized, airline.alias))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_answers_are_fixed() {
        assert_eq!(FaqTopic::Liquids.summary(), FaqTopic::Liquids.summary());
        assert!(FaqTopic::Liquids.summary().contains("100 ml"));
        assert!(FaqTopic::Batteries.summary().contains("carry-on"));
        assert_eq!(FaqTopic::Liquids.source(), LIQUIDS_SOURCE);
        assert_eq!(FaqTopic::Batteries.source(), BATTERIES_SOURCE);
    }

    #[test]
    fn test_alias_table_is_small_and_lowercase() {
        assert!(AIRLINE_BAGGAGE.len() <= 12);
        for airline in AIRLINE_BAGGAGE {
            assert_eq!(airline.alias, airline.alias.to_lowercase());
            assert!(airline.url.starts_with("https://"));
        }
    }

    #[test]
    fn test_code_alias_resolves_before_name() {
        // "aa" is declared before "american" and wins when both appear
        let airline = find_airline("aa american airlines baggage").unwrap();
        assert_eq!(airline.alias, "aa");
        assert_eq!(airline.name, "American Airlines");
    }

    #[test]
    fn test_full_name_alias() {
        let airline = find_airline("how much luggage on lufthansa").unwrap();
        assert_eq!(airline.name, "Lufthansa");
    }

    #[test]
    fn test_alias_requires_word_boundary() {
        // "ua" embedded inside another word must not match
        assert!(find_airline("guatemala baggage rules").is_none());
    }

    #[test]
    fn test_no_airline_mentioned() {
        assert!(find_airline("checked bag rules").is_none());
    }
}
