//! The intent router: the decision core of the assistant
//!
//! Every message is classified with one fixed, first-match-wins pass over
//! the extracted signals, then answered by the matching handler. There is
//! no session state and no fatal path; the worst case is an apologetic
//! answer.

use std::sync::Arc;

use tracing::debug;

use crate::airports::{AirportIndex, AirportRecord};
use crate::faq::{self, FaqTopic};
use crate::flights::{FlightProvider, FlightSummary, LiveFlights};
use crate::text;

/// Maximum number of example flights rendered in a live-flight answer
const MAX_FLIGHT_EXAMPLES: usize = 5;

const HELP_TEXT: &str = "I can help with liquid and battery rules, airline baggage policies, \
     live flights for a 3-letter airport code (type it in CAPS, e.g. LAX), and finding \
     airports by city or name. What would you like to know?";

const BAGGAGE_CLARIFY_TEXT: &str = "Which airline are you flying with? Tell me the airline \
     name or its 2-letter code and I can point you to its baggage policy.";

/// The classified purpose of one message, selected by fixed precedence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Faq(FaqTopic),
    AirlineBaggage,
    FlightsFrom(String),
    FlightsTo(String),
    AirportLookup,
    Fallback,
}

/// The sole output contract of the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source: Option<String>,
}

impl Answer {
    fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    fn cited<S: Into<String>, U: Into<String>>(text: S, source: U) -> Self {
        Self {
            text: text.into(),
            source: Some(source.into()),
        }
    }
}

/// Stateless per-request router over the shared reference table and the
/// injected flight provider.
pub struct Assistant {
    airports: Arc<AirportIndex>,
    flights: Arc<dyn FlightProvider>,
}

impl Assistant {
    pub fn new(airports: Arc<AirportIndex>, flights: Arc<dyn FlightProvider>) -> Self {
        Self { airports, flights }
    }

    /// Classify a raw message. Evaluation order is fixed; once a branch
    /// matches, no further branches are considered.
    #[must_use]
    pub fn classify(&self, message: &str) -> Intent {
        let normalized = text::normalize(message);

        if text::contains_any(&normalized, text::LIQUID_KEYWORDS) {
            return Intent::Faq(FaqTopic::Liquids);
        }
        if text::contains_any(&normalized, text::BATTERY_KEYWORDS) {
            return Intent::Faq(FaqTopic::Batteries);
        }
        if text::contains_any(&normalized, text::BAGGAGE_KEYWORDS) {
            return Intent::AirlineBaggage;
        }

        // Only the first detected code is used; extra codes in the same
        // message are ignored. "to " anywhere in the message flips the
        // lookup to arrivals; this is a textual shortcut, not parsing,
        // and can misread messages that contain "to " for other reasons.
        let codes = text::extract_airport_codes(message, |code| self.airports.is_code(code));
        if let Some(code) = codes.into_iter().next() {
            if normalized.contains("to ") {
                return Intent::FlightsTo(code);
            }
            return Intent::FlightsFrom(code);
        }

        // An empty needle would match every row, so the blank message
        // skips straight to the fallback.
        if !normalized.is_empty()
            && (self.airports.search_city(&normalized).is_some()
                || self.airports.search_name(&normalized).is_some())
        {
            return Intent::AirportLookup;
        }

        Intent::Fallback
    }

    /// Classify and answer one message
    pub async fn answer(&self, message: &str) -> Answer {
        let intent = self.classify(message);
        debug!("Classified message as {:?}", intent);

        match intent {
            Intent::Faq(topic) => Answer::cited(topic.summary(), topic.source()),
            Intent::AirlineBaggage => self.answer_baggage(message),
            Intent::FlightsFrom(code) => {
                let result = self.flights.live_flights(Some(&code), None).await;
                render_flights(&code, Direction::Departing, result)
            }
            Intent::FlightsTo(code) => {
                let result = self.flights.live_flights(None, Some(&code)).await;
                render_flights(&code, Direction::Arriving, result)
            }
            Intent::AirportLookup => self.answer_airport_lookup(message),
            Intent::Fallback => Answer::plain(HELP_TEXT),
        }
    }

    fn answer_baggage(&self, message: &str) -> Answer {
        let normalized = text::normalize(message);
        match faq::find_airline(&normalized) {
            Some(airline) => Answer::cited(
                format!(
                    "{} publishes its baggage allowances and fees on its website; \
                     check the linked policy page for your fare.",
                    airline.name
                ),
                airline.url,
            ),
            None => Answer::plain(BAGGAGE_CLARIFY_TEXT),
        }
    }

    fn answer_airport_lookup(&self, message: &str) -> Answer {
        let normalized = text::normalize(message);
        // City column first, then airport name; first table row wins
        if let Some(record) = self.airports.search_city(&normalized) {
            return Answer::plain(render_airport(record));
        }
        if let Some(record) = self.airports.search_name(&normalized) {
            return Answer::plain(render_airport(record));
        }
        Answer::plain(HELP_TEXT)
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Departing,
    Arriving,
}

impl Direction {
    fn phrase(self, code: &str) -> String {
        match self {
            Direction::Departing => format!("departing {code}"),
            Direction::Arriving => format!("arriving at {code}"),
        }
    }
}

fn render_flight(flight: &FlightSummary) -> String {
    format!(
        "{} {}→{}",
        flight.flight_code.as_deref().unwrap_or("??"),
        flight.departure.as_deref().unwrap_or("?"),
        flight.arrival.as_deref().unwrap_or("?")
    )
}

fn render_flights(code: &str, direction: Direction, result: LiveFlights) -> Answer {
    if let Some(error) = result.error {
        return Answer::plain(format!(
            "Sorry, I could not fetch live flight data: {error}"
        ));
    }

    if result.flights.is_empty() {
        return Answer::plain(format!(
            "No live flights {} right now.",
            direction.phrase(code)
        ));
    }

    let examples = result
        .flights
        .iter()
        .take(MAX_FLIGHT_EXAMPLES)
        .map(render_flight)
        .collect::<Vec<_>>()
        .join(", ");

    Answer::plain(format!(
        "Found {} live flights {} right now, for example: {}.",
        result.flights.len(),
        direction.phrase(code),
        examples
    ))
}

fn render_airport(record: &AirportRecord) -> String {
    let code = record.iata_code.as_deref().unwrap_or("no IATA code");
    format!(
        "{} in {}, {} ({}).",
        record.name, record.city, record.country, code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_flight_placeholders() {
        let flight = FlightSummary {
            flight_code: None,
            departure: Some("LAX".to_string()),
            arrival: None,
        };
        assert_eq!(render_flight(&flight), "?? LAX→?");
    }

    #[test]
    fn test_render_empty_departures() {
        let answer = render_flights("BOS", Direction::Departing, LiveFlights::default());
        assert_eq!(answer.text, "No live flights departing BOS right now.");
        assert!(answer.source.is_none());
    }

    #[test]
    fn test_render_gateway_error() {
        let result = LiveFlights {
            flights: Vec::new(),
            error: Some("provider timed out".to_string()),
        };
        let answer = render_flights("BOS", Direction::Arriving, result);
        assert!(answer.text.contains("provider timed out"));
        assert!(answer.source.is_none());
    }

    #[test]
    fn test_render_caps_examples_at_five() {
        let flights = (0..7)
            .map(|i| FlightSummary {
                flight_code: Some(format!("AA{i}")),
                departure: Some("LAX".to_string()),
                arrival: Some("JFK".to_string()),
            })
            .collect();
        let result = LiveFlights {
            flights,
            error: None,
        };
        let answer = render_flights("LAX", Direction::Departing, result);
        assert!(answer.text.contains("Found 7 live flights departing LAX"));
        assert!(answer.text.contains("AA4"));
        assert!(!answer.text.contains("AA5"));
    }
}
