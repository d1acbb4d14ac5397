//! `AirChat` - Conversational assistant for air travel questions
//!
//! This library provides the core functionality for classifying short
//! natural-language messages about air travel and routing them to policy
//! FAQs, live flight lookups and airport searches.

pub mod airports;
pub mod api;
pub mod assistant;
pub mod config;
pub mod error;
pub mod faq;
pub mod flights;
pub mod text;
pub mod web;

// Re-export core types for public API
pub use airports::{AirportIndex, AirportRecord};
pub use assistant::{Answer, Assistant, Intent};
pub use config::AirChatConfig;
pub use error::AirChatError;
pub use faq::FaqTopic;
pub use flights::{AviationStackClient, FlightProvider, FlightSummary, LiveFlights};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AirChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
