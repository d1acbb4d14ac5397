//! Live flight data gateway
//!
//! Thin client to an AviationStack-style provider, filtered by departure
//! and/or arrival IATA code. A single best-effort call with a bounded
//! timeout; any failure is folded into a descriptive error string rather
//! than raised, so the router can always answer the user.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::AirChatConfig;
use crate::error::AirChatError;

/// One live flight, reduced to the fields the assistant renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSummary {
    pub flight_code: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
}

/// Result of one gateway query. An empty `flights` with `error: None` means
/// the provider answered and there are genuinely no flights right now; that
/// is not an error.
#[derive(Debug, Clone, Default)]
pub struct LiveFlights {
    pub flights: Vec<FlightSummary>,
    pub error: Option<String>,
}

impl LiveFlights {
    fn failed(message: String) -> Self {
        Self {
            flights: Vec::new(),
            error: Some(message),
        }
    }
}

/// Injected capability for live flight lookup, so the router and its tests
/// can run against an in-memory fake without network access.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    /// Query live flights. The caller always supplies at least one of the
    /// two code filters.
    async fn live_flights(&self, departure: Option<&str>, arrival: Option<&str>) -> LiveFlights;
}

/// HTTP client for the AviationStack real-time flights endpoint
pub struct AviationStackClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl AviationStackClient {
    /// Create a new client from the application configuration
    pub fn new(config: &AirChatConfig) -> crate::Result<Self> {
        let timeout = Duration::from_secs(config.flights.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("AirChat/0.1.0")
            .build()
            .map_err(|e| AirChatError::api(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.flights.api_key.clone(),
            base_url: config.flights.base_url.clone(),
        })
    }
}

#[async_trait]
impl FlightProvider for AviationStackClient {
    async fn live_flights(&self, departure: Option<&str>, arrival: Option<&str>) -> LiveFlights {
        let url = format!("{}/flights", self.base_url.trim_end_matches('/'));

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(key) = &self.api_key {
            query.push(("access_key", key.clone()));
        }
        if let Some(code) = departure {
            query.push(("dep_iata", code.to_string()));
        }
        if let Some(code) = arrival {
            query.push(("arr_iata", code.to_string()));
        }

        debug!(
            "Querying live flights (departure: {:?}, arrival: {:?})",
            departure, arrival
        );

        let response = match self.client.get(&url).query(&query).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Live flight request failed: {}", e);
                return LiveFlights::failed(format!("could not reach flight data provider: {e}"));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            warn!("Live flight provider returned status {}", status);
            return LiveFlights::failed(format!("flight data provider returned status {status}"));
        }

        let parsed: aviationstack::FlightsResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Failed to parse live flight response: {}", e);
                return LiveFlights::failed(format!("could not parse flight data response: {e}"));
            }
        };

        let flights: Vec<FlightSummary> = parsed
            .data
            .unwrap_or_default()
            .into_iter()
            .map(FlightSummary::from)
            .collect();

        debug!("Provider returned {} live flights", flights.len());
        LiveFlights {
            flights,
            error: None,
        }
    }
}

/// `AviationStack` API response structures
mod aviationstack {
    use serde::Deserialize;

    use super::FlightSummary;

    #[derive(Debug, Deserialize)]
    pub struct FlightsResponse {
        pub data: Option<Vec<FlightRow>>,
    }

    /// One flight row; every nested field may be absent
    #[derive(Debug, Deserialize)]
    pub struct FlightRow {
        pub flight: Option<CodeField>,
        pub departure: Option<CodeField>,
        pub arrival: Option<CodeField>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CodeField {
        pub iata: Option<String>,
    }

    impl From<FlightRow> for FlightSummary {
        fn from(row: FlightRow) -> Self {
            Self {
                flight_code: row.flight.and_then(|f| f.iata),
                departure: row.departure.and_then(|d| d.iata),
                arrival: row.arrival.and_then(|a| a.iata),
            }
        }
    }
}
