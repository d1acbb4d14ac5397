//! Airport reference data: loading, indexing and lookup
//!
//! The OpenFlights-style dataset (14 positional CSV columns, `\N` for null)
//! is fetched once at startup and turned into an immutable in-memory index
//! shared by every request. Rows that fail to parse are skipped with a
//! warning rather than aborting the load.

use std::collections::HashSet;
use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Default location of the public airport dataset
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/jpatokal/openflights/master/data/airports.dat";

/// One airport row, immutable after load
#[derive(Debug, Clone)]
pub struct AirportRecord {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub country: String,
    /// Present only when the raw value is exactly 3 uppercase ASCII letters
    pub iata_code: Option<String>,
    pub icao_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_ft: f64,
    pub utc_offset: String,
    pub dst_rule: String,
    pub timezone_name: String,
    pub airport_type: String,
    pub source: String,
    /// Lowercased search columns, computed once at load
    pub city_lower: String,
    pub name_lower: String,
}

/// Raw positional row as it appears in the dataset
#[derive(Debug, Deserialize)]
struct RawAirportRow(
    u32,    // id
    String, // name
    String, // city
    String, // country
    String, // IATA
    String, // ICAO
    f64,    // latitude
    f64,    // longitude
    f64,    // altitude (feet)
    String, // UTC offset
    String, // DST rule
    String, // timezone name
    String, // type
    String, // source
);

fn optional_field(value: String) -> Option<String> {
    if value.is_empty() || value == "\\N" {
        None
    } else {
        Some(value)
    }
}

fn valid_iata(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

impl From<RawAirportRow> for AirportRecord {
    fn from(row: RawAirportRow) -> Self {
        let iata_code = optional_field(row.4).filter(|code| valid_iata(code));
        let city_lower = row.2.to_lowercase();
        let name_lower = row.1.to_lowercase();
        Self {
            id: row.0,
            name: row.1,
            city: row.2,
            country: row.3,
            iata_code,
            icao_code: optional_field(row.5),
            latitude: row.6,
            longitude: row.7,
            altitude_ft: row.8,
            utc_offset: row.9,
            dst_rule: row.10,
            timezone_name: row.11,
            airport_type: row.12,
            source: row.13,
            city_lower,
            name_lower,
        }
    }
}

/// Read-only, process-lifetime airport table with a valid-code set.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so unbounded concurrent readers are safe.
#[derive(Debug)]
pub struct AirportIndex {
    records: Vec<AirportRecord>,
    codes: HashSet<String>,
}

impl AirportIndex {
    /// Build an index from already-parsed records
    #[must_use]
    pub fn from_records(records: Vec<AirportRecord>) -> Self {
        let codes = records
            .iter()
            .filter_map(|record| record.iata_code.clone())
            .collect();
        Self { records, codes }
    }

    /// Parse the 14-column dataset from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(reader);

        let mut records = Vec::new();
        for (line, row) in csv_reader.deserialize::<RawAirportRow>().enumerate() {
            match row {
                Ok(raw) => records.push(AirportRecord::from(raw)),
                Err(e) => {
                    warn!("Skipping unparseable airport row {}: {}", line + 1, e);
                }
            }
        }

        debug!("Parsed {} airport rows", records.len());
        Ok(Self::from_records(records))
    }

    /// Fetch the dataset over HTTP and build the index.
    ///
    /// Failure here is fatal to startup; the router never runs without a
    /// loaded reference table.
    pub async fn load_remote(url: &str) -> Result<Self> {
        info!("Downloading airport dataset from {}", url);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("AirChat/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch airport dataset from {url}"))?
            .error_for_status()
            .with_context(|| "Airport dataset request returned an error status")?;

        let body = response
            .bytes()
            .await
            .with_context(|| "Failed to read airport dataset body")?;

        let index = Self::from_reader(body.as_ref())?;
        info!(
            "Loaded {} airports ({} with IATA codes)",
            index.len(),
            index.codes.len()
        );
        Ok(index)
    }

    /// Number of records in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Membership test for a 3-letter IATA code (expects uppercase)
    #[must_use]
    pub fn is_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Retrieve the first record carrying the given IATA code
    #[must_use]
    pub fn by_code(&self, code: &str) -> Option<&AirportRecord> {
        self.records
            .iter()
            .find(|record| record.iata_code.as_deref() == Some(code))
    }

    /// First record whose city contains the needle, case-insensitive,
    /// in table order
    #[must_use]
    pub fn search_city(&self, needle: &str) -> Option<&AirportRecord> {
        self.records
            .iter()
            .find(|record| record.city_lower.contains(needle))
    }

    /// First record whose name contains the needle, case-insensitive,
    /// in table order
    #[must_use]
    pub fn search_name(&self, needle: &str) -> Option<&AirportRecord> {
        self.records
            .iter()
            .find(|record| record.name_lower.contains(needle))
    }
}
