//! Job ingestion from CSV and JSON.
//!
//! Turns uploaded tabular or structured text into a job collection.
//! Individual malformed fields are tolerated: a missing or unparseable
//! numeric field is replaced with its default, and a missing ID gets a
//! generated placeholder. This leniency lives entirely at this boundary;
//! the scheduling core assumes well-formed jobs and does not re-default.
//!
//! # Formats
//!
//! - CSV with a header row and positional columns
//!   `id,arrivalTime,executionTime,deadline,weight`
//! - JSON array of job objects with the same (camelCase) field names

use std::io::Read;

use log::debug;
use serde::Deserialize;

use crate::models::Job;

/// Default for an unspecified arrival time.
pub const DEFAULT_ARRIVAL_TIME: f64 = 0.0;
/// Default for an unspecified execution time.
pub const DEFAULT_EXECUTION_TIME: f64 = 1.0;
/// Default for an unspecified deadline.
pub const DEFAULT_DEADLINE: f64 = 10.0;
/// Default for an unspecified weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Errors from the ingestion boundary.
#[derive(Debug)]
pub enum IngestError {
    /// The CSV reader failed (I/O or malformed framing).
    Csv(csv::Error),
    /// The JSON input could not be parsed.
    Json(serde_json::Error),
    /// The JSON input parsed but is not an array of objects.
    NotAnArray,
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(e) => write!(f, "CSV parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::NotAnArray => f.write_str("JSON input must be an array of job objects"),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::NotAnArray => None,
        }
    }
}

impl From<csv::Error> for IngestError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// A job record as it appears on the wire, before defaulting.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawJob {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    arrival_time: Option<f64>,
    #[serde(default)]
    execution_time: Option<f64>,
    #[serde(default)]
    deadline: Option<f64>,
    #[serde(default)]
    weight: Option<f64>,
}

impl RawJob {
    /// Applies the defaulting rules. `row` is the 1-based position used
    /// for generated placeholder IDs.
    fn resolve(self, row: usize) -> Job {
        let id = match self.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => format!("Job-{row}"),
        };
        Job::new(
            id,
            self.arrival_time.unwrap_or(DEFAULT_ARRIVAL_TIME),
            self.execution_time.unwrap_or(DEFAULT_EXECUTION_TIME),
            self.deadline.unwrap_or(DEFAULT_DEADLINE),
            self.weight.unwrap_or(DEFAULT_WEIGHT),
        )
    }
}

/// Parses jobs from CSV with a header row.
///
/// Columns are positional: `id,arrivalTime,executionTime,deadline,weight`.
/// Short rows and unparseable numbers fall back to the field defaults.
pub fn jobs_from_csv<R: Read>(reader: R) -> Result<Vec<Job>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut jobs = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = i + 1;
        let raw = RawJob {
            id: record.get(0).map(str::to_string),
            arrival_time: parse_field(record.get(1)),
            execution_time: parse_field(record.get(2)),
            deadline: parse_field(record.get(3)),
            weight: parse_field(record.get(4)),
        };
        jobs.push(raw.resolve(row));
    }

    debug!("parsed {} jobs from CSV", jobs.len());
    Ok(jobs)
}

/// Parses jobs from a JSON array of objects.
///
/// Absent fields default per the same rules as CSV ingestion.
pub fn jobs_from_json(input: &str) -> Result<Vec<Job>, IngestError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let array = value.as_array().ok_or(IngestError::NotAnArray)?;

    let mut jobs = Vec::with_capacity(array.len());
    for (i, item) in array.iter().enumerate() {
        let raw: RawJob = serde_json::from_value(item.clone())?;
        jobs.push(raw.resolve(i + 1));
    }

    debug!("parsed {} jobs from JSON", jobs.len());
    Ok(jobs)
}

/// Parses a numeric CSV field; non-finite values count as unparseable.
fn parse_field(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
