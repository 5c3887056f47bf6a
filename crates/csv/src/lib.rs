//! CSV input wrapper for the lifechart layout engine.
//!
//! Reads rows of the form
//! `EventName,StartDate,EndDate,Category,Valence,ForceAnnotation`
//! into typed [`RawEvent`]s. Any malformed row aborts the whole batch;
//! a partial timeline is never produced.

use chrono::NaiveDate;
use lifechart_core::{InvalidRange, RawEvent};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
    #[error("row {row}: invalid {field} '{value}': expected {expected}")]
    Field {
        row: u64,
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("row {row}: {source}")]
    Range {
        row: u64,
        #[source]
        source: InvalidRange,
    },
}

/// One CSV row before field-level parsing. Field names follow the
/// header row, so serde can bind them directly.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Row {
    event_name: String,
    start_date: String,
    end_date: String,
    category: String,
    valence: String,
    force_annotation: String,
}

/// Read a timeline CSV file into raw events.
pub fn read_timeline(path: &Path) -> Result<Vec<RawEvent>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_timeline_from_reader(file)
}

/// Read timeline rows from any reader. Row numbers in errors are
/// 1-based over data rows (the header is row 0).
pub fn read_timeline_from_reader<R: Read>(reader: R) -> Result<Vec<RawEvent>, ParseError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut events = Vec::new();
    for (index, result) in csv_reader.deserialize::<Row>().enumerate() {
        let row_number = index as u64 + 1;
        let row = result?;
        events.push(parse_row(row_number, row)?);
    }
    tracing::debug!("parsed {} timeline events", events.len());
    Ok(events)
}

fn parse_row(row_number: u64, row: Row) -> Result<RawEvent, ParseError> {
    let start = parse_date(row_number, "StartDate", &row.start_date)?;
    let end = parse_date(row_number, "EndDate", &row.end_date)?;
    let valence: i32 =
        row.valence
            .trim()
            .parse()
            .map_err(|_| ParseError::Field {
                row: row_number,
                field: "Valence",
                value: row.valence.clone(),
                expected: "a signed integer",
            })?;
    let force_annotation = parse_flag(row_number, &row.force_annotation)?;
    RawEvent::new(
        row.event_name,
        start,
        end,
        row.category,
        valence,
        force_annotation,
    )
    .map_err(|source| ParseError::Range {
        row: row_number,
        source,
    })
}

fn parse_date(row: u64, field: &'static str, value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ParseError::Field {
        row,
        field,
        value: value.to_string(),
        expected: "a YYYY-MM-DD date",
    })
}

/// Boolean flags accept true/false, 1/0, and yes/no, case insensitive;
/// an empty cell means false.
fn parse_flag(row: u64, value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" => Ok(false),
        "true" | "1" | "yes" => Ok(true),
        _ => Err(ParseError::Field {
            row,
            field: "ForceAnnotation",
            value: value.to_string(),
            expected: "a boolean (true/false, 1/0, yes/no, or empty)",
        }),
    }
}
