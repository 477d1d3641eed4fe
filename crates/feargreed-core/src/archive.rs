//! Archival CSV parsing.
//!
//! The archive is a plain CSV export with a header row containing `Date`
//! (MM/DD/YYYY) and `Fear Greed` (numeric string) columns. Rows have no
//! rating label, so readings built here carry an empty rating and a UTC
//! midnight timestamp.

use time::macros::format_description;
use time::Date;

use crate::error::IndexError;
use crate::{SentimentReading, UtcDateTime};

const DATE_COLUMN: &str = "Date";
const VALUE_COLUMN: &str = "Fear Greed";

/// Parse the archive CSV, keeping only rows with
/// `start <= timestamp < cutoff`.
///
/// Any malformed row aborts the whole call with
/// [`IndexError::MalformedPayload`]; there is no partial-result recovery.
pub fn parse_window(
    csv: &str,
    start: UtcDateTime,
    cutoff: UtcDateTime,
) -> Result<Vec<SentimentReading>, IndexError> {
    let mut lines = csv.lines();
    let header = lines
        .next()
        .ok_or_else(|| IndexError::malformed_payload("archive", "empty CSV body"))?;

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let date_index = column_index(&columns, DATE_COLUMN)?;
    let value_index = column_index(&columns, VALUE_COLUMN)?;

    let date_format = format_description!("[month]/[day]/[year]");
    let mut readings = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let raw_date = field(&fields, date_index, line)?;
        let raw_value = field(&fields, value_index, line)?;

        let date = Date::parse(raw_date, &date_format).map_err(|_| {
            IndexError::malformed_payload("archive", format!("invalid date '{raw_date}'"))
        })?;
        let score: f64 = raw_value.parse().map_err(|_| {
            IndexError::malformed_payload("archive", format!("invalid value '{raw_value}'"))
        })?;

        let observed_at = UtcDateTime::from_midnight(date);
        if observed_at < start || observed_at >= cutoff {
            continue;
        }

        readings.push(SentimentReading::new(score, "", observed_at)?);
    }

    Ok(readings)
}

fn column_index(columns: &[&str], name: &'static str) -> Result<usize, IndexError> {
    columns
        .iter()
        .position(|column| *column == name)
        .ok_or_else(|| IndexError::malformed_payload("archive", format!("missing '{name}' column")))
}

fn field<'a>(fields: &[&'a str], index: usize, line: &str) -> Result<&'a str, IndexError> {
    fields.get(index).copied().ok_or_else(|| {
        IndexError::malformed_payload("archive", format!("truncated row '{line}'"))
    })
}
