//! CSV upload normalization: header aliasing plus per-cell type
//! coercion. Purely a normalization step; it never filters rows or
//! validates values beyond coercion, so any subset of columns works.

use thiserror::Error;

use crate::table::{Cell, GameTable};

/// Loose header spellings mapped to canonical column names. Matching is
/// on the trimmed, lower-cased header; anything unmatched passes
/// through trimmed but otherwise untouched.
pub const COLUMN_ALIASES: [(&str, &str); 10] = [
    ("metacritic", "metascore"),
    ("meta_score", "metascore"),
    ("userscore", "user_score"),
    ("user score", "user_score"),
    ("hours", "hours_played"),
    ("hoursplayed", "hours_played"),
    ("owners", "owners_millions"),
    ("multiplayer", "is_multiplayer"),
    ("year", "release_year"),
    ("release year", "release_year"),
];

const NUMERIC_COLUMNS: [&str; 6] = [
    "release_year",
    "price",
    "metascore",
    "user_score",
    "hours_played",
    "owners_millions",
];

/// Structural ingestion failure. Per-cell coercion failures are not
/// errors; they become [`Cell::Missing`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("uploaded file has no header row")]
    MissingHeader,
    #[error("uploaded file is not valid CSV: {0}")]
    Malformed(#[from] csv::Error),
}

/// Parse raw uploaded bytes into a normalized table.
///
/// # Errors
///
/// Returns [`ParseError`] when the bytes are not structurally valid
/// delimited text (no header, inconsistent field counts, broken
/// encoding). Unparseable individual cells are tolerated as missing.
pub fn ingest(bytes: &[u8]) -> Result<GameTable, ParseError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(bytes);
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ParseError::MissingHeader);
    }

    let columns: Vec<String> = headers.iter().map(normalize_header).collect();
    let mut table = GameTable::with_columns(columns.clone());
    for record in reader.records() {
        let record = record?;
        let row = columns
            .iter()
            .zip(record.iter())
            .map(|(column, raw)| coerce_cell(column, raw))
            .collect();
        table.push_row(row);
    }
    Ok(table)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();
    for (alias, canonical) in COLUMN_ALIASES {
        if lowered == alias {
            return String::from(canonical);
        }
    }
    String::from(trimmed)
}

fn coerce_cell(column: &str, raw: &str) -> Cell {
    if NUMERIC_COLUMNS.contains(&column) {
        return coerce_numeric(raw);
    }
    match column {
        "is_multiplayer" => coerce_bool(raw),
        "game_id" | "title" | "genre" | "platform" => {
            if raw.is_empty() {
                Cell::Missing
            } else {
                Cell::Text(String::from(raw))
            }
        }
        // Unknown columns are free-form passthrough.
        _ => Cell::Text(String::from(raw)),
    }
}

fn coerce_numeric(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Cell::Missing;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Cell::Int(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Cell::Float(value),
        _ => Cell::Missing,
    }
}

fn coerce_bool(raw: &str) -> Cell {
    match raw.trim().to_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Cell::Bool(true),
        "false" | "f" | "0" | "no" | "n" => Cell::Bool(false),
        _ => Cell::Missing,
    }
}
