//! In-memory tabular dataset model shared by generation, ingestion, and
//! insight derivation. Value data throughout: freely cloneable, no
//! back-references, no interior mutability.

use serde::{Deserialize, Serialize};

use crate::catalog::{Genre, Platform};
use crate::numbers::i64_to_f64;

/// Canonical column order for generated datasets and exports.
pub const CANONICAL_COLUMNS: [&str; 11] = [
    "game_id",
    "title",
    "genre",
    "platform",
    "release_year",
    "price",
    "metascore",
    "user_score",
    "hours_played",
    "owners_millions",
    "is_multiplayer",
];

/// One tabular value. `Missing` is the explicit no-value marker for
/// cells that are absent or failed coercion; aggregates skip it rather
/// than reading it as zero or false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Missing,
}

impl Cell {
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Numeric view of the cell; non-numeric and missing cells have none.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(i64_to_f64(*value)),
            Self::Float(value) => value.is_finite().then_some(*value),
            Self::Bool(_) | Self::Text(_) | Self::Missing => None,
        }
    }

    /// String representation used for category grouping and counting,
    /// so mixed-type columns aggregate without panicking.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        match self {
            Self::Int(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            Self::Bool(value) => Some(value.to_string()),
            Self::Text(value) => Some(value.clone()),
            Self::Missing => None,
        }
    }

    fn csv_field(&self) -> String {
        self.display().unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Int(value) => serde_json::Value::from(*value),
            Self::Float(value) => serde_json::Number::from_f64(*value)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Bool(value) => serde_json::Value::from(*value),
            Self::Text(value) => serde_json::Value::from(value.as_str()),
            Self::Missing => serde_json::Value::Null,
        }
    }
}

/// One fully-populated synthetic row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: i64,
    pub title: String,
    pub genre: Genre,
    pub platform: Platform,
    pub release_year: i32,
    pub price: f64,
    pub metascore: i32,
    pub user_score: f64,
    pub hours_played: f64,
    pub owners_millions: f64,
    pub is_multiplayer: bool,
}

impl GameRecord {
    fn into_cells(self) -> Vec<Cell> {
        vec![
            Cell::Int(self.game_id),
            Cell::Text(self.title),
            Cell::Text(String::from(self.genre.as_str())),
            Cell::Text(String::from(self.platform.as_str())),
            Cell::Int(i64::from(self.release_year)),
            Cell::Float(self.price),
            Cell::Int(i64::from(self.metascore)),
            Cell::Float(self.user_score),
            Cell::Float(self.hours_played),
            Cell::Float(self.owners_millions),
            Cell::Bool(self.is_multiplayer),
        ]
    }
}

/// Ordered columns plus row-major cells. Columns may be any subset of
/// the canonical schema (partial uploads) or carry free-form extras;
/// consumers probe with [`GameTable::has_column`] before aggregating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl GameTable {
    /// Empty table over the given columns.
    #[must_use]
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Table over the canonical schema built from generated records.
    #[must_use]
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        let mut table = Self::with_columns(
            CANONICAL_COLUMNS.iter().map(|c| String::from(*c)).collect(),
        );
        for record in records {
            table.rows.push(record.into_cells());
        }
        table
    }

    /// Append a row, padding or truncating to the column count so the
    /// row-shape invariant holds for every consumer.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Missing);
        self.rows.push(row);
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Numeric view of a column: `None` when the column is absent,
    /// per-cell `None` for missing or non-numeric cells.
    #[must_use]
    pub fn numeric_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[index].as_f64()).collect())
    }

    /// String-representation view of a column, for grouping and counts.
    #[must_use]
    pub fn display_column(&self, name: &str) -> Option<Vec<Option<String>>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[index].display()).collect())
    }

    /// Narrowed copy keeping the rows the predicate accepts. This is the
    /// seam the external filter layer goes through.
    #[must_use]
    pub fn filtered<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Cell]) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| predicate(row))
                .cloned()
                .collect(),
        }
    }

    /// Serialize to delimited text with a header row and standard
    /// quoting; missing cells become empty fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV writer rejects a record.
    pub fn to_csv(&self) -> Result<String, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(Cell::csv_field))?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes).expect("csv writer emits utf-8"))
    }

    /// Serialize to JSON records: one object per row, column names as
    /// keys, missing cells as `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json_records(&self) -> Result<String, serde_json::Error> {
        let records: Vec<serde_json::Map<String, serde_json::Value>> = self
            .rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(column, cell)| (column.clone(), cell.to_json()))
                    .collect()
            })
            .collect();
        serde_json::to_string(&records)
    }
}
