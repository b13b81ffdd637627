//! Playlitics Core Engine
//!
//! Platform-agnostic data and insight logic for the Playlitics
//! data-storytelling dashboard. This crate provides deterministic
//! dataset generation, CSV upload normalization, and insight derivation
//! without UI or platform-specific dependencies; the dashboard shell
//! filters tables and renders the outputs.

pub mod catalog;
pub mod generator;
pub mod ingest;
pub mod insights;
pub mod numbers;
pub mod seed;
pub mod table;

// Re-export commonly used types
pub use catalog::{Genre, Platform};
pub use generator::{DatasetConfig, generate};
pub use ingest::{COLUMN_ALIASES, ParseError, ingest};
pub use insights::{Kpis, generate_text_insights, kpis, top_categories};
pub use seed::derive_seed;
pub use table::{CANONICAL_COLUMNS, Cell, GameRecord, GameTable};
