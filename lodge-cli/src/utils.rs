//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration resolution, coordinator construction, id parsing
//! and output formatting.

use crate::error::CliError;
use chrono::{DateTime, Utc};
use lodge::{ConfigBuilder, Hotel, RecordId, ReservationCoordinator};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the storage directory location.
    pub data_dir: Option<PathBuf>,
}

/// Build a coordinator over the resolved storage directory.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. The `--data-dir` option (highest priority)
/// 2. The `LODGE_DATA_DIR` environment variable
/// 3. The user configuration file (`~/.lodge/config.yaml`)
/// 4. The built-in default, `~/.lodge` (lowest priority)
pub fn build_coordinator(global: &GlobalOptions) -> Result<ReservationCoordinator, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir.clone());
    }

    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(ReservationCoordinator::new(config.store_config()))
}

/// Parse a raw numeric id into a record id.
pub fn parse_record_id(value: u64) -> Result<RecordId, CliError> {
    RecordId::try_from(value).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// One-line summary of a hotel's occupancy for status output.
pub fn occupancy_summary(hotel: &Hotel) -> String {
    format!(
        "{} of {} room(s) available",
        hotel.available_rooms, hotel.total_rooms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let ts = DateTime::from_timestamp(1705323045, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-01-15 12:50:45");
    }

    #[test]
    fn test_parse_record_id_rejects_zero() {
        assert!(parse_record_id(0).is_err());
        assert!(parse_record_id(1).is_ok());
    }

    #[test]
    fn test_occupancy_summary() {
        let mut hotel = Hotel::new(RecordId::FIRST, "Grand Palace", "Veracruz", 10);
        hotel.available_rooms = 7;
        assert_eq!(occupancy_summary(&hotel), "7 of 10 room(s) available");
    }
}
