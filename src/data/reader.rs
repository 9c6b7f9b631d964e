//! CSV file reader.

use super::{parse_sea_level_csv, parse_storm_csv, ChartData, SeaLevelRecord, StormEvent};
use crate::error::{Result, TidelineError};
use crate::util::ChartConfig;
use std::path::Path;

/// Reads the two chart tables from disk.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read the sea level table.
    pub fn read_sea_level(path: &Path) -> Result<Vec<SeaLevelRecord>> {
        let text = Self::read_text(path)?;
        parse_sea_level_csv(&text)
    }

    /// Read the storm event table.
    pub fn read_storm_events(path: &Path, year_pivot: u32) -> Result<Vec<StormEvent>> {
        let text = Self::read_text(path)?;
        parse_storm_csv(&text, year_pivot)
    }

    /// Read both tables. Any failure aborts the whole load.
    pub fn load(sea_level_path: &Path, storm_path: &Path, config: &ChartConfig) -> Result<ChartData> {
        let sea_level = Self::read_sea_level(sea_level_path)?;
        let storms = Self::read_storm_events(storm_path, config.year_pivot)?;

        tracing::info!(
            "Loaded {} sea level records and {} storm events",
            sea_level.len(),
            storms.len()
        );

        Ok(ChartData::new(sea_level, storms)?
            .with_sources(sea_level_path.to_path_buf(), storm_path.to_path_buf()))
    }

    fn read_text(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| TidelineError::file_open(path.to_path_buf(), e))
    }
}
