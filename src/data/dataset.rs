//! Loaded chart data.

use super::{SeaLevelRecord, StormEvent};
use crate::chart::{YearBounds, YearIndex};
use crate::error::{Result, TidelineError};
use std::path::PathBuf;

/// Both tables, loaded and checked.
#[derive(Debug, Clone)]
pub struct ChartData {
    /// Sea level records, source order.
    pub sea_level: Vec<SeaLevelRecord>,
    /// Storm events, source order.
    pub storms: Vec<StormEvent>,
    /// Source of the sea level table.
    pub sea_level_path: Option<PathBuf>,
    /// Source of the storm table.
    pub storm_path: Option<PathBuf>,
    bounds: YearBounds,
}

impl ChartData {
    /// Bundle parsed tables. Fails when there are no sea level records.
    pub fn new(sea_level: Vec<SeaLevelRecord>, storms: Vec<StormEvent>) -> Result<Self> {
        let bounds = YearIndex::new(&sea_level)
            .map(|index| index.bounds())
            .ok_or(TidelineError::EmptyDataset)?;
        Ok(Self {
            sea_level,
            storms,
            sea_level_path: None,
            storm_path: None,
            bounds,
        })
    }

    /// Record where the tables came from.
    pub fn with_sources(mut self, sea_level_path: PathBuf, storm_path: PathBuf) -> Self {
        self.sea_level_path = Some(sea_level_path);
        self.storm_path = Some(storm_path);
        self
    }

    /// Year bounds of the sea level table.
    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    /// Index over the sea level records.
    pub fn year_index(&self) -> YearIndex<'_> {
        YearIndex::with_bounds(&self.sea_level, self.bounds)
    }

    /// Look up a storm event by id.
    pub fn event(&self, event_id: super::EventId) -> Option<&StormEvent> {
        self.storms.iter().find(|e| e.event_id == event_id)
    }
}
