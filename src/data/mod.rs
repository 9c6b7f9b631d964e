//! Data reading and representation.
//!
//! This module parses the station sea level table and the county storm
//! event table into typed records.

mod calendar;
mod columns;
mod dataset;
mod reader;
mod sea_level;
mod storm;

pub use calendar::{expand_two_digit_year, month_short_name, parse_begin_date, parse_month, MONTH_NAMES};
pub use dataset::ChartData;
pub use reader::DataReader;
pub use sea_level::{parse_sea_level_csv, SeaLevelRecord};
pub use storm::{parse_storm_csv, EventId, StormEvent};
