//! Tideline - a terminal chart of monthly sea level with storm events.
//!
//! Tideline reads a station's monthly mean sea level table and a county's
//! storm event table, then shows one calendar year at a time: the monthly
//! mean, the linear trend, the confidence band, and a marker for every storm
//! event, with annotations that open on selection.
//!
//! # Features
//!
//! - Year pagination (first, previous, next, last)
//! - Storm events grouped by month and stacked per group
//! - Toggleable event annotations
//! - Pluggable rendering through [`chart::ChartRenderer`]
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tideline::chart::{ChartState, Scene, TextRenderer};
//! use tideline::data::DataReader;
//! use tideline::util::ChartConfig;
//!
//! let config = ChartConfig::default();
//! let data = DataReader::load(
//!     Path::new("virginia-key-8723214_meantrend.csv"),
//!     Path::new("storm_events.csv"),
//!     &config,
//! )?;
//!
//! let state = ChartState::new(data.bounds(), config.initial_year).next();
//! let mut text = TextRenderer::new();
//! Scene::build(&data, &state, &config).render(&mut text);
//! println!("{}", text.output());
//! # Ok::<(), tideline::TidelineError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod ui;
pub mod util;

pub use error::{Result, TidelineError};
