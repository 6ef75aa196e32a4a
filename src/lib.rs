//! ContPlot crate root: re-exports and module wiring.
//!
//! This crate provides the non-GUI core of a continuous-plot application:
//! live charts fed by a random source, with pause/resume, history panning
//! and spreadsheet export. The GUI shell (windowing, widgets, redraw, file
//! dialogs) is a host collaborator that drives this core.
//!
//! Modules:
//! - `data`: sample buffers, view windows and the export table encoder
//! - `source`: the Gaussian random sample source
//! - `driver`: run-state machine and tick handling
//! - `timer`: host-polled periodic tick timer
//! - `controllers`: external control of a running driver
//! - `config`: chart/series configuration
//! - `persistence`: JSON save/load of the configuration
//! - `error`: crate error type

pub mod config;
pub mod controllers;
pub mod data;
pub mod driver;
pub mod error;
pub mod persistence;
pub mod source;
pub mod timer;

// Public re-exports for a compact external API
pub use config::{ChartConfig, PlotConfig};
pub use controllers::{PlotController, RunStateInfo};
pub use data::export::{build_table, ExportFormat, Table};
pub use data::series::{SampleStore, SeriesRef};
pub use data::view::ViewWindow;
pub use driver::{RunState, TickDriver};
pub use error::PlotError;
pub use source::GaussianSource;
pub use timer::Ticker;
