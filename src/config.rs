//! Configuration types for the continuous-plot core.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data::view::DEFAULT_SPAN;
use crate::source::{DEFAULT_MEAN, DEFAULT_STD_DEV};

/// Default wall-clock interval between ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);

/// One chart and the series drawn on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart title, also used in host UI labels.
    pub name: String,
    /// Series names, in drawing and export-column order.
    pub series: Vec<String>,
}

impl ChartConfig {
    pub fn new<S: Into<String>>(name: S, series: &[&str]) -> Self {
        Self {
            name: name.into(),
            series: series.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Top-level configuration.
///
/// The default layout is one chart with two series and one chart with a
/// single series, a visible span of 100 samples and a 100 ms tick period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    // ── Data model ───────────────────────────────────────────────────────
    /// Mean of the sample distribution.
    pub mean: f64,
    /// Standard deviation of the sample distribution.
    pub std_dev: f64,
    /// RNG seed; `None` seeds from OS entropy, `Some` gives a
    /// reproducible stream.
    pub seed: Option<u64>,

    // ── View ─────────────────────────────────────────────────────────────
    /// Fixed visible span of each chart, in samples.
    pub span: f64,

    // ── Ticking ──────────────────────────────────────────────────────────
    /// Wall-clock interval between ticks while running.
    pub tick_period: Duration,

    // ── Charts ───────────────────────────────────────────────────────────
    /// Charts and their series.
    pub charts: Vec<ChartConfig>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            mean: DEFAULT_MEAN,
            std_dev: DEFAULT_STD_DEV,
            seed: None,
            span: DEFAULT_SPAN,
            tick_period: DEFAULT_TICK_PERIOD,
            charts: vec![
                ChartConfig::new("Plot 1", &["Line 1", "Line 2"]),
                ChartConfig::new("Plot 2", &["Line 3"]),
            ],
        }
    }
}

impl PlotConfig {
    /// All series names across all charts, in declaration order.
    pub fn all_series(&self) -> Vec<String> {
        self.charts
            .iter()
            .flat_map(|c| c.series.iter().cloned())
            .collect()
    }
}
