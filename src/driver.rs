//! Run-state machine and tick handling.
//!
//! The driver owns the sample store, one view window per chart and the
//! random source. It exposes "do one tick" and "am I running"; the host
//! event loop supplies the clock by polling [`pump`](TickDriver::pump) (or
//! calling [`tick`](TickDriver::tick) directly) on its own schedule.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, warn};

use crate::config::PlotConfig;
use crate::controllers::{PlotController, RunStateInfo};
use crate::data::export::{build_table, write_table, ExportFormat};
use crate::data::series::{Sample, SampleStore, SeriesRef};
use crate::data::view::ViewWindow;
use crate::error::PlotError;
use crate::source::GaussianSource;
use crate::timer::Ticker;

/// Lifecycle of a plotting run.
///
/// Created Idle; `start` moves to Running, `pause` to Paused, `start` again
/// back to Running. There is no terminal transition short of dropping the
/// driver at process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
}

/// One chart: its series (in column order) and its view window.
pub struct ChartState {
    pub name: String,
    pub series: Vec<SeriesRef>,
    pub view: ViewWindow,
}

pub struct TickDriver {
    store: SampleStore,
    charts: Vec<ChartState>,
    source: GaussianSource,
    ticker: Ticker,
    state: RunState,
    data_saved: bool,
}

impl TickDriver {
    pub fn new(config: &PlotConfig) -> Result<Self, PlotError> {
        let source = GaussianSource::new(config.mean, config.std_dev, config.seed)
            .map_err(|e| PlotError::Config(format!("invalid distribution: {e}")))?;
        let charts = config
            .charts
            .iter()
            .map(|c| ChartState {
                name: c.name.clone(),
                series: c.series.iter().map(|s| SeriesRef::new(s.clone())).collect(),
                view: ViewWindow::new(config.span),
            })
            .collect();
        Ok(Self {
            store: SampleStore::new(),
            charts,
            source,
            ticker: Ticker::new(config.tick_period),
            state: RunState::Idle,
            data_saved: false,
        })
    }

    // ── Run state ────────────────────────────────────────────────────────

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Begin (or resume) ticking. No-op when already Running. Starting also
    /// re-enables auto-follow on every chart, so a fresh run always tracks
    /// the newest samples.
    pub fn start(&mut self, now: Instant) {
        if self.state == RunState::Running {
            return;
        }
        debug!("run state {:?} -> Running", self.state);
        self.state = RunState::Running;
        for chart in &mut self.charts {
            let max_index = self.store.max_index_of(&chart.series).unwrap_or(0) as f64;
            chart.view.jump_to_latest(max_index);
        }
        self.ticker.start(now);
    }

    /// Stop ticking; buffered data stays in place. No-op unless Running.
    pub fn pause(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        debug!("run state Running -> Paused");
        self.state = RunState::Paused;
        self.ticker.stop();
    }

    // ── Ticking ──────────────────────────────────────────────────────────

    /// Perform one tick: draw one value per series, append it, then advance
    /// every auto-following chart view. Returns `false` (and does nothing)
    /// when not Running.
    pub fn tick(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        for chart in &self.charts {
            for series in &chart.series {
                let value = self.source.next();
                self.store.append(series, value);
            }
        }
        self.data_saved = false;
        for chart in &mut self.charts {
            if let Some(max_index) = self.store.max_index_of(&chart.series) {
                chart.view.advance(max_index as f64);
            }
        }
        true
    }

    /// Drain due ticks from the timer and apply them. Returns the number of
    /// ticks applied; 0 while not Running.
    pub fn pump(&mut self, now: Instant) -> u32 {
        let due = self.ticker.poll(now);
        let mut applied = 0;
        for _ in 0..due {
            if !self.tick() {
                break;
            }
            applied += 1;
        }
        applied
    }

    pub fn tick_period(&self) -> std::time::Duration {
        self.ticker.period()
    }

    // ── Views / navigation ───────────────────────────────────────────────

    pub fn charts(&self) -> &[ChartState] {
        &self.charts
    }

    pub fn view(&self, chart: usize) -> Option<&ViewWindow> {
        self.charts.get(chart).map(|c| &c.view)
    }

    /// Pan the chart's view by `delta` samples (host scroll/drag handler).
    /// Unknown chart indices are ignored.
    pub fn pan(&mut self, chart: usize, delta: f64) {
        let Some(chart) = self.charts.get_mut(chart) else {
            return;
        };
        let max_index = self.store.max_index_of(&chart.series).unwrap_or(0) as f64;
        chart.view.pan(delta, max_index);
    }

    /// Snap the chart back to the newest data and re-enable auto-follow.
    pub fn jump_to_latest(&mut self, chart: usize) {
        let Some(chart) = self.charts.get_mut(chart) else {
            return;
        };
        let max_index = self.store.max_index_of(&chart.series).unwrap_or(0) as f64;
        chart.view.jump_to_latest(max_index);
    }

    // ── Data access ──────────────────────────────────────────────────────

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    /// Nearest sample of a series to an x coordinate (hover readout).
    pub fn sample_near(&self, series: &SeriesRef, x: f64) -> Option<Sample> {
        self.store.buffer(series).and_then(|b| b.sample_near(x))
    }

    /// All series in declaration order (export column order).
    pub fn series_order(&self) -> Vec<SeriesRef> {
        self.charts
            .iter()
            .flat_map(|c| c.series.iter().cloned())
            .collect()
    }

    /// Whether the buffered data has been exported since the last append.
    /// Hosts use this for their save-before-exit confirmation.
    pub fn data_saved(&self) -> bool {
        self.data_saved
    }

    // ── Export ───────────────────────────────────────────────────────────

    /// Export all series to `path` in the given format. On success the data
    /// is marked saved and the written path is returned; on failure the
    /// buffers are untouched and the saved flag stays cleared.
    pub fn export_to<P: AsRef<Path>>(
        &mut self,
        path: P,
        format: ExportFormat,
    ) -> Result<PathBuf, PlotError> {
        let table = build_table(&self.store, &self.series_order());
        let path = write_table(path, format, &table)?;
        self.data_saved = true;
        Ok(path)
    }

    /// Export via a path chosen by the host's save dialog. A dismissed
    /// dialog (`None`) aborts with [`PlotError::NoFileSelected`]; nothing is
    /// written and no data is lost.
    pub fn export_to_chosen(
        &mut self,
        path: Option<PathBuf>,
        format: ExportFormat,
    ) -> Result<PathBuf, PlotError> {
        match path {
            Some(path) => self.export_to(path, format),
            None => Err(PlotError::NoFileSelected),
        }
    }

    // ── External control ─────────────────────────────────────────────────

    /// Consume pending controller requests and publish the current state to
    /// subscribers. Export failures are logged and returned; all other
    /// requests are processed regardless.
    pub fn poll_controller(
        &mut self,
        controller: &PlotController,
        now: Instant,
    ) -> Result<(), PlotError> {
        let requests = controller.take_requests();
        if requests.is_empty() {
            return Ok(());
        }

        let mut result = Ok(());
        if let Some(run) = requests.run {
            if run {
                self.start(now);
            } else {
                self.pause();
            }
        }
        for chart in requests.jump_to_latest {
            self.jump_to_latest(chart);
        }
        if let Some((format, path)) = requests.export_to {
            if let Err(e) = self.export_to(&path, format) {
                warn!("requested export to {:?} failed: {e}", path);
                result = Err(e);
            }
        }

        controller.publish(RunStateInfo {
            state: self.state,
            data_saved: self.data_saved,
            total_samples: self.store.total_samples(),
        });
        result
    }
}
