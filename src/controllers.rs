//! Controllers for interacting with a running driver from external code.
//!
//! The controller is a cloneable handle: any thread may post requests
//! (start/pause, jump-to-latest, export) and subscribe to run-state
//! updates. The driver consumes pending requests on its own thread via
//! `TickDriver::poll_controller`, so buffer mutation stays single-threaded.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::export::ExportFormat;
use crate::driver::RunState;

/// Snapshot of driver state published to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStateInfo {
    pub state: RunState,
    /// Whether the buffered data has been exported since the last append.
    pub data_saved: bool,
    /// Total samples across all series.
    pub total_samples: usize,
}

/// Pending requests drained by the driver in one poll.
#[derive(Default)]
pub(crate) struct PendingRequests {
    /// `Some(true)` = start, `Some(false)` = pause.
    pub run: Option<bool>,
    /// Chart indices to snap back to the newest data.
    pub jump_to_latest: Vec<usize>,
    /// Export request with explicit target path.
    pub export_to: Option<(ExportFormat, PathBuf)>,
}

impl PendingRequests {
    pub fn is_empty(&self) -> bool {
        self.run.is_none() && self.jump_to_latest.is_empty() && self.export_to.is_none()
    }
}

struct CtrlInner {
    pending: PendingRequests,
    listeners: Vec<Sender<RunStateInfo>>,
}

/// Cloneable control handle for a `TickDriver`.
#[derive(Clone)]
pub struct PlotController {
    inner: Arc<Mutex<CtrlInner>>,
}

impl Default for PlotController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(CtrlInner {
                pending: PendingRequests::default(),
                listeners: Vec::new(),
            })),
        }
    }

    /// Request that the driver start (or resume) ticking.
    pub fn start(&self) {
        self.inner.lock().unwrap().pending.run = Some(true);
    }

    /// Request that the driver pause.
    pub fn pause(&self) {
        self.inner.lock().unwrap().pending.run = Some(false);
    }

    /// Request that a chart snap back to the newest data.
    pub fn request_jump_to_latest(&self, chart: usize) {
        let mut inner = self.inner.lock().unwrap();
        if !inner.pending.jump_to_latest.contains(&chart) {
            inner.pending.jump_to_latest.push(chart);
        }
    }

    /// Request an export directly to the given path (non-interactive).
    pub fn request_export_to_path<P: Into<PathBuf>>(&self, format: ExportFormat, path: P) {
        self.inner.lock().unwrap().pending.export_to = Some((format, path.into()));
    }

    /// Subscribe to run-state updates. The receiver gets a `RunStateInfo`
    /// whenever the driver publishes one.
    pub fn subscribe(&self) -> Receiver<RunStateInfo> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.inner.lock().unwrap().listeners.push(tx);
        rx
    }

    /// Drain pending requests (driver side).
    pub(crate) fn take_requests(&self) -> PendingRequests {
        std::mem::take(&mut self.inner.lock().unwrap().pending)
    }

    /// Publish a state snapshot to subscribers, dropping closed receivers.
    pub(crate) fn publish(&self, info: RunStateInfo) {
        let mut inner = self.inner.lock().unwrap();
        inner.listeners.retain(|s| s.send(info).is_ok());
    }
}
