//! Append-only per-series sample storage.
//!
//! Each series is a gapless run of `(index, value)` samples: the index of a
//! new sample is always the current series length, so indices are exactly
//! `0..n-1` in insertion order. Buffers grow unbounded for the lifetime of a
//! run; there is no deletion.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name of one series (one line on a chart).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesRef(pub String);

impl SeriesRef {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeriesRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One recorded sample: the tick index it was appended at, and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub index: u64,
    pub value: f64,
}

/// Values of a single series, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct SeriesBuffer {
    values: Vec<f64>,
}

impl SeriesBuffer {
    /// Append one value; its index is the buffer length before the append.
    pub fn push(&mut self, value: f64) -> u64 {
        let index = self.values.len() as u64;
        self.values.push(value);
        index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the recorded values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Index of the newest sample, if any.
    pub fn max_index(&self) -> Option<u64> {
        self.values.len().checked_sub(1).map(|i| i as u64)
    }

    /// Nearest sample to an x coordinate (hover readout). Rounds `x` to the
    /// closest valid index; `None` when the buffer is empty or `x` is not a
    /// finite number.
    pub fn sample_near(&self, x: f64) -> Option<Sample> {
        if self.values.is_empty() || !x.is_finite() {
            return None;
        }
        let last = (self.values.len() - 1) as f64;
        let index = x.round().clamp(0.0, last) as u64;
        Some(Sample {
            index,
            value: self.values[index as usize],
        })
    }
}

/// Insertion-ordered collection of all series in the application.
///
/// Series are created implicitly on first append, mirroring how traces come
/// into existence when their first point arrives.
#[derive(Default)]
pub struct SampleStore {
    series: HashMap<SeriesRef, SeriesBuffer>,
    order: Vec<SeriesRef>,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `(next_index, value)` to the named series, creating the series
    /// if this is its first sample. Returns the index the sample got.
    pub fn append(&mut self, series: &SeriesRef, value: f64) -> u64 {
        let buffer = self.series.entry(series.clone()).or_insert_with(|| {
            self.order.push(series.clone());
            SeriesBuffer::default()
        });
        buffer.push(value)
    }

    /// Number of samples recorded for the series; 0 for unknown series.
    pub fn length(&self, series: &SeriesRef) -> usize {
        self.series.get(series).map(|b| b.len()).unwrap_or(0)
    }

    /// Ordered values of the series; `None` for an unknown series.
    pub fn values(&self, series: &SeriesRef) -> Option<&[f64]> {
        self.series.get(series).map(|b| b.values())
    }

    pub fn buffer(&self, series: &SeriesRef) -> Option<&SeriesBuffer> {
        self.series.get(series)
    }

    /// Series names in first-append order.
    pub fn order(&self) -> &[SeriesRef] {
        &self.order
    }

    pub fn is_empty(&self) -> bool {
        self.series.values().all(|b| b.is_empty())
    }

    /// Total number of samples across all series.
    pub fn total_samples(&self) -> usize {
        self.series.values().map(|b| b.len()).sum()
    }

    /// Newest index across the given series, e.g. the series shown on one
    /// chart. `None` when none of them has data yet.
    pub fn max_index_of(&self, series: &[SeriesRef]) -> Option<u64> {
        series
            .iter()
            .filter_map(|s| self.series.get(s).and_then(|b| b.max_index()))
            .max()
    }
}
