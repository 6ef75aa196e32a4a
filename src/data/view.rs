//! Bounded view window over a chart's x axis.
//!
//! The window either follows the newest sample (auto-follow) or sits where
//! the user panned it. Its width is a fixed span except while less data than
//! one span exists, in which case the window covers `[0, max_index]`.

use serde::{Deserialize, Serialize};

/// Default visible span in samples.
pub const DEFAULT_SPAN: f64 = 100.0;

/// Visible x-range of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    lower: f64,
    upper: f64,
    span: f64,
    auto_follow: bool,
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self::new(DEFAULT_SPAN)
    }
}

impl ViewWindow {
    /// A fresh window at the data origin, auto-following.
    pub fn new(span: f64) -> Self {
        Self {
            lower: 0.0,
            upper: 0.0,
            span: span.max(1.0),
            auto_follow: true,
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn auto_follow(&self) -> bool {
        self.auto_follow
    }

    /// Track the newest sample: `upper = max_index`,
    /// `lower = max(0, max_index - span)`. Only moves the window when
    /// auto-follow is on.
    pub fn advance(&mut self, max_index: f64) {
        if !self.auto_follow {
            return;
        }
        let max_index = max_index.max(0.0);
        self.upper = max_index;
        self.lower = (max_index - self.span).max(0.0);
    }

    /// Shift both bounds by `delta`, clamped to the data extent. The clamp
    /// shrinks the shift, never the window width. Panning takes the window
    /// out of auto-follow mode.
    ///
    /// Positive `delta` scrolls forward in time; scrolling backward is the
    /// same call with the sign flipped.
    pub fn pan(&mut self, delta: f64, max_index: f64) {
        self.auto_follow = false;
        let max_index = max_index.max(0.0);
        let mut width = (self.upper - self.lower).abs();
        if width == 0.0 {
            width = self.span;
        }
        if max_index <= width {
            // Not enough data for a full window: show everything.
            self.lower = 0.0;
            self.upper = max_index;
            return;
        }
        self.lower = (self.lower + delta).clamp(0.0, max_index - width);
        self.upper = self.lower + width;
    }

    /// Re-enable auto-follow and snap to the newest sample immediately.
    pub fn jump_to_latest(&mut self, max_index: f64) {
        self.auto_follow = true;
        self.advance(max_index);
    }
}
