//! Restartable stopwatch over the platform monotonic clock
//!
//! `Instant` never runs backward, so segment arithmetic is safe even when
//! the system clock is adjusted mid-measurement. Wall-clock sources must not
//! be substituted here.

use std::time::{Duration, Instant};

use tracing::info;

/// A labeled stopwatch with lap accumulation.
///
/// Elapsed time from multiple start/stop segments is summed into one running
/// total; `start` never clears what earlier segments accumulated. An instance
/// is owned by a single caller, so no locking is involved.
#[derive(Debug)]
pub struct Stopwatch {
    label: String,
    /// Reference point of the in-flight segment. `Some` means running.
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl Stopwatch {
    /// Create a stopwatch. With `auto_start` the first segment begins
    /// immediately; otherwise the stopwatch is stopped with zero accumulated
    /// time.
    pub fn new(label: impl Into<String>, auto_start: bool) -> Self {
        Self {
            label: label.into(),
            started_at: auto_start.then(Instant::now),
            accumulated: Duration::ZERO,
        }
    }

    /// Begin (or re-reference) a measurement segment.
    ///
    /// Legal in any state. Accumulated time from earlier segments is kept;
    /// if already running, the in-flight segment is abandoned and timing
    /// restarts from now.
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stop the current segment and return the total accumulated duration.
    ///
    /// Folds the in-flight segment into the running total. Idempotent when
    /// already stopped: the total is returned unchanged.
    pub fn stop(&mut self) -> Duration {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += started_at.elapsed();
        }
        self.accumulated
    }

    /// Read the accumulated duration without changing state.
    ///
    /// While running this includes the in-flight segment's elapsed-so-far;
    /// the segment reference point is not touched, so a later `stop` still
    /// accounts for the full segment.
    pub fn lap_get(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + started_at.elapsed(),
            None => self.accumulated,
        }
    }

    /// Accumulated duration in milliseconds, the fixed reporting unit.
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.lap_get())
    }

    /// Stop and log the total through the crate logger.
    ///
    /// Explicit replacement for destructor-time reporting: timing output
    /// happens exactly where the caller asks for it, never implicitly.
    pub fn report(&mut self) -> Duration {
        let total = self.stop();
        info!(label = %self.label, elapsed_ms = duration_ms(total), "stopwatch report");
        total
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Convert a duration to milliseconds as a real number.
pub fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000.0
}
