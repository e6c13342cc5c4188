//! Generic iteration driver and timing report

use std::fmt;
use std::hint::black_box;
use std::time::Duration;

use tracing::debug;

use crate::stopwatch::{duration_ms, Stopwatch};

/// Timing report for one benchmark run
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub label: String,
    pub iterations: u64,
    pub total: Duration,
}

impl BenchReport {
    /// Total elapsed time over all iterations, in milliseconds.
    pub fn total_ms(&self) -> f64 {
        duration_ms(self.total)
    }

    /// Average time per iteration in milliseconds, as a real-valued
    /// division. Zero iterations reports 0.0 rather than dividing.
    pub fn average_ms(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.total_ms() / self.iterations as f64
        }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {} iterations:", self.label, self.iterations)?;
        writeln!(f, "-   total   = {} ms", self.total_ms())?;
        write!(f, "-   average = {} ms", self.average_ms())
    }
}

/// Run `f` exactly `iterations` times under a single stopwatch spanning the
/// whole loop.
///
/// Works uniformly for callables that return a value and callables that
/// return `()`: each result goes through `black_box` and is dropped, so the
/// measured call is computed but never consumed and the optimizer cannot
/// elide it. Captured state is the workload's own business; nothing is reset
/// between iterations, so a workload that mutates a shared buffer sees its
/// own leftovers unless it clears them itself.
///
/// With `iterations == 0` the stopwatch is never started and the report
/// carries a zero total.
pub fn run_benchmark<F, R>(label: &str, iterations: u64, mut f: F) -> BenchReport
where
    F: FnMut() -> R,
{
    let mut sw = Stopwatch::new(label, false);
    if iterations > 0 {
        sw.start();
        for _ in 0..iterations {
            black_box(f());
        }
        sw.stop();
    }
    let total = sw.lap_get();
    debug!(label, iterations, total_ms = duration_ms(total), "benchmark complete");
    BenchReport {
        label: label.to_string(),
        iterations,
        total,
    }
}
