//! Benchmark module
//! Iteration driver plus the canned cleaning-function suite

pub mod harness;

pub use harness::{run_benchmark, BenchReport};

use tracing::info;

use crate::clean;
use crate::config::BenchConfig;
use crate::input::sample_text;

/// Run every `remove_ctrl` variant against the shared sample input and print
/// each report in the fixed format.
pub fn run_suite(config: &BenchConfig) -> Vec<BenchReport> {
    let iters = config.iterations;
    let text = sample_text(config.sample_repeat);
    info!(
        iterations = iters,
        input_len = text.len(),
        "running cleaning suite"
    );

    let mut reports = vec![
        run_benchmark("remove_ctrl_concat()", iters, || {
            clean::remove_ctrl_concat(&text)
        }),
        run_benchmark("remove_ctrl_push()", iters, || {
            clean::remove_ctrl_push(&text)
        }),
        run_benchmark("remove_ctrl_reserve()", iters, || {
            clean::remove_ctrl_reserve(&text)
        }),
        run_benchmark("remove_ctrl_bytes()", iters, || {
            clean::remove_ctrl_bytes(&text)
        }),
        run_benchmark("remove_ctrl_blocks()", iters, || {
            clean::remove_ctrl_blocks(&text)
        }),
        run_benchmark("remove_ctrl_filter()", iters, || {
            clean::remove_ctrl_filter(&text)
        }),
        run_benchmark("remove_ctrl_retain()", iters, || {
            clean::remove_ctrl_retain(text.clone())
        }),
    ];

    // Buffer-reuse variant: the driver does not reset the buffer between
    // iterations, the workload clears it itself.
    let mut buf = String::new();
    reports.push(run_benchmark("remove_ctrl_into()", iters, || {
        clean::remove_ctrl_into(&mut buf, &text)
    }));

    for report in &reports {
        println!("{report}");
    }

    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_covers_every_variant_once() {
        let config = BenchConfig {
            iterations: 2,
            ..BenchConfig::default()
        };
        let reports = run_suite(&config);
        assert_eq!(reports.len(), 8);
        for report in &reports {
            assert_eq!(report.iterations, 2);
        }
        let labels: Vec<&str> = reports.iter().map(|r| r.label.as_str()).collect();
        assert!(labels.contains(&"remove_ctrl_concat()"));
        assert!(labels.contains(&"remove_ctrl_into()"));
    }
}
