//! strbench
//!
//! Micro-benchmarking playground for string cleaning hot paths.
//!
//! ## Architecture
//! - Stopwatch: restartable monotonic timer with lap accumulation
//! - Bench: generic iteration driver and timing report
//! - Clean: the `remove_ctrl` workload family under test
//! - Input: canned and randomized benchmark input

pub mod bench;
pub mod clean;
pub mod config;
pub mod input;
pub mod stopwatch;

pub use bench::{run_benchmark, run_suite, BenchReport};
pub use config::{BenchConfig, ConfigError};
pub use stopwatch::Stopwatch;
