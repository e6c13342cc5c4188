//! strbench CLI
//! Runs the cleaning suite and prints one timing report per variant

use strbench::{run_suite, BenchConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = BenchConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(
        iterations = config.iterations,
        sample_repeat = config.sample_repeat,
        "strbench starting"
    );

    let reports = run_suite(&config);

    info!(variants = reports.len(), "strbench complete");
    Ok(())
}
