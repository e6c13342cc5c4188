//! Configuration for the benchmark binary
//!
//! The harness itself takes its iteration count and workload at the call
//! site and reads nothing from the environment; this config belongs to the
//! `strbench` binary, which is the harness's caller.

use serde::{Deserialize, Serialize};

/// Settings for one suite run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Iterations per benchmarked variant
    pub iterations: u64,

    /// How many copies of the sample sentence make up the input
    pub sample_repeat: usize,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            sample_repeat: 3,
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BenchConfig {
    /// Load config from the file named by `STRBENCH_CONFIG`, falling back to
    /// defaults when the file does not exist.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("STRBENCH_CONFIG").unwrap_or_else(|_| "strbench.json".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: BenchConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(BenchConfig::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
