use std::env;

use serde::{Deserialize, Serialize};

/// Runtime configuration, environment-backed with defaults.
///
/// CLI flags take precedence over these values; the environment is the
/// fallback for users who keep a `.env` next to their datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the clean dataset CSV.
    pub dataset_path: String,
    /// Output file prefix ("<prefix>-quiz.html"), if any.
    pub prefix: Option<String>,
    /// Shuffle seed; 0 keeps dataset order, absent means OS entropy.
    pub seed: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        let dataset_path =
            env::var("DATASET_PATH").unwrap_or_else(|_| "joyo.csv".to_string());

        let prefix = env::var("OUTPUT_PREFIX").ok().filter(|p| !p.is_empty());

        let seed = env::var("SHUFFLE_SEED")
            .ok()
            .and_then(|v| v.parse().ok());

        Config {
            dataset_path,
            prefix,
            seed,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
