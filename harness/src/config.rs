//! Run configuration, loaded from JSON.
//!
//! ```json
//! { "strategy": "astar", "heuristic": "h_add", "max_expansions": 100000 }
//! ```
//!
//! Policy fields sit at the top level next to `strategy`; anything omitted
//! takes its default. No environment variables are consulted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strider_search::{SearchPolicy, StrategyKind};
use thiserror::Error;

/// Unreadable or malformed configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_verify_plan() -> bool {
    true
}

/// Strategy selection plus search policy for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub strategy: StrategyKind,
    #[serde(flatten)]
    pub policy: SearchPolicy,
    /// Replay the returned plan before reporting it.
    #[serde(default = "default_verify_plan")]
    pub verify_plan: bool,
}

impl RunConfig {
    /// Default policy for `strategy`, with plan verification on.
    #[must_use]
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            policy: SearchPolicy::default(),
            verify_plan: true,
        }
    }

    /// Builder-style policy override.
    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid JSON, a missing or unknown
    /// `strategy`, or ill-typed policy fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, plus
    /// everything [`RunConfig::from_json_str`] returns.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
