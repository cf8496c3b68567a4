//! Harness runner: load → validate → search → verify → report.
//!
//! The runner uses ONLY kernel and search APIs. It does not implement any
//! search or verification logic itself.
//!
//! # Pipeline
//!
//! ```text
//! load_instance() → search() → replay_to_goal() → SearchReport
//! ```

use std::path::Path;

use serde::Serialize;
use strider_kernel::model::Task;
use strider_kernel::proof::replay::replay_to_goal;
use strider_kernel::ReplayError;
use strider_search::{
    search, SearchError, SearchOutcome, SearchPolicy, SearchReport, StrategyKind,
};
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, RunConfig};
use crate::loader::{load_instance, LoadError};

/// Error during a harness run.
///
/// "No solution" is not an error; it is a report with no plan.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Search(#[from] SearchError),
    /// A strategy returned a plan that does not replay to the goal.
    #[error("plan failed verification: {0}")]
    Verify(#[from] ReplayError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Whether the reported plan was checked by replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verification {
    /// Replayed from the initial state and reached the goal.
    Verified,
    /// Verification was disabled by the configuration.
    Skipped,
    /// There was no plan to verify.
    NoPlan,
}

/// Outcome of one run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub summary: SearchReport,
    pub verification: Verification,
    /// The raw outcome, for path rendering.
    #[serde(skip)]
    pub outcome: SearchOutcome,
}

impl RunReport {
    #[must_use]
    pub fn strategy(&self) -> StrategyKind {
        self.summary.strategy
    }

    /// Plan length, or `None` for no solution.
    #[must_use]
    pub fn cost(&self) -> Option<usize> {
        self.summary.cost
    }

    /// Action names in execution order.
    #[must_use]
    pub fn plan(&self) -> &[String] {
        &self.summary.plan
    }

    /// Nodes expanded (both sides, for bidirectional search).
    #[must_use]
    pub fn nodes_expanded(&self) -> u64 {
        self.summary.stats.expansions
    }
}

/// Run one strategy on a loaded task.
///
/// # Errors
///
/// - [`RunError::Search`] if the policy fails pre-flight validation.
/// - [`RunError::Verify`] if verification is on and the plan does not
///   replay to the goal.
pub fn run(task: &Task, config: &RunConfig) -> Result<RunReport, RunError> {
    let outcome = search(task, config.strategy, &config.policy)?;

    let verification = match outcome.plan() {
        None => Verification::NoPlan,
        Some(_) if !config.verify_plan => Verification::Skipped,
        Some(plan) => {
            replay_to_goal(&task.initial, &task.goal, &task.catalog, &plan.action_ids())?;
            Verification::Verified
        }
    };

    let summary = SearchReport::new(config.strategy, &outcome, task);
    info!(
        strategy = %config.strategy,
        cost = ?summary.cost,
        expansions = summary.stats.expansions,
        verification = ?verification,
        "run finished"
    );
    Ok(RunReport {
        summary,
        verification,
        outcome,
    })
}

/// Load an instance file and run one strategy on it.
///
/// # Errors
///
/// [`RunError::Load`] for unreadable or malformed files, plus everything
/// [`run`] returns.
pub fn run_file(path: &Path, config: &RunConfig) -> Result<RunReport, RunError> {
    let task = load_instance(path)?;
    run(&task, config)
}

/// Run every strategy in order: BFS, DLS, IDS, A*, bidirectional.
///
/// DLS uses `policy.depth_limit`, falling back to `policy.max_depth`.
///
/// # Errors
///
/// Stops at the first run that fails; see [`run`].
pub fn run_all(task: &Task, policy: &SearchPolicy) -> Result<Vec<RunReport>, RunError> {
    StrategyKind::ALL
        .iter()
        .map(|&strategy| {
            let mut policy = policy.clone();
            if strategy == StrategyKind::Dls && policy.depth_limit.is_none() {
                policy.depth_limit = Some(policy.max_depth);
            }
            run(task, &RunConfig::new(strategy).with_policy(policy))
        })
        .collect()
}
