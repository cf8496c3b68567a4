//! Run statistics, termination reasons, and the serializable search report.

use serde::Serialize;
use strider_kernel::model::Task;
use strider_kernel::proof::replay::plan_digest;
use tracing::{info, warn};

use crate::policy::StrategyKind;
use crate::search::SearchOutcome;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// A goal-satisfying state was reached.
    GoalReached,
    /// Every reachable state was explored without reaching the goal. Proven
    /// no solution.
    FrontierExhausted,
    /// The depth limit cut off at least one branch. A solution may exist
    /// beyond the limit.
    DepthCutoff,
    /// The caller's expansion budget ran out. Aborted, not a verdict.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    /// Stable lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DepthCutoff => "depth_cutoff",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// Counters collected during one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes whose successors (or predecessors) were generated.
    pub expansions: u64,
    /// Successor states produced.
    pub generated: u64,
    /// Generated or popped nodes dropped as already seen.
    pub duplicates_suppressed: u64,
    /// States pruned because the heuristic proved the goal unreachable.
    pub dead_ends: u64,
    /// Largest frontier (or stack) size observed.
    pub frontier_high_water: u64,
    /// Depth iterations run. Zero for strategies that do not iterate.
    pub iterations: u32,
}

impl SearchStats {
    /// Whether `max_expansions` forbids another expansion.
    #[must_use]
    pub fn budget_reached(&self, max_expansions: Option<u64>) -> bool {
        max_expansions.is_some_and(|max| self.expansions >= max)
    }

    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.frontier_high_water = self.frontier_high_water.max(len as u64);
    }
}

pub(crate) fn trace_termination(
    strategy: StrategyKind,
    termination: TerminationReason,
    stats: &SearchStats,
) {
    if termination == TerminationReason::ExpansionBudgetExceeded {
        warn!(
            %strategy,
            expansions = stats.expansions,
            "search aborted: expansion budget exhausted"
        );
    }
    info!(
        %strategy,
        termination = termination.as_str(),
        expansions = stats.expansions,
        generated = stats.generated,
        duplicates = stats.duplicates_suppressed,
        frontier_high_water = stats.frontier_high_water,
        "search finished"
    );
}

/// Serializable summary of one search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub strategy: StrategyKind,
    pub termination: TerminationReason,
    /// Plan length, or `None` when no plan was found.
    pub cost: Option<usize>,
    /// Action names in execution order; reversed steps carry `(rev) `.
    pub plan: Vec<String>,
    /// `sha256:` digest of the plan's action indices.
    pub plan_digest: Option<String>,
    /// `sha256:` fingerprint of the initial state.
    pub root_fingerprint: String,
    /// `sha256:` fingerprint of the state the plan ends in.
    pub goal_fingerprint: Option<String>,
    pub stats: SearchStats,
}

impl SearchReport {
    /// Summarize `outcome` against the task it was run on.
    #[must_use]
    pub fn new(strategy: StrategyKind, outcome: &SearchOutcome, task: &Task) -> Self {
        let plan = outcome.plan();
        Self {
            strategy,
            termination: outcome.termination(),
            cost: plan.as_ref().map(crate::node::Plan::cost),
            plan: plan
                .as_ref()
                .map(|p| p.action_names(&task.catalog))
                .unwrap_or_default(),
            plan_digest: plan
                .as_ref()
                .map(|p| plan_digest(&p.action_ids()).to_string()),
            root_fingerprint: task.initial.fingerprint().to_string(),
            goal_fingerprint: outcome.final_state().map(|s| s.fingerprint().to_string()),
            stats: *outcome.stats(),
        }
    }

    /// Compact JSON encoding of the report.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
