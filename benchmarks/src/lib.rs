//! Shared helpers for strider benchmark suites.

use strider_harness::worlds::blocks::BlocksProblem;
use strider_kernel::model::Task;
use strider_search::{search, SearchOutcome, SearchPolicy, StrategyKind};

/// A named planning task used across benchmark groups.
pub struct Instance {
    pub name: String,
    pub task: Task,
}

/// Build a blocks-world task.
///
/// # Panics
///
/// Panics if the generated instance text fails to parse. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn blocks(name: &str, problem: &BlocksProblem) -> Instance {
    Instance {
        name: name.to_string(),
        task: problem.to_task().expect("generated blocks instance parses"),
    }
}

/// Small-to-medium instances every strategy finishes on quickly.
#[must_use]
pub fn standard_instances() -> Vec<Instance> {
    vec![
        blocks("build_tower_3", &BlocksProblem::build_tower(3)),
        blocks("invert_tower_3", &BlocksProblem::invert_tower(3)),
        blocks("invert_tower_4", &BlocksProblem::invert_tower(4)),
    ]
}

/// Policy used for every strategy in the comparison groups.
///
/// DLS gets the same bound IDS iterates up to.
#[must_use]
pub fn bench_policy() -> SearchPolicy {
    let policy = SearchPolicy::default();
    let limit = policy.max_depth;
    policy.with_depth_limit(limit)
}

/// Run one strategy, skipping harness-level verification and reporting.
///
/// # Panics
///
/// Panics if the policy is rejected for the strategy.
#[must_use]
pub fn run_strategy(task: &Task, strategy: StrategyKind, policy: &SearchPolicy) -> SearchOutcome {
    search(task, strategy, policy).expect("benchmark policy is valid")
}
