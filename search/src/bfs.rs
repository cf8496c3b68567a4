//! Breadth-first search.

use tracing::debug;

use crate::frontier::FifoFrontier;
use crate::node::SearchNode;
use crate::policy::{SearchPolicy, StrategyKind};
use crate::report::{trace_termination, SearchStats, TerminationReason};
use crate::search::SearchResult;
use crate::space::SearchSpace;

/// Run BFS from the task's initial state.
///
/// States are marked seen when enqueued, so each state enters the frontier
/// at most once and the first goal popped is at minimum depth.
#[must_use]
pub fn breadth_first(space: &SearchSpace<'_>, policy: &SearchPolicy) -> SearchResult {
    debug!(
        strategy = "bfs",
        initial = space.initial().len(),
        goal = space.goal().len(),
        "search started"
    );

    let mut stats = SearchStats::default();
    let mut frontier = FifoFrontier::new();
    frontier.push(SearchNode::root(space.initial().clone()));

    let (goal_node, termination) = loop {
        let Some(node) = frontier.pop() else {
            break (None, TerminationReason::FrontierExhausted);
        };
        if space.is_goal(node.state()) {
            break (Some(node), TerminationReason::GoalReached);
        }
        if stats.budget_reached(policy.max_expansions) {
            break (None, TerminationReason::ExpansionBudgetExceeded);
        }

        stats.expansions += 1;
        for (next, action) in space.successors(node.state()) {
            stats.generated += 1;
            if !frontier.push(SearchNode::child(&node, next, action)) {
                stats.duplicates_suppressed += 1;
            }
        }
    };

    stats.frontier_high_water = frontier.high_water();
    trace_termination(StrategyKind::Bfs, termination, &stats);
    SearchResult::new(goal_node, termination, stats)
}
