//! Depth-limited and iterative-deepening search.
//!
//! Depth-first order is driven by an explicit stack instead of recursion, so
//! long paths cannot exhaust the call stack. Children are pushed in reverse
//! so they pop in catalog order, matching a recursive walk.

use std::collections::HashMap;
use std::rc::Rc;

use strider_kernel::model::State;
use tracing::debug;

use crate::node::SearchNode;
use crate::policy::{SearchPolicy, StrategyKind};
use crate::report::{trace_termination, SearchStats, TerminationReason};
use crate::search::SearchResult;
use crate::space::SearchSpace;

/// How one bounded depth-first pass ended.
#[derive(Debug)]
enum Pass {
    Found(Rc<SearchNode>),
    /// At least one branch hit the limit.
    Cutoff,
    /// Every reachable state was seen within the limit.
    Exhausted,
    Aborted,
}

/// One depth-first pass bounded by `limit`, with fresh visited tracking.
///
/// A state popped at depth `d` is pruned when it was already visited at a
/// depth `<= d`. The goal test runs before the depth check, so a goal at
/// exactly `limit` is still found.
fn bounded_pass(
    space: &SearchSpace<'_>,
    limit: u32,
    max_expansions: Option<u64>,
    stats: &mut SearchStats,
) -> Pass {
    let mut visited: HashMap<State, u32> = HashMap::new();
    let mut stack = vec![SearchNode::root(space.initial().clone())];
    let mut cutoff = false;

    while let Some(node) = stack.pop() {
        if visited
            .get(node.state())
            .is_some_and(|&seen| seen <= node.depth())
        {
            stats.duplicates_suppressed += 1;
            continue;
        }
        visited.insert(node.state().clone(), node.depth());

        if space.is_goal(node.state()) {
            return Pass::Found(node);
        }
        if node.depth() >= limit {
            cutoff = true;
            continue;
        }
        if stats.budget_reached(max_expansions) {
            return Pass::Aborted;
        }

        stats.expansions += 1;
        let children: Vec<_> = space
            .successors(node.state())
            .map(|(next, action)| SearchNode::child(&node, next, action))
            .collect();
        stats.generated += children.len() as u64;
        stack.extend(children.into_iter().rev());
        stats.observe_frontier(stack.len());
    }

    if cutoff {
        Pass::Cutoff
    } else {
        Pass::Exhausted
    }
}

fn into_result(
    pass: Pass,
    stats: SearchStats,
) -> (Option<Rc<SearchNode>>, TerminationReason, SearchStats) {
    match pass {
        Pass::Found(node) => (Some(node), TerminationReason::GoalReached, stats),
        Pass::Cutoff => (None, TerminationReason::DepthCutoff, stats),
        Pass::Exhausted => (None, TerminationReason::FrontierExhausted, stats),
        Pass::Aborted => (None, TerminationReason::ExpansionBudgetExceeded, stats),
    }
}

/// Depth-limited search with an explicit bound.
///
/// Returns [`TerminationReason::DepthCutoff`] when the bound pruned a
/// branch, which is not proof that no solution exists.
#[must_use]
pub fn depth_limited(space: &SearchSpace<'_>, limit: u32, policy: &SearchPolicy) -> SearchResult {
    debug!(
        strategy = "dls",
        limit,
        initial = space.initial().len(),
        goal = space.goal().len(),
        "search started"
    );
    let mut stats = SearchStats::default();
    let pass = bounded_pass(space, limit, policy.max_expansions, &mut stats);
    let (goal_node, termination, stats) = into_result(pass, stats);
    trace_termination(StrategyKind::Dls, termination, &stats);
    SearchResult::new(goal_node, termination, stats)
}

/// Iterative deepening: depth-limited passes at `0, 1, …, policy.max_depth`.
///
/// Each pass starts with an empty visited map. A pass that finishes without
/// any cutoff has seen the whole reachable space, so the search stops early
/// with [`TerminationReason::FrontierExhausted`].
#[must_use]
pub fn iterative_deepening(space: &SearchSpace<'_>, policy: &SearchPolicy) -> SearchResult {
    debug!(
        strategy = "ids",
        max_depth = policy.max_depth,
        initial = space.initial().len(),
        goal = space.goal().len(),
        "search started"
    );
    let mut stats = SearchStats::default();
    let mut last = Pass::Cutoff;

    for limit in 0..=policy.max_depth {
        stats.iterations += 1;
        last = bounded_pass(space, limit, policy.max_expansions, &mut stats);
        debug!(limit, expansions = stats.expansions, "deepening pass finished");
        if !matches!(last, Pass::Cutoff) {
            break;
        }
    }

    let (goal_node, termination, stats) = into_result(last, stats);
    trace_termination(StrategyKind::Ids, termination, &stats);
    SearchResult::new(goal_node, termination, stats)
}
