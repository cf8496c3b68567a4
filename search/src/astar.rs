//! A* search.
//!
//! Frontier order is `f = g + h`, ties broken FIFO by insertion counter.
//! A best-g table replaces decrease-key: a popped node whose state already
//! has a strictly better g is skipped.
//!
//! Children are goal-tested as they are generated. Both shipped heuristics
//! return at least 1 on any non-goal state, so under unit costs the early
//! test cannot return a plan longer than the one A* would pop.
//!
//! With [`crate::heuristic::GoalCount`] the returned plan is optimal only
//! when no action makes more than one goal literal true. Otherwise, and
//! with [`crate::heuristic::AdditiveCost`], A* may return a longer plan.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

use strider_kernel::model::{PropositionId, State};
use tracing::{debug, warn};

use crate::frontier::BestFirstFrontier;
use crate::heuristic::Estimate;
use crate::node::SearchNode;
use crate::policy::{DedupKey, SearchPolicy, StrategyKind};
use crate::report::{trace_termination, SearchStats, TerminationReason};
use crate::search::SearchResult;
use crate::space::SearchSpace;

/// Best-g table, keyed by the full state or by its relevant projection.
struct BestG {
    projection: Option<BTreeSet<PropositionId>>,
    table: HashMap<State, u32>,
}

impl BestG {
    fn new(space: &SearchSpace<'_>, dedup_key: DedupKey) -> Self {
        let projection = match dedup_key {
            DedupKey::FullState => None,
            DedupKey::RelevantProjection => {
                warn!("A* keyed by relevant projection: distinct states may share a best-g entry");
                Some(space.relevant_propositions())
            }
        };
        Self {
            projection,
            table: HashMap::new(),
        }
    }

    fn key<'s>(&self, state: &'s State) -> Cow<'s, State> {
        match &self.projection {
            Some(relevant) => Cow::Owned(state.project(relevant)),
            None => Cow::Borrowed(state),
        }
    }

    /// Whether a path of cost `g` to `state` is beaten or matched already.
    fn dominated(&self, state: &State, g: u32) -> bool {
        self.table
            .get(self.key(state).as_ref())
            .is_some_and(|&best| best <= g)
    }

    /// Whether a strictly cheaper path to `state` is known.
    fn stale(&self, state: &State, g: u32) -> bool {
        self.table
            .get(self.key(state).as_ref())
            .is_some_and(|&best| best < g)
    }

    fn record(&mut self, state: &State, g: u32) {
        self.table.insert(self.key(state).into_owned(), g);
    }
}

/// Run A* with the heuristic selected by `policy`.
#[must_use]
pub fn astar(space: &SearchSpace<'_>, policy: &SearchPolicy) -> SearchResult {
    let heuristic = policy.heuristic.build(space.catalog());
    debug!(
        strategy = "astar",
        heuristic = heuristic.name(),
        initial = space.initial().len(),
        goal = space.goal().len(),
        "search started"
    );

    let mut stats = SearchStats::default();
    let mut best_g = BestG::new(space, policy.dedup_key);
    let mut frontier = BestFirstFrontier::new();

    let root = SearchNode::root(space.initial().clone());
    if space.is_goal(root.state()) {
        trace_termination(StrategyKind::AStar, TerminationReason::GoalReached, &stats);
        return SearchResult::new(Some(root), TerminationReason::GoalReached, stats);
    }
    best_g.record(root.state(), 0);
    match heuristic.estimate(root.state(), space.goal()) {
        Estimate::Finite(h) => frontier.push(u64::from(h), root),
        Estimate::Infinite => stats.dead_ends += 1,
    }

    let (goal_node, termination) = 'search: loop {
        let Some((_, node)) = frontier.pop() else {
            break (None, TerminationReason::FrontierExhausted);
        };
        if best_g.stale(node.state(), node.depth()) {
            stats.duplicates_suppressed += 1;
            continue;
        }
        if stats.budget_reached(policy.max_expansions) {
            break (None, TerminationReason::ExpansionBudgetExceeded);
        }

        stats.expansions += 1;
        let g = node.depth() + 1;
        for (next, action) in space.successors(node.state()) {
            stats.generated += 1;
            if best_g.dominated(&next, g) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            best_g.record(&next, g);
            let child = SearchNode::child(&node, next, action);
            if space.is_goal(child.state()) {
                break 'search (Some(child), TerminationReason::GoalReached);
            }
            match heuristic.estimate(child.state(), space.goal()) {
                Estimate::Finite(h) => frontier.push(u64::from(g) + u64::from(h), child),
                Estimate::Infinite => stats.dead_ends += 1,
            }
        }
    };

    stats.frontier_high_water = frontier.high_water();
    trace_termination(StrategyKind::AStar, termination, &stats);
    SearchResult::new(goal_node, termination, stats)
}
