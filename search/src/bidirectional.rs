//! Bidirectional breadth-first search.
//!
//! The forward side expands successors from the initial state. The backward
//! side expands regressed predecessors from a single goal witness: the state
//! holding exactly the goal's positive literals. The sides alternate one
//! expansion each and stop at the first state both have reached.
//!
//! A goal with several satisfying states is collapsed to that one witness,
//! so the backward side alone can miss solutions. The forward side also
//! goal-tests every state it generates, which recovers them.

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use strider_kernel::model::State;
use tracing::debug;

use crate::node::{Plan, PlanStep, SearchNode};
use crate::policy::{SearchPolicy, StrategyKind};
use crate::report::{trace_termination, SearchStats, TerminationReason};
use crate::space::SearchSpace;

/// Result of a bidirectional run.
///
/// Unlike the tree strategies there is no single terminal node: the plan is
/// stitched from two parent chains.
#[derive(Debug)]
pub struct BidirectionalResult {
    /// The stitched plan. Forward steps first, then reversed steps.
    pub plan: Option<Plan>,
    /// Where the two sides met (or the goal state the forward side reached).
    pub meeting_state: Option<State>,
    /// State the plan ends in.
    pub final_state: Option<State>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl BidirectionalResult {
    /// Plan length, or `None` when no plan was found.
    #[must_use]
    pub fn cost(&self) -> Option<usize> {
        self.plan.as_ref().map(Plan::cost)
    }

    /// Nodes expanded across both sides.
    #[must_use]
    pub fn nodes_expanded(&self) -> u64 {
        self.stats.expansions
    }
}

/// One side of the search: a FIFO queue plus every node it has reached.
#[derive(Default)]
struct Side {
    queue: VecDeque<Rc<SearchNode>>,
    reached: HashMap<State, Rc<SearchNode>>,
}

impl Side {
    fn rooted_at(state: State) -> Self {
        let mut side = Self::default();
        side.reach(SearchNode::root(state));
        side
    }

    fn reach(&mut self, node: Rc<SearchNode>) {
        self.reached.insert(node.state().clone(), Rc::clone(&node));
        self.queue.push_back(node);
    }

    fn get(&self, state: &State) -> Option<&Rc<SearchNode>> {
        self.reached.get(state)
    }
}

/// How the loop stopped.
enum Stop {
    Meet {
        forward: Rc<SearchNode>,
        backward: Rc<SearchNode>,
    },
    Goal(Rc<SearchNode>),
    Exhausted,
    Aborted,
}

/// Join a forward chain ending at the meeting state with a backward chain
/// starting there.
///
/// The backward chain is read upward from the meeting node: each node's
/// action takes its state to its parent's state, ending at the witness.
fn stitch(forward: &SearchNode, backward: &SearchNode) -> Plan {
    let mut steps = forward.plan().steps().to_vec();
    let mut current = Some(backward);
    while let Some(node) = current {
        if let Some(action) = node.action() {
            steps.push(PlanStep::reversed(action));
        }
        current = node.parent().map(Rc::as_ref);
    }
    Plan::new(steps)
}

fn alternate(
    space: &SearchSpace<'_>,
    max_expansions: Option<u64>,
    forward: &mut Side,
    backward: &mut Side,
    stats: &mut SearchStats,
) -> Stop {
    loop {
        if stats.budget_reached(max_expansions) {
            return Stop::Aborted;
        }
        let Some(node) = forward.queue.pop_front() else {
            return Stop::Exhausted;
        };
        stats.expansions += 1;
        for (next, action) in space.successors(node.state()) {
            stats.generated += 1;
            if forward.get(&next).is_some() {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let child = SearchNode::child(&node, next, action);
            forward.reach(Rc::clone(&child));
            if let Some(back) = backward.get(child.state()) {
                debug!(
                    forward_depth = child.depth(),
                    backward_depth = back.depth(),
                    "frontiers met"
                );
                let backward = Rc::clone(back);
                return Stop::Meet {
                    forward: child,
                    backward,
                };
            }
            if space.is_goal(child.state()) {
                return Stop::Goal(child);
            }
        }
        stats.observe_frontier(forward.queue.len() + backward.queue.len());

        let Some(node) = backward.queue.pop_front() else {
            continue;
        };
        if stats.budget_reached(max_expansions) {
            return Stop::Aborted;
        }
        stats.expansions += 1;
        for (prev, action) in space.predecessors(node.state()) {
            stats.generated += 1;
            if backward.get(&prev).is_some() {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let child = SearchNode::child(&node, prev, action);
            backward.reach(Rc::clone(&child));
            if let Some(fwd) = forward.get(child.state()) {
                debug!(
                    forward_depth = fwd.depth(),
                    backward_depth = child.depth(),
                    "frontiers met"
                );
                return Stop::Meet {
                    forward: Rc::clone(fwd),
                    backward: child,
                };
            }
        }
        stats.observe_frontier(forward.queue.len() + backward.queue.len());
    }
}

/// Run bidirectional search.
///
/// The backward side only runs when the witness itself satisfies the goal;
/// for a contradictory goal it stays empty and the forward side decides.
#[must_use]
pub fn bidirectional(space: &SearchSpace<'_>, policy: &SearchPolicy) -> BidirectionalResult {
    let witness = space.goal().witness();
    debug!(
        strategy = "bidirectional",
        initial = space.initial().len(),
        witness = witness.len(),
        "search started"
    );
    let mut stats = SearchStats::default();

    let stop = if space.is_goal(space.initial()) {
        Stop::Goal(SearchNode::root(space.initial().clone()))
    } else {
        let mut forward = Side::rooted_at(space.initial().clone());
        let mut backward = if space.is_goal(&witness) {
            Side::rooted_at(witness.clone())
        } else {
            Side::default()
        };
        alternate(
            space,
            policy.max_expansions,
            &mut forward,
            &mut backward,
            &mut stats,
        )
    };

    let (plan, meeting_state, final_state, termination) = match stop {
        Stop::Meet { forward, backward } => (
            Some(stitch(&forward, &backward)),
            Some(forward.state().clone()),
            Some(witness),
            TerminationReason::GoalReached,
        ),
        Stop::Goal(node) => (
            Some(node.plan()),
            Some(node.state().clone()),
            Some(node.state().clone()),
            TerminationReason::GoalReached,
        ),
        Stop::Exhausted => (None, None, None, TerminationReason::FrontierExhausted),
        Stop::Aborted => (None, None, None, TerminationReason::ExpansionBudgetExceeded),
    };

    trace_termination(StrategyKind::Bidirectional, termination, &stats);
    BidirectionalResult {
        plan,
        meeting_state,
        final_state,
        termination,
        stats,
    }
}
