//! Search entry point and result types.

use std::rc::Rc;

use strider_kernel::model::{State, Task};

use crate::astar::astar;
use crate::bfs::breadth_first;
use crate::bidirectional::{bidirectional, BidirectionalResult};
use crate::depth_limited::{depth_limited, iterative_deepening};
use crate::error::SearchError;
use crate::node::{Plan, SearchNode};
use crate::policy::{SearchPolicy, StrategyKind};
use crate::report::{SearchStats, TerminationReason};
use crate::space::SearchSpace;

/// Result of a tree search (BFS, DLS, IDS, A*).
///
/// Inspect `termination` to determine the outcome.
#[derive(Debug)]
pub struct SearchResult {
    /// The goal node (if found). Walk its parent links for the path.
    pub goal_node: Option<Rc<SearchNode>>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl SearchResult {
    #[must_use]
    pub fn new(
        goal_node: Option<Rc<SearchNode>>,
        termination: TerminationReason,
        stats: SearchStats,
    ) -> Self {
        Self {
            goal_node,
            termination,
            stats,
        }
    }

    /// The plan to the goal node.
    #[must_use]
    pub fn plan(&self) -> Option<Plan> {
        self.goal_node.as_ref().map(|n| n.plan())
    }
}

/// What a strategy returned.
///
/// Tree strategies return a terminal node; bidirectional search returns a
/// stitched plan and a node count.
#[derive(Debug)]
pub enum SearchOutcome {
    Tree(SearchResult),
    Bidirectional(BidirectionalResult),
}

impl SearchOutcome {
    #[must_use]
    pub fn termination(&self) -> TerminationReason {
        match self {
            Self::Tree(r) => r.termination,
            Self::Bidirectional(r) => r.termination,
        }
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::Tree(r) => &r.stats,
            Self::Bidirectional(r) => &r.stats,
        }
    }

    /// The plan, if one was found.
    #[must_use]
    pub fn plan(&self) -> Option<Plan> {
        match self {
            Self::Tree(r) => r.plan(),
            Self::Bidirectional(r) => r.plan.clone(),
        }
    }

    /// Plan length, or `None` for no solution.
    #[must_use]
    pub fn cost(&self) -> Option<usize> {
        self.plan().map(|p| p.cost())
    }

    /// The state the plan ends in.
    #[must_use]
    pub fn final_state(&self) -> Option<&State> {
        match self {
            Self::Tree(r) => r.goal_node.as_deref().map(SearchNode::state),
            Self::Bidirectional(r) => r.final_state.as_ref(),
        }
    }

    /// The terminal node, for tree strategies only.
    #[must_use]
    pub fn goal_node(&self) -> Option<&Rc<SearchNode>> {
        match self {
            Self::Tree(r) => r.goal_node.as_ref(),
            Self::Bidirectional(_) => None,
        }
    }
}

/// Run `strategy` on `task` under `policy`.
///
/// All runtime terminations (goal reached, exhaustion, cutoff, budget)
/// return `Ok`; see [`SearchOutcome::termination`].
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight policy validation failures,
/// such as DLS without a depth limit. No node is expanded in that case.
pub fn search(
    task: &Task,
    strategy: StrategyKind,
    policy: &SearchPolicy,
) -> Result<SearchOutcome, SearchError> {
    policy.validate_for(strategy)?;

    let space = SearchSpace::new(task, policy.relevance_filter);
    let outcome = match strategy {
        StrategyKind::Bfs => SearchOutcome::Tree(breadth_first(&space, policy)),
        StrategyKind::Dls => {
            let limit = policy.depth_limit.ok_or(SearchError::MissingDepthLimit)?;
            SearchOutcome::Tree(depth_limited(&space, limit, policy))
        }
        StrategyKind::Ids => SearchOutcome::Tree(iterative_deepening(&space, policy)),
        StrategyKind::AStar => SearchOutcome::Tree(astar(&space, policy)),
        StrategyKind::Bidirectional => SearchOutcome::Bidirectional(bidirectional(&space, policy)),
    };
    Ok(outcome)
}
