//! Heuristic estimators for best-first search.
//!
//! Two estimators ship with the crate:
//!
//! - [`GoalCount`]: number of unmet goal literals. Admissible under unit
//!   action costs only when no action makes more than one goal literal
//!   true. In blocks world a single `stack_x_y` satisfies `on_x_y`,
//!   `clear_x` and `handempty` at once, so the count can overestimate.
//! - [`AdditiveCost`] ("h-add"): sum of per-literal costs from a delete-free
//!   relaxation. Fast and informative, but NOT admissible in general; A*
//!   driven by it may return a longer-than-optimal plan.
//!
//! An estimate of [`Estimate::Infinite`] means the goal is unreachable even
//! in the relaxed model, hence unreachable for real. Strategies may prune
//! on it.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strider_kernel::model::{ActionCatalog, Goal, PropositionId, State};

use crate::error::SearchError;

/// A heuristic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Estimate {
    Finite(u32),
    /// Provably unreachable in the relaxed model.
    Infinite,
}

impl Estimate {
    /// The finite value, or `None` for [`Estimate::Infinite`].
    #[must_use]
    pub fn finite(self) -> Option<u32> {
        match self {
            Self::Finite(v) => Some(v),
            Self::Infinite => None,
        }
    }

    #[must_use]
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }
}

/// Trait for state evaluation against a goal.
///
/// Implementations must be pure: the same `(state, goal)` always yields the
/// same estimate.
pub trait Heuristic {
    /// Estimate the remaining cost from `state` to any state satisfying `goal`.
    fn estimate(&self, state: &State, goal: &Goal) -> Estimate;

    /// Short stable name, used in logs and reports.
    fn name(&self) -> &'static str;
}

/// Number of goal literals not satisfied by the state.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalCount;

impl Heuristic for GoalCount {
    fn estimate(&self, state: &State, goal: &Goal) -> Estimate {
        Estimate::Finite(u32::try_from(goal.unmet_count(state)).unwrap_or(u32::MAX))
    }

    fn name(&self) -> &'static str {
        "goal_count"
    }
}

/// Additive relaxed-planning cost over the delete-free relaxation.
///
/// Runs the relaxation to a full fixpoint: every proposition true in the
/// state costs 0; every action whose positive preconditions all have a cost
/// offers `1 + sum(precondition costs)` to each add effect, and the minimum
/// offer wins. Negative preconditions are ignored by the relaxation.
///
/// Negative goal literals are relaxed symmetrically through delete effects:
/// a proposition already absent costs 0 to keep absent; otherwise its cost
/// is the cheapest offer of any action that deletes it.
#[derive(Debug, Clone, Copy)]
pub struct AdditiveCost<'a> {
    catalog: &'a ActionCatalog,
}

impl<'a> AdditiveCost<'a> {
    #[must_use]
    pub fn new(catalog: &'a ActionCatalog) -> Self {
        Self { catalog }
    }

    /// Per-proposition costs to make true and to make false, after the
    /// fixpoint.
    fn relax(&self, state: &State) -> (HashMap<PropositionId, u32>, HashMap<PropositionId, u32>) {
        let mut achieve: HashMap<PropositionId, u32> = state.iter().map(|p| (p, 0)).collect();
        let mut remove: HashMap<PropositionId, u32> = HashMap::new();

        // Offers only ever decrease, so this terminates.
        let mut changed = true;
        while changed {
            changed = false;
            for (_, action) in self.catalog.iter() {
                let Some(pre_cost) = action
                    .precondition()
                    .iter()
                    .filter(|l| l.is_positive())
                    .try_fold(0u32, |acc, l| {
                        achieve.get(&l.prop()).map(|c| acc.saturating_add(*c))
                    })
                else {
                    continue;
                };
                let offer = pre_cost.saturating_add(1);

                for &p in action.add() {
                    changed |= relax_entry(&mut achieve, p, offer);
                }
                for &p in action.delete() {
                    if state.contains(p) {
                        changed |= relax_entry(&mut remove, p, offer);
                    }
                }
            }
        }
        (achieve, remove)
    }
}

fn relax_entry(costs: &mut HashMap<PropositionId, u32>, prop: PropositionId, offer: u32) -> bool {
    match costs.get_mut(&prop) {
        Some(current) if *current <= offer => false,
        Some(current) => {
            *current = offer;
            true
        }
        None => {
            costs.insert(prop, offer);
            true
        }
    }
}

impl Heuristic for AdditiveCost<'_> {
    fn estimate(&self, state: &State, goal: &Goal) -> Estimate {
        if goal.is_satisfied(state) {
            return Estimate::Finite(0);
        }
        let (achieve, remove) = self.relax(state);
        let mut total = 0u32;
        for literal in goal.iter() {
            let p = literal.prop();
            let cost = if literal.is_positive() {
                achieve.get(&p).copied()
            } else if state.contains(p) {
                remove.get(&p).copied()
            } else {
                Some(0)
            };
            match cost {
                Some(c) => total = total.saturating_add(c),
                None => return Estimate::Infinite,
            }
        }
        Estimate::Finite(total)
    }

    fn name(&self) -> &'static str {
        "h_add"
    }
}

/// Heuristic selector for A*.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    #[default]
    GoalCount,
    HAdd,
}

impl HeuristicKind {
    /// Instantiate the selected heuristic over `catalog`.
    #[must_use]
    pub fn build(self, catalog: &ActionCatalog) -> Box<dyn Heuristic + '_> {
        match self {
            Self::GoalCount => Box::new(GoalCount),
            Self::HAdd => Box::new(AdditiveCost::new(catalog)),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goal_count" | "goal-count" => Ok(Self::GoalCount),
            "h_add" | "h-add" | "hadd" => Ok(Self::HAdd),
            _ => Err(SearchError::UnknownHeuristic {
                name: s.to_string(),
            }),
        }
    }
}
