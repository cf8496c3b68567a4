//! `replay()`: verify a plan by deterministic re-execution.
//!
//! Re-applies a plan action by action from a start state, checking every
//! precondition on the way. A plan a strategy returns is only trusted once
//! replay lands on a goal-satisfying state.

use thiserror::Error;

use crate::model::catalog::{ActionCatalog, ActionId};
use crate::model::goal::Goal;
use crate::model::state::State;
use crate::operators::apply::{apply, precondition_holds};
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_PLAN};

/// Why a plan could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// The plan references an action outside the catalog.
    #[error("step {step}: action index {index} is not in the catalog")]
    UnknownAction { step: usize, index: usize },
    /// A step's precondition does not hold in the state it is applied to.
    #[error("step {step}: precondition of '{action}' does not hold")]
    PreconditionNotMet { step: usize, action: String },
    /// Every step was legal, but the final state misses the goal.
    #[error("plan of {steps} steps does not reach the goal")]
    GoalNotSatisfied { steps: usize },
}

/// Replay `plan` from `start`, returning the final state.
///
/// # Errors
///
/// Returns [`ReplayError::UnknownAction`] or
/// [`ReplayError::PreconditionNotMet`] for the first illegal step.
pub fn replay(
    start: &State,
    catalog: &ActionCatalog,
    plan: &[ActionId],
) -> Result<State, ReplayError> {
    let mut current = start.clone();
    for (step, &id) in plan.iter().enumerate() {
        let action = catalog
            .get(id)
            .ok_or(ReplayError::UnknownAction { step, index: id.0 })?;
        if !precondition_holds(action, &current) {
            return Err(ReplayError::PreconditionNotMet {
                step,
                action: action.name().to_string(),
            });
        }
        current = apply(action, &current);
    }
    Ok(current)
}

/// Replay `plan` from `start` and require the result to satisfy `goal`.
///
/// # Errors
///
/// Everything [`replay`] returns, plus [`ReplayError::GoalNotSatisfied`].
pub fn replay_to_goal(
    start: &State,
    goal: &Goal,
    catalog: &ActionCatalog,
    plan: &[ActionId],
) -> Result<State, ReplayError> {
    let end = replay(start, catalog, plan)?;
    if goal.is_satisfied(&end) {
        Ok(end)
    } else {
        Err(ReplayError::GoalNotSatisfied { steps: plan.len() })
    }
}

/// Content digest of a plan: the ordered action indices as little-endian `u64`.
#[must_use]
pub fn plan_digest(plan: &[ActionId]) -> ContentHash {
    let mut bytes = Vec::with_capacity(plan.len() * 8);
    for id in plan {
        bytes.extend_from_slice(&(id.0 as u64).to_le_bytes());
    }
    canonical_hash(DOMAIN_PLAN, &bytes)
}
