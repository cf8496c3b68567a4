//! State model: precondition test, effect application, goal test, and the
//! inverse of application used by backward search.
//!
//! Every function here is pure. [`apply`] and [`regress`] return new
//! states and never touch their input.

use crate::model::action::Action;
use crate::model::goal::Goal;
use crate::model::state::State;

/// Whether every precondition literal of `action` holds in `state`.
///
/// Positive literal `p`: `p` must be present. Negative literal `-p`: `p`
/// must be absent.
#[must_use]
pub fn precondition_holds(action: &Action, state: &State) -> bool {
    action
        .precondition()
        .iter()
        .all(|&l| Goal::literal_holds(l, state))
}

/// Apply `action` to `state`: remove delete effects, then insert add effects.
///
/// Does not check the precondition; callers pair this with
/// [`precondition_holds`].
#[must_use]
pub fn apply(action: &Action, state: &State) -> State {
    state.edited(action.delete(), action.add())
}

/// Whether `state` satisfies `goal`. Short-circuits on the first unmet literal.
#[must_use]
pub fn goal_satisfied(state: &State, goal: &Goal) -> bool {
    goal.is_satisfied(state)
}

/// Compute the predecessor of `state` through `action`, if one exists.
///
/// A predecessor exists iff every add effect is present in `state` and no
/// delete effect is. The predecessor is `state` with the add effects removed
/// and the delete effects restored. It is only returned when `action`'s
/// precondition holds in it, so applying `action` to the result is legal
/// and yields `state` again.
#[must_use]
pub fn regress(action: &Action, state: &State) -> Option<State> {
    if !action.add().iter().all(|&p| state.contains(p)) {
        return None;
    }
    if action.delete().iter().any(|&p| state.contains(p)) {
        return None;
    }
    let previous = state.edited(action.add(), action.delete());
    precondition_holds(action, &previous).then_some(previous)
}
