//! `ActionCatalog`: the ordered, read-only collection of grounded actions.
//!
//! Iteration order is insertion order and is the tie-breaking order every
//! strategy inherits, so results are reproducible run to run.

use std::collections::BTreeSet;

use crate::error::ModelError;
use crate::model::action::Action;
use crate::model::goal::Goal;
use crate::model::literal::PropositionId;

/// Index of an action within its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(pub usize);

/// Ordered collection of grounded actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionCatalog {
    actions: Vec<Action>,
}

impl ActionCatalog {
    /// Build a catalog preserving the given order.
    #[must_use]
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Append an action, returning its ID.
    pub fn push(&mut self, action: Action) -> ActionId {
        self.actions.push(action);
        ActionId(self.actions.len() - 1)
    }

    /// Look up an action.
    #[must_use]
    pub fn get(&self, id: ActionId) -> Option<&Action> {
        self.actions.get(id.0)
    }

    /// Look up an action, failing for IDs outside the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownAction`] if `id` is out of range.
    pub fn try_get(&self, id: ActionId) -> Result<&Action, ModelError> {
        self.get(id)
            .ok_or(ModelError::UnknownAction { index: id.0 })
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// `(id, action)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &Action)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(i, a)| (ActionId(i), a))
    }

    /// All propositions mentioned by the goal or by any action's
    /// precondition or effects.
    #[must_use]
    pub fn relevant_propositions(&self, goal: &Goal) -> BTreeSet<PropositionId> {
        let mut relevant: BTreeSet<PropositionId> = goal.iter().map(|l| l.prop()).collect();
        for action in &self.actions {
            relevant.extend(action.mentioned());
        }
        relevant
    }
}
