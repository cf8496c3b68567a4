//! Successor and predecessor generation, and the relevance filter.
//!
//! Enumeration follows catalog order, which makes every strategy's
//! tie-breaking deterministic. Both generators are lazy: states are only
//! built when the consumer pulls them.

use std::collections::BTreeSet;

use crate::model::action::Action;
use crate::model::catalog::{ActionCatalog, ActionId};
use crate::model::goal::Goal;
use crate::model::literal::PropositionId;
use crate::model::state::State;
use crate::operators::apply::{apply, precondition_holds, regress};

/// Lazily enumerate `(next_state, action)` for every applicable action.
pub fn successors<'a>(
    state: &'a State,
    catalog: &'a ActionCatalog,
    filter: Option<&'a RelevanceFilter>,
) -> impl Iterator<Item = (State, ActionId)> + 'a {
    catalog
        .iter()
        .filter(move |&(id, _)| filter.map_or(true, |f| f.admits(id)))
        .filter(move |(_, action)| precondition_holds(action, state))
        .map(move |(id, action)| (apply(action, state), id))
}

/// Lazily enumerate `(previous_state, action)` such that applying `action`
/// to `previous_state` yields `state`.
pub fn predecessors<'a>(
    state: &'a State,
    catalog: &'a ActionCatalog,
    filter: Option<&'a RelevanceFilter>,
) -> impl Iterator<Item = (State, ActionId)> + 'a {
    catalog
        .iter()
        .filter(move |&(id, _)| filter.map_or(true, |f| f.admits(id)))
        .filter_map(move |(id, action)| regress(action, state).map(|prev| (prev, id)))
}

/// Pre-expansion performance filter.
///
/// The relevant set is every proposition mentioned by the goal or by any
/// action, so it is built from the catalog itself. An action is admitted if
/// any precondition literal or any effect (add or delete) touches the
/// relevant set. Only actions that mention nothing at all (pure no-ops) are
/// ever rejected, and those cannot change a state, so reachability is
/// unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceFilter {
    relevant: BTreeSet<PropositionId>,
    admitted: Vec<bool>,
}

impl RelevanceFilter {
    /// Precompute the verdict for every action in `catalog`.
    #[must_use]
    pub fn new(catalog: &ActionCatalog, goal: &Goal) -> Self {
        let relevant = catalog.relevant_propositions(goal);
        let admitted = catalog
            .iter()
            .map(|(_, action)| Self::touches(action, &relevant))
            .collect();
        Self { relevant, admitted }
    }

    fn touches(action: &Action, relevant: &BTreeSet<PropositionId>) -> bool {
        action.mentioned().any(|p| relevant.contains(&p))
    }

    /// Whether the action at `id` passes the filter.
    #[must_use]
    pub fn admits(&self, id: ActionId) -> bool {
        self.admitted.get(id.0).copied().unwrap_or(false)
    }

    /// The relevant-proposition set.
    #[must_use]
    pub fn relevant(&self) -> &BTreeSet<PropositionId> {
        &self.relevant
    }

    /// Number of admitted actions.
    #[must_use]
    pub fn admitted_count(&self) -> usize {
        self.admitted.iter().filter(|&&a| a).count()
    }
}
