//! `SearchSpace`: the read-only view of a task every strategy expands.

use std::collections::BTreeSet;

use strider_kernel::model::{ActionCatalog, ActionId, Goal, PropositionId, State, Task};
use strider_kernel::operators::successor::{predecessors, successors, RelevanceFilter};

/// A task plus the optional relevance filter.
///
/// Borrowed for the duration of one search run; the task itself is never
/// mutated, so the same task can back many concurrent runs.
#[derive(Debug)]
pub struct SearchSpace<'a> {
    task: &'a Task,
    filter: Option<RelevanceFilter>,
}

impl<'a> SearchSpace<'a> {
    /// Wrap `task`, precomputing the relevance filter when requested.
    #[must_use]
    pub fn new(task: &'a Task, relevance_filter: bool) -> Self {
        let filter =
            relevance_filter.then(|| RelevanceFilter::new(&task.catalog, &task.goal));
        Self { task, filter }
    }

    #[must_use]
    pub fn task(&self) -> &'a Task {
        self.task
    }

    #[must_use]
    pub fn initial(&self) -> &'a State {
        &self.task.initial
    }

    #[must_use]
    pub fn goal(&self) -> &'a Goal {
        &self.task.goal
    }

    #[must_use]
    pub fn catalog(&self) -> &'a ActionCatalog {
        &self.task.catalog
    }

    /// Goal test.
    #[must_use]
    pub fn is_goal(&self, state: &State) -> bool {
        self.task.goal.is_satisfied(state)
    }

    /// Applicable successors of `state`, in catalog order.
    pub fn successors<'s>(
        &'s self,
        state: &'s State,
    ) -> impl Iterator<Item = (State, ActionId)> + 's {
        successors(state, &self.task.catalog, self.filter.as_ref())
    }

    /// Regressed predecessors of `state`, in catalog order.
    pub fn predecessors<'s>(
        &'s self,
        state: &'s State,
    ) -> impl Iterator<Item = (State, ActionId)> + 's {
        predecessors(state, &self.task.catalog, self.filter.as_ref())
    }

    /// Propositions mentioned by the goal or any action.
    #[must_use]
    pub fn relevant_propositions(&self) -> BTreeSet<PropositionId> {
        self.filter.as_ref().map_or_else(
            || self.task.catalog.relevant_propositions(&self.task.goal),
            |f| f.relevant().clone(),
        )
    }
}
