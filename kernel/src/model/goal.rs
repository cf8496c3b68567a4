//! `Goal`: a partial state specification as signed literals.
//!
//! A state satisfies the goal iff every positive literal's proposition is
//! present and every negative literal's proposition is absent. Literal
//! order is irrelevant to satisfaction.

use crate::model::literal::Literal;
use crate::model::state::State;

/// Signed-literal goal condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Goal {
    literals: Vec<Literal>,
}

impl Goal {
    /// Build a goal from literals (kept in the given order).
    #[must_use]
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    /// Whether `literal` holds in `state`.
    #[must_use]
    pub fn literal_holds(literal: Literal, state: &State) -> bool {
        state.contains(literal.prop()) == literal.is_positive()
    }

    /// Whether `state` satisfies every literal. Stops at the first unmet one.
    #[must_use]
    pub fn is_satisfied(&self, state: &State) -> bool {
        self.literals.iter().all(|&l| Self::literal_holds(l, state))
    }

    /// Number of literals `state` does not satisfy.
    #[must_use]
    pub fn unmet_count(&self, state: &State) -> usize {
        self.literals
            .iter()
            .filter(|&&l| !Self::literal_holds(l, state))
            .count()
    }

    /// The single concrete witness state used as the backward root in
    /// bidirectional search: exactly the positive literals.
    ///
    /// When the goal is partial this is one of possibly many satisfying
    /// states (the smallest one).
    #[must_use]
    pub fn witness(&self) -> State {
        self.literals
            .iter()
            .filter(|l| l.is_positive())
            .map(|l| l.prop())
            .collect()
    }

    /// Goal literals in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    /// Number of literals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether the goal is trivially satisfied by every state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl FromIterator<Literal> for Goal {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
