//! `Action`: a grounded STRIPS operator.
//!
//! Two effect encodings exist in the wild:
//!
//! - separate add / delete proposition lists (the stored form), and
//! - a single signed-literal effect list (`e > 0` adds, `e < 0` deletes).
//!
//! They are equivalent; [`Action::from_signed_effects`] and
//! [`Action::signed_effects`] translate between them.
//!
//! # Effect order
//!
//! Application removes delete effects first and then inserts add effects.
//! An action that both deletes and adds the same proposition therefore
//! leaves it true.

use crate::model::literal::{Literal, PropositionId};

/// A named state transformer with signed preconditions and add/delete effects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    name: String,
    precondition: Vec<Literal>,
    add: Vec<PropositionId>,
    delete: Vec<PropositionId>,
}

impl Action {
    /// Build an action from the add/delete encoding.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        precondition: Vec<Literal>,
        add: Vec<PropositionId>,
        delete: Vec<PropositionId>,
    ) -> Self {
        Self {
            name: name.into(),
            precondition,
            add,
            delete,
        }
    }

    /// Build an action from the signed-effect encoding.
    #[must_use]
    pub fn from_signed_effects(
        name: impl Into<String>,
        precondition: Vec<Literal>,
        effects: &[Literal],
    ) -> Self {
        let (add, delete) = split_effects(effects);
        Self::new(name, precondition, add, delete)
    }

    /// The action name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signed precondition literals.
    #[must_use]
    pub fn precondition(&self) -> &[Literal] {
        &self.precondition
    }

    /// Propositions made true.
    #[must_use]
    pub fn add(&self) -> &[PropositionId] {
        &self.add
    }

    /// Propositions made false.
    #[must_use]
    pub fn delete(&self) -> &[PropositionId] {
        &self.delete
    }

    /// Effects in the signed-literal encoding: adds first, then deletes.
    #[must_use]
    pub fn signed_effects(&self) -> Vec<Literal> {
        self.add
            .iter()
            .map(|&p| Literal::positive(p))
            .chain(self.delete.iter().map(|&p| Literal::negative(p)))
            .collect()
    }

    /// Whether the action neither requires nor changes anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.precondition.is_empty() && self.add.is_empty() && self.delete.is_empty()
    }

    /// Every proposition the action mentions, by absolute value.
    pub fn mentioned(&self) -> impl Iterator<Item = PropositionId> + '_ {
        self.precondition
            .iter()
            .map(|l| l.prop())
            .chain(self.add.iter().copied())
            .chain(self.delete.iter().copied())
    }
}

/// Split signed effects into `(add, delete)`.
#[must_use]
pub fn split_effects(effects: &[Literal]) -> (Vec<PropositionId>, Vec<PropositionId>) {
    let mut add = Vec::new();
    let mut delete = Vec::new();
    for e in effects {
        if e.is_positive() {
            add.push(e.prop());
        } else {
            delete.push(e.prop());
        }
    }
    (add, delete)
}
