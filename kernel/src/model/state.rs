//! `State`: the set of propositions currently true.
//!
//! Closed world: every proposition not present is false.
//!
//! # Representation
//!
//! A sorted, deduplicated `Vec<PropositionId>`. Sorting makes the
//! representation canonical, so derived `Eq`/`Hash`/`Ord` are set
//! semantics: two states are equal iff they hold the same propositions,
//! regardless of how they were built. Membership is a binary search.
//!
//! States are immutable values. Every transition builds a new `State`;
//! nothing mutates one in place after construction, so a state can sit in a
//! visited set and be shared by sibling branches at the same time.

use std::collections::BTreeSet;

use crate::model::literal::PropositionId;
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_STATE};

/// Canonical set of true propositions.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    props: Vec<PropositionId>,
}

impl State {
    /// The empty state (everything false).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a state from any collection of propositions.
    ///
    /// Duplicates collapse; order is irrelevant.
    #[must_use]
    pub fn from_props<I: IntoIterator<Item = PropositionId>>(props: I) -> Self {
        let mut props: Vec<PropositionId> = props.into_iter().collect();
        props.sort_unstable();
        props.dedup();
        Self { props }
    }

    /// Whether `prop` is true in this state.
    #[must_use]
    pub fn contains(&self, prop: PropositionId) -> bool {
        self.props.binary_search(&prop).is_ok()
    }

    /// Number of true propositions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether no proposition is true.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// True propositions in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = PropositionId> + '_ {
        self.props.iter().copied()
    }

    /// Build the state that results from removing `remove` and then adding
    /// `add`. Shared by forward application and predecessor regression.
    #[must_use]
    pub(crate) fn edited(&self, remove: &[PropositionId], add: &[PropositionId]) -> Self {
        let mut next: Vec<PropositionId> = self
            .props
            .iter()
            .copied()
            .filter(|p| !remove.contains(p))
            .collect();
        next.extend_from_slice(add);
        next.sort_unstable();
        next.dedup();
        Self { props: next }
    }

    /// The state restricted to `relevant` propositions.
    ///
    /// Used only by the relevant-projection dedup key. Two different states
    /// that differ only outside `relevant` project to the same value.
    #[must_use]
    pub fn project(&self, relevant: &BTreeSet<PropositionId>) -> Self {
        Self {
            props: self
                .props
                .iter()
                .copied()
                .filter(|p| relevant.contains(p))
                .collect(),
        }
    }

    /// Canonical bytes: little-endian `u32` per proposition, ascending.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.props.len() * 4);
        for p in &self.props {
            bytes.extend_from_slice(&p.to_le_bytes());
        }
        bytes
    }

    /// Domain-separated content hash of the canonical bytes.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_STATE, &self.canonical_bytes())
    }
}

impl FromIterator<PropositionId> for State {
    fn from_iter<I: IntoIterator<Item = PropositionId>>(iter: I) -> Self {
        Self::from_props(iter)
    }
}
