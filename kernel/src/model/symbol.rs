//! `SymbolTable`: the bijective proposition-name to [`PropositionId`] mapping.
//!
//! IDs are allocated densely from 1 on first sight. The table is
//! append-only: no name is ever removed and no ID is ever reused, so IDs
//! stay stable for the lifetime of a loaded instance.
//!
//! Each instance owns its table. Nothing here is process-global, so several
//! instances can be loaded and searched side by side.

use std::collections::BTreeMap;

use crate::model::literal::PropositionId;

/// Instance-owned proposition symbol table.
///
/// `names[i]` is the name of proposition `i + 1`. The reverse index is a
/// `BTreeMap` for deterministic iteration at serialization boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    names: Vec<String>,
    reverse: BTreeMap<String, PropositionId>,
}

impl SymbolTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the ID for `name`, allocating the next one on first sight.
    ///
    /// # Panics
    ///
    /// Panics if more than `i32::MAX` propositions are interned.
    pub fn intern(&mut self, name: &str) -> PropositionId {
        if let Some(&id) = self.reverse.get(name) {
            return id;
        }
        let next = u32::try_from(self.names.len() + 1)
            .ok()
            .and_then(PropositionId::new)
            .expect("proposition ID space exhausted");
        self.names.push(name.to_string());
        self.reverse.insert(name.to_string(), next);
        next
    }

    /// Look up the ID of an already-interned name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<PropositionId> {
        self.reverse.get(name).copied()
    }

    /// Resolve an ID back to its name.
    #[must_use]
    pub fn resolve(&self, id: PropositionId) -> Option<&str> {
        let index = usize::try_from(id.get()).ok()? - 1;
        self.names.get(index).map(String::as_str)
    }

    /// Number of interned propositions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no proposition has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(id, name)` pairs in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (PropositionId, &str)> {
        self.names.iter().enumerate().filter_map(|(i, name)| {
            let id = u32::try_from(i + 1).ok().and_then(PropositionId::new)?;
            Some((id, name.as_str()))
        })
    }
}
