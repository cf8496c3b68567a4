//! `Task`: one loaded planning instance.

use crate::model::catalog::ActionCatalog;
use crate::model::goal::Goal;
use crate::model::state::State;
use crate::model::symbol::SymbolTable;

/// Everything the search layer consumes: initial state, goal, and action
/// catalog, plus the symbol table presentation code needs to resolve IDs
/// back to names.
///
/// Immutable once built. Contains no interior mutability, so a `&Task` can
/// be shared across concurrent searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub symbols: SymbolTable,
    pub catalog: ActionCatalog,
    pub initial: State,
    pub goal: Goal,
}

impl Task {
    /// Bundle the parts of a loaded instance.
    #[must_use]
    pub fn new(symbols: SymbolTable, catalog: ActionCatalog, initial: State, goal: Goal) -> Self {
        Self {
            symbols,
            catalog,
            initial,
            goal,
        }
    }

    /// Proposition names of `state`, in ID order. Unknown IDs render as `#id`.
    #[must_use]
    pub fn state_names(&self, state: &State) -> Vec<String> {
        state
            .iter()
            .map(|p| {
                self.symbols
                    .resolve(p)
                    .map_or_else(|| format!("#{p}"), str::to_string)
            })
            .collect()
    }
}
