//! Model module: the immutable data of a loaded planning instance.
//!
//! Built once per instance by the loader, read-only during search.

pub mod action;
pub mod catalog;
pub mod goal;
pub mod literal;
pub mod state;
pub mod symbol;
pub mod task;

pub use action::Action;
pub use catalog::{ActionCatalog, ActionId};
pub use goal::Goal;
pub use literal::{Literal, PropositionId};
pub use state::State;
pub use symbol::SymbolTable;
pub use task::Task;
