//! Operators module: the state model and successor generation.
//!
//! Depends on `model`. Does not import from `proof`.

pub mod apply;
pub mod successor;
