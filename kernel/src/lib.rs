//! Strider Kernel: the propositional STRIPS core.
//!
//! # API Surface
//!
//! - [`model`] -- symbol table, literals, states, actions, goals, tasks
//! - [`operators::apply`] -- precondition test, effect application, goal test,
//!   predecessor regression
//! - [`operators::successor`] -- lazy successor/predecessor enumeration and
//!   the relevance filter
//! - [`proof::replay`] -- verify a plan by deterministic replay
//!
//! # Module Dependency Direction
//!
//! `model` ← `operators` ← `proof`
//!
//! One-way only. `proof` depends on `operators` and `model`.
//! `operators` depends on `model`. `model` depends on nothing internal
//! except `proof::hash` for state fingerprints.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod model;
pub mod operators;
pub mod proof;

pub use error::ModelError;
pub use proof::replay::ReplayError;
