//! Strider Search: uninformed and heuristic state-space search over STRIPS
//! tasks.
//!
//! This crate provides the search layer. It depends only on
//! `strider_kernel`; it does NOT depend on `strider_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! strider_kernel  ←  strider_search  ←  strider_harness
//! (model, apply)     (strategies)        (loader, runner, worlds)
//! ```
//!
//! # Key types
//!
//! - [`search()`] -- single entry point dispatching on [`StrategyKind`]
//! - [`SearchNode`] -- tree node with a shared parent chain
//! - [`Plan`] -- action sequence with per-step direction tags
//! - [`SearchPolicy`] -- budgets, bounds, heuristic and dedup selection
//! - [`Heuristic`] -- trait for state evaluation ([`GoalCount`], [`AdditiveCost`])
//! - [`SearchReport`] -- serializable run summary

#![forbid(unsafe_code)]

pub mod astar;
pub mod bfs;
pub mod bidirectional;
pub mod depth_limited;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
pub mod space;

#[cfg(test)]
mod test_support;

pub use bidirectional::BidirectionalResult;
pub use error::SearchError;
pub use heuristic::{AdditiveCost, Estimate, GoalCount, Heuristic, HeuristicKind};
pub use node::{Direction, Plan, PlanStep, SearchNode};
pub use policy::{DedupKey, SearchPolicy, StrategyKind};
pub use report::{SearchReport, SearchStats, TerminationReason};
pub use search::{search, SearchOutcome, SearchResult};
pub use space::SearchSpace;
