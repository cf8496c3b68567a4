//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, depth cutoff, budget exhaustion) are
//! expressed via [`crate::report::TerminationReason`] on the result. "No
//! solution" is an outcome, never an error.

use thiserror::Error;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No node is
/// expanded when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Depth-limited search was selected without a depth limit.
    #[error("depth-limited search requires a depth limit")]
    MissingDepthLimit,
    /// The strategy selector did not name a known strategy.
    #[error("unknown search strategy: {name}")]
    UnknownStrategy { name: String },
    /// The heuristic selector did not name a known heuristic.
    #[error("unknown heuristic: {name}")]
    UnknownHeuristic { name: String },
    /// The policy combines options the selected strategy does not support.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
