//! Search policy and strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::heuristic::HeuristicKind;

/// The five search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Bfs,
    Dls,
    Ids,
    #[serde(alias = "a*")]
    AStar,
    Bidirectional,
}

impl StrategyKind {
    /// Every strategy, in the canonical comparison order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Bfs,
        StrategyKind::Dls,
        StrategyKind::Ids,
        StrategyKind::AStar,
        StrategyKind::Bidirectional,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dls => "dls",
            Self::Ids => "ids",
            Self::AStar => "astar",
            Self::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dls" => Ok(Self::Dls),
            "ids" => Ok(Self::Ids),
            "astar" | "a*" => Ok(Self::AStar),
            "bidirectional" => Ok(Self::Bidirectional),
            _ => Err(SearchError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Key used by A* for its best-g table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupKey {
    /// The full state. Exact.
    #[default]
    FullState,
    /// The state intersected with the relevant-proposition set. States that
    /// differ only in irrelevant propositions share one entry, so this is an
    /// approximation. A* only.
    RelevantProjection,
}

/// Search budget, bounds, and option selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Depth bound for DLS. Required when DLS is selected.
    pub depth_limit: Option<u32>,
    /// Largest limit IDS tries before giving up.
    pub max_depth: u32,
    /// Hard cap on node expansions, checked once per pop.
    pub max_expansions: Option<u64>,
    /// Heuristic for A*.
    pub heuristic: HeuristicKind,
    /// Apply the relevance filter before expansion.
    pub relevance_filter: bool,
    /// A* best-g table key.
    pub dedup_key: DedupKey,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            depth_limit: None,
            max_depth: 50,
            max_expansions: None,
            heuristic: HeuristicKind::GoalCount,
            relevance_filter: false,
            dedup_key: DedupKey::FullState,
        }
    }
}

impl SearchPolicy {
    /// Check that the policy's options make sense for `strategy`.
    ///
    /// The DLS depth limit is not checked here; [`crate::search()`]
    /// requires it when dispatching.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the relevant-projection
    /// dedup key is selected for any strategy other than A*.
    pub fn validate_for(&self, strategy: StrategyKind) -> Result<(), SearchError> {
        if self.dedup_key == DedupKey::RelevantProjection && strategy != StrategyKind::AStar {
            return Err(SearchError::InvalidPolicy {
                detail: format!("dedup_key relevant_projection is only supported by astar, not {strategy}"),
            });
        }
        Ok(())
    }

    /// Builder-style depth limit.
    #[must_use]
    pub fn with_depth_limit(mut self, limit: u32) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    /// Builder-style heuristic selection.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Builder-style expansion budget.
    #[must_use]
    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }
}
