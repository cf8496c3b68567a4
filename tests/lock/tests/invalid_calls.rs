//! Invalid calls fail fast, before any node is expanded, and are distinct
//! from "no solution".

use strider_harness::config::{ConfigError, RunConfig};
use strider_harness::runner::{run, RunError};
use strider_harness::worlds::two_blocks::two_block_task;
use strider_search::{
    search, DedupKey, HeuristicKind, SearchError, SearchPolicy, StrategyKind,
};

#[test]
fn dls_without_limit() {
    let task = two_block_task();
    let err = search(&task, StrategyKind::Dls, &SearchPolicy::default()).unwrap_err();
    assert_eq!(err, SearchError::MissingDepthLimit);

    let err = run(&task, &RunConfig::new(StrategyKind::Dls)).unwrap_err();
    assert!(matches!(err, RunError::Search(SearchError::MissingDepthLimit)));
}

#[test]
fn unknown_strategy_selector() {
    let err = "greedy".parse::<StrategyKind>().unwrap_err();
    assert_eq!(
        err,
        SearchError::UnknownStrategy {
            name: "greedy".into()
        }
    );
    let err = RunConfig::from_json_str(r#"{"strategy": "greedy"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_heuristic_selector() {
    let err = "manhattan".parse::<HeuristicKind>().unwrap_err();
    assert!(matches!(err, SearchError::UnknownHeuristic { .. }));
}

#[test]
fn projection_key_outside_astar() {
    let task = two_block_task();
    let policy = SearchPolicy {
        dedup_key: DedupKey::RelevantProjection,
        ..SearchPolicy::default()
    };
    for strategy in [StrategyKind::Bfs, StrategyKind::Ids, StrategyKind::Bidirectional] {
        let err = search(&task, strategy, &policy).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPolicy { .. }), "{strategy}");
    }
    assert!(search(&task, StrategyKind::AStar, &policy).is_ok());
}
