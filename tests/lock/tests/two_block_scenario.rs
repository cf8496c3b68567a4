//! End-to-end two-block scenario: loader, state model, heuristic, and every
//! strategy agree on the one-action plan.

use std::io::Write as _;

use strider_harness::config::RunConfig;
use strider_harness::runner::{run, run_file, Verification};
use strider_harness::worlds::two_blocks::{two_block_task, TWO_BLOCK_INSTANCE};
use strider_kernel::model::{ActionId, PropositionId, State};
use strider_kernel::operators::apply::{apply, precondition_holds};
use strider_search::{Estimate, GoalCount, Heuristic, SearchPolicy, StrategyKind};

fn ids(raw: &[u32]) -> State {
    raw.iter()
        .map(|&r| PropositionId::new(r).unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// State model
// ---------------------------------------------------------------------------

#[test]
fn applying_stack_yields_exact_state() {
    let task = two_block_task();
    assert_eq!(task.initial, ids(&[2, 3, 4, 5]));
    let stack = task.catalog.get(ActionId(0)).unwrap();
    assert!(precondition_holds(stack, &task.initial));
    assert_eq!(apply(stack, &task.initial), ids(&[1, 2, 5]));
    // Input untouched.
    assert_eq!(task.initial, ids(&[2, 3, 4, 5]));
}

#[test]
fn goal_count_of_initial_state_is_one() {
    let task = two_block_task();
    assert_eq!(
        GoalCount.estimate(&task.initial, &task.goal),
        Estimate::Finite(1)
    );
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

#[test]
fn bfs_finds_single_action_plan() {
    let task = two_block_task();
    let report = run(&task, &RunConfig::new(StrategyKind::Bfs)).unwrap();
    assert_eq!(report.plan().to_vec(), vec!["stack_a_on_b".to_string()]);
    assert_eq!(report.verification, Verification::Verified);
}

#[test]
fn every_strategy_agrees() {
    let task = two_block_task();
    for strategy in StrategyKind::ALL {
        let policy = SearchPolicy::default().with_depth_limit(1);
        let report = run(&task, &RunConfig::new(strategy).with_policy(policy)).unwrap();
        assert_eq!(report.cost(), Some(1), "{strategy}");
        assert_eq!(
            report.plan().to_vec(),
            vec!["stack_a_on_b".to_string()],
            "{strategy}"
        );
    }
}

// ---------------------------------------------------------------------------
// From disk
// ---------------------------------------------------------------------------

#[test]
fn instance_file_runs_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_BLOCK_INSTANCE.as_bytes()).unwrap();

    let report = run_file(file.path(), &RunConfig::new(StrategyKind::AStar)).unwrap();
    assert_eq!(report.cost(), Some(1));
    assert_eq!(report.plan().to_vec(), vec!["stack_a_on_b".to_string()]);
}

#[test]
fn goal_fingerprint_matches_applied_state() {
    let task = two_block_task();
    let report = run(&task, &RunConfig::new(StrategyKind::Bfs)).unwrap();
    let expected = ids(&[1, 2, 5]).fingerprint();
    assert_eq!(
        report.summary.goal_fingerprint.as_deref(),
        Some(expected.as_str())
    );
    assert_eq!(
        report.summary.root_fingerprint,
        task.initial.fingerprint().to_string()
    );
}
