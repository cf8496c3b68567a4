//! An exhausted expansion budget is an abort, distinct from "no solution".

use strider_harness::config::RunConfig;
use strider_harness::runner::{run, Verification};
use strider_harness::worlds::blocks::BlocksProblem;
use strider_kernel::model::{Action, ActionCatalog, Goal, Literal, State, SymbolTable, Task};
use strider_search::{search, SearchPolicy, StrategyKind, TerminationReason};

fn unsolvable() -> Task {
    let mut symbols = SymbolTable::new();
    let off = symbols.intern("off");
    let on = symbols.intern("on");
    let never = symbols.intern("never");
    let catalog = ActionCatalog::new(vec![
        Action::new("flip_on", vec![Literal::positive(off)], vec![on], vec![off]),
        Action::new("flip_off", vec![Literal::positive(on)], vec![off], vec![on]),
    ]);
    Task::new(
        symbols,
        catalog,
        State::from_props([off]),
        Goal::new(vec![Literal::positive(never)]),
    )
}

#[test]
fn tiny_budget_aborts_every_strategy() {
    let task = BlocksProblem::invert_tower(4).to_task().unwrap();
    let policy = SearchPolicy::default()
        .with_depth_limit(20)
        .with_max_expansions(3);
    for strategy in StrategyKind::ALL {
        let outcome = search(&task, strategy, &policy).unwrap();
        assert_eq!(
            outcome.termination(),
            TerminationReason::ExpansionBudgetExceeded,
            "{strategy}"
        );
        assert!(outcome.plan().is_none(), "{strategy}");
        assert!(outcome.stats().expansions <= 3, "{strategy}");
    }
}

#[test]
fn exhausted_space_is_not_an_abort() {
    let task = unsolvable();
    let policy = SearchPolicy::default()
        .with_depth_limit(10)
        .with_max_expansions(1_000);
    for strategy in StrategyKind::ALL {
        let outcome = search(&task, strategy, &policy).unwrap();
        assert_eq!(
            outcome.termination(),
            TerminationReason::FrontierExhausted,
            "{strategy}"
        );
    }
}

#[test]
fn aborted_run_reports_no_plan() {
    let task = BlocksProblem::invert_tower(4).to_task().unwrap();
    let config =
        RunConfig::new(StrategyKind::Bfs).with_policy(SearchPolicy::default().with_max_expansions(2));
    let report = run(&task, &config).unwrap();
    assert_eq!(report.cost(), None);
    assert_eq!(report.verification, Verification::NoPlan);
    assert_eq!(
        report.summary.termination,
        TerminationReason::ExpansionBudgetExceeded
    );
}
