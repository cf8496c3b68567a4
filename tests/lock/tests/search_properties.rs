//! Cross-strategy properties checked against brute-force ground truth on
//! small blocks-world instances.

use std::collections::{HashMap, VecDeque};

use strider_harness::worlds::blocks::BlocksProblem;
use strider_harness::worlds::two_blocks::two_block_task;
use strider_kernel::model::{
    Action, ActionCatalog, Goal, Literal, PropositionId, State, SymbolTable, Task,
};
use strider_kernel::operators::apply::{apply, precondition_holds};
use strider_kernel::proof::replay::replay_to_goal;
use strider_search::{
    search, Direction, Estimate, GoalCount, Heuristic, HeuristicKind, SearchOutcome,
    SearchPolicy, StrategyKind, TerminationReason,
};

/// Distance from `start` to every reachable state, by plain layered
/// enumeration using only the kernel's state model.
fn distances(task: &Task, start: &State) -> HashMap<State, usize> {
    let mut dist = HashMap::from([(start.clone(), 0)]);
    let mut queue = VecDeque::from([start.clone()]);
    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        for (_, action) in task.catalog.iter() {
            if precondition_holds(action, &state) {
                let next = apply(action, &state);
                if !dist.contains_key(&next) {
                    dist.insert(next.clone(), d + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    dist
}

fn optimal_cost(task: &Task, start: &State) -> Option<usize> {
    distances(task, start)
        .into_iter()
        .filter(|(s, _)| task.goal.is_satisfied(s))
        .map(|(_, d)| d)
        .min()
}

fn instances() -> Vec<(&'static str, Task)> {
    vec![
        ("build_tower_3", BlocksProblem::build_tower(3).to_task().unwrap()),
        ("invert_tower_3", BlocksProblem::invert_tower(3).to_task().unwrap()),
        (
            "mixed_4",
            BlocksProblem::new(4, vec![vec![0, 2], vec![1, 3]], vec![vec![3, 2, 1, 0]])
                .unwrap()
                .to_task()
                .unwrap(),
        ),
    ]
}

/// Four lamps in a row. Lamp `i > 0` can only be switched on while lamp
/// `i - 1` is on; `reset` switches everything off. Goal: lamps 1 and 3 on.
///
/// Every action makes at most one goal literal true.
fn switchboard() -> Task {
    const LAMPS: usize = 4;
    let mut symbols = SymbolTable::new();
    let on: Vec<PropositionId> = (0..LAMPS).map(|i| symbols.intern(&format!("on_{i}"))).collect();
    let off: Vec<PropositionId> = (0..LAMPS).map(|i| symbols.intern(&format!("off_{i}"))).collect();

    let mut actions = Vec::new();
    for (i, (&lamp_on, &lamp_off)) in on.iter().zip(&off).enumerate() {
        let mut pre = vec![Literal::positive(lamp_off)];
        if let Some(&previous) = i.checked_sub(1).and_then(|j| on.get(j)) {
            pre.push(Literal::positive(previous));
        }
        actions.push(Action::new(format!("turn_on_{i}"), pre, vec![lamp_on], vec![lamp_off]));
        actions.push(Action::new(
            format!("turn_off_{i}"),
            vec![Literal::positive(lamp_on)],
            vec![lamp_off],
            vec![lamp_on],
        ));
    }
    actions.push(Action::new("reset", vec![], off.clone(), on.clone()));

    Task::new(
        symbols,
        ActionCatalog::new(actions),
        State::from_props(off.iter().copied()),
        Goal::new(vec![Literal::positive(on[1]), Literal::positive(on[3])]),
    )
}

/// Instances where no action makes more than one goal literal true.
fn single_goal_literal_instances() -> Vec<(&'static str, Task)> {
    vec![("switchboard", switchboard()), ("two_block", two_block_task())]
}

/// Most goal literals any single action can make true.
fn max_goal_literals_per_action(task: &Task) -> usize {
    task.catalog
        .iter()
        .map(|(_, action)| {
            task.goal
                .iter()
                .filter(|l| {
                    if l.is_positive() {
                        action.add().contains(&l.prop())
                    } else {
                        action.delete().contains(&l.prop())
                    }
                })
                .count()
        })
        .max()
        .unwrap_or(0)
}

fn cost(task: &Task, strategy: StrategyKind, policy: &SearchPolicy) -> Option<usize> {
    search(task, strategy, policy).unwrap().cost()
}

fn assert_replays(task: &Task, outcome: &SearchOutcome) {
    let plan = outcome.plan().expect("plan");
    replay_to_goal(&task.initial, &task.goal, &task.catalog, &plan.action_ids())
        .expect("plan replays to the goal");
}

// ---------------------------------------------------------------------------
// State model
// ---------------------------------------------------------------------------

#[test]
fn apply_changes_exactly_the_effects_on_every_reachable_state() {
    for (name, task) in [
        ("invert_tower_3", BlocksProblem::invert_tower(3).to_task().unwrap()),
        ("switchboard", switchboard()),
    ] {
        let reachable = distances(&task, &task.initial);
        assert!(reachable.len() > 10, "{name}");
        for state in reachable.keys() {
            for (_, action) in task.catalog.iter() {
                if !precondition_holds(action, state) {
                    continue;
                }
                let before = state.clone();
                let next = apply(action, state);

                assert_eq!(*state, before, "{name}: {} mutated its input", action.name());
                for &p in action.add() {
                    assert!(next.contains(p), "{name}: {} lost an add", action.name());
                }
                for &p in action.delete() {
                    assert_eq!(
                        next.contains(p),
                        action.add().contains(&p),
                        "{name}: {} kept a delete",
                        action.name()
                    );
                }
                let touched = |p: &PropositionId| action.add().contains(p) || action.delete().contains(p);
                let untouched_before: Vec<_> = state.iter().filter(|p| !touched(p)).collect();
                let untouched_after: Vec<_> = next.iter().filter(|p| !touched(p)).collect();
                assert_eq!(untouched_before, untouched_after, "{name}: {}", action.name());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// BFS optimality
// ---------------------------------------------------------------------------

#[test]
fn bfs_depth_equals_brute_force_optimum() {
    for (name, task) in instances() {
        let expected = optimal_cost(&task, &task.initial);
        assert!(expected.is_some(), "{name} should be solvable");
        assert_eq!(
            cost(&task, StrategyKind::Bfs, &SearchPolicy::default()),
            expected,
            "{name}"
        );
    }
}

#[test]
fn ids_matches_bfs() {
    for (name, task) in instances() {
        let policy = SearchPolicy::default();
        assert_eq!(
            cost(&task, StrategyKind::Ids, &policy),
            cost(&task, StrategyKind::Bfs, &policy),
            "{name}"
        );
    }
}

// ---------------------------------------------------------------------------
// Heuristics
// ---------------------------------------------------------------------------

#[test]
fn goal_count_is_admissible_when_actions_meet_one_goal_literal() {
    for (name, task) in single_goal_literal_instances() {
        assert_eq!(max_goal_literals_per_action(&task), 1, "{name}");
        for state in distances(&task, &task.initial).into_keys() {
            let Some(remaining) = optimal_cost(&task, &state) else {
                continue;
            };
            let Estimate::Finite(h) = GoalCount.estimate(&state, &task.goal) else {
                panic!("goal count is always finite");
            };
            assert!(h as usize <= remaining, "{name}: h={h} > h*={remaining}");
        }
    }
}

#[test]
fn goal_count_overestimates_in_blocks_world() {
    let task = BlocksProblem::invert_tower(3).to_task().unwrap();
    assert!(max_goal_literals_per_action(&task) > 1);
    let overestimated = distances(&task, &task.initial).into_keys().any(|state| {
        let remaining = optimal_cost(&task, &state);
        let h = GoalCount.estimate(&state, &task.goal).finite();
        matches!((h, remaining), (Some(h), Some(r)) if h as usize > r)
    });
    assert!(overestimated);
}

#[test]
fn astar_goal_count_matches_bfs_length() {
    for (name, task) in single_goal_literal_instances() {
        let policy = SearchPolicy::default().with_heuristic(HeuristicKind::GoalCount);
        assert_eq!(
            cost(&task, StrategyKind::AStar, &policy),
            cost(&task, StrategyKind::Bfs, &SearchPolicy::default()),
            "{name}"
        );
    }
}

#[test]
fn astar_goal_count_can_be_beaten_by_a_multi_literal_action() {
    // Three single-literal actions versus `get_key` then `unlock_all`.
    let mut symbols = SymbolTable::new();
    let goals: Vec<PropositionId> = ["g1", "g2", "g3"].iter().map(|n| symbols.intern(n)).collect();
    let key = symbols.intern("key");
    let mut actions: Vec<Action> = goals
        .iter()
        .enumerate()
        .map(|(i, &g)| Action::new(format!("set_g{}", i + 1), vec![], vec![g], vec![]))
        .collect();
    actions.push(Action::new("get_key", vec![], vec![key], vec![]));
    actions.push(Action::new(
        "unlock_all",
        vec![Literal::positive(key)],
        goals.clone(),
        vec![],
    ));
    let task = Task::new(
        symbols,
        ActionCatalog::new(actions),
        State::empty(),
        goals.iter().map(|&g| Literal::positive(g)).collect(),
    );

    let bfs = cost(&task, StrategyKind::Bfs, &SearchPolicy::default());
    assert_eq!(bfs, Some(2));
    assert_eq!(bfs, optimal_cost(&task, &task.initial));

    let outcome = search(&task, StrategyKind::AStar, &SearchPolicy::default()).unwrap();
    assert_replays(&task, &outcome);
    assert_eq!(outcome.cost(), Some(3));
}

#[test]
fn astar_h_add_plan_is_valid_but_possibly_longer() {
    for (name, task) in instances() {
        let policy = SearchPolicy::default().with_heuristic(HeuristicKind::HAdd);
        let outcome = search(&task, StrategyKind::AStar, &policy).unwrap();
        assert_eq!(outcome.termination(), TerminationReason::GoalReached, "{name}");
        assert_replays(&task, &outcome);
        let optimum = optimal_cost(&task, &task.initial).unwrap();
        assert!(outcome.cost().unwrap() >= optimum, "{name}");
    }
}

// ---------------------------------------------------------------------------
// Depth-limited search
// ---------------------------------------------------------------------------

#[test]
fn dls_at_optimal_depth_succeeds_and_below_cuts_off() {
    for (name, task) in instances() {
        let optimum = u32::try_from(optimal_cost(&task, &task.initial).unwrap()).unwrap();
        let at = SearchPolicy::default().with_depth_limit(optimum);
        let outcome = search(&task, StrategyKind::Dls, &at).unwrap();
        assert_eq!(outcome.termination(), TerminationReason::GoalReached, "{name}");
        assert_replays(&task, &outcome);

        let below = SearchPolicy::default().with_depth_limit(optimum - 1);
        let outcome = search(&task, StrategyKind::Dls, &below).unwrap();
        assert_eq!(outcome.termination(), TerminationReason::DepthCutoff, "{name}");
    }
}

// ---------------------------------------------------------------------------
// Bidirectional
// ---------------------------------------------------------------------------

#[test]
fn bidirectional_plans_replay_to_goal() {
    for (name, task) in instances() {
        let outcome = search(&task, StrategyKind::Bidirectional, &SearchPolicy::default()).unwrap();
        assert_eq!(outcome.termination(), TerminationReason::GoalReached, "{name}");
        assert_replays(&task, &outcome);
    }
}

#[test]
fn bidirectional_backward_segment_replays_from_meeting_state() {
    for (name, task) in instances() {
        let SearchOutcome::Bidirectional(result) =
            search(&task, StrategyKind::Bidirectional, &SearchPolicy::default()).unwrap()
        else {
            panic!("bidirectional returns its own result shape");
        };
        let plan = result.plan.as_ref().unwrap();
        let mut state = result.meeting_state.clone().unwrap();
        for step in plan.steps() {
            if step.direction != Direction::Reversed {
                continue;
            }
            let action = task.catalog.get(step.action).unwrap();
            assert!(precondition_holds(action, &state), "{name}: {}", action.name());
            state = apply(action, &state);
        }
        assert!(task.goal.is_satisfied(&state), "{name}");
        assert_eq!(Some(state), result.final_state, "{name}");
    }
}

// ---------------------------------------------------------------------------
// Relevance filter
// ---------------------------------------------------------------------------

#[test]
fn relevance_filter_never_changes_costs() {
    for (name, task) in instances() {
        let filtered = SearchPolicy {
            relevance_filter: true,
            ..SearchPolicy::default()
        };
        for strategy in [StrategyKind::Bfs, StrategyKind::AStar, StrategyKind::Bidirectional] {
            assert_eq!(
                cost(&task, strategy, &filtered),
                cost(&task, strategy, &SearchPolicy::default()),
                "{name} {strategy}"
            );
        }
    }
}
