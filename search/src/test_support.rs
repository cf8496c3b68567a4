//! Small hand-built tasks shared by the unit tests.

use strider_kernel::model::{Action, ActionCatalog, Goal, Literal, State, SymbolTable, Task};

/// Two blocks on the table; stack `a` on `b`.
pub(crate) fn two_block_task() -> Task {
    let mut symbols = SymbolTable::new();
    let on_a_b = symbols.intern("on_a_b");
    let clear_a = symbols.intern("clear_a");
    let clear_b = symbols.intern("clear_b");
    let ontable_a = symbols.intern("ontable_a");
    let ontable_b = symbols.intern("ontable_b");

    let catalog = ActionCatalog::new(vec![Action::new(
        "stack_a_on_b",
        vec![
            Literal::positive(clear_a),
            Literal::positive(clear_b),
            Literal::positive(ontable_a),
        ],
        vec![on_a_b],
        vec![ontable_a, clear_b],
    )]);
    Task::new(
        symbols,
        catalog,
        State::from_props([clear_a, clear_b, ontable_a, ontable_b]),
        Goal::new(vec![Literal::positive(on_a_b)]),
    )
}

/// A one-hot counter over positions `0..=target + 1`, starting at 0, goal
/// `target`. Every position has an `inc` action; with `shortcut`, a `jump`
/// of +2 is listed after the increments.
pub(crate) fn counter_task(target: usize, shortcut: bool) -> Task {
    let mut symbols = SymbolTable::new();
    let at: Vec<_> = (0..=target + 1)
        .map(|i| symbols.intern(&format!("at_{i}")))
        .collect();

    let mut catalog = ActionCatalog::default();
    for (i, pair) in at.windows(2).enumerate() {
        catalog.push(Action::new(
            format!("inc_{i}"),
            vec![Literal::positive(pair[0])],
            vec![pair[1]],
            vec![pair[0]],
        ));
    }
    if shortcut {
        for (i, triple) in at.windows(3).enumerate() {
            catalog.push(Action::new(
                format!("jump_{i}"),
                vec![Literal::positive(triple[0])],
                vec![triple[2]],
                vec![triple[0]],
            ));
        }
    }
    Task::new(
        symbols,
        catalog,
        State::from_props([at[0]]),
        Goal::new(vec![Literal::positive(at[target])]),
    )
}

/// Two states toggling back and forth; the goal proposition is never added.
pub(crate) fn unsolvable_task() -> Task {
    let mut symbols = SymbolTable::new();
    let left = symbols.intern("left");
    let right = symbols.intern("right");
    let prize = symbols.intern("prize");

    let catalog = ActionCatalog::new(vec![
        Action::new("go_right", vec![Literal::positive(left)], vec![right], vec![left]),
        Action::new("go_left", vec![Literal::positive(right)], vec![left], vec![right]),
    ]);
    Task::new(
        symbols,
        catalog,
        State::from_props([left]),
        Goal::new(vec![Literal::positive(prize)]),
    )
}

/// A light switch: the goal requires the light off, and `dark` on.
pub(crate) fn switch_task() -> Task {
    let mut symbols = SymbolTable::new();
    let light = symbols.intern("light");
    let dark = symbols.intern("dark");

    let catalog = ActionCatalog::new(vec![
        Action::new("switch_on", vec![Literal::negative(light)], vec![light], vec![dark]),
        Action::new("switch_off", vec![Literal::positive(light)], vec![dark], vec![light]),
    ]);
    Task::new(
        symbols,
        catalog,
        State::from_props([light]),
        Goal::new(vec![Literal::negative(light), Literal::positive(dark)]),
    )
}
