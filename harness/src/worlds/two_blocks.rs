//! The two-block scenario: both blocks on the table, stack `a` on `b`.

use strider_kernel::model::{Action, ActionCatalog, Goal, Literal, State, SymbolTable, Task};

/// The scenario as instance text.
pub const TWO_BLOCK_INSTANCE: &str = "\
stack_a_on_b
clear_a;clear_b;ontable_a
on_a_b;~ontable_a;~clear_b
clear_a;clear_b;ontable_a;ontable_b
on_a_b
";

/// The scenario with fixed proposition IDs: `on_a_b = 1`, `clear_a = 2`,
/// `clear_b = 3`, `ontable_a = 4`, `ontable_b = 5`.
#[must_use]
pub fn two_block_task() -> Task {
    let mut symbols = SymbolTable::new();
    let on_a_b = symbols.intern("on_a_b");
    let clear_a = symbols.intern("clear_a");
    let clear_b = symbols.intern("clear_b");
    let ontable_a = symbols.intern("ontable_a");
    let ontable_b = symbols.intern("ontable_b");

    let stack = Action::new(
        "stack_a_on_b",
        vec![
            Literal::positive(clear_a),
            Literal::positive(clear_b),
            Literal::positive(ontable_a),
        ],
        vec![on_a_b],
        vec![ontable_a, clear_b],
    );
    Task::new(
        symbols,
        ActionCatalog::new(vec![stack]),
        State::from_props([clear_a, clear_b, ontable_a, ontable_b]),
        Goal::new(vec![Literal::positive(on_a_b)]),
    )
}
