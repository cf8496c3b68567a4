//! Plain-text rendering of search results.
//!
//! Everything here returns a `String`; writing it anywhere is the caller's
//! business.

use std::fmt::Write as _;
use std::rc::Rc;

use strider_kernel::model::Task;
use strider_search::SearchNode;

use crate::runner::RunReport;

/// Plans longer than this are summarized instead of listed in comparisons.
pub const MAX_LISTED_PLAN: usize = 25;

/// Walk from the root to `node`, one state per line, actions in between.
///
/// ```text
/// State 0: clear_a, clear_b, ontable_a, ontable_b
/// Action: stack_a_on_b
/// State 1: on_a_b, clear_a, ontable_b
/// ```
#[must_use]
pub fn render_tree(task: &Task, node: &Rc<SearchNode>) -> String {
    let mut out = String::new();
    for (k, step) in SearchNode::path(node).iter().enumerate() {
        if let Some(id) = step.action() {
            let name = task
                .catalog
                .get(id)
                .map_or_else(|| format!("#{}", id.0), |a| a.name().to_string());
            let _ = writeln!(out, "Action: {name}");
        }
        let _ = writeln!(out, "State {k}: {}", task.state_names(step.state()).join(", "));
    }
    out
}

/// Numbered action list, one per line.
#[must_use]
pub fn render_plan(plan: &[String]) -> String {
    let mut out = String::new();
    for (i, name) in plan.iter().enumerate() {
        let _ = writeln!(out, "   {:3}. {name}", i + 1);
    }
    out
}

/// Side-by-side summary of several runs: strategy, cost, nodes expanded,
/// and the plan when it is short enough to list.
#[must_use]
pub fn render_comparison(reports: &[RunReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let cost = report
            .cost()
            .map_or_else(|| "none".to_string(), |c| c.to_string());
        let _ = writeln!(
            out,
            "{:15} | cost: {cost:>4} | nodes: {:>7}",
            report.strategy().as_str(),
            report.nodes_expanded()
        );
        if report.cost().is_some_and(|c| c <= MAX_LISTED_PLAN) {
            out.push_str(&render_plan(report.plan()));
        }
        out.push_str(&"-".repeat(70));
        out.push('\n');
    }
    out
}
