//! Grounded blocks world.
//!
//! Propositions: `on_x_y`, `ontable_x`, `clear_x`, `holding_x`, `handempty`.
//! Actions per block: `pickup_x`, `putdown_x`; per ordered pair of distinct
//! blocks: `stack_x_y`, `unstack_x_y`. Stacks are listed bottom to top.
//!
//! Goals pin the whole arrangement and an empty hand, so the goal's positive
//! literals form a complete state.

use std::fmt::Write as _;

use strider_kernel::model::Task;

use crate::loader::{parse_instance, LoadError};

/// A blocks-world problem over `block_count` blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocksProblem {
    names: Vec<String>,
    initial: Vec<Vec<usize>>,
    goal: Vec<Vec<usize>>,
}

fn block_name(i: usize) -> String {
    match u8::try_from(i) {
        Ok(i) if i < 26 => char::from(b'a' + i).to_string(),
        _ => format!("b{i}"),
    }
}

/// Whether `stacks` place every block in `0..count` exactly once.
fn is_arrangement(count: usize, stacks: &[Vec<usize>]) -> bool {
    let mut seen = vec![false; count];
    for &block in stacks.iter().flatten() {
        match seen.get_mut(block) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    seen.into_iter().all(|s| s)
}

impl BlocksProblem {
    /// A problem from explicit arrangements. Empty stacks are ignored.
    ///
    /// Returns `None` unless both arrangements place every block exactly once.
    #[must_use]
    pub fn new(
        block_count: usize,
        initial: Vec<Vec<usize>>,
        goal: Vec<Vec<usize>>,
    ) -> Option<Self> {
        if !is_arrangement(block_count, &initial) || !is_arrangement(block_count, &goal) {
            return None;
        }
        Some(Self {
            names: (0..block_count).map(block_name).collect(),
            initial: initial.into_iter().filter(|s| !s.is_empty()).collect(),
            goal: goal.into_iter().filter(|s| !s.is_empty()).collect(),
        })
    }

    /// Every block on the table; goal is one tower, `a` at the bottom.
    #[must_use]
    pub fn build_tower(block_count: usize) -> Self {
        Self {
            names: (0..block_count).map(block_name).collect(),
            initial: (0..block_count).map(|b| vec![b]).collect(),
            goal: vec![(0..block_count).collect()],
        }
    }

    /// One tower, `a` at the bottom; goal is the same tower upside down.
    #[must_use]
    pub fn invert_tower(block_count: usize) -> Self {
        Self {
            names: (0..block_count).map(block_name).collect(),
            initial: vec![(0..block_count).collect()],
            goal: vec![(0..block_count).rev().collect()],
        }
    }

    #[must_use]
    pub fn block_count(&self) -> usize {
        self.names.len()
    }

    fn arrangement_facts(&self, stacks: &[Vec<usize>]) -> Vec<String> {
        let mut facts = Vec::new();
        for stack in stacks {
            let (Some(&bottom), Some(&top)) = (stack.first(), stack.last()) else {
                continue;
            };
            facts.push(format!("ontable_{}", self.names[bottom]));
            for pair in stack.windows(2) {
                facts.push(format!("on_{}_{}", self.names[pair[1]], self.names[pair[0]]));
            }
            facts.push(format!("clear_{}", self.names[top]));
        }
        facts
    }

    /// The problem in instance-file form.
    #[must_use]
    pub fn to_instance_text(&self) -> String {
        let mut out = String::new();
        let mut action = |name: String, pre: &[String], eff: &[String]| {
            let _ = writeln!(out, "{name}\n{}\n{}", pre.join(";"), eff.join(";"));
        };

        for x in &self.names {
            action(
                format!("pickup_{x}"),
                &[format!("clear_{x}"), format!("ontable_{x}"), "handempty".into()],
                &[
                    format!("holding_{x}"),
                    format!("~clear_{x}"),
                    format!("~ontable_{x}"),
                    "~handempty".into(),
                ],
            );
            action(
                format!("putdown_{x}"),
                &[format!("holding_{x}")],
                &[
                    format!("ontable_{x}"),
                    format!("clear_{x}"),
                    "handempty".into(),
                    format!("~holding_{x}"),
                ],
            );
        }
        for x in &self.names {
            for y in self.names.iter().filter(|y| *y != x) {
                action(
                    format!("stack_{x}_{y}"),
                    &[format!("holding_{x}"), format!("clear_{y}")],
                    &[
                        format!("on_{x}_{y}"),
                        format!("clear_{x}"),
                        "handempty".into(),
                        format!("~holding_{x}"),
                        format!("~clear_{y}"),
                    ],
                );
                action(
                    format!("unstack_{x}_{y}"),
                    &[format!("on_{x}_{y}"), format!("clear_{x}"), "handempty".into()],
                    &[
                        format!("holding_{x}"),
                        format!("clear_{y}"),
                        format!("~on_{x}_{y}"),
                        format!("~clear_{x}"),
                        "~handempty".into(),
                    ],
                );
            }
        }

        let mut initial = self.arrangement_facts(&self.initial);
        initial.push("handempty".into());
        let mut goal = self.arrangement_facts(&self.goal);
        goal.push("handempty".into());
        let _ = writeln!(out, "{}\n{}", initial.join(";"), goal.join(";"));
        out
    }

    /// Load the problem as a [`Task`].
    ///
    /// # Errors
    ///
    /// Propagates [`LoadError`] from the loader.
    pub fn to_task(&self) -> Result<Task, LoadError> {
        parse_instance(&self.to_instance_text())
    }
}
