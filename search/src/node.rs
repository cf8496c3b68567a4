//! Search nodes, plans, and path reconstruction.
//!
//! Nodes form a tree through `Rc` parent links. Every child holds a shared
//! reference to its parent chain; a chain is reclaimed once no live node or
//! result refers to it. Nodes carrying equal states are never merged, since
//! each one stands for a distinct path.

use std::rc::Rc;

use serde::Serialize;
use strider_kernel::model::{ActionCatalog, ActionId, State};

/// One node of the search tree.
#[derive(Debug)]
pub struct SearchNode {
    state: State,
    parent: Option<Rc<SearchNode>>,
    action: Option<ActionId>,
    depth: u32,
}

impl SearchNode {
    /// The root: no parent, no generating action, depth 0.
    #[must_use]
    pub fn root(state: State) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
            depth: 0,
        })
    }

    /// A child of `parent` reached through `action`.
    #[must_use]
    pub fn child(parent: &Rc<Self>, state: State, action: ActionId) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            depth: parent.depth + 1,
        })
    }

    /// The state at this node.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The parent node (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<SearchNode>> {
        self.parent.as_ref()
    }

    /// The action that produced this node (`None` for the root).
    #[must_use]
    pub fn action(&self) -> Option<ActionId> {
        self.action
    }

    /// Tree depth, equal to path cost under unit action costs.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Nodes from the root down to `node`, inclusive.
    #[must_use]
    pub fn path(node: &Rc<Self>) -> Vec<Rc<SearchNode>> {
        let mut path = Vec::with_capacity(node.depth as usize + 1);
        let mut current = Some(Rc::clone(node));
        while let Some(n) = current {
            current = n.parent.clone();
            path.push(n);
        }
        path.reverse();
        path
    }

    /// The forward action sequence from the root to this node.
    #[must_use]
    pub fn plan(&self) -> Plan {
        let mut steps = Vec::with_capacity(self.depth as usize);
        if let Some(action) = self.action {
            steps.push(PlanStep::forward(action));
        }
        let mut current = self.parent.as_deref();
        while let Some(n) = current {
            if let Some(action) = n.action {
                steps.push(PlanStep::forward(action));
            }
            current = n.parent.as_deref();
        }
        steps.reverse();
        Plan { steps }
    }
}

impl Drop for SearchNode {
    // Unlink the parent chain iteratively so dropping a very deep path
    // cannot overflow the stack.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut inner) => parent = inner.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Which way a plan step was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Found by forward expansion.
    Forward,
    /// Found by backward (predecessor) expansion. Still executed forward:
    /// applying the action to the preceding plan state is legal.
    Reversed,
}

/// One step of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanStep {
    pub action: ActionId,
    pub direction: Direction,
}

impl PlanStep {
    #[must_use]
    pub fn forward(action: ActionId) -> Self {
        Self {
            action,
            direction: Direction::Forward,
        }
    }

    #[must_use]
    pub fn reversed(action: ActionId) -> Self {
        Self {
            action,
            direction: Direction::Reversed,
        }
    }
}

/// An ordered action sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Plan {
    steps: Vec<PlanStep>,
}

impl Plan {
    /// Build a plan from explicit steps.
    #[must_use]
    pub fn new(steps: Vec<PlanStep>) -> Self {
        Self { steps }
    }

    /// Path cost (unit action costs).
    #[must_use]
    pub fn cost(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Action IDs in execution order, ignoring direction tags.
    #[must_use]
    pub fn action_ids(&self) -> Vec<ActionId> {
        self.steps.iter().map(|s| s.action).collect()
    }

    /// Action names in execution order. Reversed steps carry a `(rev) ` tag.
    #[must_use]
    pub fn action_names(&self, catalog: &ActionCatalog) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| {
                let name = catalog
                    .get(step.action)
                    .map_or_else(|| format!("#{}", step.action.0), |a| a.name().to_string());
                match step.direction {
                    Direction::Forward => name,
                    Direction::Reversed => format!("(rev) {name}"),
                }
            })
            .collect()
    }
}

/// The frontier ordering key: `(f_cost, creation_order)`.
///
/// Lower `f_cost` first; ties go to the older insertion, so equal-f nodes
/// leave the frontier in FIFO order and states never need to be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
