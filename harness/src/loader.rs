//! Instance loader for the line-oriented STRIPS text format.
//!
//! # Format
//!
//! ```text
//! <action name>
//! <precondition literals>
//! <effect literals>
//! ... (one triple per action)
//! <initial state>
//! <goal literals>
//! ```
//!
//! Blank lines are ignored. Each literal line is a `;`-separated token list;
//! tokens are trimmed and empty tokens dropped, so a line holding only `;`
//! is an empty list. A `~` prefix marks a negative literal: must-be-false in
//! a precondition or goal, a delete in an effect. In the initial-state line
//! `~name` means "ensure absent".
//!
//! Names are interned in reading order into a symbol table owned by the
//! returned [`Task`].

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use strider_kernel::model::{
    Action, ActionCatalog, Goal, Literal, PropositionId, State, SymbolTable, Task,
};
use thiserror::Error;
use tracing::info;

/// Malformed or unreadable instance.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Fewer than three non-blank lines.
    #[error("instance too short: {lines} non-blank lines, need at least 3")]
    TooShort { lines: usize },
    /// The lines before the initial state do not split into name,
    /// precondition, and effect triples.
    #[error("action lines must come in blocks of 3, found {lines}")]
    IncompleteActionBlock { lines: usize },
    /// The file could not be read.
    #[error("reading instance {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Split a literal line into `(negated, name)` tokens.
fn tokens(line: &str) -> impl Iterator<Item = (bool, &str)> {
    line.split(';').filter_map(|raw| {
        let token = raw.trim();
        let (negated, name) = match token.strip_prefix('~') {
            Some(rest) => (true, rest.trim()),
            None => (false, token),
        };
        (!name.is_empty()).then_some((negated, name))
    })
}

fn literals(line: &str, symbols: &mut SymbolTable) -> Vec<Literal> {
    tokens(line)
        .map(|(negated, name)| {
            let prop = symbols.intern(name);
            if negated {
                Literal::negative(prop)
            } else {
                Literal::positive(prop)
            }
        })
        .collect()
}

fn initial_state(line: &str, symbols: &mut SymbolTable) -> State {
    let mut props: BTreeSet<PropositionId> = BTreeSet::new();
    for (negated, name) in tokens(line) {
        let prop = symbols.intern(name);
        if negated {
            props.remove(&prop);
        } else {
            props.insert(prop);
        }
    }
    State::from_props(props)
}

/// Parse instance text into a [`Task`].
///
/// # Errors
///
/// Returns [`LoadError::TooShort`] for fewer than three non-blank lines and
/// [`LoadError::IncompleteActionBlock`] when the action lines are not a
/// multiple of three.
pub fn parse_instance(text: &str) -> Result<Task, LoadError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 3 {
        return Err(LoadError::TooShort { lines: lines.len() });
    }
    let (action_lines, tail) = lines.split_at(lines.len() - 2);
    if action_lines.len() % 3 != 0 {
        return Err(LoadError::IncompleteActionBlock {
            lines: action_lines.len(),
        });
    }

    let mut symbols = SymbolTable::new();
    let mut catalog = ActionCatalog::default();
    for block in action_lines.chunks_exact(3) {
        let precondition = literals(block[1], &mut symbols);
        let effects = literals(block[2], &mut symbols);
        catalog.push(Action::from_signed_effects(
            block[0].trim(),
            precondition,
            &effects,
        ));
    }
    let initial = initial_state(tail[0], &mut symbols);
    let goal = Goal::new(literals(tail[1], &mut symbols));

    info!(
        propositions = symbols.len(),
        actions = catalog.len(),
        goal = goal.len(),
        "instance loaded"
    );
    Ok(Task::new(symbols, catalog, initial, goal))
}

/// Read and parse an instance file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, plus everything
/// [`parse_instance`] returns.
pub fn load_instance(path: &Path) -> Result<Task, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_instance(&text)
}

/// Write `task` back out in the instance format.
///
/// Proposition IDs missing from the symbol table are written as `#id`.
#[must_use]
pub fn render_instance(task: &Task) -> String {
    let name = |p: PropositionId| {
        task.symbols
            .resolve(p)
            .map_or_else(|| format!("#{p}"), str::to_string)
    };
    let literal = |l: Literal| {
        if l.is_positive() {
            name(l.prop())
        } else {
            format!("~{}", name(l.prop()))
        }
    };
    let join = |items: Vec<String>| {
        if items.is_empty() {
            ";".to_string()
        } else {
            items.join(";")
        }
    };

    let mut out = String::new();
    for (_, action) in task.catalog.iter() {
        out.push_str(action.name());
        out.push('\n');
        out.push_str(&join(action.precondition().iter().map(|&l| literal(l)).collect()));
        out.push('\n');
        out.push_str(&join(action.signed_effects().into_iter().map(literal).collect()));
        out.push('\n');
    }
    out.push_str(&join(task.initial.iter().map(name).collect()));
    out.push('\n');
    out.push_str(&join(task.goal.iter().map(literal).collect()));
    out.push('\n');
    out
}
