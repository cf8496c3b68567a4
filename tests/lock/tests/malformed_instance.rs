//! Malformed instance files fail at load time, before any search work.

use std::io::Write as _;

use strider_harness::config::RunConfig;
use strider_harness::loader::LoadError;
use strider_harness::runner::{run_file, RunError};
use strider_search::StrategyKind;

fn write_instance(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn two_line_file_is_too_short() {
    let file = write_instance("clear_a;clear_b\non_a_b\n");
    let err = run_file(file.path(), &RunConfig::new(StrategyKind::Bfs)).unwrap_err();
    assert!(
        matches!(err, RunError::Load(LoadError::TooShort { lines: 2 })),
        "{err:?}"
    );
}

#[test]
fn four_line_file_has_incomplete_block() {
    let file = write_instance("stack_a_on_b\nclear_a;clear_b\nclear_a\non_a_b\n");
    let err = run_file(file.path(), &RunConfig::new(StrategyKind::Bfs)).unwrap_err();
    assert!(
        matches!(err, RunError::Load(LoadError::IncompleteActionBlock { lines: 2 })),
        "{err:?}"
    );
}

#[test]
fn error_messages_name_the_problem() {
    let file = write_instance("only\ntwo\n");
    let err = run_file(file.path(), &RunConfig::new(StrategyKind::Bfs)).unwrap_err();
    assert!(err.to_string().contains("too short"), "{err}");

    let file = write_instance("a\nb\nc\nd\n");
    let err = run_file(file.path(), &RunConfig::new(StrategyKind::Bfs)).unwrap_err();
    assert!(err.to_string().contains("blocks of 3"), "{err}");
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_file(&dir.path().join("missing.strips"), &RunConfig::new(StrategyKind::Bfs))
        .unwrap_err();
    assert!(matches!(err, RunError::Load(LoadError::Io { .. })), "{err:?}");
}
