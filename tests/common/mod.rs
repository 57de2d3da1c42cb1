//! Common test utilities for integration tests

#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;
use tasklist::{Config, TaskList};
use tempfile::TempDir;

pub type TestSession = TaskList<Cursor<Vec<u8>>, Vec<u8>>;

/// Create a temporary directory holding the data file for one test
pub fn get_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Config pointing at `tasks.txt` inside `dir`
pub fn test_config(dir: &Path) -> Config {
    Config {
        file: dir.join("tasks.txt"),
        ..Config::default()
    }
}

/// Build a session that reads `script` as its input lines
pub fn session_with_input(config: &Config, script: &[&str]) -> TestSession {
    let mut input = script.join("\n");
    input.push('\n');
    TaskList::from_config(config, Cursor::new(input.into_bytes()), Vec::new()).unwrap()
}

/// Run a whole scripted session and return it for inspection
pub fn run_script(config: &Config, script: &[&str]) -> TestSession {
    let mut session = session_with_input(config, script);
    session.run().unwrap();
    session
}

/// Everything the session printed
pub fn output_text(session: &TestSession) -> String {
    String::from_utf8(session.output().clone()).unwrap()
}

/// Menu input that creates one task
pub fn create_steps<'a>(title: &'a str, priority: &'a str, due: &'a str) -> Vec<&'a str> {
    vec!["1", title, "notes", priority, due]
}
