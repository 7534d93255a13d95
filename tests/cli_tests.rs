//! Command workflow tests
//!
//! Drives the command layer against pair files on disk the way the binary
//! does: load, execute, save when changed, reload.

use listpair::commands::{execute, Command, Outcome};
use listpair::config::Config;
use listpair::engine::{Entry, InvalidArgument, Side, SortMode};
use listpair::store::PairState;
use std::path::Path;
use tempfile::TempDir;

/// Run one command against the pair stored at `path`, saving on change
fn run(path: &Path, command: Command, config: &Config) -> anyhow::Result<Outcome> {
    let mut state = PairState::load(path)?;
    let outcome = execute(&command, &mut state, config)?;
    if outcome.changed {
        state.save(path)?;
    }
    Ok(outcome)
}

fn seed(path: &Path) {
    let mut state = PairState::new(
        vec![
            Entry::new("Cherry", "3|cherry"),
            Entry::new("Apple", "1|apple"),
            Entry::new("Banana", "2|banana"),
            Entry::new("Date", "4|date"),
        ],
        vec![Entry::new("Elderberry", "5|elderberry")],
    );
    state.save(path).expect("seed state");
}

fn values(path: &Path, side: Side) -> Vec<String> {
    let state = PairState::load(path).expect("load");
    state
        .entries(side)
        .iter()
        .map(|e| e.value.clone())
        .collect()
}

/// Test a full select / move / reorder / sort session persisted between steps
#[test]
fn test_session_persists_between_commands() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("pair.json");
    let config = Config::default();
    seed(&path);

    run(
        &path,
        Command::Select {
            side: Side::Left,
            positions: vec![4],
        },
        &config,
    )
    .expect("select");
    run(
        &path,
        Command::To {
            side: Side::Left,
            position: 1,
        },
        &config,
    )
    .expect("to");
    assert_eq!(
        values(&path, Side::Left),
        ["4|date", "3|cherry", "1|apple", "2|banana"]
    );

    run(&path, Command::Right { all: false }, &config).expect("right");
    assert_eq!(values(&path, Side::Right), ["5|elderberry", "4|date"]);

    // The moved entry is still selected on the right
    let outcome = run(
        &path,
        Command::Up {
            side: Side::Right,
            offset: None,
        },
        &config,
    )
    .expect("up");
    assert!(outcome.changed);
    assert_eq!(values(&path, Side::Right), ["4|date", "5|elderberry"]);

    run(
        &path,
        Command::Sort {
            side: Side::Left,
            mode: SortMode::Numeric,
        },
        &config,
    )
    .expect("sort");
    assert_eq!(
        values(&path, Side::Left),
        ["1|apple", "2|banana", "3|cherry"]
    );
}

/// Test that invalid input fails without touching the stored pair
#[test]
fn test_invalid_position_leaves_file_untouched() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("pair.json");
    seed(&path);
    let before = std::fs::read_to_string(&path).expect("read");

    let err = run(
        &path,
        Command::To {
            side: Side::Right,
            position: 2,
        },
        &Config::default(),
    )
    .expect_err("right list has one entry");
    assert!(err.downcast_ref::<InvalidArgument>().is_some());

    let after = std::fs::read_to_string(&path).expect("read");
    assert_eq!(before, after);
}

/// Test that a no-op command does not rewrite the file
#[test]
fn test_noop_does_not_save() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("pair.json");

    let outcome = run(&path, Command::Left { all: true }, &Config::default()).expect("left");
    assert!(!outcome.changed);
    assert_eq!(outcome.lines, ["nothing to move"]);
    assert!(!path.exists());
}

/// Test that strict sorting from the config refuses unkeyed values
#[test]
fn test_strict_sort_from_config() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("pair.json");
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"strict_sort_keys": true}"#).expect("write config");
    let config = Config::load_from(&config_path).expect("load config");

    run(
        &path,
        Command::Add {
            side: Side::Left,
            text: "Fig".to_string(),
            value: "fig".to_string(),
        },
        &config,
    )
    .expect("add");

    let result = run(
        &path,
        Command::Sort {
            side: Side::Left,
            mode: SortMode::Alphabetic,
        },
        &config,
    );
    assert!(result.is_err());

    let lenient = run(
        &path,
        Command::Sort {
            side: Side::Left,
            mode: SortMode::Alphabetic,
        },
        &Config::default(),
    )
    .expect("lenient sort");
    assert!(lenient.changed);
}
