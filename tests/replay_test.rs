//! Tests for the replay command and config-driven list order.

use rewind_games::{AppConfig, MoveOrder, ReplayReport, run_replay};
use std::io::Write;

#[test]
fn test_descending_config_reverses_listing() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "move_order = \"descending\"").unwrap();
    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.move_order(), MoveOrder::Descending);

    let text = run_replay("center, top-left", None, false, &config).unwrap();
    let newest = text.find("You are at move #2").unwrap();
    let start = text.find("Go to game start").unwrap();
    assert!(newest < start);
}

#[test]
fn test_report_after_jump() {
    let store = {
        let mut store = rewind_games::GameHistoryStore::replay(&[4, 0, 2, 8, 6]);
        store.jump_to(2);
        store
    };
    let report = ReplayReport::build(&store, MoveOrder::Ascending);
    assert_eq!(report.position, 2);
    assert_eq!(report.length, 6);
    assert_eq!(report.status, "Next player: X");
    assert!(report.history[2].current);
    assert!(report.history[2].jumpable);
}

#[test]
fn test_bad_moves_rejected() {
    let err = run_replay("4,x", None, false, &AppConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Unrecognized cell"));
}
