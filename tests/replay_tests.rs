// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Cursor;

use breatheclean::commands::replay::{DayEvent, apply, parse_events};
use breatheclean::utils::split_line;
use breatheclean::{Error, cli, commands, session::Session};

#[test]
fn parse_accepts_aliases_and_separators() {
    let events = parse_events("s+ y, f-x").unwrap();
    assert_eq!(
        events,
        vec![
            DayEvent::Clean,
            DayEvent::Clean,
            DayEvent::Clean,
            DayEvent::Slip,
            DayEvent::Slip,
            DayEvent::Slip
        ]
    );
    assert_eq!(parse_events("ssq"), Err(Error::InvalidEvent('q')));
}

#[test]
fn replay_records_history_and_milestones() {
    let mut session = Session::default();
    let events = parse_events(&format!("sssf{}", "s".repeat(10))).unwrap();
    let milestones = apply(&mut session, &events);
    assert_eq!(session.tracker.history()[0].days, 3);
    assert_eq!(session.tracker.state().current_streak_days, 10);
    assert_eq!(milestones.len(), 2);
}

#[test]
fn replay_command_applies_script() {
    let mut session = Session::default();
    let matches = cli::build_cli().get_matches_from(["breatheclean", "replay", "ssssf", "--json"]);
    commands::dispatch(&mut session, &matches).unwrap();
    assert_eq!(session.tracker.history().len(), 1);
    assert_eq!(session.tracker.history()[0].days, 4);
}

#[test]
fn split_line_handles_quotes() {
    let words = split_line(r#"journal add --mood okay --thoughts "rough 'day'" --helped it\ passed"#)
        .unwrap();
    assert_eq!(
        words,
        vec![
            "journal",
            "add",
            "--mood",
            "okay",
            "--thoughts",
            "rough 'day'",
            "--helped",
            "it passed"
        ]
    );
    assert!(split_line("say \"unterminated").is_err());
    assert_eq!(split_line("  ").unwrap(), Vec::<String>::new());
    assert_eq!(split_line("a '' b").unwrap(), vec!["a", "", "b"]);
}

#[test]
fn shell_session_keeps_state_between_lines() {
    let script = "\
streak success
streak success
# comment lines and bad commands are skipped
streak bogus
journal add --mood great --difficulty 2 --helped \"deep breaths\"
streak fail
quit
streak success
";
    let mut session = Session::default();
    commands::shell::run(&mut session, Cursor::new(script), false).unwrap();

    assert_eq!(session.tracker.state().current_streak_days, 0);
    assert_eq!(session.tracker.history()[0].days, 2);
    assert_eq!(session.journal.entries()[0].helped_today, "deep breaths");
}

#[test]
fn replay_script_may_start_with_slip() {
    let mut session = Session::default();
    let matches = cli::build_cli()
        .try_get_matches_from(["breatheclean", "replay", "--json", "-ss"])
        .unwrap();
    commands::dispatch(&mut session, &matches).unwrap();
    // The leading slip had no streak to archive.
    assert!(session.tracker.history().is_empty());
    assert_eq!(session.tracker.state().current_streak_days, 2);
    assert_eq!(
        session.tracker.state().total_saved,
        rust_decimal::Decimal::from_str_exact("1.00").unwrap()
    );
}
