// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use breatheclean::models::{Difficulty, Mood};
use breatheclean::{cli, commands, session::Session};
use chrono::NaiveDate;
use serde_json::Value;
use tempfile::tempdir;

fn session_with_history() -> Session {
    let mut session = Session::default();
    let cost = session.settings.daily_cost;
    for (n, d) in [(3u32, 4u32), (8, 20)] {
        for _ in 0..n {
            session.record_success();
        }
        session
            .tracker
            .record_failure_on(cost, NaiveDate::from_ymd_opt(2025, 2, d).unwrap());
    }
    session
}

fn run_export(session: &Session, what: &str, format: &str, out: &str) {
    let matches = cli::build_cli().get_matches_from([
        "breatheclean",
        "export",
        what,
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", sub)) = matches.subcommand() {
        commands::exporter::handle(session, sub).unwrap();
    } else {
        panic!("export command not parsed");
    }
}

#[test]
fn export_history_csv() {
    let session = session_with_history();
    let dir = tempdir().unwrap();
    let out = dir.path().join("history.csv");
    run_export(&session, "history", "csv", &out.to_string_lossy());

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["days,ended_on", "3,2025-02-04", "8,2025-02-20"]);
}

#[test]
fn export_history_json() {
    let session = session_with_history();
    let dir = tempdir().unwrap();
    let out = dir.path().join("history.json");
    run_export(&session, "history", " JSON ", &out.to_string_lossy());

    let v: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v[1]["days"], 8);
    assert_eq!(v[1]["ended_on"], "2025-02-20");
}

#[test]
fn export_journal_json_keeps_fields() {
    let mut session = Session::default();
    session.draft.mood = Some(Mood::Difficult);
    session.draft.difficulty = Some(Difficulty::new(4).unwrap());
    session.draft.helped_today = "called a friend".into();
    session.journal.save_entry(&mut session.draft).unwrap();

    let dir = tempdir().unwrap();
    let out = dir.path().join("journal.json");
    run_export(&session, "journal", "json", &out.to_string_lossy());

    let v: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v[0]["mood"], "difficult");
    assert_eq!(v[0]["difficulty"], 4);
    assert_eq!(v[0]["helped_today"], "called a friend");
    assert_eq!(v[0]["shared"], true);
}

#[test]
fn export_rejects_unknown_format() {
    let session = session_with_history();
    let dir = tempdir().unwrap();
    let out = dir.path().join("history.xml");
    let out_s = out.to_string_lossy().to_string();
    let matches = cli::build_cli().get_matches_from([
        "breatheclean",
        "export",
        "history",
        "--format",
        "xml",
        "--out",
        out_s.as_str(),
    ]);
    let (_, sub) = matches.subcommand().unwrap();
    assert!(commands::exporter::handle(&session, sub).is_err());
    assert!(!out.exists());
}
