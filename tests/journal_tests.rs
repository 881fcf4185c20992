// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use breatheclean::journal::JournalLog;
use breatheclean::models::{Difficulty, JournalDraft, Mood};
use breatheclean::{Error, cli, commands, session::Session};
use chrono::{Local, TimeZone};

#[test]
fn save_prepends_and_resets_draft() {
    let mut log = JournalLog::new();
    let mut draft = JournalDraft {
        mood: Some(Mood::Okay),
        difficulty: Some("3".parse().unwrap()),
        helped_today: "Went for a run".into(),
        ..JournalDraft::default()
    };
    let now = Local.with_ymd_and_hms(2025, 3, 14, 21, 0, 0).unwrap();
    let saved = log.save_entry_at(&mut draft, now).unwrap().clone();

    assert_eq!(log.len(), 1);
    assert_eq!(saved.mood, Mood::Okay);
    assert_eq!(saved.difficulty.level(), 3);
    assert_eq!(saved.helped_today, "Went for a run");
    assert!(saved.shared);
    assert_eq!(saved.title(), "2025-03-14 - okay day");
    assert_eq!(draft, JournalDraft::default());
    assert_eq!(draft.mood, None);
    assert_eq!(draft.difficulty, None);
}

#[test]
fn newest_entry_first_with_unique_ids() {
    let mut log = JournalLog::new();
    for mood in [Mood::Great, Mood::Struggling] {
        let mut draft = JournalDraft {
            mood: Some(mood),
            difficulty: Some(Difficulty::new(2).unwrap()),
            ..JournalDraft::default()
        };
        log.save_entry(&mut draft).unwrap();
    }
    let entries = log.entries();
    assert_eq!(entries[0].mood, Mood::Struggling);
    assert_eq!(entries[1].mood, Mood::Great);
    assert_ne!(entries[0].id, entries[1].id);
}

#[test]
fn incomplete_draft_is_rejected_untouched() {
    let mut log = JournalLog::new();
    let mut draft = JournalDraft {
        mood: Some(Mood::Good),
        helped_today: "tea".into(),
        ..JournalDraft::default()
    };
    let err = log.save_entry(&mut draft).unwrap_err();
    assert_eq!(err, Error::IncompleteEntry);
    assert!(log.is_empty());
    assert_eq!(draft.mood, Some(Mood::Good));
    assert_eq!(draft.helped_today, "tea");
}

#[test]
fn mood_and_difficulty_parsing() {
    assert_eq!(" Difficult ".parse::<Mood>().unwrap(), Mood::Difficult);
    assert!(matches!("meh".parse::<Mood>(), Err(Error::InvalidMood(_))));
    assert!(matches!("0".parse::<Difficulty>(), Err(Error::InvalidDifficulty(_))));
    assert!(matches!("6".parse::<Difficulty>(), Err(Error::InvalidDifficulty(_))));
    assert!(matches!("".parse::<Difficulty>(), Err(Error::InvalidDifficulty(_))));
    assert_eq!(Mood::Great.emoji(), "😁");
}

#[test]
fn journal_add_command_trims_inputs() {
    let mut session = Session::default();
    let matches = cli::build_cli().get_matches_from([
        "breatheclean",
        "journal",
        "add",
        "--mood",
        " okay ",
        "--difficulty",
        " 3 ",
        "--thoughts",
        "  one day at a time ",
        "--private",
    ]);
    commands::dispatch(&mut session, &matches).unwrap();

    let rows = commands::journal::query_rows(&session, None);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].difficulty, "3/5");
    assert_eq!(rows[0].additional_thoughts, "one day at a time");
    assert!(!rows[0].shared);
    assert_eq!(session.draft, JournalDraft::default());
}

#[test]
fn journal_add_rejects_bad_difficulty() {
    let mut session = Session::default();
    let matches = cli::build_cli().get_matches_from([
        "breatheclean",
        "journal",
        "add",
        "--mood",
        "good",
        "--difficulty",
        "9",
    ]);
    assert!(commands::dispatch(&mut session, &matches).is_err());
    assert!(session.journal.is_empty());
}

#[test]
fn journal_list_limit_respected() {
    let mut session = Session::default();
    for _ in 0..3 {
        session.draft.mood = Some(Mood::Good);
        session.draft.difficulty = Some(Difficulty::new(1).unwrap());
        session.journal.save_entry(&mut session.draft).unwrap();
    }
    let rows = commands::journal::query_rows(&session, Some(2));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 3);
}
