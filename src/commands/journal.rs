// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Difficulty, Mood};
use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table, required_arg};
use anyhow::{Context, Result};
use serde::Serialize;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        _ => {}
    }
    Ok(())
}

/// Fills the session draft from the arguments and saves it.
pub fn add(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let mood: Mood = required_arg(sub, "mood")?.parse()?;
    let difficulty: Difficulty = required_arg(sub, "difficulty")?.parse()?;
    let text = |id: &str| {
        sub.get_one::<String>(id)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    session.draft.mood = Some(mood);
    session.draft.difficulty = Some(difficulty);
    session.draft.helped_today = text("helped");
    session.draft.additional_thoughts = text("thoughts");
    session.draft.shared = !sub.get_flag("private");

    session
        .journal
        .save_entry(&mut session.draft)
        .context("Could not save journal entry")?;
    println!("Journal entry saved successfully!");
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct EntryRow {
    pub id: u64,
    pub title: String,
    pub mood: String,
    pub difficulty: String,
    pub helped_today: String,
    pub additional_thoughts: String,
    pub shared: bool,
}

pub fn query_rows(session: &Session, limit: Option<usize>) -> Vec<EntryRow> {
    session
        .journal
        .entries()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|e| EntryRow {
            id: e.id,
            title: e.title(),
            mood: format!("{} {}", e.mood.emoji(), e.mood),
            difficulty: format!("{}/5", e.difficulty),
            helped_today: e.helped_today.clone(),
            additional_thoughts: e.additional_thoughts.clone(),
            shared: e.shared,
        })
        .collect()
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(session, sub.get_one::<usize>("limit").copied());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("Your past journal entries will appear here");
            return Ok(());
        }
        let rows = data
            .into_iter()
            .map(|r| {
                vec![
                    r.title,
                    r.mood,
                    r.difficulty,
                    r.helped_today,
                    r.additional_thoughts,
                    if r.shared { "yes".into() } else { "no".into() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Entry", "Feeling", "Difficulty", "What helped", "Thoughts", "Shared"],
                rows,
            )
        );
    }
    Ok(())
}
