// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Error;
use crate::session::Session;
use crate::utils::{fmt_date, required_arg};
use anyhow::{Context, Result};
use serde_json::json;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("history", sub)) => export_history(session, sub),
        Some(("journal", sub)) => export_journal(session, sub),
        _ => Ok(()),
    }
}

fn format_of(sub: &clap::ArgMatches) -> Result<String> {
    let fmt = required_arg(sub, "format")?.trim().to_lowercase();
    match fmt.as_str() {
        "csv" | "json" => Ok(fmt),
        _ => Err(Error::UnknownFormat(fmt).into()),
    }
}

fn export_history(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = format_of(sub)?;
    let out = required_arg(sub, "out")?;
    let history = session.tracker.history();

    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out)
            .with_context(|| format!("Create export file {}", out))?;
        wtr.write_record(["days", "ended_on"])?;
        for h in history {
            wtr.write_record([h.days.to_string(), fmt_date(&h.ended_on)])?;
        }
        wtr.flush()?;
    } else {
        let items: Vec<_> = history
            .iter()
            .map(|h| json!({ "days": h.days, "ended_on": fmt_date(&h.ended_on) }))
            .collect();
        std::fs::write(out, serde_json::to_string_pretty(&items)?)
            .with_context(|| format!("Write export file {}", out))?;
    }
    println!("Exported {} streaks to {}", history.len(), out);
    Ok(())
}

fn export_journal(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = format_of(sub)?;
    let out = required_arg(sub, "out")?;
    let entries = session.journal.entries();

    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out)
            .with_context(|| format!("Create export file {}", out))?;
        wtr.write_record([
            "id",
            "date",
            "mood",
            "difficulty",
            "helped_today",
            "additional_thoughts",
            "shared",
        ])?;
        for e in entries {
            wtr.write_record([
                e.id.to_string(),
                e.date.to_rfc3339(),
                e.mood.to_string(),
                e.difficulty.to_string(),
                e.helped_today.clone(),
                e.additional_thoughts.clone(),
                e.shared.to_string(),
            ])?;
        }
        wtr.flush()?;
    } else {
        std::fs::write(out, serde_json::to_string_pretty(entries)?)
            .with_context(|| format!("Write export file {}", out))?;
    }
    println!("Exported {} journal entries to {}", entries.len(), out);
    Ok(())
}
