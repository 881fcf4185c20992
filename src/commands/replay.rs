// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::streak::{celebrate, status_view};
use crate::error::Error;
use crate::models::Milestone;
use crate::session::Session;
use crate::utils::{maybe_print_json, required_arg};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEvent {
    Clean,
    Slip,
}

/// `s`, `+`, `y` are clean days; `f`, `-`, `x` are slips. Whitespace and
/// commas are skipped.
pub fn parse_events(script: &str) -> Result<Vec<DayEvent>, Error> {
    script
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c.to_ascii_lowercase() {
            's' | '+' | 'y' => Ok(DayEvent::Clean),
            'f' | '-' | 'x' => Ok(DayEvent::Slip),
            _ => Err(Error::InvalidEvent(c)),
        })
        .collect()
}

pub fn apply(session: &mut Session, events: &[DayEvent]) -> Vec<Milestone> {
    let mut milestones = Vec::new();
    for ev in events {
        match ev {
            DayEvent::Clean => milestones.extend(session.record_success()),
            DayEvent::Slip => session.record_failure(),
        }
    }
    milestones
}

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    let events = parse_events(required_arg(m, "events")?)?;
    let milestones = apply(session, &events);
    let view = status_view(session);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &view)? {
        return Ok(());
    }
    for ms in &milestones {
        println!("{}", celebrate(ms));
    }
    println!(
        "{} days free ({}), {} {} saved, goal {} days, {} past streaks",
        view.days_free,
        view.status,
        view.currency,
        view.saved,
        view.goal_days,
        session.tracker.history().len()
    );
    println!("{}", view.message);
    Ok(())
}
