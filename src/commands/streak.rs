// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Milestone;
use crate::session::Session;
use crate::streak::RECENT_STREAKS_SHOWN;
use crate::utils::{fmt_date, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("success", _)) => success(session),
        Some(("fail", _)) => fail(session),
        Some(("status", sub)) => status(session, sub)?,
        Some(("history", sub)) => history(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn success(session: &mut Session) {
    let milestone = session.record_success();
    let state = session.tracker.state();
    println!(
        "Day {} vape-free. Saved {}",
        state.current_streak_days,
        fmt_money(&state.total_saved, &session.settings.currency)
    );
    if let Some(m) = milestone {
        println!("{}", celebrate(&m));
    }
}

fn fail(session: &mut Session) {
    let broken = session.tracker.state().current_streak_days;
    session.record_failure();
    if broken > 0 {
        println!("Streak of {} days saved to history. Tomorrow is a fresh start.", broken);
    } else {
        println!("Tomorrow is a fresh start.");
    }
}

pub fn celebrate(m: &Milestone) -> String {
    let secs = m.display_for().as_secs();
    if m.major {
        format!("🎉🎉🎉 {} days! Major milestone! ({}s)", m.days, secs)
    } else {
        format!("🎉 {} days! Milestone reached! ({}s)", m.days, secs)
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryRow {
    pub days: u32,
    pub ended_on: String,
}

#[derive(Debug, Serialize)]
pub struct StatusView {
    pub days_free: u32,
    pub saved: String,
    pub currency: String,
    pub goal_level: u32,
    pub goal_days: u32,
    pub progress: f64,
    pub status: &'static str,
    pub message: String,
    pub avatar: &'static str,
    pub recent_streaks: Vec<HistoryRow>,
}

pub fn status_view(session: &Session) -> StatusView {
    let state = session.tracker.state();
    StatusView {
        days_free: state.current_streak_days,
        saved: format!("{:.2}", state.total_saved.round_dp(2)),
        currency: session.settings.currency.clone(),
        goal_level: state.goal_level,
        goal_days: state.current_goal_days,
        progress: state.progress_fraction(),
        status: state.status_label(),
        message: state.motivation_message(),
        avatar: state.avatar_stage().as_str(),
        recent_streaks: session
            .tracker
            .recent_history(RECENT_STREAKS_SHOWN)
            .iter()
            .map(|h| HistoryRow {
                days: h.days,
                ended_on: fmt_date(&h.ended_on),
            })
            .collect(),
    }
}

pub fn history_rows(session: &Session, limit: Option<usize>) -> Vec<HistoryRow> {
    let all = session.tracker.history();
    let shown = match limit {
        Some(n) => session.tracker.recent_history(n),
        None => all,
    };
    shown
        .iter()
        .map(|h| HistoryRow {
            days: h.days,
            ended_on: fmt_date(&h.ended_on),
        })
        .collect()
}

fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled.min(width)))
}

fn status(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let view = status_view(session);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
        return Ok(());
    }
    let rows = vec![
        vec!["Days Free".into(), view.days_free.to_string()],
        vec!["Saved".into(), format!("{} {}", view.currency, view.saved)],
        vec!["Status".into(), view.status.to_string()],
        vec![
            "Goal".into(),
            format!(
                "{} {}/{} days (level {})",
                progress_bar(view.progress, 20),
                view.days_free,
                view.goal_days,
                view.goal_level
            ),
        ],
        vec!["Bronchi".into(), view.avatar.to_string()],
    ];
    println!("{}", pretty_table(&["", ""], rows));
    println!("{}", view.message);
    if !view.recent_streaks.is_empty() {
        println!("Previous Streaks");
        let rows = view
            .recent_streaks
            .into_iter()
            .map(|h| vec![format!("{} days", h.days), h.ended_on])
            .collect();
        println!("{}", pretty_table(&["Streak", "Ended"], rows));
    }
    Ok(())
}

fn history(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let limit = sub.get_one::<usize>("limit").copied();
    let data = history_rows(session, limit);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("No previous streaks yet");
            return Ok(());
        }
        let rows = data
            .into_iter()
            .map(|h| vec![h.days.to_string(), h.ended_on])
            .collect();
        println!("{}", pretty_table(&["Days", "Ended"], rows));
    }
    Ok(())
}
