// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Streak and goal progression.
//!
//! A clean day extends the streak and adds the daily cost to the savings
//! estimate. Every 30 days the goal moves up by another 30. A slip archives
//! the streak, gives back one day of savings and drops the goal to 30.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::models::{Milestone, StreakHistoryEntry};

pub const GOAL_STEP_DAYS: u32 = 30;
pub const MILESTONE_EVERY: u32 = 5;
pub const RECENT_STREAKS_SHOWN: usize = 3;

/// Everything that changes together on a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakState {
    pub current_streak_days: u32,
    pub total_saved: Decimal,
    pub goal_level: u32,
    pub current_goal_days: u32,
}

impl Default for StreakState {
    fn default() -> Self {
        Self {
            current_streak_days: 0,
            total_saved: Decimal::ZERO,
            goal_level: 1,
            current_goal_days: GOAL_STEP_DAYS,
        }
    }
}

impl StreakState {
    pub fn succeeded(self, daily_cost: Decimal) -> (StreakState, Option<Milestone>) {
        let days = self.current_streak_days.saturating_add(1);
        let mut next = StreakState {
            current_streak_days: days,
            total_saved: self.total_saved + daily_cost,
            ..self
        };
        if days % GOAL_STEP_DAYS == 0 {
            let new_level = days / GOAL_STEP_DAYS + 1;
            if new_level > next.goal_level {
                next.goal_level = new_level;
                next.current_goal_days = GOAL_STEP_DAYS.saturating_mul(new_level);
            }
        }
        let milestone = (days % MILESTONE_EVERY == 0 || days % GOAL_STEP_DAYS == 0).then(|| {
            Milestone {
                days,
                major: days % GOAL_STEP_DAYS == 0,
            }
        });
        (next, milestone)
    }

    pub fn failed(self, daily_cost: Decimal) -> StreakState {
        StreakState {
            current_streak_days: 0,
            total_saved: (self.total_saved - daily_cost).max(Decimal::ZERO),
            goal_level: 1,
            current_goal_days: GOAL_STEP_DAYS,
        }
    }

    pub fn progress_fraction(&self) -> f64 {
        (f64::from(self.current_streak_days) / f64::from(self.current_goal_days)).min(1.0)
    }

    pub fn status_label(&self) -> &'static str {
        match self.current_streak_days {
            0..=6 => "Getting Started",
            7..=13 => "Recovering",
            14..=20 => "Improving",
            21..=59 => "Thriving",
            60..=89 => "Champion",
            _ => "Vape-Free Master",
        }
    }

    // Rules overlap; order matters.
    pub fn motivation_message(&self) -> String {
        let d = self.current_streak_days;
        if d == 0 {
            "Start your journey today!".to_string()
        } else if d < 3 {
            "The first days are the hardest. Keep going!".to_string()
        } else if d < 7 {
            "Almost a week! Your lungs are thanking you.".to_string()
        } else if d < 14 {
            "Amazing progress! Your circulation is improving.".to_string()
        } else if d < 30 {
            "You're building a new, healthier you!".to_string()
        } else if d == 30 {
            "30 days! You've reached your goal!".to_string()
        } else if d % GOAL_STEP_DAYS == 0 {
            format!(
                "{} days! Another goal crushed. Next stop: {} days.",
                d,
                d.saturating_add(GOAL_STEP_DAYS)
            )
        } else if d < 60 {
            "Over a month vape-free. Your breathing is getting easier!".to_string()
        } else if d < 90 {
            "Two months strong. Cravings are losing their grip!".to_string()
        } else {
            "You're an inspiration. Keep breathing clean!".to_string()
        }
    }

    pub fn avatar_stage(&self) -> AvatarStage {
        match self.current_streak_days {
            0 => AvatarStage::Struggling,
            1..=9 => AvatarStage::Healing,
            10..=19 => AvatarStage::Recovering,
            _ => AvatarStage::Healthy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarStage {
    Struggling,
    Healing,
    Recovering,
    Healthy,
}

impl AvatarStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarStage::Struggling => "struggling",
            AvatarStage::Healing => "healing",
            AvatarStage::Recovering => "recovering",
            AvatarStage::Healthy => "healthy",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    state: StreakState,
    history: Vec<StreakHistoryEntry>,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &StreakState {
        &self.state
    }

    /// Past streaks, oldest first. Grows for the life of the session.
    pub fn history(&self) -> &[StreakHistoryEntry] {
        &self.history
    }

    pub fn recent_history(&self, n: usize) -> &[StreakHistoryEntry] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    pub fn record_success(&mut self, daily_cost: Decimal) -> Option<Milestone> {
        let before = self.state;
        let (next, milestone) = before.succeeded(daily_cost);
        self.state = next;
        debug!(days = next.current_streak_days, saved = %next.total_saved, "clean day recorded");
        if next.goal_level > before.goal_level {
            info!(
                level = next.goal_level,
                goal_days = next.current_goal_days,
                "goal raised"
            );
        }
        if let Some(m) = milestone {
            info!(days = m.days, major = m.major, "milestone reached");
        }
        milestone
    }

    pub fn record_failure(&mut self, daily_cost: Decimal) {
        self.record_failure_on(daily_cost, Local::now().date_naive());
    }

    pub fn record_failure_on(&mut self, daily_cost: Decimal, today: NaiveDate) {
        let days = self.state.current_streak_days;
        if days > 0 {
            self.history.push(StreakHistoryEntry {
                days,
                ended_on: today,
            });
            info!(days, ended_on = %today, "streak broken");
        }
        self.state = self.state.failed(daily_cost);
    }
}
