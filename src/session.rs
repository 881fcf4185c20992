// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rust_decimal::Decimal;

use crate::journal::JournalLog;
use crate::models::{JournalDraft, Milestone, Settings};
use crate::partners::PartnerBook;
use crate::streak::StreakTracker;
use crate::utils::parse_decimal;

/// All state for one run of the program. Dropped on exit.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub settings: Settings,
    pub tracker: StreakTracker,
    pub draft: JournalDraft,
    pub journal: JournalLog,
    pub partners: PartnerBook,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Builds a session from the global `--daily-cost` and `--currency` flags.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let mut settings = Settings::default();
        if let Some(raw) = m.get_one::<String>("daily_cost") {
            let cost: Decimal = parse_decimal(raw.trim())?;
            if cost.is_sign_negative() {
                bail!("Daily cost must not be negative, got {}", cost);
            }
            settings.daily_cost = cost;
        }
        if let Some(ccy) = m.get_one::<String>("currency") {
            let ccy = ccy.trim().to_uppercase();
            if ccy.is_empty() {
                bail!("Currency must not be empty");
            }
            settings.currency = ccy;
        }
        Ok(Self::new(settings))
    }

    pub fn record_success(&mut self) -> Option<Milestone> {
        self.tracker.record_success(self.settings.daily_cost)
    }

    pub fn record_failure(&mut self) {
        self.tracker.record_failure(self.settings.daily_cost)
    }
}
