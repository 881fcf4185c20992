// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakHistoryEntry {
    pub days: u32,
    pub ended_on: NaiveDate,
}

/// Celebration signal emitted by a successful day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub days: u32,
    pub major: bool,
}

impl Milestone {
    pub fn display_for(&self) -> Duration {
        if self.major {
            Duration::from_secs(5)
        } else {
            Duration::from_secs(3)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Difficult,
    Struggling,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Great,
        Mood::Good,
        Mood::Okay,
        Mood::Difficult,
        Mood::Struggling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Difficult => "difficult",
            Mood::Struggling => "struggling",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Great => "😁",
            Mood::Good => "🙂",
            Mood::Okay => "😐",
            Mood::Difficult => "😕",
            Mood::Struggling => "😣",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == needle)
            .ok_or_else(|| Error::InvalidMood(s.trim().to_string()))
    }
}

/// How hard it was to stay off the vape, 1 (easy) to 5 (extremely difficult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub fn new(level: u8) -> Result<Self, Error> {
        if (1..=5).contains(&level) {
            Ok(Self(level))
        } else {
            Err(Error::InvalidDifficulty(level.to_string()))
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Difficulty::new(v)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.0
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        t.parse::<u8>()
            .map_err(|_| Error::InvalidDifficulty(t.to_string()))
            .and_then(Difficulty::new)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u64,
    pub date: DateTime<Local>,
    pub mood: Mood,
    pub difficulty: Difficulty,
    pub helped_today: String,
    pub additional_thoughts: String,
    pub shared: bool,
}

impl JournalEntry {
    pub fn title(&self) -> String {
        format!("{} - {} day", self.date.format("%Y-%m-%d"), self.mood)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalDraft {
    pub mood: Option<Mood>,
    pub difficulty: Option<Difficulty>,
    pub helped_today: String,
    pub additional_thoughts: String,
    pub shared: bool,
}

impl Default for JournalDraft {
    fn default() -> Self {
        Self {
            mood: None,
            difficulty: None,
            helped_today: String::new(),
            additional_thoughts: String::new(),
            shared: true,
        }
    }
}

impl JournalDraft {
    pub fn is_complete(&self) -> bool {
        self.mood.is_some() && self.difficulty.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub name: String,
    pub email: String,
    pub sent_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub daily_cost: Decimal,
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_cost: Decimal::new(50, 2),
            currency: "USD".to_string(),
        }
    }
}
