// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{JournalDraft, JournalEntry};

/// Saved entries, most recent first. Nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct JournalLog {
    entries: Vec<JournalEntry>,
    next_id: u64,
}

impl JournalLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn save_entry(&mut self, draft: &mut JournalDraft) -> Result<&JournalEntry> {
        self.save_entry_at(draft, Local::now())
    }

    /// Moves a complete draft into the log and resets it. An incomplete draft
    /// is left untouched.
    pub fn save_entry_at(
        &mut self,
        draft: &mut JournalDraft,
        now: DateTime<Local>,
    ) -> Result<&JournalEntry> {
        let (Some(mood), Some(difficulty)) = (draft.mood, draft.difficulty) else {
            warn!(
                has_mood = draft.mood.is_some(),
                has_difficulty = draft.difficulty.is_some(),
                "journal draft rejected"
            );
            return Err(Error::IncompleteEntry);
        };
        self.next_id += 1;
        let filled = std::mem::take(draft);
        let entry = JournalEntry {
            id: self.next_id,
            date: now,
            mood,
            difficulty,
            helped_today: filled.helped_today,
            additional_thoughts: filled.additional_thoughts,
            shared: filled.shared,
        };
        debug!(id = entry.id, mood = %entry.mood, "journal entry saved");
        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }
}
