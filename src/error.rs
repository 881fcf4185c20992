// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("journal entry needs both a mood and a difficulty level before it can be saved")]
    IncompleteEntry,
    #[error("unknown mood '{0}' (expected great|good|okay|difficult|struggling)")]
    InvalidMood(String),
    #[error("invalid difficulty '{0}', expected 1-5")]
    InvalidDifficulty(String),
    #[error("invalid replay event '{0}' (use s/+/y for a clean day, f/-/x for a slip)")]
    InvalidEvent(char),
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
    #[error("missing required value: {0}")]
    MissingField(&'static str),
    #[error("unknown format '{0}' (use csv|json)")]
    UnknownFormat(String),
    #[error("unknown resources section '{0}'")]
    UnknownSection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
