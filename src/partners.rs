// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::Invitation;

static EMAIL_RE: Lazy<std::result::Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$"));

pub fn validate_email(email: &str) -> Result<()> {
    match &*EMAIL_RE {
        Ok(re) if re.is_match(email) => Ok(()),
        _ => Err(Error::InvalidEmail(email.to_string())),
    }
}

/// Pending invitations. Sending is acknowledged only; nothing leaves the process.
#[derive(Debug, Clone, Default)]
pub struct PartnerBook {
    invitations: Vec<Invitation>,
}

impl PartnerBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invitations(&self) -> &[Invitation] {
        &self.invitations
    }

    pub fn invite(&mut self, name: &str, email: &str) -> Result<&Invitation> {
        self.invite_at(name, email, Local::now())
    }

    pub fn invite_at(&mut self, name: &str, email: &str, now: DateTime<Local>) -> Result<&Invitation> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(Error::MissingField("name"));
        }
        if email.is_empty() {
            return Err(Error::MissingField("email"));
        }
        validate_email(email)?;
        info!(name, email, "invitation sent");
        let idx = self.invitations.len();
        self.invitations.push(Invitation {
            name: name.to_string(),
            email: email.to_string(),
            sent_at: now,
        });
        Ok(&self.invitations[idx])
    }
}
