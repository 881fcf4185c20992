// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table, required_arg};
use anyhow::Result;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("invite", sub)) => {
            let name = required_arg(sub, "name")?;
            let email = required_arg(sub, "email")?;
            let inv = session.partners.invite(name, email)?;
            println!("Invitation sent to {} at {}", inv.name, inv.email);
        }
        Some(("list", sub)) => {
            let invitations = session.partners.invitations();
            if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &invitations)? {
                return Ok(());
            }
            if invitations.is_empty() {
                println!("Your support partners will appear here");
                return Ok(());
            }
            let rows = invitations
                .iter()
                .map(|i| {
                    vec![
                        i.name.clone(),
                        i.email.clone(),
                        i.sent_at.format("%Y-%m-%d %H:%M").to_string(),
                        "pending".into(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Name", "Email", "Invited", "Status"], rows)
            );
        }
        _ => {}
    }
    Ok(())
}
