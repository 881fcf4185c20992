// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod exporter;
pub mod journal;
pub mod partners;
pub mod replay;
pub mod resources;
pub mod shell;
pub mod streak;

use crate::session::Session;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes one parsed command to its handler.
pub fn dispatch(session: &mut Session, matches: &clap::ArgMatches) -> Result<Flow> {
    match matches.subcommand() {
        Some(("streak", sub)) => streak::handle(session, sub)?,
        Some(("journal", sub)) => journal::handle(session, sub)?,
        Some(("partner", sub)) => partners::handle(session, sub)?,
        Some(("resources", sub)) => resources::handle(sub)?,
        Some(("export", sub)) => exporter::handle(session, sub)?,
        Some(("replay", sub)) => replay::handle(session, sub)?,
        Some(("quit", _)) => return Ok(Flow::Quit),
        _ => {}
    }
    Ok(Flow::Continue)
}
