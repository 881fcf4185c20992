// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use crate::cli::build_shell;
use crate::commands::{Flow, dispatch};
use crate::session::Session;
use crate::utils::split_line;
use anyhow::Result;
use tracing::debug;

/// Reads commands line by line until `quit` or end of input. A bad line is
/// reported and skipped; the session keeps its state.
pub fn run<R: BufRead>(session: &mut Session, input: R, prompt: bool) -> Result<()> {
    if prompt {
        println!("BreatheClean shell. Type 'help' for commands, 'quit' to leave.");
    }
    let mut lines = input.lines();
    loop {
        if prompt {
            print!("breathe> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let words = match split_line(line) {
            Ok(w) => w,
            Err(e) => {
                eprintln!("error: {e:#}");
                continue;
            }
        };
        let matches = match build_shell().try_get_matches_from(words) {
            Ok(m) => m,
            Err(e) => {
                // Help and usage output arrive here too.
                let _ = e.print();
                continue;
            }
        };
        debug!(command = ?matches.subcommand_name(), "shell command");
        match dispatch(session, &matches) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => eprintln!("error: {e:#}"),
        }
    }
    Ok(())
}
