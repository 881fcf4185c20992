// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::IsTerminal;

use anyhow::Result;

use breatheclean::{cli, commands, session::Session};

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("breatheclean={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let level = matches
        .get_one::<String>("log_level")
        .map(String::as_str)
        .unwrap_or("warn");
    init_tracing(level);

    let mut session = Session::from_matches(&matches)?;

    match matches.subcommand() {
        Some(("shell", _)) => {
            let stdin = std::io::stdin();
            let prompt = stdin.is_terminal();
            commands::shell::run(&mut session, stdin.lock(), prompt)?;
        }
        Some(_) => {
            commands::dispatch(&mut session, &matches)?;
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
