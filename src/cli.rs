// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_parser(value_parser!(usize))
        .help("Show at most N rows")
}

fn streak_cmd() -> Command {
    Command::new("streak")
        .about("Record clean days and slips, and view progress")
        .subcommand_required(true)
        .subcommand(
            Command::new("success")
                .visible_alias("clean")
                .about("I didn't vape today"),
        )
        .subcommand(
            Command::new("fail")
                .visible_alias("slip")
                .about("I vaped today"),
        )
        .subcommand(json_flags(
            Command::new("status").about("Days free, savings, goal and status"),
        ))
        .subcommand(json_flags(
            Command::new("history")
                .about("Previous streaks, oldest first")
                .arg(limit_arg()),
        ))
}

fn journal_cmd() -> Command {
    Command::new("journal")
        .about("Daily mood and difficulty journal")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Save a journal entry")
                .arg(
                    Arg::new("mood")
                        .long("mood")
                        .required(true)
                        .help("great|good|okay|difficult|struggling"),
                )
                .arg(
                    Arg::new("difficulty")
                        .long("difficulty")
                        .required(true)
                        .help("How hard was it to not vape today, 1 (easy) to 5"),
                )
                .arg(
                    Arg::new("helped")
                        .long("helped")
                        .help("What helped you today"),
                )
                .arg(
                    Arg::new("thoughts")
                        .long("thoughts")
                        .help("Additional thoughts"),
                )
                .arg(
                    Arg::new("private")
                        .long("private")
                        .action(ArgAction::SetTrue)
                        .help("Do not share with support partners"),
                ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("Past entries, most recent first")
                .arg(limit_arg()),
        ))
}

fn partner_cmd() -> Command {
    Command::new("partner")
        .about("Support partners")
        .subcommand_required(true)
        .subcommand(
            Command::new("invite")
                .about("Invite a new support partner")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true)),
        )
        .subcommand(json_flags(
            Command::new("list").about("Invitations sent this session"),
        ))
}

fn export_cmd() -> Command {
    let format = || {
        Arg::new("format")
            .long("format")
            .default_value("csv")
            .help("csv|json")
    };
    let out = || Arg::new("out").long("out").required(true);
    Command::new("export")
        .about("Write a snapshot of this session to a file")
        .subcommand_required(true)
        .subcommand(
            Command::new("history")
                .about("Previous streaks")
                .arg(format())
                .arg(out()),
        )
        .subcommand(
            Command::new("journal")
                .about("Journal entries")
                .arg(format())
                .arg(out()),
        )
}

/// Commands that act on a session. Shared by the one-shot CLI and the shell.
pub fn session_commands() -> Vec<Command> {
    vec![
        streak_cmd(),
        journal_cmd(),
        partner_cmd(),
        Command::new("resources")
            .about("Quit vaping resources")
            .arg(
                Arg::new("section")
                    .long("section")
                    .help("programs|why-hard|strategies"),
            ),
        export_cmd(),
    ]
}

pub fn build_cli() -> Command {
    command!()
        .name("breatheclean")
        .arg(
            Arg::new("daily_cost")
                .long("daily-cost")
                .global(true)
                .help("Money saved per vape-free day (default 0.50)"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .global(true)
                .help("Currency code for savings (default USD)"),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .help("trace|debug|info|warn|error; RUST_LOG overrides"),
        )
        .subcommand(Command::new("shell").about("Interactive session; state lasts until exit"))
        .subcommand(json_flags(
            Command::new("replay")
                .about("Apply a sequence of days (s = clean, f = slip) and show the result")
                .arg(
                    Arg::new("events")
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        ))
        .subcommands(session_commands())
}

/// Parser for one line typed into `shell`.
pub fn build_shell() -> Command {
    Command::new("breatheclean")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_version_flag(true)
        .subcommand(
            Command::new("quit")
                .visible_alias("exit")
                .about("Leave the shell"),
        )
        .subcommands(session_commands())
}
