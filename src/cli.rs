// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .version(clap::crate_version!())
        .about("Personal income/expense tracking, monthly cashflow, and AI financial insights")
        .subcommand(Command::new("init").about("Initialize the data directory and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("amount").long("amount").required(true).help("Positive decimal amount"))
                        .arg(Arg::new("type").long("type").required(true).help("INCOME or EXPENSE"))
                        .arg(Arg::new("category").long("category").required(true).help("Category label, e.g. 'Food & Dining'"))
                        .arg(Arg::new("desc").long("desc").required(true).help("Description"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("Restrict to YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("type").long("type").help("INCOME or EXPENSE"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("The fixed category set")
                .subcommand(Command::new("list").about("List categories by transaction type")),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views over the snapshot")
                .subcommand(json_flags(
                    Command::new("summary").about("Total income, expense, and balance"),
                ))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Monthly income/expense series")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize))
                                .help("Most recent N months (default 12)"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("spend-by-category")
                        .about("Expense totals per category, largest first")
                        .arg(Arg::new("month").long("month").help("Restrict to YYYY-MM")),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Write the snapshot to a file")
                .subcommand(
                    Command::new("snapshot")
                        .about("Export all transactions")
                        .arg(Arg::new("out").long("out").help("Output path (default embeds today's date)"))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("json")
                                .help("json or csv"),
                        ),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Replace the snapshot from a file")
                .subcommand(
                    Command::new("snapshot")
                        .about("Import a JSON backup, replacing all current transactions")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(json_flags(
            Command::new("insight")
                .about("Ask the AI advisor for a financial summary")
                .arg(
                    Arg::new("language")
                        .long("language")
                        .help("en or zh, defaults to the stored setting"),
                ),
        ))
        .subcommand(
            Command::new("lang")
                .about("Display language")
                .subcommand(
                    Command::new("set")
                        .about("Set the display language")
                        .arg(Arg::new("tag").required(true).help("en or zh")),
                )
                .subcommand(Command::new("show").about("Show the current display language")),
        )
        .subcommand(Command::new("doctor").about("Check the snapshot for suspect records"))
}
