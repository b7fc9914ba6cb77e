// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id").long("id").required(true).help("Record id")
}

fn amount_arg() -> Arg {
    Arg::new("amount").long("amount").required(true)
}

fn income_cli() -> Command {
    Command::new("income")
        .about("Income sources and payments")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("list").about("List income sources")))
        .subcommand(
            Command::new("add")
                .about("Add an income source")
                .arg(Arg::new("type").long("type").required(true).help("Label, e.g. Salary"))
                .arg(amount_arg())
                .arg(
                    Arg::new("recurring")
                        .long("recurring")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("rm").about("Remove a source and its payments").arg(id_arg()))
        .subcommand(json_flags(
            Command::new("history")
                .about("List logged payments")
                .arg(Arg::new("source").long("source").help("Only this source id")),
        ))
        .subcommand(
            Command::new("log")
                .about("Log a payment against a source")
                .arg(Arg::new("source").long("source").required(true))
                .arg(amount_arg())
                .arg(Arg::new("date").long("date").required(true)),
        )
        .subcommand(Command::new("unlog").about("Delete a logged payment").arg(id_arg()))
        .subcommand(json_flags(
            Command::new("top")
                .about("Largest income types plus Other")
                .arg(Arg::new("n").long("n").value_parser(value_parser!(usize))),
        ))
        .subcommand(json_flags(
            Command::new("monthly").about("Recent months, most recent first"),
        ))
}

fn expense_cli() -> Command {
    Command::new("expense")
        .about("Expenses and expense categories")
        .subcommand_required(true)
        .subcommand(json_flags(
            Command::new("list")
                .about("List expenses")
                .arg(Arg::new("category").long("category"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .arg(Arg::new("category").long("category").required(true))
                .arg(amount_arg())
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("description").long("description"))
                .arg(Arg::new("method").long("method").help("Payment method")),
        )
        .subcommand(Command::new("rm").about("Remove an expense").arg(id_arg()))
        .subcommand(Command::new("categories").about("List expense categories"))
        .subcommand(
            Command::new("add-category")
                .about("Register a category")
                .arg(Arg::new("name").long("name").required(true)),
        )
        .subcommand(Command::new("rm-category").about("Remove a category").arg(id_arg()))
        .subcommand(json_flags(
            Command::new("top")
                .about("Top spending categories plus Other")
                .arg(Arg::new("n").long("n").value_parser(value_parser!(usize))),
        ))
        .subcommand(json_flags(
            Command::new("monthly")
                .about("Recent months, most recent first")
                .arg(
                    Arg::new("derived")
                        .long("derived")
                        .action(ArgAction::SetTrue)
                        .help("Group the recorded expenses by month instead"),
                ),
        ))
}

fn savings_cli() -> Command {
    Command::new("savings")
        .about("Savings goals and remaining funds")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("list").about("Goals with progress")))
        .subcommand(
            Command::new("add")
                .about("Create a goal")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("target").long("target").required(true))
                .arg(Arg::new("current").long("current").default_value("0"))
                .arg(Arg::new("date").long("date").required(true)),
        )
        .subcommand(
            Command::new("contribute")
                .about("Move remaining funds into a goal")
                .arg(id_arg())
                .arg(amount_arg()),
        )
        .subcommand(Command::new("rm").about("Remove a goal").arg(id_arg()))
        .subcommand(
            Command::new("edit")
                .about("Edit a goal")
                .arg(id_arg())
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("target").long("target"))
                .arg(Arg::new("current").long("current"))
                .arg(Arg::new("date").long("date")),
        )
        .subcommand(Command::new("funds").about("Remaining and allocated funds"))
        .subcommand(
            Command::new("resync")
                .about("Reset remaining funds to total income minus total expense"),
        )
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .about("Track income, expenses and savings goals")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("top")
                .long("top")
                .global(true)
                .env("POCKETLEDGER_TOP")
                .value_parser(value_parser!(usize))
                .help("Groups listed before Other"),
        )
        .arg(
            Arg::new("recent")
                .long("recent")
                .global(true)
                .env("POCKETLEDGER_RECENT")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("months")
                .long("months")
                .global(true)
                .env("POCKETLEDGER_MONTHS")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .global(true)
                .env("POCKETLEDGER_CURRENCY")
                .help("Currency symbol used in tables"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(json_flags(Command::new("dashboard").about("Summary of everything")))
        .subcommand(income_cli())
        .subcommand(expense_cli())
        .subcommand(savings_cli())
        .subcommand(json_flags(
            Command::new("activity")
                .about("Recent income and expenses")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("export")
                .about("Write records to CSV or JSON")
                .subcommand_required(true)
                .subcommand(export_target("activity"))
                .subcommand(export_target("expenses"))
                .subcommand(export_target("income")),
        )
        .subcommand(Command::new("shell").about("Read commands from stdin, one per line"))
}

fn export_target(name: &'static str) -> Command {
    Command::new(name)
        .arg(
            Arg::new("format")
                .long("format")
                .default_value("csv")
                .help("csv or json"),
        )
        .arg(Arg::new("out").long("out").required(true))
}
