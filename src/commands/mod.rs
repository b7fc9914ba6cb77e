// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod activity;
pub mod dashboard;
pub mod expenses;
pub mod exporter;
pub mod income;
pub mod savings;
pub mod shell;

use anyhow::Result;

use crate::config::Config;
use crate::ledger::{Change, Ledger, Outcome};
use crate::utils::fmt_money;

/// Runs one parsed command line against `ledger`.
pub fn run(ledger: &mut Ledger, config: &Config, matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("dashboard", sub)) => dashboard::handle(ledger, config, sub)?,
        Some(("income", sub)) => income::handle(ledger, config, sub)?,
        Some(("expense", sub)) => expenses::handle(ledger, config, sub)?,
        Some(("savings", sub)) => savings::handle(ledger, config, sub)?,
        Some(("activity", sub)) => activity::handle(ledger, config, sub)?,
        Some(("export", sub)) => exporter::handle(ledger, sub)?,
        _ => {
            crate::cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

pub(crate) fn report(what: &str, outcome: &Outcome, config: &Config) {
    match &outcome.change {
        Change::Applied { id } => println!("{} (id {})", what, id),
        Change::Resynced { funds } => {
            println!("{} ({})", what, fmt_money(funds, &config.currency))
        }
        Change::NoOp => println!("Nothing to do: no matching record"),
    }
    let t = &outcome.totals;
    println!(
        "Income {} | Expenses {} | Allocated {} | Remaining {}",
        fmt_money(&t.total_income, &config.currency),
        fmt_money(&t.total_expense, &config.currency),
        fmt_money(&t.allocated, &config.currency),
        fmt_money(&t.remaining_funds, &config.currency),
    );
}
