// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::aggregate::Ranking;
use crate::config::Config;
use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(ledger: &mut Ledger, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    let dash = ledger.dashboard(config);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &dash)? {
        return Ok(());
    }
    let cur = config.currency.as_str();
    let t = &dash.totals;

    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Allocated", "Remaining"],
            vec![vec![
                fmt_money(&t.total_income, cur),
                fmt_money(&t.total_expense, cur),
                fmt_money(&t.allocated, cur),
                fmt_money(&t.remaining_funds, cur),
            ]],
        )
    );
    println!(
        "{}",
        ranking_table("Income source", &dash.income_sources, cur)
    );
    println!(
        "{}",
        ranking_table("Expense category", &dash.top_expense_categories, cur)
    );
    println!(
        "Average weekly spending: {}",
        fmt_money(&dash.average_weekly_spending, cur)
    );

    let goals = dash
        .goals
        .iter()
        .map(|g| {
            vec![
                g.name.clone(),
                format!("{:.0}%", g.percent.round()),
                g.time_left.to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Goal", "Progress", "Time left"], goals));
    println!(
        "Average monthly contribution: {}",
        fmt_money(&dash.average_monthly_contribution, cur)
    );

    let recent = dash
        .recent_activity
        .iter()
        .map(|a| {
            vec![
                a.date.to_string(),
                format!("{:?}", a.kind),
                a.label.clone(),
                fmt_money(&a.amount, cur),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Kind", "Label", "Amount"], recent)
    );
    Ok(())
}

fn ranking_table(heading: &str, ranking: &Ranking, cur: &str) -> comfy_table::Table {
    let rows = ranking
        .rows()
        .into_iter()
        .map(|r| vec![r.label, fmt_money(&r.amount, cur)])
        .collect();
    pretty_table(&[heading, "Amount"], rows)
}
