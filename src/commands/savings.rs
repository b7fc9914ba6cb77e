// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::config::Config;
use crate::ledger::{GoalProgress, Ledger};
use crate::models::{GoalEdit, RecordId, SavingsGoal};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(ledger: &mut Ledger, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let goals = ledger.goals_progress();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &goals)? {
                println!("{}", goals_table(&goals, config));
            }
        }
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
            let current = parse_decimal(sub.get_one::<String>("current").unwrap())?;
            let date = parse_date(sub.get_one::<String>("date").unwrap())?;
            let outcome = ledger.add_savings_goal(SavingsGoal::new(name.clone(), target, current, date))?;
            super::report(&format!("Created goal '{}'", name), &outcome, config);
        }
        Some(("contribute", sub)) => {
            let id = RecordId::from(sub.get_one::<String>("id").unwrap().as_str());
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let outcome = ledger.contribute_to_goal(id, amount)?;
            super::report(
                &format!("Contributed {}", fmt_money(&amount, &config.currency)),
                &outcome,
                config,
            );
        }
        Some(("rm", sub)) => {
            let id = RecordId::from(sub.get_one::<String>("id").unwrap().as_str());
            let outcome = ledger.remove_savings_goal(id)?;
            super::report("Removed goal", &outcome, config);
        }
        Some(("edit", sub)) => {
            let id = RecordId::from(sub.get_one::<String>("id").unwrap().as_str());
            let edit = goal_edit(sub)?;
            let outcome = ledger.edit_savings_goal(id, edit)?;
            super::report("Updated goal", &outcome, config);
        }
        Some(("funds", _)) => {
            let t = ledger.totals();
            let rows = vec![
                vec!["Remaining".to_string(), fmt_money(&t.remaining_funds, &config.currency)],
                vec!["Allocated".to_string(), fmt_money(&t.allocated, &config.currency)],
                vec!["Income".to_string(), fmt_money(&t.total_income, &config.currency)],
                vec!["Expenses".to_string(), fmt_money(&t.total_expense, &config.currency)],
            ];
            println!("{}", pretty_table(&["Funds", "Amount"], rows));
        }
        Some(("resync", _)) => {
            let outcome = ledger.resync_remaining_funds()?;
            super::report("Recomputed remaining funds", &outcome, config);
        }
        _ => {}
    }
    Ok(())
}

fn goal_edit(sub: &clap::ArgMatches) -> Result<GoalEdit> {
    let edit = GoalEdit {
        name: sub.get_one::<String>("name").map(|s| s.trim().to_string()),
        target_amount: sub
            .get_one::<String>("target")
            .map(|s| parse_decimal(s))
            .transpose()?,
        current_amount: sub
            .get_one::<String>("current")
            .map(|s| parse_decimal(s))
            .transpose()?,
        target_date: sub
            .get_one::<String>("date")
            .map(|s| parse_date(s))
            .transpose()?,
    };
    if edit.is_empty() {
        bail!("Nothing to edit: pass --name, --target, --current or --date");
    }
    Ok(edit)
}

fn goals_table(goals: &[GoalProgress], config: &Config) -> comfy_table::Table {
    let rows = goals
        .iter()
        .map(|g| {
            let time_left = if g.complete {
                "Complete".to_string()
            } else {
                g.time_left.to_string()
            };
            vec![
                g.id.to_string(),
                g.name.clone(),
                format!(
                    "{} / {}",
                    fmt_money(&g.current_amount, &config.currency),
                    fmt_money(&g.target_amount, &config.currency)
                ),
                format!("{:.0}%", g.percent.round()),
                time_left,
                fmt_money(&g.monthly_contribution, &config.currency),
            ]
        })
        .collect();
    pretty_table(
        &["ID", "Goal", "Saved", "Progress", "Time left", "Per month"],
        rows,
    )
}
