// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::aggregate;
use crate::config::Config;
use crate::ledger::Ledger;
use crate::models::{Expense, MonthlyAmount, RecordId};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(ledger: &mut Ledger, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(ledger, config, sub)?,
        Some(("add", sub)) => {
            let category = sub.get_one::<String>("category").unwrap().trim().to_string();
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let date = parse_date(sub.get_one::<String>("date").unwrap())?;
            let description = sub
                .get_one::<String>("description")
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            let method = sub
                .get_one::<String>("method")
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            let outcome = ledger.add_expense(Expense::new(
                date,
                category.clone(),
                amount,
                description,
                method,
            ))?;
            super::report(
                &format!("Recorded {} under '{}'", fmt_money(&amount, &config.currency), category),
                &outcome,
                config,
            );
        }
        Some(("rm", sub)) => {
            let id = RecordId::from(sub.get_one::<String>("id").unwrap().as_str());
            let outcome = ledger.remove_expense(id)?;
            super::report("Removed expense", &outcome, config);
        }
        Some(("categories", _)) => {
            let rows = ledger
                .expenses()
                .categories()
                .iter()
                .map(|c| vec![c.id.to_string(), c.name.clone()])
                .collect();
            println!("{}", pretty_table(&["ID", "Name"], rows));
        }
        Some(("add-category", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().to_string();
            let outcome = ledger.add_expense_category(name)?;
            super::report("Added category", &outcome, config);
        }
        Some(("rm-category", sub)) => {
            let id = RecordId::from(sub.get_one::<String>("id").unwrap().as_str());
            let outcome = ledger.remove_expense_category(id)?;
            super::report("Removed category", &outcome, config);
        }
        Some(("top", sub)) => {
            let n = sub.get_one::<usize>("n").copied().unwrap_or(config.top_n);
            let ranking = ledger.top_categories(n);
            let rows = ranking.rows();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
                let data = rows
                    .iter()
                    .map(|r| {
                        vec![
                            r.label.clone(),
                            fmt_money(&r.amount, &config.currency),
                            share(r.amount, ranking.grand_total),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Category", "Amount", "Share"], data));
            }
        }
        Some(("monthly", sub)) => {
            let months = monthly(ledger, config, sub.get_flag("derived"));
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &months)? {
                let data = months
                    .iter()
                    .map(|m| vec![m.month.clone(), fmt_money(&m.amount, &config.currency)])
                    .collect();
                println!("{}", pretty_table(&["Month", "Expenses"], data));
            }
        }
        _ => {}
    }
    Ok(())
}

/// The stored monthly series, or one derived from the recorded expenses.
pub fn monthly(ledger: &Ledger, config: &Config, derived: bool) -> Vec<MonthlyAmount> {
    if derived {
        let series =
            aggregate::monthly_totals(ledger.expenses().expenses(), |e| e.date, |e| e.amount);
        aggregate::last_months(&series, config.months)
    } else {
        ledger.expense_months(config.months)
    }
}

fn share(amount: rust_decimal::Decimal, total: rust_decimal::Decimal) -> String {
    if total.is_zero() {
        return "-".to_string();
    }
    format!("{:.1}%", (amount / total * rust_decimal::Decimal::ONE_HUNDRED).round_dp(1))
}

/// Expenses newest first, optionally filtered by category name.
pub fn filtered<'a>(ledger: &'a Ledger, category: Option<&str>, limit: Option<usize>) -> Vec<&'a Expense> {
    let mut rows: Vec<&Expense> = ledger
        .expenses()
        .expenses()
        .iter()
        .filter(|e| category.is_none_or(|c| e.category.eq_ignore_ascii_case(c.trim())))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

fn list(ledger: &Ledger, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let rows = filtered(
        ledger,
        sub.get_one::<String>("category").map(|s| s.as_str()),
        sub.get_one::<usize>("limit").copied(),
    );
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.date.to_string(),
                    e.category.clone(),
                    e.description.clone(),
                    e.payment_method.clone(),
                    fmt_money(&e.amount, &config.currency),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Category", "Description", "Method", "Amount"],
                data
            )
        );
        println!(
            "Total expense: {}",
            fmt_money(&ledger.expenses().total_expense(), &config.currency)
        );
    }
    Ok(())
}
