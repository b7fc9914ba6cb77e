// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::ledger::Ledger;
use crate::models::{IncomeHistoryEntry, IncomeSource, RecordId};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(ledger: &mut Ledger, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(ledger, config, sub)?,
        Some(("add", sub)) => add(ledger, config, sub)?,
        Some(("rm", sub)) => {
            let id = RecordId::from(sub.get_one::<String>("id").unwrap().as_str());
            let outcome = ledger.remove_income(id)?;
            super::report("Removed income source", &outcome, config);
        }
        Some(("history", sub)) => history(ledger, config, sub)?,
        Some(("log", sub)) => log_payment(ledger, config, sub)?,
        Some(("unlog", sub)) => {
            let id = RecordId::from(sub.get_one::<String>("id").unwrap().as_str());
            let outcome = ledger.remove_income_history(id)?;
            super::report("Deleted payment", &outcome, config);
        }
        Some(("top", sub)) => {
            let n = sub.get_one::<usize>("n").copied().unwrap_or(config.top_n);
            let rows = ledger.top_income_sources(n).rows();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
                let data = rows
                    .iter()
                    .map(|r| vec![r.label.clone(), fmt_money(&r.amount, &config.currency)])
                    .collect();
                println!("{}", pretty_table(&["Type", "Amount"], data));
            }
        }
        Some(("monthly", sub)) => {
            let months = ledger.income_months(config.months);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &months)? {
                let data = months
                    .iter()
                    .map(|m| vec![m.month.clone(), fmt_money(&m.amount, &config.currency)])
                    .collect();
                println!("{}", pretty_table(&["Month", "Income"], data));
            }
        }
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let kind = sub.get_one::<String>("type").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let recurring = sub.get_flag("recurring");
    let outcome = ledger.add_income(IncomeSource::new(kind.clone(), amount, recurring))?;
    super::report(&format!("Added income source '{}'", kind), &outcome, config);
    Ok(())
}

fn log_payment(ledger: &mut Ledger, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let source = RecordId::from(sub.get_one::<String>("source").unwrap().as_str());
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let outcome = ledger.add_income_history(IncomeHistoryEntry::new(date, amount, source))?;
    super::report(&format!("Logged {} on {}", amount, date), &outcome, config);
    Ok(())
}

#[derive(Serialize)]
pub struct SourceRow {
    pub id: String,
    pub r#type: String,
    pub amount: String,
    pub recurring: bool,
    pub payments: usize,
}

pub fn source_rows(ledger: &Ledger) -> Vec<SourceRow> {
    ledger
        .income()
        .sources()
        .iter()
        .map(|s| SourceRow {
            id: s.id.to_string(),
            r#type: s.r#type.clone(),
            amount: format!("{:.2}", s.amount),
            recurring: s.recurring,
            payments: ledger.income().history_for(&s.id).count(),
        })
        .collect()
}

fn list(ledger: &Ledger, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let data = source_rows(ledger);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.r#type.clone(),
                    format!("{}{}", config.currency, r.amount),
                    if r.recurring { "yes" } else { "no" }.to_string(),
                    r.payments.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Type", "Amount", "Recurring", "Payments"], rows)
        );
        println!(
            "Total income: {}",
            fmt_money(&ledger.income().total_income(), &config.currency)
        );
    }
    Ok(())
}

fn history(ledger: &Ledger, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let only = sub
        .get_one::<String>("source")
        .map(|s| RecordId::from(s.as_str()));
    let entries: Vec<&IncomeHistoryEntry> = ledger
        .income()
        .history()
        .iter()
        .filter(|h| only.as_ref().is_none_or(|id| &h.source_id == id))
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &entries)? {
        let rows = entries
            .iter()
            .map(|h| {
                let source = ledger
                    .income()
                    .source(&h.source_id)
                    .map(|s| s.r#type.clone())
                    .unwrap_or_default();
                vec![
                    h.id.to_string(),
                    h.date.to_string(),
                    source,
                    fmt_money(&h.amount, &config.currency),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["ID", "Date", "Source", "Amount"], rows));
    }
    Ok(())
}
