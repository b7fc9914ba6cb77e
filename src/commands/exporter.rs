// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Result, bail};
use serde_json::{Value, json};

use crate::ledger::Ledger;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let (what, sub) = match m.subcommand() {
        Some(pair) => pair,
        None => return Ok(()),
    };
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let count = export(ledger, what, &fmt, Path::new(out))?;
    println!("Exported {} {} rows to {}", count, what, out);
    Ok(())
}

/// Writes one collection to `out` as `csv` or `json`. Returns the row count.
pub fn export(ledger: &Ledger, what: &str, fmt: &str, out: &Path) -> Result<usize> {
    let (headers, rows) = match what {
        "activity" => activity_rows(ledger),
        "expenses" => expense_rows(ledger),
        "income" => income_rows(ledger),
        other => bail!("Unknown export target: {} (use activity|expenses|income)", other),
    };

    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(headers)?;
            for row in &rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<Value> = rows
                .iter()
                .map(|row| {
                    let obj = headers
                        .iter()
                        .zip(row)
                        .map(|(h, v)| (h.to_string(), json!(v)))
                        .collect::<serde_json::Map<_, _>>();
                    Value::Object(obj)
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    Ok(rows.len())
}

type Rows = (&'static [&'static str], Vec<Vec<String>>);

fn activity_rows(ledger: &Ledger) -> Rows {
    let all = ledger.income().history().len() + ledger.expenses().expenses().len();
    let rows = ledger
        .recent_activity(all)
        .into_iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.date.to_string(),
                serde_json::to_value(a.kind)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default(),
                a.label,
                a.amount.to_string(),
            ]
        })
        .collect();
    (&["id", "date", "kind", "label", "amount"], rows)
}

fn expense_rows(ledger: &Ledger) -> Rows {
    let rows = ledger
        .expenses()
        .expenses()
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.to_string(),
                e.category.clone(),
                e.description.clone(),
                e.payment_method.clone(),
                e.amount.to_string(),
            ]
        })
        .collect();
    (
        &["id", "date", "category", "description", "payment_method", "amount"],
        rows,
    )
}

fn income_rows(ledger: &Ledger) -> Rows {
    let income = ledger.income();
    let rows = income
        .history()
        .iter()
        .map(|h| {
            vec![
                h.id.to_string(),
                h.date.to_string(),
                h.source_id.to_string(),
                income
                    .source(&h.source_id)
                    .map(|s| s.r#type.clone())
                    .unwrap_or_default(),
                h.amount.to_string(),
            ]
        })
        .collect();
    (&["id", "date", "source_id", "source", "amount"], rows)
}
