// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config::Config;
use crate::ledger::{ActivityKind, Ledger};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(ledger: &mut Ledger, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    let limit = m
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(config.recent_limit);
    let items = ledger.recent_activity(limit);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &items)? {
        return Ok(());
    }
    let rows = items
        .iter()
        .map(|a| {
            let signed = match a.kind {
                ActivityKind::Income => format!("+{}", fmt_money(&a.amount, &config.currency)),
                ActivityKind::Expense => format!("-{}", fmt_money(&a.amount, &config.currency)),
            };
            vec![a.id.to_string(), a.date.to_string(), a.label.clone(), signed]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Date", "Label", "Amount"], rows));
    Ok(())
}
