// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use pocketledger::clock::FixedClock;
use pocketledger::config::Config;
use pocketledger::ledger::Ledger;
use pocketledger::{cli, commands, commands::exporter, seed};
use serde_json::Value;
use tempfile::tempdir;

fn setup() -> Ledger {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    seed::sample_ledger(Box::new(FixedClock(now)))
}

#[test]
fn export_expenses_writes_csv_with_header() {
    let mut ledger = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("expenses.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "pocketledger",
        "export",
        "expenses",
        "--out",
        out_str.as_str(),
    ]);
    commands::run(&mut ledger, &Config::default(), &matches).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "date", "category", "description", "payment_method", "amount"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 14);
    assert_eq!(&rows[4][0], "5");
    assert_eq!(&rows[4][2], "Groceries");
    assert_eq!(&rows[4][5], "200");
}

#[test]
fn export_activity_as_json_is_newest_first() {
    let ledger = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("activity.json");

    let count = exporter::export(&ledger, "activity", "json", &out_path).unwrap();
    assert_eq!(count, 17);

    let body = std::fs::read_to_string(&out_path).unwrap();
    let items: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(items.len(), 17);
    assert_eq!(items[0]["date"], "2024-02-26");
    assert_eq!(items[0]["kind"], "expense");
    assert_eq!(items[16]["kind"], "income");
    assert_eq!(items[16]["label"], "Salary");
}

#[test]
fn export_income_includes_source_names() {
    let ledger = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("income.csv");

    exporter::export(&ledger, "income", "csv", &out_path).unwrap();
    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let sources: Vec<String> = rdr
        .records()
        .map(|r| r.unwrap()[3].to_string())
        .collect();
    assert_eq!(sources, vec!["Salary", "Freelance", "Investments"]);
}

#[test]
fn unknown_format_is_an_error() {
    let ledger = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("expenses.xml");
    assert!(exporter::export(&ledger, "expenses", "xml", &out_path).is_err());
    assert!(!out_path.exists());
}
