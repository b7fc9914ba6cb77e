// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use pocketledger::clock::{Clock, FixedClock};
use pocketledger::error::LedgerError;
use pocketledger::ledger::{Change, Ledger};
use pocketledger::models::{Expense, IncomeHistoryEntry, IncomeSource, RecordId};
use pocketledger::seed;
use rust_decimal::Decimal;

fn setup() -> Ledger {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    seed::sample_ledger(Box::new(FixedClock(now)))
}

fn d(n: i64) -> Decimal {
    Decimal::from(n)
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn expense_sum(ledger: &Ledger) -> Decimal {
    ledger.expenses().expenses().iter().map(|e| e.amount).sum()
}

fn income_sum(ledger: &Ledger) -> Decimal {
    ledger.income().sources().iter().map(|s| s.amount).sum()
}

#[test]
fn seed_totals_match_records() {
    let ledger = setup();
    assert_eq!(ledger.income().total_income(), d(5000));
    assert_eq!(ledger.income().sources().len(), 3);
    assert_eq!(ledger.expenses().total_expense(), d(4640));
    assert_eq!(ledger.expenses().expenses().len(), 14);
    assert_eq!(ledger.savings().allocated(), d(6800));
}

#[test]
fn adding_income_source_grows_total() {
    let mut ledger = setup();
    let outcome = ledger
        .add_income(IncomeSource::new("Gift", d(200), false))
        .unwrap();
    assert!(outcome.applied());
    assert_eq!(outcome.totals.total_income, d(5200));
    assert_eq!(ledger.income().sources().len(), 4);

    let id = outcome.id().unwrap();
    let added = ledger.income().source(id).unwrap();
    assert_eq!(added.r#type, "Gift");
    assert!(!added.recurring);
}

#[test]
fn removing_expense_by_id_shrinks_history() {
    let mut ledger = setup();
    let outcome = ledger.remove_expense("5").unwrap();
    assert_eq!(outcome.id(), Some(&RecordId::from("5")));
    assert_eq!(ledger.expenses().total_expense(), d(4440));
    assert_eq!(ledger.expenses().expenses().len(), 13);
    assert!(ledger.expenses().expense(&RecordId::from("5")).is_none());
}

#[test]
fn totals_track_line_items_through_mixed_edits() {
    let mut ledger = setup();
    let a = ledger
        .add_expense(Expense::new(date("2024-03-01"), "Rent", d(1200), "", ""))
        .unwrap();
    assert_eq!(ledger.expenses().total_expense(), expense_sum(&ledger));
    ledger.remove_expense("1").unwrap();
    assert_eq!(ledger.expenses().total_expense(), expense_sum(&ledger));
    ledger
        .add_expense(Expense::new(date("2024-03-02"), "Dining", Decimal::new(1999, 2), "Lunch", "Cash"))
        .unwrap();
    assert_eq!(ledger.expenses().total_expense(), expense_sum(&ledger));
    ledger.remove_expense(a.id().unwrap().clone()).unwrap();
    assert_eq!(ledger.expenses().total_expense(), expense_sum(&ledger));
    assert_eq!(ledger.expenses().total_expense(), Decimal::new(345999, 2));

    ledger
        .add_income(IncomeSource::new("Bonus", d(750), false))
        .unwrap();
    ledger.remove_income("3").unwrap();
    assert_eq!(ledger.income().total_income(), income_sum(&ledger));
    assert_eq!(ledger.income().total_income(), d(5250));
}

#[test]
fn unknown_ids_are_no_ops() {
    let mut ledger = setup();
    let before = ledger.totals();
    for outcome in [
        ledger.remove_expense("999").unwrap(),
        ledger.remove_income("999").unwrap(),
        ledger.remove_income_history("999").unwrap(),
        ledger.remove_expense_category("999").unwrap(),
    ] {
        assert_eq!(outcome.change, Change::NoOp);
        assert_eq!(outcome.totals, before);
    }
    assert_eq!(ledger.expenses().expenses().len(), 14);
}

#[test]
fn logging_a_payment_credits_its_source() {
    let mut ledger = setup();
    let entry = IncomeHistoryEntry::new(date("2024-03-01"), d(250), RecordId::from("1"));
    let outcome = ledger.add_income_history(entry).unwrap();
    assert!(outcome.applied());
    assert_eq!(ledger.income().source(&RecordId::from("1")).unwrap().amount, d(3250));
    assert_eq!(ledger.income().total_income(), d(5250));
    assert_eq!(ledger.income().history().len(), 4);
}

#[test]
fn deleting_a_payment_debits_its_source() {
    let mut ledger = setup();
    ledger.remove_income_history("2").unwrap();
    assert_eq!(ledger.income().source(&RecordId::from("2")).unwrap().amount, d(0));
    assert_eq!(ledger.income().total_income(), d(3500));
    assert_eq!(ledger.income().history().len(), 2);
}

#[test]
fn payment_for_unknown_source_is_rejected() {
    let mut ledger = setup();
    let entry = IncomeHistoryEntry::new(date("2024-03-01"), d(250), RecordId::from("42"));
    let err = ledger.add_income_history(entry).unwrap_err();
    assert_eq!(err, LedgerError::UnknownIncomeSource(RecordId::from("42")));
    assert_eq!(ledger.income().history().len(), 3);
}

#[test]
fn removing_a_source_drops_its_history() {
    let mut ledger = setup();
    ledger.remove_income("2").unwrap();
    assert_eq!(ledger.income().sources().len(), 2);
    assert_eq!(ledger.income().total_income(), d(3500));
    assert!(
        ledger
            .income()
            .history()
            .iter()
            .all(|h| h.source_id != RecordId::from("2"))
    );
    assert_eq!(ledger.income().history().len(), 2);
}

#[test]
fn invalid_records_leave_stores_untouched() {
    let mut ledger = setup();
    let before = ledger.totals();

    let err = ledger
        .add_expense(Expense::new(date("2024-03-01"), "Rent", d(0), "", ""))
        .unwrap_err();
    assert!(matches!(err, LedgerError::NonPositiveAmount { .. }));

    let err = ledger
        .add_expense(Expense::new(date("2024-03-01"), "   ", d(10), "", ""))
        .unwrap_err();
    assert_eq!(err, LedgerError::MissingField("expense category"));

    let err = ledger
        .add_income(IncomeSource::new("Gift", d(-5), false))
        .unwrap_err();
    assert!(matches!(err, LedgerError::NonPositiveAmount { .. }));

    assert_eq!(ledger.totals(), before);
    assert_eq!(ledger.expenses().expenses().len(), 14);
    assert_eq!(ledger.income().sources().len(), 3);
}

#[test]
fn labels_are_trimmed_on_add() {
    let mut ledger = setup();
    let outcome = ledger
        .add_income(IncomeSource::new("  Gift ", d(200), true))
        .unwrap();
    let source = ledger.income().source(outcome.id().unwrap()).unwrap();
    assert_eq!(source.r#type, "Gift");
}

#[test]
fn categories_can_be_added_and_removed() {
    let mut ledger = setup();
    let outcome = ledger.add_expense_category(" Travel ").unwrap();
    let id = outcome.id().unwrap().clone();
    assert_eq!(ledger.expenses().categories().len(), 9);
    assert!(
        ledger
            .expenses()
            .categories()
            .iter()
            .any(|c| c.name == "Travel" && c.id == id)
    );

    ledger.remove_expense_category("3").unwrap();
    assert_eq!(ledger.expenses().categories().len(), 8);
    // expenses filed under the removed category keep their label
    assert_eq!(
        ledger
            .expenses()
            .expenses()
            .iter()
            .filter(|e| e.category == "Groceries")
            .count(),
        3
    );

    assert_eq!(
        ledger.add_expense_category("").unwrap_err(),
        LedgerError::MissingField("category name")
    );
}

#[test]
fn new_ids_come_from_the_clock() {
    let mut ledger = setup();
    let stamp = ledger.clock().now().timestamp_millis();
    let first = ledger
        .add_expense(Expense::new(date("2024-03-01"), "Home", d(10), "", ""))
        .unwrap();
    let second = ledger
        .add_expense(Expense::new(date("2024-03-01"), "Home", d(10), "", ""))
        .unwrap();
    assert_eq!(first.id(), Some(&RecordId::from(stamp)));
    assert_eq!(second.id(), Some(&RecordId::from(stamp + 1)));
}
