// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use pocketledger::aggregate::TimeLeft;
use pocketledger::clock::FixedClock;
use pocketledger::config::Config;
use pocketledger::ledger::{ActivityKind, Change, Command, Ledger};
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

#[test]
fn dispatch_reports_totals_after_each_command() {
    let mut ledger = setup();
    let outcome = ledger
        .dispatch(Command::AddIncome(IncomeSource::new("Gift", d(200), false)))
        .unwrap();
    assert_eq!(outcome.totals.total_income, d(5200));
    assert_eq!(outcome.totals.total_expense, d(4640));
    assert_eq!(outcome.totals.allocated, d(6800));
    assert_eq!(outcome.totals.remaining_funds, d(560));

    let outcome = ledger
        .dispatch(Command::RemoveExpense(RecordId::from("5")))
        .unwrap();
    assert_eq!(outcome.change, Change::Applied { id: RecordId::from("5") });
    assert_eq!(outcome.totals.total_expense, d(4440));
}

#[test]
fn dispatch_treats_unknown_ids_as_no_ops() {
    let mut ledger = setup();
    let outcome = ledger
        .dispatch(Command::RemoveSavingsGoal(RecordId::from("404")))
        .unwrap();
    assert!(!outcome.applied());
    assert_eq!(outcome.id(), None);
    assert_eq!(ledger.savings().goals().len(), 3);
}

#[test]
fn resync_is_reported_against_the_funds_pool() {
    let mut ledger = setup();
    let outcome = ledger.dispatch(Command::ResyncRemainingFunds).unwrap();
    assert_eq!(outcome.change, Change::Resynced { funds: d(360) });
    assert!(outcome.applied());
    assert_eq!(outcome.id(), None);
    assert_eq!(outcome.totals.remaining_funds, d(360));
}

#[test]
fn recent_activity_is_newest_first() {
    let ledger = setup();
    let recent = ledger.recent_activity(5);
    let ids: Vec<&str> = recent.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["14", "13", "12", "11", "10"]);
    assert!(recent.iter().all(|a| a.kind == ActivityKind::Expense));
    assert_eq!(recent[0].label, "Healthcare");

    let everything = ledger.recent_activity(100);
    assert_eq!(everything.len(), 17);
    let last = everything.last().unwrap();
    assert_eq!(last.kind, ActivityKind::Income);
    assert_eq!(last.label, "Salary");
    assert_eq!(last.date, date("2023-10-01"));
}

#[test]
fn recent_activity_breaks_date_ties_by_insertion() {
    let mut ledger = setup();
    let payment = ledger
        .add_income_history(IncomeHistoryEntry::new(
            date("2024-02-26"),
            d(100),
            RecordId::from("2"),
        ))
        .unwrap();
    let pizza = ledger
        .add_expense(Expense::new(date("2024-02-26"), "Dining", d(30), "Pizza", "Cash"))
        .unwrap();
    let taxi = ledger
        .add_expense(Expense::new(date("2024-02-26"), "Transportation", d(25), "Taxi", "Cash"))
        .unwrap();

    let recent = ledger.recent_activity(4);
    assert_eq!(&recent[0].id, taxi.id().unwrap());
    assert_eq!(&recent[1].id, pizza.id().unwrap());
    assert_eq!(recent[2].id, RecordId::from("14"));
    assert_eq!(&recent[3].id, payment.id().unwrap());
    assert_eq!(recent[3].kind, ActivityKind::Income);
}

#[test]
fn goal_progress_combines_all_goal_figures() {
    let ledger = setup();
    let goals = ledger.goals_progress();
    assert_eq!(goals.len(), 3);

    let vacation = &goals[0];
    assert_eq!(vacation.name, "Vacation");
    assert_eq!(vacation.percent, d(40));
    assert_eq!(vacation.time_left, TimeLeft::Days(137));
    assert_eq!(vacation.monthly_contribution, d(400));
    assert!(!vacation.complete);

    let laptop = &goals[2];
    assert_eq!(laptop.monthly_contribution, d(200));
}

#[test]
fn dashboard_collects_every_summary() {
    let ledger = setup();
    let dash = ledger.dashboard(&Config::default());

    assert_eq!(dash.totals.total_income, d(5000));
    assert_eq!(dash.totals.remaining_funds, d(360));
    assert_eq!(dash.income_sources.top.len(), 3);
    assert_eq!(dash.income_sources.other, None);

    let top: Vec<&str> = dash
        .top_expense_categories
        .top
        .iter()
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(top, vec!["Rent", "Groceries", "Healthcare"]);
    assert_eq!(dash.top_expense_categories.other, Some(d(1090)));

    assert_eq!(dash.goals.len(), 3);
    assert_eq!(dash.recent_activity.len(), 5);
    assert!(dash.average_weekly_spending > Decimal::ZERO);
}

#[test]
fn dashboard_follows_config_limits() {
    let ledger = setup();
    let config = Config {
        top_n: 1,
        recent_limit: 2,
        ..Config::default()
    };
    let dash = ledger.dashboard(&config);
    assert_eq!(dash.top_expense_categories.top.len(), 1);
    assert_eq!(dash.top_expense_categories.other, Some(d(2240)));
    assert_eq!(dash.income_sources.other, Some(d(2000)));
    assert_eq!(dash.recent_activity.len(), 2);
}

#[test]
fn monthly_views_take_the_last_months() {
    let ledger = setup();
    let income = ledger.income_months(3);
    let months: Vec<&str> = income.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["March", "February", "January"]);
    let expenses = ledger.expense_months(1);
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].amount, d(2000));
}
