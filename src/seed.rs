// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The sample data every session starts from.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::clock::Clock;
use crate::ledger::Ledger;
use crate::models::{
    Expense, ExpenseCategory, IncomeHistoryEntry, IncomeSource, MonthlyAmount, RecordId,
    SavingsGoal,
};
use crate::store::{ExpenseStore, IncomeStore, SavingsStore};

const fn seed_date(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

/// Seed dates are checked at compile time.
macro_rules! date {
    ($y:literal, $m:literal, $d:literal) => {
        const { seed_date($y, $m, $d) }
    };
}

fn source(id: &str, kind: &str, amount: i64, recurring: bool) -> IncomeSource {
    IncomeSource {
        id: RecordId::from(id),
        r#type: kind.to_string(),
        amount: Decimal::from(amount),
        recurring,
    }
}

fn payment(id: &str, on: NaiveDate, amount: i64, source_id: &str) -> IncomeHistoryEntry {
    IncomeHistoryEntry {
        id: RecordId::from(id),
        date: on,
        amount: Decimal::from(amount),
        source_id: RecordId::from(source_id),
    }
}

fn expense(id: i64, on: NaiveDate, category: &str, amount: i64, description: &str, method: &str) -> Expense {
    Expense {
        id: RecordId::from(id),
        date: on,
        description: description.to_string(),
        payment_method: method.to_string(),
        category: category.to_string(),
        amount: Decimal::from(amount),
    }
}

fn goal(id: &str, name: &str, target: i64, current: i64, by: NaiveDate) -> SavingsGoal {
    SavingsGoal {
        id: RecordId::from(id),
        name: name.to_string(),
        target_amount: Decimal::from(target),
        current_amount: Decimal::from(current),
        target_date: by,
    }
}

fn months(amounts: [(&str, i64); 3]) -> Vec<MonthlyAmount> {
    amounts
        .into_iter()
        .map(|(m, a)| MonthlyAmount::new(m, Decimal::from(a)))
        .collect()
}

/// Salary, freelance and investment income totalling 5000. The logged
/// payments are already included in the source amounts.
pub fn income_store() -> IncomeStore {
    IncomeStore::new(
        vec![
            source("1", "Salary", 3000, true),
            source("2", "Freelance", 1500, false),
            source("3", "Investments", 500, true),
        ],
        vec![
            payment("1", date!(2023, 10, 1), 3000, "1"),
            payment("2", date!(2023, 10, 15), 1500, "2"),
            payment("3", date!(2023, 10, 20), 500, "3"),
        ],
        months([("January", 4000), ("February", 4500), ("March", 5000)]),
    )
}

/// Fourteen expenses totalling 4640.
pub fn expense_store() -> ExpenseStore {
    let expenses = vec![
        expense(1, date!(2024, 1, 1), "Rent", 1200, "Monthly rent payment", "Bank transfer"),
        expense(2, date!(2024, 1, 5), "Utilities", 90, "Electricity bill", "Direct debit"),
        expense(3, date!(2024, 1, 7), "Groceries", 150, "Weekly grocery shopping", "Debit card"),
        expense(4, date!(2024, 1, 12), "Entertainment", 120, "Concert tickets", "Credit card"),
        expense(5, date!(2024, 1, 14), "Groceries", 200, "Monthly bulk shopping", "Debit card"),
        expense(6, date!(2024, 1, 18), "Transportation", 60, "Bus pass", "Debit card"),
        expense(7, date!(2024, 1, 25), "Home", 60, "Cleaning supplies", "Cash"),
        expense(8, date!(2024, 2, 1), "Rent", 1200, "Monthly rent payment", "Bank transfer"),
        expense(9, date!(2024, 2, 5), "Utilities", 90, "Electricity bill", "Direct debit"),
        expense(10, date!(2024, 2, 9), "Groceries", 250, "Weekly grocery shopping", "Debit card"),
        expense(11, date!(2024, 2, 14), "Entertainment", 195, "Valentine's dinner show", "Credit card"),
        expense(12, date!(2024, 2, 17), "Transportation", 55, "Fuel", "Credit card"),
        expense(13, date!(2024, 2, 21), "Dining", 420, "Restaurant meals", "Credit card"),
        expense(14, date!(2024, 2, 26), "Healthcare", 550, "Dental checkup", "Debit card"),
    ];
    let categories = [
        "Rent",
        "Utilities",
        "Groceries",
        "Entertainment",
        "Transportation",
        "Home",
        "Dining",
        "Healthcare",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, name)| ExpenseCategory {
        id: RecordId::from(i as i64 + 1),
        name: name.to_string(),
    })
    .collect();
    ExpenseStore::new(
        expenses,
        categories,
        months([("January", 1800), ("February", 2200), ("March", 2000)]),
    )
}

pub fn savings_store() -> SavingsStore {
    SavingsStore::new(vec![
        goal("1", "Vacation", 5000, 2000, date!(2025, 6, 1)),
        goal("2", "Emergency Fund", 10000, 4000, date!(2025, 12, 31)),
        goal("3", "New Laptop", 1500, 800, date!(2025, 5, 1)),
    ])
}

pub fn sample_ledger(clock: Box<dyn Clock>) -> Ledger {
    Ledger::new(income_store(), expense_store(), savings_store(), clock)
}
