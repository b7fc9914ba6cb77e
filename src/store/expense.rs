// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use super::RecordStore;
use crate::clock::Clock;
use crate::models::{Expense, ExpenseCategory, MonthlyAmount, RecordId};

#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: RecordStore<Expense>,
    categories: RecordStore<ExpenseCategory>,
    monthly_comparison: Vec<MonthlyAmount>,
}

impl ExpenseStore {
    pub fn new(
        expenses: Vec<Expense>,
        categories: Vec<ExpenseCategory>,
        monthly_comparison: Vec<MonthlyAmount>,
    ) -> Self {
        Self {
            expenses: RecordStore::new(expenses),
            categories: RecordStore::new(categories),
            monthly_comparison,
        }
    }

    pub fn total_expense(&self) -> Decimal {
        self.expenses.total()
    }

    pub fn expenses(&self) -> &[Expense] {
        self.expenses.records()
    }

    pub fn expense(&self, id: &RecordId) -> Option<&Expense> {
        self.expenses.get(id)
    }

    pub fn categories(&self) -> &[ExpenseCategory] {
        self.categories.records()
    }

    pub fn monthly_comparison(&self) -> &[MonthlyAmount] {
        &self.monthly_comparison
    }

    pub fn add_expense(&mut self, expense: Expense, clock: &dyn Clock) -> RecordId {
        self.expenses.add(expense, clock)
    }

    pub fn remove_expense(&mut self, id: &RecordId) -> Option<Expense> {
        self.expenses.remove(id)
    }

    pub fn add_category(&mut self, name: impl Into<String>, clock: &dyn Clock) -> RecordId {
        let category = ExpenseCategory {
            id: RecordId::unassigned(),
            name: name.into(),
        };
        self.categories.add(category, clock)
    }

    /// Expenses already filed under the category keep their label.
    pub fn remove_category(&mut self, id: &RecordId) -> Option<ExpenseCategory> {
        self.categories.remove(id)
    }
}
