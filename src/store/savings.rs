// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cell::Cell;

use rust_decimal::Decimal;

use super::RecordStore;
use crate::clock::Clock;
use crate::models::{RecordId, SavingsGoal};

/// Savings goals plus the pool of funds still available to allocate.
///
/// Remaining funds start out unseeded. The first read fixes them from the
/// income and expense totals passed in; after that they only move through
/// [`credit`](Self::credit), [`debit`](Self::debit) and
/// [`reseed`](Self::reseed).
#[derive(Debug, Clone, Default)]
pub struct SavingsStore {
    goals: RecordStore<SavingsGoal>,
    remaining_funds: Cell<Option<Decimal>>,
}

impl SavingsStore {
    pub fn new(goals: Vec<SavingsGoal>) -> Self {
        Self {
            goals: RecordStore::new(goals),
            remaining_funds: Cell::new(None),
        }
    }

    pub fn goals(&self) -> &[SavingsGoal] {
        self.goals.records()
    }

    pub fn goal(&self, id: &RecordId) -> Option<&SavingsGoal> {
        self.goals.get(id)
    }

    /// Sum of `current_amount` across all goals.
    pub fn allocated(&self) -> Decimal {
        self.goals.total()
    }

    pub fn is_seeded(&self) -> bool {
        self.remaining_funds.get().is_some()
    }

    /// Remaining funds, seeding them from `total_income - total_expense` on
    /// the first call.
    pub fn remaining_funds(&self, total_income: Decimal, total_expense: Decimal) -> Decimal {
        if let Some(funds) = self.remaining_funds.get() {
            return funds;
        }
        let seeded = total_income - total_expense;
        tracing::debug!(%seeded, "seeding remaining funds");
        self.remaining_funds.set(Some(seeded));
        seeded
    }

    pub fn reseed(&mut self, funds: Decimal) {
        self.remaining_funds.set(Some(funds));
    }

    /// Callers seed first; an unseeded pool is treated as zero.
    pub fn credit(&mut self, amount: Decimal) {
        let funds = self.remaining_funds.get().unwrap_or(Decimal::ZERO);
        self.remaining_funds.set(Some(funds + amount));
    }

    pub fn debit(&mut self, amount: Decimal) {
        self.credit(-amount);
    }

    pub fn add_goal(&mut self, goal: SavingsGoal, clock: &dyn Clock) -> RecordId {
        self.goals.add(goal, clock)
    }

    pub fn remove_goal(&mut self, id: &RecordId) -> Option<SavingsGoal> {
        self.goals.remove(id)
    }

    pub fn update_goal<F: FnOnce(&mut SavingsGoal)>(&mut self, id: &RecordId, f: F) -> bool {
        self.goals.update(id, f)
    }
}
