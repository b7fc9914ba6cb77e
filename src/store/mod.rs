// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory record collections.
//!
//! Each store owns one or more [`RecordStore`]s. A `RecordStore` caches the
//! sum of its line items and recomputes it after every mutation, so the total
//! never drifts from the records it summarises.

pub mod expense;
pub mod income;
pub mod savings;

pub use expense::ExpenseStore;
pub use income::IncomeStore;
pub use savings::SavingsStore;

use rust_decimal::Decimal;

use crate::clock::Clock;
use crate::models::{Expense, ExpenseCategory, IncomeHistoryEntry, IncomeSource, RecordId, SavingsGoal};

/// A line item that can live in a [`RecordStore`].
pub trait Record {
    fn id(&self) -> &RecordId;
    fn set_id(&mut self, id: RecordId);
    /// The value this record contributes to its store's total.
    fn amount(&self) -> Decimal;
}

impl Record for IncomeSource {
    fn id(&self) -> &RecordId {
        &self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Record for IncomeHistoryEntry {
    fn id(&self) -> &RecordId {
        &self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Record for Expense {
    fn id(&self) -> &RecordId {
        &self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Record for ExpenseCategory {
    fn id(&self) -> &RecordId {
        &self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn amount(&self) -> Decimal {
        Decimal::ZERO
    }
}

// Goals feed the "funds allocated" total.
impl Record for SavingsGoal {
    fn id(&self) -> &RecordId {
        &self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn amount(&self) -> Decimal {
        self.current_amount
    }
}

#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
    total: Decimal,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: Decimal::ZERO,
        }
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        let mut store = Self {
            records,
            total: Decimal::ZERO,
        };
        store.recompute_total();
        store
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Next free id derived from the clock's millisecond timestamp.
    pub fn fresh_id(&self, clock: &dyn Clock) -> RecordId {
        let mut stamp = clock.now().timestamp_millis();
        loop {
            let id = RecordId::from(stamp);
            if !self.contains(&id) {
                return id;
            }
            stamp += 1;
        }
    }

    /// Appends a record, assigning a fresh id when it has none or its id is
    /// already taken. Always succeeds.
    pub fn add(&mut self, mut record: T, clock: &dyn Clock) -> RecordId {
        if record.id().is_unassigned() || self.contains(record.id()) {
            record.set_id(self.fresh_id(clock));
        }
        let id = record.id().clone();
        self.records.push(record);
        self.recompute_total();
        id
    }

    /// Removes the record with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &RecordId) -> Option<T> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        let removed = self.records.remove(pos);
        self.recompute_total();
        Some(removed)
    }

    /// Edits the record with `id` in place. Returns `false` for unknown ids.
    pub fn update<F: FnOnce(&mut T)>(&mut self, id: &RecordId, f: F) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        f(record);
        self.recompute_total();
        true
    }

    /// Drops every record matching `pred` and returns them.
    pub fn remove_where<F: Fn(&T) -> bool>(&mut self, pred: F) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) =
            std::mem::take(&mut self.records).into_iter().partition(|r| pred(r));
        self.records = kept;
        self.recompute_total();
        removed
    }

    pub fn recompute_total(&mut self) -> Decimal {
        self.total = self.records.iter().map(T::amount).sum();
        self.total
    }
}
