// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use super::RecordStore;
use crate::clock::Clock;
use crate::models::{IncomeHistoryEntry, IncomeSource, MonthlyAmount, RecordId};

/// Income sources, the payments logged against them, and the monthly
/// comparison series.
///
/// A source's `amount` includes every history entry logged against it, so
/// total income is simply the sum of source amounts.
#[derive(Debug, Clone, Default)]
pub struct IncomeStore {
    sources: RecordStore<IncomeSource>,
    history: RecordStore<IncomeHistoryEntry>,
    monthly_comparison: Vec<MonthlyAmount>,
}

impl IncomeStore {
    pub fn new(
        sources: Vec<IncomeSource>,
        history: Vec<IncomeHistoryEntry>,
        monthly_comparison: Vec<MonthlyAmount>,
    ) -> Self {
        Self {
            sources: RecordStore::new(sources),
            history: RecordStore::new(history),
            monthly_comparison,
        }
    }

    pub fn total_income(&self) -> Decimal {
        self.sources.total()
    }

    pub fn sources(&self) -> &[IncomeSource] {
        self.sources.records()
    }

    pub fn source(&self, id: &RecordId) -> Option<&IncomeSource> {
        self.sources.get(id)
    }

    pub fn history(&self) -> &[IncomeHistoryEntry] {
        self.history.records()
    }

    pub fn history_entry(&self, id: &RecordId) -> Option<&IncomeHistoryEntry> {
        self.history.get(id)
    }

    pub fn history_for<'a>(
        &'a self,
        source_id: &'a RecordId,
    ) -> impl Iterator<Item = &'a IncomeHistoryEntry> + 'a {
        self.history
            .records()
            .iter()
            .filter(move |h| &h.source_id == source_id)
    }

    pub fn monthly_comparison(&self) -> &[MonthlyAmount] {
        &self.monthly_comparison
    }

    pub fn add_source(&mut self, source: IncomeSource, clock: &dyn Clock) -> RecordId {
        self.sources.add(source, clock)
    }

    /// Removes a source together with the history logged against it.
    pub fn remove_source(
        &mut self,
        id: &RecordId,
    ) -> Option<(IncomeSource, Vec<IncomeHistoryEntry>)> {
        let source = self.sources.remove(id)?;
        let orphaned = self.history.remove_where(|h| &h.source_id == id);
        Some((source, orphaned))
    }

    /// Logs a payment and adds it to its source. `None` when the source is
    /// unknown; nothing is stored in that case.
    pub fn add_history(&mut self, entry: IncomeHistoryEntry, clock: &dyn Clock) -> Option<RecordId> {
        let amount = entry.amount;
        let source_id = entry.source_id.clone();
        if !self.sources.contains(&source_id) {
            return None;
        }
        let id = self.history.add(entry, clock);
        self.sources.update(&source_id, |s| s.amount += amount);
        Some(id)
    }

    /// Deletes a payment and takes its amount back out of the source.
    pub fn remove_history(&mut self, id: &RecordId) -> Option<IncomeHistoryEntry> {
        let entry = self.history.remove(id)?;
        self.sources
            .update(&entry.source_id, |s| s.amount -= entry.amount);
        Some(entry)
    }
}
