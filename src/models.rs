// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record within its collection.
///
/// New records are stamped from the clock's millisecond timestamp; an empty
/// id means "not assigned yet" and is replaced when the record is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn unassigned() -> Self {
        Self(String::new())
    }

    pub fn is_unassigned(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s.trim().to_string())
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: RecordId,
    pub r#type: String,
    pub amount: Decimal,
    pub recurring: bool,
}

impl IncomeSource {
    pub fn new(kind: impl Into<String>, amount: Decimal, recurring: bool) -> Self {
        Self {
            id: RecordId::unassigned(),
            r#type: kind.into(),
            amount,
            recurring,
        }
    }
}

/// A dated payment received from one income source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeHistoryEntry {
    pub id: RecordId,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub source_id: RecordId, // IncomeSource.id, fixed at creation
}

impl IncomeHistoryEntry {
    pub fn new(date: NaiveDate, amount: Decimal, source_id: RecordId) -> Self {
        Self {
            id: RecordId::unassigned(),
            date,
            amount,
            source_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    pub date: NaiveDate,
    pub description: String,
    pub payment_method: String,
    pub category: String,
    pub amount: Decimal,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::unassigned(),
            date,
            description: description.into(),
            payment_method: payment_method.into(),
            category: category.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: RecordId,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
}

impl SavingsGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: Decimal,
        current_amount: Decimal,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: RecordId::unassigned(),
            name: name.into(),
            target_amount,
            current_amount,
            target_date,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount == self.target_amount
    }

    /// How much more the goal can take before reaching its target.
    pub fn headroom(&self) -> Decimal {
        self.target_amount - self.current_amount
    }
}

/// Partial update for a savings goal; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalEdit {
    pub name: Option<String>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub target_date: Option<NaiveDate>,
}

impl GoalEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.target_amount.is_none()
            && self.current_amount.is_none()
            && self.target_date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmount {
    pub month: String, // "January" or YYYY-MM
    pub amount: Decimal,
}

impl MonthlyAmount {
    pub fn new(month: impl Into<String>, amount: Decimal) -> Self {
        Self {
            month: month.into(),
            amount,
        }
    }
}
