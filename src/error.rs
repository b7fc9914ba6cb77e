// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::RecordId;

/// Reasons a ledger command is rejected.
///
/// Every variant is a validation failure: the command is refused before any
/// store is touched. Missing records are not errors; commands against an
/// unknown id complete as a no-op.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("{field} must be greater than zero (got {amount})")]
    NonPositiveAmount { field: &'static str, amount: Decimal },

    #[error("{field} cannot be negative (got {amount})")]
    NegativeAmount { field: &'static str, amount: Decimal },

    #[error("{0} is required")]
    MissingField(&'static str),

    /// An income history entry referenced a source that does not exist.
    #[error("income source '{0}' not found")]
    UnknownIncomeSource(RecordId),

    /// A contribution would push the goal past its target.
    #[error("contribution of {requested} exceeds what goal '{goal}' still needs ({headroom})")]
    ExceedsTarget {
        goal: RecordId,
        requested: Decimal,
        headroom: Decimal,
    },

    #[error("insufficient remaining funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("current amount {current} is above target amount {target}")]
    CurrentExceedsTarget { current: Decimal, target: Decimal },
}

pub type LedgerResult<T> = Result<T, LedgerError>;
