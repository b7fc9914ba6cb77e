// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rules that carry income and savings mutations into remaining funds.
//!
//! Remaining funds are the only state shared between stores. Every function
//! here that moves money expects the pool to be seeded already; the ledger
//! reads [`remaining_funds`] before it mutates anything.

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{GoalEdit, RecordId, SavingsGoal};
use crate::store::{ExpenseStore, IncomeStore, SavingsStore};

/// Current remaining funds, seeded from `income - expense` on first read.
pub fn remaining_funds(income: &IncomeStore, expenses: &ExpenseStore, savings: &SavingsStore) -> Decimal {
    savings.remaining_funds(income.total_income(), expenses.total_expense())
}

/// New income (a source or a logged payment) becomes allocatable.
pub fn income_added(savings: &mut SavingsStore, amount: Decimal) {
    savings.credit(amount);
}

/// A deleted income payment is taken back out of the pool.
pub fn income_reversed(savings: &mut SavingsStore, amount: Decimal) {
    savings.debit(amount);
}

fn check_available(requested: Decimal, available: Decimal) -> LedgerResult<()> {
    if requested > available {
        return Err(LedgerError::InsufficientFunds {
            requested,
            available,
        });
    }
    Ok(())
}

/// Validates a contribution against both the goal's headroom and the pool.
pub fn check_contribution(goal: &SavingsGoal, amount: Decimal, available: Decimal) -> LedgerResult<()> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount {
            field: "contribution",
            amount,
        });
    }
    if goal.current_amount + amount > goal.target_amount {
        return Err(LedgerError::ExceedsTarget {
            goal: goal.id.clone(),
            requested: amount,
            headroom: goal.headroom(),
        });
    }
    check_available(amount, available)
}

/// Moves `amount` from the pool into a goal. Returns the goal's new current
/// amount, or `None` when no goal has that id.
pub fn contribute(
    savings: &mut SavingsStore,
    goal_id: &RecordId,
    amount: Decimal,
    available: Decimal,
) -> LedgerResult<Option<Decimal>> {
    let Some(goal) = savings.goal(goal_id) else {
        return Ok(None);
    };
    check_contribution(goal, amount, available)?;
    let new_current = goal.current_amount + amount;
    savings.update_goal(goal_id, |g| g.current_amount = new_current);
    savings.debit(amount);
    Ok(Some(new_current))
}

/// A new goal's starting balance comes out of the pool.
pub fn goal_opened(savings: &mut SavingsStore, goal: &SavingsGoal, available: Decimal) -> LedgerResult<()> {
    check_available(goal.current_amount, available)?;
    savings.debit(goal.current_amount);
    Ok(())
}

/// What removing `goal` returns to the pool. Completed goals are treated as
/// spent and refund nothing; anything short of the target is refunded.
pub fn refund_for(goal: &SavingsGoal) -> Decimal {
    if goal.is_complete() {
        Decimal::ZERO
    } else {
        goal.current_amount
    }
}

/// Removes a goal and applies the refund policy. `None` for unknown ids.
pub fn goal_removed(savings: &mut SavingsStore, goal_id: &RecordId) -> Option<(SavingsGoal, Decimal)> {
    let goal = savings.remove_goal(goal_id)?;
    let refund = refund_for(&goal);
    savings.credit(refund);
    Some((goal, refund))
}

/// Applies an edit. A changed current amount moves the difference between the
/// goal and the pool; increases must be covered by `available`.
pub fn goal_edited(
    savings: &mut SavingsStore,
    goal_id: &RecordId,
    edit: &GoalEdit,
    available: Decimal,
) -> LedgerResult<Option<SavingsGoal>> {
    let Some(goal) = savings.goal(goal_id) else {
        return Ok(None);
    };

    let mut edited = goal.clone();
    if let Some(name) = &edit.name {
        edited.name = name.trim().to_string();
    }
    if let Some(target) = edit.target_amount {
        edited.target_amount = target;
    }
    if let Some(current) = edit.current_amount {
        edited.current_amount = current;
    }
    if let Some(date) = edit.target_date {
        edited.target_date = date;
    }

    validate_goal(&edited)?;
    let delta = edited.current_amount - goal.current_amount;
    if delta > Decimal::ZERO {
        check_available(delta, available)?;
    }

    let updated = edited.clone();
    savings.update_goal(goal_id, move |g| *g = edited);
    savings.debit(delta);
    Ok(Some(updated))
}

/// Field-level checks shared by goal creation and editing.
pub fn validate_goal(goal: &SavingsGoal) -> LedgerResult<()> {
    if goal.name.trim().is_empty() {
        return Err(LedgerError::MissingField("goal name"));
    }
    if goal.target_amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount {
            field: "target amount",
            amount: goal.target_amount,
        });
    }
    if goal.current_amount < Decimal::ZERO {
        return Err(LedgerError::NegativeAmount {
            field: "current amount",
            amount: goal.current_amount,
        });
    }
    if goal.current_amount > goal.target_amount {
        return Err(LedgerError::CurrentExceedsTarget {
            current: goal.current_amount,
            target: goal.target_amount,
        });
    }
    Ok(())
}
