// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The application state container.
//!
//! A [`Ledger`] owns the income, expense and savings stores plus the clock
//! used for ids and date arithmetic. All mutation goes through typed
//! [`Command`]s; queries are plain `&self` reads computed on demand.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{self, Ranking, TimeLeft};
use crate::clock::Clock;
use crate::config::Config;
use crate::coordinator;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Expense, GoalEdit, IncomeHistoryEntry, IncomeSource, MonthlyAmount, RecordId, SavingsGoal,
};
use crate::store::{ExpenseStore, IncomeStore, SavingsStore};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub allocated: Decimal,
    pub remaining_funds: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Change {
    Applied { id: RecordId },
    /// The funds pool was recomputed from the current totals.
    Resynced { funds: Decimal },
    /// The command named a record that does not exist.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub change: Change,
    pub totals: Totals,
}

impl Outcome {
    pub fn applied(&self) -> bool {
        !matches!(self.change, Change::NoOp)
    }

    pub fn id(&self) -> Option<&RecordId> {
        match &self.change {
            Change::Applied { id } => Some(id),
            Change::Resynced { .. } | Change::NoOp => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddIncome(IncomeSource),
    RemoveIncome(RecordId),
    AddIncomeHistory(IncomeHistoryEntry),
    RemoveIncomeHistory(RecordId),
    AddExpense(Expense),
    RemoveExpense(RecordId),
    AddExpenseCategory(String),
    RemoveExpenseCategory(RecordId),
    AddSavingsGoal(SavingsGoal),
    ContributeToGoal { id: RecordId, amount: Decimal },
    RemoveSavingsGoal(RecordId),
    EditSavingsGoal { id: RecordId, edit: GoalEdit },
    ResyncRemainingFunds,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::AddIncome(_) => "add_income",
            Command::RemoveIncome(_) => "remove_income",
            Command::AddIncomeHistory(_) => "add_income_history",
            Command::RemoveIncomeHistory(_) => "remove_income_history",
            Command::AddExpense(_) => "add_expense",
            Command::RemoveExpense(_) => "remove_expense",
            Command::AddExpenseCategory(_) => "add_expense_category",
            Command::RemoveExpenseCategory(_) => "remove_expense_category",
            Command::AddSavingsGoal(_) => "add_savings_goal",
            Command::ContributeToGoal { .. } => "contribute_to_goal",
            Command::RemoveSavingsGoal(_) => "remove_savings_goal",
            Command::EditSavingsGoal { .. } => "edit_savings_goal",
            Command::ResyncRemainingFunds => "resync_remaining_funds",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub id: RecordId,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub percent: Decimal,
    pub time_left: TimeLeft,
    pub monthly_contribution: Decimal,
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: RecordId,
    pub date: NaiveDate,
    pub kind: ActivityKind,
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub totals: Totals,
    pub income_sources: Ranking,
    pub top_expense_categories: Ranking,
    pub average_weekly_spending: Decimal,
    pub goals: Vec<GoalProgress>,
    pub average_monthly_contribution: Decimal,
    pub recent_activity: Vec<Activity>,
}

pub struct Ledger {
    income: IncomeStore,
    expenses: ExpenseStore,
    savings: SavingsStore,
    clock: Box<dyn Clock>,
}

impl Ledger {
    pub fn new(
        income: IncomeStore,
        expenses: ExpenseStore,
        savings: SavingsStore,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            income,
            expenses,
            savings,
            clock,
        }
    }

    pub fn income(&self) -> &IncomeStore {
        &self.income
    }

    pub fn expenses(&self) -> &ExpenseStore {
        &self.expenses
    }

    pub fn savings(&self) -> &SavingsStore {
        &self.savings
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // ---- queries ----

    pub fn remaining_funds(&self) -> Decimal {
        coordinator::remaining_funds(&self.income, &self.expenses, &self.savings)
    }

    pub fn totals(&self) -> Totals {
        Totals {
            total_income: self.income.total_income(),
            total_expense: self.expenses.total_expense(),
            allocated: self.savings.allocated(),
            remaining_funds: self.remaining_funds(),
        }
    }

    pub fn top_categories(&self, n: usize) -> Ranking {
        aggregate::top_expense_categories(self.expenses.expenses(), n)
    }

    pub fn top_income_sources(&self, n: usize) -> Ranking {
        aggregate::top_n(self.income.sources(), n, |s| s.r#type.as_str(), |s| s.amount)
    }

    pub fn income_months(&self, k: usize) -> Vec<MonthlyAmount> {
        aggregate::last_months(self.income.monthly_comparison(), k)
    }

    pub fn expense_months(&self, k: usize) -> Vec<MonthlyAmount> {
        aggregate::last_months(self.expenses.monthly_comparison(), k)
    }

    pub fn goal_progress(&self, goal: &SavingsGoal) -> GoalProgress {
        let now = self.clock.now();
        GoalProgress {
            id: goal.id.clone(),
            name: goal.name.clone(),
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            target_date: goal.target_date,
            percent: aggregate::goal_progress(goal),
            time_left: aggregate::time_left(goal.target_date, now),
            monthly_contribution: aggregate::monthly_contribution_rate(goal, now.date_naive()),
            complete: goal.is_complete(),
        }
    }

    pub fn goals_progress(&self) -> Vec<GoalProgress> {
        self.savings
            .goals()
            .iter()
            .map(|g| self.goal_progress(g))
            .collect()
    }

    /// Income payments and expenses, newest first. On equal dates expenses
    /// come before payments, and the later addition of each kind comes first.
    pub fn recent_activity(&self, limit: usize) -> Vec<Activity> {
        let incomes = self.income.history().iter().map(|h| Activity {
            id: h.id.clone(),
            date: h.date,
            kind: ActivityKind::Income,
            label: self
                .income
                .source(&h.source_id)
                .map(|s| s.r#type.clone())
                .unwrap_or_else(|| h.source_id.to_string()),
            amount: h.amount,
        });
        let expenses = self.expenses.expenses().iter().map(|e| Activity {
            id: e.id.clone(),
            date: e.date,
            kind: ActivityKind::Expense,
            label: e.category.clone(),
            amount: e.amount,
        });
        let mut items: Vec<Activity> = incomes.chain(expenses).collect();
        items.reverse();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items.truncate(limit);
        items
    }

    pub fn dashboard(&self, config: &Config) -> Dashboard {
        let today = self.clock.today();
        Dashboard {
            totals: self.totals(),
            income_sources: self.top_income_sources(config.top_n),
            top_expense_categories: self.top_categories(config.top_n),
            average_weekly_spending: aggregate::average_weekly_spending(self.expenses.expenses()),
            goals: self.goals_progress(),
            average_monthly_contribution: aggregate::average_monthly_contribution(
                self.savings.goals(),
                today,
            ),
            recent_activity: self.recent_activity(config.recent_limit),
        }
    }

    // ---- commands ----

    /// Applies one command. Validation failures leave every store untouched;
    /// commands naming an unknown record complete as [`Change::NoOp`].
    ///
    /// The funds pool is seeded before any command runs, so the seed always
    /// reflects the totals as they stood before the first mutation.
    pub fn dispatch(&mut self, command: Command) -> LedgerResult<Outcome> {
        let name = command.name();
        self.remaining_funds();
        let result = match command {
            Command::AddIncome(source) => self.apply_add_income(source),
            Command::RemoveIncome(id) => Ok(self.apply_remove_income(&id)),
            Command::AddIncomeHistory(entry) => self.apply_add_income_history(entry),
            Command::RemoveIncomeHistory(id) => Ok(self.apply_remove_income_history(&id)),
            Command::AddExpense(expense) => self.apply_add_expense(expense),
            Command::RemoveExpense(id) => Ok(self
                .expenses
                .remove_expense(&id)
                .map(|e| e.id)),
            Command::AddExpenseCategory(category) => self.apply_add_category(category),
            Command::RemoveExpenseCategory(id) => Ok(self
                .expenses
                .remove_category(&id)
                .map(|c| c.id)),
            Command::AddSavingsGoal(goal) => self.apply_add_goal(goal),
            Command::ContributeToGoal { id, amount } => self.apply_contribute(&id, amount),
            Command::RemoveSavingsGoal(id) => Ok(self.apply_remove_goal(&id)),
            Command::EditSavingsGoal { id, edit } => self.apply_edit_goal(&id, &edit),
            Command::ResyncRemainingFunds => {
                let funds = self.apply_resync();
                tracing::info!(command = name, %funds, "remaining funds resynced");
                return Ok(Outcome {
                    change: Change::Resynced { funds },
                    totals: self.totals(),
                });
            }
        };

        match result {
            Ok(Some(id)) => {
                let totals = self.totals();
                tracing::info!(
                    command = name,
                    %id,
                    total_income = %totals.total_income,
                    total_expense = %totals.total_expense,
                    remaining_funds = %totals.remaining_funds,
                    "command applied"
                );
                Ok(Outcome {
                    change: Change::Applied { id },
                    totals,
                })
            }
            Ok(None) => {
                tracing::debug!(command = name, "no matching record; nothing changed");
                Ok(Outcome {
                    change: Change::NoOp,
                    totals: self.totals(),
                })
            }
            Err(err) => {
                tracing::warn!(command = name, error = %err, "command rejected");
                Err(err)
            }
        }
    }

    pub fn add_income(&mut self, source: IncomeSource) -> LedgerResult<Outcome> {
        self.dispatch(Command::AddIncome(source))
    }

    pub fn remove_income(&mut self, id: impl Into<RecordId>) -> LedgerResult<Outcome> {
        self.dispatch(Command::RemoveIncome(id.into()))
    }

    pub fn add_income_history(&mut self, entry: IncomeHistoryEntry) -> LedgerResult<Outcome> {
        self.dispatch(Command::AddIncomeHistory(entry))
    }

    pub fn remove_income_history(&mut self, id: impl Into<RecordId>) -> LedgerResult<Outcome> {
        self.dispatch(Command::RemoveIncomeHistory(id.into()))
    }

    pub fn add_expense(&mut self, expense: Expense) -> LedgerResult<Outcome> {
        self.dispatch(Command::AddExpense(expense))
    }

    pub fn remove_expense(&mut self, id: impl Into<RecordId>) -> LedgerResult<Outcome> {
        self.dispatch(Command::RemoveExpense(id.into()))
    }

    pub fn add_expense_category(&mut self, name: impl Into<String>) -> LedgerResult<Outcome> {
        self.dispatch(Command::AddExpenseCategory(name.into()))
    }

    pub fn remove_expense_category(&mut self, id: impl Into<RecordId>) -> LedgerResult<Outcome> {
        self.dispatch(Command::RemoveExpenseCategory(id.into()))
    }

    pub fn add_savings_goal(&mut self, goal: SavingsGoal) -> LedgerResult<Outcome> {
        self.dispatch(Command::AddSavingsGoal(goal))
    }

    pub fn contribute_to_goal(
        &mut self,
        id: impl Into<RecordId>,
        amount: Decimal,
    ) -> LedgerResult<Outcome> {
        self.dispatch(Command::ContributeToGoal {
            id: id.into(),
            amount,
        })
    }

    pub fn remove_savings_goal(&mut self, id: impl Into<RecordId>) -> LedgerResult<Outcome> {
        self.dispatch(Command::RemoveSavingsGoal(id.into()))
    }

    pub fn edit_savings_goal(
        &mut self,
        id: impl Into<RecordId>,
        edit: GoalEdit,
    ) -> LedgerResult<Outcome> {
        self.dispatch(Command::EditSavingsGoal {
            id: id.into(),
            edit,
        })
    }

    /// Throws away the running pool and recomputes it as income minus expense.
    pub fn resync_remaining_funds(&mut self) -> LedgerResult<Outcome> {
        self.dispatch(Command::ResyncRemainingFunds)
    }

    fn apply_add_income(&mut self, mut source: IncomeSource) -> LedgerResult<Option<RecordId>> {
        source.r#type = source.r#type.trim().to_string();
        if source.r#type.is_empty() {
            return Err(LedgerError::MissingField("income type"));
        }
        require_positive("income amount", source.amount)?;
        let amount = source.amount;
        let id = self.income.add_source(source, self.clock.as_ref());
        coordinator::income_added(&mut self.savings, amount);
        Ok(Some(id))
    }

    fn apply_remove_income(&mut self, id: &RecordId) -> Option<RecordId> {
        let (source, orphaned) = self.income.remove_source(id)?;
        if !orphaned.is_empty() {
            tracing::debug!(source = %source.id, entries = orphaned.len(), "dropped income history with its source");
        }
        Some(source.id)
    }

    fn apply_add_income_history(&mut self, entry: IncomeHistoryEntry) -> LedgerResult<Option<RecordId>> {
        require_positive("income amount", entry.amount)?;
        if self.income.source(&entry.source_id).is_none() {
            return Err(LedgerError::UnknownIncomeSource(entry.source_id));
        }
        let amount = entry.amount;
        let id = self.income.add_history(entry, self.clock.as_ref());
        if id.is_some() {
            coordinator::income_added(&mut self.savings, amount);
        }
        Ok(id)
    }

    fn apply_remove_income_history(&mut self, id: &RecordId) -> Option<RecordId> {
        let entry = self.income.remove_history(id)?;
        coordinator::income_reversed(&mut self.savings, entry.amount);
        Some(entry.id)
    }

    fn apply_add_expense(&mut self, mut expense: Expense) -> LedgerResult<Option<RecordId>> {
        expense.category = expense.category.trim().to_string();
        if expense.category.is_empty() {
            return Err(LedgerError::MissingField("expense category"));
        }
        require_positive("expense amount", expense.amount)?;
        Ok(Some(self.expenses.add_expense(expense, self.clock.as_ref())))
    }

    fn apply_add_category(&mut self, name: String) -> LedgerResult<Option<RecordId>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::MissingField("category name"));
        }
        Ok(Some(self.expenses.add_category(name, self.clock.as_ref())))
    }

    fn apply_add_goal(&mut self, mut goal: SavingsGoal) -> LedgerResult<Option<RecordId>> {
        goal.name = goal.name.trim().to_string();
        coordinator::validate_goal(&goal)?;
        let available = self.remaining_funds();
        coordinator::goal_opened(&mut self.savings, &goal, available)?;
        Ok(Some(self.savings.add_goal(goal, self.clock.as_ref())))
    }

    fn apply_contribute(&mut self, id: &RecordId, amount: Decimal) -> LedgerResult<Option<RecordId>> {
        let available = self.remaining_funds();
        let updated = coordinator::contribute(&mut self.savings, id, amount, available)?;
        Ok(updated.map(|_| id.clone()))
    }

    fn apply_remove_goal(&mut self, id: &RecordId) -> Option<RecordId> {
        let (goal, refund) = coordinator::goal_removed(&mut self.savings, id)?;
        tracing::debug!(goal = %goal.id, %refund, "goal removed");
        Some(goal.id)
    }

    fn apply_edit_goal(&mut self, id: &RecordId, edit: &GoalEdit) -> LedgerResult<Option<RecordId>> {
        let available = self.remaining_funds();
        let edited = coordinator::goal_edited(&mut self.savings, id, edit, available)?;
        Ok(edited.map(|g| g.id))
    }

    fn apply_resync(&mut self) -> Decimal {
        let funds = self.income.total_income() - self.expenses.total_expense();
        self.savings.reseed(funds);
        funds
    }
}

fn require_positive(field: &'static str, amount: Decimal) -> LedgerResult<()> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount { field, amount });
    }
    Ok(())
}
