// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived summaries computed fresh from the current records.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{Expense, MonthlyAmount, SavingsGoal};

pub const OTHER_LABEL: &str = "Other";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub label: String,
    pub amount: Decimal,
}

/// The `n` largest groups plus the remainder of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub top: Vec<CategoryTotal>,
    /// `None` only when every group made the cut and nothing is left over.
    pub other: Option<Decimal>,
    pub grand_total: Decimal,
}

impl Ranking {
    /// Display rows, with the "Other" bucket last.
    pub fn rows(&self) -> Vec<CategoryTotal> {
        let mut rows = self.top.clone();
        if let Some(amount) = self.other {
            rows.push(CategoryTotal {
                label: OTHER_LABEL.to_string(),
                amount,
            });
        }
        rows
    }
}

/// Groups `records` by `key_fn`, ranks the groups by summed amount and keeps
/// the first `n`. Groups with equal sums keep their order of first appearance.
pub fn top_n<T, K, A>(records: &[T], n: usize, key_fn: K, amount_fn: A) -> Ranking
where
    K: Fn(&T) -> &str,
    A: Fn(&T) -> Decimal,
{
    let mut groups: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grand_total = Decimal::ZERO;

    for record in records {
        let amount = amount_fn(record);
        grand_total += amount;
        let key = key_fn(record);
        match index.get(key) {
            Some(&i) => groups[i].amount += amount,
            None => {
                index.insert(key, groups.len());
                groups.push(CategoryTotal {
                    label: key.to_string(),
                    amount,
                });
            }
        }
    }

    let group_count = groups.len();
    // sort_by is stable, which is what keeps ties in appearance order
    groups.sort_by(|a, b| b.amount.cmp(&a.amount));
    groups.truncate(n);

    let shown: Decimal = groups.iter().map(|g| g.amount).sum();
    let remainder = grand_total - shown;
    let other = if group_count <= n && remainder.is_zero() {
        None
    } else {
        Some(remainder)
    };

    Ranking {
        top: groups,
        other,
        grand_total,
    }
}

pub fn top_expense_categories(expenses: &[Expense], n: usize) -> Ranking {
    top_n(expenses, n, |e| e.category.as_str(), |e| e.amount)
}

/// The last `k` entries of a chronological series, most recent first.
pub fn last_months(series: &[MonthlyAmount], k: usize) -> Vec<MonthlyAmount> {
    series.iter().rev().take(k).cloned().collect()
}

/// Totals per `YYYY-MM`, oldest month first.
pub fn monthly_totals<T, D, A>(records: &[T], date_fn: D, amount_fn: A) -> Vec<MonthlyAmount>
where
    D: Fn(&T) -> NaiveDate,
    A: Fn(&T) -> Decimal,
{
    let mut map: BTreeMap<String, Decimal> = BTreeMap::new();
    for record in records {
        let month = date_fn(record).format("%Y-%m").to_string();
        *map.entry(month).or_insert(Decimal::ZERO) += amount_fn(record);
    }
    map.into_iter()
        .map(|(month, amount)| MonthlyAmount { month, amount })
        .collect()
}

/// Percent of the target reached, clamped to `[0, 100]`. A goal without a
/// positive target reports 0.
pub fn goal_progress(goal: &SavingsGoal) -> Decimal {
    if goal.target_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let pct = goal.current_amount / goal.target_amount * Decimal::ONE_HUNDRED;
    pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeLeft {
    Days(i64),
    Passed,
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeLeft::Days(1) => write!(f, "1 day left"),
            TimeLeft::Days(d) => write!(f, "{} days left", d),
            TimeLeft::Passed => write!(f, "Target date passed"),
        }
    }
}

/// Whole days (rounded up) until midnight UTC of `target_date`.
pub fn time_left(target_date: NaiveDate, now: DateTime<Utc>) -> TimeLeft {
    let target = target_date.and_time(NaiveTime::MIN).and_utc();
    let diff = (target - now).num_milliseconds();
    let days = if diff > 0 {
        (diff + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    } else {
        diff / MILLIS_PER_DAY
    };
    if days > 0 {
        TimeLeft::Days(days)
    } else {
        TimeLeft::Passed
    }
}

/// Calendar months from `from` to `to`, ignoring the day of month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

/// Amount saved so far spread over the months left until the target date,
/// in cents. Zero once the target month has been reached.
pub fn monthly_contribution_rate(goal: &SavingsGoal, today: NaiveDate) -> Decimal {
    let months = months_between(today, goal.target_date);
    if months <= 0 {
        return Decimal::ZERO;
    }
    (goal.current_amount / Decimal::from(months))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn average_monthly_contribution(goals: &[SavingsGoal], today: NaiveDate) -> Decimal {
    if goals.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = goals
        .iter()
        .map(|g| monthly_contribution_rate(g, today))
        .sum();
    sum / Decimal::from(goals.len() as u64)
}

/// Total spend divided by the number of weeks the expense dates span.
pub fn average_weekly_spending(expenses: &[Expense]) -> Decimal {
    let (Some(first), Some(last)) = (
        expenses.iter().map(|e| e.date).min(),
        expenses.iter().map(|e| e.date).max(),
    ) else {
        return Decimal::ZERO;
    };
    let days = (last - first).num_days() + 1;
    let weeks = ((days + 6) / 7).max(1);
    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    total / Decimal::from(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_left_rounds_partial_days_up() {
        let now = Utc.with_ymd_and_hms(2025, 5, 30, 18, 0, 0).unwrap();
        let target = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(time_left(target, now), TimeLeft::Days(2));
    }

    #[test]
    fn time_left_on_target_day_has_passed() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let target = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(time_left(target, now), TimeLeft::Passed);
        assert_eq!(TimeLeft::Passed.to_string(), "Target date passed");
    }

    #[test]
    fn months_between_crosses_years() {
        let from = NaiveDate::from_ymd_opt(2024, 11, 28).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert_eq!(months_between(from, to), 3);
        assert_eq!(months_between(to, from), -3);
    }
}
