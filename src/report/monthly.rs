use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::{MonthKey, Transaction};

use super::month_expense_total;

/// Number of months the expense trend chart shows by default.
pub const DEFAULT_MONTHS: usize = 6;

/// One point in the monthly expense trend series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyExpense {
    pub month: MonthKey,
    /// Short month label for the chart axis, e.g. "Apr".
    pub label: String,
    pub expense: f64,
}

/// Expense totals for the last `months` calendar months ending at the month
/// containing `today`, inclusive.
///
/// The builder walks backward from the current month, but the output is
/// chronologically ascending (oldest first). Buckets match on month-and-year
/// equality, never a rolling window of elapsed days.
pub fn monthly_expenses(
    transactions: &[Transaction],
    today: NaiveDate,
    months: usize,
) -> Vec<MonthlyExpense> {
    let current = MonthKey::from_date(today);
    let mut series: Vec<MonthlyExpense> = (0..months)
        .map(|steps_back| {
            let month = current.months_back(steps_back as u32);
            MonthlyExpense {
                month,
                label: month.label().to_string(),
                expense: month_expense_total(transactions, month),
            }
        })
        .collect();
    series.reverse();
    series
}
