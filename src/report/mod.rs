//! Pure aggregation functions deriving dashboard views from store snapshots.
//!
//! Nothing here mutates or caches: every function recomputes from the
//! collections it is handed, plus a reference point in time supplied by the
//! caller. Callers wanting "this month" pass [`MonthKey::current`] (or a date
//! read fresh from the clock) on each evaluation.

pub mod breakdown;
pub mod comparison;
pub mod insights;
pub mod monthly;
pub mod totals;

pub use breakdown::{category_breakdown, CategorySpend};
pub use comparison::{budget_comparison, BudgetComparison};
pub use insights::{most_overspent, spending_insights, Overspend, SpendingInsights};
pub use monthly::{monthly_expenses, MonthlyExpense, DEFAULT_MONTHS};
pub use totals::{totals, Totals};

use crate::store::{Category, MonthKey, Transaction};

/// Absolute expense total for records falling in `month`, all categories.
pub(crate) fn month_expense_total(transactions: &[Transaction], month: MonthKey) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.is_expense() && month.contains(transaction.date))
        .map(|transaction| transaction.amount.abs())
        .sum()
}

/// Absolute expense total for `category` records falling in `month`.
pub(crate) fn month_category_expense_total(
    transactions: &[Transaction],
    category: Category,
    month: MonthKey,
) -> f64 {
    transactions
        .iter()
        .filter(|transaction| {
            transaction.category == category
                && transaction.is_expense()
                && month.contains(transaction.date)
        })
        .map(|transaction| transaction.amount.abs())
        .sum()
}
