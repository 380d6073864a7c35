use serde::{Deserialize, Serialize};

use crate::store::{BudgetStore, Category, MonthKey, Transaction};

use super::{budget_comparison, month_expense_total};

/// The category furthest over its ceiling for a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Overspend {
    pub category: Category,
    pub spent: f64,
    pub budgeted: f64,
    pub overspent: f64,
}

/// Month-level spending analysis backing the insights card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingInsights {
    /// Sum of the budgetable categories' ceilings for the month.
    pub total_budgeted: f64,
    /// The month's expense total across every category, budgetable or not.
    pub total_spent: f64,
    pub remaining: f64,
    /// Drives the up/down trend indicator.
    pub under_budget: bool,
    pub most_overspent: Option<Overspend>,
}

/// Selects the budgetable category with the largest `spent - budgeted`.
///
/// Ties resolve to the earliest category in declaration order: rows are built
/// in [`Category::ALL`] order and only a strictly greater value replaces the
/// running winner. Returns `Some` only when the winner is actually over
/// budget.
pub fn most_overspent(
    transactions: &[Transaction],
    budgets: &BudgetStore,
    month: MonthKey,
) -> Option<Overspend> {
    let mut worst: Option<Overspend> = None;
    for row in budget_comparison(transactions, budgets, month) {
        let overspent = row.spent - row.budgeted;
        let beats = worst
            .as_ref()
            .map_or(true, |current| overspent > current.overspent);
        if beats {
            worst = Some(Overspend {
                category: row.category,
                spent: row.spent,
                budgeted: row.budgeted,
                overspent,
            });
        }
    }
    worst.filter(|overspend| overspend.overspent > 0.0)
}

/// Builds the month's spending analysis.
///
/// `total_spent` covers every category's expenses while `total_budgeted`
/// sums ceilings for budgetable categories only, matching how the dashboard
/// card reads the two numbers.
pub fn spending_insights(
    transactions: &[Transaction],
    budgets: &BudgetStore,
    month: MonthKey,
) -> SpendingInsights {
    let total_spent = month_expense_total(transactions, month);
    let total_budgeted: f64 = Category::budgetable()
        .map(|category| budgets.budget_for(category, month))
        .sum();
    SpendingInsights {
        total_budgeted,
        total_spent,
        remaining: total_budgeted - total_spent,
        under_budget: total_spent <= total_budgeted,
        most_overspent: most_overspent(transactions, budgets, month),
    }
}
