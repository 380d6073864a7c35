use serde::{Deserialize, Serialize};

use crate::store::{BudgetStore, Category, MonthKey, Transaction};

use super::month_category_expense_total;

/// One budget-vs-spend row for the comparison chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetComparison {
    pub category: Category,
    pub spent: f64,
    pub budgeted: f64,
    pub remaining: f64,
}

/// One row per budgetable category, in declaration order.
///
/// Unlike the category breakdown, rows are zero-filled: a category with no
/// spend (or no budget) for `month` still appears with `0.0`.
pub fn budget_comparison(
    transactions: &[Transaction],
    budgets: &BudgetStore,
    month: MonthKey,
) -> Vec<BudgetComparison> {
    Category::budgetable()
        .map(|category| {
            let spent = month_category_expense_total(transactions, category, month);
            let budgeted = budgets.budget_for(category, month);
            BudgetComparison {
                category,
                spent,
                budgeted,
                remaining: budgeted - spent,
            }
        })
        .collect()
}
