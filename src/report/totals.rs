use serde::{Deserialize, Serialize};

use crate::store::Transaction;

/// Income, expense, and balance totals across an entire snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Sums positive amounts as income and negative amounts as expenses. A zero
/// amount cannot occur in validated input, but would contribute to neither.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let income: f64 = transactions
        .iter()
        .filter(|transaction| transaction.is_income())
        .map(|transaction| transaction.amount)
        .sum();
    let expenses: f64 = transactions
        .iter()
        .filter(|transaction| transaction.is_expense())
        .map(|transaction| transaction.amount)
        .sum::<f64>()
        .abs();
    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}
