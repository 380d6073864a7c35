use serde::{Deserialize, Serialize};

use crate::store::{Category, Transaction};

/// One slice of the expenses-by-category distribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySpend {
    pub category: Category,
    pub total: f64,
}

/// Groups expense records by category, summing absolute amounts.
///
/// Categories with no expense transactions are omitted rather than
/// zero-filled, and slices appear in first-encounter order over the
/// snapshot. Chart palettes key colors by slice index, so the order is part
/// of the contract.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySpend> {
    let mut slices: Vec<CategorySpend> = Vec::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let amount = transaction.amount.abs();
        match slices
            .iter_mut()
            .find(|slice| slice.category == transaction.category)
        {
            Some(slice) => slice.total += amount,
            None => slices.push(CategorySpend {
                category: transaction.category,
                total: amount,
            }),
        }
    }
    slices
}
