use serde::{Deserialize, Serialize};

use super::category::Category;
use super::month::MonthKey;

/// A spending ceiling for one category in one calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: Category,
    pub month: MonthKey,
    pub amount: f64,
}

impl Budget {
    pub fn new(category: Category, month: MonthKey, amount: f64) -> Self {
        Self {
            category,
            month,
            amount,
        }
    }
}
