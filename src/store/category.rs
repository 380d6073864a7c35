use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorises dashboard activity for budgeting and reporting.
///
/// The set is fixed: the same enum backs form choice lists and report
/// iteration, so the two can never drift apart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Income")]
    Income,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::FoodAndDining,
        Category::BillsAndUtilities,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::Healthcare,
        Category::Income,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }

    /// Whether the category can carry a monthly ceiling. Income and Other
    /// stay out of budget-vs-spend views.
    pub fn is_budgetable(self) -> bool {
        !matches!(self, Category::Income | Category::Other)
    }

    /// The categories eligible for budget comparison, in declaration order.
    pub fn budgetable() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(|category| category.is_budgetable())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
