use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::month::MonthKey;

/// A single income or expense record.
///
/// The amount's sign is the only income/expense classifier: positive is
/// income, negative is expense. There is no separate type flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
}

impl Transaction {
    pub(crate) fn from_draft(draft: TransactionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: draft.amount,
            date: draft.date,
            description: draft.description,
            category: draft.category,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// The calendar month this record falls in.
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// Input for [`TransactionStore::add`]; the store assigns the id.
///
/// [`TransactionStore::add`]: super::transactions::TransactionStore::add
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
}

impl TransactionDraft {
    pub fn new(
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            amount,
            date,
            description: description.into(),
            category,
        }
    }
}

/// Field-wise partial update for [`TransactionStore::edit`]. Unset fields
/// keep their current value.
///
/// [`TransactionStore::edit`]: super::transactions::TransactionStore::edit
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl TransactionPatch {
    pub fn has_effect(&self) -> bool {
        self.amount.is_some()
            || self.date.is_some()
            || self.description.is_some()
            || self.category.is_some()
    }

    pub(crate) fn apply(self, transaction: &mut Transaction) {
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(description) = self.description {
            transaction.description = description;
        }
        if let Some(category) = self.category {
            transaction.category = category;
        }
    }
}
