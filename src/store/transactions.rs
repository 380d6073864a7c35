//! Transaction store: owns the transaction collection and its mutation API.

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::errors::StoreError;

use super::category::Category;
use super::transaction::{Transaction, TransactionDraft, TransactionPatch};
use super::ChangeListeners;

/// Owns the in-memory transaction collection, newest-first.
///
/// Single-threaded by design: mutations apply fully before the next read in
/// the same turn observes them. A port to a multi-threaded environment must
/// wrap the store in a mutex or hand it to a single-threaded actor.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    revision: u64,
    listeners: ChangeListeners,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the fixture the dashboard seeds on startup.
    pub fn seeded() -> Self {
        let drafts = [
            TransactionDraft::new(
                -50.0,
                seed_date(2025, 4, 15),
                "Grocery shopping",
                Category::FoodAndDining,
            ),
            TransactionDraft::new(
                -120.0,
                seed_date(2025, 4, 14),
                "Electricity bill",
                Category::BillsAndUtilities,
            ),
            TransactionDraft::new(1200.0, seed_date(2025, 4, 1), "Salary", Category::Income),
            TransactionDraft::new(
                -35.5,
                seed_date(2025, 4, 12),
                "Restaurant dinner",
                Category::FoodAndDining,
            ),
            TransactionDraft::new(
                -200.0,
                seed_date(2025, 4, 10),
                "Phone bill",
                Category::BillsAndUtilities,
            ),
            TransactionDraft::new(
                -15.0,
                seed_date(2025, 4, 8),
                "Coffee with friends",
                Category::Entertainment,
            ),
        ];
        Self {
            transactions: drafts.into_iter().map(Transaction::from_draft).collect(),
            revision: 0,
            listeners: ChangeListeners::default(),
        }
    }

    /// Assigns a fresh id, inserts the record at the head so newest-first
    /// ordering holds, and returns the id.
    pub fn add(&mut self, draft: TransactionDraft) -> Uuid {
        let transaction = Transaction::from_draft(draft);
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        self.commit();
        debug!(%id, "transaction added");
        id
    }

    /// Merges the patch into the record matching `id`. Records are never
    /// re-ordered on edit; position reflects insertion order only.
    pub fn edit(&mut self, id: Uuid, patch: TransactionPatch) -> Result<(), StoreError> {
        let transaction = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(StoreError::TransactionNotFound(id))?;
        patch.apply(transaction);
        self.commit();
        debug!(%id, "transaction edited");
        Ok(())
    }

    /// Removes the record matching `id`, returning the removed instance.
    pub fn delete(&mut self, id: Uuid) -> Result<Transaction, StoreError> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(StoreError::TransactionNotFound(id))?;
        let removed = self.transactions.remove(index);
        self.commit();
        debug!(%id, "transaction deleted");
        Ok(removed)
    }

    /// Read-only snapshot of the collection, newest first.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Bumped on every committed mutation; a cheap invalidation key for
    /// memoized derived views.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a callback fired after every committed mutation, so the
    /// presentation layer can re-render.
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn commit(&mut self) {
        self.revision += 1;
        self.listeners.notify();
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
