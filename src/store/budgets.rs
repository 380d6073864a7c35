//! Budget store: per-(category, month) ceilings with upsert semantics.

use tracing::debug;

use super::budget::Budget;
use super::category::Category;
use super::month::MonthKey;
use super::ChangeListeners;

/// Owns the in-memory budget collection. At most one record exists per
/// `(category, month)` pair; budgets are only ever replaced, never deleted.
#[derive(Debug, Default)]
pub struct BudgetStore {
    budgets: Vec<Budget>,
    revision: u64,
    listeners: ChangeListeners,
}

impl BudgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the ceilings the dashboard seeds on startup.
    pub fn seeded() -> Self {
        let month = MonthKey::new(2025, 4);
        let budgets = vec![
            Budget::new(Category::FoodAndDining, month, 500.0),
            Budget::new(Category::BillsAndUtilities, month, 1000.0),
            Budget::new(Category::Transportation, month, 200.0),
            Budget::new(Category::Shopping, month, 300.0),
            Budget::new(Category::Entertainment, month, 200.0),
            Budget::new(Category::Healthcare, month, 400.0),
        ];
        Self {
            budgets,
            revision: 0,
            listeners: ChangeListeners::default(),
        }
    }

    /// Removes any record for the exact `(category, month)` pair, then
    /// inserts the new one. Idempotent upsert: never duplicates.
    pub fn set_budget(&mut self, category: Category, month: MonthKey, amount: f64) {
        self.budgets
            .retain(|budget| !(budget.category == category && budget.month == month));
        self.budgets.push(Budget::new(category, month, amount));
        self.commit();
        debug!(%category, %month, amount, "budget set");
    }

    /// The ceiling for the pair, or `0.0` when none has been set. Absence is
    /// not an error; zero is the defined default.
    pub fn budget_for(&self, category: Category, month: MonthKey) -> f64 {
        self.budgets
            .iter()
            .find(|budget| budget.category == category && budget.month == month)
            .map(|budget| budget.amount)
            .unwrap_or(0.0)
    }

    /// Read-only snapshot of every budget record.
    pub fn list(&self) -> &[Budget] {
        &self.budgets
    }

    /// Bumped on every committed mutation; a cheap invalidation key for
    /// memoized derived views.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a callback fired after every committed mutation.
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn commit(&mut self) {
        self.revision += 1;
        self.listeners.notify();
    }
}
