use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::expense::Expense;

/// The in-memory expense store. Lives for the length of one session.
///
/// Expenses are kept newest-first. `revision` changes on every effective
/// mutation and is what derived views key their memoization on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// All expenses, newest first
    expenses: Vec<Expense>,

    /// Bumped by every add and every remove that found its target
    #[serde(skip)]
    revision: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh expense and put it at the head of the sequence.
    /// No validation happens here; callers go through the entry form first.
    pub fn add(&mut self, description: impl Into<String>, amount: f64, category: Category) -> Expense {
        let expense = Expense::new(description, amount, category);
        self.insert(expense.clone());
        expense
    }

    /// Prepend an already built expense.
    ///
    /// Ids must stay unique: an expense whose id is already present replaces
    /// nothing and is dropped, returning `false`.
    pub fn insert(&mut self, expense: Expense) -> bool {
        if self.contains(expense.id) {
            return false;
        }
        self.expenses.insert(0, expense);
        self.revision += 1;
        true
    }

    /// Remove the expense with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: Uuid) -> Option<Expense> {
        let idx = self.expenses.iter().position(|e| e.id == id)?;
        self.revision += 1;
        Some(self.expenses.remove(idx))
    }

    pub fn get(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Expenses in display order (newest first).
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
