use crate::models::analytics::{CategoryTotal, SpendingSummary};
use crate::models::expense::Expense;

/// Computes the spending total and per-category breakdown.
///
/// Pure business logic: no I/O, no state. One pass over the expense list.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of all expense amounts.
    pub fn total(&self, expenses: &[Expense]) -> f64 {
        expenses.iter().map(|e| e.amount).sum()
    }

    /// Build the full summary.
    ///
    /// Category totals appear in the order each category is first met while
    /// walking `expenses`, not in a fixed category order.
    pub fn summarize(&self, expenses: &[Expense]) -> SpendingSummary {
        let mut total = 0.0;
        let mut by_category: Vec<CategoryTotal> = Vec::new();

        for expense in expenses {
            total += expense.amount;
            // Seven categories at most; a Vec keeps first-seen order.
            match by_category.iter_mut().find(|c| c.category == expense.category) {
                Some(entry) => entry.amount += expense.amount,
                None => by_category.push(CategoryTotal {
                    category: expense.category,
                    amount: expense.amount,
                }),
            }
        }

        SpendingSummary {
            total,
            expense_count: expenses.len(),
            by_category,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
