use serde::{Deserialize, Serialize};

use super::category::Category;

/// Aggregate view over the current expenses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendingSummary {
    /// Sum of every expense amount
    pub total: f64,

    /// Number of expenses the summary was computed from
    pub expense_count: usize,

    /// Per-category sums, in order of first appearance in the expense list
    pub by_category: Vec<CategoryTotal>,
}

impl SpendingSummary {
    /// Summed amount for one category, or `None` if it has no expenses.
    pub fn category_total(&self, category: Category) -> Option<f64> {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
    }
}

/// Total spent in a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
}
