use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// A single logged expense.
///
/// Expenses are never edited after creation; the only lifecycle event is
/// removal by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// What the money was spent on (never empty)
    pub description: String,

    /// Amount spent, always positive
    pub amount: f64,

    /// Spending category
    pub category: Category,

    /// Creation timestamp (serialized as ISO-8601)
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create an expense stamped with a fresh id and the current time.
    pub fn new(description: impl Into<String>, amount: f64, category: Category) -> Self {
        Self::with_date(description, amount, category, Utc::now())
    }

    /// Create an expense with an explicit timestamp.
    pub fn with_date(
        description: impl Into<String>,
        amount: f64,
        category: Category,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category,
            date,
        }
    }
}

/// Validated form input, ready to become an [`Expense`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: f64,
    pub category: Category,
}

impl ExpenseDraft {
    pub fn new(description: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
        }
    }
}
