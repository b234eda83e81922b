use crate::format;
use crate::models::activity::{ActivityList, ActivityRow, EMPTY_ACTIVITY_MESSAGE};
use crate::models::expense::Expense;

/// Builds the "Recent Activity" list from the store contents.
pub struct ActivityService;

impl ActivityService {
    pub fn new() -> Self {
        Self
    }

    /// Rows mirror the store order, which is already newest-first.
    pub fn list(&self, expenses: &[Expense]) -> ActivityList {
        let rows: Vec<ActivityRow> = expenses.iter().map(|e| self.row(e)).collect();
        let empty_message = rows.is_empty().then_some(EMPTY_ACTIVITY_MESSAGE);

        ActivityList {
            count_label: format::entry_count(rows.len()),
            rows,
            empty_message,
        }
    }

    pub fn row(&self, expense: &Expense) -> ActivityRow {
        ActivityRow {
            id: expense.id,
            description: expense.description.clone(),
            category: expense.category,
            style: *expense.category.style(),
            amount_display: format::amount(expense.amount),
            date_display: format::short_date(&expense.date),
        }
    }
}

impl Default for ActivityService {
    fn default() -> Self {
        Self::new()
    }
}
