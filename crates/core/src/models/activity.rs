use serde::Serialize;
use uuid::Uuid;

use super::category::{Category, CategoryStyle};

/// Shown in place of the list when no expenses exist.
pub const EMPTY_ACTIVITY_MESSAGE: &str = "No expenses logged yet. Start your mindful journey above.";

/// A display-ready row of the "Recent Activity" list.
///
/// `id` is what the row's delete action hands back to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRow {
    pub id: Uuid,
    pub description: String,
    pub category: Category,
    pub style: CategoryStyle,
    /// e.g. `$84.20`
    pub amount_display: String,
    /// Local calendar date, e.g. `3/14/2025`
    pub date_display: String,
}

/// The whole activity section: rows (newest first) or the empty-state text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityList {
    pub rows: Vec<ActivityRow>,
    /// e.g. `4 entries`
    pub count_label: String,
    /// Set only when `rows` is empty
    pub empty_message: Option<&'static str>,
}
