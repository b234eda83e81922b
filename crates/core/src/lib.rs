pub mod animation;
pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
pub mod services;
pub mod session;
pub mod task;

use chrono::Utc;
use log::info;
use models::{
    activity::ActivityList,
    analytics::SpendingSummary,
    category::Category,
    chart::ChartBar,
    expense::{Expense, ExpenseDraft},
    form::ExpenseForm,
    ledger::Ledger,
};
use services::{
    activity_service::ActivityService, analytics_service::AnalyticsService,
    chart_service::ChartService,
};
use uuid::Uuid;

use errors::CoreError;

pub use session::Session;

/// Expenses the dashboard opens with in demo mode.
const SAMPLE_EXPENSES: [(&str, f64, Category); 4] = [
    ("Organic Grocery", 84.20, Category::Food),
    ("Studio Rent", 1200.00, Category::Housing),
    ("Yoga Membership", 120.00, Category::Wellness),
    ("Commuter Pass", 45.00, Category::Transport),
];

/// Main entry point for the ZenSpend core library.
/// Holds the expense store and the derived views computed from it.
///
/// All mutation goes through [`add_expense`](Self::add_expense),
/// [`submit`](Self::submit) and [`remove_expense`](Self::remove_expense);
/// the summary is recomputed after each one and served from memory until the
/// next.
#[must_use]
pub struct ZenSpend {
    ledger: Ledger,
    summary: SpendingSummary,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
    activity_service: ActivityService,
}

impl std::fmt::Debug for ZenSpend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZenSpend")
            .field("expenses", &self.ledger.len())
            .field("total", &self.summary.total)
            .field("revision", &self.ledger.revision())
            .finish()
    }
}

impl ZenSpend {
    /// Start with an empty store.
    pub fn new() -> Self {
        Self::build(Ledger::new())
    }

    /// Start with the four demo expenses, newest first in the order listed.
    pub fn with_sample_data() -> Self {
        let now = Utc::now();
        let mut ledger = Ledger::new();
        // Inserted back to front so the list reads in declaration order.
        for (description, amount, category) in SAMPLE_EXPENSES.iter().rev() {
            ledger.insert(Expense::with_date(*description, *amount, *category, now));
        }
        Self::build(ledger)
    }

    // ── Expense Management ──────────────────────────────────────────

    /// Add an expense. Input is trusted; use [`submit`](Self::submit) for
    /// raw form input.
    pub fn add_expense(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: Category,
    ) -> Expense {
        let expense = self.ledger.add(description, amount, category);
        info!("Added expense {} ({} {})", expense.id, expense.category, expense.amount);
        self.recompute();
        expense
    }

    /// Add an expense from a validated draft.
    pub fn add_draft(&mut self, draft: ExpenseDraft) -> Expense {
        self.add_expense(draft.description, draft.amount, draft.category)
    }

    /// Submit the entry form. Invalid input is refused silently: nothing is
    /// added and the form keeps its contents.
    pub fn submit(&mut self, form: &mut ExpenseForm) -> Option<Expense> {
        form.submit().map(|draft| self.add_draft(draft))
    }

    /// Remove an expense by id. Unknown ids are a no-op.
    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let removed = self.ledger.remove(id)?;
        info!("Removed expense {id}");
        self.recompute();
        Some(removed)
    }

    /// Remove an expense, treating an unknown id as an error.
    pub fn remove_existing_expense(&mut self, id: Uuid) -> Result<Expense, CoreError> {
        self.remove_expense(id)
            .ok_or_else(|| CoreError::ExpenseNotFound(id.to_string()))
    }

    #[must_use]
    pub fn get_expense(&self, id: Uuid) -> Option<&Expense> {
        self.ledger.get(id)
    }

    /// All expenses, newest first.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        self.ledger.expenses()
    }

    #[must_use]
    pub fn expense_count(&self) -> usize {
        self.ledger.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Changes with every effective mutation; equal revisions mean equal contents.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.ledger.revision()
    }

    // ── Derived Views ───────────────────────────────────────────────

    #[must_use]
    pub fn total(&self) -> f64 {
        self.summary.total
    }

    #[must_use]
    pub fn summary(&self) -> &SpendingSummary {
        &self.summary
    }

    #[must_use]
    pub fn chart_bars(&self) -> Vec<ChartBar> {
        self.chart_service.bars(&self.summary)
    }

    #[must_use]
    pub fn activity(&self) -> ActivityList {
        self.activity_service.list(self.ledger.expenses())
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export all expenses as a JSON array (newest first).
    pub fn export_expenses_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self.ledger.expenses())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize expenses to JSON: {e}")))
    }

    /// Snapshot of the store and its summary, for debugging/display.
    pub fn to_json(&self) -> Result<String, CoreError> {
        let snapshot = serde_json::json!({
            "expenses": self.ledger.expenses(),
            "summary": &self.summary,
        });
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn recompute(&mut self) {
        self.summary = self.analytics_service.summarize(self.ledger.expenses());
    }

    fn build(ledger: Ledger) -> Self {
        let analytics_service = AnalyticsService::new();
        let summary = analytics_service.summarize(ledger.expenses());

        Self {
            ledger,
            summary,
            analytics_service,
            chart_service: ChartService::new(),
            activity_service: ActivityService::new(),
        }
    }
}

impl Default for ZenSpend {
    fn default() -> Self {
        Self::new()
    }
}
