use log::debug;
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

use crate::animation::{spawn_frame_loop, AnimatedCounter};
use crate::format;
use crate::models::dashboard::DashboardView;
use crate::models::expense::{Expense, ExpenseDraft};
use crate::models::form::ExpenseForm;
use crate::models::insight::InsightPanel;
use crate::models::settings::Settings;
use crate::providers::gemini::GeminiProvider;
use crate::providers::traits::InsightProvider;
use crate::services::insight_scheduler::InsightScheduler;
use crate::task::TaskHandle;
use crate::ZenSpend;

/// Root state container for one dashboard session.
///
/// Owns the expense store, the entry form, the total counter animation and
/// the insight scheduler. Every command that changes the store is followed by
/// a refresh: the counter retargets to the new total and, when the number of
/// expenses changed, the insight is rescheduled.
///
/// Must be created and used inside a tokio runtime. Dropping the session
/// cancels the counter loop and any pending insight work.
pub struct Session {
    tracker: ZenSpend,
    form: ExpenseForm,
    settings: Settings,
    insights: InsightScheduler,
    counter_frames: watch::Sender<f64>,
    counter_loop: Option<TaskHandle>,
    insight_count: Option<usize>,
    seen_revision: Option<u64>,
}

impl Session {
    pub fn new(tracker: ZenSpend, provider: Arc<dyn InsightProvider>, settings: Settings) -> Self {
        let insights = InsightScheduler::new(provider, &settings);
        let (counter_frames, _) = watch::channel(0.0);
        let mut session = Self {
            tracker,
            form: ExpenseForm::new(),
            settings,
            insights,
            counter_frames,
            counter_loop: None,
            insight_count: None,
            seen_revision: None,
        };
        session.refresh();
        session
    }

    /// Session backed by the Gemini provider configured from `settings`.
    pub fn with_gemini(tracker: ZenSpend, settings: Settings) -> Self {
        let provider = Arc::new(GeminiProvider::from_settings(&settings));
        Self::new(tracker, provider, settings)
    }

    // ── Commands ────────────────────────────────────────────────────

    /// The entry form, for binding input fields.
    pub fn form_mut(&mut self) -> &mut ExpenseForm {
        &mut self.form
    }

    #[must_use]
    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    /// Submit the session's entry form.
    pub fn submit_form(&mut self) -> Option<Expense> {
        let added = self.tracker.submit(&mut self.form);
        self.refresh();
        added
    }

    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Expense {
        let expense = self.tracker.add_draft(draft);
        self.refresh();
        expense
    }

    /// Delete action of an activity row.
    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let removed = self.tracker.remove_expense(id);
        self.refresh();
        removed
    }

    /// Stop the counter animation and any pending insight work.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.counter_loop.take() {
            handle.cancel();
        }
        self.insights.cancel();
    }

    // ── Views ───────────────────────────────────────────────────────

    #[must_use]
    pub fn tracker(&self) -> &ZenSpend {
        &self.tracker
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Value the total counter is showing right now.
    #[must_use]
    pub fn counter_value(&self) -> f64 {
        *self.counter_frames.borrow()
    }

    pub fn subscribe_counter(&self) -> watch::Receiver<f64> {
        self.counter_frames.subscribe()
    }

    #[must_use]
    pub fn insight(&self) -> InsightPanel {
        self.insights.panel()
    }

    pub fn subscribe_insight(&self) -> watch::Receiver<InsightPanel> {
        self.insights.subscribe()
    }

    /// Snapshot of the whole dashboard.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView {
            total_display: format::currency(self.counter_value()),
            total: self.tracker.total(),
            chart: self.tracker.chart_bars(),
            activity: self.tracker.activity(),
            insight: self.insights.panel(),
        }
    }

    // ── Internal ────────────────────────────────────────────────────

    fn refresh(&mut self) {
        let revision = self.tracker.revision();
        if self.seen_revision == Some(revision) {
            return;
        }
        self.seen_revision = Some(revision);

        self.animate_total();

        let count = self.tracker.expense_count();
        if self.insight_count != Some(count) {
            self.insight_count = Some(count);
            debug!("Expense count now {count}, rescheduling insight");
            self.insights.schedule(self.tracker.expenses().to_vec());
        }
    }

    /// Start a fresh ramp from the value on screen to the current total.
    fn animate_total(&mut self) {
        if let Some(handle) = self.counter_loop.take() {
            handle.cancel();
        }

        let mut counter =
            AnimatedCounter::starting_at(self.counter_value(), self.settings.counter_duration());
        counter.set_target(self.tracker.total(), tokio::time::Instant::now().into_std());

        self.counter_loop = Some(spawn_frame_loop(
            counter,
            self.settings.frame_interval(),
            self.counter_frames.clone(),
        ));
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("tracker", &self.tracker)
            .field("counter_value", &self.counter_value())
            .field("insight_pending", &self.insights.is_pending())
            .finish()
    }
}
