// ═══════════════════════════════════════════════════════════════════
// Service Tests: AnalyticsService, ChartService, ActivityService,
// InsightService, InsightScheduler
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use zenspend_core::errors::CoreError;
use zenspend_core::models::activity::EMPTY_ACTIVITY_MESSAGE;
use zenspend_core::models::category::Category;
use zenspend_core::models::expense::Expense;
use zenspend_core::models::insight::{
    GenerationRequest, Insight, BLANK_RESPONSE_INSIGHT, EMPTY_LEDGER_INSIGHT, FAILURE_INSIGHT,
    INITIAL_INSIGHT,
};
use zenspend_core::models::ledger::Ledger;
use zenspend_core::models::settings::Settings;
use zenspend_core::providers::traits::InsightProvider;
use zenspend_core::services::activity_service::ActivityService;
use zenspend_core::services::analytics_service::AnalyticsService;
use zenspend_core::services::chart_service::ChartService;
use zenspend_core::services::insight_scheduler::InsightScheduler;
use zenspend_core::services::insight_service::InsightService;

// ═══════════════════════════════════════════════════════════════════
// Mock Provider
// ═══════════════════════════════════════════════════════════════════

/// Scripted insight provider. `{n}` in the reply is replaced by the call number.
struct MockInsightProvider {
    reply: Result<String, String>,
    delay: Duration,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockInsightProvider {
    fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            ..Self::replying("")
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl InsightProvider for MockInsightProvider {
    fn name(&self) -> &str {
        "MockProvider"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, CoreError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts.lock().unwrap().push(request.prompt.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.reply {
            Ok(text) => Ok(text.replace("{n}", &n.to_string())),
            Err(message) => Err(CoreError::Network(message.clone())),
        }
    }
}

fn food_and_housing() -> Vec<Expense> {
    let mut ledger = Ledger::new();
    ledger.add("Studio Rent", 1200.00, Category::Housing);
    ledger.add("Organic Grocery", 84.20, Category::Food);
    ledger.expenses().to_vec()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ═══════════════════════════════════════════════════════════════════
// AnalyticsService
// ═══════════════════════════════════════════════════════════════════

mod analytics_service {
    use super::*;

    #[test]
    fn empty_list_totals_zero() {
        let summary = AnalyticsService::new().summarize(&[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.expense_count, 0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn food_and_housing_scenario() {
        let summary = AnalyticsService::new().summarize(&food_and_housing());
        assert!(close(summary.total, 1284.20));
        assert_eq!(summary.by_category.len(), 2);
        assert!(close(summary.category_total(Category::Food).unwrap(), 84.20));
        assert!(close(summary.category_total(Category::Housing).unwrap(), 1200.00));
        assert_eq!(summary.category_total(Category::Leisure), None);
    }

    #[test]
    fn categories_follow_first_occurrence_order() {
        let mut ledger = Ledger::new();
        // Newest-first list ends up: Transport, Food, Housing, Food
        ledger.add("Snack", 5.0, Category::Food);
        ledger.add("Rent", 900.0, Category::Housing);
        ledger.add("Lunch", 12.0, Category::Food);
        ledger.add("Bus", 2.5, Category::Transport);

        let summary = AnalyticsService::new().summarize(ledger.expenses());
        let order: Vec<Category> = summary.by_category.iter().map(|c| c.category).collect();
        assert_eq!(order, vec![Category::Transport, Category::Food, Category::Housing]);
        assert!(close(summary.category_total(Category::Food).unwrap(), 17.0));
    }

    #[test]
    fn category_totals_sum_to_total() {
        let mut ledger = Ledger::new();
        for (i, category) in Category::ALL.iter().cycle().take(40).enumerate() {
            ledger.add(format!("item {i}"), 1.25 * (i as f64 + 1.0), *category);
        }
        let summary = AnalyticsService::new().summarize(ledger.expenses());
        let summed: f64 = summary.by_category.iter().map(|c| c.amount).sum();
        assert!((summed - summary.total).abs() < 1e-6);
        assert_eq!(summary.by_category.len(), 7);
    }

    #[test]
    fn total_matches_summary_total() {
        let service = AnalyticsService::new();
        let expenses = food_and_housing();
        assert_eq!(service.total(&expenses), service.summarize(&expenses).total);
    }

    #[test]
    fn total_is_independent_of_history() {
        let service = AnalyticsService::new();
        let mut ledger = Ledger::new();
        let mut removed = Vec::new();

        // Interleave adds and removes; the total only ever reflects what is present.
        for i in 0..30 {
            let e = ledger.add(format!("e{i}"), (i % 7) as f64 + 0.5, Category::ALL[i % 7]);
            if i % 3 == 0 {
                ledger.remove(e.id);
                removed.push(e.id);
            }
            let expected: f64 = ledger.expenses().iter().map(|e| e.amount).sum();
            assert!((service.summarize(ledger.expenses()).total - expected).abs() < 1e-9);
        }
        assert!(removed.iter().all(|id| !ledger.contains(*id)));
        assert_eq!(ledger.len(), 20);
    }
}

// ═══════════════════════════════════════════════════════════════════
// ChartService
// ═══════════════════════════════════════════════════════════════════

mod chart_service {
    use super::*;

    #[test]
    fn one_bar_per_category_in_summary_order() {
        let summary = AnalyticsService::new().summarize(&food_and_housing());
        let bars = ChartService::new().bars(&summary);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].category, Category::Food);
        assert_eq!(bars[0].color, "#34d399");
        assert!(close(bars[0].value, 84.20));
        assert_eq!(bars[1].category, Category::Housing);
        assert_eq!(bars[1].color, "#60a5fa");
        assert!(close(bars[1].value, 1200.0));
    }

    #[test]
    fn no_expenses_no_bars() {
        let summary = AnalyticsService::new().summarize(&[]);
        assert!(ChartService::new().bars(&summary).is_empty());
    }

    #[test]
    fn color_for_each_category() {
        let chart = ChartService::new();
        assert_eq!(chart.color_for(Category::Transport), "#fbbf24");
        assert_eq!(chart.color_for(Category::Wellness), "#f87171");
        assert_eq!(chart.color_for(Category::Leisure), "#818cf8");
        assert_eq!(chart.color_for(Category::Utilities), "#94a3b8");
        assert_eq!(chart.color_for(Category::Other), "#d1d5db");
    }

    #[test]
    fn unknown_name_uses_other_color() {
        let chart = ChartService::new();
        assert_eq!(chart.color_for_name("Subscriptions"), "#d1d5db");
        assert_eq!(chart.color_for_name("housing"), "#60a5fa");
    }
}

// ═══════════════════════════════════════════════════════════════════
// ActivityService
// ═══════════════════════════════════════════════════════════════════

mod activity_service {
    use super::*;

    #[test]
    fn rows_mirror_store_order() {
        let expenses = food_and_housing();
        let list = ActivityService::new().list(&expenses);

        let ids: Vec<_> = list.rows.iter().map(|r| r.id).collect();
        let expected: Vec<_> = expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids, expected);
        assert_eq!(list.rows[0].description, "Organic Grocery");
        assert_eq!(list.count_label, "2 entries");
        assert_eq!(list.empty_message, None);
    }

    #[test]
    fn row_formats_amount_and_style() {
        let expenses = food_and_housing();
        let row = ActivityService::new().row(&expenses[1]);
        assert_eq!(row.amount_display, "$1200.00");
        assert_eq!(row.category, Category::Housing);
        assert_eq!(&row.style, Category::Housing.style());
        assert!(!row.date_display.is_empty());
    }

    #[test]
    fn empty_store_shows_message() {
        let list = ActivityService::new().list(&[]);
        assert!(list.rows.is_empty());
        assert_eq!(list.empty_message, Some(EMPTY_ACTIVITY_MESSAGE));
        assert_eq!(list.count_label, "0 entries");
    }
}

// ═══════════════════════════════════════════════════════════════════
// InsightService
// ═══════════════════════════════════════════════════════════════════

mod insight_service {
    use super::*;

    #[test]
    fn prompt_lists_every_expense() {
        let service = InsightService::new(&Settings::default());
        let prompt = service.build_prompt(&food_and_housing());
        assert!(prompt.contains("max 2 sentences"));
        assert!(prompt.contains("Expenses: Organic Grocery ($84.2 - Food), Studio Rent ($1200 - Housing)"));
    }

    #[test]
    fn request_carries_configured_model_and_temperature() {
        let settings = Settings {
            model: "test-model".into(),
            temperature: 0.2,
            ..Settings::default()
        };
        let request = InsightService::new(&settings).build_request(&food_and_housing());
        assert_eq!(request.model, "test-model");
        assert!((request.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn empty_list_skips_provider() {
        let provider = MockInsightProvider::replying("should not be used");
        let insight = InsightService::new(&Settings::default())
            .generate(&provider, &[])
            .await;
        assert_eq!(insight.text(), EMPTY_LEDGER_INSIGHT);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn generated_text_is_verbatim() {
        let provider = MockInsightProvider::replying("  Rent dominates; breathe.  ");
        let insight = InsightService::new(&Settings::default())
            .generate(&provider, &food_and_housing())
            .await;
        assert_eq!(insight, Insight::Generated("  Rent dominates; breathe.  ".into()));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn blank_reply_uses_blank_fallback() {
        for reply in ["", "   \n"] {
            let provider = MockInsightProvider::replying(reply);
            let insight = InsightService::new(&Settings::default())
                .generate(&provider, &food_and_housing())
                .await;
            assert_eq!(insight.text(), BLANK_RESPONSE_INSIGHT);
            assert!(insight.is_fallback());
        }
    }

    #[tokio::test]
    async fn provider_error_uses_failure_fallback() {
        let provider = MockInsightProvider::failing("connection reset");
        let insight = InsightService::new(&Settings::default())
            .generate(&provider, &food_and_housing())
            .await;
        assert_eq!(insight.text(), FAILURE_INSIGHT);
        match insight {
            Insight::Fallback { cause, .. } => assert!(cause.contains("connection reset")),
            Insight::Generated(_) => panic!("expected fallback"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// InsightScheduler
// ═══════════════════════════════════════════════════════════════════

mod insight_scheduler {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(1500);

    fn scheduler(provider: &Arc<MockInsightProvider>) -> InsightScheduler {
        InsightScheduler::new(provider.clone(), &Settings::default())
    }

    #[tokio::test(start_paused = true)]
    async fn panel_starts_with_initial_text() {
        let provider = Arc::new(MockInsightProvider::replying("hi"));
        let scheduler = scheduler(&provider);
        assert_eq!(scheduler.panel().text, INITIAL_INSIGHT);
        assert!(!scheduler.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn fires_only_after_quiet_period() {
        let provider = Arc::new(MockInsightProvider::replying("reply #{n}"));
        let mut scheduler = scheduler(&provider);

        scheduler.schedule(food_and_housing());
        tokio::time::sleep(DEBOUNCE - Duration::from_millis(100)).await;
        assert_eq!(provider.calls(), 0);
        assert_eq!(scheduler.panel().text, INITIAL_INSIGHT);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(provider.calls(), 1);
        assert_eq!(scheduler.panel().text, "reply #1");
        assert!(!scheduler.panel().loading);
        assert!(!scheduler.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_changes_issues_one_request_for_latest_list() {
        let provider = Arc::new(MockInsightProvider::replying("reply #{n}"));
        let mut scheduler = scheduler(&provider);

        let mut expenses = food_and_housing();
        scheduler.schedule(expenses.clone());
        tokio::time::sleep(Duration::from_millis(500)).await;

        expenses.insert(0, Expense::new("Movie Night", 18.0, Category::Leisure));
        scheduler.schedule(expenses.clone());
        tokio::time::sleep(Duration::from_millis(1000)).await;

        expenses.insert(0, Expense::new("Electric Bill", 60.0, Category::Utilities));
        scheduler.schedule(expenses.clone());
        tokio::time::sleep(DEBOUNCE * 2).await;

        assert_eq!(provider.calls(), 1);
        let prompt = provider.last_prompt().unwrap();
        assert!(prompt.contains("Electric Bill"));
        assert!(prompt.contains("Movie Night"));
        assert_eq!(scheduler.panel().text, "reply #1");
    }

    #[tokio::test(start_paused = true)]
    async fn loading_while_request_in_flight() {
        let provider =
            Arc::new(MockInsightProvider::replying("done").with_delay(Duration::from_secs(1)));
        let mut scheduler = scheduler(&provider);

        scheduler.schedule(food_and_housing());
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(100)).await;
        assert!(scheduler.panel().loading);
        assert!(scheduler.is_pending());

        tokio::time::sleep(Duration::from_secs(1)).await;
        let panel = scheduler.panel();
        assert!(!panel.loading);
        assert_eq!(panel.text, "done");
    }

    #[tokio::test(start_paused = true)]
    async fn newer_schedule_discards_in_flight_response() {
        let provider =
            Arc::new(MockInsightProvider::replying("reply #{n}").with_delay(Duration::from_secs(1)));
        let mut scheduler = scheduler(&provider);
        let mut rx = scheduler.subscribe();

        scheduler.schedule(food_and_housing());
        // First request is now in flight.
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(500)).await;
        assert_eq!(provider.calls(), 1);

        scheduler.schedule(Vec::from([Expense::new("Tea", 3.0, Category::Food)]));
        assert!(!scheduler.panel().loading);

        tokio::time::sleep(DEBOUNCE + Duration::from_secs(2)).await;
        assert_eq!(provider.calls(), 2);
        assert_eq!(scheduler.panel().text, "reply #2");

        // The first reply never reached the panel.
        let mut seen = Vec::new();
        while rx.has_changed().unwrap_or(false) {
            seen.push(rx.borrow_and_update().text.clone());
        }
        assert!(!seen.iter().any(|t| t == "reply #1"));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_list_shows_message_without_request() {
        let provider = Arc::new(MockInsightProvider::replying("unused"));
        let mut scheduler = scheduler(&provider);

        scheduler.schedule(Vec::new());
        tokio::time::sleep(DEBOUNCE * 2).await;

        assert_eq!(provider.calls(), 0);
        assert_eq!(scheduler.panel().text, EMPTY_LEDGER_INSIGHT);
        assert!(!scheduler.panel().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_shows_fallback_sentence() {
        let provider = Arc::new(MockInsightProvider::failing("503 Service Unavailable"));
        let mut scheduler = scheduler(&provider);

        scheduler.schedule(food_and_housing());
        tokio::time::sleep(DEBOUNCE * 2).await;

        assert_eq!(provider.calls(), 1);
        assert_eq!(scheduler.panel().text, FAILURE_INSIGHT);
        assert!(!scheduler.panel().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_pending_request() {
        let provider = Arc::new(MockInsightProvider::replying("unused"));
        let mut scheduler = scheduler(&provider);

        scheduler.schedule(food_and_housing());
        tokio::time::sleep(Duration::from_millis(500)).await;
        scheduler.cancel();
        tokio::time::sleep(DEBOUNCE * 2).await;

        assert_eq!(provider.calls(), 0);
        assert_eq!(scheduler.panel().text, INITIAL_INSIGHT);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_scheduler_cancels_pending_request() {
        let provider = Arc::new(MockInsightProvider::replying("unused"));
        let mut scheduler = scheduler(&provider);

        scheduler.schedule(food_and_housing());
        drop(scheduler);
        tokio::time::sleep(DEBOUNCE * 2).await;

        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_debounce_from_settings() {
        let provider = Arc::new(MockInsightProvider::replying("quick"));
        let settings = Settings {
            insight_debounce_ms: 100,
            ..Settings::default()
        };
        let mut scheduler = InsightScheduler::new(provider.clone(), &settings);

        scheduler.schedule(food_and_housing());
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(provider.calls(), 1);
        assert_eq!(scheduler.panel().text, "quick");
    }
}
