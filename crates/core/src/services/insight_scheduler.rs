use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::models::expense::Expense;
use crate::models::insight::{InsightPanel, EMPTY_LEDGER_INSIGHT};
use crate::models::settings::Settings;
use crate::providers::traits::InsightProvider;
use crate::services::insight_service::InsightService;
use crate::task::TaskHandle;

/// Debounced driver for the insight panel.
///
/// Each [`schedule`](Self::schedule) call cancels whatever is pending (timer
/// or request in flight) and starts a new quiet period. Only the latest
/// schedule may write to the panel; anything older is discarded.
///
/// Panel state is published on a `watch` channel, so any number of views can
/// [`subscribe`](Self::subscribe).
pub struct InsightScheduler {
    provider: Arc<dyn InsightProvider>,
    service: Arc<InsightService>,
    delay: Duration,
    panel: watch::Sender<InsightPanel>,
    generation: Arc<AtomicU64>,
    pending: Option<TaskHandle>,
}

impl InsightScheduler {
    pub fn new(provider: Arc<dyn InsightProvider>, settings: &Settings) -> Self {
        let (panel, _) = watch::channel(InsightPanel::default());
        Self {
            provider,
            service: Arc::new(InsightService::new(settings)),
            delay: settings.insight_debounce(),
            panel,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Restart the quiet period; after it elapses, generate an insight for
    /// `expenses`. Must be called from within a tokio runtime.
    pub fn schedule(&mut self, expenses: Vec<Expense>) {
        let generation = self.supersede();

        let provider = Arc::clone(&self.provider);
        let service = Arc::clone(&self.service);
        let latest = Arc::clone(&self.generation);
        let panel = self.panel.clone();
        let delay = self.delay;

        self.pending = Some(TaskHandle::spawn(async move {
            tokio::time::sleep(delay).await;

            if expenses.is_empty() {
                publish(&panel, &latest, generation, EMPTY_LEDGER_INSIGHT.to_string());
                return;
            }

            panel.send_if_modified(|p| {
                if latest.load(Ordering::SeqCst) != generation || p.loading {
                    return false;
                }
                p.loading = true;
                true
            });

            let insight = service.generate(provider.as_ref(), &expenses).await;
            publish(&panel, &latest, generation, insight.text().to_string());
        }));
    }

    /// Cancel any pending timer or in-flight request.
    pub fn cancel(&mut self) {
        self.supersede();
    }

    /// True while a scheduled request has not finished yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Current panel state.
    pub fn panel(&self) -> InsightPanel {
        self.panel.borrow().clone()
    }

    /// Receiver notified on every panel change.
    pub fn subscribe(&self) -> watch::Receiver<InsightPanel> {
        self.panel.subscribe()
    }

    /// Invalidate older work and return the generation for the next request.
    fn supersede(&mut self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
        self.panel.send_if_modified(|p| std::mem::replace(&mut p.loading, false));
        generation
    }
}

impl Drop for InsightScheduler {
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Write `text` to the panel unless a newer schedule has taken over.
fn publish(
    panel: &watch::Sender<InsightPanel>,
    latest: &AtomicU64,
    generation: u64,
    text: String,
) {
    let applied = panel.send_if_modified(|p| {
        if latest.load(Ordering::SeqCst) != generation {
            return false;
        }
        p.text = text;
        p.loading = false;
        true
    });
    if !applied && latest.load(Ordering::SeqCst) != generation {
        debug!("Discarding stale insight from request #{generation}");
    }
}
