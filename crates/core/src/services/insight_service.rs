use log::{debug, error};

use crate::models::expense::Expense;
use crate::models::insight::{
    GenerationRequest, Insight, BLANK_RESPONSE_INSIGHT, EMPTY_LEDGER_INSIGHT, FAILURE_INSIGHT,
};
use crate::models::settings::Settings;
use crate::providers::traits::InsightProvider;

/// Turns the current expense list into a short insight via an [`InsightProvider`].
///
/// Never fails: every outcome resolves to displayable text. Service errors are
/// logged and replaced by a fixed sentence; an empty expense list skips the
/// service entirely.
pub struct InsightService {
    model: String,
    temperature: f32,
}

impl InsightService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            model: settings.model.clone(),
            temperature: settings.temperature,
        }
    }

    /// Prompt text for `expenses`, each rendered as `description ($amount - Category)`.
    pub fn build_prompt(&self, expenses: &[Expense]) -> String {
        let listed = expenses
            .iter()
            .map(|e| format!("{} (${} - {})", e.description, e.amount, e.category))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Below is a list of my recent expenses. Provide a very short (max 2 sentences), \
             calm, and encouraging financial insight or suggestion. \
             Focus on mindfulness and well-being.\n\
             Expenses: {listed}"
        )
    }

    pub fn build_request(&self, expenses: &[Expense]) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            prompt: self.build_prompt(expenses),
            temperature: self.temperature,
        }
    }

    /// Produce an insight for `expenses`.
    pub async fn generate(&self, provider: &dyn InsightProvider, expenses: &[Expense]) -> Insight {
        if expenses.is_empty() {
            return Insight::fallback(EMPTY_LEDGER_INSIGHT, "no expenses to analyze");
        }

        let request = self.build_request(expenses);
        debug!(
            "Requesting insight from {} for {} expenses",
            provider.name(),
            expenses.len()
        );

        match provider.generate(&request).await {
            Ok(text) if text.trim().is_empty() => {
                Insight::fallback(BLANK_RESPONSE_INSIGHT, format!("{} returned no text", provider.name()))
            }
            Ok(text) => Insight::Generated(text),
            Err(e) => {
                error!("Insight generation via {} failed: {e}", provider.name());
                Insight::fallback(FAILURE_INSIGHT, e.to_string())
            }
        }
    }
}
