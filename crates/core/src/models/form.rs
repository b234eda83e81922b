use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::category::Category;
use super::expense::ExpenseDraft;

/// Raw state of the "New Entry" form, exactly as typed by the user.
///
/// The form owns validation. A rejected submission leaves every field as it
/// was and surfaces nothing to the user; an accepted one clears description
/// and amount but keeps the selected category for the next entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub category: Category,
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount = text.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Select a category by its label, as a dropdown would deliver it.
    /// Unknown labels leave the current selection untouched.
    pub fn set_category_name(&mut self, name: &str) -> Result<(), CoreError> {
        self.category = name.parse()?;
        Ok(())
    }

    /// Check the current input without touching form state.
    pub fn validate(&self) -> Result<ExpenseDraft, CoreError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(CoreError::ValidationError("description must not be empty".into()));
        }

        let amount_text = self.amount.trim();
        if amount_text.is_empty() {
            return Err(CoreError::ValidationError("amount must not be empty".into()));
        }
        let amount: f64 = amount_text.parse().map_err(|_| {
            CoreError::ValidationError(format!("amount '{amount_text}' is not a number"))
        })?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "amount must be a positive number, got {amount}"
            )));
        }

        Ok(ExpenseDraft::new(description, amount, self.category))
    }

    /// Submit the form. Returns the draft on success and resets description
    /// and amount; returns `None` (form unchanged) when the input is invalid.
    pub fn submit(&mut self) -> Option<ExpenseDraft> {
        match self.validate() {
            Ok(draft) => {
                self.description.clear();
                self.amount.clear();
                Some(draft)
            }
            Err(e) => {
                debug!("Expense form submission refused: {e}");
                None
            }
        }
    }
}
