use crate::models::analytics::SpendingSummary;
use crate::models::category::{hex_for_token, style_for_name, Category};
use crate::models::chart::ChartBar;

/// Turns category totals into chart-ready bars.
///
/// Colors go through two lookups: category → style background token →
/// hex color. Axis scaling is left to whatever draws the bars.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// One bar per category total, in the summary's order.
    pub fn bars(&self, summary: &SpendingSummary) -> Vec<ChartBar> {
        summary
            .by_category
            .iter()
            .map(|c| ChartBar {
                category: c.category,
                value: c.amount,
                color: self.color_for(c.category).to_string(),
            })
            .collect()
    }

    /// Fill color for a category.
    pub fn color_for(&self, category: Category) -> &'static str {
        hex_for_token(category.style().bg)
    }

    /// Fill color for a category given by name. Unknown names use the
    /// `Other` style.
    pub fn color_for_name(&self, name: &str) -> &'static str {
        hex_for_token(style_for_name(name).bg)
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
