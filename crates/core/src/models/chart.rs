use serde::{Deserialize, Serialize};

use super::category::Category;

/// One bar of the category distribution chart.
///
/// The core resolves the color; the frontend just draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Category the bar stands for (also the x-axis label)
    pub category: Category,

    /// Bar height: the summed amount for this category
    pub value: f64,

    /// Fill color as a `#rrggbb` hex string
    pub color: String,
}
