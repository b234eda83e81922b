use serde::Serialize;

use super::activity::ActivityList;
use super::chart::ChartBar;
use super::insight::InsightPanel;

/// Everything the single-page dashboard shows, computed in one go.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Animated "Total Monthly Flow" text, e.g. `$1,284.20`
    pub total_display: String,

    /// The exact total the counter is heading to
    pub total: f64,

    /// "Distribution by Category" bars
    pub chart: Vec<ChartBar>,

    /// "Recent Activity" section
    pub activity: ActivityList,

    /// Insight panel text and loading flag
    pub insight: InsightPanel,
}
