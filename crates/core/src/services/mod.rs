pub mod activity_service;
pub mod analytics_service;
pub mod chart_service;
pub mod insight_scheduler;
pub mod insight_service;
