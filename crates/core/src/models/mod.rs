pub mod activity;
pub mod analytics;
pub mod category;
pub mod chart;
pub mod dashboard;
pub mod expense;
pub mod form;
pub mod insight;
pub mod ledger;
pub mod settings;
