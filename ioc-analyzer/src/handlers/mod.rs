//! HTTP handlers for the analyzer.

pub mod analyze;
pub mod app;
pub mod metrics;

pub use analyze::analyze;
pub use app::{health_check, index, readiness_check};
