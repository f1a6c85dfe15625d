//! Pure query functions over store contents.
//!
//! Every function here is a deterministic function of the slices it is given:
//! no caching, no side effects, recomputed on each call. Collection sizes are
//! tens of entities, so linear scans are the whole strategy.
//!
//! # Organization
//!
//! - [`summary`]: counts grouped by status or role, plus dashboard metrics
//! - [`views`]: filtered subsets and single-entity lookups for detail panels

pub mod summary;
pub mod views;

pub use summary::{
    ambulance_status_counts, dashboard_metrics, emergency_status_counts, log_status_counts,
    role_counts, DashboardMetrics, SystemHealth,
};
pub use views::{available_ambulances, emergency_by_id};
