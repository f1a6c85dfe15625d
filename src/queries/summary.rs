//! Aggregation queries feeding the summary strips and the dashboard.
//!
//! Each screen renders a strip of per-category counts above its list. The
//! count functions iterate the full variant set of the relevant enum so that
//! zero-count categories are still present in the output (the strip renders
//! "Busy: 0" rather than omitting the category).

use crate::domain::models::{
    Ambulance, AmbulanceStatus, Emergency, EmergencyStatus, LogStatus, Role, SystemLog, User,
};
use crate::store::DispatchStore;
use std::fmt;

/// Counts ambulances per status, zero-filled over all statuses in display
/// order.
#[must_use]
pub fn ambulance_status_counts(ambulances: &[Ambulance]) -> Vec<(AmbulanceStatus, usize)> {
    AmbulanceStatus::ALL
        .iter()
        .map(|&status| {
            let count = ambulances.iter().filter(|a| a.status == status).count();
            (status, count)
        })
        .collect()
}

/// Counts emergencies per status, zero-filled over all statuses in display
/// order.
#[must_use]
pub fn emergency_status_counts(emergencies: &[Emergency]) -> Vec<(EmergencyStatus, usize)> {
    EmergencyStatus::ALL
        .iter()
        .map(|&status| {
            let count = emergencies.iter().filter(|e| e.status == status).count();
            (status, count)
        })
        .collect()
}

/// Counts log entries per outcome, zero-filled over all outcomes in display
/// order.
#[must_use]
pub fn log_status_counts(logs: &[SystemLog]) -> Vec<(LogStatus, usize)> {
    LogStatus::ALL
        .iter()
        .map(|&status| {
            let count = logs.iter().filter(|l| l.status == status).count();
            (status, count)
        })
        .collect()
}

/// Counts users per role.
///
/// The known roles (Admin, Doctor, Paramedic) always appear, zero-filled, in
/// that order. Any other role present in the collection is appended in
/// first-seen order, so open-set roles like "Dispatcher" get a category too.
#[must_use]
pub fn role_counts(users: &[User]) -> Vec<(Role, usize)> {
    let mut counts: Vec<(Role, usize)> = Role::KNOWN
        .iter()
        .map(|role| (role.clone(), 0))
        .collect();

    for user in users {
        if let Some(entry) = counts.iter_mut().find(|(role, _)| *role == user.role) {
            entry.1 += 1;
        } else {
            counts.push((user.role.clone(), 1));
        }
    }

    counts
}

/// Overall system health shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemHealth {
    /// No failed actions in the log.
    Operational,
    /// At least one logged action failed.
    Degraded,
}

impl SystemHealth {
    /// Display label for the dashboard card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::Degraded => "Degraded",
        }
    }
}

impl fmt::Display for SystemHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four dashboard stat cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardMetrics {
    /// Open emergency calls. There is no resolved state, so this is the
    /// full collection size.
    pub active_emergencies: usize,
    /// Ambulances currently free for assignment.
    pub available_ambulances: usize,
    /// Emergencies with a unit assigned or on scene.
    pub ongoing_dispatches: usize,
    /// Health derived from logged outcomes.
    pub health: SystemHealth,
}

/// Computes the dashboard stat cards from current store contents.
#[must_use]
pub fn dashboard_metrics(store: &DispatchStore) -> DashboardMetrics {
    let available_ambulances = store
        .list_ambulances()
        .iter()
        .filter(|a| a.status == AmbulanceStatus::Available)
        .count();

    let ongoing_dispatches = store
        .list_emergencies()
        .iter()
        .filter(|e| {
            matches!(
                e.status,
                EmergencyStatus::Assigned | EmergencyStatus::InProgress
            )
        })
        .count();

    let health = if store.list_logs().iter().any(|l| l.status == LogStatus::Failed) {
        SystemHealth::Degraded
    } else {
        SystemHealth::Operational
    };

    DashboardMetrics {
        active_emergencies: store.list_emergencies().len(),
        available_ambulances,
        ongoing_dispatches,
        health,
    }
}
