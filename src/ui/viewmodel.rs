//! View model types representing renderable screen state.
//!
//! View models are immutable snapshots computed from application state,
//! following the MVVM pattern: they contain display-ready strings, counts,
//! and badge colors, and no dispatch logic. The renderer (or an embedding
//! shell) consumes them without touching the store.

use crate::app::modes::ManagementTab;

/// One entry in a screen's summary strip (e.g. "Available: 3").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    /// Category label.
    pub label: String,
    /// Number of entities in the category. Zero-count categories are
    /// included so the strip always shows every status.
    pub count: usize,
    /// Hex badge color from the active palette.
    pub color: String,
}

/// One stat card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

/// Display card for a single ambulance unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbulanceCard {
    pub code: String,
    pub location: String,
    pub driver: String,
    pub status_label: String,
    /// Hex badge color for the status.
    pub badge: String,
}

/// Display card for a single emergency call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyCard {
    /// Entity id, echoed back in `OpenEmergency` events.
    pub id: u32,
    pub patient_name: String,
    pub emergency_type: String,
    pub time_received: String,
    pub location: String,
    pub status_label: String,
    /// Hex badge color for the status.
    pub badge: String,
}

/// Expanded detail view for the selected emergency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyDetail {
    pub card: EmergencyCard,
    pub patient_id: String,
    pub description: String,
    /// Code of the assigned unit, if any. When present the candidate list
    /// is empty and the view shows the assignment instead.
    pub assigned_ambulance: Option<String>,
    /// Codes of currently available units, offered for assignment.
    pub candidates: Vec<String>,
}

/// One row in the user management table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// Entity id, echoed back in `EditUser` / `RequestToggleUser` events.
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role_label: String,
    pub status_label: String,
    /// Hex badge color for the account status.
    pub badge: String,
    /// Verb for the row's toggle button ("disable" or "enable").
    pub toggle_verb: String,
}

/// Icon kind shown next to a log row's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogIcon {
    /// Check mark (Success).
    Check,
    /// Cross (Failed).
    Cross,
    /// Triangle (Warning).
    Alert,
}

/// One row in the system logs table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub timestamp: String,
    pub action: String,
    pub user: String,
    pub status_label: String,
    /// Hex badge color for the outcome.
    pub badge: String,
    pub icon: LogIcon,
}

/// A report available from the reports tab. Static descriptors; generation
/// itself is outside the console core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub title: String,
    pub description: String,
}

/// Body of the management screen for the active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagementView {
    Users(Vec<UserRow>),
    Roles(Vec<SummaryItem>),
    Logs(Vec<LogRow>),
    Reports(Vec<ReportEntry>),
}

/// Complete view model for the active screen.
///
/// Computed by `AppState::compute_viewmodel()`; one variant per screen in
/// the shell's bottom navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Dashboard {
        cards: Vec<StatCard>,
    },
    Ambulances {
        summary: Vec<SummaryItem>,
        cards: Vec<AmbulanceCard>,
    },
    Emergencies {
        summary: Vec<SummaryItem>,
        cards: Vec<EmergencyCard>,
        /// Present while a detail modal is open.
        detail: Option<EmergencyDetail>,
    },
    Management {
        tab: ManagementTab,
        body: ManagementView,
    },
}
