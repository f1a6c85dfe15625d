//! Navigation and confirmation state types for the application.
//!
//! These enums are the whole of the console's UI state machine: which screen
//! is active, which management tab is selected, and whether a destructive
//! action is waiting on operator confirmation. Everything else shown on
//! screen is derived from store contents.

/// Top-level screen selected in the shell's bottom navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Stat cards summarizing the whole system.
    Dashboard,
    /// Ambulance fleet with availability summary.
    Ambulances,
    /// Emergency board with detail modal and assignment.
    Emergencies,
    /// Users, roles, logs, and reports tabs.
    Management,
}

impl Screen {
    /// All screens in navigation order.
    pub const ALL: [Self; 4] = [
        Self::Dashboard,
        Self::Ambulances,
        Self::Emergencies,
        Self::Management,
    ];

    /// Header title for the screen.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Admin Dashboard",
            Self::Ambulances => "Ambulance Management",
            Self::Emergencies => "Emergency Management",
            Self::Management => "System Management",
        }
    }
}

/// Tab selected within the management screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagementTab {
    Users,
    Roles,
    Logs,
    Reports,
}

impl ManagementTab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [Self::Users, Self::Roles, Self::Logs, Self::Reports];

    /// Tab bar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Roles => "Roles",
            Self::Logs => "Logs",
            Self::Reports => "Reports",
        }
    }
}

/// A proposed mutation waiting for the operator to confirm or cancel.
///
/// Stored on the application state between the propose and confirm events.
/// Cancellation simply drops the value; nothing in the store has been
/// touched at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirmation {
    /// Enable or disable the user with this id.
    ToggleUserStatus { user_id: u32 },
}
