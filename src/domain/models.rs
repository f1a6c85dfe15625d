//! Entity records and status enums.
//!
//! This module defines the four entity collections managed by the store:
//! ambulances, emergencies, users, and system logs. All records are plain
//! serde-derived structs; the only mutation paths are the store workflows,
//! which flip status fields and set the ambulance assignment on an emergency.
//!
//! Status fields are closed enums with a fixed variant order so that summary
//! strips can render every category, including zero-count ones. The one
//! exception is [`Role`], which is an open set: unknown role names round-trip
//! through [`Role::Other`] rather than failing deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational status of an ambulance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmbulanceStatus {
    /// Unit is free and can be assigned to an emergency.
    Available,
    /// Unit is currently assigned to an emergency.
    Busy,
}

impl AmbulanceStatus {
    /// All variants in display order. Summary strips iterate this so that
    /// zero-count categories still render (e.g. "Busy: 0").
    pub const ALL: [Self; 2] = [Self::Available, Self::Busy];

    /// Display label matching the seeded data strings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
        }
    }
}

impl fmt::Display for AmbulanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ambulance unit known to the dispatch desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ambulance {
    /// Unique key within the ambulance collection. Never reassigned.
    pub id: u32,
    /// Display identifier shown on cards and used by assignments (e.g. "AMB-01").
    pub code: String,
    /// Free-text current location.
    pub location: String,
    /// Free-text driver name.
    pub driver: String,
    /// Current operational status.
    pub status: AmbulanceStatus,
}

/// Lifecycle status of an emergency call.
///
/// There is no resolved state: every emergency in the store is open, and the
/// assignment workflow only ever moves a call from `New` to `Assigned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmergencyStatus {
    /// Call received, no ambulance assigned yet.
    New,
    /// An ambulance has been assigned but has not reached the scene.
    Assigned,
    /// An ambulance is on scene or en route with the patient.
    #[serde(rename = "In Progress")]
    InProgress,
}

impl EmergencyStatus {
    /// All variants in display order, zero-count categories included.
    pub const ALL: [Self; 3] = [Self::New, Self::Assigned, Self::InProgress];

    /// Display label matching the seeded data strings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
        }
    }
}

impl fmt::Display for EmergencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An emergency call awaiting or undergoing dispatch.
///
/// `assigned_ambulance` holds an [`Ambulance::code`], not an id, because the
/// code is what operators see on the board. It is `Some` if and only if the
/// status is `Assigned` or `In Progress`; the assignment workflow maintains
/// this invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emergency {
    /// Unique key within the emergency collection. Never reassigned.
    pub id: u32,
    /// Patient reference shown in confirmation dialogs (e.g. "P-1023").
    pub patient_id: String,
    /// Patient display name.
    pub patient_name: String,
    /// Free-text category of the emergency (e.g. "Cardiac Arrest").
    pub emergency_type: String,
    /// Display string for when the call was received. Not sortable.
    pub time_received: String,
    /// Free-text location of the incident.
    pub location: String,
    /// Free-text description from the caller.
    pub description: String,
    /// Current lifecycle status.
    pub status: EmergencyStatus,
    /// Code of the assigned ambulance, absent until assignment occurs.
    #[serde(default)]
    pub assigned_ambulance: Option<String>,
}

/// Account role. Open set: any string deserializes, with the three known
/// roles mapped to dedicated variants for counting and badge lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Doctor,
    Paramedic,
    /// Any role name outside the known set (e.g. "Dispatcher").
    Other(String),
}

impl Role {
    /// The roles with dedicated summary categories. Counts for these render
    /// even when zero; other roles appear only when present.
    pub const KNOWN: [Self; 3] = [Self::Admin, Self::Doctor, Self::Paramedic];

    /// Display label for the role.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::Doctor => "Doctor",
            Self::Paramedic => "Paramedic",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Admin" => Self::Admin,
            "Doctor" => Self::Doctor,
            "Paramedic" => Self::Paramedic,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.label().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Activation status of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// Display label matching the seeded data strings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// The opposite status. Used by the toggle workflow.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    /// Verb describing the transition away from this status, used in
    /// confirmation prompts ("disable" an active account, "enable" an
    /// inactive one).
    #[must_use]
    pub const fn toggle_verb(self) -> &'static str {
        match self {
            Self::Active => "disable",
            Self::Inactive => "enable",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user account visible in the management screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique key within the user collection. Never reassigned.
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

/// Outcome recorded on a system log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogStatus {
    Success,
    Failed,
    Warning,
}

impl LogStatus {
    /// All variants in display order.
    pub const ALL: [Self; 3] = [Self::Success, Self::Failed, Self::Warning];

    /// Display label matching the seeded data strings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failed => "Failed",
            Self::Warning => "Warning",
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An append-only audit record. Workflows append one entry per applied
/// mutation; nothing ever edits or removes entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemLog {
    /// Unique key within the log collection. Never reassigned.
    pub id: u32,
    /// Display timestamp string (e.g. "2025-03-14 08:02").
    pub timestamp: String,
    /// Free-text description of the action taken.
    pub action: String,
    /// Name of the actor who performed the action.
    pub user: String,
    /// Outcome of the action.
    pub status: LogStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_unknown_names() {
        let role = Role::from("Dispatcher".to_string());
        assert_eq!(role, Role::Other("Dispatcher".to_string()));
        assert_eq!(String::from(role), "Dispatcher");
    }

    #[test]
    fn role_known_names_map_to_variants() {
        assert_eq!(Role::from("Admin".to_string()), Role::Admin);
        assert_eq!(Role::from("Doctor".to_string()), Role::Doctor);
        assert_eq!(Role::from("Paramedic".to_string()), Role::Paramedic);
    }

    #[test]
    fn emergency_status_serializes_with_display_strings() {
        let json = serde_json::to_string(&EmergencyStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let parsed: EmergencyStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(parsed, EmergencyStatus::InProgress);
    }

    #[test]
    fn user_status_toggle_is_an_involution() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Active.toggled().toggled(), UserStatus::Active);
    }

    #[test]
    fn toggle_verbs_describe_the_transition() {
        assert_eq!(UserStatus::Active.toggle_verb(), "disable");
        assert_eq!(UserStatus::Inactive.toggle_verb(), "enable");
    }
}
