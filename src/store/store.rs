//! The dispatch entity store.
//!
//! [`DispatchStore`] holds the ambulance, emergency, user, and log
//! collections for the lifetime of the process. It is exclusively owned by
//! the application state and mutated only from event handlers, so there is no
//! locking; every call runs to completion before the next event is processed.
//!
//! # Mutation Discipline
//!
//! Both workflows are all-or-nothing: every precondition is checked against
//! current store contents before the first field is written. Collections are
//! append-only from the caller's perspective; no delete operation exists.

use crate::domain::error::{DispatchError, Result};
use crate::domain::models::{
    Ambulance, AmbulanceStatus, Emergency, EmergencyStatus, LogStatus, SystemLog, User, UserStatus,
};
use crate::store::seed::SeedData;

/// Timestamp format used for appended log entries, matching the display
/// strings in the seed data.
const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Outcome of a successful ambulance assignment.
///
/// Carries the identifiers the presentation layer needs for its
/// acknowledgement dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentReceipt {
    /// Id of the emergency that received the assignment.
    pub emergency_id: u32,
    /// Patient reference of that emergency.
    pub patient_id: String,
    /// Code of the ambulance that was bound to it.
    pub ambulance_code: String,
}

impl AssignmentReceipt {
    /// User-facing confirmation text naming the ambulance code and patient id.
    #[must_use]
    pub fn confirmation_message(&self) -> String {
        format!(
            "{} has been assigned to {}",
            self.ambulance_code, self.patient_id
        )
    }
}

/// In-memory store over the four entity collections.
///
/// Constructed once from a [`SeedData`] snapshot; the collections then live
/// for the process lifetime. Reads return slices in insertion order.
#[derive(Debug, Clone)]
pub struct DispatchStore {
    ambulances: Vec<Ambulance>,
    emergencies: Vec<Emergency>,
    users: Vec<User>,
    logs: Vec<SystemLog>,
}

impl DispatchStore {
    /// Creates a store from a seed dataset.
    #[must_use]
    pub fn new(seed: SeedData) -> Self {
        tracing::debug!(
            ambulances = seed.ambulances.len(),
            emergencies = seed.emergencies.len(),
            users = seed.users.len(),
            logs = seed.logs.len(),
            "store seeded"
        );
        Self {
            ambulances: seed.ambulances,
            emergencies: seed.emergencies,
            users: seed.users,
            logs: seed.logs,
        }
    }

    /// All ambulances in insertion order.
    #[must_use]
    pub fn list_ambulances(&self) -> &[Ambulance] {
        &self.ambulances
    }

    /// All emergencies in insertion order.
    #[must_use]
    pub fn list_emergencies(&self) -> &[Emergency] {
        &self.emergencies
    }

    /// All users in insertion order.
    #[must_use]
    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    /// All log entries in insertion order, oldest first.
    #[must_use]
    pub fn list_logs(&self) -> &[SystemLog] {
        &self.logs
    }

    /// Looks up an ambulance by its display code.
    #[must_use]
    pub fn ambulance_by_code(&self, code: &str) -> Option<&Ambulance> {
        self.ambulances.iter().find(|a| a.code == code)
    }

    /// Looks up an emergency by id. Absent ids are `None`, not an error:
    /// the caller simply has no detail view to show.
    #[must_use]
    pub fn emergency_by_id(&self, id: u32) -> Option<&Emergency> {
        self.emergencies.iter().find(|e| e.id == id)
    }

    /// Looks up a user by id.
    #[must_use]
    pub fn user_by_id(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Binds an available ambulance to an unassigned emergency.
    ///
    /// Both preconditions are re-validated here even though candidate lists
    /// are filtered before display; the detail view a selection came from may
    /// be stale. On success the emergency becomes `Assigned` with the
    /// ambulance code recorded, the ambulance becomes `Busy`, and one log
    /// entry is appended under `actor`'s name.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::EmergencyNotFound`] if no emergency has this id
    /// - [`DispatchError::EmergencyAlreadyAssigned`] if it already has a unit
    /// - [`DispatchError::AmbulanceNotFound`] if no ambulance has this code
    /// - [`DispatchError::AmbulanceNotAvailable`] if the unit is not Available
    ///
    /// On any failure no record is modified and no log entry is appended.
    pub fn assign_ambulance(
        &mut self,
        emergency_id: u32,
        ambulance_code: &str,
        actor: &str,
    ) -> Result<AssignmentReceipt> {
        let _span = tracing::debug_span!(
            "assign_ambulance",
            emergency_id = emergency_id,
            ambulance_code = %ambulance_code
        )
        .entered();

        let emergency_idx = self
            .emergencies
            .iter()
            .position(|e| e.id == emergency_id)
            .ok_or(DispatchError::EmergencyNotFound(emergency_id))?;

        if self.emergencies[emergency_idx].assigned_ambulance.is_some() {
            return Err(DispatchError::EmergencyAlreadyAssigned(emergency_id));
        }

        let ambulance_idx = self
            .ambulances
            .iter()
            .position(|a| a.code == ambulance_code)
            .ok_or_else(|| DispatchError::AmbulanceNotFound(ambulance_code.to_string()))?;

        if self.ambulances[ambulance_idx].status != AmbulanceStatus::Available {
            return Err(DispatchError::AmbulanceNotAvailable(
                ambulance_code.to_string(),
            ));
        }

        // All preconditions hold; apply the transition to both records.
        let emergency = &mut self.emergencies[emergency_idx];
        emergency.assigned_ambulance = Some(ambulance_code.to_string());
        emergency.status = EmergencyStatus::Assigned;
        let patient_id = emergency.patient_id.clone();

        self.ambulances[ambulance_idx].status = AmbulanceStatus::Busy;

        self.append_log(
            format!("dispatch {ambulance_code} to {patient_id}"),
            actor,
            LogStatus::Success,
        );

        tracing::debug!(patient_id = %patient_id, "ambulance assigned");

        Ok(AssignmentReceipt {
            emergency_id,
            patient_id,
            ambulance_code: ambulance_code.to_string(),
        })
    }

    /// Flips a user account between Active and Inactive.
    ///
    /// Appends one log entry describing the transition ("disable Chidi
    /// Okeke") under `actor`'s name and returns the new status. The
    /// confirmation step guarding this call lives in the application layer;
    /// by the time the store is reached the operator has already confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UserNotFound`] if no user has this id, in
    /// which case nothing is modified.
    pub fn toggle_user_status(&mut self, user_id: u32, actor: &str) -> Result<UserStatus> {
        let _span = tracing::debug_span!("toggle_user_status", user_id = user_id).entered();

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(DispatchError::UserNotFound(user_id))?;

        let verb = user.status.toggle_verb();
        user.status = user.status.toggled();
        let new_status = user.status;
        let action = format!("{verb} {}", user.name);

        self.append_log(action, actor, LogStatus::Success);

        tracing::debug!(new_status = %new_status, "user status toggled");
        Ok(new_status)
    }

    /// Appends an audit entry with the current wall-clock timestamp.
    fn append_log(&mut self, action: String, actor: &str, status: LogStatus) {
        let entry = SystemLog {
            id: self.next_log_id(),
            timestamp: chrono::Local::now().format(LOG_TIMESTAMP_FORMAT).to_string(),
            action,
            user: actor.to_string(),
            status,
        };
        tracing::debug!(log_id = entry.id, action = %entry.action, "log entry appended");
        self.logs.push(entry);
    }

    /// Next free log id: one past the highest id in use. Ids are never
    /// reassigned, so max+1 stays unique even though entries are only
    /// ever appended.
    fn next_log_id(&self) -> u32 {
        self.logs.iter().map(|l| l.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Role;

    fn sample_store() -> DispatchStore {
        DispatchStore::new(SeedData {
            ambulances: vec![
                Ambulance {
                    id: 1,
                    code: "AMB-01".to_string(),
                    location: "Central Station".to_string(),
                    driver: "Daniel Okafor".to_string(),
                    status: AmbulanceStatus::Available,
                },
                Ambulance {
                    id: 2,
                    code: "AMB-02".to_string(),
                    location: "North Depot".to_string(),
                    driver: "Grace Mensah".to_string(),
                    status: AmbulanceStatus::Busy,
                },
            ],
            emergencies: vec![
                Emergency {
                    id: 1,
                    patient_id: "P-1023".to_string(),
                    patient_name: "John Adams".to_string(),
                    emergency_type: "Cardiac Arrest".to_string(),
                    time_received: "08:42 AM".to_string(),
                    location: "12 Marina Road".to_string(),
                    description: "Chest pain".to_string(),
                    status: EmergencyStatus::New,
                    assigned_ambulance: None,
                },
                Emergency {
                    id: 2,
                    patient_id: "P-1031".to_string(),
                    patient_name: "Mary Johnson".to_string(),
                    emergency_type: "Road Accident".to_string(),
                    time_received: "09:15 AM".to_string(),
                    location: "Lekki Toll Gate".to_string(),
                    description: "Collision".to_string(),
                    status: EmergencyStatus::Assigned,
                    assigned_ambulance: Some("AMB-02".to_string()),
                },
            ],
            users: vec![User {
                id: 1,
                name: "Chidi Okeke".to_string(),
                email: "chidi.okeke@dispatch.example".to_string(),
                role: Role::Paramedic,
                status: UserStatus::Active,
            }],
            logs: vec![SystemLog {
                id: 1,
                timestamp: "2025-03-14 08:02".to_string(),
                action: "login".to_string(),
                user: "Adaeze Nwosu".to_string(),
                status: LogStatus::Success,
            }],
        })
    }

    #[test]
    fn assignment_updates_both_records_and_appends_one_log() {
        let mut store = sample_store();
        let logs_before = store.list_logs().len();

        let receipt = store.assign_ambulance(1, "AMB-01", "Adaeze Nwosu").unwrap();
        assert_eq!(receipt.patient_id, "P-1023");
        assert_eq!(receipt.confirmation_message(), "AMB-01 has been assigned to P-1023");

        let emergency = store.emergency_by_id(1).unwrap();
        assert_eq!(emergency.status, EmergencyStatus::Assigned);
        assert_eq!(emergency.assigned_ambulance.as_deref(), Some("AMB-01"));

        let unit = store.ambulance_by_code("AMB-01").unwrap();
        assert_eq!(unit.status, AmbulanceStatus::Busy);

        assert_eq!(store.list_logs().len(), logs_before + 1);
        let entry = store.list_logs().last().unwrap();
        assert_eq!(entry.action, "dispatch AMB-01 to P-1023");
        assert_eq!(entry.user, "Adaeze Nwosu");
        assert_eq!(entry.status, LogStatus::Success);
    }

    #[test]
    fn assignment_to_assigned_emergency_leaves_store_unchanged() {
        let mut store = sample_store();
        let before = store.clone();

        let err = store.assign_ambulance(2, "AMB-01", "Adaeze Nwosu").unwrap_err();
        assert!(matches!(err, DispatchError::EmergencyAlreadyAssigned(2)));

        assert_eq!(store.list_emergencies(), before.list_emergencies());
        assert_eq!(store.list_ambulances(), before.list_ambulances());
        assert_eq!(store.list_logs(), before.list_logs());
    }

    #[test]
    fn assignment_with_unknown_emergency_appends_no_log() {
        let mut store = sample_store();
        let logs_before = store.list_logs().len();

        let err = store.assign_ambulance(99, "AMB-01", "Adaeze Nwosu").unwrap_err();
        assert!(matches!(err, DispatchError::EmergencyNotFound(99)));
        assert_eq!(store.list_logs().len(), logs_before);
    }

    #[test]
    fn assignment_revalidates_ambulance_availability() {
        let mut store = sample_store();

        let err = store.assign_ambulance(1, "AMB-02", "Adaeze Nwosu").unwrap_err();
        assert!(matches!(err, DispatchError::AmbulanceNotAvailable(_)));

        // The stale selection must not have touched the emergency.
        let emergency = store.emergency_by_id(1).unwrap();
        assert_eq!(emergency.status, EmergencyStatus::New);
        assert!(emergency.assigned_ambulance.is_none());
    }

    #[test]
    fn assignment_with_unknown_ambulance_fails() {
        let mut store = sample_store();
        let err = store.assign_ambulance(1, "AMB-99", "Adaeze Nwosu").unwrap_err();
        assert!(matches!(err, DispatchError::AmbulanceNotFound(_)));
    }

    #[test]
    fn toggle_flips_status_and_logs_the_transition() {
        let mut store = sample_store();

        let status = store.toggle_user_status(1, "Adaeze Nwosu").unwrap();
        assert_eq!(status, UserStatus::Inactive);
        assert_eq!(store.user_by_id(1).unwrap().status, UserStatus::Inactive);

        let entry = store.list_logs().last().unwrap();
        assert_eq!(entry.action, "disable Chidi Okeke");
        assert_eq!(entry.user, "Adaeze Nwosu");
        assert_eq!(entry.status, LogStatus::Success);
    }

    #[test]
    fn double_toggle_restores_status_with_two_log_entries() {
        let mut store = sample_store();
        let logs_before = store.list_logs().len();

        store.toggle_user_status(1, "Adaeze Nwosu").unwrap();
        store.toggle_user_status(1, "Adaeze Nwosu").unwrap();

        assert_eq!(store.user_by_id(1).unwrap().status, UserStatus::Active);
        assert_eq!(store.list_logs().len(), logs_before + 2);
        assert_eq!(store.list_logs().last().unwrap().action, "enable Chidi Okeke");
    }

    #[test]
    fn toggle_unknown_user_fails_without_mutation() {
        let mut store = sample_store();
        let logs_before = store.list_logs().len();

        let err = store.toggle_user_status(42, "Adaeze Nwosu").unwrap_err();
        assert!(matches!(err, DispatchError::UserNotFound(42)));
        assert_eq!(store.list_logs().len(), logs_before);
    }

    #[test]
    fn appended_log_ids_remain_unique() {
        let mut store = sample_store();
        store.toggle_user_status(1, "Adaeze Nwosu").unwrap();
        store.toggle_user_status(1, "Adaeze Nwosu").unwrap();

        let mut ids: Vec<u32> = store.list_logs().iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.list_logs().len());
    }
}
