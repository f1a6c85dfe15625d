//! Seed dataset loading.
//!
//! The store is seeded once at startup from a fixed dataset and never
//! reloaded. The default dataset is a JSON document compiled into the binary;
//! an alternative file can be supplied through configuration so the store can
//! be pointed at a test fixture without code changes.
//!
//! # File Format
//!
//! ```json
//! {
//!   "ambulances": [
//!     {
//!       "id": 1,
//!       "code": "AMB-01",
//!       "location": "Central Station",
//!       "driver": "Daniel Okafor",
//!       "status": "Available"
//!     }
//!   ],
//!   "emergencies": [],
//!   "users": [],
//!   "logs": []
//! }
//! ```

use crate::domain::error::{DispatchError, Result};
use crate::domain::models::{Ambulance, Emergency, SystemLog, User};
use serde::Deserialize;
use std::path::Path;

/// The four entity collections in their seeded order.
///
/// Insertion order is preserved end to end: lists and filtered views render
/// entities in exactly this order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub ambulances: Vec<Ambulance>,
    #[serde(default)]
    pub emergencies: Vec<Emergency>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub logs: Vec<SystemLog>,
}

impl SeedData {
    /// Returns the built-in dataset compiled into the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded JSON fails to parse (should never occur).
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_json(include_str!("seed.json"))
            .expect("built-in seed data should always parse")
    }

    /// Parses a seed dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Seed`] if the JSON is malformed or does not
    /// match the expected shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DispatchError::Seed(format!("failed to parse seed JSON: {e}")))
    }

    /// Loads a seed dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!(path = ?path.as_ref(), "loading seed data from file");
        let contents = std::fs::read_to_string(path)?;
        let seed = Self::from_json(&contents)?;

        tracing::debug!(
            ambulances = seed.ambulances.len(),
            emergencies = seed.emergencies.len(),
            users = seed.users.len(),
            logs = seed.logs.len(),
            "seed data loaded"
        );
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EmergencyStatus;
    use std::collections::HashSet;

    #[test]
    fn embedded_seed_parses() {
        let seed = SeedData::embedded();
        assert!(!seed.ambulances.is_empty());
        assert!(!seed.emergencies.is_empty());
        assert!(!seed.users.is_empty());
        assert!(!seed.logs.is_empty());
    }

    #[test]
    fn embedded_ids_are_unique_per_collection() {
        let seed = SeedData::embedded();
        let ambulance_ids: HashSet<u32> = seed.ambulances.iter().map(|a| a.id).collect();
        assert_eq!(ambulance_ids.len(), seed.ambulances.len());

        let emergency_ids: HashSet<u32> = seed.emergencies.iter().map(|e| e.id).collect();
        assert_eq!(emergency_ids.len(), seed.emergencies.len());

        let user_ids: HashSet<u32> = seed.users.iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), seed.users.len());

        let log_ids: HashSet<u32> = seed.logs.iter().map(|l| l.id).collect();
        assert_eq!(log_ids.len(), seed.logs.len());
    }

    #[test]
    fn embedded_assignments_match_statuses() {
        // An ambulance code is present exactly when the call has progressed
        // past New, and the referenced unit must exist and be Busy.
        let seed = SeedData::embedded();
        for emergency in &seed.emergencies {
            match emergency.status {
                EmergencyStatus::New => assert!(emergency.assigned_ambulance.is_none()),
                EmergencyStatus::Assigned | EmergencyStatus::InProgress => {
                    let code = emergency
                        .assigned_ambulance
                        .as_deref()
                        .expect("assigned emergency must reference an ambulance");
                    let unit = seed
                        .ambulances
                        .iter()
                        .find(|a| a.code == code)
                        .expect("assigned ambulance must exist");
                    assert_eq!(unit.status.label(), "Busy");
                }
            }
        }
    }

    #[test]
    fn malformed_json_reports_seed_error() {
        let err = SeedData::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("seed data error"));
    }
}
