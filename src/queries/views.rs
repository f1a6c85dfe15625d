//! Filtered subsets and single-entity lookups for detail panels.
//!
//! Filtering is always an equality check on an enum field; there is no
//! free-text search anywhere in the console. Results preserve store order.

use crate::domain::models::{Ambulance, AmbulanceStatus, Emergency};

/// Ambulances eligible for assignment: status Available, in store order.
///
/// This feeds the candidate list in the emergency detail view. The
/// assignment workflow re-validates availability at call time, so a stale
/// copy of this list cannot cause a double dispatch.
#[must_use]
pub fn available_ambulances(ambulances: &[Ambulance]) -> Vec<&Ambulance> {
    ambulances
        .iter()
        .filter(|a| a.status == AmbulanceStatus::Available)
        .collect()
}

/// Looks up an emergency by id for the detail view.
///
/// An absent id yields `None` and the caller shows no detail view; it is not
/// an error condition.
#[must_use]
pub fn emergency_by_id(emergencies: &[Emergency], id: u32) -> Option<&Emergency> {
    emergencies.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EmergencyStatus;

    fn ambulance(id: u32, code: &str, status: AmbulanceStatus) -> Ambulance {
        Ambulance {
            id,
            code: code.to_string(),
            location: "Depot".to_string(),
            driver: "Driver".to_string(),
            status,
        }
    }

    #[test]
    fn available_subset_preserves_store_order() {
        let units = vec![
            ambulance(1, "AMB-01", AmbulanceStatus::Available),
            ambulance(2, "AMB-02", AmbulanceStatus::Busy),
            ambulance(3, "AMB-03", AmbulanceStatus::Available),
        ];

        let available = available_ambulances(&units);
        let codes: Vec<&str> = available.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, vec!["AMB-01", "AMB-03"]);
    }

    #[test]
    fn no_available_units_yields_empty_list() {
        let units = vec![ambulance(1, "AMB-01", AmbulanceStatus::Busy)];
        assert!(available_ambulances(&units).is_empty());
    }

    #[test]
    fn unknown_emergency_id_is_none() {
        let emergencies = vec![Emergency {
            id: 1,
            patient_id: "P-1023".to_string(),
            patient_name: "John Adams".to_string(),
            emergency_type: "Cardiac Arrest".to_string(),
            time_received: "08:42 AM".to_string(),
            location: "12 Marina Road".to_string(),
            description: "Chest pain".to_string(),
            status: EmergencyStatus::New,
            assigned_ambulance: None,
        }];

        assert!(emergency_by_id(&emergencies, 1).is_some());
        assert!(emergency_by_id(&emergencies, 9).is_none());
    }
}
