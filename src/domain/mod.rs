//! Domain layer for the dispatch console.
//!
//! This module contains the core entity types and error definitions for the
//! application, independent of any presentation framework or seed-data format.
//! It follows domain-driven design principles by keeping the dispatch rules
//! isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types, failure kinds, and result aliases
//! - [`models`]: Entity records and their status enums
//!
//! # Examples
//!
//! ```
//! use dispatchdesk::domain::{Ambulance, AmbulanceStatus};
//!
//! let unit = Ambulance {
//!     id: 1,
//!     code: "AMB-01".to_string(),
//!     location: "Central Station".to_string(),
//!     driver: "Daniel Okafor".to_string(),
//!     status: AmbulanceStatus::Available,
//! };
//! assert_eq!(unit.status.label(), "Available");
//! ```

pub mod error;
pub mod models;

pub use error::{DispatchError, ErrorKind, Result};
pub use models::{
    Ambulance, AmbulanceStatus, Emergency, EmergencyStatus, LogStatus, Role, SystemLog, User,
    UserStatus,
};
