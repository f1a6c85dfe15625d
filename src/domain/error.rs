//! Error types for dispatch console operations.
//!
//! This module defines the centralized error type [`DispatchError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Workflow failures additionally map onto a coarse [`ErrorKind`] taxonomy so
//! the presentation layer can choose a dialog style (missing entity vs.
//! violated precondition) without matching every variant.

use thiserror::Error;

/// The main error type for dispatch console operations.
///
/// Workflow variants carry the identifier that failed to resolve or violated
/// a precondition, so dialogs can name the offending entity. Infrastructure
/// variants wrap seed-data and palette loading problems.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No emergency with the given id exists in the store.
    #[error("emergency {0} not found")]
    EmergencyNotFound(u32),

    /// No ambulance with the given code exists in the store.
    #[error("ambulance {0} not found")]
    AmbulanceNotFound(String),

    /// The ambulance exists but is not Available at call time.
    ///
    /// Candidate lists are filtered before display, but the view can go
    /// stale; the workflow re-checks and reports this instead of mutating.
    #[error("ambulance {0} is not available")]
    AmbulanceNotAvailable(String),

    /// The emergency already has an ambulance assigned.
    #[error("emergency {0} already has an ambulance assigned")]
    EmergencyAlreadyAssigned(u32),

    /// No user with the given id exists in the store.
    #[error("user {0} not found")]
    UserNotFound(u32),

    /// Seed data could not be parsed.
    #[error("seed data error: {0}")]
    Seed(String),

    /// Badge palette could not be parsed.
    #[error("palette error: {0}")]
    Palette(String),

    /// Filesystem or I/O operation failed (seed or palette file reads).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse failure category, passed through to user-facing dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An entity id or code did not resolve.
    NotFound,
    /// A status precondition was violated.
    InvalidState,
    /// Seed, palette, or I/O failure outside the workflow contracts.
    Internal,
}

impl DispatchError {
    /// Maps this error onto the coarse [`ErrorKind`] taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmergencyNotFound(_) | Self::AmbulanceNotFound(_) | Self::UserNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::AmbulanceNotAvailable(_) | Self::EmergencyAlreadyAssigned(_) => {
                ErrorKind::InvalidState
            }
            Self::Seed(_) | Self::Palette(_) | Self::Io(_) => ErrorKind::Internal,
        }
    }
}

/// A specialized `Result` type for dispatch console operations.
pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures_are_not_found() {
        assert_eq!(DispatchError::EmergencyNotFound(9).kind(), ErrorKind::NotFound);
        assert_eq!(
            DispatchError::AmbulanceNotFound("AMB-99".to_string()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(DispatchError::UserNotFound(3).kind(), ErrorKind::NotFound);
    }

    #[test]
    fn precondition_failures_are_invalid_state() {
        assert_eq!(
            DispatchError::AmbulanceNotAvailable("AMB-02".to_string()).kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            DispatchError::EmergencyAlreadyAssigned(2).kind(),
            ErrorKind::InvalidState
        );
    }

    #[test]
    fn messages_name_the_entity() {
        let err = DispatchError::AmbulanceNotAvailable("AMB-02".to_string());
        assert_eq!(err.to_string(), "ambulance AMB-02 is not available");
    }
}
