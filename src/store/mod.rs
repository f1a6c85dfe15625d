//! In-memory entity store and dispatch workflows.
//!
//! This module owns the four entity collections and every mutation path over
//! them. Reads hand out slices in insertion order; the two workflows
//! ([`DispatchStore::assign_ambulance`] and
//! [`DispatchStore::toggle_user_status`]) validate all preconditions before
//! touching any record, so a failed call leaves the store byte-for-byte
//! unchanged.

pub mod seed;
#[allow(clippy::module_inception)]
pub mod store;

pub use seed::SeedData;
pub use store::{AssignmentReceipt, DispatchStore};
