//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the embedding shell and the domain/store/query
//! layers. It implements the event-driven flow that powers the console:
//!
//! ```text
//! Operator Input → Events → Event Handler → State Mutations → Actions → Dialogs
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Dialog and prompt commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Screen, tab, and pending-confirmation state types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{ManagementTab, PendingConfirmation, Screen};
pub use state::AppState;
