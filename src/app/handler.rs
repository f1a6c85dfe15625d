//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes shell events
//! (taps on tabs, cards, and buttons), translating them into state changes
//! and action sequences. Execution is strictly sequential: every call runs
//! to completion before the next event is processed, so mutations never
//! interleave.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the embedding shell
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` fields and store workflows
//! 4. Actions are collected and returned for the shell to execute
//!
//! Workflow failures are expected outcomes, not faults: they are converted
//! into [`Action::ShowError`] with the failure kind passed through, and the
//! store is left untouched. `handle_event` itself never fails.

use crate::app::actions::Action;
use crate::app::modes::PendingConfirmation;
use crate::app::state::AppState;
use crate::app::{ManagementTab, Screen};
use crate::domain::error::DispatchError;

/// Events triggered by operator interaction in the embedding shell.
///
/// Each event represents a discrete tap or answer to a prompt. The handler
/// processes these sequentially, ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Selects a screen in the bottom navigation.
    SelectScreen(Screen),

    /// Selects a tab within the management screen.
    SelectManagementTab(ManagementTab),

    /// Opens the detail modal for an emergency card.
    ///
    /// An unknown id is ignored: no detail view is shown and no error is
    /// raised, matching a tap on a card that has just disappeared.
    OpenEmergency { id: u32 },

    /// Closes the emergency detail modal.
    CloseEmergencyDetail,

    /// Assigns an ambulance to an emergency from the detail modal's
    /// candidate list.
    AssignAmbulance {
        emergency_id: u32,
        ambulance_code: String,
    },

    /// Opens the edit dialog for a user. Display only; no mutation.
    EditUser { id: u32 },

    /// Proposes enabling/disabling a user account. First phase of the
    /// two-phase confirmation; nothing is mutated until [`Event::Confirm`].
    RequestToggleUser { id: u32 },

    /// Confirms the pending proposal and applies it.
    Confirm,

    /// Cancels the pending proposal. No mutation, not an error.
    Cancel,
}

/// Processes an event, mutates application state, and returns actions.
///
/// # Returns
///
/// A `(should_render, actions)` pair: `should_render` is `true` when the
/// visible screen changed and the shell should recompute its view model;
/// `actions` are dialogs and prompts for the shell to show, possibly empty.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectScreen(screen) => {
            tracing::debug!(screen = ?screen, "screen selected");
            state.screen = *screen;
            // Leaving the emergencies screen drops the modal.
            if *screen != Screen::Emergencies {
                state.open_emergency = None;
            }
            (true, vec![])
        }

        Event::SelectManagementTab(tab) => {
            tracing::debug!(tab = ?tab, "management tab selected");
            state.management_tab = *tab;
            (true, vec![])
        }

        Event::OpenEmergency { id } => {
            if state.store.emergency_by_id(*id).is_some() {
                state.open_emergency = Some(*id);
                (true, vec![])
            } else {
                tracing::debug!(emergency_id = id, "emergency not found, no detail shown");
                (false, vec![])
            }
        }

        Event::CloseEmergencyDetail => {
            state.open_emergency = None;
            (true, vec![])
        }

        Event::AssignAmbulance {
            emergency_id,
            ambulance_code,
        } => {
            let operator = state.operator.clone();
            match state
                .store
                .assign_ambulance(*emergency_id, ambulance_code, &operator)
            {
                Ok(receipt) => {
                    state.open_emergency = None;
                    (
                        true,
                        vec![Action::ShowDialog {
                            title: "Ambulance Assigned".to_string(),
                            message: receipt.confirmation_message(),
                        }],
                    )
                }
                Err(err) => {
                    tracing::debug!(error = %err, "assignment rejected");
                    (false, vec![show_error(&err)])
                }
            }
        }

        Event::EditUser { id } => match state.store.user_by_id(*id) {
            Some(user) => (
                false,
                vec![Action::ShowDialog {
                    title: "Edit User".to_string(),
                    message: format!("Editing {}", user.name),
                }],
            ),
            None => {
                let err = DispatchError::UserNotFound(*id);
                (false, vec![show_error(&err)])
            }
        },

        Event::RequestToggleUser { id } => match state.store.user_by_id(*id) {
            Some(user) => {
                let message = format!(
                    "Are you sure you want to {} {}?",
                    user.status.toggle_verb(),
                    user.name
                );
                state.pending = Some(PendingConfirmation::ToggleUserStatus { user_id: *id });
                tracing::debug!(user_id = id, "toggle proposed, awaiting confirmation");
                (false, vec![Action::ShowConfirmation { message }])
            }
            None => {
                let err = DispatchError::UserNotFound(*id);
                (false, vec![show_error(&err)])
            }
        },

        Event::Confirm => match state.pending.take() {
            Some(PendingConfirmation::ToggleUserStatus { user_id }) => {
                let operator = state.operator.clone();
                match state.store.toggle_user_status(user_id, &operator) {
                    Ok(new_status) => {
                        // Name lookup cannot fail here; the toggle just found the user.
                        let name = state
                            .store
                            .user_by_id(user_id)
                            .map_or_else(String::new, |u| u.name.clone());
                        (
                            true,
                            vec![Action::ShowDialog {
                                title: "User Updated".to_string(),
                                message: format!("{name} is now {new_status}"),
                            }],
                        )
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "toggle rejected");
                        (false, vec![show_error(&err)])
                    }
                }
            }
            None => {
                tracing::debug!("confirm with nothing pending, ignored");
                (false, vec![])
            }
        },

        Event::Cancel => {
            if state.pending.take().is_some() {
                tracing::debug!("pending confirmation cancelled");
            }
            (false, vec![])
        }
    }
}

fn show_error(err: &DispatchError) -> Action {
    Action::ShowError {
        kind: err.kind(),
        message: err.to_string(),
    }
}
