//! Actions representing side effects to be executed by the embedding shell.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions are the boundary between the pure state transition and whatever
//! the shell does with dialogs: a mobile shell maps them to alert boxes, the
//! demo binary prints them. The handler never renders anything itself.

use crate::domain::error::ErrorKind;

/// Side effects produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show an acknowledgement dialog with a single OK button.
    ///
    /// Emitted for successful workflow outcomes (e.g. "AMB-01 has been
    /// assigned to P-1023") and informational taps like editing a user.
    ShowDialog {
        /// Dialog title (e.g. "Ambulance Assigned").
        title: String,
        /// Dialog body text.
        message: String,
    },

    /// Show a confirm/cancel prompt for a proposed mutation.
    ///
    /// The shell answers by feeding `Event::Confirm` or `Event::Cancel`
    /// back into the handler.
    ShowConfirmation {
        /// Prompt text (e.g. "Are you sure you want to disable Chidi Okeke?").
        message: String,
    },

    /// Show an error dialog for a failed workflow.
    ///
    /// The failure category is passed through untouched so the shell can
    /// style the dialog without interpreting the message.
    ShowError {
        /// Coarse failure category.
        kind: ErrorKind,
        /// Human-readable failure description.
        message: String,
    },
}
