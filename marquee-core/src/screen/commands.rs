//! Command definitions for the search screen actor.

use tokio::sync::oneshot;

use super::control::ControlEvent;
use super::state::{RequestToken, ScreenSnapshot};
use crate::catalog::SearchQuery;

/// Commands that can be sent to a search screen actor.
///
/// Each command carries its own response channel. The actor handles commands
/// one at a time, so all state transitions of a screen are serialized.
pub enum ScreenCommand {
    /// Feed one user input event to the search control.
    Dispatch {
        event: ControlEvent,
        responder: oneshot::Sender<ScreenSnapshot>,
    },
    /// Set the text, then feed the event, as one transition.
    Submit {
        text: String,
        event: ControlEvent,
        responder: oneshot::Sender<ScreenSnapshot>,
    },
    /// Issue a search directly, bypassing the control.
    Search {
        query: SearchQuery,
        responder: oneshot::Sender<RequestToken>,
    },
    /// Shutdown the actor gracefully.
    Shutdown { responder: oneshot::Sender<()> },
}
