//! Handle for communicating with a search screen actor.

use tokio::sync::{mpsc, oneshot, watch};

use super::commands::ScreenCommand;
use super::control::ControlEvent;
use super::state::{RequestToken, ScreenSnapshot};
use super::ScreenError;
use crate::catalog::SearchQuery;

/// Handle for communicating with a search screen actor.
///
/// Mutations go through the command channel; reads come from the latest
/// published [`ScreenSnapshot`]. Cloning the handle is cheap. The actor stops
/// once every handle has been dropped.
#[derive(Clone)]
pub struct SearchScreenHandle {
    sender: mpsc::Sender<ScreenCommand>,
    snapshots: watch::Receiver<ScreenSnapshot>,
}

impl SearchScreenHandle {
    /// Creates a new handle from the actor's command sender and snapshot feed.
    pub fn new(
        sender: mpsc::Sender<ScreenCommand>,
        snapshots: watch::Receiver<ScreenSnapshot>,
    ) -> Self {
        Self { sender, snapshots }
    }

    /// Feeds one input event to the search control.
    ///
    /// Returns the snapshot right after the event was handled. If the event
    /// triggered a search, that snapshot is already loading.
    ///
    /// # Errors
    /// - `ScreenError::Shutdown` - The screen actor is no longer running
    pub async fn dispatch(&self, event: ControlEvent) -> Result<ScreenSnapshot, ScreenError> {
        let (responder, rx) = oneshot::channel();
        let cmd = ScreenCommand::Dispatch { event, responder };

        self.sender
            .send(cmd)
            .await
            .map_err(|_| ScreenError::Shutdown)?;

        rx.await.map_err(|_| ScreenError::Shutdown)
    }

    /// Sets the control text and feeds `event` in a single transition.
    ///
    /// No other command can run between the text update and the event, so
    /// a search triggered by `event` always uses `text`.
    ///
    /// # Errors
    /// - `ScreenError::Shutdown` - The screen actor is no longer running
    pub async fn submit(
        &self,
        text: String,
        event: ControlEvent,
    ) -> Result<ScreenSnapshot, ScreenError> {
        let (responder, rx) = oneshot::channel();
        let cmd = ScreenCommand::Submit {
            text,
            event,
            responder,
        };

        self.sender
            .send(cmd)
            .await
            .map_err(|_| ScreenError::Shutdown)?;

        rx.await.map_err(|_| ScreenError::Shutdown)
    }

    /// Issues a search for `query` and returns its request token.
    ///
    /// # Errors
    /// - `ScreenError::Shutdown` - The screen actor is no longer running
    pub async fn search(&self, query: SearchQuery) -> Result<RequestToken, ScreenError> {
        let (responder, rx) = oneshot::channel();
        let cmd = ScreenCommand::Search { query, responder };

        self.sender
            .send(cmd)
            .await
            .map_err(|_| ScreenError::Shutdown)?;

        rx.await.map_err(|_| ScreenError::Shutdown)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> ScreenSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ScreenSnapshot> {
        self.snapshots.clone()
    }

    /// Waits until the screen is no longer loading and returns that snapshot.
    ///
    /// # Errors
    /// - `ScreenError::Shutdown` - The actor stopped while still loading
    pub async fn settled(&self) -> Result<ScreenSnapshot, ScreenError> {
        let mut snapshots = self.snapshots.clone();
        let snapshot = snapshots
            .wait_for(|snapshot| !snapshot.is_loading())
            .await
            .map_err(|_| ScreenError::Shutdown)?;
        Ok(snapshot.clone())
    }

    /// Shuts down the screen actor gracefully.
    ///
    /// # Errors
    /// - `ScreenError::Shutdown` - The actor was already gone
    pub async fn shutdown(&self) -> Result<(), ScreenError> {
        let (responder, rx) = oneshot::channel();
        let cmd = ScreenCommand::Shutdown { responder };

        self.sender
            .send(cmd)
            .await
            .map_err(|_| ScreenError::Shutdown)?;

        rx.await.map_err(|_| ScreenError::Shutdown)
    }

    /// Checks if the screen actor is still accepting commands.
    pub fn is_running(&self) -> bool {
        !self.sender.is_closed()
    }
}
