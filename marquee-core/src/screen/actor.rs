//! Actor implementation for the search screen.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use super::commands::ScreenCommand;
use super::control::{ControlEvent, SearchControl, SearchRequested};
use super::handle::SearchScreenHandle;
use super::state::{Applied, FetchOutcome, FetchRequest, RequestToken, ScreenSnapshot, ScreenState};
use crate::catalog::{CatalogProvider, SearchQuery};
use crate::config::SearchDefaults;

const COMMAND_BUFFER: usize = 32;

/// Mounts a search screen and returns its handle.
///
/// The initial search for the configured default query is issued before this
/// function returns, so the first snapshot any handle observes is loading.
/// Fetches run in their own tasks and report back through an internal
/// channel; the actor never waits on the network itself.
pub fn spawn_search_screen(
    provider: Arc<dyn CatalogProvider>,
    defaults: &SearchDefaults,
) -> SearchScreenHandle {
    let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
    let (fetch_sender, fetch_receiver) = mpsc::unbounded_channel();

    let initial = defaults.initial_query();
    let mut screen = SearchScreen {
        control: SearchControl::new(initial.clone()),
        state: ScreenState::new(),
        provider,
        fetch_sender,
    };
    screen.search(initial);

    let (snapshot_sender, snapshot_receiver) = watch::channel(screen.snapshot());

    tokio::spawn(async move {
        run_actor_loop(screen, receiver, fetch_receiver, snapshot_sender).await;
    });

    SearchScreenHandle::new(sender, snapshot_receiver)
}

/// Screen coordinator owned by the actor task.
struct SearchScreen {
    control: SearchControl,
    state: ScreenState,
    provider: Arc<dyn CatalogProvider>,
    fetch_sender: mpsc::UnboundedSender<FetchOutcome>,
}

impl SearchScreen {
    fn dispatch(&mut self, event: ControlEvent) -> Option<RequestToken> {
        let control = std::mem::take(&mut self.control);
        let (control, requested) = control.handle(event);
        self.control = control;

        requested.map(|SearchRequested(query)| self.search(query))
    }

    fn search(&mut self, query: SearchQuery) -> RequestToken {
        let state = std::mem::take(&mut self.state);
        let (state, request) = state.issue(query);
        self.state = state;

        let token = request.token;
        self.start_fetch(request);
        token
    }

    fn start_fetch(&self, request: FetchRequest) {
        let provider = Arc::clone(&self.provider);
        let fetch_sender = self.fetch_sender.clone();

        tracing::debug!(
            token = %request.token,
            text = %request.query.text,
            filter = %request.query.filter,
            provider = provider.name(),
            "Issuing catalog search"
        );

        tokio::spawn(async move {
            let result = provider.search(&request.query).await;
            // The actor may be gone; the outcome is dropped with it.
            let _ = fetch_sender.send(FetchOutcome {
                token: request.token,
                result,
            });
        });
    }

    fn complete(&mut self, outcome: FetchOutcome) -> Applied {
        let token = outcome.token;
        if let Err(error) = &outcome.result {
            tracing::warn!("Catalog search {} failed: {}", token, error);
        }

        let state = std::mem::take(&mut self.state);
        let (state, applied) = state.apply(outcome);
        self.state = state;

        match applied {
            Applied::Current => tracing::debug!(
                "Search {} applied with {} results",
                token,
                self.state.results().len()
            ),
            Applied::Stale => tracing::debug!("Discarded stale outcome for search {}", token),
        }
        applied
    }

    fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::capture(&self.control, &self.state)
    }
}

/// Runs the screen's message processing loop.
///
/// Commands and fetch outcomes are handled one at a time. The loop ends when
/// a shutdown command arrives or every handle has been dropped.
async fn run_actor_loop(
    mut screen: SearchScreen,
    mut receiver: mpsc::Receiver<ScreenCommand>,
    mut fetch_receiver: mpsc::UnboundedReceiver<FetchOutcome>,
    snapshots: watch::Sender<ScreenSnapshot>,
) {
    tracing::debug!("Search screen actor started");

    loop {
        tokio::select! {
            command = receiver.recv() => {
                let Some(command) = command else { break };
                if !handle_command(&mut screen, command, &snapshots) {
                    break;
                }
            }
            Some(outcome) = fetch_receiver.recv() => {
                if screen.complete(outcome) == Applied::Current {
                    snapshots.send_replace(screen.snapshot());
                }
            }
        }
    }

    tracing::debug!("Search screen actor stopped");
}

/// Handles a single command. Returns true to continue processing, false to shutdown.
fn handle_command(
    screen: &mut SearchScreen,
    command: ScreenCommand,
    snapshots: &watch::Sender<ScreenSnapshot>,
) -> bool {
    match command {
        ScreenCommand::Dispatch { event, responder } => {
            screen.dispatch(event);
            let snapshot = screen.snapshot();
            snapshots.send_replace(snapshot.clone());
            let _ = responder.send(snapshot);
        }

        ScreenCommand::Submit {
            text,
            event,
            responder,
        } => {
            screen.dispatch(ControlEvent::TextChanged(text));
            screen.dispatch(event);
            let snapshot = screen.snapshot();
            snapshots.send_replace(snapshot.clone());
            let _ = responder.send(snapshot);
        }

        ScreenCommand::Search { query, responder } => {
            let token = screen.search(query);
            snapshots.send_replace(screen.snapshot());
            let _ = responder.send(token);
        }

        ScreenCommand::Shutdown { responder } => {
            tracing::debug!("Search screen actor shutting down");
            let _ = responder.send(());
            return false;
        }
    }

    true
}
