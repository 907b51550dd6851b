//! Command execution
//!
//! Runs the `Command`s produced by `AppState` as tasks on a tokio runtime and
//! reports each completion as exactly one `AppEvent` on a channel. The UI
//! drains that channel once per frame, so all state mutation stays on the
//! UI thread.

use crate::api::ApiClient;
use crate::state::{AppEvent, AppState, Command};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Executes commands and collects their completion events
pub struct Controller {
    client: ApiClient,
    runtime: Handle,
    tx: mpsc::UnboundedSender<AppEvent>,
    rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Woken after every completion so the UI repaints without input
    repaint: Option<egui::Context>,
}

impl Controller {
    /// Controller spawning onto `runtime`
    pub fn new(client: ApiClient, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            runtime,
            tx,
            rx,
            repaint: None,
        }
    }

    /// Request a repaint of `ctx` whenever an event arrives
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Spawn the network task for one command
    pub fn dispatch(&self, command: Command) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();

        self.runtime.spawn(async move {
            let event = run_command(&client, command).await;
            if tx.send(event).is_err() {
                tracing::warn!("Event receiver dropped; discarding completion");
                return;
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    /// Spawn every command in order
    pub fn dispatch_all(&self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    /// Next completion, if one is already waiting
    pub fn try_next_event(&mut self) -> Option<AppEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next completion
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Apply every waiting completion to `state`, dispatching follow-ups
    ///
    /// Returns the number of events applied.
    pub fn pump(&mut self, state: &mut AppState) -> usize {
        let mut applied = 0;
        while let Some(event) = self.try_next_event() {
            let follow_ups = state.apply_event(event);
            self.dispatch_all(follow_ups);
            applied += 1;
        }
        applied
    }
}

async fn run_command(client: &ApiClient, command: Command) -> AppEvent {
    match command {
        Command::FetchProducts { seq, query } => match client.search(&query).await {
            Ok(products) => AppEvent::ProductsLoaded { seq, products },
            Err(error) => AppEvent::ProductsFailed { seq, query, error },
        },
        Command::SendChat { conversation } => match client.chat(&conversation).await {
            Ok(reply) => AppEvent::ChatReplied(reply),
            Err(error) => AppEvent::ChatFailed(error),
        },
    }
}
