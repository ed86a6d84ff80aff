#[cfg(test)]
#[path = "action_test.rs"]
mod tests;

use std::sync::Arc;

use crate::models::{Action, Event};
use crate::seed::ArcSeedSource;
use eyre::Result;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

/// Runs asynchronous actions off the UI loop and reports back with events.
pub struct ActionService {
    event_tx: mpsc::UnboundedSender<Event>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    cancel_token: CancellationToken,
    seed: ArcSeedSource,
}

impl ActionService {
    pub fn new(
        event_tx: mpsc::UnboundedSender<Event>,
        action_rx: mpsc::UnboundedReceiver<Action>,
        seed: ArcSeedSource,
        cancel_token: CancellationToken,
    ) -> ActionService {
        ActionService {
            event_tx,
            action_rx,
            cancel_token,
            seed,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut worker: Option<JoinHandle<()>> = None;

        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    log::debug!("Action service cancelled");
                    break;
                }

                action = self.action_rx.recv() => {
                    let Some(action) = action else {
                        log::debug!("Action channel closed");
                        break;
                    };

                    match action {
                        Action::FetchSeed => {
                            if let Some(previous) = worker.take() {
                                previous.abort();
                            }
                            worker = Some(tokio::spawn(fetch_seed(
                                Arc::clone(&self.seed),
                                self.event_tx.clone(),
                                self.cancel_token.clone(),
                            )));
                        }
                    }
                }
            }
        }

        if let Some(worker) = worker {
            worker.abort();
        }
        Ok(())
    }
}

async fn fetch_seed(
    seed: ArcSeedSource,
    event_tx: mpsc::UnboundedSender<Event>,
    cancel_token: CancellationToken,
) {
    log::info!("Fetching seed tasks from {}", seed.name());
    let result = tokio::select! {
        _ = cancel_token.cancelled() => {
            log::debug!("Seed fetch cancelled");
            return;
        }
        result = seed.fetch() => result,
    };

    let event = match result {
        Ok(tasks) => {
            log::info!("Fetched {} seed tasks", tasks.len());
            Event::SeedLoaded(tasks)
        }
        Err(err) => {
            log::error!("Failed to fetch seed tasks: {}", err);
            Event::SeedFailed(err.to_string())
        }
    };

    // The UI may already be gone; nothing left to report to.
    let _ = event_tx.send(event);
}
