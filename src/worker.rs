// ABOUTME: Single-flight background fetch worker and its caller-facing handle
// ABOUTME: Owns the fetch status machine and publishes module state without tearing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Fetch worker
//!
//! One long-lived background task per [`WorkerHandle`]. The interactive
//! actor submits raw credential text; the worker parses it, performs the
//! network call through a [`ContributionProvider`], normalizes the result,
//! and publishes `(status, state, last_error)` as a single unit behind one
//! lock so no reader ever observes a half-updated snapshot.
//!
//! At most one fetch is in flight at a time. The handle transitions the
//! status to `InProgress` under the lock before handing the request to the
//! worker, so a second submit during a fetch is rejected without a race
//! window, not queued.

use crate::credential::Credential;
use crate::errors::FetchError;
use crate::models::{FetchStatus, ModuleState};
use crate::normalizer::normalize;
use crate::providers::ContributionProvider;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Snapshot shared between the worker and the interactive actor.
/// All three fields update together under the write lock.
#[derive(Debug, Default)]
struct WorkerState {
    status: FetchStatus,
    state: ModuleState,
    last_error: Option<FetchError>,
}

fn read_shared(shared: &RwLock<WorkerState>) -> RwLockReadGuard<'_, WorkerState> {
    shared.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_shared(shared: &RwLock<WorkerState>) -> RwLockWriteGuard<'_, WorkerState> {
    shared.write().unwrap_or_else(PoisonError::into_inner)
}

/// Caller-facing handle to a spawned fetch worker.
///
/// Reads never block on network activity; the only lock held is the brief
/// snapshot lock. Dropping the handle without calling [`shutdown`] closes
/// the request channel, which also stops the worker, but only `shutdown`
/// waits for the task to actually exit.
///
/// [`shutdown`]: WorkerHandle::shutdown
pub struct WorkerHandle {
    shared: Arc<RwLock<WorkerState>>,
    request_tx: mpsc::Sender<String>,
    shutdown_tx: mpsc::Sender<()>,
    join: JoinHandle<()>,
}

impl WorkerHandle {
    /// Spawn the background worker onto the current tokio runtime.
    #[must_use]
    pub fn spawn(provider: Arc<dyn ContributionProvider>) -> Self {
        let shared = Arc::new(RwLock::new(WorkerState::default()));
        let (request_tx, request_rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let worker = FetchWorker {
            provider,
            shared: Arc::clone(&shared),
            request_rx,
            shutdown_rx,
        };
        let join = tokio::spawn(worker.run());

        Self {
            shared,
            request_tx,
            shutdown_tx,
            join,
        }
    }

    /// Submit raw credential text for a fetch.
    ///
    /// Returns `false` when the request was ignored because a fetch is
    /// already in flight; nothing is queued or merged in that case.
    pub fn submit_credential(&self, text: &str) -> bool {
        let mut inner = write_shared(&self.shared);
        if inner.status == FetchStatus::InProgress {
            debug!("fetch already in progress, ignoring request");
            return false;
        }

        // The worker consumed any previous request before leaving
        // InProgress, so the capacity-1 channel is empty here.
        match self.request_tx.try_send(text.to_owned()) {
            Ok(()) => {
                inner.status = FetchStatus::InProgress;
                true
            }
            Err(err) => {
                warn!("fetch worker unavailable: {err}");
                false
            }
        }
    }

    /// Current status of the fetch state machine
    #[must_use]
    pub fn current_status(&self) -> FetchStatus {
        read_shared(&self.shared).status
    }

    /// Snapshot of the most recently published module state
    #[must_use]
    pub fn current_state(&self) -> ModuleState {
        read_shared(&self.shared).state.clone()
    }

    /// Cause of the most recent failed fetch, if any
    #[must_use]
    pub fn last_error(&self) -> Option<FetchError> {
        read_shared(&self.shared).last_error.clone()
    }

    /// Replace the published state with one restored from persistence.
    /// The status machine is not touched; no fetch is triggered.
    pub fn restore_state(&self, state: ModuleState) {
        debug!(days = state.contributions.len(), "restoring persisted state");
        write_shared(&self.shared).state = state;
    }

    /// Signal the worker to stop and wait for it to exit.
    ///
    /// Shared state stays valid until the task is gone, so no fetch can
    /// be left touching freed state.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
        drop(self.request_tx);
        if let Err(err) = self.join.await {
            warn!("fetch worker task did not exit cleanly: {err}");
        }
    }
}

/// The background task: blocks on the request channel instead of polling,
/// and exits on shutdown or when all handles are gone.
struct FetchWorker {
    provider: Arc<dyn ContributionProvider>,
    shared: Arc<RwLock<WorkerState>>,
    request_rx: mpsc::Receiver<String>,
    shutdown_rx: mpsc::Receiver<()>,
}

impl FetchWorker {
    async fn run(mut self) {
        loop {
            tokio::select! {
                request = self.request_rx.recv() => match request {
                    Some(raw) => self.handle_request(raw).await,
                    None => break,
                },
                _ = self.shutdown_rx.recv() => {
                    debug!("fetch worker received shutdown signal");
                    break;
                }
            }
        }
        debug!("fetch worker exited");
    }

    /// Run one fetch to a terminal status. The credential lives only for
    /// the duration of this call and is never stored.
    async fn handle_request(&self, raw: String) {
        let credential = Credential::parse(&raw);

        if credential.is_empty_token() {
            debug!("no token supplied, skipping fetch");
            write_shared(&self.shared).status = FetchStatus::Idle;
            return;
        }

        info!(credential = %credential.masked(), "fetching contributions");
        match self.provider.fetch_contributions(&credential).await {
            Ok(data) => {
                let contributions = normalize(&data.calendar);
                let mut inner = write_shared(&self.shared);
                inner.state = ModuleState {
                    start_date: data.started_at,
                    contributions,
                };
                inner.status = FetchStatus::Success;
                inner.last_error = None;
            }
            Err(err) => {
                warn!(error = %err, "contribution fetch failed");
                let mut inner = write_shared(&self.shared);
                inner.status = FetchStatus::Error;
                inner.last_error = Some(err);
            }
        }
    }
}
