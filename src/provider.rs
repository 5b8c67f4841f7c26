use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::Result;

use crate::football_data::LeagueSource;
use crate::state::{Delta, ProviderCommand};

#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Owner side of the provider thread. Dropping it cancels outstanding work:
/// results that arrive afterwards are discarded rather than delivered, and
/// the thread exits once its in-flight request returns.
pub struct ProviderHandle {
    cmd_tx: Option<Sender<ProviderCommand>>,
    cancel: CancelToken,
}

impl ProviderHandle {
    pub fn request(&self, cmd: ProviderCommand) -> bool {
        self.cmd_tx
            .as_ref()
            .is_some_and(|tx| tx.send(cmd).is_ok())
    }
}

impl Drop for ProviderHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.cmd_tx.take();
    }
}

pub fn spawn_provider<S>(source: S, tx: Sender<Delta>) -> ProviderHandle
where
    S: LeagueSource + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();
    thread::spawn(move || run_provider(&source, &tx, &cmd_rx, &worker_cancel));
    ProviderHandle {
        cmd_tx: Some(cmd_tx),
        cancel,
    }
}

fn run_provider<S: LeagueSource>(
    source: &S,
    tx: &Sender<Delta>,
    cmd_rx: &Receiver<ProviderCommand>,
    cancel: &CancelToken,
) {
    fetch_all(source, tx, cancel);
    while let Ok(cmd) = cmd_rx.recv() {
        if cancel.is_cancelled() {
            break;
        }
        match cmd {
            ProviderCommand::Refresh => {
                fetch_all(source, tx, cancel);
            }
        }
    }
    tracing::debug!("provider thread exiting");
}

/// Runs the four league calls in order. A failing call is logged and the
/// next one still runs, so the page can end up partially populated.
/// Returns false if the run was cut short by cancellation.
pub fn fetch_all<S: LeagueSource + ?Sized>(
    source: &S,
    tx: &Sender<Delta>,
    cancel: &CancelToken,
) -> bool {
    if !deliver(tx, cancel, Delta::FetchStarted) {
        return false;
    }
    let completed = publish(tx, cancel, "equipos", || source.teams(), Delta::SetTeams)
        && publish(tx, cancel, "clasificación", || source.standings(), Delta::SetStandings)
        && publish(tx, cancel, "goleadores", || source.scorers(), Delta::SetScorers)
        && publish(
            tx,
            cancel,
            "partidos",
            || source.scheduled_matches(),
            Delta::SetMatches,
        );
    if !completed {
        tracing::debug!("fetch cut short");
        return false;
    }
    deliver(tx, cancel, Delta::FetchFinished)
}

fn publish<T>(
    tx: &Sender<Delta>,
    cancel: &CancelToken,
    what: &str,
    fetch: impl FnOnce() -> Result<Vec<T>>,
    wrap: fn(Vec<T>) -> Delta,
) -> bool {
    if cancel.is_cancelled() {
        return false;
    }
    match fetch() {
        Ok(items) => {
            tracing::info!(what, count = items.len(), "fetched");
            deliver(tx, cancel, wrap(items))
        }
        Err(err) => {
            let error = format!("{err:#}");
            tracing::warn!(what, %error, "fetch failed");
            deliver(
                tx,
                cancel,
                Delta::FetchFailed {
                    what: what.to_string(),
                    error,
                },
            )
        }
    }
}

/// Sends unless cancelled. A closed receiver also counts as torn down.
fn deliver(tx: &Sender<Delta>, cancel: &CancelToken, delta: Delta) -> bool {
    if cancel.is_cancelled() {
        return false;
    }
    tx.send(delta).is_ok()
}
