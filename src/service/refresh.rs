use crate::{
    model::{FetchError, Status},
    provider::RateProvider,
    service::{RateStatus, Ticket},
};
use std::{sync::Arc, time::Duration};
use tokio::{
    select,
    sync::mpsc::{self, Receiver, UnboundedSender},
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

/// User actions coming from any display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Refetch,
    Open,
    Quit,
}

type FetchResult = (Ticket, Result<f64, FetchError>);

/// Drives the rate status: one fetch right away, one per interval, one per manual refetch.
///
/// At most one fetch is in flight; ticks and refetches arriving while loading are skipped.
/// All status changes happen on the task running [`Refresh::run`]. Fetches run in
/// their own tasks and report back over a channel.
pub struct Refresh {
    provider: Arc<dyn RateProvider>,
    rates: RateStatus,
    interval: Duration,
}

impl Refresh {
    pub fn new(provider: Arc<dyn RateProvider>, rates: RateStatus, interval: Duration) -> Refresh {
        Refresh {
            provider,
            rates,
            interval,
        }
    }

    /// Runs until a quit command arrives or every command sender is dropped.
    pub async fn run(mut self, mut commands: Receiver<Command>) -> Status {
        let (results_tx, mut results) = mpsc::unbounded_channel::<FetchResult>();
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            provider = %self.provider.name(),
            secs_between_syncs = self.interval.as_secs(),
            "Scheduling rate sync"
        );

        loop {
            select! {
                _ = ticker.tick() => {
                    if self.rates.status().is_loading() {
                        debug!(provider = %self.provider.name(), "Skipping tick, previous sync still running");
                    } else {
                        self.trigger(&results_tx);
                    }
                }
                command = commands.recv() => match command {
                    Some(Command::Refetch) => self.refetch(&results_tx),
                    Some(Command::Open) => self.rates.open(),
                    Some(Command::Quit) | None => break,
                },
                Some((ticket, result)) = results.recv() => {
                    self.rates.resolve(ticket, result);
                }
            }
        }

        info!("Stopped rate sync");
        self.rates.status()
    }

    /// A single fetch-and-transition, waiting for its result.
    pub async fn once(mut self) -> Status {
        let (results_tx, mut results) = mpsc::unbounded_channel::<FetchResult>();
        self.trigger(&results_tx);

        if let Some((ticket, result)) = results.recv().await {
            self.rates.resolve(ticket, result);
        }

        self.rates.status()
    }

    fn refetch(&mut self, results_tx: &UnboundedSender<FetchResult>) {
        if self.rates.status().is_loading() {
            debug!("Refetch requested while loading, ignoring");
            return;
        }

        self.trigger(results_tx);
    }

    fn trigger(&mut self, results_tx: &UnboundedSender<FetchResult>) {
        let ticket = self.rates.begin();
        debug!(provider = %self.provider.name(), ?ticket, "Syncing...");

        let provider = self.provider.clone();
        let results_tx = results_tx.clone();

        tokio::spawn(async move {
            let result = provider.fetch_rate().await;
            // The receiver only goes away after quit, nothing left to update then
            let _ = results_tx.send((ticket, result));
        });
    }
}
