// Poll loop: fetch on a fixed timer, derive rates, update views.
// One task owns all dashboard state; a cycle finishes before the next tick is awaited,
// so at most one request is ever in flight.

use chrono::{DateTime, Utc};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::Instrument;

use super::client::SysinfoClient;
use super::rate::{RatePoint, derive_rate};
use super::views::{BarView, GaugeView, RateLineView};
use crate::models::{Snapshot, SysinfoResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Fetching,
    Success,
    Failure,
}

/// Everything the dashboard draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub cpu: GaugeView,
    pub memory: GaugeView,
    pub disk: BarView,
    pub network: RateLineView,
    /// Receive time of the last successfully applied snapshot.
    pub last_updated: Option<DateTime<Utc>>,
}

impl Dashboard {
    pub fn new(window_capacity: usize) -> Self {
        Self {
            cpu: GaugeView::cpu(),
            memory: GaugeView::memory(),
            disk: BarView::default(),
            network: RateLineView::new(window_capacity),
            last_updated: None,
        }
    }

    fn apply(&mut self, snapshot: &Snapshot, rate: Option<&RatePoint>) {
        self.cpu.render(Some(snapshot.cpu_usage));
        self.memory.render(Some(snapshot.memory_percent));
        self.disk.render(&snapshot.disk_entries);
        self.network.render(rate);
        self.last_updated = Some(snapshot.timestamp);
    }
}

pub struct MetricsPoller {
    client: SysinfoClient,
    previous: Option<Snapshot>,
    dashboard: Dashboard,
    state: PollState,
    polls_ok: u64,
    polls_failed: u64,
}

impl MetricsPoller {
    pub fn new(client: SysinfoClient, window_capacity: usize) -> Self {
        Self {
            client,
            previous: None,
            dashboard: Dashboard::new(window_capacity),
            state: PollState::Idle,
            polls_ok: 0,
            polls_failed: 0,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// (successful, failed) cycle counts.
    pub fn poll_counts(&self) -> (u64, u64) {
        (self.polls_ok, self.polls_failed)
    }

    /// Run one cycle and return its outcome (`Success` or `Failure`).
    /// Failures are logged here and leave the views untouched.
    pub async fn poll_once(&mut self) -> PollState {
        self.state = PollState::Fetching;
        let outcome = match self.client.fetch().await {
            Ok(response) => {
                let rate = self.ingest(&response, Utc::now());
                tracing::debug!(
                    operation = "poll",
                    rate_derived = rate.is_some(),
                    "snapshot applied"
                );
                self.polls_ok += 1;
                PollState::Success
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    operation = "poll",
                    url = self.client.url(),
                    "metrics fetch failed"
                );
                self.polls_failed += 1;
                PollState::Failure
            }
        };
        self.state = PollState::Idle;
        outcome
    }

    /// Apply a response received at `received_at`: update every view and remember the
    /// counters for the next rate. Returns the derived rate, if any.
    pub fn ingest(
        &mut self,
        response: &SysinfoResponse,
        received_at: DateTime<Utc>,
    ) -> Option<RatePoint> {
        let snapshot = Snapshot::from_response(response, received_at);
        let rate = self
            .previous
            .as_ref()
            .and_then(|prev| derive_rate(prev, &snapshot));
        self.dashboard.apply(&snapshot, rate.as_ref());
        self.previous = Some(snapshot);
        rate
    }

    /// Poll immediately, then every `period`, until the handle is stopped or dropped.
    /// Each successful cycle publishes a copy of the dashboard on the handle's watch channel.
    pub fn spawn(mut self, period: Duration) -> PollerHandle {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let (frames_tx, frames_rx) = watch::channel(self.dashboard.clone());

        let poller_span = tracing::span!(
            tracing::Level::DEBUG,
            "poller",
            period_ms = period.as_millis() as u64
        );

        let task = tokio::spawn(
            async move {
                let mut tick = interval(period);
                tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

                loop {
                    tokio::select! {
                        _ = tick.tick() => {
                            if self.poll_once().await == PollState::Success {
                                frames_tx.send_replace(self.dashboard.clone());
                            }
                        }
                        _ = &mut shutdown_rx => {
                            tracing::debug!("Poller shutting down");
                            break;
                        }
                    }
                }
                self
            }
            .instrument(poller_span),
        );

        PollerHandle {
            shutdown_tx: Some(shutdown_tx),
            frames: frames_rx,
            task,
        }
    }
}

/// Stop hook and frame feed for a spawned poller.
pub struct PollerHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
    frames: watch::Receiver<Dashboard>,
    task: JoinHandle<MetricsPoller>,
}

impl PollerHandle {
    /// Latest published dashboard; `changed()` resolves after each successful poll.
    pub fn frames(&self) -> watch::Receiver<Dashboard> {
        self.frames.clone()
    }

    /// Stop the timer and wait for the in-flight cycle (if any) to finish.
    /// Returns the poller with its final state.
    pub async fn stop(mut self) -> anyhow::Result<MetricsPoller> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        self.task
            .await
            .map_err(|e| anyhow::anyhow!("poller task join: {}", e))
    }
}
