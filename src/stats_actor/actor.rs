//! The actor owning the statistics.

use super::message::StatsRequest;
use super::StatsClient;
use crate::model::Statistics;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Single owner of the process-wide [`Statistics`].
///
/// There is no lock around the counters: the actor is the only code that touches them, and it
/// handles its mailbox one message at a time.
pub struct StatsActor {
    receiver: mpsc::Receiver<StatsRequest>,
    stats: Statistics,
}

impl StatsActor {
    pub fn new(buffer_size: usize) -> (Self, StatsClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            stats: Statistics::default(),
        };
        (actor, StatsClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Statistics actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StatsRequest::Record {
                    success,
                    duration_ms,
                    respond_to,
                } => {
                    self.stats.record(success, duration_ms);
                    debug!(
                        success,
                        duration_ms,
                        processed = self.stats.processed_count,
                        average_ms = self.stats.average_duration_ms,
                        "Recorded"
                    );
                    let _ = respond_to.send(Ok(self.stats.clone()));
                }
                StatsRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.stats.clone()));
                }
                StatsRequest::Reset { respond_to } => {
                    info!(processed = self.stats.processed_count, "Statistics reset");
                    self.stats = Statistics::default();
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(
            processed = self.stats.processed_count,
            succeeded = self.stats.success_count,
            failed = self.stats.failure_count,
            "Shutdown"
        );
    }
}
