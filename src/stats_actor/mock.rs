//! # Mock Statistics Actor
//!
//! Helpers for testing code that talks to the statistics actor without spawning it.
//!
//! [`create_mock_client`] returns a real [`StatsClient`] wired to a receiver the test holds.
//! The `expect_*` helpers pull the next request off that receiver and hand back its fields and
//! responder, so the test decides what the "actor" answers.
//!
//! ```rust
//! use order_orchestrator::model::Statistics;
//! use order_orchestrator::stats_actor::mock::{create_mock_client, expect_record};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(8);
//!     let task = tokio::spawn(async move { client.record(true, 10.0).await });
//!
//!     let (success, _, responder) = expect_record(&mut receiver).await.unwrap();
//!     assert!(success);
//!     responder.send(Ok(Statistics::default())).unwrap();
//!
//!     assert!(task.await.unwrap().is_ok());
//! }
//! ```

use super::message::{Response, StatsRequest};
use super::StatsClient;
use crate::model::Statistics;
use tokio::sync::mpsc;

/// Creates a client whose requests land in the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (StatsClient, mpsc::Receiver<StatsRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StatsClient::new(sender), receiver)
}

/// Waits for the next request and expects it to be a `Record`.
pub async fn expect_record(
    receiver: &mut mpsc::Receiver<StatsRequest>,
) -> Option<(bool, f64, Response<Statistics>)> {
    match receiver.recv().await {
        Some(StatsRequest::Record {
            success,
            duration_ms,
            respond_to,
        }) => Some((success, duration_ms, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and expects it to be a `Snapshot`.
pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<StatsRequest>,
) -> Option<Response<Statistics>> {
    match receiver.recv().await {
        Some(StatsRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and expects it to be a `Reset`.
pub async fn expect_reset(receiver: &mut mpsc::Receiver<StatsRequest>) -> Option<Response<()>> {
    match receiver.recv().await {
        Some(StatsRequest::Reset { respond_to }) => Some(respond_to),
        _ => None,
    }
}
