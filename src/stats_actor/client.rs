//! Type-safe handle to the statistics actor.

use super::error::StatsError;
use super::message::StatsRequest;
use crate::model::Statistics;
use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

/// Cheap-to-clone client for a [`StatsActor`](super::StatsActor).
#[derive(Clone)]
pub struct StatsClient {
    sender: mpsc::Sender<StatsRequest>,
}

impl StatsClient {
    pub fn new(sender: mpsc::Sender<StatsRequest>) -> Self {
        Self { sender }
    }

    /// Records one processed order and returns the totals including it.
    #[instrument(skip(self))]
    pub async fn record(&self, success: bool, duration_ms: f64) -> Result<Statistics, StatsError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StatsRequest::Record {
                success,
                duration_ms,
                respond_to,
            })
            .await
            .map_err(|_| StatsError::ActorClosed)?;
        response.await.map_err(|_| StatsError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<Statistics, StatsError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StatsRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StatsError::ActorClosed)?;
        response.await.map_err(|_| StatsError::ActorDropped)?
    }

    pub async fn reset(&self) -> Result<(), StatsError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StatsRequest::Reset { respond_to })
            .await
            .map_err(|_| StatsError::ActorClosed)?;
        response.await.map_err(|_| StatsError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::{create_mock_client, expect_record, expect_snapshot};
    use super::*;

    #[tokio::test]
    async fn test_record_sends_outcome_and_duration() {
        let (client, mut receiver) = create_mock_client(4);

        let task = tokio::spawn(async move { client.record(false, 42.5).await });

        let (success, duration_ms, responder) = expect_record(&mut receiver)
            .await
            .expect("Expected Record request");
        assert!(!success);
        assert_eq!(duration_ms, 42.5);

        let mut stats = Statistics::default();
        stats.record(success, duration_ms);
        responder.send(Ok(stats.clone())).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), stats);
    }

    #[tokio::test]
    async fn test_dropped_responder_is_reported() {
        let (client, mut receiver) = create_mock_client(4);

        let task = tokio::spawn(async move { client.snapshot().await });

        let responder = expect_snapshot(&mut receiver)
            .await
            .expect("Expected Snapshot request");
        drop(responder);

        assert_eq!(task.await.unwrap(), Err(StatsError::ActorDropped));
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (client, receiver) = create_mock_client(4);
        drop(receiver);

        assert_eq!(client.reset().await, Err(StatsError::ActorClosed));
    }
}
