//! Statistics tracking as a single-owner actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use message::*;

/// Creates a new statistics actor and its client.
pub fn new(buffer_size: usize) -> (StatsActor, StatsClient) {
    StatsActor::new(buffer_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_actor_tracks_records() {
        let (actor, client) = new(8);
        let handle = tokio::spawn(actor.run());

        client.record(true, 100.0).await.unwrap();
        let after = client.record(false, 300.0).await.unwrap();
        assert_eq!(after.processed_count, 2);
        assert_eq!(after.average_duration_ms, 200.0);

        assert_eq!(client.snapshot().await.unwrap(), after);

        client.reset().await.unwrap();
        assert_eq!(client.snapshot().await.unwrap().processed_count, 0);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_records_keep_invariant() {
        let (actor, client) = new(4);
        let handle = tokio::spawn(actor.run());
        let client = Arc::new(client);

        let mut tasks = Vec::new();
        for i in 0..200u32 {
            let client = client.clone();
            tasks.push(tokio::spawn(async move {
                client.record(i % 4 != 0, f64::from(i)).await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stats = client.snapshot().await.unwrap();
        assert_eq!(stats.processed_count, 200);
        assert_eq!(stats.success_count + stats.failure_count, 200);
        assert_eq!(stats.failure_count, 50);
        // mean of 0..200
        assert!((stats.average_duration_ms - 99.5).abs() < 1e-9);

        drop(client);
        handle.await.unwrap();
    }
}
