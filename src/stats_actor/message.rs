//! Messages understood by the statistics actor.

use super::error::StatsError;
use crate::model::Statistics;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StatsError>>;

/// Requests sent from a [`StatsClient`](super::StatsClient) to the [`StatsActor`](super::StatsActor).
///
/// The actor owns the [`Statistics`] and handles one request at a time, so each `Record` is
/// applied as a single uninterrupted update.
#[derive(Debug)]
pub enum StatsRequest {
    /// Fold one processed order into the totals. Answers with the updated snapshot.
    Record {
        success: bool,
        duration_ms: f64,
        respond_to: Response<Statistics>,
    },
    /// Read the current totals.
    Snapshot { respond_to: Response<Statistics> },
    /// Start over from empty totals.
    Reset { respond_to: Response<()> },
}
