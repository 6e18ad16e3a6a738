use serde::{Deserialize, Serialize};

/// Running totals across every processed order.
///
/// The average is maintained incrementally: each [`record`](Statistics::record) folds the new
/// duration into the previous mean instead of keeping the full history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub processed_count: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub average_duration_ms: f64,
}

impl Statistics {
    /// Folds one processed order into the totals.
    pub fn record(&mut self, success: bool, duration_ms: f64) {
        self.processed_count += 1;
        if success {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
        }

        let n = self.processed_count as f64;
        self.average_duration_ms = (self.average_duration_ms * (n - 1.0) + duration_ms) / n;
    }

    /// Average duration rounded to whole milliseconds, as shown in reports.
    pub fn rounded_average_ms(&self) -> u64 {
        self.average_duration_ms.round() as u64
    }

    /// Share of processed orders that succeeded, `0.0` before anything was processed.
    pub fn success_rate(&self) -> f64 {
        if self.processed_count == 0 {
            0.0
        } else {
            self.success_count as f64 / self.processed_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_stay_consistent() {
        let mut stats = Statistics::default();
        for i in 0..25 {
            stats.record(i % 3 != 0, 10.0);
        }

        assert_eq!(stats.processed_count, 25);
        assert_eq!(stats.success_count + stats.failure_count, stats.processed_count);
        assert_eq!(stats.failure_count, 9);
    }

    #[test]
    fn test_running_average_matches_mean() {
        let durations = [120.0, 15.5, 980.25, 0.0, 333.3, 42.0];
        let mut stats = Statistics::default();
        for d in durations {
            stats.record(true, d);
        }

        let mean = durations.iter().sum::<f64>() / durations.len() as f64;
        assert!((stats.average_duration_ms - mean).abs() < 1e-9);
    }

    #[test]
    fn test_first_record_sets_average() {
        let mut stats = Statistics::default();
        stats.record(false, 250.0);

        assert_eq!(stats.average_duration_ms, 250.0);
        assert_eq!(stats.failure_count, 1);
    }

    #[test]
    fn test_rounded_average_and_rate() {
        let mut stats = Statistics::default();
        assert_eq!(stats.success_rate(), 0.0);

        stats.record(true, 100.4);
        stats.record(false, 200.8);

        assert_eq!(stats.rounded_average_ms(), 151);
        assert_eq!(stats.success_rate(), 0.5);
    }
}
