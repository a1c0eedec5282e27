// Throughput from two consecutive cumulative counter readings

use chrono::{DateTime, Utc};

use crate::models::Snapshot;

/// Receive/transmit throughput in bytes per second, stamped with the later reading's time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatePoint {
    pub timestamp: DateTime<Utc>,
    pub rx_rate: f64,
    pub tx_rate: f64,
}

/// Derive rx/tx rates between two snapshots.
///
/// Returns `None` when the elapsed time is not strictly positive (clock skew, duplicate
/// timestamp). A counter that went backwards (e.g. the producer restarted) yields a rate of 0.
pub fn derive_rate(prev: &Snapshot, curr: &Snapshot) -> Option<RatePoint> {
    let elapsed_secs = (curr.timestamp - prev.timestamp).num_microseconds()? as f64 / 1_000_000.0;
    if elapsed_secs <= 0.0 {
        return None;
    }
    let rate = |before: u64, after: u64| ((after as f64 - before as f64) / elapsed_secs).max(0.0);
    Some(RatePoint {
        timestamp: curr.timestamp,
        rx_rate: rate(prev.rx_bytes, curr.rx_bytes),
        tx_rate: rate(prev.tx_bytes, curr.tx_bytes),
    })
}
