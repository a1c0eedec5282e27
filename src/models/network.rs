// Network counter models

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceCounters {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rx_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub tx_bytes: u64,
}

/// Cumulative byte counters. Totals exclude the loopback interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkCounters {
    #[serde(deserialize_with = "null_as_default")]
    pub rx_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub tx_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub interfaces: Vec<InterfaceCounters>,
}

impl NetworkCounters {
    pub const LOOPBACK: &'static str = "lo";

    /// Sums the per-interface counters into totals, skipping loopback.
    pub fn from_interfaces(interfaces: Vec<InterfaceCounters>) -> Self {
        let (rx_bytes, tx_bytes) = interfaces
            .iter()
            .filter(|i| i.name != Self::LOOPBACK)
            .fold((0u64, 0u64), |(rx, tx), i| {
                (rx.saturating_add(i.rx_bytes), tx.saturating_add(i.tx_bytes))
            });
        Self {
            rx_bytes,
            tx_bytes,
            interfaces,
        }
    }
}
