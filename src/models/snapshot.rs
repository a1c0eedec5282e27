// Full /api/sysinfo response and the canonical snapshot the dashboard renders

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CpuInfo, DiskInfo, MemoryInfo, NetworkCounters, null_as_default};

/// Body of `GET /api/sysinfo`. Key names match what existing dashboards consume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SysinfoResponse {
    #[serde(rename = "System", deserialize_with = "null_as_default")]
    pub system: String,
    #[serde(rename = "Distribution", deserialize_with = "null_as_default")]
    pub distribution: String,
    #[serde(rename = "CPU", deserialize_with = "null_as_default")]
    pub cpu: CpuInfo,
    #[serde(rename = "Memory", deserialize_with = "null_as_default")]
    pub memory: MemoryInfo,
    #[serde(rename = "Disk", deserialize_with = "null_as_default")]
    pub disk: DiskInfo,
    /// One `iface addr/prefix` line per IPv4 address.
    #[serde(rename = "Network", deserialize_with = "null_as_default")]
    pub network: String,
    #[serde(rename = "NetworkStats", deserialize_with = "null_as_default")]
    pub network_stats: NetworkCounters,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskUsage {
    pub mount: String,
    pub percent: f64,
}

/// One polled reading, reduced to the fields the dashboard views draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// When the reading was received.
    pub timestamp: DateTime<Utc>,
    pub cpu_usage: f64,
    pub memory_percent: f64,
    pub disk_entries: Vec<DiskUsage>,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

impl Snapshot {
    pub fn from_response(response: &SysinfoResponse, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            cpu_usage: response.cpu.usage.usage,
            memory_percent: response.memory.percent,
            disk_entries: response
                .disk
                .entries
                .iter()
                .map(|e| DiskUsage {
                    mount: e.mount.clone(),
                    percent: e.percent,
                })
                .collect(),
            rx_bytes: response.network_stats.rx_bytes,
            tx_bytes: response.network_stats.tx_bytes,
        }
    }
}
