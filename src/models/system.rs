// CPU and memory models

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// CPU time split over one sampling period, in percent with two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuUsage {
    #[serde(deserialize_with = "null_as_default")]
    pub usage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub idle: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub user: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub system: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub iowait: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    /// Logical core count, as a string (the shape `nproc --all` produces).
    #[serde(deserialize_with = "null_as_default")]
    pub cores: String,
    #[serde(deserialize_with = "null_as_default")]
    pub usage: CpuUsage,
}

/// Memory totals in MiB.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub used: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub percent: f64,
}

impl MemoryInfo {
    /// Builds memory info from byte counts; percent is rounded to a whole number.
    pub fn from_bytes(total_bytes: u64, used_bytes: u64) -> Self {
        const MIB: f64 = 1024.0 * 1024.0;
        let total = total_bytes as f64 / MIB;
        let used = used_bytes as f64 / MIB;
        let percent = if total > 0.0 {
            (used / total * 100.0).round()
        } else {
            0.0
        };
        Self {
            total,
            used,
            percent,
        }
    }
}
