// Disk / mount models

use serde::{Deserialize, Serialize};

use super::{null_as_default, percent_as_integer};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub filesystem: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub used: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avail: String,
    #[serde(
        deserialize_with = "null_as_default",
        serialize_with = "percent_as_integer"
    )]
    pub percent: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub mount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub entries: Vec<DiskEntry>,
}

/// Formats a byte count the way `df -h` does: one decimal below 10, none above (e.g. `9.9G`, `120G`).
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "K", "M", "G", "T", "P"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{}{}", bytes, UNITS[0])
    } else if value < 10.0 {
        format!("{:.1}{}", value, UNITS[unit])
    } else {
        format!("{:.0}{}", value, UNITS[unit])
    }
}
