// Wire models for GET /api/sysinfo and the canonical dashboard snapshot

mod network;
mod snapshot;
mod storage;
mod system;

pub use network::{InterfaceCounters, NetworkCounters};
pub use snapshot::{DiskUsage, Snapshot, SysinfoResponse};
pub use storage::{DiskEntry, DiskInfo, human_size};
pub use system::{CpuInfo, CpuUsage, MemoryInfo};

use serde::{Deserialize, Deserializer, Serializer};

/// Treats a missing or `null` field as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Writes a whole-number percentage as a JSON integer (`22`, not `22.0`).
pub(crate) fn percent_as_integer<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(value.round().max(0.0) as u64)
}
