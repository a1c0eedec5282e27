// Host metrics via sysinfo, shaped for GET /api/sysinfo

mod linux;

use crate::models::*;
use std::sync::{Arc, Mutex};
use sysinfo::{Disks, Networks, System};
use tracing::instrument;

pub struct SysinfoRepo {
    sys: Arc<Mutex<System>>,
    disks: Arc<Mutex<Disks>>,
    networks: Arc<Mutex<Networks>>,
    last_cpu_times: Arc<Mutex<Option<linux::CpuTimes>>>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();
        Self {
            sys: Arc::new(Mutex::new(sys)),
            disks: Arc::new(Mutex::new(disks)),
            networks: Arc::new(Mutex::new(networks)),
            // Baseline so the first request reports usage since startup.
            last_cpu_times: Arc::new(Mutex::new(linux::read_cpu_times())),
        }
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_cpu_info"))]
    pub async fn get_cpu_info(&self) -> anyhow::Result<CpuInfo> {
        let sys = self.sys.clone();
        let last_cpu_times = self.last_cpu_times.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_cpu_all();

            let usage = match linux::read_cpu_times() {
                Some(curr) => {
                    let mut last = last_cpu_times
                        .lock()
                        .map_err(|e| anyhow::anyhow!("cpu times lock poisoned: {}", e))?;
                    match last.replace(curr) {
                        Some(prev) => linux::cpu_usage_between(&prev, &curr),
                        None => CpuUsage::default(),
                    }
                }
                None => {
                    let usage = (sys.global_cpu_usage() as f64).clamp(0.0, 100.0);
                    CpuUsage {
                        usage: linux::round2(usage),
                        idle: linux::round2(100.0 - usage),
                        ..Default::default()
                    }
                }
            };

            let model = linux::read_cpu_model_linux()
                .or_else(|| {
                    sys.cpus()
                        .first()
                        .map(|c| c.brand().trim().to_string())
                        .filter(|s| !s.is_empty())
                })
                .unwrap_or_else(|| "Unknown".into());

            Ok(CpuInfo {
                model,
                cores: sys.cpus().len().to_string(),
                usage,
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_memory_info"))]
    pub async fn get_memory_info(&self) -> anyhow::Result<MemoryInfo> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_memory();

            let total = sys.total_memory();
            let used = total.saturating_sub(sys.available_memory());
            Ok(MemoryInfo::from_bytes(total, used))
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_disk_info"))]
    pub async fn get_disk_info(&self) -> anyhow::Result<DiskInfo> {
        let disks = self.disks.clone();
        tokio::task::spawn_blocking(move || {
            let mut disks_guard = disks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo disks lock poisoned: {}", e))?;
            disks_guard.refresh(true);
            let entries = disks_guard
                .list()
                .iter()
                .map(|d| {
                    let total = d.total_space();
                    let available = d.available_space();
                    let used = total.saturating_sub(available);
                    let percent = if total > 0 {
                        (used as f64 / total as f64 * 100.0).round()
                    } else {
                        0.0
                    };
                    DiskEntry {
                        filesystem: d.name().to_string_lossy().into_owned(),
                        size: human_size(total),
                        used: human_size(used),
                        avail: human_size(available),
                        percent,
                        mount: d.mount_point().to_string_lossy().into_owned(),
                    }
                })
                .collect();
            Ok(DiskInfo { entries })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    /// Cumulative counters per interface plus loopback-free totals, and the IPv4 address lines.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_network"))]
    pub async fn get_network(&self) -> anyhow::Result<(NetworkCounters, String)> {
        let networks = self.networks.clone();
        tokio::task::spawn_blocking(move || {
            let mut networks_guard = networks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo networks lock poisoned: {}", e))?;
            networks_guard.refresh(true);

            let mut names: Vec<&String> = networks_guard.list().keys().collect();
            names.sort();

            let mut interfaces = Vec::with_capacity(names.len());
            let mut addresses = Vec::new();
            for name in names {
                let Some(data) = networks_guard.list().get(name) else {
                    continue;
                };
                interfaces.push(InterfaceCounters {
                    name: name.clone(),
                    rx_bytes: data.total_received(),
                    tx_bytes: data.total_transmitted(),
                });
                addresses.extend(
                    data.ip_networks()
                        .iter()
                        .filter(|n| n.addr.is_ipv4())
                        .map(|n| format!("{} {}/{}", name, n.addr, n.prefix)),
                );
            }

            Ok((
                NetworkCounters::from_interfaces(interfaces),
                addresses.join("\n"),
            ))
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    /// `System` (kernel line) and `Distribution` strings.
    pub fn system_identity(&self) -> (String, String) {
        let system = [
            System::name(),
            System::host_name(),
            System::kernel_version(),
            Some(std::env::consts::ARCH.to_string()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
        let distribution = linux::read_os_pretty_name()
            .or_else(System::long_os_version)
            .unwrap_or_else(|| "unknown".into());
        (system, distribution)
    }

    /// Samples everything served by `GET /api/sysinfo`.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_sysinfo"))]
    pub async fn get_sysinfo(&self) -> anyhow::Result<SysinfoResponse> {
        let cpu = self.get_cpu_info().await?;
        let memory = self.get_memory_info().await?;
        let disk = self.get_disk_info().await?;
        let (network_stats, network) = self.get_network().await?;
        let (system, distribution) = self.system_identity();
        Ok(SysinfoResponse {
            system,
            distribution,
            cpu,
            memory,
            disk,
            network,
            network_stats,
        })
    }
}
