// Shared test helpers

#![allow(dead_code)]

use sysdash::models::*;

/// A `/api/sysinfo` body with the given counters and two mounts.
pub fn sample_response(rx_bytes: u64, tx_bytes: u64) -> SysinfoResponse {
    SysinfoResponse {
        system: "Linux testhost 6.1.0 x86_64".into(),
        distribution: "Debian GNU/Linux 12 (bookworm)".into(),
        cpu: CpuInfo {
            model: "Test CPU".into(),
            cores: "4".into(),
            usage: CpuUsage {
                usage: 37.5,
                idle: 62.5,
                user: 30.0,
                system: 7.5,
                iowait: 0.0,
            },
        },
        memory: MemoryInfo {
            total: 8192.0,
            used: 2048.0,
            percent: 25.0,
        },
        disk: DiskInfo {
            entries: vec![
                DiskEntry {
                    filesystem: "/dev/sda1".into(),
                    size: "100G".into(),
                    used: "40G".into(),
                    avail: "60G".into(),
                    percent: 40.0,
                    mount: "/".into(),
                },
                DiskEntry {
                    filesystem: "/dev/sdb1".into(),
                    size: "1.0T".into(),
                    used: "900G".into(),
                    avail: "124G".into(),
                    percent: 88.0,
                    mount: "/data".into(),
                },
            ],
        },
        network: "eth0 192.168.1.10/24".into(),
        network_stats: NetworkCounters::from_interfaces(vec![
            InterfaceCounters {
                name: "eth0".into(),
                rx_bytes,
                tx_bytes,
            },
            InterfaceCounters {
                name: "lo".into(),
                rx_bytes: 999,
                tx_bytes: 999,
            },
        ]),
    }
}
