// Linux-specific helpers: /proc/stat CPU times, /proc/cpuinfo, /etc/os-release.

use crate::models::CpuUsage;

/// Cumulative jiffies from the aggregate `cpu ` line of /proc/stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
}

/// Parse the aggregate `cpu ` line. Guest time is already folded into user/nice, so it is ignored.
pub(crate) fn parse_proc_stat(content: &str) -> Option<CpuTimes> {
    let line = content.lines().find(|l| l.starts_with("cpu "))?;
    let values: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|v| v.parse().ok())
        .collect::<Option<_>>()?;
    if values.len() < 8 {
        return None;
    }
    Some(CpuTimes {
        user: values[0],
        nice: values[1],
        system: values[2],
        idle: values[3],
        iowait: values[4],
        irq: values[5],
        softirq: values[6],
        steal: values[7],
    })
}

pub(crate) fn read_cpu_times() -> Option<CpuTimes> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/stat").ok()?;
        parse_proc_stat(&content)
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// CPU breakdown between two samples. All zeros when no time elapsed (or counters went backwards).
pub(crate) fn cpu_usage_between(prev: &CpuTimes, curr: &CpuTimes) -> CpuUsage {
    let d = |a: u64, b: u64| b.saturating_sub(a) as f64;
    let user = d(prev.user, curr.user);
    let nice = d(prev.nice, curr.nice);
    let system = d(prev.system, curr.system);
    let idle = d(prev.idle, curr.idle);
    let iowait = d(prev.iowait, curr.iowait);
    let irq = d(prev.irq, curr.irq);
    let softirq = d(prev.softirq, curr.softirq);
    let steal = d(prev.steal, curr.steal);

    let idle_all = idle + iowait;
    let non_idle = user + nice + system + irq + softirq + steal;
    let total = idle_all + non_idle;
    if total <= 0.0 {
        return CpuUsage::default();
    }
    let pct = |v: f64| round2(v / total * 100.0);
    CpuUsage {
        usage: pct(non_idle),
        idle: pct(idle_all),
        user: pct(user),
        system: pct(system),
        iowait: pct(iowait),
    }
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Read first "model name" from /proc/cpuinfo (Linux).
pub(super) fn read_cpu_model_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        content
            .lines()
            .find(|l| l.starts_with("model name"))
            .and_then(|l| l.split_once(':'))
            .map(|(_, v)| v.trim().to_string())
            .filter(|s| !s.is_empty())
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// PRETTY_NAME (or NAME) from /etc/os-release.
pub(super) fn read_os_pretty_name() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/etc/os-release").ok()?;
        parse_os_release(&content)
    }
    #[cfg(not(target_os = "linux"))]
    None
}

pub(crate) fn parse_os_release(content: &str) -> Option<String> {
    let value_of = |key: &str| {
        content
            .lines()
            .find_map(|l| l.strip_prefix(key))
            .map(|v| v.trim().trim_matches('"').to_string())
            .filter(|v| !v.is_empty())
    };
    value_of("PRETTY_NAME=").or_else(|| value_of("NAME="))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROC_STAT: &str = "\
cpu  100 0 50 800 50 0 0 0 0 0
cpu0 50 0 25 400 25 0 0 0 0 0
intr 12345
";

    #[test]
    fn parse_proc_stat_reads_aggregate_line() {
        let t = parse_proc_stat(PROC_STAT).unwrap();
        assert_eq!(t.user, 100);
        assert_eq!(t.system, 50);
        assert_eq!(t.idle, 800);
        assert_eq!(t.iowait, 50);
    }

    #[test]
    fn parse_proc_stat_rejects_missing_or_short_line() {
        assert!(parse_proc_stat("cpu0 1 2 3\n").is_none());
        assert!(parse_proc_stat("cpu  1 2 3\n").is_none());
    }

    #[test]
    fn cpu_usage_between_splits_time() {
        let prev = CpuTimes::default();
        let curr = CpuTimes {
            user: 30,
            system: 10,
            idle: 50,
            iowait: 10,
            ..Default::default()
        };
        let u = cpu_usage_between(&prev, &curr);
        assert_eq!(u.usage, 40.0);
        assert_eq!(u.idle, 60.0);
        assert_eq!(u.user, 30.0);
        assert_eq!(u.system, 10.0);
        assert_eq!(u.iowait, 10.0);
    }

    #[test]
    fn cpu_usage_between_identical_samples_is_zero() {
        let t = parse_proc_stat(PROC_STAT).unwrap();
        assert_eq!(cpu_usage_between(&t, &t), CpuUsage::default());
    }

    #[test]
    fn cpu_usage_rounds_to_two_decimals() {
        let prev = CpuTimes::default();
        let curr = CpuTimes {
            user: 1,
            idle: 2,
            ..Default::default()
        };
        assert_eq!(cpu_usage_between(&prev, &curr).usage, 33.33);
    }

    #[test]
    fn parse_os_release_prefers_pretty_name() {
        let content = "NAME=\"Debian GNU/Linux\"\nPRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\n";
        assert_eq!(
            parse_os_release(content).as_deref(),
            Some("Debian GNU/Linux 12 (bookworm)")
        );
        assert_eq!(parse_os_release("NAME=Alpine\n").as_deref(), Some("Alpine"));
        assert_eq!(parse_os_release("ID=x\n"), None);
    }
}
