// Human-readable byte rates

const RATE_UNITS: [&str; 4] = ["B/s", "KiB/s", "MiB/s", "GiB/s"];

/// Format a rate in bytes/second using base-1024 units, one decimal place.
///
/// Picks the largest unit in which the value is at least 1, up to GiB/s.
/// Exactly zero is rendered as `0 B/s`.
pub fn format_bytes_rate(bytes_per_sec: f64) -> String {
    if bytes_per_sec == 0.0 {
        return "0 B/s".to_string();
    }
    let mut value = bytes_per_sec;
    let mut unit = 0;
    while value.abs() >= 1024.0 && unit < RATE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, RATE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_special_cased() {
        assert_eq!(format_bytes_rate(0.0), "0 B/s");
    }

    #[test]
    fn picks_largest_unit() {
        assert_eq!(format_bytes_rate(512.0), "512.0 B/s");
        assert_eq!(format_bytes_rate(1024.0), "1.0 KiB/s");
        assert_eq!(format_bytes_rate(1536.0), "1.5 KiB/s");
        assert_eq!(format_bytes_rate(1_048_576.0), "1.0 MiB/s");
        assert_eq!(format_bytes_rate(3.0 * 1024.0 * 1024.0 * 1024.0), "3.0 GiB/s");
    }

    #[test]
    fn caps_at_gib() {
        assert_eq!(
            format_bytes_rate(2048.0 * 1024.0 * 1024.0 * 1024.0),
            "2048.0 GiB/s"
        );
    }

    #[test]
    fn fractions_stay_in_bytes() {
        assert_eq!(format_bytes_rate(0.5), "0.5 B/s");
    }
}
