// Chart data behind the four dashboard panels

use chrono::Local;

use super::rate::RatePoint;
use super::window::RollingWindow;
use crate::models::DiskUsage;

/// Two-slice used/free composition of a percentage gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeSlices {
    pub used: f64,
    pub free: f64,
}

impl GaugeSlices {
    /// Absent input counts as 0% used.
    pub fn from_percent(percent_used: Option<f64>) -> Self {
        let used = percent_used.unwrap_or(0.0);
        Self {
            used,
            free: (100.0 - used).max(0.0),
        }
    }
}

impl Default for GaugeSlices {
    fn default() -> Self {
        Self::from_percent(None)
    }
}

/// Doughnut-style gauge (CPU, memory).
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    title: &'static str,
    used_label: &'static str,
    free_label: &'static str,
    slices: GaugeSlices,
}

impl GaugeView {
    pub fn new(title: &'static str, used_label: &'static str, free_label: &'static str) -> Self {
        Self {
            title,
            used_label,
            free_label,
            slices: GaugeSlices::default(),
        }
    }

    pub fn cpu() -> Self {
        Self::new("CPU", "Used", "Idle")
    }

    pub fn memory() -> Self {
        Self::new("Memory", "Used", "Free")
    }

    pub fn render(&mut self, percent_used: Option<f64>) -> GaugeSlices {
        self.slices = GaugeSlices::from_percent(percent_used);
        self.slices
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn labels(&self) -> (&'static str, &'static str) {
        (self.used_label, self.free_label)
    }

    pub fn slices(&self) -> GaugeSlices {
        self.slices
    }
}

/// One bar per mount point, in the order the producer reported them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarView {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl BarView {
    pub fn render(&mut self, entries: &[DiskUsage]) {
        self.labels = entries.iter().map(|e| e.mount.clone()).collect();
        self.values = entries.iter().map(|e| e.percent).collect();
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Network throughput line chart. Labels and both series always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLineView {
    labels: RollingWindow<String>,
    rx: RollingWindow<f64>,
    tx: RollingWindow<f64>,
}

impl RateLineView {
    pub fn new(capacity: usize) -> Self {
        Self {
            labels: RollingWindow::new(capacity),
            rx: RollingWindow::new(capacity),
            tx: RollingWindow::new(capacity),
        }
    }

    /// Appends the point with a local `HH:MM:SS` label. Returns false (and draws nothing)
    /// when no rate was derived this cycle.
    pub fn render(&mut self, point: Option<&RatePoint>) -> bool {
        let Some(point) = point else {
            return false;
        };
        let label = point
            .timestamp
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string();
        self.labels.push(label);
        self.rx.push(point.rx_rate);
        self.tx.push(point.tx_rate);
        true
    }

    pub fn labels(&self) -> &RollingWindow<String> {
        &self.labels
    }

    pub fn rx(&self) -> &RollingWindow<f64> {
        &self.rx
    }

    pub fn tx(&self) -> &RollingWindow<f64> {
        &self.tx
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Rows of `(label, rx, tx)`, oldest first.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.labels
            .iter()
            .zip(self.rx.iter())
            .zip(self.tx.iter())
            .map(|((label, rx), tx)| (label.as_str(), *rx, *tx))
    }
}
