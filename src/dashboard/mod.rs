//! Client side of the dashboard: polls `/api/sysinfo`, derives network rates and keeps the
//! chart data for the CPU, memory, disk and network views.

pub mod client;
pub mod format;
pub mod poller;
pub mod rate;
pub mod terminal;
pub mod views;
pub mod window;

pub use client::SysinfoClient;
pub use format::format_bytes_rate;
pub use poller::{Dashboard, MetricsPoller, PollState, PollerHandle};
pub use rate::{RatePoint, derive_rate};
pub use views::{BarView, GaugeSlices, GaugeView, RateLineView};
pub use window::{DEFAULT_WINDOW_CAPACITY, RollingWindow, append_bounded};
