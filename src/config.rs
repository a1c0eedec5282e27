use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8015,
            host: "0.0.0.0".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Full URL of the metrics endpoint the dashboard polls.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Number of points kept in the network rate chart.
    #[serde(default = "default_window_capacity")]
    pub window_capacity: usize,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8015/api/sysinfo".into()
}

fn default_poll_interval_ms() -> u64 {
    8000
}

fn default_window_capacity() -> usize {
    20
}

fn default_request_timeout_ms() -> u64 {
    5000
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_ms: default_poll_interval_ms(),
            window_capacity: default_window_capacity(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Like [`AppConfig::load`], but a missing file yields the built-in defaults.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path, "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces `dashboard.endpoint` (command-line override) and re-validates.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> anyhow::Result<Self> {
        self.dashboard.endpoint = endpoint.into();
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.dashboard.endpoint.starts_with("http://")
                || self.dashboard.endpoint.starts_with("https://"),
            "dashboard.endpoint must be an http(s) URL, got {:?}",
            self.dashboard.endpoint
        );
        anyhow::ensure!(
            self.dashboard.poll_interval_ms > 0,
            "dashboard.poll_interval_ms must be > 0, got {}",
            self.dashboard.poll_interval_ms
        );
        anyhow::ensure!(
            self.dashboard.window_capacity > 0,
            "dashboard.window_capacity must be > 0, got {}",
            self.dashboard.window_capacity
        );
        anyhow::ensure!(
            self.dashboard.request_timeout_ms > 0,
            "dashboard.request_timeout_ms must be > 0, got {}",
            self.dashboard.request_timeout_ms
        );
        Ok(())
    }
}
