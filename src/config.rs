use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub clan: ClanConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Upstream player-info API endpoints and fetch tuning.
/// URL fields are templates with `{uid}` and `{region}` placeholders.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub player_info_url: String,
    pub banner_url: String,
    pub outfit_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Pause between consecutive fetch batches, bounding the sustained request rate.
    #[serde(default = "default_batch_pause_ms")]
    pub batch_pause_ms: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_batch_size() -> usize {
    3
}

fn default_batch_pause_ms() -> u64 {
    1000
}

/// The fixed roster: clan identity plus member UIDs.
#[derive(Debug, Clone, Deserialize)]
pub struct ClanConfig {
    pub id: String,
    pub region: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// How often the background worker rebuilds the summary and prints the console report.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_refresh_interval_secs() -> u64 {
    300
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            self.upstream.player_info_url.contains("{uid}"),
            "upstream.player_info_url must contain a {{uid}} placeholder"
        );
        anyhow::ensure!(
            self.upstream.banner_url.contains("{uid}"),
            "upstream.banner_url must contain a {{uid}} placeholder"
        );
        anyhow::ensure!(
            self.upstream.outfit_url.contains("{uid}"),
            "upstream.outfit_url must contain a {{uid}} placeholder"
        );
        anyhow::ensure!(
            self.upstream.request_timeout_secs > 0,
            "upstream.request_timeout_secs must be > 0, got {}",
            self.upstream.request_timeout_secs
        );
        anyhow::ensure!(
            self.upstream.max_retries > 0,
            "upstream.max_retries must be > 0, got {}",
            self.upstream.max_retries
        );
        anyhow::ensure!(
            self.upstream.batch_size > 0,
            "upstream.batch_size must be > 0, got {}",
            self.upstream.batch_size
        );
        anyhow::ensure!(!self.clan.id.is_empty(), "clan.id must be non-empty");
        anyhow::ensure!(!self.clan.region.is_empty(), "clan.region must be non-empty");
        anyhow::ensure!(
            self.monitoring.refresh_interval_secs > 0,
            "monitoring.refresh_interval_secs must be > 0, got {}",
            self.monitoring.refresh_interval_secs
        );
        Ok(())
    }
}
