use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the order-level revenue export consumed by the dashboard
pub const ORDERS_FILE: &str = "orders_by_date.csv";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub report: ReportConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Cron expression (seconds first) for the daily email send time
    pub schedule: String,
}

/// SMTP settings for the daily report. Sender, credential, recipients and
/// dashboard URL are checked at send time, not at load time.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EmailConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub sender: Option<String>,
    pub password: Option<String>,
    /// Comma-separated recipient addresses
    pub receivers: Option<String>,
    pub dashboard_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    /// Shared-secret access password; login is refused while unset
    pub password: Option<String>,
    /// Token signing secret; a random one is generated per process when unset
    pub jwt_secret: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[data]
dir = "data"

[report]
schedule = "0 0 8 * * *"

[email]
smtp_host = "smtp.gmail.com"
smtp_port = 587
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Secrets are then taken from the environment, overriding the file.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_config_file()?;
    apply_env_overrides(&mut config);
    Ok(config)
}

fn load_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(value) = std::env::var("DASHBOARD_PASSWORD") {
        config.dashboard.password = Some(value);
    }
    if let Ok(value) = std::env::var("EMAIL_SENDER") {
        config.email.sender = Some(value);
    }
    if let Ok(value) = std::env::var("EMAIL_PASSWORD") {
        config.email.password = Some(value);
    }
    if let Ok(value) = std::env::var("EMAIL_RECEIVER") {
        config.email.receivers = Some(value);
    }
    if let Ok(value) = std::env::var("DASHBOARD_URL") {
        config.email.dashboard_url = Some(value);
    }
}

impl Config {
    /// Data directory, resolved relative to the executable directory when
    /// the configured path is relative
    pub fn data_dir(&self) -> PathBuf {
        let dir = Path::new(&self.data.dir);

        if dir.is_absolute() {
            return dir.to_path_buf();
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                return exe_dir.join(dir);
            }
        }

        PathBuf::from(&self.data.dir)
    }

    /// Path of the order export feeding the revenue summary
    pub fn orders_path(&self) -> PathBuf {
        self.data_dir().join(ORDERS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.dir, "data");
        assert_eq!(config.report.schedule, "0 0 8 * * *");
        assert_eq!(config.email.smtp_host.as_deref(), Some("smtp.gmail.com"));
        assert!(config.dashboard.password.is_none());
    }
}
