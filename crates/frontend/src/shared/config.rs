use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means same origin as the page
    #[serde(default)]
    pub base_url: String,
    /// Interval for re-checking a pending payment
    #[serde(default = "default_payment_poll_secs")]
    pub payment_poll_secs: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub page_size: i64,
    pub featured_count: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                payment_poll_secs: default_payment_poll_secs(),
            },
            catalog: CatalogConfig {
                page_size: 6,
                featured_count: 3,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Longest accepted payment poll interval
const MAX_PAYMENT_POLL_SECS: u32 = 3600;

impl ApiConfig {
    pub fn poll_interval_ms(&self) -> u32 {
        self.payment_poll_secs
            .clamp(1, MAX_PAYMENT_POLL_SECS)
            .saturating_mul(1000)
    }
}

fn default_payment_poll_secs() -> u32 {
    10
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
payment_poll_secs = 10

[catalog]
page_size = 6
featured_count = 3

[logging]
level = "debug"
"#;

/// localStorage key holding a TOML override (handy on staging builds)
const CONFIG_STORAGE_KEY: &str = "saleema.config";

static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Invalid stored configuration, using defaults: {}", e);
        Config::default()
    }
});

pub fn config() -> &'static Config {
    &CONFIG
}

/// Load configuration
///
/// Search order:
/// 1. TOML stored in localStorage under `saleema.config`
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(raw) = stored_override() {
        return parse_config(&raw);
    }
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(raw: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(raw)?;
    if config.catalog.page_size <= 0 {
        anyhow::bail!(
            "catalog.page_size must be positive, got {}",
            config.catalog.page_size
        );
    }
    if !(1..=MAX_PAYMENT_POLL_SECS).contains(&config.api.payment_poll_secs) {
        anyhow::bail!(
            "api.payment_poll_secs must be between 1 and {}, got {}",
            MAX_PAYMENT_POLL_SECS,
            config.api.payment_poll_secs
        );
    }
    Ok(config)
}

fn stored_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
        .filter(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://api.saleematour.com"

            [catalog]
            page_size = 12
            featured_count = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.api.payment_poll_secs, 10);
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_rejects_non_positive_page_size() {
        let raw = DEFAULT_CONFIG.replace("page_size = 6", "page_size = 0");
        assert!(parse_config(&raw).is_err());
    }

    #[test]
    fn test_poll_interval_bounds() {
        let raw = DEFAULT_CONFIG.replace("payment_poll_secs = 10", "payment_poll_secs = 4294967");
        assert!(parse_config(&raw).is_err());
        let raw = DEFAULT_CONFIG.replace("payment_poll_secs = 10", "payment_poll_secs = 0");
        assert!(parse_config(&raw).is_err());

        let mut config = Config::default();
        assert_eq!(config.api.poll_interval_ms(), 10_000);
        config.api.payment_poll_secs = u32::MAX;
        assert_eq!(config.api.poll_interval_ms(), 3_600_000);
        config.api.payment_poll_secs = 0;
        assert_eq!(config.api.poll_interval_ms(), 1000);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let raw = DEFAULT_CONFIG.replace("level = \"debug\"", "level = \"loud\"");
        let config = parse_config(&raw).unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
