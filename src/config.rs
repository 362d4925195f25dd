use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Remote lists, fetched in this submission order.
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    /// Seed hosts merged after every remote source.
    #[serde(default = "default_blacklist")]
    pub blacklist: Vec<String>,

    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<String>,

    #[serde(default = "default_output_path")]
    pub output_path: String,

    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub on_transport_error: TransportErrorPolicy,
}

/// What a worker does when a source cannot be reached at all.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportErrorPolicy {
    /// Abort the whole run.
    #[default]
    Abort,
    /// Log it and treat the source like a non-success response.
    Skip,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Defaults
fn default_output_path() -> String {
    "hosts.txt".to_string()
}
fn default_workers() -> usize {
    5
}
fn default_user_agent() -> String {
    "HostFold/1.0".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_sources() -> Vec<String> {
    [
        "http://sysctl.org/cameleon/hosts",
        "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts",
        "http://mirror1.malwaredomains.com/files/justdomains",
        "https://s3.amazonaws.com/lists.disconnect.me/simple_tracking.txt",
        "https://s3.amazonaws.com/lists.disconnect.me/simple_ad.txt",
        "https://gitlab.com/quidsup/notrack-blocklists/raw/master/notrack-blocklist.txt",
        "https://www.stephanpringle.com/hosts/crackle.txt",
        "http://winhelp2002.mvps.org/hosts.txt",
        "https://pgl.yoyo.org/adservers/serverlist.php?hostformat=hosts&showintro=0&mimetype=plaintext",
        "https://adaway.org/hosts.txt",
        "https://raw.githubusercontent.com/r-a-y/mobile-hosts/master/AdguardMobileAds.txt",
        "https://raw.githubusercontent.com/w13d/adblockListABP-PiHole/master/list.txt",
        "https://raw.githubusercontent.com/EnergizedProtection/block/master/assets/sources/filter/abpindo.txt",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
fn default_blacklist() -> Vec<String> {
    [
        "5fd74.v.fwmrm.net",
        "tracking.miui.com",
        "connect.rom.miui.com",
        "adv.sec.miui.com",
        "sdkconfig.ad.xiaomi.com",
        "data.mistat.xiaomi.com",
        "api.ad.xiaomi.com",
        "asp.animelab.com",
        "sdk.adincube.com",
        "bl-1.com",
        "eqx148.switchmedia.asia",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
fn default_whitelist() -> Vec<String> {
    ["bit.ly", "code.jquery.com", "imgur.com"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            blacklist: default_blacklist(),
            whitelist: default_whitelist(),
            output_path: default_output_path(),
            workers: default_workers(),
            fetch: FetchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            on_transport_error: TransportErrorPolicy::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config TOML")?;
        Ok(config)
    }

    /// Checks everything that would otherwise fail halfway through a run.
    pub fn validate(&self) -> Result<()> {
        if self.output_path.trim().is_empty() {
            bail!("output_path must not be empty");
        }
        for source in &self.sources {
            let url = Url::parse(source).with_context(|| format!("Invalid source URL {source}"))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                bail!("Unsupported scheme '{}' in source {}", url.scheme(), source);
            }
        }
        Ok(())
    }

    /// Worker count, never below one.
    pub fn worker_count(&self) -> usize {
        self.workers.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.sources.len(), 13);
        assert_eq!(config.blacklist.len(), 11);
        assert_eq!(config.whitelist, vec!["bit.ly", "code.jquery.com", "imgur.com"]);
        assert_eq!(config.output_path, "hosts.txt");
        assert_eq!(config.workers, 5);
        assert_eq!(config.fetch.on_transport_error, TransportErrorPolicy::Abort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            sources = ["https://example.com/list.txt"]
            workers = 0

            [fetch]
            on_transport_error = "skip"
            "#,
        )
        .unwrap();

        assert_eq!(config.sources, vec!["https://example.com/list.txt"]);
        assert_eq!(config.worker_count(), 1);
        assert_eq!(config.fetch.on_transport_error, TransportErrorPolicy::Skip);
        assert_eq!(config.fetch.user_agent, "HostFold/1.0");
        assert_eq!(config.blacklist.len(), 11);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_bad_sources() {
        let mut config = Config {
            sources: vec!["ftp://example.com/hosts".to_string()],
            ..Config::default()
        };
        assert!(config.validate().is_err());

        config.sources = vec!["not a url".to_string()];
        assert!(config.validate().is_err());

        config.sources = vec![];
        config.output_path = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
