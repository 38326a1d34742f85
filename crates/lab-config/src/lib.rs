use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for lab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cards per catalog page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Cache key namespace for catalog pages
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub latency: LatencyConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Delay applied to every cache miss
    #[serde(default = "default_simulated_ms")]
    pub simulated_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            namespace: default_namespace(),
            cache: CacheConfig::default(),
            latency: LatencyConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            simulated_ms: default_simulated_ms(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_page_size() -> u32 {
    6
}

fn default_namespace() -> String {
    "examples".to_string()
}

fn default_ttl_secs() -> u64 {
    5 * 60
}

fn default_simulated_ms() -> u64 {
    300
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    17380
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, writing the defaults there if it is missing
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<Config>(&content)?
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            config
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        if self.namespace.is_empty() {
            anyhow::bail!("namespace must not be empty");
        }
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "lab", "lab") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.lab/config.toml")
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency.simulated_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.namespace, "examples");
        assert_eq!(config.ttl(), Duration::from_secs(300));
        assert_eq!(config.latency(), Duration::from_millis(300));
        assert_eq!(config.server.port, 17380);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.page_size, config.page_size);
        assert_eq!(parsed.cache.ttl_secs, config.cache.ttl_secs);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml_str = r#"
page_size = 12

[latency]
simulated_ms = 0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.latency(), Duration::ZERO);
        assert_eq!(config.cache.ttl_secs, 300);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.page_size, 6);

        std::fs::write(&path, "page_size = 9\n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap().page_size, 9);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "page_size = 0\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
