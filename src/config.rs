use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub biohop: BiohopConfig,
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Biohop-specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BiohopConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// SPARQL endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// SPARQL query endpoint URL.
    #[serde(default = "default_endpoint_url")]
    pub url: String,
    /// Per-call HTTP timeout in seconds. A timed-out hop is reported as the
    /// ERROR sentinel, never retried.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Graph namespace configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Base IRI prepended to bare entity names at the query root.
    #[serde(default = "default_resource_base")]
    pub resource_base: String,
    /// Base IRI prepended to relation names to form predicates.
    #[serde(default = "default_ontology_base")]
    pub ontology_base: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_endpoint_url() -> String {
    "https://dbpedia.org/sparql".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_resource_base() -> String {
    "http://dbpedia.org/resource/".to_string()
}

fn default_ontology_base() -> String {
    "http://dbpedia.org/ontology/".to_string()
}

impl Default for BiohopConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            resource_base: default_resource_base(),
            ontology_base: default_ontology_base(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            biohop: BiohopConfig::default(),
            endpoint: EndpointConfig::default(),
            graph: GraphConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Loads environment variables from .env file (if present) before loading
    /// config. Looks for the config file in this order:
    /// 1. Path specified in BIOHOP_CONFIG environment variable
    /// 2. ./config.toml in current directory
    ///
    /// If no config file exists the compiled defaults are used, so the CLI
    /// works out of the box against the public endpoint.
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignore errors - file is optional)
        let _ = dotenv::dotenv();

        let explicit = std::env::var("BIOHOP_CONFIG").ok().map(PathBuf::from);
        let config_path = explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from("config.toml"));

        let config = if config_path.exists() {
            let config_str = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
            toml::from_str(&config_str).context("Failed to parse config.toml")?
        } else if let Some(path) = explicit {
            // An explicitly requested file that is missing is an error;
            // a missing default config.toml is not.
            anyhow::bail!("Config file not found: {}", path.display());
        } else {
            log::debug!("No config.toml found, using defaults");
            Config::default()
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        Url::parse(&self.endpoint.url)
            .with_context(|| format!("endpoint.url is not a valid URL: {}", self.endpoint.url))?;

        if self.endpoint.timeout_secs == 0 {
            anyhow::bail!("endpoint.timeout_secs must be greater than 0");
        }

        if self.graph.resource_base.is_empty() {
            anyhow::bail!("graph.resource_base must not be empty");
        }

        if self.graph.ontology_base.is_empty() {
            anyhow::bail!("graph.ontology_base must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serialize config tests that mutate process-wide env so they don't race.
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn with_config_env(config_path: Option<&std::path::Path>, f: impl FnOnce()) {
        let original = std::env::var("BIOHOP_CONFIG").ok();
        match config_path {
            Some(p) => std::env::set_var("BIOHOP_CONFIG", p.to_str().unwrap()),
            None => std::env::remove_var("BIOHOP_CONFIG"),
        }
        f();
        std::env::remove_var("BIOHOP_CONFIG");
        if let Some(val) = original {
            std::env::set_var("BIOHOP_CONFIG", val);
        }
    }

    #[test]
    fn test_config_load_success() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[biohop]
log_level = "debug"

[endpoint]
url = "https://example.org/sparql"
timeout_secs = 5

[graph]
resource_base = "http://example.org/resource/"
ontology_base = "http://example.org/ontology/"
"#,
        )
        .unwrap();
        with_config_env(Some(&config_path), || {
            let config = Config::load();
            assert!(config.is_ok(), "Config::load() failed: {:?}", config.err());
            let config = config.unwrap();
            assert_eq!(config.biohop.log_level, "debug");
            assert_eq!(config.endpoint.url, "https://example.org/sparql");
            assert_eq!(config.endpoint.timeout_secs, 5);
            assert_eq!(config.graph.ontology_base, "http://example.org/ontology/");
        });
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[endpoint]
url = "https://example.org/sparql"
"#,
        )
        .unwrap();
        with_config_env(Some(&config_path), || {
            let config = Config::load().unwrap();
            assert_eq!(config.endpoint.url, "https://example.org/sparql");
            assert_eq!(config.endpoint.timeout_secs, 30);
            assert_eq!(config.graph.resource_base, "http://dbpedia.org/resource/");
            assert_eq!(config.biohop.log_level, "info");
        });
    }

    #[test]
    fn test_config_invalid_url() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[endpoint]
url = "not a url"
"#,
        )
        .unwrap();
        with_config_env(Some(&config_path), || {
            let config = Config::load();
            assert!(config.is_err());
        });
    }

    #[test]
    fn test_config_zero_timeout_rejected() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[endpoint]
timeout_secs = 0
"#,
        )
        .unwrap();
        with_config_env(Some(&config_path), || {
            let config = Config::load();
            assert!(config.is_err());
        });
    }

    #[test]
    fn test_config_missing_explicit_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        with_config_env(Some(std::path::Path::new("nonexistent.toml")), || {
            let config = Config::load();
            assert!(config.is_err());
        });
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint.url, "https://dbpedia.org/sparql");
        assert_eq!(config.endpoint.timeout_secs, 30);
        assert_eq!(config.graph.ontology_base, "http://dbpedia.org/ontology/");
    }
}
