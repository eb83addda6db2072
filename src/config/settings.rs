//! Settings structures for the autocomplete widget and its GitHub adapter

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

/// GitHub user search endpoint
pub const GITHUB_USERS_ENDPOINT: &str = "https://api.github.com/search/users?per_page=50&page=1";

/// GitHub repository search endpoint
pub const GITHUB_REPOSITORIES_ENDPOINT: &str =
    "https://api.github.com/search/repositories?per_page=50&page=1";

/// Main settings structure matching `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub autocomplete: AutocompleteSettings,
    pub github: GithubSettings,
    pub outgoing: OutgoingSettings,
    pub server: ServerSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Resolve settings from an explicit path, the environment, the
    /// well-known locations, or defaults, then apply env overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match Self::locate(explicit) {
            Some(path) => {
                info!("Loading settings from: {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                info!("No settings file found, using defaults");
                Self::default()
            }
        };
        settings.merge_env();
        settings.validate()?;
        Ok(settings)
    }

    fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Ok(path) = std::env::var("GHAC_SETTINGS_PATH") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let mut candidates = vec![
            PathBuf::from("settings.yml"),
            PathBuf::from("config/settings.yml"),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("gh-autocomplete/settings.yml"));
        }

        candidates.into_iter().find(|path| path.exists())
    }

    /// Merge with environment variables (GHAC_* prefix, plus GITHUB_TOKEN)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("GHAC_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("GHAC_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse() {
                self.autocomplete.debounce_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("GHAC_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("GHAC_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("GITHUB_TOKEN") {
            if !val.is_empty() {
                self.github.token = Some(val);
            }
        }
    }

    /// Reject settings the widget cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.autocomplete.debounce_ms == 0 {
            bail!("autocomplete.debounce_ms must be greater than zero");
        }
        if self.github.endpoints.is_empty() {
            bail!("github.endpoints must list at least one endpoint");
        }
        self.github.endpoint_urls()?;
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
}

/// Search coordinator behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteSettings {
    /// Quiet period after the last qualifying keystroke, in milliseconds
    pub debounce_ms: u64,
    /// Hint shown in an empty input
    pub placeholder: String,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            debounce_ms: crate::DEFAULT_DEBOUNCE_MS,
            placeholder: "Repository or username...".to_string(),
        }
    }
}

impl AutocompleteSettings {
    /// Debounce delay as a `Duration`
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}

/// GitHub adapter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSettings {
    /// Endpoint templates; the query is injected as `q`
    pub endpoints: Vec<String>,
    /// Personal access token for higher rate limits
    pub token: Option<String>,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            endpoints: vec![
                GITHUB_USERS_ENDPOINT.to_string(),
                GITHUB_REPOSITORIES_ENDPOINT.to_string(),
            ],
            token: None,
        }
    }
}

impl GithubSettings {
    /// Parse the endpoint templates
    pub fn endpoint_urls(&self) -> Result<Vec<Url>> {
        self.endpoints
            .iter()
            .map(|endpoint| {
                Url::parse(endpoint).with_context(|| format!("invalid endpoint: {}", endpoint))
            })
            .collect()
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// User agent sent with every request (GitHub requires one)
    pub useragent: String,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            useragent: format!("gh-autocomplete/{}", crate::VERSION),
            pool_maxsize: 8,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Server settings for the JSON endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8888,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8888);
        assert_eq!(settings.autocomplete.debounce_ms, 500);
        assert_eq!(settings.github.endpoints.len(), 2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml(
            r#"
autocomplete:
  debounce_ms: 400
github:
  endpoints:
    - "https://api/search/users?per_page=5"
"#,
        )
        .unwrap();
        assert_eq!(settings.autocomplete.debounce_ms, 400);
        assert_eq!(settings.autocomplete.placeholder, "Repository or username...");
        assert_eq!(settings.github.endpoints.len(), 1);
        assert_eq!(settings.outgoing.request_timeout, 5.0);
    }

    #[test]
    fn test_validate_rejects_zero_debounce() {
        let mut settings = Settings::default();
        settings.autocomplete.debounce_ms = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut settings = Settings::default();
        settings.github.endpoints = vec!["not a url".to_string()];
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_endpoints() {
        let mut settings = Settings::default();
        settings.github.endpoints.clear();
        assert!(settings.validate().is_err());
    }
}
