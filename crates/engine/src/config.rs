use std::{env, fs, path::Path, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use sitenav_util::config_file_path;
use tracing::debug;

/// Origin of the production content API.
pub const DEFAULT_API_BASE: &str = "https://jharkhand-it-sol-back1.onrender.com";

/// Environment variable that replaces the configured API base.
pub const API_BASE_ENV: &str = "SITENAV_API_BASE";

/// Environment variable pointing at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "SITENAV_CONFIG_PATH";

/// Settings for reaching the content API.
///
/// Every field is optional in the config file; missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin of the API; relative image paths are joined onto it as well.
    pub api_base: String,
    pub services_path: String,
    pub portfolio_path: String,
    pub timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            services_path: "/services/find".to_string(),
            portfolio_path: "/portfolio/all".to_string(),
            timeout_secs: 30,
        }
    }
}

impl SiteConfig {
    /// Load the config file from its default location and apply env overrides.
    pub fn load() -> Self {
        Self::load_from(&default_config_path()).with_env_overrides()
    }

    /// Read `path`, falling back to defaults when it is missing or unparseable.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path)
            && let Ok(config) = serde_json::from_str(&content)
        {
            debug!(path = %path.display(), "loaded site config");
            return config;
        }
        Self::default()
    }

    /// Apply `SITENAV_API_BASE` when it is set and non-blank.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(api_base) = env::var(API_BASE_ENV)
            && !api_base.trim().is_empty()
        {
            self.api_base = api_base.trim().to_string();
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Get the default path for the site configuration file.
pub fn default_config_path() -> PathBuf {
    config_file_path(CONFIG_PATH_ENV, "sitenav", "config.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = SiteConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "api_base": "http://localhost:5000", "timeout_secs": 5 }}"#).expect("write config");

        let config = SiteConfig::load_from(file.path());
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.services_path, "/services/find");
    }

    #[test]
    fn unparseable_file_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write config");
        assert_eq!(SiteConfig::load_from(file.path()), SiteConfig::default());
    }

    #[test]
    fn env_override_replaces_api_base() {
        temp_env::with_var(API_BASE_ENV, Some(" http://127.0.0.1:9000 "), || {
            let config = SiteConfig::default().with_env_overrides();
            assert_eq!(config.api_base, "http://127.0.0.1:9000");
        });
        temp_env::with_var(API_BASE_ENV, Some(""), || {
            assert_eq!(SiteConfig::default().with_env_overrides().api_base, DEFAULT_API_BASE);
        });
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let config = SiteConfig {
            timeout_secs: 0,
            ..SiteConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }
}
