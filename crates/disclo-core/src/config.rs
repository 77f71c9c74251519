//! Service configuration.
//!
//! Loaded from a TOML file; every section is optional and falls back to the
//! defaults below.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::auth::CredentialSet;
use crate::error::{DiscloError, DiscloResult};
use crate::resolver::model::ResolverHosts;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "disclo.toml";

/// Stock code used when a request does not name one.
pub const DEFAULT_STOCK_CODE: &str = "000001";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiscloConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub cninfo: CninfoConfig,
    pub reports: ReportsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub passwords: Vec<String>,
}

/// Settings for the cninfo disclosure source and the hosts the resolver
/// rewrites links onto.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CninfoConfig {
    pub base_url: String,
    pub static_host: String,
    pub timeout_secs: u64,
    pub page_size: u32,
    pub max_pages: u32,
    pub lookback_days: i64,
}

impl Default for CninfoConfig {
    fn default() -> Self {
        Self {
            base_url: "http://www.cninfo.com.cn".to_string(),
            static_host: "http://static.cninfo.com.cn".to_string(),
            timeout_secs: 30,
            page_size: 30,
            max_pages: 10,
            lookback_days: 365,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    pub default_stock_code: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            default_stock_code: DEFAULT_STOCK_CODE.to_string(),
        }
    }
}

impl DiscloConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> DiscloResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> DiscloResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load the explicit path if given, else `disclo.toml` in `dir` when it
    /// exists, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> DiscloResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Build the credential allowlist, failing when it would be empty.
    pub fn credentials(&self) -> DiscloResult<CredentialSet> {
        let creds = CredentialSet::new(self.auth.passwords.iter().cloned());
        if creds.is_empty() {
            return Err(DiscloError::config(
                "no passwords configured; set [auth] passwords or DISCLO_PASSWORDS",
            ));
        }
        Ok(creds)
    }

    pub fn resolver_hosts(&self) -> DiscloResult<ResolverHosts> {
        ResolverHosts::new(&self.cninfo.static_host, &self.cninfo.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiscloConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.reports.default_stock_code, "000001");
        assert_eq!(config.cninfo.static_host, "http://static.cninfo.com.cn");
        assert!(config.auth.passwords.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DiscloConfig::from_toml_str(
            r#"
[server]
port = 9100

[auth]
passwords = ["friday_A66", "shares_B88"]
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cninfo.page_size, 30);
        assert_eq!(config.credentials().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_allowlist_is_config_error() {
        let config = DiscloConfig::default();
        assert!(matches!(config.credentials(), Err(DiscloError::Config(_))));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            DiscloConfig::from_toml_str("[server\nport = 1"),
            Err(DiscloError::Toml(_))
        ));
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = std::env::temp_dir().join("disclo-config-test-missing");
        let config = DiscloConfig::discover(None, &dir).unwrap();
        assert_eq!(config.server.port, 8000);
    }
}
