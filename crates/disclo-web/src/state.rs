//! Application state.

use std::sync::Arc;

use disclo_core::announcement::DisclosureSource;
use disclo_core::auth::CredentialSet;
use disclo_core::config::DiscloConfig;
use disclo_core::resolver::model::ResolverHosts;
use disclo_core::DiscloResult;

/// Application state shared across handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialSet>,
    pub source: Arc<dyn DisclosureSource>,
    pub hosts: Arc<ResolverHosts>,
    pub default_stock_code: Arc<str>,
}

impl AppState {
    pub fn new(
        credentials: CredentialSet,
        source: Arc<dyn DisclosureSource>,
        hosts: ResolverHosts,
        default_stock_code: &str,
    ) -> Self {
        Self {
            credentials: Arc::new(credentials),
            source,
            hosts: Arc::new(hosts),
            default_stock_code: Arc::from(default_stock_code),
        }
    }

    /// Build state from config, validating the allowlist and resolver hosts.
    pub fn from_config(config: &DiscloConfig, source: Arc<dyn DisclosureSource>) -> DiscloResult<Self> {
        Ok(Self::new(
            config.credentials()?,
            source,
            config.resolver_hosts()?,
            &config.reports.default_stock_code,
        ))
    }
}
