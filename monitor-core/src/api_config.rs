//! API configuration with the built-in backend endpoint table.

use crate::constants::api;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at a non-default backend host
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL for a fixed endpoint path
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, endpoint))?)
    }

    /// Full URL for an endpoint taking one trailing path parameter.
    /// The segment is percent-encoded; values may contain spaces or slashes.
    pub fn endpoint_url_with_segment(&self, endpoint: &str, segment: &str) -> Result<Url> {
        let mut url = self.endpoint_url(endpoint)?;
        url.path_segments_mut()
            .map_err(|_| crate::error::MonitorError::custom("base URL cannot carry path segments"))?
            .push(segment);
        Ok(url)
    }

    /// Endpoint overview for CLI display
    pub fn endpoints_info(&self) -> Vec<(&'static str, String)> {
        let fixed = |path: &str| format!("{}{}", self.base_url, path);
        vec![
            ("Backend address", self.base_url.clone()),
            ("Vault summary", fixed(api::endpoints::VAULT_SUMMARY)),
            ("Recovery vaults", fixed(api::endpoints::RECOVERY_VAULTS)),
            ("Vault count", fixed(api::endpoints::VAULT_COUNT)),
            ("Active VMs", fixed(api::endpoints::ACTIVE_VMS)),
            ("Healthy backups", fixed(api::endpoints::HEALTHY_BACKUPS)),
            ("Inactive VMs", fixed(api::endpoints::INACTIVE_VMS)),
            ("Inactive VM details", fixed(api::endpoints::INACTIVE_VM_DETAILS)),
            ("Backup items", fixed(api::endpoints::BACKUP_ITEMS)),
            ("Subscriptions", fixed(api::endpoints::SUBSCRIPTIONS)),
            ("VM usages", fixed(api::endpoints::VM_USAGES)),
            ("Large log files", fixed(api::endpoints::LARGE_LOG_FILES)),
            ("Server hosts", fixed(api::endpoints::SERVER_HOSTS)),
            ("Backup collection", fixed(api::endpoints::BACKUP_COLLECTION)),
            ("Cost/parallelism", fixed(api::endpoints::COST_PARALLELISM)),
        ]
    }
}

impl fmt::Display for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current API configuration:")?;
        for (name, url) in self.endpoints_info() {
            writeln!(f, "  {name}: {url}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_base_and_path() {
        let config = ApiConfig::default();
        let url = config
            .endpoint_url(api::endpoints::RECOVERY_VAULTS)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:33411/api/monitoring/recoveryvaults"
        );
    }

    #[test]
    fn path_segment_is_percent_encoded() {
        let config = ApiConfig::default();
        let url = config
            .endpoint_url_with_segment(api::endpoints::DATABASE_SIZES, "SQL Server 01")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:33411/api/SQLServer/databasesizes/SQL%20Server%2001"
        );
    }

    #[test]
    fn custom_base_url() {
        let config = ApiConfig::with_base_url("http://10.0.0.5:8080");
        let url = config.endpoint_url(api::endpoints::VAULT_COUNT).unwrap();
        assert!(url.as_str().starts_with("http://10.0.0.5:8080/"));
    }
}
