use crate::api_config::ApiConfig;
use crate::constants::api::{FILE_TYPE_PARAM, SUBSCRIPTION_PARAM, endpoints};
use crate::error::{MonitorError, Result};
use crate::models::{
    BackupCollectionResponse, BackupItem, CostParallelismSetting, DatabaseSize, LargeLogFile,
    QueryAnalysisResponse, RecoveryVault, SqlServerHost, VaultSummary, VmUsage,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

/// Log vs. row file selection on the server-files endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Log,
    Row,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Row => "row",
        }
    }
}

impl std::str::FromStr for FileType {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "row" => Ok(Self::Row),
            other => Err(MonitorError::custom(format!(
                "unknown file type '{other}', expected log or row"
            ))),
        }
    }
}

/// Monitoring backend client.
///
/// One method per backend resource; every call is a fresh GET round trip
/// with no retries, timeouts or caching. Non-2xx responses surface as
/// `MonitorError::Api` naming the resource; response bodies are parsed as
/// their declared shape without further validation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Endpoint URL with the optional subscription scope. The parameter is
    /// omitted entirely for `None`; the server treats absence as "all".
    fn scoped_url(&self, endpoint: &str, subscription: Option<&str>) -> Result<Url> {
        let mut url = self.config.endpoint_url(endpoint)?;
        if let Some(name) = subscription {
            url.query_pairs_mut().append_pair(SUBSCRIPTION_PARAM, name);
        }
        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url, resource: &str) -> Result<T> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status();
            error!("Failed to fetch {resource}: HTTP {status}");
            Err(MonitorError::api(format!(
                "Failed to fetch {resource}: HTTP {status}"
            )))
        }
    }

    /// Vault summary: resource-group total plus per-location vault counts
    pub async fn vault_summary(&self, subscription: Option<&str>) -> Result<VaultSummary> {
        let url = self.scoped_url(endpoints::VAULT_SUMMARY, subscription)?;
        self.fetch_json(url, "vault summary").await
    }

    /// Recovery vault rows, optionally scoped to one subscription
    pub async fn recovery_vaults(&self, subscription: Option<&str>) -> Result<Vec<RecoveryVault>> {
        let url = self.scoped_url(endpoints::RECOVERY_VAULTS, subscription)?;
        self.fetch_json(url, "recovery vaults").await
    }

    /// Raw vault count statistic; field naming varies, see `normalize`.
    pub async fn vault_count(&self, subscription: Option<&str>) -> Result<Value> {
        let url = self.scoped_url(endpoints::VAULT_COUNT, subscription)?;
        self.fetch_json(url, "vault count").await
    }

    /// Raw active VM count statistic
    pub async fn active_vms_count(&self, subscription: Option<&str>) -> Result<Value> {
        let url = self.scoped_url(endpoints::ACTIVE_VMS, subscription)?;
        self.fetch_json(url, "active VMs count").await
    }

    /// Raw healthy backup percentage statistic
    pub async fn healthy_backup_percentage(&self, subscription: Option<&str>) -> Result<Value> {
        let url = self.scoped_url(endpoints::HEALTHY_BACKUPS, subscription)?;
        self.fetch_json(url, "healthy backup percentage").await
    }

    /// Raw inactive VM count statistic
    pub async fn inactive_vms_count(&self, subscription: Option<&str>) -> Result<Value> {
        let url = self.scoped_url(endpoints::INACTIVE_VMS, subscription)?;
        self.fetch_json(url, "inactive VMs count").await
    }

    /// Inactive VM detail rows. What counts as "inactive" is decided
    /// server-side; the rows share the backup-item shape.
    pub async fn inactive_vm_details(&self, subscription: Option<&str>) -> Result<Vec<BackupItem>> {
        let url = self.scoped_url(endpoints::INACTIVE_VM_DETAILS, subscription)?;
        self.fetch_json(url, "inactive VM details").await
    }

    /// All backup items across subscriptions
    pub async fn backup_items(&self) -> Result<Vec<BackupItem>> {
        let url = self.config.endpoint_url(endpoints::BACKUP_ITEMS)?;
        self.fetch_json(url, "backup items").await
    }

    /// Backup items for one subscription (server-side scope)
    pub async fn backup_items_by_subscription(
        &self,
        subscription: &str,
    ) -> Result<Vec<BackupItem>> {
        let url = self
            .config
            .endpoint_url_with_segment(endpoints::BACKUP_ITEMS_BY_SUBSCRIPTION, subscription)?;
        self.fetch_json(
            url,
            &format!("backup items for subscription: {subscription}"),
        )
        .await
    }

    /// Distinct subscription names
    pub async fn distinct_subscriptions(&self) -> Result<Vec<String>> {
        let url = self.config.endpoint_url(endpoints::SUBSCRIPTIONS)?;
        self.fetch_json(url, "subscriptions").await
    }

    /// All VM CPU usage samples
    pub async fn vm_usages(&self) -> Result<Vec<VmUsage>> {
        let url = self.config.endpoint_url(endpoints::VM_USAGES)?;
        self.fetch_json(url, "VM usages").await
    }

    /// VM CPU usage samples for one subscription
    pub async fn vm_usages_by_subscription(&self, subscription: &str) -> Result<Vec<VmUsage>> {
        let url = self
            .config
            .endpoint_url_with_segment(endpoints::VM_USAGES, subscription)?;
        self.fetch_json(url, &format!("VM usages for subscription: {subscription}"))
            .await
    }

    /// Log files flagged as oversized by the backend
    pub async fn large_log_files(&self) -> Result<Vec<LargeLogFile>> {
        let url = self.config.endpoint_url(endpoints::LARGE_LOG_FILES)?;
        self.fetch_json(url, "large log files").await
    }

    /// All registered server hosts; callers filter on the HOST-SQL tag.
    pub async fn server_hosts(&self) -> Result<Vec<SqlServerHost>> {
        let url = self.config.endpoint_url(endpoints::SERVER_HOSTS)?;
        self.fetch_json(url, "SQL servers").await
    }

    /// Database sizes for one server
    pub async fn database_sizes(&self, server_name: &str) -> Result<Vec<DatabaseSize>> {
        let url = self
            .config
            .endpoint_url_with_segment(endpoints::DATABASE_SIZES, server_name)?;
        self.fetch_json(url, &format!("database sizes for server: {server_name}"))
            .await
    }

    /// Log or row files for one server
    pub async fn server_files(
        &self,
        server_name: &str,
        file_type: FileType,
    ) -> Result<Vec<LargeLogFile>> {
        let mut url = self
            .config
            .endpoint_url_with_segment(endpoints::SERVER_FILES, server_name)?;
        url.query_pairs_mut()
            .append_pair(FILE_TYPE_PARAM, file_type.as_str());
        self.fetch_json(
            url,
            &format!("{} files for server: {server_name}", file_type.as_str()),
        )
        .await
    }

    /// Session diagnostics capture for one server
    pub async fn query_analysis(&self, server_name: &str) -> Result<QueryAnalysisResponse> {
        let url = self
            .config
            .endpoint_url_with_segment(endpoints::QUERY_ANALYSIS, server_name)?;
        self.fetch_json(url, &format!("query analysis for server: {server_name}"))
            .await
    }

    /// Collected SQL database backup runs
    pub async fn backup_collection(&self) -> Result<BackupCollectionResponse> {
        let url = self.config.endpoint_url(endpoints::BACKUP_COLLECTION)?;
        self.fetch_json(url, "backup collection data").await
    }

    /// Cost threshold / parallelism settings across servers
    pub async fn cost_parallelism(&self) -> Result<Vec<CostParallelismSetting>> {
        let url = self.config.endpoint_url(endpoints::COST_PARALLELISM)?;
        self.fetch_json(url, "cost parallelism settings").await
    }
}
