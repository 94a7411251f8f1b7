use crate::constants::sql;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One Azure Recovery Services vault row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryVault {
    pub vault_name: String,
    pub resource_group_name: String,
    pub location: String,
    pub subscription_name: String,
}

/// One VM backup-protection record.
/// Also returned by the inactive-VM detail endpoint; what makes a VM
/// "inactive" is decided server-side and is opaque to this client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupItem {
    pub subscription_name: String,
    pub vault_name: String,
    pub resource_group: String,
    pub vm_name: String,
    pub backup_pre_check: String,
    pub last_backup_status: String,
    pub latest_restore_point: String,
    pub policy_name: String,
    pub policy_sub_type: String,
}

/// Max CPU usage sample for one VM
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmUsage {
    pub computer: String,
    #[serde(rename = "maxCPUUsage")]
    pub max_cpu_usage: f64,
    pub subscription_name: String,
    pub time_generated: String,
}

/// Database file record (large-log-files and server-files endpoints).
/// Size fields are free text with a unit suffix ("21.55 GB"); consumers
/// go through `aggregate::parse_size_gb` for numeric values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LargeLogFile {
    pub server_name: String,
    pub database_name: String,
    pub file_name: String,
    pub physical_path: String,
    pub file_type: String,
    pub total_size: String,
    pub used_space: String,
    pub free_space: String,
    pub collected_at: String,
}

/// Registered server host; only `HOST-SQL` tagged hosts are selectable
/// in the SQL monitoring views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlServerHost {
    pub server_name: String,
    pub ip: String,
    #[serde(default)]
    pub tag: String,
}

impl SqlServerHost {
    pub fn is_sql_host(&self) -> bool {
        self.tag.eq_ignore_ascii_case(sql::HOST_TAG) && !self.server_name.is_empty()
    }
}

/// Database name plus size string for one server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSize {
    pub database_name: String,
    pub size: String,
}

/// Wide SQL session diagnostics record.
///
/// The backend shape is unstable and historically carried keys like
/// `"dd hh:mm:ss.mss"`, `wait_info`, `CPU` with shifting types, so this is
/// kept as an open map with accessors that degrade to a placeholder instead
/// of a rigid struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryAnalysisRecord(pub Map<String, Value>);

/// Placeholder shown for null, missing or empty query-analysis values
pub const PLACEHOLDER: &str = "—";

impl QueryAnalysisRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Render one field for display; never fails, degrades to `—`.
    pub fn display(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => PLACEHOLDER.to_string(),
            Some(Value::String(s)) if s.is_empty() => PLACEHOLDER.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Object(map)) if map.is_empty() => PLACEHOLDER.to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Timestamp of the capture this record belongs to, when parseable
    pub fn collection_time(&self) -> Option<DateTime<Utc>> {
        match self.0.get("collection_time") {
            Some(Value::String(s)) => crate::aggregate::parse_timestamp(s),
            _ => None,
        }
    }
}

/// Query analysis response for one server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnalysisResponse {
    pub server: String,
    #[serde(default)]
    pub records: Vec<QueryAnalysisRecord>,
}

/// One collected SQL database backup run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecord {
    pub server_name: String,
    pub database_name: String,
    pub backup_type: String,
    pub backup_start_date: String,
    pub backup_finish_date: String,
    pub duration_minutes: f64,
    pub backup_location: String,
    pub storage_account: String,
    pub container: String,
    #[serde(default)]
    pub notes: String,
}

/// Backup collection response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupCollectionResponse {
    #[serde(default)]
    pub backups: Vec<BackupRecord>,
}

/// Per-location vault count inside the vault summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStat {
    pub location: String,
    pub vault_count: u64,
}

/// Vault summary response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VaultSummary {
    pub total_resource_groups: u64,
    pub location_stats: Vec<LocationStat>,
}

/// Cost threshold / max degree of parallelism setting pair for one server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostParallelismSetting {
    pub server_name: String,
    pub setting_name: String,
    pub configured_value: i64,
    pub running_value: i64,
}

impl CostParallelismSetting {
    /// Configured and running values match; drift otherwise
    pub fn is_in_sync(&self) -> bool {
        self.configured_value == self.running_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn backup_item_deserializes_from_backend_shape() {
        let item: BackupItem = serde_json::from_value(json!({
            "subscriptionName": "Prod-Infra",
            "vaultName": "vault-east-1",
            "resourceGroup": "rg-backup-east",
            "vmName": "sql-prod-01",
            "backupPreCheck": "Healthy",
            "lastBackupStatus": "Completed",
            "latestRestorePoint": "2026-08-25T02:00:00Z",
            "policyName": "DailyPolicy",
            "policySubType": "Enhanced"
        }))
        .unwrap();
        assert_eq!(item.vm_name, "sql-prod-01");
        assert_eq!(item.policy_sub_type, "Enhanced");
    }

    #[test]
    fn vm_usage_maps_uppercase_cpu_field() {
        let usage: VmUsage = serde_json::from_value(json!({
            "computer": "vm-web-01",
            "maxCPUUsage": 72.5,
            "subscriptionName": "DevOps",
            "timeGenerated": "2026-08-25T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(usage.max_cpu_usage, 72.5);
    }

    #[test]
    fn sql_host_tag_filter_is_case_insensitive() {
        let host = SqlServerHost {
            server_name: "sql01".into(),
            ip: "10.0.0.4".into(),
            tag: "host-sql".into(),
        };
        assert!(host.is_sql_host());

        let other = SqlServerHost {
            server_name: "web01".into(),
            ip: "10.0.0.5".into(),
            tag: "HOST-WEB".into(),
        };
        assert!(!other.is_sql_host());
    }

    #[test]
    fn query_record_display_degrades_to_placeholder() {
        let record: QueryAnalysisRecord = serde_json::from_value(json!({
            "session_id": 51,
            "sql_text": "SELECT 1",
            "wait_info": null,
            "query_plan": {},
            "status": ""
        }))
        .unwrap();
        assert_eq!(record.display("session_id"), "51");
        assert_eq!(record.display("sql_text"), "SELECT 1");
        assert_eq!(record.display("wait_info"), PLACEHOLDER);
        assert_eq!(record.display("query_plan"), PLACEHOLDER);
        assert_eq!(record.display("status"), PLACEHOLDER);
        assert_eq!(record.display("no_such_key"), PLACEHOLDER);
    }

    #[test]
    fn parallelism_drift_detection() {
        let synced = CostParallelismSetting {
            server_name: "sql01".into(),
            setting_name: "cost threshold for parallelism".into(),
            configured_value: 50,
            running_value: 50,
        };
        assert!(synced.is_in_sync());

        let drifted = CostParallelismSetting {
            running_value: 5,
            ..synced
        };
        assert!(!drifted.is_in_sync());
    }
}
