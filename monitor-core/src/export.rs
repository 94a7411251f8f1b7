//! CSV export of the currently visible row set.
//!
//! Values are comma-joined under a fixed header row matching the displayed
//! column order. Embedded commas are not escaped; that mirrors the exports
//! the dashboard has always produced and keeps files byte-compatible with
//! downstream tooling that expects them.

use crate::error::Result;
use crate::models::{BackupItem, BackupRecord, LargeLogFile, RecoveryVault, VmUsage};
use std::path::Path;
use tracing::info;

/// Rows exportable to CSV with a fixed header/column order
pub trait CsvExport {
    /// Header row, in displayed column order
    fn headers() -> &'static [&'static str];

    /// One data row, aligned with `headers`
    fn row(&self) -> Vec<String>;

    /// Suggested export file name
    fn default_file_name() -> &'static str;
}

impl CsvExport for BackupItem {
    fn headers() -> &'static [&'static str] {
        &[
            "VM Name",
            "Vault Name",
            "Resource Group",
            "Subscription",
            "Backup Pre-Check",
            "Last Backup Status",
            "Latest Restore Point",
            "Policy Name",
            "Policy Sub Type",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.vm_name.clone(),
            self.vault_name.clone(),
            self.resource_group.clone(),
            self.subscription_name.clone(),
            self.backup_pre_check.clone(),
            self.last_backup_status.clone(),
            self.latest_restore_point.clone(),
            self.policy_name.clone(),
            self.policy_sub_type.clone(),
        ]
    }

    fn default_file_name() -> &'static str {
        "backup-items.csv"
    }
}

impl CsvExport for RecoveryVault {
    fn headers() -> &'static [&'static str] {
        &["Vault Name", "Subscription", "Resource Group", "Location"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.vault_name.clone(),
            self.subscription_name.clone(),
            self.resource_group_name.clone(),
            self.location.clone(),
        ]
    }

    fn default_file_name() -> &'static str {
        "recovery-vaults.csv"
    }
}

impl CsvExport for VmUsage {
    fn headers() -> &'static [&'static str] {
        &["Computer Name", "Subscription", "Max CPU Usage", "Time Generated"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.computer.clone(),
            self.subscription_name.clone(),
            format!("{:.2}", self.max_cpu_usage),
            self.time_generated.clone(),
        ]
    }

    fn default_file_name() -> &'static str {
        "vm-cpu-usage.csv"
    }
}

impl CsvExport for LargeLogFile {
    fn headers() -> &'static [&'static str] {
        &[
            "Server",
            "Database",
            "File Name",
            "File Type",
            "Total Size",
            "Used Space",
            "Free Space",
            "Collected At",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.server_name.clone(),
            self.database_name.clone(),
            self.file_name.clone(),
            self.file_type.clone(),
            self.total_size.clone(),
            self.used_space.clone(),
            self.free_space.clone(),
            self.collected_at.clone(),
        ]
    }

    fn default_file_name() -> &'static str {
        "large-log-files.csv"
    }
}

impl CsvExport for BackupRecord {
    fn headers() -> &'static [&'static str] {
        &[
            "Server",
            "Database",
            "Backup Type",
            "Start",
            "Finish",
            "Duration (min)",
            "Location",
            "Storage Account",
            "Container",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.server_name.clone(),
            self.database_name.clone(),
            self.backup_type.clone(),
            self.backup_start_date.clone(),
            self.backup_finish_date.clone(),
            format!("{:.0}", self.duration_minutes),
            self.backup_location.clone(),
            self.storage_account.clone(),
            self.container.clone(),
        ]
    }

    fn default_file_name() -> &'static str {
        "sql-backups.csv"
    }
}

/// Render rows (already narrowed to the visible set) as CSV text.
pub fn to_csv<'a, T: CsvExport + 'a>(rows: impl IntoIterator<Item = &'a T>) -> String {
    let mut lines = vec![T::headers().join(",")];
    lines.extend(rows.into_iter().map(|row| row.row().join(",")));
    lines.join("\n")
}

/// Write the visible rows to a CSV file.
pub fn write_csv<'a, T: CsvExport + 'a>(
    rows: impl IntoIterator<Item = &'a T>,
    path: &Path,
) -> Result<()> {
    let content = to_csv(rows);
    std::fs::write(path, content)?;
    info!("Exported CSV: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault(name: &str) -> RecoveryVault {
        RecoveryVault {
            vault_name: name.into(),
            resource_group_name: "rg-backup-east".into(),
            location: "East US".into(),
            subscription_name: "Prod-Infra".into(),
        }
    }

    #[test]
    fn export_has_header_plus_one_line_per_row() {
        let vaults = vec![vault("vault-east-1"), vault("vault-east-2"), vault("v3")];
        let csv = to_csv(&vaults);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), vaults.len() + 1);
        assert_eq!(lines[0], "Vault Name,Subscription,Resource Group,Location");
        assert_eq!(lines[1], "vault-east-1,Prod-Infra,rg-backup-east,East US");
    }

    #[test]
    fn export_of_filtered_subset_only() {
        let vaults = vec![vault("vault-east-1"), vault("vault-west-2")];
        let filtered: Vec<&RecoveryVault> = vaults
            .iter()
            .filter(|v| v.vault_name.contains("east"))
            .collect();
        let csv = to_csv(filtered.into_iter());
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn empty_export_is_just_the_header() {
        let vaults: Vec<RecoveryVault> = vec![];
        let csv = to_csv(&vaults);
        assert_eq!(csv, "Vault Name,Subscription,Resource Group,Location");
    }

    #[test]
    fn write_csv_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RecoveryVault::default_file_name());
        write_csv(&[vault("vault-east-1")], &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Vault Name,"));
        assert_eq!(content.lines().count(), 2);
    }
}
