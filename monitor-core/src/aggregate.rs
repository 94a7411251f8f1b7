//! Pure derivations over fetched collections: health partitioning, top-N
//! ranking, groupings, timestamp selection and activity synthesis. Nothing
//! here performs I/O, and no malformed field value is allowed to escape as an
//! error; every parse degrades to a defined fallback.

use crate::constants::{thresholds, view};
use crate::models::{BackupItem, DatabaseSize};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parse a free-text size such as "21.55 GB" into gigabytes.
///
/// Takes the leading numeric token after discarding non-numeric characters;
/// garbled or empty input yields `0.0`, never an error.
pub fn parse_size_gb(size: &str) -> f64 {
    let cleaned: String = size
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // leading numeric token only: "1.2.3" parses as 1.2
    let mut token = String::new();
    let mut seen_dot = false;
    for c in cleaned.chars() {
        match c {
            '.' if seen_dot => break,
            '.' => {
                seen_dot = true;
                token.push(c);
            }
            _ => token.push(c),
        }
    }

    token.parse::<f64>().unwrap_or(0.0).max(0.0)
}

/// Backup health buckets fed to the proportional chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBreakdown {
    pub healthy: usize,
    pub warning: usize,
    pub failed: usize,
}

impl HealthBreakdown {
    pub fn counted(&self) -> usize {
        self.healthy + self.warning + self.failed
    }
}

/// Partition backup items into health buckets.
///
/// Statuses outside Completed/Failed (e.g. InProgress) land in no bucket;
/// that is the intended chart semantics, not an omission.
pub fn health_breakdown(items: &[BackupItem]) -> HealthBreakdown {
    let mut breakdown = HealthBreakdown::default();
    for item in items {
        let status = item.last_backup_status.to_lowercase();
        let precheck = item.backup_pre_check.to_lowercase();
        match status.as_str() {
            "completed" if precheck == "healthy" => breakdown.healthy += 1,
            "completed" => breakdown.warning += 1,
            "failed" => breakdown.failed += 1,
            _ => {}
        }
    }
    breakdown
}

/// Named size in gigabytes, ready for chart binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizedEntry {
    pub name: String,
    pub size_gb: f64,
}

/// Rank databases by parsed size, descending, truncated to the top 10.
/// The sort is stable: equal sizes keep their original relative order.
pub fn top_databases_by_size(sizes: &[DatabaseSize]) -> Vec<SizedEntry> {
    let mut entries: Vec<SizedEntry> = sizes
        .iter()
        .map(|d| SizedEntry {
            name: d.database_name.clone(),
            size_gb: parse_size_gb(&d.size),
        })
        .collect();
    entries.sort_by(|a, b| b.size_gb.partial_cmp(&a.size_gb).unwrap_or(std::cmp::Ordering::Equal));
    entries.truncate(view::TOP_DATABASES_LIMIT);
    entries
}

/// Count rows per key, preserving first-seen key order for display.
pub fn count_by_key<T>(items: &[T], key: impl Fn(&T) -> &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        let k = key(item);
        match counts.iter_mut().find(|(existing, _)| existing == k) {
            Some((_, count)) => *count += 1,
            None => counts.push((k.to_string(), 1)),
        }
    }
    counts
}

/// Number of distinct key values
pub fn unique_count<T>(items: &[T], key: impl Fn(&T) -> &str) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        let k = key(item);
        if !seen.contains(&k) {
            seen.push(k);
        }
    }
    seen.len()
}

/// Parse a backend timestamp in any of the shapes observed so far.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%m/%d/%Y %H:%M:%S",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Maximum parseable timestamp across rows; rows with unparseable timestamps
/// are skipped, and `None` means "unavailable" rather than epoch.
pub fn latest_timestamp<T>(items: &[T], field: impl Fn(&T) -> &str) -> Option<DateTime<Utc>> {
    items
        .iter()
        .filter_map(|item| parse_timestamp(field(item)))
        .max()
}

/// Activity classification for the recent-activity panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Warning,
    Error,
}

/// One synthesized activity row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    pub message: String,
    pub status: ActivityStatus,
    pub source: String,
    pub timestamp: String,
}

/// Synthesize the recent-activity feed: backup items ordered by restore point
/// descending, truncated to six, mapped to a uniform activity shape.
pub fn recent_activity(items: &[BackupItem]) -> Vec<ActivityItem> {
    let mut ordered: Vec<&BackupItem> = items.iter().collect();
    // unparseable restore points sort last
    ordered.sort_by_key(|item| {
        std::cmp::Reverse(parse_timestamp(&item.latest_restore_point))
    });

    ordered
        .into_iter()
        .take(view::RECENT_ACTIVITY_LIMIT)
        .map(|item| {
            let (status, verb) = match item.last_backup_status.to_lowercase().as_str() {
                "completed" => (ActivityStatus::Success, "completed"),
                "failed" => (ActivityStatus::Error, "failed"),
                _ => (ActivityStatus::Warning, "needs attention"),
            };
            ActivityItem {
                message: format!("Backup {verb} for {}", item.vm_name),
                status,
                source: item.vault_name.clone(),
                timestamp: item.latest_restore_point.clone(),
            }
        })
        .collect()
}

/// Severity band used for CPU and log-size badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Elevated,
    High,
}

/// Classify a max CPU usage sample (0-100)
pub fn cpu_severity(max_cpu_usage: f64) -> Severity {
    if max_cpu_usage >= thresholds::CPU_HIGH {
        Severity::High
    } else if max_cpu_usage >= thresholds::CPU_ELEVATED {
        Severity::Elevated
    } else {
        Severity::Normal
    }
}

/// Classify a free-text file size against the log-size thresholds
pub fn log_size_severity(size: &str) -> Severity {
    let gb = parse_size_gb(size);
    if gb >= thresholds::LOG_SIZE_CRITICAL_GB {
        Severity::High
    } else if gb >= thresholds::LOG_SIZE_ELEVATED_GB {
        Severity::Elevated
    } else {
        Severity::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(vm: &str, status: &str, precheck: &str, restore_point: &str) -> BackupItem {
        BackupItem {
            subscription_name: "Prod-Infra".into(),
            vault_name: "vault-east-1".into(),
            resource_group: "rg-backup-east".into(),
            vm_name: vm.into(),
            backup_pre_check: precheck.into(),
            last_backup_status: status.into(),
            latest_restore_point: restore_point.into(),
            policy_name: "DailyPolicy".into(),
            policy_sub_type: "Standard".into(),
        }
    }

    #[test]
    fn parse_size_handles_units_and_garbage() {
        assert_eq!(parse_size_gb("21.55 GB"), 21.55);
        assert_eq!(parse_size_gb("21 GB"), 21.0);
        assert_eq!(parse_size_gb("1024"), 1024.0);
        assert_eq!(parse_size_gb("garbage"), 0.0);
        assert_eq!(parse_size_gb(""), 0.0);
        assert_eq!(parse_size_gb("1.2.3 GB"), 1.2);
        assert!(parse_size_gb("-5 GB") >= 0.0);
    }

    #[test]
    fn health_buckets_follow_status_and_precheck() {
        let items = vec![
            item("vm-1", "Completed", "Healthy", ""),
            item("vm-2", "Completed", "ActionRequired", ""),
            item("vm-3", "Failed", "Healthy", ""),
            item("vm-4", "InProgress", "Healthy", ""),
        ];
        let breakdown = health_breakdown(&items);
        assert_eq!(breakdown.healthy, 1);
        assert_eq!(breakdown.warning, 1);
        assert_eq!(breakdown.failed, 1);
        // InProgress is deliberately uncounted
        assert!(breakdown.counted() < items.len());
    }

    #[test]
    fn health_counts_never_exceed_total() {
        let items = vec![
            item("vm-1", "Completed", "Healthy", ""),
            item("vm-2", "Failed", "", ""),
        ];
        assert!(health_breakdown(&items).counted() <= items.len());
    }

    #[test]
    fn top_databases_truncates_and_sorts_descending() {
        let sizes: Vec<DatabaseSize> = (0..15)
            .map(|i| DatabaseSize {
                database_name: format!("db-{i}"),
                size: format!("{} GB", i + 1),
            })
            .collect();
        let top = top_databases_by_size(&sizes);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].name, "db-14");
        assert_eq!(top[0].size_gb, 15.0);
        assert!(top.windows(2).all(|w| w[0].size_gb >= w[1].size_gb));
        // result is a subset of the input
        assert!(top.iter().all(|e| sizes.iter().any(|s| s.database_name == e.name)));
    }

    #[test]
    fn top_databases_ties_keep_original_order() {
        let sizes = vec![
            DatabaseSize { database_name: "first".into(), size: "5 GB".into() },
            DatabaseSize { database_name: "second".into(), size: "5 GB".into() },
            DatabaseSize { database_name: "big".into(), size: "9 GB".into() },
        ];
        let top = top_databases_by_size(&sizes);
        assert_eq!(top[0].name, "big");
        assert_eq!(top[1].name, "first");
        assert_eq!(top[2].name, "second");
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let vaults = ["East US", "West Europe", "East US", "Central US"];
        let counts = count_by_key(&vaults, |v| v);
        assert_eq!(
            counts,
            vec![
                ("East US".to_string(), 2),
                ("West Europe".to_string(), 1),
                ("Central US".to_string(), 1),
            ]
        );
    }

    #[test]
    fn latest_timestamp_skips_unparseable_rows() {
        let rows = [
            "2026-08-20T10:00:00Z",
            "not a date",
            "2026-08-25T02:00:00Z",
            "",
        ];
        let latest = latest_timestamp(&rows, |r| r).unwrap();
        assert_eq!(latest, parse_timestamp("2026-08-25T02:00:00Z").unwrap());
    }

    #[test]
    fn latest_timestamp_unavailable_when_nothing_parses() {
        let rows = ["garbled", ""];
        assert!(latest_timestamp(&rows, |r| r).is_none());
    }

    #[test]
    fn timestamp_formats_observed_from_backend() {
        assert!(parse_timestamp("2026-08-25T02:00:00Z").is_some());
        assert!(parse_timestamp("2026-08-25T02:00:00.123").is_some());
        assert!(parse_timestamp("2026-08-25 02:00:00").is_some());
        assert!(parse_timestamp("08/25/2026 02:00:00").is_some());
    }

    #[test]
    fn recent_activity_takes_six_newest_with_classification() {
        let mut items: Vec<BackupItem> = (1..=8)
            .map(|day| {
                item(
                    &format!("vm-{day:02}"),
                    "Completed",
                    "Healthy",
                    &format!("2026-08-{day:02}T00:00:00Z"),
                )
            })
            .collect();
        items.push(item("vm-fail", "Failed", "Healthy", "2026-08-20T00:00:00Z"));
        items.push(item("vm-run", "InProgress", "Healthy", "2026-08-21T00:00:00Z"));

        let activity = recent_activity(&items);
        assert_eq!(activity.len(), 6);
        assert_eq!(activity[0].message, "Backup needs attention for vm-run");
        assert_eq!(activity[0].status, ActivityStatus::Warning);
        assert_eq!(activity[1].status, ActivityStatus::Error);
        assert_eq!(activity[1].source, "vault-east-1");
        assert_eq!(activity[2].message, "Backup completed for vm-08");
    }

    #[test]
    fn severity_bands() {
        assert_eq!(cpu_severity(95.0), Severity::High);
        assert_eq!(cpu_severity(65.0), Severity::Elevated);
        assert_eq!(cpu_severity(10.0), Severity::Normal);
        assert_eq!(log_size_severity("12.4 GB"), Severity::High);
        assert_eq!(log_size_severity("8 GB"), Severity::Elevated);
        assert_eq!(log_size_severity("2 GB"), Severity::Normal);
    }
}
