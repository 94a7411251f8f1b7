//! Coalesces the backend's historically inconsistent statistic field names.
//!
//! Several statistic endpoints have returned different key names for the same
//! semantic value across backend versions. Each statistic gets one ordered
//! alias table here; the first non-null alias wins. New variants observed in
//! the wild are appended to the tables, never substituted, so responses from
//! older backends keep working.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Known spellings of the vault count field
pub const VAULT_COUNT_ALIASES: &[&str] = &["totalVaults", "vaultCount", "TotalVaults"];

/// Known spellings of the active VM count field
pub const ACTIVE_VMS_ALIASES: &[&str] = &["activeVMs", "activeVms", "ActiveVMs"];

/// Known spellings of the healthy backup percentage field
pub const HEALTHY_BACKUPS_ALIASES: &[&str] = &[
    "healthyBackupPercentage",
    "healthyBackups",
    "HealthyBackupPercentage",
];

/// Known spellings of the inactive VM count field
pub const INACTIVE_VMS_ALIASES: &[&str] = &["inactiveVMs", "inactiveVms", "InactiveVMs"];

/// Normalized dashboard statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_vaults: u64,
    pub active_vms: u64,
    pub healthy_backup_percentage: String,
    pub inactive_vms: u64,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_vaults: 0,
            active_vms: 0,
            healthy_backup_percentage: "0%".to_string(),
            inactive_vms: 0,
        }
    }
}

impl DashboardStats {
    /// Build stats from the four raw statistic responses.
    pub fn from_responses(
        vault_count: &Value,
        active_vms: &Value,
        healthy_backups: &Value,
        inactive_vms: &Value,
    ) -> Self {
        Self {
            total_vaults: count_stat(vault_count, VAULT_COUNT_ALIASES),
            active_vms: count_stat(active_vms, ACTIVE_VMS_ALIASES),
            healthy_backup_percentage: percent_stat(healthy_backups, HEALTHY_BACKUPS_ALIASES),
            inactive_vms: count_stat(inactive_vms, INACTIVE_VMS_ALIASES),
        }
    }
}

fn first_alias<'a>(response: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    let object = response.as_object()?;
    aliases
        .iter()
        .find_map(|alias| object.get(*alias))
        .filter(|value| !value.is_null())
}

/// Count statistic: first matching alias, `0` when none match.
pub fn count_stat(response: &Value, aliases: &[&str]) -> u64 {
    match first_alias(response, aliases) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        // counts occasionally arrive as strings from older backends
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Percentage statistic: first matching alias re-rendered with exactly two
/// decimal digits, `"0%"` when none match.
pub fn percent_stat(response: &Value, aliases: &[&str]) -> String {
    match first_alias(response, aliases) {
        Some(value) => format_percent(value),
        None => "0%".to_string(),
    }
}

/// Re-render a percentage value with two decimals regardless of source
/// precision. Accepts numbers and strings with or without a `%` suffix.
pub fn format_percent(raw: &Value) -> String {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    };
    format!("{:.2}%", parsed.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vault_count_matches_every_observed_alias() {
        for body in [
            json!({"totalVaults": 5}),
            json!({"vaultCount": 5}),
            json!({"TotalVaults": 5}),
        ] {
            assert_eq!(count_stat(&body, VAULT_COUNT_ALIASES), 5);
        }
    }

    #[test]
    fn alias_order_picks_first_non_null() {
        let body = json!({"totalVaults": null, "vaultCount": 3});
        assert_eq!(count_stat(&body, VAULT_COUNT_ALIASES), 3);
    }

    #[test]
    fn missing_count_defaults_to_zero() {
        assert_eq!(count_stat(&json!({}), ACTIVE_VMS_ALIASES), 0);
        assert_eq!(count_stat(&Value::Null, ACTIVE_VMS_ALIASES), 0);
        assert_eq!(count_stat(&json!({"unrelated": 9}), ACTIVE_VMS_ALIASES), 0);
    }

    #[test]
    fn string_counts_from_older_backends_parse() {
        let body = json!({"inactiveVms": "4"});
        assert_eq!(count_stat(&body, INACTIVE_VMS_ALIASES), 4);
    }

    #[test]
    fn percent_renders_two_decimals() {
        assert_eq!(format_percent(&json!("87.5")), "87.50%");
        assert_eq!(format_percent(&json!(87.5)), "87.50%");
        assert_eq!(format_percent(&json!("87.5%")), "87.50%");
        assert_eq!(format_percent(&json!(100)), "100.00%");
    }

    #[test]
    fn missing_percent_defaults() {
        assert_eq!(percent_stat(&json!({}), HEALTHY_BACKUPS_ALIASES), "0%");
        assert_eq!(format_percent(&json!("garbage")), "0.00%");
    }

    #[test]
    fn stats_from_empty_responses_are_all_zero() {
        let empty = json!({});
        let stats = DashboardStats::from_responses(&empty, &empty, &empty, &empty);
        assert_eq!(stats.total_vaults, 0);
        assert_eq!(stats.active_vms, 0);
        assert_eq!(stats.inactive_vms, 0);
        assert_eq!(stats.healthy_backup_percentage, "0%");
    }

    #[test]
    fn mixed_alias_spellings_in_one_load() {
        let stats = DashboardStats::from_responses(
            &json!({"TotalVaults": 12}),
            &json!({"activeVms": 156}),
            &json!({"healthyBackups": "89"}),
            &json!({"inactiveVMs": 3}),
        );
        assert_eq!(stats.total_vaults, 12);
        assert_eq!(stats.active_vms, 156);
        assert_eq!(stats.healthy_backup_percentage, "89.00%");
        assert_eq!(stats.inactive_vms, 3);
    }
}
