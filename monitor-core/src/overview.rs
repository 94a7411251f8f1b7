//! Dashboard overview load: the startup batch that feeds the summary cards,
//! health chart, location grouping and recent-activity panel.
//!
//! All constituent fetches for one load are issued together and the result
//! is assembled only after every one has settled; a failed fetch degrades
//! that slice to its empty default (with a notification) while the rest of
//! the overview still renders. Nothing here cancels in-flight requests: a
//! load superseded by a rapid filter change simply loses the write race.

use crate::aggregate::{self, ActivityItem, HealthBreakdown};
use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{BackupItem, RecoveryVault, VaultSummary};
use crate::normalize::DashboardStats;
use crate::state::SubscriptionFilter;
use serde_json::Value;
use tracing::warn;

/// Everything the dashboard landing view binds to
#[derive(Debug, Clone, Default)]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub vaults: Vec<RecoveryVault>,
    pub vault_summary: VaultSummary,
    pub backup_items: Vec<BackupItem>,
    pub subscriptions: Vec<String>,
    pub health: HealthBreakdown,
    pub activity: Vec<ActivityItem>,
}

impl DashboardOverview {
    /// Assemble the derived slices from the fetched collections.
    pub fn from_parts(
        stats: DashboardStats,
        vaults: Vec<RecoveryVault>,
        vault_summary: VaultSummary,
        backup_items: Vec<BackupItem>,
        subscriptions: Vec<String>,
    ) -> Self {
        let health = aggregate::health_breakdown(&backup_items);
        let activity = aggregate::recent_activity(&backup_items);
        Self {
            stats,
            vaults,
            vault_summary,
            backup_items,
            subscriptions,
            health,
            activity,
        }
    }

    /// Vaults grouped by location, first-seen order
    pub fn vaults_by_location(&self) -> Vec<(String, usize)> {
        aggregate::count_by_key(&self.vaults, |v| &v.location)
    }

    /// Distinct subscription count across the held vaults
    pub fn unique_subscriptions(&self) -> usize {
        aggregate::unique_count(&self.vaults, |v| &v.subscription_name)
    }

    /// Distinct resource-group count across the held vaults
    pub fn unique_resource_groups(&self) -> usize {
        aggregate::unique_count(&self.vaults, |v| &v.resource_group_name)
    }
}

fn or_empty_value(result: Result<Value>, resource: &str) -> Value {
    result.unwrap_or_else(|err| {
        warn!("{resource} unavailable, showing zero: {err}");
        Value::Null
    })
}

fn or_default<T: Default>(result: Result<T>, resource: &str) -> T {
    result.unwrap_or_else(|err| {
        warn!("{resource} unavailable, keeping view empty: {err}");
        T::default()
    })
}

/// Load the dashboard overview for one subscription scope.
///
/// The eight constituent fetches fire concurrently and the overview is
/// built only once all of them have settled.
pub async fn load_overview(client: &ApiClient, filter: &SubscriptionFilter) -> DashboardOverview {
    let scope = filter.query_value();

    let (vault_count, active_vms, healthy, inactive, vaults, summary, items, subscriptions) = tokio::join!(
        client.vault_count(scope),
        client.active_vms_count(scope),
        client.healthy_backup_percentage(scope),
        client.inactive_vms_count(scope),
        client.recovery_vaults(scope),
        client.vault_summary(scope),
        async {
            match scope {
                Some(name) => client.backup_items_by_subscription(name).await,
                None => client.backup_items().await,
            }
        },
        client.distinct_subscriptions(),
    );

    let stats = DashboardStats::from_responses(
        &or_empty_value(vault_count, "vault count"),
        &or_empty_value(active_vms, "active VMs count"),
        &or_empty_value(healthy, "healthy backup percentage"),
        &or_empty_value(inactive, "inactive VMs count"),
    );

    DashboardOverview::from_parts(
        stats,
        or_default(vaults, "recovery vaults"),
        or_default(summary, "vault summary"),
        or_default(items, "backup items"),
        or_default(subscriptions, "subscriptions"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_backend_yields_zeroed_overview() {
        let overview = DashboardOverview::from_parts(
            DashboardStats::default(),
            Vec::new(),
            VaultSummary::default(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(overview.stats.total_vaults, 0);
        assert_eq!(overview.stats.healthy_backup_percentage, "0%");
        assert_eq!(overview.health.counted(), 0);
        assert!(overview.activity.is_empty());
        assert!(overview.vaults_by_location().is_empty());
        assert_eq!(overview.unique_subscriptions(), 0);
    }

    #[test]
    fn derived_slices_follow_fetched_rows() {
        let vaults = vec![
            RecoveryVault {
                vault_name: "vault-east-1".into(),
                resource_group_name: "rg-a".into(),
                location: "East US".into(),
                subscription_name: "Prod-Infra".into(),
            },
            RecoveryVault {
                vault_name: "vault-east-2".into(),
                resource_group_name: "rg-b".into(),
                location: "East US".into(),
                subscription_name: "DevOps".into(),
            },
            RecoveryVault {
                vault_name: "vault-west-1".into(),
                resource_group_name: "rg-a".into(),
                location: "West Europe".into(),
                subscription_name: "Prod-Infra".into(),
            },
        ];
        let overview = DashboardOverview::from_parts(
            DashboardStats::default(),
            vaults,
            VaultSummary::default(),
            Vec::new(),
            vec!["Prod-Infra".into(), "DevOps".into()],
        );
        assert_eq!(
            overview.vaults_by_location(),
            vec![("East US".to_string(), 2), ("West Europe".to_string(), 1)]
        );
        assert_eq!(overview.unique_subscriptions(), 2);
        assert_eq!(overview.unique_resource_groups(), 2);
    }
}
