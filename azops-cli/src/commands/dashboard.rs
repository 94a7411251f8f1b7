//! Dashboard overview command: stat cards, vault summary, backup health and
//! the recent-activity panel for one subscription scope.

use monitor_core::Result;
use monitor_core::overview;
use monitor_core::state::{SubscriptionFilter, ViewState};
use tracing::info;

use crate::app::CliApp;
use crate::render;

pub async fn run_dashboard(app: &CliApp, subscription: Option<&str>) -> Result<()> {
    let mut state = ViewState::new();
    state.set_subscription(SubscriptionFilter::from_selection(subscription));

    info!("📊 Dashboard overview ({})", state.subscription());
    info!("");

    state.begin_fetch();
    let overview = overview::load_overview(&app.api_client, state.subscription()).await;
    state.finish_fetch();

    info!("🔢 Stats:");
    info!("   Total vaults:       {}", overview.stats.total_vaults);
    info!("   Active VMs:         {}", overview.stats.active_vms);
    info!(
        "   Healthy backups:    {}",
        overview.stats.healthy_backup_percentage
    );
    info!("   Inactive VMs:       {}", overview.stats.inactive_vms);
    info!("");

    info!("🗄️  Vault summary:");
    info!(
        "   Resource groups:    {}",
        overview.vault_summary.total_resource_groups
    );
    info!("   Subscriptions:      {}", overview.unique_subscriptions());
    for stat in &overview.vault_summary.location_stats {
        info!("   {:<18}  {} vaults", stat.location, stat.vault_count);
    }
    if overview.vault_summary.location_stats.is_empty() {
        for (location, count) in overview.vaults_by_location() {
            info!("   {location:<18}  {count} vaults");
        }
    }
    info!("");

    info!("💚 Backup health ({} counted):", overview.health.counted());
    info!("   🟢 Healthy:  {}", overview.health.healthy);
    info!("   🟡 Warning:  {}", overview.health.warning);
    info!("   🔴 Failed:   {}", overview.health.failed);
    info!("");

    if !overview.subscriptions.is_empty() {
        info!("📋 Subscriptions: {}", overview.subscriptions.join(", "));
        info!("");
    }

    info!("🕒 Recent activity:");
    if overview.activity.is_empty() {
        info!("   No recent backup activity");
    }
    for item in &overview.activity {
        info!(
            "   {} {} ({}, {})",
            render::activity_marker(item.status),
            item.message,
            item.source,
            render::format_timestamp(&item.timestamp)
        );
    }

    Ok(())
}
