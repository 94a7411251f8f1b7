//! Backup item table across subscriptions, with status and precheck badges.

use monitor_core::Result;
use monitor_core::export::{self, CsvExport};
use monitor_core::models::BackupItem;
use monitor_core::state::{SubscriptionFilter, ViewState};
use std::path::PathBuf;
use tracing::info;

use crate::app::CliApp;
use crate::render;

fn display_row(item: &BackupItem) -> Vec<String> {
    vec![
        item.vm_name.clone(),
        item.vault_name.clone(),
        item.resource_group.clone(),
        item.subscription_name.clone(),
        render::precheck_badge(&item.backup_pre_check),
        render::status_badge(&item.last_backup_status),
        render::format_timestamp(&item.latest_restore_point),
        item.policy_name.clone(),
        item.policy_sub_type.clone(),
    ]
}

pub async fn run_backup_items(
    app: &CliApp,
    subscription: Option<&str>,
    search: Option<String>,
    export: Option<PathBuf>,
) -> Result<()> {
    let mut state = ViewState::new();
    state.set_subscription(SubscriptionFilter::from_selection(subscription));
    if let Some(term) = search {
        state.set_search_term(term);
    }

    info!("💾 Backup items ({})", state.subscription());

    state.begin_fetch();
    let items = match state.subscription().query_value() {
        Some(name) => app.api_client.backup_items_by_subscription(name).await?,
        None => app.api_client.backup_items().await?,
    };
    state.finish_fetch();

    let visible = state.visible_rows(&items);
    let rows: Vec<Vec<String>> = visible.iter().map(|item| display_row(item)).collect();
    render::table(
        BackupItem::headers(),
        &rows,
        "No backup items match the current filters",
    );
    info!("   {} of {} items shown", visible.len(), items.len());

    if let Some(path) = export {
        export::write_csv(visible.iter().copied(), &path)?;
    }

    Ok(())
}
