//! Recovery vault table: scoped fetch, local search and optional CSV export.

use monitor_core::Result;
use monitor_core::export::{self, CsvExport};
use monitor_core::models::RecoveryVault;
use monitor_core::state::{SubscriptionFilter, ViewState};
use std::path::PathBuf;
use tracing::info;

use crate::app::CliApp;
use crate::render;

pub async fn run_vaults(
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

    info!("🗄️  Recovery vaults ({})", state.subscription());

    state.begin_fetch();
    let vaults = app
        .api_client
        .recovery_vaults(state.subscription().query_value())
        .await?;
    state.finish_fetch();

    let visible = state.visible_rows(&vaults);
    let rows: Vec<Vec<String>> = visible.iter().map(|v| v.row()).collect();
    render::table(
        RecoveryVault::headers(),
        &rows,
        "No vaults match the current filters",
    );
    info!("   {} of {} vaults shown", visible.len(), vaults.len());

    if let Some(path) = export {
        export::write_csv(visible.iter().copied(), &path)?;
    }

    Ok(())
}
