//! Max CPU usage per VM, with severity badges and the latest capture time.

use monitor_core::Result;
use monitor_core::aggregate;
use monitor_core::export::{self, CsvExport};
use monitor_core::models::VmUsage;
use monitor_core::state::{SubscriptionFilter, ViewState};
use std::path::PathBuf;
use tracing::info;

use crate::app::CliApp;
use crate::render;

pub async fn run_vm_usage(
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

    info!("📈 VM CPU usage ({})", state.subscription());

    state.begin_fetch();
    let usages = match state.subscription().query_value() {
        Some(name) => app.api_client.vm_usages_by_subscription(name).await?,
        None => app.api_client.vm_usages().await?,
    };
    state.finish_fetch();

    let latest = aggregate::latest_timestamp(&usages, |u| &u.time_generated);
    info!("   Latest capture: {}", render::format_latest(latest));

    let visible = state.visible_rows(&usages);
    let rows: Vec<Vec<String>> = visible
        .iter()
        .map(|u| {
            vec![
                u.computer.clone(),
                u.subscription_name.clone(),
                render::severity_badge(
                    aggregate::cpu_severity(u.max_cpu_usage),
                    &format!("{:.2}%", u.max_cpu_usage),
                ),
                render::format_timestamp(&u.time_generated),
            ]
        })
        .collect();
    render::table(
        VmUsage::headers(),
        &rows,
        "No VM usage samples match the current filters",
    );
    info!("   {} of {} VMs shown", visible.len(), usages.len());

    if let Some(path) = export {
        export::write_csv(visible.iter().copied(), &path)?;
    }

    Ok(())
}
