//! SQL Server monitoring commands: host list, oversized log files, database
//! sizes, per-server file listings, session diagnostics, collected backups
//! and the cost-threshold/parallelism drift view.

use monitor_core::Result;
use monitor_core::aggregate;
use monitor_core::export::{self, CsvExport};
use monitor_core::models::{BackupRecord, LargeLogFile, QueryAnalysisRecord};
use monitor_core::state::ViewState;
use std::path::PathBuf;
use tracing::info;

use crate::app::CliApp;
use crate::cli::SqlCommand;
use crate::render;

pub async fn run_sql_command(app: &CliApp, command: SqlCommand) -> Result<()> {
    match command {
        SqlCommand::Servers => run_servers(app).await,
        SqlCommand::LogFiles { search, export } => run_log_files(app, search, export).await,
        SqlCommand::DatabaseSizes { server } => run_database_sizes(app, &server).await,
        SqlCommand::ServerFiles { server, file_type } => {
            run_server_files(app, &server, &file_type).await
        }
        SqlCommand::QueryAnalysis { server } => run_query_analysis(app, &server).await,
        SqlCommand::Backups { search, export } => run_backups(app, search, export).await,
        SqlCommand::CostParallelism => run_cost_parallelism(app).await,
    }
}

async fn run_servers(app: &CliApp) -> Result<()> {
    info!("🖥️  SQL Server hosts");

    let hosts = app.api_client.server_hosts().await?;
    let sql_hosts: Vec<_> = hosts.iter().filter(|h| h.is_sql_host()).collect();

    let rows: Vec<Vec<String>> = sql_hosts
        .iter()
        .map(|h| vec![h.server_name.clone(), h.ip.clone(), h.tag.clone()])
        .collect();
    render::table(
        &["Server", "IP", "Tag"],
        &rows,
        "No HOST-SQL tagged servers registered",
    );
    info!(
        "   {} SQL hosts of {} registered servers",
        sql_hosts.len(),
        hosts.len()
    );

    Ok(())
}

fn log_file_row(file: &LargeLogFile) -> Vec<String> {
    vec![
        file.server_name.clone(),
        file.database_name.clone(),
        file.file_name.clone(),
        file.file_type.clone(),
        render::severity_badge(
            aggregate::log_size_severity(&file.total_size),
            &file.total_size,
        ),
        file.used_space.clone(),
        file.free_space.clone(),
        render::format_timestamp(&file.collected_at),
    ]
}

async fn run_log_files(
    app: &CliApp,
    search: Option<String>,
    export: Option<PathBuf>,
) -> Result<()> {
    let mut state = ViewState::new();
    if let Some(term) = search {
        state.set_search_term(term);
    }

    info!("📁 Oversized log files");

    let files = app.api_client.large_log_files().await?;
    let visible = state.visible_rows(&files);
    let rows: Vec<Vec<String>> = visible.iter().map(|f| log_file_row(f)).collect();
    render::table(
        LargeLogFile::headers(),
        &rows,
        "No oversized log files reported",
    );
    info!("   {} of {} files shown", visible.len(), files.len());

    if let Some(path) = export {
        export::write_csv(visible.iter().copied(), &path)?;
    }

    Ok(())
}

async fn run_database_sizes(app: &CliApp, server: &str) -> Result<()> {
    info!("📊 Largest databases on {server}");

    let sizes = app.api_client.database_sizes(server).await?;
    let top = aggregate::top_databases_by_size(&sizes);

    let rows: Vec<Vec<String>> = top
        .iter()
        .map(|entry| vec![entry.name.clone(), format!("{:.2} GB", entry.size_gb)])
        .collect();
    render::table(&["Database", "Size"], &rows, "No databases reported");
    info!("   Top {} of {} databases", top.len(), sizes.len());

    Ok(())
}

async fn run_server_files(app: &CliApp, server: &str, file_type: &str) -> Result<()> {
    let file_type = file_type.parse()?;

    info!("📁 Server files on {server}");

    let files = app.api_client.server_files(server, file_type).await?;
    let rows: Vec<Vec<String>> = files.iter().map(log_file_row).collect();
    render::table(LargeLogFile::headers(), &rows, "No files reported");

    Ok(())
}

/// Columns pulled out of the open query-analysis records. Missing or null
/// values render as the placeholder rather than failing the whole view.
const QUERY_COLUMNS: &[&str] = &[
    "session_id",
    "status",
    "dd hh:mm:ss.mss",
    "sql_text",
    "wait_info",
    "CPU",
    "reads",
    "writes",
    "host_name",
    "database_name",
];

async fn run_query_analysis(app: &CliApp, server: &str) -> Result<()> {
    info!("🔍 Query analysis for {server}");

    let response = app.api_client.query_analysis(server).await?;
    let latest = response
        .records
        .iter()
        .filter_map(QueryAnalysisRecord::collection_time)
        .max();
    info!("   Latest capture: {}", render::format_latest(latest));

    let rows: Vec<Vec<String>> = response
        .records
        .iter()
        .map(|record| {
            QUERY_COLUMNS
                .iter()
                .map(|key| render::truncate(&record.display(key), 60))
                .collect()
        })
        .collect();
    render::table(QUERY_COLUMNS, &rows, "No active sessions captured");
    info!("   {} session records", response.records.len());

    Ok(())
}

async fn run_backups(app: &CliApp, search: Option<String>, export: Option<PathBuf>) -> Result<()> {
    let mut state = ViewState::new();
    if let Some(term) = search {
        state.set_search_term(term);
    }

    info!("💾 Collected database backups");

    let response = app.api_client.backup_collection().await?;
    let visible = state.visible_rows(&response.backups);
    let rows: Vec<Vec<String>> = visible
        .iter()
        .map(|b| {
            vec![
                b.server_name.clone(),
                b.database_name.clone(),
                b.backup_type.clone(),
                render::format_timestamp(&b.backup_start_date),
                render::format_timestamp(&b.backup_finish_date),
                format!("{:.0}", b.duration_minutes),
                b.backup_location.clone(),
                b.storage_account.clone(),
                b.container.clone(),
            ]
        })
        .collect();
    render::table(
        BackupRecord::headers(),
        &rows,
        "No backup runs match the current filters",
    );
    info!(
        "   {} of {} backup runs shown",
        visible.len(),
        response.backups.len()
    );

    if let Some(path) = export {
        export::write_csv(visible.iter().copied(), &path)?;
    }

    Ok(())
}

async fn run_cost_parallelism(app: &CliApp) -> Result<()> {
    info!("⚙️  Cost threshold / max degree of parallelism");

    let settings = app.api_client.cost_parallelism().await?;
    let rows: Vec<Vec<String>> = settings
        .iter()
        .map(|s| {
            let status = if s.is_in_sync() {
                "🟢 Synchronized".to_string()
            } else {
                "🔴 Out of sync".to_string()
            };
            vec![
                s.server_name.clone(),
                s.setting_name.clone(),
                s.configured_value.to_string(),
                s.running_value.to_string(),
                status,
            ]
        })
        .collect();
    render::table(
        &["Server", "Setting", "Configured", "Running", "Status"],
        &rows,
        "No parallelism settings reported",
    );

    let drifted = settings.iter().filter(|s| !s.is_in_sync()).count();
    if drifted > 0 {
        info!("   ⚠️  {drifted} settings have configured/running drift");
    }

    Ok(())
}
