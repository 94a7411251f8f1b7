use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SQL Server monitoring commands
#[derive(Subcommand, Debug)]
pub enum SqlCommand {
    /// List registered SQL Server hosts (HOST-SQL tagged)
    Servers,
    /// Show log files the backend flags as oversized
    LogFiles {
        /// Filter rows by a search term
        #[arg(long)]
        search: Option<String>,
        /// Export the visible rows to a CSV file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
    /// Top 10 largest databases on one server
    DatabaseSizes {
        /// SQL Server host name
        server: String,
    },
    /// Log or row files for one server
    ServerFiles {
        /// SQL Server host name
        server: String,
        /// File type to list: log or row
        #[arg(long, default_value = "log")]
        file_type: String,
    },
    /// Live session diagnostics for one server
    QueryAnalysis {
        /// SQL Server host name
        server: String,
    },
    /// Collected database backup runs
    Backups {
        /// Filter rows by a search term
        #[arg(long)]
        search: Option<String>,
        /// Export the visible rows to a CSV file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
    /// Cost threshold / max degree of parallelism drift per server
    CostParallelism,
}

/// Display settings commands
#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show the active display settings
    Show,
    /// List the built-in theme presets
    Themes,
    /// Apply a theme preset and save it
    Set {
        /// Theme id, e.g. dark, light, saffron
        theme: String,
    },
    /// Reset to the default theme and save
    Reset,
}

/// AzureOps Monitor - Azure backup, vault and SQL Server dashboard
#[derive(Parser)]
#[command(name = "azops-cli")]
#[command(about = "Centralized view of Azure Backup, vault health and SQL Server monitoring")]
#[command(version)]
pub struct Cli {
    /// Backend base URL override
    #[arg(long, env = "AZOPS_BASE_URL")]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dashboard overview: stats, vault summary, health and recent activity
    Dashboard {
        /// Scope to one subscription (default: all)
        #[arg(long)]
        subscription: Option<String>,
    },
    /// Recovery vault table
    Vaults {
        /// Scope to one subscription (default: all)
        #[arg(long)]
        subscription: Option<String>,
        /// Filter rows by a search term
        #[arg(long)]
        search: Option<String>,
        /// Export the visible rows to a CSV file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
    /// Backup item table across subscriptions
    BackupItems {
        /// Scope to one subscription (default: all)
        #[arg(long)]
        subscription: Option<String>,
        /// Filter rows by a search term
        #[arg(long)]
        search: Option<String>,
        /// Export the visible rows to a CSV file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
    /// VMs the backend reports as inactive
    InactiveVms {
        /// Scope to one subscription (default: all)
        #[arg(long)]
        subscription: Option<String>,
        /// Filter rows by a search term
        #[arg(long)]
        search: Option<String>,
        /// Export the visible rows to a CSV file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
    /// Max CPU usage per VM
    VmUsage {
        /// Scope to one subscription (default: all)
        #[arg(long)]
        subscription: Option<String>,
        /// Filter rows by a search term
        #[arg(long)]
        search: Option<String>,
        /// Export the visible rows to a CSV file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
    /// SQL Server monitoring views
    #[command(subcommand)]
    Sql(SqlCommand),
    /// Display settings (theme presets)
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Show the backend endpoint configuration
    ApiInfo,
}
