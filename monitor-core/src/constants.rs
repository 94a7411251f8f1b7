/// Backend API constants
pub mod api {
    /// Default monitoring backend address
    pub const DEFAULT_BASE_URL: &str = "http://localhost:33411";

    /// Query parameter carrying the server-side subscription scope.
    /// Omitted entirely when the filter is "all"; never sent empty.
    pub const SUBSCRIPTION_PARAM: &str = "subscriptionName";

    /// Query parameter selecting log vs. row files on the server-files endpoint
    pub const FILE_TYPE_PARAM: &str = "fileType";

    /// API endpoint paths.
    /// Mixed-case path prefixes match the backend routes as deployed.
    pub mod endpoints {
        /// Vault summary (resource-group total + per-location counts)
        pub const VAULT_SUMMARY: &str = "/api/Monitoring/vaultsummary";

        /// Recovery vault rows
        pub const RECOVERY_VAULTS: &str = "/api/monitoring/recoveryvaults";

        /// Vault count statistic
        pub const VAULT_COUNT: &str = "/api/monitoring/vaultcount";

        /// Active VM count statistic
        pub const ACTIVE_VMS: &str = "/api/monitoring/activevms";

        /// Healthy backup percentage statistic
        pub const HEALTHY_BACKUPS: &str = "/api/monitoring/healthybackups";

        /// Inactive VM count statistic
        pub const INACTIVE_VMS: &str = "/api/monitoring/inactivevms";

        /// Inactive VM detail rows
        pub const INACTIVE_VM_DETAILS: &str = "/api/Monitoring/inactivevm/details";

        /// All backup items
        pub const BACKUP_ITEMS: &str = "/api/Monitoring/backup-items";

        /// Backup items scoped to one subscription (name appended as path segment)
        pub const BACKUP_ITEMS_BY_SUBSCRIPTION: &str = "/api/Monitoring/backup-items/subscription";

        /// Distinct subscription names
        pub const SUBSCRIPTIONS: &str = "/api/Monitoring/backup-items/subscriptions";

        /// All VM CPU usages
        pub const VM_USAGES: &str = "/api/Monitoring/VMusages";

        /// Large log files requiring attention
        pub const LARGE_LOG_FILES: &str = "/api/Monitoring/large-log-files";

        /// Registered server hosts (all tags)
        pub const SERVER_HOSTS: &str = "/api/Database/getallips";

        /// Database sizes for one server (name appended as path segment)
        pub const DATABASE_SIZES: &str = "/api/SQLServer/databasesizes";

        /// Log/row files for one server (name appended as path segment)
        pub const SERVER_FILES: &str = "/api/Monitoring/server";

        /// Query analysis for one server (name appended as path segment)
        pub const QUERY_ANALYSIS: &str = "/api/Database";

        /// Collected SQL backup records
        pub const BACKUP_COLLECTION: &str = "/api/BackupUpload/collect";

        /// Cost threshold / max degree of parallelism settings
        pub const COST_PARALLELISM: &str = "/api/Monitoring/costParallelism";
    }
}

/// Severity thresholds used by the aggregation layer
pub mod thresholds {
    /// CPU usage at or above this is flagged high
    pub const CPU_HIGH: f64 = 80.0;

    /// CPU usage at or above this is flagged elevated
    pub const CPU_ELEVATED: f64 = 60.0;

    /// Log file size (GB) at or above this is flagged critical
    pub const LOG_SIZE_CRITICAL_GB: f64 = 10.0;

    /// Log file size (GB) at or above this is flagged elevated
    pub const LOG_SIZE_ELEVATED_GB: f64 = 7.0;
}

/// View-layer limits
pub mod view {
    /// Rows shown in the recent-activity panel
    pub const RECENT_ACTIVITY_LIMIT: usize = 6;

    /// Databases shown in the top-databases-by-size view
    pub const TOP_DATABASES_LIMIT: usize = 10;
}

/// SQL host discovery
pub mod sql {
    /// Tag marking a registered host as a SQL Server instance
    pub const HOST_TAG: &str = "HOST-SQL";
}

/// Display settings persistence
pub mod settings {
    /// Settings file candidates, checked in order
    pub const FILE_CANDIDATES: &[&str] = &["settings.toml", "azops.toml", ".azops.toml"];

    /// File written when no settings file exists yet
    pub const DEFAULT_FILE: &str = "settings.toml";

    /// Theme applied before any settings file is saved
    pub const DEFAULT_THEME: &str = "dark";
}
