mod backup_items;
mod dashboard;
mod inactive_vms;
mod settings;
mod sql;
mod vaults;
mod vm_usage;

// Dashboard overview
pub use dashboard::run_dashboard;

// Table views
pub use backup_items::run_backup_items;
pub use inactive_vms::run_inactive_vms;
pub use vaults::run_vaults;
pub use vm_usage::run_vm_usage;

// SQL Server monitoring
pub use sql::run_sql_command;

// Display settings and endpoint info
pub use settings::{run_api_info, run_settings_command};
