use monitor_core::api::ApiClient;
use monitor_core::api_config::ApiConfig;
use monitor_core::error::Result;
use monitor_core::settings::DisplaySettings;

use crate::cli::Commands;
use crate::commands;

pub struct CliApp {
    pub api_client: ApiClient,
    pub settings: DisplaySettings,
}

impl CliApp {
    /// Initialize the app: display settings are read once here; the API
    /// client points at the default backend unless overridden.
    pub fn new(base_url: Option<String>) -> Self {
        let config = match base_url {
            Some(url) => ApiConfig::with_base_url(url),
            None => ApiConfig::default(),
        };
        Self {
            api_client: ApiClient::new(config),
            settings: DisplaySettings::find_and_load(),
        }
    }

    pub async fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Dashboard { subscription } => {
                commands::run_dashboard(self, subscription.as_deref()).await
            }
            Commands::Vaults {
                subscription,
                search,
                export,
            } => commands::run_vaults(self, subscription.as_deref(), search, export).await,
            Commands::BackupItems {
                subscription,
                search,
                export,
            } => commands::run_backup_items(self, subscription.as_deref(), search, export).await,
            Commands::InactiveVms {
                subscription,
                search,
                export,
            } => commands::run_inactive_vms(self, subscription.as_deref(), search, export).await,
            Commands::VmUsage {
                subscription,
                search,
                export,
            } => commands::run_vm_usage(self, subscription.as_deref(), search, export).await,
            Commands::Sql(sql_cmd) => commands::run_sql_command(self, sql_cmd).await,
            Commands::Settings(settings_cmd) => {
                commands::run_settings_command(self, settings_cmd)
            }
            Commands::ApiInfo => commands::run_api_info(self),
        }
    }
}
