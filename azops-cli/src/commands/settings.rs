//! Display settings commands plus the endpoint-info view.

use monitor_core::Result;
use monitor_core::settings::{self, DisplaySettings};
use tracing::info;

use crate::app::CliApp;
use crate::cli::SettingsCommand;

pub fn run_settings_command(app: &mut CliApp, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            info!("🎨 Display settings");
            info!("   Theme:      {}", app.settings.theme);
            info!("   Mode:       {}", app.settings.mode);
            info!("   Background: {}", app.settings.background);
            info!("   Panel:      {}", app.settings.panel);
            info!("   Sidebar:    {}", app.settings.sidebar);
            Ok(())
        }
        SettingsCommand::Themes => {
            info!("🎨 Available themes");
            for theme in settings::THEMES {
                let marker = if theme.id == app.settings.theme {
                    "●"
                } else {
                    " "
                };
                info!(
                    "   {marker} {:<14} {:<14} {}",
                    theme.id, theme.name, theme.description
                );
            }
            Ok(())
        }
        SettingsCommand::Set { theme } => {
            app.settings.apply_theme(&theme)?;
            app.settings.save()?;
            info!("✅ Theme set to {theme}");
            Ok(())
        }
        SettingsCommand::Reset => {
            app.settings.reset();
            app.settings.save()?;
            info!("✅ Settings reset to {}", DisplaySettings::default().theme);
            Ok(())
        }
    }
}

pub fn run_api_info(app: &CliApp) -> Result<()> {
    info!("🌐 Backend endpoints");
    for (label, url) in app.api_client.config().endpoints_info() {
        info!("   {label:<22} {url}");
    }
    Ok(())
}
