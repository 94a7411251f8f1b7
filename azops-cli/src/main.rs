use azops_cli::{Cli, CliApp, setup_logging};
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut app = CliApp::new(cli.base_url);

    if let Err(e) = app.run(cli.command).await {
        error!("❌ Operation failed: {}", e);
        std::process::exit(1);
    }
}
