use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use agency_common::{ClientDirectory, Config};

mod components;
mod export;
mod meta;
mod routes;
mod shell;
mod templates;

use components::SiteSettings;
use routes::AppState;

#[derive(Parser)]
#[command(name = "web", about = "Agency marketing site and client directory")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site over HTTP (default)
    Serve,
    /// Pre-render every page into a static directory
    Export {
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("agency_web=info".parse()?)
                .add_directive("agency_common=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let state = AppState {
        directory: ClientDirectory::load(&config.data_path)?,
        site: SiteSettings::from_config(&config),
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(state, &config).await,
        Command::Export { out } => {
            export::export_site(&state, &config.assets_dir, &out)?;
            Ok(())
        }
    }
}

async fn serve(state: AppState, config: &Config) -> Result<()> {
    let app = routes::build_router(Arc::new(state), &config.assets_dir);

    let addr = config.bind_addr();
    info!("{} web server starting on {addr}", config.site_name);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
