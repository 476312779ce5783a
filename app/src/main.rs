use anyhow::{Context, bail};
use clap::Parser;
use tokio::net::TcpListener;
use vigilance::cli::Cli;
use vigilance::config::{self, ConfigLoadResult};
use vigilance::state::AppState;
use vigilance::{api, logger, setup};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut app_config = match config::load_config(cli.config.as_deref()) {
        ConfigLoadResult::Success(config) => *config,
        ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
            bail!(msg);
        }
    };
    app_config.apply_overrides(cli.port, cli.storage_root.clone());

    if let Err(errors) = app_config.validate() {
        for error in &errors {
            eprintln!("{}\n", error.user_message());
        }
        bail!("Configuration validation failed with {} error(s)", errors.len());
    }

    logger::setup_logger(app_config.logging()).context("Failed to initialize logger")?;

    let storage_root = app_config.storage().root();
    if cli.no_seed {
        log::info!("Skipping default theme installation");
    } else {
        let written = setup::seed_default_themes(storage_root)
            .context("Failed to install default themes")?;
        log::info!("Installed {written} default theme(s)");
    }

    let state = AppState::from_config(&app_config).context("Failed to initialize services")?;
    let router = api::router(state, app_config.cors());

    let address = app_config.server().bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    log::info!(
        "Starting Vigilance backend on http://{address} (storage root: {})",
        storage_root.display()
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Vigilance backend stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
