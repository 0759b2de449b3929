//! Arena client binary.
//!
//! Composition root: loads configuration, sets up logging, builds the
//! runtime and the frontend, and hands both to [`arena_client::Client`].
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use arena_client::Client;
    use client_bootstrap::{RuntimeBuilder, RuntimeConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (guard flushes the log file on drop)
    let _log_guard = logging::setup_logging(&runtime_config.session_id)?;

    tracing::info!("Starting arena client");
    tracing::info!(
        base_url = %runtime_config.content.base_url,
        timeout_secs = runtime_config.content.timeout.as_secs(),
        monster_turn_delay_ms = runtime_config.monster_turn_delay.as_millis() as u64,
        seeded = runtime_config.seed.is_some(),
        "runtime configuration"
    );

    // 3. Build Runtime (independent layer)
    let setup = RuntimeBuilder::new(runtime_config).build().await?;
    tracing::info!("Runtime built successfully");

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run Client (composition layer)
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
