//! Farm Records Server - Main entry point

use anyhow::{Context, Result};
use farm_common::logging::{init_logging, LogConfig};
use tracing::info;

use farm_server::{api, config::Config, db};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("farm-server")
        .filter_directives("farm_server=debug,farm_common=debug,tower_http=debug,sqlx=info")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    info!("Starting farm records server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let pool = db::create_pool(&config.database)
        .await
        .context("Failed to connect to the database")?;
    info!("Database connection pool established");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    info!("Database migrations completed");

    api::serve(pool, config).await
}
