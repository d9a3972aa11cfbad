//! Database pool and transaction scope

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::DatabaseConfig;

pub mod transaction;

pub use transaction::ScopedTransaction;

/// Connect a pool using the configured limits
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options(config).connect(&config.url).await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

/// Pool settings shared by the eager and lazy constructors
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
}

pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_pool_options_connect_lazily() {
        let config = Config::default();
        let pool = pool_options(&config.database)
            .connect_lazy(&config.database.url)
            .unwrap();
        assert_eq!(pool.options().get_max_connections(), config.database.max_connections);
        assert_eq!(pool.options().get_min_connections(), config.database.min_connections);
    }
}
