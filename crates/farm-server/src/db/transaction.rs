//! Scoped transactions for multi-step writes
//!
//! ```rust,ignore
//! let mut scope = ScopedTransaction::begin(&pool, "create feed record").await?;
//! let outcome = insert_feed(scope.conn(), &command).await;
//! scope.finish(outcome).await
//! ```
//!
//! `finish` commits on `Ok` and rolls back on `Err`. Domain errors come back
//! unchanged; anything else is logged and replaced with
//! `Internal("Failed to <operation>")`. If the scope is dropped without
//! `finish`, sqlx rolls the transaction back when the connection is
//! returned to the pool.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::error::{AppError, AppResult};

pub struct ScopedTransaction {
    tx: Transaction<'static, Postgres>,
    operation: &'static str,
}

impl ScopedTransaction {
    /// Acquire a connection and open a transaction. `operation` names the
    /// work for logs and for the client-facing failure message.
    pub async fn begin(pool: &PgPool, operation: &'static str) -> AppResult<Self> {
        let tx = pool.begin().await?;
        tracing::debug!(operation, "Transaction started");
        Ok(Self { tx, operation })
    }

    /// Connection to run the scoped statements on
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commit or roll back according to `outcome`
    pub async fn finish<T>(self, outcome: AppResult<T>) -> AppResult<T> {
        let Self { tx, operation } = self;

        match outcome {
            Ok(value) => match tx.commit().await {
                Ok(()) => {
                    tracing::debug!(operation, "Transaction committed");
                    Ok(value)
                },
                Err(e) => Err(settle(operation, AppError::Database(e))),
            },
            Err(error) => {
                if let Err(e) = tx.rollback().await {
                    tracing::error!(operation, error = %e, "Transaction rollback failed");
                }
                tracing::debug!(operation, "Transaction rolled back");
                Err(settle(operation, error))
            },
        }
    }
}

/// Decide what the client sees after a rollback
fn settle(operation: &'static str, error: AppError) -> AppError {
    if error.is_domain() {
        return error;
    }

    tracing::error!(operation, error = %error, "Failed to {}", operation);
    AppError::Internal(format!("Failed to {}", operation))
}
