//! Request-scoped PostgreSQL connections.
//!
//! A [`ConnectionManager`] knows how to reach the database. Each request gets
//! its own [`RequestConnection`], which opens a connection the first time it
//! is asked for one and reuses it until the scope ends.

use std::sync::Arc;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use crate::error::{StoreError, StoreResult};

/// Opens connections to the names database.
#[derive(Debug, Clone)]
pub struct ConnectionManager {
    options: PgConnectOptions,
}

impl ConnectionManager {
    /// Create a manager for the given connection options.
    #[must_use]
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// Open a fresh connection. No retries.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the database cannot be reached.
    pub async fn open(&self) -> StoreResult<PgConnection> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                tracing::warn!(
                    host = %self.options.get_host(),
                    port = self.options.get_port(),
                    error = %e,
                    "Failed to open database connection"
                );
                StoreError::Connection(e.to_string())
            })
    }
}

/// A lazily opened connection bound to one request scope.
///
/// Dropping the handle closes the socket even if [`close`](Self::close) was
/// never reached, so an early return cannot leak the connection past the
/// request.
#[derive(Debug)]
pub struct RequestConnection {
    manager: Arc<ConnectionManager>,
    conn: Option<PgConnection>,
}

impl RequestConnection {
    /// Create an unopened handle. Performs no I/O.
    #[must_use]
    pub fn new(manager: Arc<ConnectionManager>) -> Self {
        Self {
            manager,
            conn: None,
        }
    }

    /// Whether the underlying connection has been opened.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Return the scope's connection, opening it on first use.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the connection cannot be opened.
    pub async fn get(&mut self) -> StoreResult<&mut PgConnection> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => self.manager.open().await?,
        };
        Ok(self.conn.insert(conn))
    }

    /// Close the connection if one was opened.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the graceful shutdown fails. The
    /// connection is released either way.
    pub async fn close(&mut self) -> StoreResult<()> {
        match self.conn.take() {
            Some(conn) => conn
                .close()
                .await
                .map_err(|e| StoreError::Connection(e.to_string())),
            None => Ok(()),
        }
    }
}

impl Drop for RequestConnection {
    fn drop(&mut self) {
        if self.conn.is_some() {
            tracing::debug!("Request connection dropped without close");
        }
    }
}
