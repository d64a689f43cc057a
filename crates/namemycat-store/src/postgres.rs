//! PostgreSQL backend.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;

use namemycat_core::{Name, NameId};

use crate::connection::{ConnectionManager, RequestConnection};
use crate::error::StoreResult;
use crate::schema;
use crate::{NameSession, NameStore};

/// Row shape returned by `INSERT ... RETURNING` and lookups.
#[derive(Debug, sqlx::FromRow)]
struct NameRow {
    id: i32,
    name: Option<String>,
}

impl From<NameRow> for Name {
    fn from(row: NameRow) -> Self {
        Name::new(NameId::new(row.id), row.name.unwrap_or_default())
    }
}

/// Names stored in PostgreSQL, one connection per session.
#[derive(Debug, Clone)]
pub struct PgStore {
    manager: Arc<ConnectionManager>,
}

impl PgStore {
    /// Create a store that connects with `options`. Performs no I/O.
    #[must_use]
    pub fn new(options: PgConnectOptions) -> Self {
        Self {
            manager: Arc::new(ConnectionManager::new(options)),
        }
    }
}

impl NameStore for PgStore {
    fn session(&self) -> Box<dyn NameSession> {
        Box::new(PgSession {
            conn: RequestConnection::new(Arc::clone(&self.manager)),
        })
    }
}

/// A request scope over a lazily opened PostgreSQL connection.
#[derive(Debug)]
pub struct PgSession {
    conn: RequestConnection,
}

#[async_trait]
impl NameSession for PgSession {
    async fn init_schema(&mut self) -> StoreResult<()> {
        let conn = self.conn.get().await?;
        sqlx::query(schema::CREATE_NAMES).execute(conn).await?;
        tracing::debug!("names table ready");
        Ok(())
    }

    async fn random_name(&mut self) -> StoreResult<Option<String>> {
        let conn = self.conn.get().await?;
        let row: Option<Option<String>> = sqlx::query_scalar(schema::SELECT_RANDOM_NAME)
            .fetch_optional(conn)
            .await?;
        Ok(row.flatten())
    }

    async fn insert_name(&mut self, value: &str) -> StoreResult<Name> {
        let conn = self.conn.get().await?;
        let row: NameRow = sqlx::query_as(schema::INSERT_NAME)
            .bind(value)
            .fetch_one(conn)
            .await?;
        Ok(row.into())
    }

    async fn find_by_value(&mut self, value: &str) -> StoreResult<Vec<Name>> {
        let conn = self.conn.get().await?;
        let rows: Vec<NameRow> = sqlx::query_as(schema::SELECT_BY_VALUE)
            .bind(value)
            .fetch_all(conn)
            .await?;
        Ok(rows.into_iter().map(Name::from).collect())
    }

    async fn close(&mut self) -> StoreResult<()> {
        self.conn.close().await
    }
}
