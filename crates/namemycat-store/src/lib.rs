//! Storage layer for namemycat.
//!
//! This crate owns the `names` table and the two operations the site is built
//! on: picking a random name and submitting a new one.
//!
//! # Architecture
//!
//! Storage is split into a factory and a session:
//!
//! - [`NameStore`] hands out one [`NameSession`] per request scope without any I/O.
//! - [`NameSession`] issues the statements. The PostgreSQL session opens its
//!   connection on first use and closes it when the scope ends.
//!
//! Two backends are provided: [`PgStore`] for production and [`MemoryStore`]
//! for tests and local demos.
//!
//! # Example
//!
//! ```no_run
//! use namemycat_store::{names, DatabaseConfig, NameStore, PgStore};
//!
//! # async fn run() {
//! let store = PgStore::new(DatabaseConfig::default().connect_options());
//! let mut session = store.session();
//!
//! let submitted = names::submit_name(session.as_mut(), "Rogue").await;
//! assert!(submitted.is_ok());
//!
//! let picked = names::get_random_name(session.as_mut()).await;
//! session.close().await.ok();
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod connection;
pub mod error;
pub mod memory;
pub mod names;
pub mod postgres;
pub mod schema;

pub use config::DatabaseConfig;
pub use connection::{ConnectionManager, RequestConnection};
pub use error::{StoreError, StoreResult, SubmitError};
pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use namemycat_core::Name;

/// Factory for request-scoped storage sessions.
pub trait NameStore: Send + Sync {
    /// Start a session for one request scope.
    ///
    /// No connection is opened until the session is first used.
    fn session(&self) -> Box<dyn NameSession>;
}

/// Statements against the `names` table, scoped to a single request.
#[async_trait]
pub trait NameSession: Send {
    /// Create the `names` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or statement fails.
    async fn init_schema(&mut self) -> StoreResult<()>;

    /// Select the value of one row chosen uniformly at random.
    ///
    /// Returns `None` when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or statement fails, including when
    /// the table does not exist yet.
    async fn random_name(&mut self) -> StoreResult<Option<String>>;

    /// Insert a row without validating it.
    ///
    /// Callers should go through [`names::submit_name`].
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or statement fails.
    async fn insert_name(&mut self, value: &str) -> StoreResult<Name>;

    /// Find every row whose value equals `value` exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or statement fails.
    async fn find_by_value(&mut self, value: &str) -> StoreResult<Vec<Name>>;

    /// End the scope, closing any open connection.
    ///
    /// Closing a session that never touched the database does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection could not be closed cleanly.
    async fn close(&mut self) -> StoreResult<()>;
}
