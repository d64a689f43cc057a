//! In-memory backend for tests and local demos.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rand::seq::IndexedRandom;

use namemycat_core::{Name, NameId};

use crate::error::{StoreError, StoreResult};
use crate::{NameSession, NameStore};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Name>,
    next_id: i32,
}

/// Names held in process memory.
///
/// Clones share the same table, mirroring several connections to one database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    table: Arc<Mutex<Table>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `values`, in order.
    #[must_use]
    pub fn with_names<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        if let Ok(mut table) = store.table.lock() {
            for value in values {
                push_row(&mut table, value.into());
            }
        }
        store
    }

    /// Number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.lock().map(|t| t.rows.len()).unwrap_or_default()
    }

    /// Whether the store has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NameStore for MemoryStore {
    fn session(&self) -> Box<dyn NameSession> {
        Box::new(MemorySession {
            table: Arc::clone(&self.table),
        })
    }
}

/// A session over the shared in-memory table.
#[derive(Debug)]
pub struct MemorySession {
    table: Arc<Mutex<Table>>,
}

impl MemorySession {
    fn lock(&self) -> StoreResult<MutexGuard<'_, Table>> {
        self.table
            .lock()
            .map_err(|_| StoreError::Database("memory table lock poisoned".into()))
    }
}

fn push_row(table: &mut Table, value: String) -> Name {
    table.next_id += 1;
    let name = Name::new(NameId::new(table.next_id), value);
    table.rows.push(name.clone());
    name
}

#[async_trait]
impl NameSession for MemorySession {
    async fn init_schema(&mut self) -> StoreResult<()> {
        Ok(())
    }

    async fn random_name(&mut self) -> StoreResult<Option<String>> {
        let table = self.lock()?;
        Ok(table
            .rows
            .choose(&mut rand::rng())
            .map(|name| name.value.clone()))
    }

    async fn insert_name(&mut self, value: &str) -> StoreResult<Name> {
        let mut table = self.lock()?;
        Ok(push_row(&mut table, value.to_string()))
    }

    async fn find_by_value(&mut self, value: &str) -> StoreResult<Vec<Name>> {
        let table = self.lock()?;
        Ok(table
            .rows
            .iter()
            .filter(|name| name.value == value)
            .cloned()
            .collect())
    }

    async fn close(&mut self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_has_no_random_name() {
        let store = MemoryStore::new();
        let mut session = store.session();
        assert_eq!(session.random_name().await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn ids_increase_from_one() {
        let store = MemoryStore::new();
        let mut session = store.session();
        let first = session.insert_name("Simba").await.unwrap();
        let second = session.insert_name("Nala").await.unwrap();
        assert_eq!(first.id, NameId::new(1));
        assert_eq!(second.id, NameId::new(2));
    }

    #[tokio::test]
    async fn sessions_share_the_table() {
        let store = MemoryStore::new();
        store.session().insert_name("Scar").await.unwrap();

        let found = store.session().find_by_value("Scar").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "Scar");
    }

    #[tokio::test]
    async fn find_by_value_is_exact() {
        let store = MemoryStore::with_names(["Mufasa", "mufasa", "Mufasa "]);
        let found = store.session().find_by_value("Mufasa").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, NameId::new(1));
    }
}
