// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::Ordering;
use tracing::debug;

use crate::DB_COUNTER;
use crate::backend;
use crate::diesel_schema::storage_slots;
use crate::error::PersistenceError;

/// A key/value store of named text slots.
///
/// Writes replace the whole slot. There is no merge and no cross-writer
/// locking: the last write wins.
pub trait SlotStore {
    /// Reads a slot. A slot that was never written is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read_slot(&mut self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replaces the contents of a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Slots held in process memory. Lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read_slot(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Slots stored in the `storage_slots` table of a `SQLite` database.
pub struct SqliteSlotStore {
    conn: SqliteConnection,
}

impl SqliteSlotStore {
    /// Opens a fresh shared in-memory database.
    ///
    /// Each call gets its own database, so stores never see each other's
    /// slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Opens (or creates) a database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not valid UTF-8 or the database cannot
    /// be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Lists every slot key with the size of its value in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_slots(&mut self) -> Result<Vec<(String, usize)>, PersistenceError> {
        let rows: Vec<(String, String)> = storage_slots::table
            .select((storage_slots::slot_key, storage_slots::slot_value))
            .order(storage_slots::slot_key.asc())
            .load::<(String, String)>(&mut self.conn)?;

        Ok(rows
            .into_iter()
            .map(|(key, value)| (key, value.len()))
            .collect())
    }
}

impl SlotStore for SqliteSlotStore {
    fn read_slot(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        debug!(slot = key, "Reading storage slot");

        let value: Option<String> = storage_slots::table
            .filter(storage_slots::slot_key.eq(key))
            .select(storage_slots::slot_value)
            .first::<String>(&mut self.conn)
            .optional()?;

        Ok(value)
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        debug!(slot = key, bytes = value.len(), "Writing storage slot");

        diesel::replace_into(storage_slots::table)
            .values((
                storage_slots::slot_key.eq(key),
                storage_slots::slot_value.eq(value),
            ))
            .execute(&mut self.conn)?;

        Ok(())
    }
}
