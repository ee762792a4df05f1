// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use royal_gold::{LedgerChange, LedgerState, TransitionResult};
use royal_gold_domain::{BookingId, BookingRecord};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::store::SlotStore;

/// Slot key the ledger is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "royalGoldBookings";

/// Where the ledger lives inside its slot store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Slot holding the JSON array of records.
    pub storage_key: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// The persisted collection of booking records.
///
/// Every read decodes the whole slot and every mutation rewrites it. A slot
/// that is missing or holds JSON `null` is an empty ledger.
pub struct BookingLedger<S: SlotStore> {
    store: S,
    config: LedgerConfig,
}

impl<S: SlotStore> BookingLedger<S> {
    /// Wraps a slot store.
    pub const fn new(store: S, config: LedgerConfig) -> Self {
        Self { store, config }
    }

    /// Returns the ledger configuration.
    pub const fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Gives mutable access to the underlying store.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Returns every record in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or decoded.
    pub fn list_all(&mut self) -> Result<Vec<BookingRecord>, PersistenceError> {
        let state: LedgerState = self.load_state()?;
        debug!(count = state.len(), "Listed booking ledger");
        Ok(state.records)
    }

    /// Adds a record after the existing ones and rewrites the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn append(&mut self, record: BookingRecord) -> Result<(), PersistenceError> {
        let state: LedgerState = self.load_state()?;
        let result: TransitionResult = state.append(record);
        self.save_state(&result.new_state)?;

        if let LedgerChange::Appended(id) = &result.change {
            info!(id = %id, count = result.new_state.len(), "Booking appended to ledger");
        }
        Ok(())
    }

    /// Removes the first record with `id` and rewrites the slot.
    ///
    /// The slot is rewritten even when no record matched. Returns whether a
    /// record was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn remove_by_id(&mut self, id: &BookingId) -> Result<bool, PersistenceError> {
        let state: LedgerState = self.load_state()?;
        let result: TransitionResult = state.remove_by_id(id);
        self.save_state(&result.new_state)?;

        let removed: bool = result.is_changed();
        info!(id = %id, removed, "Booking removal processed");
        Ok(removed)
    }

    /// Drops every record older than `retention` at `now`.
    ///
    /// The slot is only rewritten when something was removed. Returns the
    /// number of records dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn purge_expired(
        &mut self,
        now: OffsetDateTime,
        retention: Duration,
    ) -> Result<usize, PersistenceError> {
        let state: LedgerState = self.load_state()?;
        let result: TransitionResult = state.purge_expired(now, retention);

        let LedgerChange::Purged { removed } = result.change else {
            return Ok(0);
        };
        if removed > 0 {
            self.save_state(&result.new_state)?;
            info!(removed, remaining = result.new_state.len(), "Purged expired bookings");
        }
        Ok(removed)
    }

    fn load_state(&mut self) -> Result<LedgerState, PersistenceError> {
        let Some(text) = self.store.read_slot(&self.config.storage_key)? else {
            return Ok(LedgerState::new());
        };
        let records: Option<Vec<BookingRecord>> = serde_json::from_str(&text)?;
        Ok(LedgerState::from_records(records.unwrap_or_default()))
    }

    fn save_state(&mut self, state: &LedgerState) -> Result<(), PersistenceError> {
        let text: String = serde_json::to_string(&state.records)?;
        self.store.write_slot(&self.config.storage_key, &text)
    }
}
