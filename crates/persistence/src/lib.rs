// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage for the Royal Gold booking ledger.
//!
//! The ledger is a JSON array of booking records kept in one named slot of
//! a key/value store. Two stores are provided:
//!
//! - `MemorySlotStore` keeps slots in process memory
//! - `SqliteSlotStore` keeps slots in a `SQLite` table through Diesel, with
//!   the schema applied from embedded migrations on open
//!
//! `BookingLedger` layers the ledger operations from `royal_gold` on top of
//! either store. Each mutation rewrites the whole slot and the last write
//! wins.
//!
//! ## Testing
//!
//! Tests run against both stores. `SqliteSlotStore::new_in_memory()` gives
//! every caller its own shared-cache database, so tests stay isolated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::atomic::AtomicU64;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod diesel_schema;
mod error;
mod ledger;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use ledger::{BookingLedger, DEFAULT_STORAGE_KEY, LedgerConfig};
pub use store::{MemorySlotStore, SlotStore, SqliteSlotStore};
