// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod ledger_tests;

use crate::{BookingLedger, LedgerConfig, MemorySlotStore, SqliteSlotStore};
use royal_gold_domain::{BookingId, BookingRecord, BookingStatus, Money, RoomNumber};
use time::macros::{date, datetime};
use time::{Duration, OffsetDateTime};

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2024-01-01 09:30 UTC)
}

/// A record created `age` before `now`.
pub fn create_test_record(now: OffsetDateTime, age: Duration) -> BookingRecord {
    BookingRecord {
        id: BookingId::from_instant(now - age),
        room_number: RoomNumber::new("#305"),
        room_type: String::from("Double Room"),
        total_price: Money::from_units(170),
        check_in: date!(2024 - 01 - 01),
        check_out: date!(2024 - 01 - 03),
        guests: 2,
        status: BookingStatus::PendingPayment,
    }
}

pub fn create_memory_ledger() -> BookingLedger<MemorySlotStore> {
    BookingLedger::new(MemorySlotStore::new(), LedgerConfig::default())
}

pub fn create_sqlite_ledger() -> BookingLedger<SqliteSlotStore> {
    BookingLedger::new(
        SqliteSlotStore::new_in_memory().unwrap(),
        LedgerConfig::default(),
    )
}
