// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use royal_gold::RoomNumberSource;
use royal_gold_domain::{
    BookingId, BookingRecord, BookingStatus, Money, RoomNumber, RoomNumberFormat,
};
use royal_gold_persistence::{BookingLedger, LedgerConfig, MemorySlotStore};
use time::macros::{date, datetime};
use time::{Duration, OffsetDateTime};

use crate::SubmitBookingRequest;

/// Always returns the same room number.
pub struct FixedRoomNumber(pub u16);

impl RoomNumberSource for FixedRoomNumber {
    fn next_room_number(&mut self, format: &RoomNumberFormat) -> RoomNumber {
        format.format(self.0)
    }
}

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2024-01-01 09:30 UTC)
}

pub fn create_test_ledger() -> BookingLedger<MemorySlotStore> {
    BookingLedger::new(MemorySlotStore::new(), LedgerConfig::default())
}

pub fn create_test_form(room_type: &str, room_price: &str, guests: &str) -> SubmitBookingRequest {
    SubmitBookingRequest {
        room_type: room_type.to_string(),
        room_price: room_price.to_string(),
        check_in: String::from("2024-01-01"),
        check_out: String::from("2024-01-03"),
        guests: guests.to_string(),
    }
}

/// A record created `age` before `now`.
pub fn create_test_record(now: OffsetDateTime, age: Duration) -> BookingRecord {
    BookingRecord {
        id: BookingId::from_instant(now - age),
        room_number: RoomNumber::new("#118"),
        room_type: String::from("Executive Room"),
        total_price: Money::from_units(120),
        check_in: date!(2024 - 01 - 01),
        check_out: date!(2024 - 01 - 02),
        guests: 2,
        status: BookingStatus::PendingPayment,
    }
}
