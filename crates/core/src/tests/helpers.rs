// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingRequest, RoomNumberSource};
use royal_gold_domain::{
    BookingId, BookingRecord, BookingStatus, Money, RoomNumber, RoomNumberFormat, RoomTypeKey,
};
use time::macros::{date, datetime};
use time::{Duration, OffsetDateTime};

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

pub fn create_test_request(room_type: &str, guests: u32, price: &str) -> BookingRequest {
    BookingRequest {
        room_type: RoomTypeKey::new(room_type),
        check_in: date!(2024 - 01 - 01),
        check_out: date!(2024 - 01 - 03),
        guests,
        price_per_night: price.to_string(),
    }
}

/// A record created `age` before `now`.
pub fn create_test_record_aged(now: OffsetDateTime, age: Duration) -> BookingRecord {
    BookingRecord {
        id: BookingId::from_instant(now - age),
        room_number: RoomNumber::new("#101"),
        room_type: String::from("Standard Room"),
        total_price: Money::from_units(70),
        check_in: date!(2024 - 01 - 01),
        check_out: date!(2024 - 01 - 02),
        guests: 1,
        status: BookingStatus::PendingPayment,
    }
}
