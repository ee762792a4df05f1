// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::BookingRequest;
use crate::error::CoreError;
use crate::room_numbers::RoomNumberSource;
use royal_gold_domain::{
    BookingId, BookingRecord, BookingRules, BookingStatus, Money, RoomCatalog, RoomNumber,
    RoomType, StayDates, validate_global_guest_limit, validate_guest_count,
    validate_room_capacity,
};
use time::OffsetDateTime;
use tracing::debug;

/// A booking that passed every check, with the values derived for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    /// The record to append to the ledger.
    pub record: BookingRecord,
    /// Nights between check-in and check-out.
    pub nights: u32,
    /// The nightly price the total was computed from.
    pub price_per_night: Money,
}

/// Runs a booking request through the validation pipeline and builds the
/// new ledger record.
///
/// Checks run in a fixed order and the first failure aborts the request:
///
/// 1. check-out must be strictly after check-in
/// 2. guests must be at least one and within the global cap
/// 3. the room type must exist and guests must fit its cap
/// 4. the carried nightly price must parse to a positive amount
///
/// This function is pure apart from drawing a room number; it never touches
/// the ledger. The caller appends `confirmation.record`.
///
/// # Arguments
///
/// * `catalog` - The room catalog
/// * `rules` - The active booking rules
/// * `request` - The guest's request
/// * `now` - Submission time; becomes the record id
/// * `room_numbers` - Source of the display room number
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` wrapping the first rule that failed.
pub fn apply_booking(
    catalog: &RoomCatalog,
    rules: &BookingRules,
    request: &BookingRequest,
    now: OffsetDateTime,
    room_numbers: &mut dyn RoomNumberSource,
) -> Result<BookingConfirmation, CoreError> {
    // Rule: check-out strictly after check-in
    let stay: StayDates = StayDates::new(request.check_in, request.check_out)?;

    // Rule: global guest cap, whatever the room
    validate_guest_count(request.guests)?;
    validate_global_guest_limit(request.guests, rules)?;

    // Rule: room-specific guest cap
    let room: &RoomType = catalog.lookup(request.room_type.value())?;
    validate_room_capacity(request.guests, room)?;

    // Rule: the carried price must still be a usable number
    let price_per_night: Money = Money::parse(&request.price_per_night)?;

    let nights: u32 = stay.nights()?;
    let total_price: Money = price_per_night.checked_mul(nights)?;
    let room_number: RoomNumber = room_numbers.next_room_number(&rules.room_numbers);

    let record: BookingRecord = BookingRecord {
        id: BookingId::from_instant(now),
        room_number,
        room_type: room.name().to_string(),
        total_price,
        check_in: stay.check_in(),
        check_out: stay.check_out(),
        guests: request.guests,
        status: BookingStatus::PendingPayment,
    };

    debug!(
        id = %record.id,
        room_type = %record.room_type,
        nights,
        total = %record.total_price,
        "Booking request accepted"
    );

    Ok(BookingConfirmation {
        record,
        nights,
        price_per_night,
    })
}
