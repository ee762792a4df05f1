// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the booking flow.

use std::cmp::Reverse;

use royal_gold::{BookingConfirmation, BookingRequest, RoomNumberSource, apply_booking};
use royal_gold_domain::{
    BookingId, BookingRecord, BookingRules, RoomCatalog, RoomType, RoomTypeKey,
};
use royal_gold_persistence::{BookingLedger, SlotStore};
use time::{Date, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::HOTEL_NAME;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::form::{parse_form_date, parse_guest_count};
use crate::request_response::{
    BookingConfirmationResponse, BookingFormResponse, BookingHistoryEntry,
    BookingHistoryResponse, CancelBookingResponse, ListRoomsResponse, RoomDetailsResponse,
    RoomSummary, SubmitBookingRequest,
};

/// Guests pre-filled in a fresh booking form.
const DEFAULT_FORM_GUESTS: u32 = 1;

/// Lists every room type in catalog order.
#[must_use]
pub fn list_rooms(catalog: &RoomCatalog) -> ListRoomsResponse {
    let rooms: Vec<RoomSummary> = catalog
        .iter()
        .map(|(key, room)| RoomSummary {
            key: key.value().to_string(),
            name: room.name().to_string(),
            price_per_night: room.price_per_night().to_compact_string(),
            max_guests: room.max_guests(),
            available_rooms: room.available_rooms(),
            description: room.description().to_string(),
            thumbnail: room.images().first().cloned(),
        })
        .collect();

    ListRoomsResponse {
        hotel_name: HOTEL_NAME.to_string(),
        rooms,
    }
}

/// Returns the details view of one room type.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown key.
pub fn room_details(catalog: &RoomCatalog, key: &str) -> Result<RoomDetailsResponse, ApiError> {
    let room: &RoomType = catalog.lookup(key).map_err(translate_domain_error)?;

    Ok(RoomDetailsResponse {
        key: key.to_string(),
        name: room.name().to_string(),
        price_display: format!("${}", room.price_per_night().to_compact_string()),
        available_rooms: room.available_rooms(),
        max_guests: room.max_guests(),
        description: room.description().to_string(),
        images: room.images().to_vec(),
        book_label: format!("Book {} Now", room.name()),
    })
}

/// Pre-fills the booking form for a room type.
///
/// The guests field is capped at the smaller of the room's own cap and the
/// global cap.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown key.
pub fn prepare_booking_form(
    catalog: &RoomCatalog,
    rules: &BookingRules,
    key: &str,
) -> Result<BookingFormResponse, ApiError> {
    let room: &RoomType = catalog.lookup(key).map_err(translate_domain_error)?;
    let price: String = room.price_per_night().to_compact_string();

    Ok(BookingFormResponse {
        room_type: key.to_string(),
        info_line: format!("{} (${price}/Night)", room.name()),
        room_price: price,
        default_guests: DEFAULT_FORM_GUESTS,
        max_guests_allowed: rules.max_guests_for(room),
    })
}

/// Validates a submitted booking form and appends the booking to the ledger.
///
/// Nothing is written when any check fails.
///
/// # Arguments
///
/// * `ledger` - The booking ledger
/// * `catalog` - The room catalog
/// * `rules` - The active booking rules
/// * `request` - The submitted form
/// * `now` - Submission time; becomes the booking id
/// * `room_numbers` - Source of the display room number
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for malformed fields,
/// `ApiError::ResourceNotFound` for an unknown room type,
/// `ApiError::DomainRuleViolation` for a failed booking rule, and
/// `ApiError::Internal` if the ledger cannot be written.
pub fn submit_booking<S: SlotStore>(
    ledger: &mut BookingLedger<S>,
    catalog: &RoomCatalog,
    rules: &BookingRules,
    request: &SubmitBookingRequest,
    now: OffsetDateTime,
    room_numbers: &mut dyn RoomNumberSource,
) -> Result<BookingConfirmationResponse, ApiError> {
    let check_in: Date = parse_form_date("check_in", &request.check_in)?;
    let check_out: Date = parse_form_date("check_out", &request.check_out)?;
    let guests: u32 = parse_guest_count(&request.guests)?;

    let booking_request: BookingRequest = BookingRequest {
        room_type: RoomTypeKey::new(request.room_type.trim()),
        check_in,
        check_out,
        guests,
        price_per_night: request.room_price.clone(),
    };

    let BookingConfirmation {
        record,
        nights,
        price_per_night,
    } = apply_booking(catalog, rules, &booking_request, now, room_numbers).map_err(|err| {
        warn!(room_type = %request.room_type, error = %err, "Booking rejected");
        translate_core_error(err)
    })?;

    ledger
        .append(record.clone())
        .map_err(translate_persistence_error)?;

    info!(
        id = %record.id,
        room_type = %record.room_type,
        room_number = %record.room_number,
        total = %record.total_price,
        "Booking submitted"
    );

    Ok(BookingConfirmationResponse {
        hotel_name: HOTEL_NAME.to_string(),
        id: record.id.value().to_string(),
        room_type: record.room_type,
        room_number: record.room_number.value().to_string(),
        check_in: record.check_in.to_string(),
        check_out: record.check_out.to_string(),
        price_per_night: price_per_night.to_string(),
        nights,
        total_price: record.total_price.to_string(),
        status: record.status.as_str().to_string(),
        message: String::from("Your booking request has been successfully submitted to our system."),
        staff_notice: format!(
            "A member of the {HOTEL_NAME} staff will contact you via email or phone within 2 hours to confirm your details and process payment options."
        ),
        closing: format!("Thank you for choosing {HOTEL_NAME}!"),
    })
}

/// Purges expired bookings, then lists the rest newest first.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the ledger cannot be read or written.
pub fn booking_history<S: SlotStore>(
    ledger: &mut BookingLedger<S>,
    rules: &BookingRules,
    now: OffsetDateTime,
) -> Result<BookingHistoryResponse, ApiError> {
    purge_expired_bookings(ledger, rules, now)?;

    let mut records: Vec<BookingRecord> =
        ledger.list_all().map_err(translate_persistence_error)?;
    records.sort_by_key(|record| Reverse(record.id.created_at_millis()));
    debug!(count = records.len(), "Loaded booking history");

    let notice: Option<String> = records.is_empty().then(|| {
        format!(
            "You have no active or past bookings. (Bookings are deleted {} hours after submission)",
            rules.retention.whole_hours()
        )
    });

    let bookings: Vec<BookingHistoryEntry> = records
        .into_iter()
        .map(history_entry)
        .collect::<Result<_, _>>()?;

    Ok(BookingHistoryResponse { bookings, notice })
}

/// Cancels a booking by id.
///
/// Unknown ids are not an error; `removed` reports whether anything matched.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the ledger cannot be read or written.
pub fn cancel_booking<S: SlotStore>(
    ledger: &mut BookingLedger<S>,
    id: &str,
) -> Result<CancelBookingResponse, ApiError> {
    let booking_id: BookingId = BookingId::new(id);
    let removed: bool = ledger
        .remove_by_id(&booking_id)
        .map_err(translate_persistence_error)?;

    Ok(CancelBookingResponse {
        id: id.to_string(),
        removed,
        message: String::from("Booking successfully cancelled."),
    })
}

/// Removes bookings older than the retention window.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the ledger cannot be read or written.
pub fn purge_expired_bookings<S: SlotStore>(
    ledger: &mut BookingLedger<S>,
    rules: &BookingRules,
    now: OffsetDateTime,
) -> Result<usize, ApiError> {
    ledger
        .purge_expired(now, rules.retention)
        .map_err(translate_persistence_error)
}

/// Formats a date the way the history view shows it, e.g. `1 Jan 2024`.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the date cannot be formatted.
pub fn format_display_date(date: Date) -> Result<String, ApiError> {
    date.format(time::macros::format_description!(
        "[day padding:none] [month repr:short] [year]"
    ))
    .map_err(|e| ApiError::Internal {
        message: format!("Failed to format date {date}: {e}"),
    })
}

fn history_entry(record: BookingRecord) -> Result<BookingHistoryEntry, ApiError> {
    Ok(BookingHistoryEntry {
        check_in_display: format_display_date(record.check_in)?,
        check_out_display: format_display_date(record.check_out)?,
        id: record.id.value().to_string(),
        room_type: record.room_type,
        room_number: record.room_number.value().to_string(),
        check_in: record.check_in.to_string(),
        check_out: record.check_out.to_string(),
        guests: record.guests,
        total_price: record.total_price.to_string(),
        status: record.status.as_str().to_string(),
    })
}
