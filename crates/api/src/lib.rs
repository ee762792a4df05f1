// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Royal Gold Hotel booking system.
//!
//! Handlers take the catalog, the rules and the ledger explicitly and return
//! response DTOs. They never render markup; the HTTP server serializes the
//! DTOs as JSON.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod form;
mod handlers;
mod request_response;
mod room_numbers;

#[cfg(test)]
mod tests;

/// Name shown in listings and confirmations.
pub const HOTEL_NAME: &str = "Royal Gold Hotel";

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use form::{FormFieldError, parse_form_date, parse_guest_count};
pub use handlers::{
    booking_history, cancel_booking, format_display_date, list_rooms, prepare_booking_form,
    purge_expired_bookings, room_details, submit_booking,
};
pub use request_response::{
    BookingConfirmationResponse, BookingFormResponse, BookingHistoryEntry,
    BookingHistoryResponse, CancelBookingResponse, ListRoomsResponse, RoomDetailsResponse,
    RoomSummary, SubmitBookingRequest,
};
pub use room_numbers::RandomRoomNumbers;
