// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// One room type in the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    /// The catalog key, used in booking requests.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Nightly price without trailing zeros (`85`, `85.50`).
    pub price_per_night: String,
    /// Occupancy cap of the room type.
    pub max_guests: u32,
    /// Advisory number of rooms of this type.
    pub available_rooms: u32,
    /// Free text description.
    pub description: String,
    /// First image, if the room has any.
    pub thumbnail: Option<String>,
}

/// API response listing every room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoomsResponse {
    /// The hotel's name.
    pub hotel_name: String,
    /// Room types in catalog order.
    pub rooms: Vec<RoomSummary>,
}

/// API response with everything the room details view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDetailsResponse {
    /// The catalog key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Price as displayed, e.g. `$85`.
    pub price_display: String,
    /// Advisory number of rooms of this type.
    pub available_rooms: u32,
    /// Occupancy cap of the room type.
    pub max_guests: u32,
    /// Free text description.
    pub description: String,
    /// Ordered image references for the slider.
    pub images: Vec<String>,
    /// Label of the direct booking button, e.g. `Book Double Room Now`.
    pub book_label: String,
}

/// API response that pre-fills the booking form for a room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingFormResponse {
    /// The catalog key to post back as `room_type`.
    pub room_type: String,
    /// The nightly price to post back as `room_price`.
    pub room_price: String,
    /// Heading line, e.g. `Double Room ($85/Night)`.
    pub info_line: String,
    /// Initial value of the guests field.
    pub default_guests: u32,
    /// Upper bound for the guests field.
    pub max_guests_allowed: u32,
}

/// API request to submit a booking.
///
/// Every field is text, exactly as the booking form posts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitBookingRequest {
    /// The selected room type key.
    #[serde(alias = "room_type_selected")]
    pub room_type: String,
    /// The nightly price carried from the booking form.
    pub room_price: String,
    /// Arrival date, `YYYY-MM-DD`.
    pub check_in: String,
    /// Departure date, `YYYY-MM-DD`.
    pub check_out: String,
    /// Number of guests.
    pub guests: String,
}

/// API response for a submitted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmationResponse {
    /// The hotel's name.
    pub hotel_name: String,
    /// The new booking's id.
    pub id: String,
    /// Room type display name.
    pub room_type: String,
    /// Display room code, e.g. `#201`.
    pub room_number: String,
    /// Arrival date, `YYYY-MM-DD`.
    pub check_in: String,
    /// Departure date, `YYYY-MM-DD`.
    pub check_out: String,
    /// Nightly price with two decimals.
    pub price_per_night: String,
    /// Number of nights.
    pub nights: u32,
    /// Total estimated cost with two decimals.
    pub total_price: String,
    /// Booking status.
    pub status: String,
    /// A success message.
    pub message: String,
    /// What happens next.
    pub staff_notice: String,
    /// Closing line.
    pub closing: String,
}

/// One booking in the history view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingHistoryEntry {
    /// Booking id, used to cancel.
    pub id: String,
    /// Room type display name.
    pub room_type: String,
    /// Display room code.
    pub room_number: String,
    /// Arrival date, `YYYY-MM-DD`.
    pub check_in: String,
    /// Departure date, `YYYY-MM-DD`.
    pub check_out: String,
    /// Arrival date as displayed, e.g. `1 Jan 2024`.
    pub check_in_display: String,
    /// Departure date as displayed.
    pub check_out_display: String,
    /// Number of guests.
    pub guests: u32,
    /// Total cost with two decimals.
    pub total_price: String,
    /// Booking status.
    pub status: String,
}

/// API response for the booking history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingHistoryResponse {
    /// Bookings still inside the retention window.
    pub bookings: Vec<BookingHistoryEntry>,
    /// Shown instead of the list when it is empty.
    pub notice: Option<String>,
}

/// API response for a cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    /// The id that was cancelled.
    pub id: String,
    /// Whether a booking with that id was found.
    pub removed: bool,
    /// A success message.
    pub message: String,
}
