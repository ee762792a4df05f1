// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use royal_gold_domain::RoomTypeKey;
use time::Date;

/// A booking request represents the guest's intent as data only.
///
/// Dates and the guest count are already typed; the nightly price is kept
/// exactly as it was carried alongside the room selection so the pipeline
/// can reject a value that no longer parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The selected room type.
    pub room_type: RoomTypeKey,
    /// Arrival date.
    pub check_in: Date,
    /// Departure date.
    pub check_out: Date,
    /// Number of guests.
    pub guests: u32,
    /// Nightly price as carried with the room selection.
    pub price_per_night: String,
}
