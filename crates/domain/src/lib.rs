// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod booking;
mod catalog;
mod error;
mod money;
mod rules;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use booking::{
    BookingId, BookingRecord, BookingStatus, RoomNumber, StayDates, epoch_millis, parse_iso_date,
};
pub use catalog::{DEFAULT_IMAGES_PER_ROOM, RoomCatalog, RoomType, RoomTypeKey, placeholder_images};
pub use error::DomainError;
pub use money::Money;
pub use rules::{
    BookingRules, DEFAULT_MAX_GUESTS_OVERALL, DEFAULT_RETENTION, RoomNumberFormat,
};
pub use validation::{validate_global_guest_limit, validate_guest_count, validate_room_capacity};
