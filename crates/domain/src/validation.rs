// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::RoomType;
use crate::error::DomainError;
use crate::rules::BookingRules;

/// Validates that a guest count is usable at all.
///
/// # Errors
///
/// Returns `DomainError::InvalidGuestCount` if `guests` is zero.
pub fn validate_guest_count(guests: u32) -> Result<(), DomainError> {
    if guests == 0 {
        return Err(DomainError::InvalidGuestCount(String::from(
            "At least one guest is required",
        )));
    }
    Ok(())
}

/// Validates the guest count against the global per-booking cap.
///
/// This check applies to every room type.
///
/// # Arguments
///
/// * `guests` - The requested guest count
/// * `rules` - The active booking rules
///
/// # Errors
///
/// Returns `DomainError::GuestLimitExceeded` if `guests` is above
/// `rules.max_guests_overall`.
pub fn validate_global_guest_limit(guests: u32, rules: &BookingRules) -> Result<(), DomainError> {
    if guests > rules.max_guests_overall {
        return Err(DomainError::GuestLimitExceeded {
            requested: guests,
            limit: rules.max_guests_overall,
        });
    }
    Ok(())
}

/// Validates the guest count against a room type's occupancy cap.
///
/// # Arguments
///
/// * `guests` - The requested guest count
/// * `room` - The room type being booked
///
/// # Errors
///
/// Returns `DomainError::RoomCapacityExceeded` naming the room if `guests`
/// is above the room's cap.
pub fn validate_room_capacity(guests: u32, room: &RoomType) -> Result<(), DomainError> {
    if guests > room.max_guests() {
        return Err(DomainError::RoomCapacityExceeded {
            room_name: room.name().to_string(),
            limit: room.max_guests(),
            requested: guests,
        });
    }
    Ok(())
}
