// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested room type key is not in the catalog.
    RoomTypeNotFound(String),
    /// A room type key appears more than once in a catalog.
    DuplicateRoomType(String),
    /// A room type entry failed validation.
    InvalidRoomType {
        /// The room type key.
        key: String,
        /// Description of the validation error.
        reason: String,
    },
    /// Check-out is not strictly after check-in.
    InvalidStayDates {
        /// The requested check-in date.
        check_in: time::Date,
        /// The requested check-out date.
        check_out: time::Date,
    },
    /// Guest count is zero or otherwise unusable.
    InvalidGuestCount(String),
    /// The booking exceeds the global guest cap.
    GuestLimitExceeded {
        /// The number of guests requested.
        requested: u32,
        /// The global cap.
        limit: u32,
    },
    /// The booking exceeds the room type's occupancy cap.
    RoomCapacityExceeded {
        /// Display name of the room type.
        room_name: String,
        /// The room type's cap.
        limit: u32,
        /// The number of guests requested.
        requested: u32,
    },
    /// The carried price value is not a valid positive amount.
    InvalidPrice {
        /// The raw value that failed to parse.
        value: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Price arithmetic overflow.
    PriceArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoomTypeNotFound(key) => write!(f, "Room type '{key}' not found"),
            Self::DuplicateRoomType(key) => {
                write!(f, "Room type '{key}' is defined more than once")
            }
            Self::InvalidRoomType { key, reason } => {
                write!(f, "Invalid room type '{key}': {reason}")
            }
            Self::InvalidStayDates {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out date must be after the Check-in date (check-in {check_in}, check-out {check_out})"
                )
            }
            Self::InvalidGuestCount(msg) => write!(f, "Invalid guest count: {msg}"),
            Self::GuestLimitExceeded { limit, .. } => {
                write!(
                    f,
                    "The maximum allowed number of guests per booking is {limit}. Please adjust the number of guests."
                )
            }
            Self::RoomCapacityExceeded {
                room_name, limit, ..
            } => {
                write!(
                    f,
                    "The selected room ({room_name}) can only accommodate a maximum of {limit} guests. Please adjust the number of guests."
                )
            }
            Self::InvalidPrice { value } => {
                write!(
                    f,
                    "Price calculation failed for value '{value}'. Please re-select the room."
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::PriceArithmeticOverflow { operation } => {
                write!(f, "Price arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
