// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(
        value.trim(),
        time::macros::format_description!("[year]-[month]-[day]"),
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Milliseconds since the Unix epoch for an instant.
#[must_use]
pub fn epoch_millis(instant: OffsetDateTime) -> i128 {
    instant.unix_timestamp_nanos() / 1_000_000
}

/// Identifier of a booking: its creation time in epoch milliseconds, as a
/// string.
///
/// Ids sort by creation time and are unique unless two bookings are created
/// within the same millisecond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId {
    value: String,
}

impl BookingId {
    /// Wraps an existing id string.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Derives an id from a creation instant.
    #[must_use]
    pub fn from_instant(created_at: OffsetDateTime) -> Self {
        Self {
            value: epoch_millis(created_at).to_string(),
        }
    }

    /// Returns the id string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The creation time encoded in the id, if the id is a millisecond
    /// timestamp.
    #[must_use]
    pub fn created_at_millis(&self) -> Option<i64> {
        self.value.parse::<i64>().ok()
    }

    /// Whether a booking with this id has outlived `retention` at `now`.
    ///
    /// Ids that do not carry a timestamp are always expired. Ids from the
    /// future are never expired.
    #[must_use]
    pub fn is_expired(&self, now: OffsetDateTime, retention: Duration) -> bool {
        self.created_at_millis().is_none_or(|created| {
            epoch_millis(now) - i128::from(created) >= retention.whole_milliseconds()
        })
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Display room code such as `#201`. Not unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber {
    value: String,
}

impl RoomNumber {
    /// Creates a new `RoomNumber`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the room number text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Status of a booking. Written once at creation and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// Submitted, awaiting contact from staff.
    #[default]
    #[serde(rename = "Pending Payment")]
    PendingPayment,
}

impl BookingStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PendingPayment => "Pending Payment",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated check-in / check-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    check_in: Date,
    check_out: Date,
}

impl StayDates {
    /// Creates a stay, requiring check-out strictly after check-in.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayDates` if `check_out <= check_in`.
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidStayDates {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Number of nights between the two dates. Always at least 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the span does not fit in a `u32`.
    pub fn nights(&self) -> Result<u32, DomainError> {
        let days: i64 = (self.check_out - self.check_in).whole_days();
        u32::try_from(days).map_err(|_| DomainError::DateArithmeticOverflow {
            operation: format!(
                "counting nights from {} to {}",
                self.check_in, self.check_out
            ),
        })
    }
}

/// One booking as stored in the ledger.
///
/// Field names and formats match the stored JSON: camelCase keys,
/// `YYYY-MM-DD` dates, the total as a two-decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Creation timestamp id.
    pub id: BookingId,
    /// Display room code.
    pub room_number: RoomNumber,
    /// Room type display name at the time of booking.
    pub room_type: String,
    /// Nights times nightly price.
    pub total_price: Money,
    /// Arrival date.
    #[serde(with = "iso_date")]
    pub check_in: Date,
    /// Departure date.
    #[serde(with = "iso_date")]
    pub check_out: Date,
    /// Number of guests.
    pub guests: u32,
    /// Always `Pending Payment`.
    #[serde(default)]
    pub status: BookingStatus,
}
