// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::RoomNumber;
use crate::catalog::RoomType;
use time::Duration;

/// Global cap on guests per booking, whatever the room.
pub const DEFAULT_MAX_GUESTS_OVERALL: u32 = 5;

/// How long a booking stays in the ledger after it was submitted.
pub const DEFAULT_RETENTION: Duration = Duration::hours(24);

/// How display room numbers are drawn and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomNumberFormat {
    /// Prefix placed before the digits.
    pub prefix: String,
    /// Minimum digit count; shorter values are zero-padded.
    pub width: usize,
    /// Smallest value a generator may draw.
    pub min: u16,
    /// Largest value a generator may draw.
    pub max: u16,
}

impl Default for RoomNumberFormat {
    fn default() -> Self {
        Self {
            prefix: String::from("#"),
            width: 3,
            min: 1,
            max: 999,
        }
    }
}

impl RoomNumberFormat {
    /// Renders a value as a room number, e.g. `7` -> `#007`.
    ///
    /// Values outside `min..=max` are clamped into range.
    #[must_use]
    pub fn format(&self, value: u16) -> RoomNumber {
        let clamped: u16 = value.clamp(self.min, self.max.max(self.min));
        RoomNumber::new(&format!(
            "{}{:0width$}",
            self.prefix,
            clamped,
            width = self.width
        ))
    }

    /// Number of distinct values in `min..=max`.
    #[must_use]
    pub fn span(&self) -> u32 {
        u32::from(self.max.saturating_sub(self.min)) + 1
    }
}

/// Tunable constants of the booking pipeline.
///
/// Defaults reproduce the hotel's published limits. Tests and the server
/// command line override individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRules {
    /// Guests allowed per booking regardless of room type.
    pub max_guests_overall: u32,
    /// Age at which a booking is purged from the ledger.
    pub retention: Duration,
    /// Room number generation parameters.
    pub room_numbers: RoomNumberFormat,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            max_guests_overall: DEFAULT_MAX_GUESTS_OVERALL,
            retention: DEFAULT_RETENTION,
            room_numbers: RoomNumberFormat::default(),
        }
    }
}

impl BookingRules {
    /// The effective guest cap for a room: the smaller of the room's own cap
    /// and the global cap.
    #[must_use]
    pub fn max_guests_for(&self, room: &RoomType) -> u32 {
        room.max_guests().min(self.max_guests_overall)
    }
}
