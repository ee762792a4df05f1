// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use royal_gold_domain::{RoomNumber, RoomNumberFormat};

/// Supplies display room numbers for new bookings.
///
/// Room numbers are cosmetic and need not be unique. Implementations must
/// stay inside `format.min..=format.max`.
pub trait RoomNumberSource {
    /// Draws the next room number.
    fn next_room_number(&mut self, format: &RoomNumberFormat) -> RoomNumber;
}

/// Hands out `min, min + 1, ...`, wrapping back to `min` after `max`.
///
/// Deterministic and collision-free until the range wraps.
#[derive(Debug, Clone, Default)]
pub struct SequentialRoomNumbers {
    offset: u32,
}

impl SequentialRoomNumbers {
    /// Starts at the bottom of the configured range.
    #[must_use]
    pub const fn new() -> Self {
        Self { offset: 0 }
    }
}

impl RoomNumberSource for SequentialRoomNumbers {
    fn next_room_number(&mut self, format: &RoomNumberFormat) -> RoomNumber {
        let step: u32 = self.offset % format.span();
        self.offset = self.offset.wrapping_add(1);
        let value: u16 = u16::try_from(u32::from(format.min) + step).unwrap_or(format.max);
        format.format(value)
    }
}
