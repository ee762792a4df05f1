// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use royal_gold::RoomNumberSource;
use royal_gold_domain::{RoomNumber, RoomNumberFormat};

/// Draws room numbers uniformly from the configured range.
///
/// Numbers may repeat across bookings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRoomNumbers;

impl RoomNumberSource for RandomRoomNumbers {
    fn next_room_number(&mut self, format: &RoomNumberFormat) -> RoomNumber {
        let step: u32 = rand::random::<u32>() % format.span();
        let value: u16 = u16::try_from(u32::from(format.min) + step).unwrap_or(format.max);
        format.format(value)
    }
}
