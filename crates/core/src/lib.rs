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
#![allow(clippy::multiple_crate_versions)]

mod apply;
mod command;
mod error;
mod room_numbers;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{BookingConfirmation, apply_booking};
pub use command::BookingRequest;
pub use error::CoreError;
pub use room_numbers::{RoomNumberSource, SequentialRoomNumbers};
pub use state::{LedgerChange, LedgerState, TransitionResult};
