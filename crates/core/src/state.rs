// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use royal_gold_domain::{BookingId, BookingRecord};
use time::{Duration, OffsetDateTime};

/// The full contents of the booking ledger, in stored order.
///
/// Transitions never mutate in place: each returns a new state plus a
/// description of what changed, and the caller decides whether to persist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerState {
    /// Booking records in stored order.
    pub records: Vec<BookingRecord>,
}

/// What a ledger transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerChange {
    /// A record was added.
    Appended(BookingId),
    /// A record was removed by id.
    Removed(Box<BookingRecord>),
    /// Expired records were dropped.
    Purged {
        /// Number of records dropped.
        removed: usize,
    },
    /// Nothing was changed.
    Unchanged,
}

/// Result of a ledger transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The state after the transition.
    pub new_state: LedgerState,
    /// What the transition did.
    pub change: LedgerChange,
}

impl TransitionResult {
    /// Whether the new state differs from the old one.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        !matches!(
            self.change,
            LedgerChange::Unchanged | LedgerChange::Purged { removed: 0 }
        )
    }
}

impl LedgerState {
    /// Creates an empty ledger state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Wraps records read from storage.
    #[must_use]
    pub const fn from_records(records: Vec<BookingRecord>) -> Self {
        Self { records }
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the ledger holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds a record after the existing ones.
    ///
    /// Ids are not checked for uniqueness: two bookings created in the same
    /// millisecond are both kept, and `remove_by_id` takes the first.
    #[must_use]
    pub fn append(&self, record: BookingRecord) -> TransitionResult {
        let id: BookingId = record.id.clone();
        let mut records: Vec<BookingRecord> = self.records.clone();
        records.push(record);

        TransitionResult {
            new_state: Self { records },
            change: LedgerChange::Appended(id),
        }
    }

    /// Removes the first record with the given id. Unknown ids leave the
    /// state unchanged.
    #[must_use]
    pub fn remove_by_id(&self, id: &BookingId) -> TransitionResult {
        let Some(position) = self.records.iter().position(|record| &record.id == id) else {
            return TransitionResult {
                new_state: self.clone(),
                change: LedgerChange::Unchanged,
            };
        };

        let mut records: Vec<BookingRecord> = self.records.clone();
        let removed: BookingRecord = records.remove(position);

        TransitionResult {
            new_state: Self { records },
            change: LedgerChange::Removed(Box::new(removed)),
        }
    }

    /// Drops every record whose id-derived creation time is at least
    /// `retention` before `now`.
    ///
    /// Applying this twice with the same `now` removes nothing the second
    /// time.
    #[must_use]
    pub fn purge_expired(&self, now: OffsetDateTime, retention: Duration) -> TransitionResult {
        let records: Vec<BookingRecord> = self
            .records
            .iter()
            .filter(|record| !record.id.is_expired(now, retention))
            .cloned()
            .collect();
        let removed: usize = self.records.len() - records.len();

        TransitionResult {
            new_state: Self { records },
            change: LedgerChange::Purged { removed },
        }
    }
}
