// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_now, create_test_record_aged};
use crate::{LedgerChange, LedgerState, TransitionResult};
use royal_gold_domain::{BookingId, BookingRecord};
use time::{Duration, OffsetDateTime};

const RETENTION: Duration = Duration::hours(24);

fn create_test_state(now: OffsetDateTime) -> LedgerState {
    LedgerState::from_records(vec![
        create_test_record_aged(now, Duration::hours(30)),
        create_test_record_aged(now, Duration::hours(2)),
        create_test_record_aged(now, Duration::minutes(5)),
    ])
}

#[test]
fn test_append_keeps_existing_records_in_order() {
    let now: OffsetDateTime = create_test_now();
    let state: LedgerState = create_test_state(now);
    let record: BookingRecord = create_test_record_aged(now, Duration::ZERO);

    let result: TransitionResult = state.append(record.clone());

    assert_eq!(result.new_state.len(), 4);
    assert_eq!(result.new_state.records[..3], state.records[..]);
    assert_eq!(result.new_state.records[3], record);
    assert_eq!(result.change, LedgerChange::Appended(record.id));
    assert!(result.is_changed());
}

#[test]
fn test_append_keeps_records_sharing_an_id() {
    let now: OffsetDateTime = create_test_now();
    let state: LedgerState = create_test_state(now);
    let mut same_id: BookingRecord = state.records[1].clone();
    same_id.guests = 2;

    let appended: TransitionResult = state.append(same_id.clone());

    assert_eq!(appended.new_state.len(), 4);
    assert_eq!(appended.new_state.records[3], same_id);

    let removed: TransitionResult = appended.new_state.remove_by_id(&same_id.id);

    assert_eq!(removed.new_state.len(), 3);
    assert_eq!(removed.new_state.records[1], same_id);
    assert_eq!(
        removed.change,
        LedgerChange::Removed(Box::new(state.records[1].clone()))
    );
}

#[test]
fn test_append_then_remove_restores_state() {
    let now: OffsetDateTime = create_test_now();
    let state: LedgerState = create_test_state(now);
    let record: BookingRecord = create_test_record_aged(now, Duration::ZERO);

    let appended: TransitionResult = state.append(record.clone());
    let removed: TransitionResult = appended.new_state.remove_by_id(&record.id);

    assert_eq!(removed.new_state, state);
    assert_eq!(removed.change, LedgerChange::Removed(Box::new(record)));
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let now: OffsetDateTime = create_test_now();
    let state: LedgerState = create_test_state(now);

    let result: TransitionResult = state.remove_by_id(&BookingId::new("42"));

    assert_eq!(result.new_state, state);
    assert_eq!(result.change, LedgerChange::Unchanged);
    assert!(!result.is_changed());
}

#[test]
fn test_remove_takes_only_first_match() {
    let now: OffsetDateTime = create_test_now();
    let record: BookingRecord = create_test_record_aged(now, Duration::hours(1));
    let state: LedgerState = LedgerState::from_records(vec![record.clone(), record.clone()]);

    let result: TransitionResult = state.remove_by_id(&record.id);

    assert_eq!(result.new_state.records, vec![record]);
}

#[test]
fn test_purge_drops_only_expired_records() {
    let now: OffsetDateTime = create_test_now();
    let state: LedgerState = create_test_state(now);

    let result: TransitionResult = state.purge_expired(now, RETENTION);

    assert_eq!(result.change, LedgerChange::Purged { removed: 1 });
    assert_eq!(result.new_state.records, state.records[1..].to_vec());
}

#[test]
fn test_purge_boundary_25h_removed_23h_kept() {
    let now: OffsetDateTime = create_test_now();
    let older: BookingRecord = create_test_record_aged(now, Duration::hours(25));
    let newer: BookingRecord = create_test_record_aged(now, Duration::hours(23));
    let state: LedgerState = LedgerState::from_records(vec![older, newer.clone()]);

    let result: TransitionResult = state.purge_expired(now, RETENTION);

    assert_eq!(result.new_state.records, vec![newer]);
}

#[test]
fn test_purge_is_idempotent() {
    let now: OffsetDateTime = create_test_now();
    let state: LedgerState = create_test_state(now);

    let first: TransitionResult = state.purge_expired(now, RETENTION);
    let second: TransitionResult = first.new_state.purge_expired(now, RETENTION);

    assert_eq!(second.new_state, first.new_state);
    assert_eq!(second.change, LedgerChange::Purged { removed: 0 });
    assert!(!second.is_changed());
}

#[test]
fn test_purge_drops_ids_without_timestamp() {
    let now: OffsetDateTime = create_test_now();
    let mut legacy: BookingRecord = create_test_record_aged(now, Duration::ZERO);
    legacy.id = BookingId::new("not-a-timestamp");
    let state: LedgerState = LedgerState::from_records(vec![legacy]);

    let result: TransitionResult = state.purge_expired(now, RETENTION);

    assert!(result.new_state.is_empty());
}

#[test]
fn test_purge_respects_custom_retention() {
    let now: OffsetDateTime = create_test_now();
    let state: LedgerState = create_test_state(now);

    let result: TransitionResult = state.purge_expired(now, Duration::hours(1));

    assert_eq!(result.change, LedgerChange::Purged { removed: 2 });
    assert_eq!(result.new_state.len(), 1);
}
