// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ledger behaviour, checked against every slot store.

use crate::tests::{
    create_memory_ledger, create_sqlite_ledger, create_test_now, create_test_record,
};
use crate::{BookingLedger, DEFAULT_STORAGE_KEY, PersistenceError, SlotStore};
use royal_gold_domain::{BookingId, BookingRecord};
use time::{Duration, OffsetDateTime};

const RETENTION: Duration = Duration::hours(24);

/// Runs a check against a memory-backed and a SQLite-backed ledger.
macro_rules! for_each_store {
    ($check:ident) => {
        $check(&mut create_memory_ledger());
        $check(&mut create_sqlite_ledger());
    };
}

fn read_raw<S: SlotStore>(ledger: &mut BookingLedger<S>) -> Option<String> {
    ledger.store_mut().read_slot(DEFAULT_STORAGE_KEY).unwrap()
}

fn write_raw<S: SlotStore>(ledger: &mut BookingLedger<S>, value: &str) {
    ledger
        .store_mut()
        .write_slot(DEFAULT_STORAGE_KEY, value)
        .unwrap();
}

fn empty_ledger_lists_nothing<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    let records: Vec<BookingRecord> = ledger.list_all().unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_missing_slot_is_empty_ledger() {
    for_each_store!(empty_ledger_lists_nothing);
}

fn append_preserves_order<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    let now: OffsetDateTime = create_test_now();
    let first: BookingRecord = create_test_record(now, Duration::hours(3));
    let second: BookingRecord = create_test_record(now, Duration::hours(2));
    let third: BookingRecord = create_test_record(now, Duration::hours(1));

    ledger.append(first.clone()).unwrap();
    ledger.append(second.clone()).unwrap();
    ledger.append(third.clone()).unwrap();

    assert_eq!(ledger.list_all().unwrap(), vec![first, second, third]);
}

#[test]
fn test_append_keeps_stored_order() {
    for_each_store!(append_preserves_order);
}

fn append_keeps_same_millisecond_records<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    let first: BookingRecord = create_test_record(create_test_now(), Duration::ZERO);
    let mut second: BookingRecord = first.clone();
    second.room_type = String::from("Deluxe Suite");

    ledger.append(first.clone()).unwrap();
    ledger.append(second.clone()).unwrap();

    assert_eq!(
        ledger.list_all().unwrap(),
        vec![first.clone(), second.clone()]
    );

    let removed: bool = ledger.remove_by_id(&first.id).unwrap();

    assert!(removed);
    assert_eq!(ledger.list_all().unwrap(), vec![second]);
}

#[test]
fn test_append_keeps_records_sharing_an_id() {
    for_each_store!(append_keeps_same_millisecond_records);
}

fn append_then_remove_round_trips<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    let now: OffsetDateTime = create_test_now();
    let existing: BookingRecord = create_test_record(now, Duration::hours(5));
    ledger.append(existing).unwrap();
    let before: Vec<BookingRecord> = ledger.list_all().unwrap();

    let added: BookingRecord = create_test_record(now, Duration::ZERO);
    ledger.append(added.clone()).unwrap();
    let removed: bool = ledger.remove_by_id(&added.id).unwrap();

    assert!(removed);
    assert_eq!(ledger.list_all().unwrap(), before);
}

#[test]
fn test_append_then_remove_restores_ledger() {
    for_each_store!(append_then_remove_round_trips);
}

fn remove_unknown_still_writes<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    let removed: bool = ledger
        .remove_by_id(&BookingId::new("1700000000000"))
        .unwrap();

    assert!(!removed);
    assert_eq!(read_raw(ledger).as_deref(), Some("[]"));
}

#[test]
fn test_remove_unknown_id_succeeds_and_rewrites_slot() {
    for_each_store!(remove_unknown_still_writes);
}

fn purge_removes_expired_only<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    let now: OffsetDateTime = create_test_now();
    let stale: BookingRecord = create_test_record(now, Duration::hours(25));
    let fresh: BookingRecord = create_test_record(now, Duration::hours(23));
    ledger.append(stale).unwrap();
    ledger.append(fresh.clone()).unwrap();

    let removed: usize = ledger.purge_expired(now, RETENTION).unwrap();

    assert_eq!(removed, 1);
    assert_eq!(ledger.list_all().unwrap(), vec![fresh]);
}

#[test]
fn test_purge_removes_25h_keeps_23h() {
    for_each_store!(purge_removes_expired_only);
}

fn purge_is_idempotent<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    let now: OffsetDateTime = create_test_now();
    ledger
        .append(create_test_record(now, Duration::hours(48)))
        .unwrap();
    ledger
        .append(create_test_record(now, Duration::hours(1)))
        .unwrap();

    let first: usize = ledger.purge_expired(now, RETENTION).unwrap();
    let after_first: Vec<BookingRecord> = ledger.list_all().unwrap();
    let second: usize = ledger.purge_expired(now, RETENTION).unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 0);
    assert_eq!(ledger.list_all().unwrap(), after_first);
}

#[test]
fn test_purge_twice_removes_nothing_the_second_time() {
    for_each_store!(purge_is_idempotent);
}

fn purge_without_expired_does_not_write<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    let removed: usize = ledger.purge_expired(create_test_now(), RETENTION).unwrap();

    assert_eq!(removed, 0);
    assert_eq!(read_raw(ledger), None);
}

#[test]
fn test_purge_with_nothing_expired_leaves_slot_untouched() {
    for_each_store!(purge_without_expired_does_not_write);
}

fn stored_json_matches_wire_format<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    let record: BookingRecord = create_test_record(create_test_now(), Duration::ZERO);
    ledger.append(record.clone()).unwrap();

    let stored: String = read_raw(ledger).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();

    assert_eq!(value[0]["id"], record.id.value());
    assert_eq!(value[0]["roomNumber"], "#305");
    assert_eq!(value[0]["roomType"], "Double Room");
    assert_eq!(value[0]["totalPrice"], "170.00");
    assert_eq!(value[0]["checkIn"], "2024-01-01");
    assert_eq!(value[0]["checkOut"], "2024-01-03");
    assert_eq!(value[0]["guests"], 2);
    assert_eq!(value[0]["status"], "Pending Payment");
}

#[test]
fn test_stored_json_uses_camel_case_wire_format() {
    for_each_store!(stored_json_matches_wire_format);
}

fn hand_written_slot_is_readable<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    write_raw(
        ledger,
        r##"[{"id":"1704097800000","roomNumber":"#042","roomType":"Suite","totalPrice":300,"checkIn":"2024-01-01","checkOut":"2024-01-03","guests":3}]"##,
    );

    let records: Vec<BookingRecord> = ledger.list_all().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id.value(), "1704097800000");
    assert_eq!(records[0].total_price.to_string(), "300.00");
    assert_eq!(records[0].guests, 3);
}

#[test]
fn test_numeric_price_and_missing_status_are_accepted() {
    for_each_store!(hand_written_slot_is_readable);
}

fn null_slot_is_empty<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    write_raw(ledger, "null");
    assert!(ledger.list_all().unwrap().is_empty());
}

#[test]
fn test_null_slot_is_empty_ledger() {
    for_each_store!(null_slot_is_empty);
}

fn corrupt_slot_fails<S: SlotStore>(ledger: &mut BookingLedger<S>) {
    write_raw(ledger, "{not json");

    let result: Result<(), PersistenceError> =
        ledger.append(create_test_record(create_test_now(), Duration::ZERO));

    assert!(matches!(
        result,
        Err(PersistenceError::SerializationError(_))
    ));
    assert_eq!(read_raw(ledger).as_deref(), Some("{not json"));
}

#[test]
fn test_corrupt_slot_is_not_overwritten() {
    for_each_store!(corrupt_slot_fails);
}

#[test]
fn test_custom_storage_key_is_used() {
    let mut ledger: BookingLedger<crate::MemorySlotStore> = BookingLedger::new(
        crate::MemorySlotStore::new(),
        crate::LedgerConfig {
            storage_key: String::from("otherBookings"),
        },
    );
    ledger
        .append(create_test_record(create_test_now(), Duration::ZERO))
        .unwrap();

    assert_eq!(read_raw(&mut ledger), None);
    assert!(
        ledger
            .store_mut()
            .read_slot("otherBookings")
            .unwrap()
            .is_some()
    );
}
