// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use royal_gold_domain::{BookingRules, Money, RoomCatalog, RoomType, RoomTypeKey};

use crate::{
    ApiError, BookingFormResponse, ListRoomsResponse, RoomDetailsResponse, list_rooms,
    prepare_booking_form, room_details,
};

#[test]
fn test_list_rooms_keeps_catalog_order() {
    let response: ListRoomsResponse = list_rooms(&RoomCatalog::royal_gold());

    let keys: Vec<&str> = response.rooms.iter().map(|room| room.key.as_str()).collect();
    assert_eq!(response.hotel_name, "Royal Gold Hotel");
    assert_eq!(keys, vec!["single", "double", "suite", "standard", "executive"]);
    assert_eq!(response.rooms[2].name, "Deluxe Suite");
    assert_eq!(response.rooms[2].price_per_night, "150");
    assert_eq!(response.rooms[2].thumbnail.as_deref(), Some("suite1.jpg"));
}

#[test]
fn test_room_details_for_double() {
    let response: RoomDetailsResponse = room_details(&RoomCatalog::royal_gold(), "double").unwrap();

    assert_eq!(response.name, "Double Room");
    assert_eq!(response.price_display, "$85");
    assert_eq!(response.available_rooms, 10);
    assert_eq!(response.max_guests, 2);
    assert_eq!(response.images.len(), 10);
    assert_eq!(response.images[0], "double1.jpg");
    assert_eq!(response.images[9], "double10.jpg");
    assert_eq!(response.book_label, "Book Double Room Now");
}

#[test]
fn test_room_details_unknown_key_is_not_found() {
    let result: Result<RoomDetailsResponse, ApiError> =
        room_details(&RoomCatalog::royal_gold(), "penthouse");

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_booking_form_for_suite_is_capped_by_global_limit() {
    let response: BookingFormResponse =
        prepare_booking_form(&RoomCatalog::royal_gold(), &BookingRules::default(), "suite")
            .unwrap();

    assert_eq!(response.room_type, "suite");
    assert_eq!(response.room_price, "150");
    assert_eq!(response.info_line, "Deluxe Suite ($150/Night)");
    assert_eq!(response.default_guests, 1);
    assert_eq!(response.max_guests_allowed, 4);
}

#[test]
fn test_booking_form_uses_lower_global_cap() {
    let rules: BookingRules = BookingRules {
        max_guests_overall: 3,
        ..BookingRules::default()
    };

    let response: BookingFormResponse =
        prepare_booking_form(&RoomCatalog::royal_gold(), &rules, "suite").unwrap();

    assert_eq!(response.max_guests_allowed, 3);
}

#[test]
fn test_booking_form_for_single_allows_one_guest() {
    let response: BookingFormResponse =
        prepare_booking_form(&RoomCatalog::royal_gold(), &BookingRules::default(), "single")
            .unwrap();

    assert_eq!(response.info_line, "Single Room ($50/Night)");
    assert_eq!(response.max_guests_allowed, 1);
}

#[test]
fn test_fractional_price_drops_trailing_zero() {
    let key: RoomTypeKey = RoomTypeKey::new("loft");
    let loft: RoomType = RoomType::new(
        &key,
        "Loft",
        Money::from_cents(8550),
        2,
        3,
        "Top floor",
        vec![String::from("loft1.jpg")],
    )
    .unwrap();
    let catalog: RoomCatalog = RoomCatalog::from_entries(vec![(key, loft)]).unwrap();

    let details: RoomDetailsResponse = room_details(&catalog, "loft").unwrap();
    let form: BookingFormResponse =
        prepare_booking_form(&catalog, &BookingRules::default(), "loft").unwrap();

    assert_eq!(details.price_display, "$85.5");
    assert_eq!(form.info_line, "Loft ($85.5/Night)");
    assert_eq!(form.room_price, "85.5");
}
