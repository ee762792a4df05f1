// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use time::macros::date;

use crate::{FormFieldError, parse_form_date, parse_guest_count};

#[test]
fn test_parse_form_date_accepts_iso_dates() {
    let parsed: Date = parse_form_date("check_in", "2024-02-29").unwrap();
    assert_eq!(parsed, date!(2024 - 02 - 29));
}

#[test]
fn test_parse_form_date_rejects_blank() {
    assert_eq!(
        parse_form_date("check_out", "  "),
        Err(FormFieldError::Missing { field: "check_out" })
    );
}

#[test]
fn test_parse_form_date_rejects_impossible_date() {
    let err: FormFieldError = parse_form_date("check_in", "2023-02-29").unwrap_err();
    assert_eq!(err.field(), "check_in");
    assert_eq!(
        err.to_string(),
        "'2023-02-29' is not a valid date, expected YYYY-MM-DD"
    );
}

#[test]
fn test_parse_guest_count() {
    assert_eq!(parse_guest_count(" 3 "), Ok(3));
    assert_eq!(parse_guest_count("0"), Ok(0));
    assert_eq!(
        parse_guest_count("-1"),
        Err(FormFieldError::InvalidGuestCount {
            value: String::from("-1")
        })
    );
    assert_eq!(
        parse_guest_count(""),
        Err(FormFieldError::Missing { field: "guests" })
    );
}
