// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of booking form fields.
//!
//! The booking form posts every field as text. These helpers turn the text
//! into typed values before the booking pipeline runs.

use royal_gold_domain::parse_iso_date;
use thiserror::Error;
use time::Date;

/// Booking form field errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormFieldError {
    /// A required field was left empty.
    #[error("Please fill in the {field} field")]
    Missing { field: &'static str },

    /// A date field is not a `YYYY-MM-DD` calendar date.
    #[error("'{value}' is not a valid date, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    /// The guest count is not a whole number.
    #[error("'{value}' is not a valid number of guests")]
    InvalidGuestCount { value: String },
}

impl FormFieldError {
    /// The form field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::InvalidDate { field, .. } => *field,
            Self::InvalidGuestCount { .. } => "guests",
        }
    }
}

/// Parses a date field.
///
/// # Errors
///
/// Returns `FormFieldError::Missing` for a blank value and
/// `FormFieldError::InvalidDate` for anything that is not `YYYY-MM-DD`.
pub fn parse_form_date(field: &'static str, value: &str) -> Result<Date, FormFieldError> {
    if value.trim().is_empty() {
        return Err(FormFieldError::Missing { field });
    }
    parse_iso_date(value).map_err(|_| FormFieldError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Parses the guest count field.
///
/// Zero parses; the booking pipeline rejects it.
///
/// # Errors
///
/// Returns `FormFieldError::Missing` for a blank value and
/// `FormFieldError::InvalidGuestCount` for anything that is not a whole
/// non-negative number.
pub fn parse_guest_count(value: &str) -> Result<u32, FormFieldError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(FormFieldError::Missing { field: "guests" });
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| FormFieldError::InvalidGuestCount {
            value: value.to_string(),
        })
}
