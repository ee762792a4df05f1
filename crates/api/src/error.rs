// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::form::FormFieldError;
use royal_gold::CoreError;
use royal_gold_domain::DomainError;
use royal_gold_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A booking rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Booking rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<FormFieldError> for ApiError {
    fn from(err: FormFieldError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::RoomTypeNotFound(key) => ApiError::ResourceNotFound {
            resource_type: String::from("Room type"),
            message: format!("Room type '{key}' does not exist"),
        },
        DomainError::DuplicateRoomType(_) | DomainError::InvalidRoomType { .. } => {
            ApiError::InvalidInput {
                field: String::from("catalog"),
                message,
            }
        }
        DomainError::InvalidStayDates { .. } => ApiError::DomainRuleViolation {
            rule: String::from("stay_dates"),
            message,
        },
        DomainError::InvalidGuestCount(_) => ApiError::InvalidInput {
            field: String::from("guests"),
            message,
        },
        DomainError::GuestLimitExceeded { .. } => ApiError::DomainRuleViolation {
            rule: String::from("max_guests_overall"),
            message,
        },
        DomainError::RoomCapacityExceeded { .. } => ApiError::DomainRuleViolation {
            rule: String::from("room_capacity"),
            message,
        },
        DomainError::InvalidPrice { .. } => ApiError::DomainRuleViolation {
            rule: String::from("price"),
            message,
        },
        DomainError::DateParseError { .. } | DomainError::DateArithmeticOverflow { .. } => {
            ApiError::InvalidInput {
                field: String::from("date"),
                message,
            }
        }
        DomainError::PriceArithmeticOverflow { .. } => ApiError::InvalidInput {
            field: String::from("room_price"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Every storage failure is internal; none is correctable by the guest.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: format!("Booking storage failed: {err}"),
    }
}
