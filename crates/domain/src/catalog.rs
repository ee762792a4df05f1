// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static room catalog.
//!
//! The catalog is reference data: it is built once and only read afterwards.
//! Bookings copy the room's display name at creation time, so nothing in the
//! ledger holds a live reference into the catalog.

use crate::error::DomainError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of placeholder images attached to each room in the default catalog.
pub const DEFAULT_IMAGES_PER_ROOM: usize = 10;

/// Identifier of a room type (e.g., `"double"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomTypeKey {
    value: String,
}

impl RoomTypeKey {
    /// Creates a new `RoomTypeKey`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the key value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for RoomTypeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A bookable room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    name: String,
    #[serde(alias = "price")]
    price_per_night: Money,
    max_guests: u32,
    available_rooms: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    images: Vec<String>,
}

impl RoomType {
    /// Creates a validated `RoomType`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key the room will be registered under (used in errors)
    /// * `name` - Display name
    /// * `price_per_night` - Nightly price, must be positive
    /// * `max_guests` - Occupancy cap, must be positive
    /// * `available_rooms` - Advisory availability count
    /// * `description` - Free text
    /// * `images` - Ordered image references
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoomType` if the name is empty, the price
    /// is zero, or the occupancy cap is zero.
    pub fn new(
        key: &RoomTypeKey,
        name: &str,
        price_per_night: Money,
        max_guests: u32,
        available_rooms: u32,
        description: &str,
        images: Vec<String>,
    ) -> Result<Self, DomainError> {
        let room: Self = Self {
            name: name.to_string(),
            price_per_night,
            max_guests,
            available_rooms,
            description: description.to_string(),
            images,
        };
        room.validate(key)?;
        Ok(room)
    }

    /// Checks the invariants every catalog entry must hold.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoomType` describing the first violation.
    pub fn validate(&self, key: &RoomTypeKey) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidRoomType {
            key: key.value().to_string(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("Name cannot be empty"));
        }
        if self.price_per_night.is_zero() {
            return Err(invalid("Price per night must be positive"));
        }
        if self.max_guests == 0 {
            return Err(invalid("Max guests must be at least 1"));
        }
        Ok(())
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nightly price.
    #[must_use]
    pub const fn price_per_night(&self) -> Money {
        self.price_per_night
    }

    /// Returns the per-room occupancy cap.
    #[must_use]
    pub const fn max_guests(&self) -> u32 {
        self.max_guests
    }

    /// Returns the advisory number of available rooms.
    #[must_use]
    pub const fn available_rooms(&self) -> u32 {
        self.available_rooms
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the ordered image references.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }
}

/// The set of room types offered by the hotel, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    entries: Vec<(RoomTypeKey, RoomType)>,
}

impl RoomCatalog {
    /// Builds a catalog from configuration entries.
    ///
    /// Entry order is kept as display order.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is repeated or an entry fails validation.
    pub fn from_entries(entries: Vec<(RoomTypeKey, RoomType)>) -> Result<Self, DomainError> {
        let mut seen: HashSet<&RoomTypeKey> = HashSet::new();
        for (key, room) in &entries {
            if !seen.insert(key) {
                return Err(DomainError::DuplicateRoomType(key.value().to_string()));
            }
            room.validate(key)?;
        }
        Ok(Self { entries })
    }

    /// The Royal Gold Hotel's room types.
    #[must_use]
    pub fn royal_gold() -> Self {
        let entries: Vec<(RoomTypeKey, RoomType)> = vec![
            default_room(
                "single",
                "Single Room",
                50,
                1,
                12,
                "Cozy room for solo travelers, includes basic amenities and free Wi-Fi.",
            ),
            default_room(
                "double",
                "Double Room",
                85,
                2,
                10,
                "Comfortable room with a large bed for two guests.",
            ),
            default_room(
                "suite",
                "Deluxe Suite",
                150,
                4,
                5,
                "Spacious suite with a separate living area and premium features.",
            ),
            default_room(
                "standard",
                "Standard Room",
                70,
                2,
                15,
                "A comfortable, spacious room offering great value and essential amenities.",
            ),
            default_room(
                "executive",
                "Executive Room",
                120,
                2,
                8,
                "Elevated comfort with a dedicated workspace, luxurious bedding, and city views.",
            ),
        ];
        Self { entries }
    }

    /// Looks up a room type by key.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoomTypeNotFound` for unknown keys.
    pub fn lookup(&self, key: &str) -> Result<&RoomType, DomainError> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key.value() == key)
            .map(|(_, room)| room)
            .ok_or_else(|| DomainError::RoomTypeNotFound(key.to_string()))
    }

    /// Iterates over the entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&RoomTypeKey, &RoomType)> {
        self.entries.iter().map(|(key, room)| (key, room))
    }

    /// Returns the number of room types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog has no room types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds `<prefix>1.jpg` through `<prefix><count>.jpg`.
#[must_use]
pub fn placeholder_images(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}{i}.jpg")).collect()
}

fn default_room(
    key: &str,
    name: &str,
    price: u64,
    max_guests: u32,
    available_rooms: u32,
    description: &str,
) -> (RoomTypeKey, RoomType) {
    (
        RoomTypeKey::new(key),
        RoomType {
            name: name.to_string(),
            price_per_night: Money::from_units(price),
            max_guests,
            available_rooms,
            description: description.to_string(),
            images: placeholder_images(key, DEFAULT_IMAGES_PER_ROOM),
        },
    )
}
