// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading a room catalog from a JSON file.
//!
//! The file holds an array of room types in display order:
//!
//! ```json
//! [
//!   { "key": "double", "name": "Double Room", "price": 85,
//!     "max_guests": 2, "available_rooms": 10 }
//! ]
//! ```

use royal_gold_domain::{
    DEFAULT_IMAGES_PER_ROOM, DomainError, RoomCatalog, RoomType, RoomTypeKey, placeholder_images,
};
use serde::Deserialize;
use std::path::Path;

/// Errors raised while loading a catalog file.
#[derive(Debug)]
pub enum CatalogFileError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not a valid catalog document.
    Parse(serde_json::Error),
    /// An entry broke a catalog rule.
    Invalid(DomainError),
}

impl std::fmt::Display for CatalogFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read catalog file: {err}"),
            Self::Parse(err) => write!(f, "Failed to parse catalog file: {err}"),
            Self::Invalid(err) => write!(f, "Invalid catalog: {err}"),
        }
    }
}

impl std::error::Error for CatalogFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

/// One entry of the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFileEntry {
    key: RoomTypeKey,
    #[serde(flatten)]
    room: RoomType,
}

/// Parses a catalog document.
///
/// Entries without images get the `<key>1.jpg` .. `<key>10.jpg` placeholders.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, a key repeats, or an entry
/// fails validation.
pub fn parse_catalog(text: &str) -> Result<RoomCatalog, CatalogFileError> {
    let entries: Vec<CatalogFileEntry> =
        serde_json::from_str(text).map_err(CatalogFileError::Parse)?;

    let mut rooms: Vec<(RoomTypeKey, RoomType)> = Vec::with_capacity(entries.len());
    for entry in entries {
        let room: RoomType = if entry.room.images().is_empty() {
            RoomType::new(
                &entry.key,
                entry.room.name(),
                entry.room.price_per_night(),
                entry.room.max_guests(),
                entry.room.available_rooms(),
                entry.room.description(),
                placeholder_images(entry.key.value(), DEFAULT_IMAGES_PER_ROOM),
            )
            .map_err(CatalogFileError::Invalid)?
        } else {
            entry.room
        };
        rooms.push((entry.key, room));
    }

    RoomCatalog::from_entries(rooms).map_err(CatalogFileError::Invalid)
}

/// Reads and parses a catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<RoomCatalog, CatalogFileError> {
    let text: String = std::fs::read_to_string(path).map_err(CatalogFileError::Io)?;
    parse_catalog(&text)
}
