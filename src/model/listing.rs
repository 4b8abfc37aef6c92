//! Listing and Room records
//!
//! A `Listing` with an empty `rooms` sequence is a non-hotel business for
//! category faceting. Nothing in the engine mutates a listing after load.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::price::MinPrice;

/// Opaque, stable listing identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        ListingId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        ListingId(s.to_string())
    }
}

impl From<String> for ListingId {
    fn from(s: String) -> Self {
        ListingId(s)
    }
}

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Coordinate { longitude, latitude }
    }
}

/// Full contact record, shown when a listing is expanded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub line: Option<String>,
}

impl ContactDetail {
    /// Single display string: mobile phone, else email, else "-"
    pub fn summary(&self) -> String {
        self.phone
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.email.as_deref().filter(|s| !s.trim().is_empty()))
            .unwrap_or("-")
            .to_string()
    }
}

/// Bookable room type of a hotel listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: Option<String>,
    /// None when the source price was missing or not a usable number
    pub price: Option<f64>,
    pub images: Vec<String>,
    pub unit_count: Option<u32>,
}

impl Room {
    /// Room with only an id and a price
    pub fn priced(id: impl Into<String>, price: f64) -> Self {
        Room {
            id: id.into(),
            price: Some(price),
            ..Room::default()
        }
    }
}

/// One catalog entity (hotel or other business)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name_local: Option<String>,
    pub name_foreign: Option<String>,
    pub address_text: String,
    pub region_scope: Option<String>,
    pub province: Option<String>,
    pub coordinate: Option<Coordinate>,
    pub images: Vec<String>,
    pub contact_summary: String,
    pub contact_detail: ContactDetail,
    pub rooms: Vec<Room>,
}

impl Listing {
    /// Bare listing with only an id; other fields are filled with struct update syntax
    pub fn new(id: impl Into<ListingId>) -> Self {
        Listing {
            id: id.into(),
            contact_summary: "-".to_string(),
            ..Listing::default()
        }
    }

    /// Non-hotel businesses carry no rooms
    pub fn is_hotel(&self) -> bool {
        !self.rooms.is_empty()
    }

    /// Lowest room price, recomputed from `rooms` on every call
    pub fn min_price(&self) -> MinPrice {
        MinPrice::of_rooms(&self.rooms)
    }
}
