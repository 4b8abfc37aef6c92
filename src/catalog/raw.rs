//! Raw catalog records → `Listing`
//!
//! The bundled catalog is a JSON export shaped either
//! `{"data": {"data": [...]}}` or `{"data": [...]}`. Records are converted
//! one at a time so a single bad record is skipped rather than failing the
//! whole snapshot. No I/O happens here; the caller supplies the text.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::{ContactDetail, Coordinate, Listing, ListingId, Room};

use super::ListingStore;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no 'data' array")]
    MissingData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawListing {
    id: Value,
    name_th: Value,
    name_en: Value,
    address_no: Value,
    road: Value,
    district: Value,
    sub_district: Value,
    province: Value,
    postal_code: Value,
    region_scope: Value,
    contact_mobile_phone_no: Value,
    contact_email: Value,
    biz_contact_website: Value,
    biz_contact_facebook: Value,
    biz_contact_instagram: Value,
    contact_line: Value,
    /// `{ "coordinates": [lng, lat] }`; anything else means no coordinate
    location: Value,
    images: Value,
    rooms: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawRoom {
    id: Value,
    name: Value,
    price: Value,
    images: Value,
    number_of_room: Value,
}

impl ListingStore {
    /// Parse a raw catalog export into a snapshot
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(json)?;
        let records = record_array(&root).ok_or(CatalogError::MissingData)?;

        let mut listings = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            match RawListing::deserialize(record) {
                Ok(raw) => match raw.into_listing() {
                    Some(listing) => listings.push(listing),
                    None => tracing::warn!("Skipping catalog record {}: no id", i),
                },
                Err(e) => tracing::warn!("Skipping catalog record {}: {}", i, e),
            }
        }

        Ok(ListingStore::from_listings(listings))
    }
}

fn record_array(root: &Value) -> Option<&Vec<Value>> {
    let data = root.get("data")?;
    data.get("data")
        .and_then(Value::as_array)
        .or_else(|| data.as_array())
}

impl RawListing {
    fn into_listing(self) -> Option<Listing> {
        let id = text(&self.id)?;

        let address_text = [
            &self.address_no,
            &self.road,
            &self.district,
            &self.sub_district,
            &self.province,
            &self.postal_code,
        ]
        .iter()
        .filter_map(|v| text(v))
        .collect::<Vec<_>>()
        .join(" ");

        let contact_detail = ContactDetail {
            phone: text(&self.contact_mobile_phone_no),
            email: text(&self.contact_email),
            website: text(&self.biz_contact_website),
            facebook: text(&self.biz_contact_facebook),
            instagram: text(&self.biz_contact_instagram),
            line: text(&self.contact_line),
        };

        let rooms = self
            .rooms
            .as_array()
            .map(|rooms| rooms.iter().filter_map(RawRoom::from_value).collect())
            .unwrap_or_default();

        Some(Listing {
            id: ListingId::new(id),
            name_local: text(&self.name_th),
            name_foreign: text(&self.name_en),
            address_text,
            region_scope: text(&self.region_scope),
            province: text(&self.province),
            coordinate: coordinate(&self.location),
            images: image_refs(&self.images),
            contact_summary: contact_detail.summary(),
            contact_detail,
            rooms,
        })
    }
}

/// GeoJSON order: [longitude, latitude]
fn coordinate(location: &Value) -> Option<Coordinate> {
    match location.get("coordinates")?.as_array()?.as_slice() {
        [lng, lat, ..] => Some(Coordinate::new(number(lng)?, number(lat)?)),
        _ => None,
    }
}

impl RawRoom {
    /// Non-object entries are dropped; a room with bad fields keeps its defaults
    fn from_value(value: &Value) -> Option<Room> {
        if !value.is_object() {
            return None;
        }
        match RawRoom::deserialize(value) {
            Ok(raw) => Some(raw.into_room()),
            Err(e) => {
                tracing::warn!("Skipping malformed room entry: {}", e);
                None
            }
        }
    }

    fn into_room(self) -> Room {
        Room {
            id: text(&self.id).unwrap_or_default(),
            name: text(&self.name),
            price: parse_price(&self.price),
            images: image_refs(&self.images),
            unit_count: number(&self.number_of_room)
                .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u32::MAX as f64)
                .map(|n| n as u32),
        }
    }
}

/// Non-empty trimmed string from a string or number value
fn text(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => whole_number(n).unwrap_or_else(|| n.to_string()),
        _ => return None,
    };
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// `1.0` formats as `1` so float-encoded ids stay stable
fn whole_number(n: &serde_json::Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return Some(i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f.abs() < 9.0e15 {
        Some(format!("{}", f as i64))
    } else {
        None
    }
}

/// Number from a JSON number or a numeric string
fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// Room price; missing, negative or malformed input has no price
pub fn parse_price(value: &Value) -> Option<f64> {
    number(value).filter(|p| *p >= 0.0)
}

/// Image references given as plain strings or `{ "url": ... }` objects
fn image_refs(value: &Value) -> Vec<String> {
    let Some(values) = value.as_array() else {
        return Vec::new();
    };
    values
        .iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Object(map) => map.get("url").and_then(Value::as_str).map(String::from),
            _ => None,
        })
        .filter(|s| !s.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MinPrice;
    use serde_json::json;

    #[test]
    fn test_nested_envelope() {
        let raw = json!({
            "data": { "data": [
                {
                    "id": "h-1",
                    "nameTh": "โรงแรมกะตะ",
                    "nameEn": "Kata Hotel",
                    "addressNo": "12/3",
                    "road": "Kata Rd",
                    "district": null,
                    "subDistrict": "Karon",
                    "province": "Phuket",
                    "postalCode": 83100,
                    "regionScope": "South",
                    "contactMobilePhoneNo": "",
                    "contactEmail": "desk@kata.example",
                    "bizContactWebsite": "https://kata.example",
                    "location": { "type": "Point", "coordinates": [98.3, 7.82] },
                    "images": ["a.jpg", { "url": "b.jpg" }, 7],
                    "rooms": [
                        { "id": "r1", "name": "Deluxe", "price": "1500", "numberOfRoom": 10 },
                        { "id": "r2", "name": "Standard", "price": 900.5 }
                    ]
                }
            ]}
        });

        let store = ListingStore::from_json_str(&raw.to_string()).unwrap();
        assert_eq!(store.len(), 1);

        let hotel = &store.listings()[0];
        assert_eq!(hotel.id.as_str(), "h-1");
        assert_eq!(hotel.name_local.as_deref(), Some("โรงแรมกะตะ"));
        assert_eq!(hotel.address_text, "12/3 Kata Rd Karon Phuket 83100");
        assert_eq!(hotel.contact_summary, "desk@kata.example");
        assert_eq!(hotel.contact_detail.website.as_deref(), Some("https://kata.example"));
        assert_eq!(hotel.coordinate, Some(Coordinate::new(98.3, 7.82)));
        assert_eq!(hotel.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(hotel.rooms.len(), 2);
        assert_eq!(hotel.rooms[0].unit_count, Some(10));
        assert_eq!(hotel.min_price(), MinPrice::Finite(900.5));
    }

    #[test]
    fn test_flat_envelope_and_numeric_ids() {
        let raw = r#"{"data": [{"id": 42, "nameEn": "Night Market"}]}"#;
        let store = ListingStore::from_json_str(raw).unwrap();

        let shop = &store.listings()[0];
        assert_eq!(shop.id.as_str(), "42");
        assert!(shop.rooms.is_empty());
        assert_eq!(shop.contact_summary, "-");
        assert_eq!(shop.coordinate, None);
        assert_eq!(shop.address_text, "");
    }

    #[test]
    fn test_records_without_id_are_skipped() {
        let raw = r#"{"data": [{"nameEn": "Ghost"}, {"id": "ok"}, "not an object"]}"#;
        let store = ListingStore::from_json_str(raw).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.listings()[0].id.as_str(), "ok");
    }

    #[test]
    fn test_malformed_price_has_no_min_price() {
        let raw = r#"{"data": [{"id": "h", "rooms": [
            {"id": "r", "price": "call us"},
            {"id": "s", "price": 700}
        ]}]}"#;
        let store = ListingStore::from_json_str(raw).unwrap();
        assert_eq!(store.listings()[0].rooms[0].price, None);
        assert_eq!(store.listings()[0].min_price(), MinPrice::Unbounded);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(&json!(1200)), Some(1200.0));
        assert_eq!(parse_price(&json!(" 850.5 ")), Some(850.5));
        assert_eq!(parse_price(&json!(-1)), None);
        assert_eq!(parse_price(&json!("")), None);
        assert_eq!(parse_price(&json!(null)), None);
        assert_eq!(parse_price(&json!("NaN")), None);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            ListingStore::from_json_str("{"),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            ListingStore::from_json_str(r#"{"items": []}"#),
            Err(CatalogError::MissingData)
        ));
        assert!(matches!(
            ListingStore::from_json_str(r#"{"data": {"data": 5}}"#),
            Err(CatalogError::MissingData)
        ));
    }

    #[test]
    fn test_short_coordinates_are_absent() {
        let raw = r#"{"data": [{"id": "a", "location": {"coordinates": [98.3]}}]}"#;
        let store = ListingStore::from_json_str(raw).unwrap();
        assert_eq!(store.listings()[0].coordinate, None);
    }

    #[test]
    fn test_malformed_location_and_rooms_keep_listing() {
        let raw = json!({ "data": [
            {
                "id": "a",
                "location": { "coordinates": null },
                "rooms": [{ "id": "r", "price": 800 }]
            },
            { "id": "b", "rooms": [null, { "id": "r", "price": 500 }, "suite"] },
            { "id": "c", "location": "n/a", "rooms": "none" },
            { "id": "d", "location": { "coordinates": [98.3, 7.8] } }
        ]});
        let store = ListingStore::from_json_str(&raw.to_string()).unwrap();

        let ids: Vec<&str> = store.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);

        let a = &store.listings()[0];
        assert_eq!(a.coordinate, None);
        assert_eq!(a.min_price(), MinPrice::Finite(800.0));

        let b = &store.listings()[1];
        assert_eq!(b.rooms.len(), 1);
        assert_eq!(b.min_price(), MinPrice::Finite(500.0));

        let c = &store.listings()[2];
        assert_eq!(c.coordinate, None);
        assert!(c.rooms.is_empty());

        assert_eq!(store.listings()[3].coordinate, Some(Coordinate::new(98.3, 7.8)));
    }

    #[test]
    fn test_float_ids_are_whole_numbers() {
        let raw = r#"{"data": [{"id": 1.0}, {"id": 2.5}, {"id": -7}]}"#;
        let store = ListingStore::from_json_str(raw).unwrap();

        let ids: Vec<&str> = store.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2.5", "-7"]);
    }
}
