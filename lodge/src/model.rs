//! Record types for the three persisted collections.
//!
//! Each record is a flat JSON object with camelCase keys. Hotels carry the
//! room-availability counter; reservations reference a hotel and a
//! customer by id. `occupiedRooms` is derived, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{Identified, RecordId};

/// A hotel record.
///
/// Invariant: `available_rooms <= total_rooms`. The ledger operations
/// maintain this; the counters are unsigned so neither can go negative.
/// Stored records violating the invariant fail the typed decode, so the
/// store drops them like any other undecodable element.
///
/// # Examples
///
/// ```
/// use lodge::{Hotel, RecordId};
///
/// let hotel = Hotel::new(RecordId::FIRST, "Grand Palace", "Veracruz", 100);
/// assert_eq!(hotel.available_rooms, hotel.total_rooms);
/// assert_eq!(hotel.occupied_rooms(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawHotel")]
pub struct Hotel {
    /// Unique identifier, assigned on creation.
    pub id: RecordId,
    /// Hotel name.
    pub name: String,
    /// Free-form location.
    pub state: String,
    /// Total number of rooms.
    pub total_rooms: u32,
    /// Rooms currently free to reserve.
    pub available_rooms: u32,
}

/// Decoded form of a stored hotel record, before the invariant check.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHotel {
    id: RecordId,
    name: String,
    state: String,
    total_rooms: u32,
    available_rooms: u32,
}

impl TryFrom<RawHotel> for Hotel {
    type Error = crate::error::Error;

    fn try_from(raw: RawHotel) -> Result<Self, Self::Error> {
        if raw.available_rooms > raw.total_rooms {
            return Err(crate::error::Error::Validation {
                field: "available_rooms".into(),
                message: format!(
                    "record {} has {} rooms available out of {} total",
                    raw.id, raw.available_rooms, raw.total_rooms
                ),
            });
        }
        Ok(Self {
            id: raw.id,
            name: raw.name,
            state: raw.state,
            total_rooms: raw.total_rooms,
            available_rooms: raw.available_rooms,
        })
    }
}

impl Hotel {
    /// Creates a hotel record with every room available.
    #[must_use]
    pub fn new(id: RecordId, name: impl Into<String>, state: impl Into<String>, total_rooms: u32) -> Self {
        Self {
            id,
            name: name.into(),
            state: state.into(),
            total_rooms,
            available_rooms: total_rooms,
        }
    }

    /// Returns the number of occupied rooms (`total - available`).
    #[must_use]
    pub const fn occupied_rooms(&self) -> u32 {
        self.total_rooms - self.available_rooms
    }
}

impl Identified for Hotel {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A partial update to a hotel record.
///
/// Only the fields that are set are applied; the rest of the record is
/// left untouched. When `total_rooms` changes the ledger preserves the
/// occupied count and recomputes availability.
///
/// # Examples
///
/// ```
/// use lodge::HotelPatch;
///
/// let patch = HotelPatch::new().with_name("Grand Palace Hotel").with_total_rooms(200);
/// assert!(!patch.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelPatch {
    /// New name, if changing.
    pub name: Option<String>,
    /// New location, if changing.
    pub state: Option<String>,
    /// New total room count, if changing.
    pub total_rooms: Option<u32>,
}

impl HotelPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name to update.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the location to update.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the total room count to update.
    #[must_use]
    pub const fn with_total_rooms(mut self, total_rooms: u32) -> Self {
        self.total_rooms = Some(total_rooms);
        self
    }

    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.state.is_none() && self.total_rooms.is_none()
    }
}

/// A customer record. All contact fields are free-form and unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier, assigned on creation.
    pub id: RecordId,
    /// Customer name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

impl Customer {
    /// Creates a customer record.
    #[must_use]
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl Identified for Customer {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A partial update to a customer record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    /// New name, if changing.
    pub name: Option<String>,
    /// New email, if changing.
    pub email: Option<String>,
    /// New phone number, if changing.
    pub phone: Option<String>,
}

impl CustomerPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name to update.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the email to update.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number to update.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// A reservation linking one customer to one room in one hotel.
///
/// A reservation's existence implies exactly one decremented room on its
/// hotel; cancelling it restores exactly one room. Deleting the referenced
/// hotel or customer does not cascade; the reservation is left dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Unique identifier, assigned on creation.
    pub id: RecordId,
    /// The customer holding the reservation.
    pub customer_id: RecordId,
    /// The hotel the room belongs to.
    pub hotel_id: RecordId,
    /// When the reservation was booked. Records written before this field
    /// existed decode with the load time.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a reservation record stamped with the current time.
    #[must_use]
    pub fn new(id: RecordId, customer_id: RecordId, hotel_id: RecordId) -> Self {
        Self {
            id,
            customer_id,
            hotel_id,
            created_at: Utc::now(),
        }
    }
}

impl Identified for Reservation {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u64) -> RecordId {
        RecordId::try_from(value).unwrap()
    }

    #[test]
    fn test_hotel_new_all_rooms_available() {
        let hotel = Hotel::new(id(1), "Grand Palace", "Veracruz", 100);
        assert_eq!(hotel.total_rooms, 100);
        assert_eq!(hotel.available_rooms, 100);
        assert_eq!(hotel.occupied_rooms(), 0);
    }

    #[test]
    fn test_hotel_occupied_rooms() {
        let mut hotel = Hotel::new(id(1), "Grand Palace", "Veracruz", 10);
        hotel.available_rooms = 7;
        assert_eq!(hotel.occupied_rooms(), 3);
    }

    #[test]
    fn test_hotel_json_field_names() {
        let hotel = Hotel::new(id(1), "Grand Palace", "Veracruz", 100);
        let json = serde_json::to_value(&hotel).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Grand Palace");
        assert_eq!(json["state"], "Veracruz");
        assert_eq!(json["totalRooms"], 100);
        assert_eq!(json["availableRooms"], 100);
    }

    #[test]
    fn test_hotel_patch_builder() {
        let patch = HotelPatch::new()
            .with_name("New Name")
            .with_state("Puebla")
            .with_total_rooms(50);
        assert_eq!(patch.name.as_deref(), Some("New Name"));
        assert_eq!(patch.state.as_deref(), Some("Puebla"));
        assert_eq!(patch.total_rooms, Some(50));
        assert!(!patch.is_empty());
        assert!(HotelPatch::new().is_empty());
    }

    #[test]
    fn test_customer_json_field_names() {
        let customer = Customer::new(id(2), "Anuar", "anuar@email.com", "2227709000");
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["name"], "Anuar");
        assert_eq!(json["email"], "anuar@email.com");
        assert_eq!(json["phone"], "2227709000");
    }

    #[test]
    fn test_customer_patch_builder() {
        let patch = CustomerPatch::new().with_email("new@email.com");
        assert_eq!(patch.email.as_deref(), Some("new@email.com"));
        assert!(patch.name.is_none());
        assert!(CustomerPatch::new().is_empty());
    }

    #[test]
    fn test_reservation_json_field_names() {
        let reservation = Reservation::new(id(1), id(2), id(3));
        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["customerId"], 2);
        assert_eq!(json["hotelId"], 3);
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_reservation_decodes_without_created_at() {
        // Files written before the timestamp existed still load.
        let json = r#"{"id": 1, "customerId": 2, "hotelId": 3}"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.id.value(), 1);
        assert_eq!(reservation.customer_id.value(), 2);
        assert_eq!(reservation.hotel_id.value(), 3);
    }

    #[test]
    fn test_hotel_decode_rejects_more_available_than_total() {
        let json = r#"{"id": 1, "name": "A", "state": "X", "totalRooms": 5, "availableRooms": 9}"#;
        let result: Result<Hotel, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_hotel_decode_accepts_full_availability() {
        let json = r#"{"id": 1, "name": "A", "state": "X", "totalRooms": 5, "availableRooms": 5}"#;
        let hotel: Hotel = serde_json::from_str(json).unwrap();
        assert_eq!(hotel.occupied_rooms(), 0);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let hotel = Hotel::new(id(4), "Fiesta Americana", "Puebla", 200);
        let json = serde_json::to_string(&hotel).unwrap();
        let back: Hotel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hotel);
    }
}
