//! Hotel ledger: CRUD plus the room-availability counter.

use crate::error::{Entity, Error, Result};
use crate::id::next_id;
use crate::model::{Hotel, HotelPatch};
use crate::store::{CollectionStore, StoreConfig};

/// CRUD and availability operations over the hotel collection.
///
/// Every operation independently loads and saves `hotels.json`; the ledger
/// keeps no in-memory state between calls.
///
/// # Examples
///
/// ```no_run
/// use lodge::{HotelLedger, StoreConfig};
///
/// let ledger = HotelLedger::new(StoreConfig::new("/tmp/lodge-data"));
/// let hotel = ledger.create("Grand Palace", "Veracruz", 100).unwrap();
/// assert_eq!(hotel.available_rooms, 100);
/// ```
#[derive(Debug, Clone)]
pub struct HotelLedger {
    store: CollectionStore,
}

impl HotelLedger {
    /// Name of the collection this ledger owns.
    pub const COLLECTION: &'static str = "hotels";

    /// Creates a ledger over the given storage configuration.
    #[must_use]
    pub const fn new(config: StoreConfig) -> Self {
        Self {
            store: CollectionStore::new(config),
        }
    }

    fn load(&self) -> Result<Vec<Hotel>> {
        Ok(self.store.load::<Hotel>(Self::COLLECTION)?.records)
    }

    fn save(&self, hotels: &[Hotel]) -> Result<()> {
        self.store.save(Self::COLLECTION, hotels)
    }

    /// Creates a hotel with every room available and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn create(
        &self,
        name: impl Into<String>,
        state: impl Into<String>,
        total_rooms: u32,
    ) -> Result<Hotel> {
        let mut hotels = self.load()?;
        let hotel = Hotel::new(next_id(&hotels), name, state, total_rooms);
        log::debug!("creating hotel {} ({})", hotel.id, hotel.name);
        hotels.push(hotel.clone());
        self.save(&hotels)?;
        Ok(hotel)
    }

    /// Removes the hotel with the given id.
    ///
    /// Reservations referencing the hotel are NOT cascaded; they stay in
    /// the reservation collection as dangling records.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no hotel has the id.
    pub fn delete(&self, id: crate::RecordId) -> Result<()> {
        let mut hotels = self.load()?;
        let before = hotels.len();
        hotels.retain(|hotel| hotel.id != id);
        if hotels.len() == before {
            return Err(Error::NotFound {
                entity: Entity::Hotel,
                id,
            });
        }
        self.save(&hotels)
    }

    /// Returns the hotel with the given id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no hotel has the id.
    pub fn find_by_id(&self, id: crate::RecordId) -> Result<Hotel> {
        self.load()?
            .into_iter()
            .find(|hotel| hotel.id == id)
            .ok_or(Error::NotFound {
                entity: Entity::Hotel,
                id,
            })
    }

    /// Returns all hotels in the collection.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn list(&self) -> Result<Vec<Hotel>> {
        self.load()
    }

    /// Applies a partial update to the hotel with the given id.
    ///
    /// When `total_rooms` changes, the occupied count is preserved:
    /// `new_available = new_total - occupied`. A patch that would shrink
    /// the total below the occupied count is rejected and the record is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no hotel has the id, or
    /// `Error::Validation` if the new total is below the occupied count.
    pub fn modify(&self, id: crate::RecordId, patch: HotelPatch) -> Result<Hotel> {
        let mut hotels = self.load()?;
        let hotel = hotels
            .iter_mut()
            .find(|hotel| hotel.id == id)
            .ok_or(Error::NotFound {
                entity: Entity::Hotel,
                id,
            })?;

        if let Some(total_rooms) = patch.total_rooms {
            let occupied = hotel.occupied_rooms();
            if total_rooms < occupied {
                return Err(Error::Validation {
                    field: "total_rooms".into(),
                    message: format!(
                        "cannot shrink total rooms to {total_rooms}: {occupied} room(s) are occupied"
                    ),
                });
            }
            hotel.total_rooms = total_rooms;
            hotel.available_rooms = total_rooms - occupied;
        }
        if let Some(name) = patch.name {
            hotel.name = name;
        }
        if let Some(state) = patch.state {
            hotel.state = state;
        }

        let updated = hotel.clone();
        self.save(&hotels)?;
        Ok(updated)
    }

    /// Takes one room from the hotel's availability.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no hotel has the id, or
    /// `Error::NoAvailability` if `available_rooms` is already 0. On
    /// failure the collection file is not rewritten.
    pub fn reserve_room(&self, id: crate::RecordId) -> Result<Hotel> {
        let mut hotels = self.load()?;
        let hotel = hotels
            .iter_mut()
            .find(|hotel| hotel.id == id)
            .ok_or(Error::NotFound {
                entity: Entity::Hotel,
                id,
            })?;

        if hotel.available_rooms == 0 {
            return Err(Error::NoAvailability { hotel_id: id });
        }
        hotel.available_rooms -= 1;

        let updated = hotel.clone();
        self.save(&hotels)?;
        Ok(updated)
    }

    /// Returns one room to the hotel's availability.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no hotel has the id, or
    /// `Error::NothingToCancel` if every room is already available. On
    /// failure the collection file is not rewritten.
    pub fn cancel_reservation(&self, id: crate::RecordId) -> Result<Hotel> {
        let mut hotels = self.load()?;
        let hotel = hotels
            .iter_mut()
            .find(|hotel| hotel.id == id)
            .ok_or(Error::NotFound {
                entity: Entity::Hotel,
                id,
            })?;

        if hotel.available_rooms >= hotel.total_rooms {
            return Err(Error::NothingToCancel { hotel_id: id });
        }
        hotel.available_rooms += 1;

        let updated = hotel.clone();
        self.save(&hotels)?;
        Ok(updated)
    }
}
