//! Reservation coordinator: the one cross-entity operation.
//!
//! Booking sequences customer lookup, hotel lookup, the availability
//! decrement, and the reservation-record append, in that order. The room
//! is decremented before the reservation record is durably written, so a
//! crash between the two file writes leaves an over-counted occupancy with
//! no matching reservation record. There is no multi-file transaction and
//! no healing pass; this is a documented limitation of the storage model.

use crate::error::{Entity, Error, Result};
use crate::id::next_id;
use crate::ledger::{CustomerLedger, HotelLedger};
use crate::model::Reservation;
use crate::store::{CollectionStore, StoreConfig};
use crate::RecordId;

/// Books and cancels reservations across the hotel and customer ledgers.
///
/// # Examples
///
/// ```no_run
/// use lodge::{ReservationCoordinator, StoreConfig};
///
/// let coordinator = ReservationCoordinator::new(StoreConfig::new("/tmp/lodge-data"));
/// let hotel = coordinator.hotels().create("Grand Palace", "Veracruz", 100).unwrap();
/// let customer = coordinator.customers().create("Anuar", "anuar@email.com", "555-0100").unwrap();
///
/// let reservation = coordinator.create(customer.id, hotel.id).unwrap();
/// coordinator.cancel(reservation.id).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ReservationCoordinator {
    hotels: HotelLedger,
    customers: CustomerLedger,
    store: CollectionStore,
}

impl ReservationCoordinator {
    /// Name of the collection this coordinator owns.
    pub const COLLECTION: &'static str = "reservations";

    /// Creates a coordinator with ledgers over the same storage directory.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            hotels: HotelLedger::new(config.clone()),
            customers: CustomerLedger::new(config.clone()),
            store: CollectionStore::new(config),
        }
    }

    /// Returns the hotel ledger this coordinator books against.
    #[must_use]
    pub const fn hotels(&self) -> &HotelLedger {
        &self.hotels
    }

    /// Returns the customer ledger this coordinator validates against.
    #[must_use]
    pub const fn customers(&self) -> &CustomerLedger {
        &self.customers
    }

    fn load(&self) -> Result<Vec<Reservation>> {
        Ok(self.store.load::<Reservation>(Self::COLLECTION)?.records)
    }

    /// Books a room: validates both references, decrements availability,
    /// then records the reservation.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` for the customer if it does not exist (checked
    ///   first, before any hotel or reservation state is touched);
    /// - `Error::NotFound` for the hotel if it does not exist;
    /// - `Error::NoAvailability` if the hotel is full, in which case no
    ///   reservation record is written and no state changes.
    pub fn create(&self, customer_id: RecordId, hotel_id: RecordId) -> Result<Reservation> {
        self.customers.find_by_id(customer_id)?;
        self.hotels.find_by_id(hotel_id)?;

        self.hotels.reserve_room(hotel_id)?;

        let mut reservations = self.load()?;
        let reservation = Reservation::new(next_id(&reservations), customer_id, hotel_id);
        log::debug!(
            "booking reservation {} (customer {customer_id}, hotel {hotel_id})",
            reservation.id
        );
        reservations.push(reservation.clone());
        self.store.save(Self::COLLECTION, &reservations)?;

        Ok(reservation)
    }

    /// Cancels a reservation: restores the room, then removes the record.
    ///
    /// If restoring the room fails (hotel gone, or its counter already
    /// shows every room available), the whole cancel fails and the
    /// reservation record is left intact.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` for the reservation if it does not exist,
    /// or any failure propagated from the hotel ledger.
    pub fn cancel(&self, id: RecordId) -> Result<()> {
        let mut reservations = self.load()?;
        let reservation = reservations
            .iter()
            .find(|reservation| reservation.id == id)
            .cloned()
            .ok_or(Error::NotFound {
                entity: Entity::Reservation,
                id,
            })?;

        self.hotels.cancel_reservation(reservation.hotel_id)?;

        reservations.retain(|candidate| candidate.id != id);
        self.store.save(Self::COLLECTION, &reservations)
    }

    /// Returns the reservation with the given id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no reservation has the id.
    pub fn find_by_id(&self, id: RecordId) -> Result<Reservation> {
        self.load()?
            .into_iter()
            .find(|reservation| reservation.id == id)
            .ok_or(Error::NotFound {
                entity: Entity::Reservation,
                id,
            })
    }

    /// Returns all reservations in the collection.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn list(&self) -> Result<Vec<Reservation>> {
        self.load()
    }
}
