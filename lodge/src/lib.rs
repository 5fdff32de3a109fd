#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lodge
//!
//! A library for keeping hotel, customer and reservation records in JSON
//! collection files.
//!
//! Each entity type lives in its own collection (`hotels.json`,
//! `customers.json`, `reservations.json`) under one storage directory.
//! Ledgers own the CRUD operations and the room-availability counter; the
//! coordinator sequences the one cross-entity operation, booking a room.
//!
//! ## Core Types
//!
//! - [`CollectionStore`] and [`StoreConfig`]: whole-file JSON persistence
//! - [`RecordId`] and [`next_id`]: identifier allocation
//! - [`HotelLedger`] and [`CustomerLedger`]: per-entity CRUD
//! - [`ReservationCoordinator`]: cross-entity booking and cancellation
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Storage discipline
//!
//! Every operation is a blocking whole-collection read-modify-write over
//! one or more files. Corrupt, empty or misshapen collection content is
//! recovered to an empty collection, never fatal. There is no locking and
//! no cross-file atomicity: concurrent processes over the same storage
//! directory can lose updates or double-allocate ids, and a crash between
//! the hotel-availability write and the reservation-record write leaves
//! the two collections inconsistent. These limits are inherent to the
//! storage model and are documented rather than hidden.
//!
//! ## Examples
//!
//! ```no_run
//! use lodge::{ReservationCoordinator, StoreConfig};
//!
//! let coordinator = ReservationCoordinator::new(StoreConfig::new("/tmp/lodge-data"));
//!
//! let hotel = coordinator.hotels().create("Grand Palace", "Veracruz", 100).unwrap();
//! let customer = coordinator.customers().create("Anuar", "anuar@email.com", "555-0100").unwrap();
//!
//! let reservation = coordinator.create(customer.id, hotel.id).unwrap();
//! assert_eq!(coordinator.hotels().find_by_id(hotel.id).unwrap().available_rooms, 99);
//!
//! coordinator.cancel(reservation.id).unwrap();
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod id;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use coordinator::ReservationCoordinator;
pub use error::{Entity, Error, Result};
pub use id::{next_id, Identified, RecordId};
pub use ledger::{CustomerLedger, HotelLedger};
pub use logging::{init_logger, LogLevel, Logger};
pub use model::{Customer, CustomerPatch, Hotel, HotelPatch, Reservation};
pub use store::{CollectionStore, Loaded, LoadCondition, StoreConfig};
