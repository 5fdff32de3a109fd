//! Common test utilities for integration tests.
//!
//! Helpers for building coordinators and seeded collections over
//! temporary storage directories.

use lodge::{Customer, Hotel, ReservationCoordinator, StoreConfig};
use tempfile::TempDir;

/// Creates a temporary storage directory.
///
/// The directory is cleaned up when the returned `TempDir` drops, so
/// tests must keep it alive for the duration of the scenario.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("should create temp dir")
}

/// Creates a coordinator over the given temporary directory.
pub fn coordinator_in(dir: &TempDir) -> ReservationCoordinator {
    ReservationCoordinator::new(StoreConfig::new(dir.path()))
}

/// Creates a hotel with the given room count, panicking on failure.
#[allow(dead_code)]
pub fn seed_hotel(coordinator: &ReservationCoordinator, total_rooms: u32) -> Hotel {
    coordinator
        .hotels()
        .create("Grand Palace", "Veracruz", total_rooms)
        .expect("fixture hotel should be created")
}

/// Creates a customer with fixed contact details, panicking on failure.
#[allow(dead_code)]
pub fn seed_customer(coordinator: &ReservationCoordinator) -> Customer {
    coordinator
        .customers()
        .create("Anuar", "anuar@email.com", "2227709000")
        .expect("fixture customer should be created")
}
