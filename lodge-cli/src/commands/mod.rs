//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `hotel`: Manage hotel records (add, rm, show, set, list)
//! - `customer`: Manage customer records (add, rm, show, set, list)
//! - `reservation`: Book and cancel reservations (book, cancel, show, list)

pub mod customer;
pub mod hotel;
pub mod reservation;

pub use customer::CustomerCommand;
pub use hotel::HotelCommand;
pub use reservation::ReservationCommand;
