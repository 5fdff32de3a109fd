//! Ledgers owning CRUD and counters for one entity type each.
//!
//! A ledger performs every operation as an independent whole-collection
//! cycle: load the file, mutate the in-memory records, save the file.
//! Operations that fail a business rule return before the save, so the
//! on-disk collection is left exactly as it was.

pub mod customer;
pub mod hotel;

#[cfg(test)]
mod proptests;

pub use customer::CustomerLedger;
pub use hotel::HotelLedger;
