//! Property-based tests for the ledgers and the id allocator.

use proptest::prelude::*;
use tempfile::TempDir;

use crate::id::{next_id, Identified, RecordId};
use crate::model::HotelPatch;
use crate::store::StoreConfig;
use crate::HotelLedger;

struct Rec(RecordId);

impl Identified for Rec {
    fn id(&self) -> RecordId {
        self.0
    }
}

// PROPERTY: next_id is always max(existing ids) + 1
proptest! {
    #[test]
    fn prop_next_id_is_max_plus_one(ids in proptest::collection::vec(1u64..10_000, 1..50)) {
        let records: Vec<Rec> = ids
            .iter()
            .map(|&id| Rec(RecordId::try_from(id).unwrap()))
            .collect();

        let expected = ids.iter().max().unwrap() + 1;
        prop_assert_eq!(next_id(&records).value(), expected);
    }
}

// PROPERTY: a freshly created hotel has every room available
proptest! {
    #[test]
    fn prop_created_hotel_fully_available(total_rooms in 0u32..500) {
        let dir = TempDir::new().unwrap();
        let ledger = HotelLedger::new(StoreConfig::new(dir.path()));

        let hotel = ledger.create("Hotel", "State", total_rooms).unwrap();
        prop_assert_eq!(hotel.available_rooms, total_rooms);
        prop_assert_eq!(hotel.occupied_rooms(), 0);
    }
}

// PROPERTY: reserve followed by cancel restores availability exactly
proptest! {
    #[test]
    fn prop_reserve_then_cancel_is_identity(total_rooms in 1u32..100, reserved in 0u32..100) {
        let dir = TempDir::new().unwrap();
        let ledger = HotelLedger::new(StoreConfig::new(dir.path()));
        let hotel = ledger.create("Hotel", "State", total_rooms).unwrap();

        // Occupy some rooms first so cancel has room to operate from
        // arbitrary availability levels, not just full.
        let reserved = reserved.min(total_rooms.saturating_sub(1));
        for _ in 0..reserved {
            ledger.reserve_room(hotel.id).unwrap();
        }
        let before = ledger.find_by_id(hotel.id).unwrap().available_rooms;

        ledger.reserve_room(hotel.id).unwrap();
        ledger.cancel_reservation(hotel.id).unwrap();

        let after = ledger.find_by_id(hotel.id).unwrap().available_rooms;
        prop_assert_eq!(after, before);
    }
}

// PROPERTY: the availability counter never leaves [0, total_rooms],
// whatever interleaving of reserve and cancel is attempted
proptest! {
    #[test]
    fn prop_availability_stays_in_bounds(
        total_rooms in 0u32..20,
        ops in proptest::collection::vec(any::<bool>(), 0..60),
    ) {
        let dir = TempDir::new().unwrap();
        let ledger = HotelLedger::new(StoreConfig::new(dir.path()));
        let hotel = ledger.create("Hotel", "State", total_rooms).unwrap();

        for reserve in ops {
            // Failures are expected at the bounds; they must not move state.
            if reserve {
                let _ = ledger.reserve_room(hotel.id);
            } else {
                let _ = ledger.cancel_reservation(hotel.id);
            }
            let current = ledger.find_by_id(hotel.id).unwrap();
            prop_assert!(current.available_rooms <= current.total_rooms);
        }
    }
}

// PROPERTY: changing total_rooms preserves the occupied count when the
// new total can hold it
proptest! {
    #[test]
    fn prop_modify_preserves_occupancy(
        total_rooms in 1u32..50,
        occupied in 0u32..50,
        new_total in 0u32..100,
    ) {
        let dir = TempDir::new().unwrap();
        let ledger = HotelLedger::new(StoreConfig::new(dir.path()));
        let hotel = ledger.create("Hotel", "State", total_rooms).unwrap();

        let occupied = occupied.min(total_rooms);
        for _ in 0..occupied {
            ledger.reserve_room(hotel.id).unwrap();
        }

        let result = ledger.modify(hotel.id, HotelPatch::new().with_total_rooms(new_total));
        let current = ledger.find_by_id(hotel.id).unwrap();

        if new_total < occupied {
            // Rejected, record untouched.
            prop_assert!(result.is_err());
            prop_assert_eq!(current.total_rooms, total_rooms);
            prop_assert_eq!(current.occupied_rooms(), occupied);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(current.total_rooms, new_total);
            prop_assert_eq!(current.occupied_rooms(), occupied);
        }
    }
}
