//! Record identifiers and the next-id allocator.
//!
//! Identifiers are positive integers assigned on creation: the next id for
//! a collection is `max(existing ids) + 1`, or 1 for an empty collection.
//! Records with unusable ids never reach the allocator; the store's
//! decode step drops them before a collection is handed to a ledger.

use serde::{Deserialize, Serialize};

/// A positive integer identifying one record within its collection.
///
/// Serializes transparently as a JSON number. Zero is rejected on
/// construction; ids are assigned by the allocator and start at 1.
///
/// # Examples
///
/// ```
/// use lodge::RecordId;
///
/// let id = RecordId::try_from(5).unwrap();
/// assert_eq!(id.value(), 5);
/// assert_eq!(format!("{id}"), "5");
///
/// assert!(RecordId::try_from(0).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// The first id assigned to an empty collection.
    pub const FIRST: Self = Self(1);

    /// Returns the numeric value of this id.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl TryFrom<u64> for RecordId {
    type Error = InvalidIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(InvalidIdError {
                value,
                reason: "record ids are positive integers starting at 1".to_string(),
            });
        }
        Ok(Self(value))
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid record identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdError {
    /// The invalid id value.
    pub value: u64,
    /// The reason the id is invalid.
    pub reason: String,
}

impl std::fmt::Display for InvalidIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid record id {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidIdError {}

/// Implemented by record types that carry a [`RecordId`].
pub trait Identified {
    /// Returns this record's identifier.
    fn id(&self) -> RecordId;
}

/// Computes the next identifier for a collection.
///
/// Returns [`RecordId::FIRST`] for an empty collection, otherwise the
/// maximum existing id plus one. Deleted ids are never reused unless the
/// deleted record held the current maximum.
///
/// # Examples
///
/// ```
/// use lodge::{next_id, Hotel, RecordId};
///
/// let empty: Vec<Hotel> = Vec::new();
/// assert_eq!(next_id(&empty), RecordId::FIRST);
/// ```
#[must_use]
pub fn next_id<T: Identified>(records: &[T]) -> RecordId {
    records
        .iter()
        .map(Identified::id)
        .max()
        .map_or(RecordId::FIRST, RecordId::next)
}
