//! Error types for the lodge library.
//!
//! This module provides the error hierarchy for all record-keeping
//! operations, using `thiserror` for ergonomic error handling.
//!
//! Business-rule failures (`NotFound`, `NoAvailability`, `NothingToCancel`)
//! are ordinary variants that callers match on; only `Io` represents an
//! unexpected condition and is additionally logged where it occurs.
//! Unparseable or misshapen collection files are NOT errors at all: the
//! store recovers them locally to an empty collection and reports a
//! [`LoadCondition`](crate::store::LoadCondition) instead.

use thiserror::Error;

use crate::id::RecordId;

/// Result type alias for operations that may fail with a lodge error.
///
/// # Examples
///
/// ```
/// use lodge::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(100)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The entity type a record belongs to.
///
/// Used to qualify `NotFound` failures so callers can tell a missing
/// customer apart from a missing hotel when booking a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A hotel record.
    Hotel,
    /// A customer record.
    Customer,
    /// A reservation record.
    Reservation,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hotel => write!(f, "hotel"),
            Self::Customer => write!(f, "customer"),
            Self::Reservation => write!(f, "reservation"),
        }
    }
}

/// The main error type for the lodge library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred while reading or writing a collection file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// The referenced record does not exist in its collection.
    #[error("{entity} {id} not found")]
    NotFound {
        /// The entity type that was looked up.
        entity: Entity,
        /// The id that had no matching record.
        id: RecordId,
    },

    /// The hotel has no available rooms left to reserve.
    #[error("no rooms available in hotel {hotel_id}")]
    NoAvailability {
        /// The hotel whose availability is exhausted.
        hotel_id: RecordId,
    },

    /// The hotel has no outstanding reservations to cancel.
    #[error("no reservations to cancel in hotel {hotel_id}")]
    NothingToCancel {
        /// The hotel whose rooms are all available.
        hotel_id: RecordId,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if this error is a missing-record failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::{Entity, Error, RecordId};
    ///
    /// let err = Error::NotFound {
    ///     entity: Entity::Hotel,
    ///     id: RecordId::try_from(7).unwrap(),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a business-rule failure rather than a
    /// storage problem.
    ///
    /// Business-rule failures are expected outcomes of normal operation
    /// (a full hotel, an already-empty hotel, a dangling id); they never
    /// indicate anything wrong with the collection files themselves.
    #[must_use]
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::NoAvailability { .. }
                | Self::NothingToCancel { .. }
                | Self::Validation { .. }
        )
    }
}
