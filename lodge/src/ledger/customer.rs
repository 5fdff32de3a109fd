//! Customer ledger: plain CRUD, no counters.

use crate::error::{Entity, Error, Result};
use crate::id::next_id;
use crate::model::{Customer, CustomerPatch};
use crate::store::{CollectionStore, StoreConfig};

/// CRUD operations over the customer collection.
///
/// Symmetric with [`HotelLedger`](crate::HotelLedger) minus the
/// availability counter: every operation is its own load-save cycle over
/// `customers.json`.
#[derive(Debug, Clone)]
pub struct CustomerLedger {
    store: CollectionStore,
}

impl CustomerLedger {
    /// Name of the collection this ledger owns.
    pub const COLLECTION: &'static str = "customers";

    /// Creates a ledger over the given storage configuration.
    #[must_use]
    pub const fn new(config: StoreConfig) -> Self {
        Self {
            store: CollectionStore::new(config),
        }
    }

    fn load(&self) -> Result<Vec<Customer>> {
        Ok(self.store.load::<Customer>(Self::COLLECTION)?.records)
    }

    fn save(&self, customers: &[Customer]) -> Result<()> {
        self.store.save(Self::COLLECTION, customers)
    }

    /// Creates a customer record and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn create(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Customer> {
        let mut customers = self.load()?;
        let customer = Customer::new(next_id(&customers), name, email, phone);
        log::debug!("creating customer {} ({})", customer.id, customer.name);
        customers.push(customer.clone());
        self.save(&customers)?;
        Ok(customer)
    }

    /// Removes the customer with the given id.
    ///
    /// Reservations referencing the customer are NOT cascaded.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no customer has the id.
    pub fn delete(&self, id: crate::RecordId) -> Result<()> {
        let mut customers = self.load()?;
        let before = customers.len();
        customers.retain(|customer| customer.id != id);
        if customers.len() == before {
            return Err(Error::NotFound {
                entity: Entity::Customer,
                id,
            });
        }
        self.save(&customers)
    }

    /// Returns the customer with the given id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no customer has the id.
    pub fn find_by_id(&self, id: crate::RecordId) -> Result<Customer> {
        self.load()?
            .into_iter()
            .find(|customer| customer.id == id)
            .ok_or(Error::NotFound {
                entity: Entity::Customer,
                id,
            })
    }

    /// Returns all customers in the collection.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn list(&self) -> Result<Vec<Customer>> {
        self.load()
    }

    /// Applies a partial update to the customer with the given id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no customer has the id.
    pub fn modify(&self, id: crate::RecordId, patch: CustomerPatch) -> Result<Customer> {
        let mut customers = self.load()?;
        let customer = customers
            .iter_mut()
            .find(|customer| customer.id == id)
            .ok_or(Error::NotFound {
                entity: Entity::Customer,
                id,
            })?;

        if let Some(name) = patch.name {
            customer.name = name;
        }
        if let Some(email) = patch.email {
            customer.email = email;
        }
        if let Some(phone) = patch.phone {
            customer.phone = phone;
        }

        let updated = customer.clone();
        self.save(&customers)?;
        Ok(updated)
    }
}
