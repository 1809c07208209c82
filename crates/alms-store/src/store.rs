//! Record store - existence-checked CRUD over a ledger backend

use crate::{Donation, LedgerBackend, Result, StoreError};

/// Donation record store bound to a ledger backend
///
/// Every operation is a direct synchronous call chain into the backend; the
/// store keeps no state of its own. Mutations follow the check-then-act
/// pattern: the existence check and the write are separate backend calls,
/// so a concurrently modified key may surface as `StoreError::Conflict`
/// from the write. Conflicts are propagated to the caller, never retried.
pub struct RecordStore<B: LedgerBackend> {
    ledger: B,
}

impl<B: LedgerBackend> RecordStore<B> {
    /// Bind a store to a backend
    pub fn new(ledger: B) -> Self {
        Self { ledger }
    }

    /// Get a reference to the underlying ledger
    pub fn ledger(&self) -> &B {
        &self.ledger
    }

    /// Consume the store and return its ledger
    pub fn into_ledger(self) -> B {
        self.ledger
    }

    /// Write every record unconditionally, in order
    ///
    /// Used once at namespace initialization. Fails fast on the first
    /// backend error; records written before the failure stay written, so a
    /// failed seed leaves the namespace in a partial state the caller must
    /// inspect. Empty ids are rejected before anything is written.
    pub fn seed(&mut self, records: &[Donation]) -> Result<()> {
        if records.iter().any(|record| record.id.is_empty()) {
            return Err(StoreError::EmptyId);
        }

        for record in records {
            let bytes = record.to_bytes()?;
            self.ledger.put(&record.id, &bytes)?;
        }
        Ok(())
    }

    /// True iff a record is stored under `id`
    ///
    /// A backend read failure is an error, distinct from "absent".
    pub fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.ledger.get(id)?.is_some())
    }

    /// Store a new record; the id must not already be taken
    pub fn create(&mut self, record: Donation) -> Result<()> {
        if record.id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        if self.exists(&record.id)? {
            return Err(StoreError::AlreadyExists(record.id));
        }

        let bytes = record.to_bytes()?;
        self.ledger.put(&record.id, &bytes)
    }

    /// Return the record stored under `id`
    pub fn read(&self, id: &str) -> Result<Donation> {
        match self.ledger.get(id)? {
            Some(bytes) => Donation::from_bytes(&bytes),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Replace every field of an existing record
    ///
    /// A full overwrite, not a merge; the id itself never changes.
    pub fn update(&mut self, record: Donation) -> Result<()> {
        if record.id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        if !self.exists(&record.id)? {
            return Err(StoreError::NotFound(record.id));
        }

        let bytes = record.to_bytes()?;
        self.ledger.put(&record.id, &bytes)
    }

    /// Remove the record stored under `id`
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if !self.exists(id)? {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.ledger.delete(id)
    }

    /// Reassign a record to a new donor, returning the previous donor
    ///
    /// Read-modify-write over the single key.
    pub fn transfer(&mut self, id: &str, new_donor: impl Into<String>) -> Result<String> {
        let mut record = self.read(id)?;
        let old_donor = std::mem::replace(&mut record.donor, new_donor.into());

        let bytes = record.to_bytes()?;
        self.ledger.put(id, &bytes)?;

        Ok(old_donor)
    }

    /// Return every record in the namespace, in backend key order
    ///
    /// Fully materialized; the first scan or decode error aborts the whole
    /// listing. The cursor is released on every exit path.
    pub fn get_all(&self) -> Result<Vec<Donation>> {
        let mut records = Vec::new();
        for entry in self.ledger.scan("", "")? {
            let (_, bytes) = entry?;
            records.push(Donation::from_bytes(&bytes)?);
        }
        Ok(records)
    }
}
