use hotel_core::{LoadError, ReservationRecord, ReservationStore, StoreError};
use std::io;

/// Store that loads a fixed set of records and refuses every save
#[derive(Debug, Default)]
pub struct FailingStore {
    records: Vec<ReservationRecord>,
    attempts: usize,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many saves were attempted
    pub fn save_attempts(&self) -> usize {
        self.attempts
    }
}

impl ReservationStore for FailingStore {
    fn load(&self) -> Result<Vec<ReservationRecord>, LoadError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, _records: &[ReservationRecord]) -> Result<(), StoreError> {
        self.attempts += 1;
        Err(io::Error::new(io::ErrorKind::Other, "disk full").into())
    }
}
