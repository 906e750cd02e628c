//! Persistence seam for the active reservation set
//!
//! A store only ever deals with the whole set: `load` once when the hotel
//! opens, `save` after every mutation with everything currently held.

mod text_file;

pub use text_file::TextFileStore;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;

/// One persisted reservation, as it appears in the backing file
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRecord {
    pub guest_name: String,
    /// Any integer the file holds; numbers outside the inventory are
    /// dropped when the hotel replays the record
    pub room_number: i64,
    /// Kept as written; the hotel resolves the real category from the room
    pub category: String,
    pub amount_paid: f64,
}

/// What to do when a persisted line cannot be parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Stop at the first bad line, keeping what was read before it
    #[default]
    Abort,
    /// Log the bad line and carry on with the next one
    Skip,
}

/// A failed load, with whatever was read before the failure
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct LoadError {
    pub recovered: Vec<ReservationRecord>,
    pub source: StoreError,
}

impl LoadError {
    pub fn new(recovered: Vec<ReservationRecord>, source: StoreError) -> Self {
        Self { recovered, source }
    }
}

/// Backing storage for reservations
pub trait ReservationStore {
    /// Read every persisted record, in stored order.
    /// A missing backing file is an empty set, not an error.
    fn load(&self) -> Result<Vec<ReservationRecord>, LoadError>;

    /// Replace everything persisted with `records`
    fn save(&mut self, records: &[ReservationRecord]) -> Result<(), StoreError>;
}

/// Store that keeps records in memory only
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<ReservationRecord>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ReservationRecord>) -> Self {
        Self { records, saves: 0 }
    }

    pub fn records(&self) -> &[ReservationRecord] {
        &self.records
    }

    /// Number of successful `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ReservationStore for MemoryStore {
    fn load(&self) -> Result<Vec<ReservationRecord>, LoadError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[ReservationRecord]) -> Result<(), StoreError> {
        self.records = records.to_vec();
        self.saves += 1;
        debug!("memory store holds {} records", self.records.len());
        Ok(())
    }
}
