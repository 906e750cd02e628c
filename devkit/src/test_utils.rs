/*!
Test harness for the hotel

Owns a temporary directory holding the reservation file, so every test
starts from a clean disk and can reopen the hotel to check what was
persisted.
*/

use anyhow::{bail, Context, Result};
use hotel_core::{
    BookingOutcome, Category, Hotel, LoadSummary, MalformedLinePolicy, RoomNumber, TextFileStore,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::gate_stub::ScriptedGate;

pub const RESERVATION_FILE: &str = "reservations.txt";

pub struct TestHarness {
    dir: TempDir,
    policy: MalformedLinePolicy,
}

impl TestHarness {
    pub fn new() -> Result<Self> {
        init_tracing();
        let dir = TempDir::new().context("Failed to create temporary directory")?;
        Ok(Self {
            dir,
            policy: MalformedLinePolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: MalformedLinePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.path().join(RESERVATION_FILE)
    }

    pub fn store(&self) -> TextFileStore {
        TextFileStore::new(self.file_path()).with_policy(self.policy)
    }

    /// Open a hotel over the harness file, as a fresh process would
    pub fn open(&self) -> (Hotel<TextFileStore>, LoadSummary) {
        Hotel::open(self.store())
    }

    /// Seed the reservation file with raw content
    pub fn write_file(&self, content: &str) -> Result<()> {
        fs::write(self.file_path(), content).context("Failed to seed reservation file")
    }

    pub fn read_file(&self) -> Result<String> {
        fs::read_to_string(self.file_path()).context("Failed to read reservation file")
    }

    /// Book with an approving gate and fail unless a room was taken
    pub fn book(
        hotel: &mut Hotel<TextFileStore>,
        guest_name: &str,
        category: Category,
    ) -> Result<RoomNumber> {
        let mut gate = ScriptedGate::approving(1);
        match hotel.make_reservation(guest_name, category, &mut gate)? {
            BookingOutcome::Booked { room, persisted, .. } => {
                persisted.context("Booking was not persisted")?;
                Ok(room.room_number())
            }
            other => bail!("Expected {} to be booked, got {:?}", guest_name, other),
        }
    }

    /// Fail unless exactly `expected` rooms are available, in inventory order
    pub fn assert_available(hotel: &Hotel<TextFileStore>, expected: &[RoomNumber]) -> Result<()> {
        let actual: Vec<RoomNumber> = hotel
            .rooms()
            .iter()
            .filter(|room| room.is_available())
            .map(|room| room.room_number())
            .collect();

        if actual != expected {
            bail!("Available rooms mismatch: expected {:?}, got {:?}", expected, actual);
        }
        Ok(())
    }
}

/// Route library logs to the test writer; safe to call more than once
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
