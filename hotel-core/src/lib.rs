//! Hotel Core - room inventory and reservation bookkeeping
//!
//! This crate holds everything the console drives:
//! - Fixed room inventory with availability flags
//! - Reservation creation behind an external payment confirmation
//! - Cancellation by guest name
//! - Flat-file persistence of the active reservation set

pub mod category;
pub mod error;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod store;

pub use category::Category;
pub use error::{HotelError, StoreError};
pub use hotel::{BookingOutcome, CancelOutcome, Hotel, LoadSummary, Offer, PaymentGate};
pub use reservation::{format_amount, Reservation, ReservationView};
pub use room::{Room, RoomNumber, SEED_ROOMS};
pub use store::{
    LoadError, MalformedLinePolicy, MemoryStore, ReservationRecord, ReservationStore,
    TextFileStore,
};
