use std::io;

/// Errors raised by a `ReservationStore`
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Errors raised by `Hotel` operations before any state is touched
#[derive(Debug, thiserror::Error)]
pub enum HotelError {
    #[error("Unknown room category: {0:?}")]
    UnknownCategory(String),
    #[error("Invalid guest name {0:?}: names must be non-empty and contain no commas or line breaks")]
    InvalidGuestName(String),
    #[error("Payment confirmation failed: {0}")]
    Confirmation(#[source] io::Error),
}
