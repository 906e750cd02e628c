use std::fmt;

use crate::room::{Room, RoomNumber};

/// Active booking. The room is referenced by number and resolved through
/// the owning `Hotel`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    guest_name: String,
    room_number: RoomNumber,
    amount_paid: f64,
}

impl Reservation {
    pub fn new(guest_name: impl Into<String>, room_number: RoomNumber, amount_paid: f64) -> Self {
        Self {
            guest_name: guest_name.into(),
            room_number,
            amount_paid,
        }
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn amount_paid(&self) -> f64 {
        self.amount_paid
    }

    pub(crate) fn is_for_guest(&self, guest_name: &str) -> bool {
        self.guest_name.to_lowercase() == guest_name.to_lowercase()
    }
}

/// A reservation paired with the room it holds, for display
#[derive(Debug, Clone, Copy)]
pub struct ReservationView<'a> {
    pub reservation: &'a Reservation,
    pub room: &'a Room,
}

impl fmt::Display for ReservationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation: {} booked Room {} ({}) | Paid: ${}",
            self.reservation.guest_name,
            self.room.room_number(),
            self.room.category(),
            format_amount(self.reservation.amount_paid)
        )
    }
}

/// Decimal text for an amount, always keeping a fractional digit
/// (`100.0`, `99.5`). Used both for display and for the persisted file.
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_guest_match_ignores_case() {
        let rsvp = Reservation::new("Alice", 101, 100.0);
        assert!(rsvp.is_for_guest("alice"));
        assert!(rsvp.is_for_guest("ALICE"));
        assert!(!rsvp.is_for_guest("Alic"));
    }

    #[test]
    fn test_view_display() {
        let mut room = Room::new(201, Category::Deluxe);
        room.book();
        let rsvp = Reservation::new("Bob", 201, 200.0);
        let view = ReservationView {
            reservation: &rsvp,
            room: &room,
        };
        assert_eq!(view.to_string(), "Reservation: Bob booked Room 201 (Deluxe) | Paid: $200.0");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0), "100.0");
        assert_eq!(format_amount(99.5), "99.5");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(12.25), "12.25");
    }
}
