//! Hotel registry: owns the room inventory and the active reservations
//!
//! Every mutating operation re-saves the whole reservation set through the
//! hotel's `ReservationStore`. A failed save never undoes the in-memory
//! change; it is handed back to the caller in the outcome.

use std::io;
use tracing::{debug, info, warn};

use crate::category::Category;
use crate::error::{HotelError, StoreError};
use crate::reservation::{Reservation, ReservationView};
use crate::room::{Room, RoomNumber};
use crate::store::{LoadError, ReservationRecord, ReservationStore};

/// Room and price put to the guest before a booking is finalised
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer {
    pub room: Room,
    pub price: f64,
}

/// External yes/no collaborator asked to approve each payment
pub trait PaymentGate {
    fn confirm(&mut self, offer: &Offer) -> io::Result<bool>;
}

impl<F> PaymentGate for F
where
    F: FnMut(&Offer) -> io::Result<bool>,
{
    fn confirm(&mut self, offer: &Offer) -> io::Result<bool> {
        self(offer)
    }
}

#[derive(Debug)]
pub enum BookingOutcome {
    Booked {
        reservation: Reservation,
        room: Room,
        persisted: Result<(), StoreError>,
    },
    /// The gate said no; nothing changed
    Declined(Offer),
    /// No room of the category is free
    Unavailable(Category),
}

impl BookingOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::Booked { .. })
    }
}

#[derive(Debug)]
pub enum CancelOutcome {
    Cancelled {
        reservation: Reservation,
        persisted: Result<(), StoreError>,
    },
    NotFound,
}

/// Result of replaying the persisted reservations at startup
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub replayed: usize,
    /// Records naming a missing or already-booked room
    pub dropped: usize,
    /// Set when the store failed part way; records read before it were replayed
    pub failure: Option<StoreError>,
}

pub struct Hotel<S> {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    store: S,
}

impl<S: ReservationStore> Hotel<S> {
    /// Build the seed inventory and replay whatever `store` holds
    pub fn open(store: S) -> (Self, LoadSummary) {
        let mut hotel = Self {
            rooms: Room::seed_inventory(),
            reservations: Vec::new(),
            store,
        };

        let (records, failure) = match hotel.store.load() {
            Ok(records) => (records, None),
            Err(LoadError { recovered, source }) => {
                warn!("reservation load failed after {} records: {}", recovered.len(), source);
                (recovered, Some(source))
            }
        };

        let mut summary = LoadSummary {
            failure,
            ..LoadSummary::default()
        };
        for record in records {
            if hotel.replay(record) {
                summary.replayed += 1;
            } else {
                summary.dropped += 1;
            }
        }

        info!(
            "hotel opened with {} rooms, {} reservations ({} dropped)",
            hotel.rooms.len(),
            summary.replayed,
            summary.dropped
        );
        (hotel, summary)
    }

    fn replay(&mut self, record: ReservationRecord) -> bool {
        let Some(room) = self
            .rooms
            .iter_mut()
            .find(|room| i64::from(room.room_number()) == record.room_number)
        else {
            warn!(
                "dropping reservation for {}: room {} does not exist",
                record.guest_name, record.room_number
            );
            return false;
        };

        if !room.is_available() {
            warn!(
                "dropping reservation for {}: room {} is already booked",
                record.guest_name, record.room_number
            );
            return false;
        }

        if !room.category().as_str().eq_ignore_ascii_case(record.category.trim()) {
            warn!(
                "reservation for {} records room {} as {:?}, inventory says {}",
                record.guest_name,
                record.room_number,
                record.category,
                room.category()
            );
        }

        room.book();
        self.reservations.push(Reservation::new(
            record.guest_name,
            room.room_number(),
            record.amount_paid,
        ));
        true
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, room_number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_number() == room_number)
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Available rooms of `category`, in inventory order. Each call starts a
    /// fresh scan.
    pub fn search_rooms(&self, category: Category) -> impl Iterator<Item = &Room> + '_ {
        self.rooms
            .iter()
            .filter(move |room| room.category() == category && room.is_available())
    }

    /// Offer the first free room of `category` to the gate and book it on approval
    pub fn make_reservation<G>(
        &mut self,
        guest_name: &str,
        category: Category,
        gate: &mut G,
    ) -> Result<BookingOutcome, HotelError>
    where
        G: PaymentGate + ?Sized,
    {
        let guest_name = validate_guest_name(guest_name)?;

        let Some(index) = self
            .rooms
            .iter()
            .position(|room| room.category() == category && room.is_available())
        else {
            debug!("no available {} rooms for {}", category, guest_name);
            return Ok(BookingOutcome::Unavailable(category));
        };

        let offer = Offer {
            room: self.rooms[index],
            price: category.price(),
        };
        if !gate.confirm(&offer).map_err(HotelError::Confirmation)? {
            debug!("{} declined room {}", guest_name, offer.room.room_number());
            return Ok(BookingOutcome::Declined(offer));
        }

        self.rooms[index].book();
        let room = self.rooms[index];
        let reservation = Reservation::new(guest_name, room.room_number(), offer.price);
        self.reservations.push(reservation.clone());
        info!("booked room {} for {}", room.room_number(), reservation.guest_name());

        let persisted = self.persist();
        Ok(BookingOutcome::Booked {
            reservation,
            room,
            persisted,
        })
    }

    /// Cancel the oldest reservation held under `guest_name` (case-insensitive)
    pub fn cancel_reservation(&mut self, guest_name: &str) -> CancelOutcome {
        let wanted = guest_name.trim();
        let Some(index) = self
            .reservations
            .iter()
            .position(|reservation| reservation.is_for_guest(wanted))
        else {
            debug!("no reservation found for {}", wanted);
            return CancelOutcome::NotFound;
        };

        let reservation = self.reservations.remove(index);
        if let Some(room) = self
            .rooms
            .iter_mut()
            .find(|room| room.room_number() == reservation.room_number())
        {
            room.cancel();
        }
        info!(
            "cancelled reservation of room {} for {}",
            reservation.room_number(),
            reservation.guest_name()
        );

        let persisted = self.persist();
        CancelOutcome::Cancelled {
            reservation,
            persisted,
        }
    }

    /// Active reservations in booking order
    pub fn view_reservations(&self) -> impl Iterator<Item = ReservationView<'_>> + '_ {
        self.reservations.iter().filter_map(move |reservation| {
            self.room(reservation.room_number())
                .map(|room| ReservationView { reservation, room })
        })
    }

    /// The reservation set as it gets persisted
    pub fn records(&self) -> Vec<ReservationRecord> {
        self.view_reservations()
            .map(|view| ReservationRecord {
                guest_name: view.reservation.guest_name().to_string(),
                room_number: view.room.room_number().into(),
                category: view.room.category().to_string(),
                amount_paid: view.reservation.amount_paid(),
            })
            .collect()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let records = self.records();
        self.store.save(&records).map_err(|e| {
            warn!("failed to save {} reservations: {}", records.len(), e);
            e
        })
    }
}

fn validate_guest_name(guest_name: &str) -> Result<&str, HotelError> {
    let trimmed = guest_name.trim();
    if trimmed.is_empty() || trimmed.contains([',', '\n', '\r']) {
        return Err(HotelError::InvalidGuestName(guest_name.to_string()));
    }
    Ok(trimmed)
}
