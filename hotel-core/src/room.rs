use std::fmt;

use crate::category::Category;

pub type RoomNumber = u32;

/// Inventory the hotel starts with, in display order
pub const SEED_ROOMS: [(RoomNumber, Category); 5] = [
    (101, Category::Standard),
    (102, Category::Standard),
    (201, Category::Deluxe),
    (202, Category::Deluxe),
    (301, Category::Suite),
];

/// A bookable room. Availability is only flipped by `book`/`cancel`;
/// callers check `is_available` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    room_number: RoomNumber,
    category: Category,
    is_available: bool,
}

impl Room {
    pub fn new(room_number: RoomNumber, category: Category) -> Self {
        Self {
            room_number,
            category,
            is_available: true,
        }
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn book(&mut self) {
        self.is_available = false;
    }

    pub fn cancel(&mut self) {
        self.is_available = true;
    }

    pub(crate) fn seed_inventory() -> Vec<Room> {
        SEED_ROOMS
            .iter()
            .map(|&(number, category)| Room::new(number, category))
            .collect()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} ({}) - {}",
            self.room_number,
            self.category,
            if self.is_available { "Available" } else { "Booked" }
        )
    }
}
