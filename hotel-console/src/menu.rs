//! Numbered action loop driving a `Hotel`
//!
//! Domain failures are printed and the loop carries on. The loop ends on
//! Exit, on end of input, or when the terminal itself can no longer be
//! read or written.

use anyhow::{Context, Result};
use hotel_core::{
    BookingOutcome, CancelOutcome, Category, Hotel, LoadSummary, ReservationStore,
    ReservationView, StoreError,
};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::prompt::Prompter;

const CATEGORY_PROMPT: &str = "Enter room category (Standard/Deluxe/Suite): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SearchRooms,
    MakeReservation,
    CancelReservation,
    ViewReservations,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::SearchRooms),
            "2" => Ok(MenuChoice::MakeReservation),
            "3" => Ok(MenuChoice::CancelReservation),
            "4" => Ok(MenuChoice::ViewReservations),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// Whether the loop should keep going after an action
enum Flow {
    Continue,
    Stop,
}

enum CategoryInput {
    Known(Category),
    /// Already reported to the operator
    Unknown,
    Closed,
}

pub struct Menu<'h, S, R, W> {
    hotel: &'h mut Hotel<S>,
    prompter: Prompter<R, W>,
    load_failed: bool,
}

impl<'h, S, R, W> Menu<'h, S, R, W>
where
    S: ReservationStore,
    R: BufRead,
    W: Write,
{
    pub fn new(hotel: &'h mut Hotel<S>, input: R, output: W) -> Self {
        Self {
            hotel,
            prompter: Prompter::new(input, output),
            load_failed: false,
        }
    }

    /// Warn the operator at startup if the hotel opened from a failed load
    pub fn with_load_summary(mut self, summary: &LoadSummary) -> Self {
        self.load_failed = summary.failure.is_some();
        self
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        if std::mem::take(&mut self.load_failed) {
            writeln!(self.prompter.output(), "⚠️  Error loading reservations.")
                .context("Failed to report load failure")?;
        }

        loop {
            self.print_menu().context("Failed to display menu")?;

            let Some(line) = self
                .prompter
                .prompt("Choose an option: ")
                .context("Failed to read menu choice")?
            else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(()) => {
                    writeln!(self.prompter.output(), "❌ Invalid choice, try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Stop = flow {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "===== Hotel Reservation System =====")?;
        writeln!(out, "1. Search Rooms")?;
        writeln!(out, "2. Make Reservation")?;
        writeln!(out, "3. Cancel Reservation")?;
        writeln!(out, "4. View Reservations")?;
        writeln!(out, "5. Exit")
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!("menu choice: {:?}", choice);
        match choice {
            MenuChoice::SearchRooms => self.search_rooms(),
            MenuChoice::MakeReservation => self.make_reservation(),
            MenuChoice::CancelReservation => self.cancel_reservation(),
            MenuChoice::ViewReservations => {
                self.view_reservations()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                writeln!(
                    self.prompter.output(),
                    "👋 Thank you for using Hotel Reservation System!"
                )?;
                Ok(Flow::Stop)
            }
        }
    }

    fn read_category(&mut self) -> Result<CategoryInput> {
        let Some(text) = self.prompter.prompt(CATEGORY_PROMPT)? else {
            return Ok(CategoryInput::Closed);
        };
        match text.parse::<Category>() {
            Ok(category) => Ok(CategoryInput::Known(category)),
            Err(e) => {
                writeln!(self.prompter.output(), "❌ {}", e)?;
                Ok(CategoryInput::Unknown)
            }
        }
    }

    fn search_rooms(&mut self) -> Result<Flow> {
        let category = match self.read_category()? {
            CategoryInput::Known(category) => category,
            CategoryInput::Unknown => return Ok(Flow::Continue),
            CategoryInput::Closed => return Ok(Flow::Stop),
        };

        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "Available {} rooms:", category)?;

        let mut found = false;
        for room in self.hotel.search_rooms(category) {
            writeln!(out, "{}", room)?;
            found = true;
        }
        if !found {
            writeln!(out, "No rooms available.")?;
        }
        Ok(Flow::Continue)
    }

    fn make_reservation(&mut self) -> Result<Flow> {
        let Some(name) = self.prompter.prompt("Enter your name: ")? else {
            return Ok(Flow::Stop);
        };
        let category = match self.read_category()? {
            CategoryInput::Known(category) => category,
            CategoryInput::Unknown => return Ok(Flow::Continue),
            CategoryInput::Closed => return Ok(Flow::Stop),
        };

        let outcome = self.hotel.make_reservation(&name, category, &mut self.prompter);
        let out = self.prompter.output();
        match outcome {
            Ok(BookingOutcome::Booked {
                reservation,
                room,
                persisted,
            }) => {
                writeln!(out, "✅ Booking successful!")?;
                writeln!(
                    out,
                    "{}",
                    ReservationView {
                        reservation: &reservation,
                        room: &room,
                    }
                )?;
                report_save(out, persisted)?;
            }
            Ok(BookingOutcome::Declined(_)) => {
                writeln!(out, "❌ Payment cancelled. Reservation not made.")?;
            }
            Ok(BookingOutcome::Unavailable(category)) => {
                writeln!(out, "❌ No available {} rooms.", category)?;
            }
            Err(e) => {
                warn!("reservation for {:?} refused: {}", name, e);
                writeln!(out, "❌ {}", e)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn cancel_reservation(&mut self) -> Result<Flow> {
        let Some(name) = self
            .prompter
            .prompt("Enter your name to cancel reservation: ")?
        else {
            return Ok(Flow::Stop);
        };

        let outcome = self.hotel.cancel_reservation(&name);
        let out = self.prompter.output();
        match outcome {
            CancelOutcome::Cancelled { persisted, .. } => {
                writeln!(out, "✅ Reservation cancelled for {}", name.trim())?;
                report_save(out, persisted)?;
            }
            CancelOutcome::NotFound => {
                writeln!(out, "❌ No reservation found for {}", name.trim())?;
            }
        }
        Ok(Flow::Continue)
    }

    fn view_reservations(&mut self) -> Result<()> {
        let out = self.prompter.output();
        let mut views = self.hotel.view_reservations().peekable();

        writeln!(out)?;
        if views.peek().is_none() {
            writeln!(out, "No reservations yet.")?;
            return Ok(());
        }

        writeln!(out, "=== Current Reservations ===")?;
        for view in views {
            writeln!(out, "{}", view)?;
        }
        Ok(())
    }
}

fn report_save<W: Write>(out: &mut W, persisted: Result<(), StoreError>) -> Result<()> {
    if let Err(e) = persisted {
        debug!("save failure shown to operator: {}", e);
        writeln!(out, "⚠️  Error saving reservations.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::SearchRooms));
        assert_eq!(" 2 ".parse::<MenuChoice>(), Ok(MenuChoice::MakeReservation));
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::CancelReservation));
        assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::ViewReservations));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!("6".parse::<MenuChoice>(), Err(()));
        assert_eq!("one".parse::<MenuChoice>(), Err(()));
        assert_eq!("".parse::<MenuChoice>(), Err(()));
    }
}
