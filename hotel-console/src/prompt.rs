//! Line-oriented prompts over any reader/writer pair
//!
//! End of input is surfaced as `None` instead of an error so the menu can
//! shut down cleanly when stdin closes.

use hotel_core::{format_amount, Offer, PaymentGate};
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line, without its line ending
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let trimmed = input.trim_end_matches(['\n', '\r']).len();
        input.truncate(trimmed);
        Ok(Some(input))
    }

    /// `yes`/`y` in any case is a yes; anything else, including end of
    /// input, is a no
    pub fn prompt_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.prompt(prompt)?.unwrap_or_default();
        let answer = answer.trim().to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }
}

impl<R: BufRead, W: Write> PaymentGate for Prompter<R, W> {
    fn confirm(&mut self, offer: &Offer) -> io::Result<bool> {
        writeln!(self.output, "Room found: {}", offer.room)?;
        writeln!(self.output, "Price: ${}", format_amount(offer.price))?;
        self.prompt_yes_no("Proceed with payment? (yes/no): ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_core::{Category, Room};
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_strips_line_endings_only() {
        let mut p = prompter("  Alice Smith \r\nnext\n");
        assert_eq!(p.prompt("Name: ").unwrap().as_deref(), Some("  Alice Smith "));
        assert_eq!(p.prompt("Again: ").unwrap().as_deref(), Some("next"));
        assert_eq!(p.prompt("Gone: ").unwrap(), None);
        assert_eq!(written(p), "Name: Again: Gone: ");
    }

    #[test]
    fn test_yes_no_answers() {
        let mut p = prompter("yes\nY\n YES \nno\nsure\n\n");
        assert!(p.prompt_yes_no("? ").unwrap());
        assert!(p.prompt_yes_no("? ").unwrap());
        assert!(p.prompt_yes_no("? ").unwrap());
        assert!(!p.prompt_yes_no("? ").unwrap());
        assert!(!p.prompt_yes_no("? ").unwrap());
        assert!(!p.prompt_yes_no("? ").unwrap());
        // end of input
        assert!(!p.prompt_yes_no("? ").unwrap());
    }

    #[test]
    fn test_payment_prompt_shows_room_and_price() {
        let mut p = prompter("yes\n");
        let offer = Offer {
            room: Room::new(201, Category::Deluxe),
            price: 200.0,
        };

        assert!(p.confirm(&offer).unwrap());
        assert_eq!(
            written(p),
            "Room found: Room 201 (Deluxe) - Available\nPrice: $200.0\nProceed with payment? (yes/no): "
        );
    }
}
