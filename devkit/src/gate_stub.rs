/*!
Scripted payment gate

Stands in for the interactive yes/no prompt. Answers are replayed in order;
once the script runs out every further offer is declined.
*/

use hotel_core::{Offer, PaymentGate};
use std::collections::VecDeque;
use std::io;

#[derive(Debug, Default, Clone)]
pub struct ScriptedGate {
    answers: VecDeque<bool>,
    offers: Vec<Offer>,
}

impl ScriptedGate {
    pub fn new<I: IntoIterator<Item = bool>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            offers: Vec::new(),
        }
    }

    /// Gate that approves the next `count` offers
    pub fn approving(count: usize) -> Self {
        Self::new(std::iter::repeat(true).take(count))
    }

    /// Every offer seen so far, oldest first
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl PaymentGate for ScriptedGate {
    fn confirm(&mut self, offer: &Offer) -> io::Result<bool> {
        self.offers.push(*offer);
        let answer = self.answers.pop_front().unwrap_or(false);
        tracing::debug!(
            "[stub] room {} at {} -> {}",
            offer.room.room_number(),
            offer.price,
            if answer { "approved" } else { "declined" }
        );
        Ok(answer)
    }
}
