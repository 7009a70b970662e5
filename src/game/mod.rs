//! Round engine and state management.

use core::fmt::Display;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, BetError, DealError, Error, InsuranceError, RefillError};
use crate::hand::Hand;
use crate::intent::Intent;
use crate::options::GameOptions;
use crate::player::Stats;
use crate::result::RoundResult;
use crate::snapshot::Snapshot;
use crate::sync::Mutex;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;
mod table;

pub use state::{Action, Insurance, Phase};

use table::Table;

/// A single-seat blackjack table.
///
/// The game owns the shoe, the player's chips and stats, and the round in
/// progress. Every intent is applied atomically: it either completes the
/// whole transition (including any dealer play-out and settlement it
/// triggers) or is rejected without touching the table. A rejected intent
/// returns its error and also leaves the error text as the status message.
///
/// # Example
///
/// ```
/// use bjround::{Game, GameOptions, Phase};
///
/// let game = Game::new(GameOptions::default(), 42);
/// game.place_bet(10).unwrap();
/// game.start_round().unwrap();
/// while game.phase() == Phase::PlayerTurn {
///     game.stand().unwrap();
/// }
/// assert_eq!(game.phase(), Phase::Betting);
/// assert!(game.last_result().is_some());
/// ```
pub struct Game {
    options: GameOptions,
    table: Mutex<Table>,
}

impl Game {
    /// Creates a new game with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let table = Table::new(&options, seed);
        Self {
            options,
            table: Mutex::new(table),
        }
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    fn transition<T, E: Display>(
        &self,
        apply: impl FnOnce(&mut Table, &GameOptions) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut table = self.table.lock();
        let result = apply(&mut *table, &self.options);
        if let Err(err) = &result {
            log::debug!("intent rejected in {:?}: {err}", table.phase);
            table.set_message(err.to_string());
        }
        result
    }

    /// Chooses the bet for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the amount is zero, or it
    /// exceeds the chip balance.
    pub fn place_bet(&self, amount: usize) -> Result<(), BetError> {
        self.transition(|table, _| table.place_bet(amount))
    }

    /// Locks the chosen bet and deals two cards each to the player and the
    /// dealer.
    ///
    /// A natural blackjack settles the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, no bet is chosen, or the
    /// bet exceeds the chip balance.
    pub fn start_round(&self) -> Result<(), DealError> {
        self.transition(Table::start_round)
    }

    /// Draws a card on the active hand.
    ///
    /// Busting or reaching 21 finishes the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&self) -> Result<Card, ActionError> {
        self.transition(Table::hit)
    }

    /// Finishes the active hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&self) -> Result<(), ActionError> {
        self.transition(Table::stand)
    }

    /// Doubles the bet on the active hand, draws exactly one card and stands.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand is not
    /// eligible to double, or the player cannot cover the extra bet.
    pub fn double_down(&self) -> Result<Card, ActionError> {
        self.transition(Table::double_down)
    }

    /// Splits the active pair into two hands, each with its own bet.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand has already
    /// been split, the cards differ in value, or the player cannot cover the
    /// second bet.
    pub fn split(&self) -> Result<(), ActionError> {
        self.transition(Table::split)
    }

    /// Gives up the hand and takes back half the bet. Returns the refund.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, surrender is off, the
    /// hand has been split, or it holds more than two cards.
    pub fn surrender(&self) -> Result<usize, ActionError> {
        self.transition(Table::surrender)
    }

    /// Takes insurance against a dealer ace. Returns the stake.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not on offer, has been decided, the
    /// bet is too small to halve, or the player cannot cover the stake.
    pub fn take_insurance(&self) -> Result<usize, InsuranceError> {
        self.transition(|table, _| table.take_insurance())
    }

    /// Turns down insurance.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not on offer or has been decided.
    pub fn decline_insurance(&self) -> Result<(), InsuranceError> {
        self.transition(|table, _| table.decline_insurance())
    }

    /// Tops up the chip balance by the refill amount, up to the cap. Returns
    /// the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance is already at the cap.
    pub fn refill_chips(&self) -> Result<usize, RefillError> {
        self.transition(Table::refill_chips)
    }

    /// Returns to a fresh betting phase.
    ///
    /// A round in progress is abandoned and its locked stakes are lost.
    pub fn new_round(&self) {
        self.table.lock().new_round();
    }

    /// Applies an intent.
    ///
    /// # Errors
    ///
    /// Returns the error of the operation the intent maps to.
    pub fn dispatch(&self, intent: Intent) -> Result<(), Error> {
        log::trace!("dispatch {intent:?}");
        match intent {
            Intent::PlaceBet(amount) => self.place_bet(amount)?,
            Intent::StartRound => self.start_round()?,
            Intent::Hit => {
                self.hit()?;
            }
            Intent::Stand => self.stand()?,
            Intent::DoubleDown => {
                self.double_down()?;
            }
            Intent::Split => self.split()?,
            Intent::Surrender => {
                self.surrender()?;
            }
            Intent::TakeInsurance => {
                self.take_insurance()?;
            }
            Intent::DeclineInsurance => self.decline_insurance()?,
            Intent::RefillChips => {
                self.refill_chips()?;
            }
            Intent::NewRound => self.new_round(),
        }
        Ok(())
    }

    /// Places cards on top of the shoe, dealt in order before any others.
    pub fn stack_shoe(&self, cards: &[Card]) {
        self.table.lock().shoe.stack(cards);
    }

    /// Returns the number of cards left in a finite shoe, or `None` for an
    /// infinite one.
    pub fn cards_remaining(&self) -> Option<usize> {
        self.table.lock().shoe.remaining()
    }

    /// Returns a copy of the whole table as the player sees it.
    pub fn snapshot(&self) -> Snapshot {
        self.table.lock().snapshot(&self.options)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.table.lock().phase
    }

    /// Returns the chip balance.
    pub fn chips(&self) -> usize {
        self.table.lock().player.chips()
    }

    /// Returns the bet chosen for the next round.
    pub fn bet(&self) -> usize {
        self.table.lock().bet
    }

    /// Returns the cumulative stats.
    pub fn stats(&self) -> Stats {
        self.table.lock().player.stats()
    }

    /// Returns the status message.
    pub fn message(&self) -> String {
        self.table.lock().message.clone()
    }

    /// Returns the player's hands in the round in progress.
    pub fn hands(&self) -> Vec<Hand> {
        self.table
            .lock()
            .round
            .as_ref()
            .map(|round| round.hands.clone())
            .unwrap_or_default()
    }

    /// Returns the index of the acting hand during the player's turn.
    pub fn active_hand(&self) -> Option<usize> {
        let table = self.table.lock();
        if table.phase != Phase::PlayerTurn {
            return None;
        }
        table.round.as_ref().map(|round| round.active)
    }

    /// Returns the insurance state of the round in progress.
    pub fn insurance(&self) -> Insurance {
        self.table
            .lock()
            .round
            .as_ref()
            .map_or(Insurance::Unavailable, |round| round.insurance)
    }

    /// Returns the actions the active hand can take right now.
    pub fn available_actions(&self) -> Vec<Action> {
        self.table.lock().available_actions(&self.options)
    }

    /// Returns the most recently settled round.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.table.lock().last_result.clone()
    }
}
