//! The player's chip balance and cumulative record.

use crate::result::{HandOutcome, RoundResult};

/// Cumulative results across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Hands won, blackjacks included.
    pub wins: u32,
    /// Hands lost, busts and surrenders included.
    pub losses: u32,
    /// Hands pushed.
    pub pushes: u32,
    /// Natural blackjacks paid.
    pub blackjacks: u32,
    /// Rounds settled.
    pub rounds: u32,
}

impl Stats {
    /// Folds a settled round into the record.
    pub fn record(&mut self, result: &RoundResult) {
        for hand in &result.hands {
            match hand.outcome {
                HandOutcome::Blackjack => {
                    self.wins += 1;
                    self.blackjacks += 1;
                }
                HandOutcome::Win => self.wins += 1,
                HandOutcome::Push => self.pushes += 1,
                HandOutcome::Lose | HandOutcome::Bust | HandOutcome::Surrendered => {
                    self.losses += 1;
                }
            }
        }
        self.rounds += 1;
    }
}

/// The seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    chips: usize,
    stats: Stats,
}

impl Player {
    /// Creates a player holding `chips`.
    #[must_use]
    pub const fn new(chips: usize) -> Self {
        Self {
            chips,
            stats: Stats {
                wins: 0,
                losses: 0,
                pushes: 0,
                blackjacks: 0,
                rounds: 0,
            },
        }
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the cumulative stats.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Takes `amount` chips, or returns `false` and leaves the balance alone
    /// when the player cannot cover it.
    pub(crate) const fn withdraw(&mut self, amount: usize) -> bool {
        if self.chips < amount {
            return false;
        }
        self.chips -= amount;
        true
    }

    pub(crate) const fn credit(&mut self, amount: usize) {
        self.chips += amount;
    }

    pub(crate) fn record(&mut self, result: &RoundResult) {
        self.stats.record(result);
    }
}
