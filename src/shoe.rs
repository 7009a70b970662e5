//! Card sources.
//!
//! The default [`ShoeKind::Infinite`] shoe draws every card independently
//! and uniformly (rank over 13, suit over 4), which is the same as drawing
//! with replacement from an endless supply of decks. [`ShoeKind::Decks`]
//! deals from a finite, shuffled shoe instead; the two models give
//! different odds.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// The sampling model used by a [`Shoe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShoeKind {
    /// Every draw is an independent uniform card.
    #[default]
    Infinite,
    /// A shuffled shoe of the given number of 52-card decks, dealt without
    /// replacement.
    Decks(u8),
}

/// Deals cards for the engine.
#[derive(Debug, Clone)]
pub struct Shoe {
    kind: ShoeKind,
    /// Remaining cards of a finite shoe, dealt from the back.
    cards: Vec<Card>,
    /// Cards placed on top of the shoe, dealt from the back.
    stacked: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shoe of the given kind seeded with `seed`.
    #[must_use]
    pub fn new(kind: ShoeKind, seed: u64) -> Self {
        let mut shoe = Self {
            kind,
            cards: Vec::new(),
            stacked: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reshuffle();
        shoe
    }

    /// Returns the sampling model of the shoe.
    #[must_use]
    pub const fn kind(&self) -> ShoeKind {
        self.kind
    }

    /// Draws the next card.
    ///
    /// Stacked cards come first. A finite shoe that runs dry is reshuffled
    /// in place, so drawing never fails.
    pub fn draw(&mut self) -> Card {
        if let Some(card) = self.stacked.pop() {
            return card;
        }

        match self.kind {
            ShoeKind::Infinite => self.random_card(),
            ShoeKind::Decks(_) => {
                if self.cards.is_empty() {
                    log::info!("shoe ran dry mid-round, reshuffling");
                    self.reshuffle();
                }
                match self.cards.pop() {
                    Some(card) => card,
                    // A zero-deck shoe has nothing to shuffle.
                    None => self.random_card(),
                }
            }
        }
    }

    /// Places cards on top of the shoe.
    ///
    /// The cards are dealt in the given order before anything else, and do
    /// not count against a finite shoe.
    pub fn stack(&mut self, cards: &[Card]) {
        self.stacked.extend(cards.iter().rev().copied());
    }

    /// Returns the number of cards left in a finite shoe.
    ///
    /// Returns `None` for an infinite shoe.
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        match self.kind {
            ShoeKind::Infinite => None,
            ShoeKind::Decks(_) => Some(self.cards.len()),
        }
    }

    /// Returns whether at least `penetration` of a finite shoe has been
    /// dealt.
    ///
    /// Always `false` for an infinite shoe or when `penetration` is 0.
    #[must_use]
    pub fn needs_reshuffle(&self, penetration: f64) -> bool {
        let ShoeKind::Decks(decks) = self.kind else {
            return false;
        };
        if penetration <= 0.0 || decks == 0 {
            return false;
        }

        let total = decks as usize * DECK_SIZE;
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.cards.len() as f64 / total as f64);

        used_ratio >= penetration
    }

    /// Rebuilds and shuffles a finite shoe. No effect on an infinite shoe.
    pub fn reshuffle(&mut self) {
        let ShoeKind::Decks(decks) = self.kind else {
            return;
        };

        self.cards.clear();
        self.cards.reserve(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(rank, suit));
                }
            }
        }
        self.cards.shuffle(&mut self.rng);
    }

    fn random_card(&mut self) -> Card {
        let rank = Rank::ALL[self.rng.random_range(0..Rank::ALL.len())];
        let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
        Card::new(rank, suit)
    }
}
