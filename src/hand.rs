//! Hand evaluation and player/dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Sums the cards with every ace at 11, then converts aces to 1 one at a time
/// while the total is over 21.
///
/// Returns the total and whether an ace is still counted as 11.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u16::from(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Returns the best total of the cards.
///
/// This is the largest total not above 21 reachable by counting each ace as
/// 11 or 1, or the smallest total when every choice busts.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the cards are exactly two cards totaling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == 21
}

/// Returns whether the cards total more than 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > 21
}

/// Returns whether an ace is counted as 11 in the best total.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether a pair can be split.
///
/// The two cards must have equal value (a 10 and a king qualify) and the
/// player needs `bet` more chips to cover the second hand.
#[must_use]
pub fn can_split(cards: &[Card], chips: usize, bet: usize) -> bool {
    cards.len() == 2 && cards[0].value() == cards[1].value() && chips >= bet
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural blackjack.
    Blackjack,
    /// Player has surrendered.
    Surrendered,
}

/// A player's hand together with its locked bet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    bet: usize,
    from_split: bool,
    doubled: bool,
}

impl Hand {
    /// Creates a new empty hand with the given locked bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            from_split: false,
            doubled: false,
        }
    }

    /// Creates the second hand of a split, holding the moved card.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            bet,
            from_split: true,
            doubled: false,
        }
    }

    /// Adds a card and updates the status.
    ///
    /// Going over 21 busts the hand. Two cards totaling 21 make a blackjack,
    /// except on split hands.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = self.value();
        if value > 21 {
            self.status = HandStatus::Bust;
        } else if self.cards.len() == 2 && value == 21 && !self.from_split {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns whether the hand can still take actions.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == HandStatus::Active
    }

    /// Returns the locked bet for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the locked bet.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Returns whether the bet on this hand was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Marks the hand as one half of a split, so 21 on two cards no longer
    /// counts as a natural.
    pub const fn mark_split(&mut self) {
        self.from_split = true;
    }

    /// Returns whether this hand came from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns the best total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack.
    ///
    /// Split hands never are, even with two cards totaling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        !self.from_split && is_blackjack(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, including a concealed hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the value a player can see: the up card alone while the hole
    /// card is concealed.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.first().map_or(0, Card::value)
        }
    }

    /// Returns the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
