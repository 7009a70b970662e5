//! Settlement results.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses to the dealer's higher total.
    Lose,
    /// Player went over 21.
    Bust,
    /// Push (tie).
    Push,
    /// Player's natural blackjack was paid.
    Blackjack,
    /// Player surrendered.
    Surrendered,
}

impl HandOutcome {
    /// Returns whether the outcome counts as a loss in the stats.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::Bust | Self::Surrendered)
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (1 is the split hand).
    pub hand_index: usize,
    /// The cards the hand finished with.
    pub cards: Vec<Card>,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The locked bet for this hand, doubled if the hand doubled down.
    pub bet: usize,
    /// Chips credited for this hand at settlement.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// Whether the hand doubled down.
    pub doubled: bool,
}

/// Result of a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player hand.
    pub hands: Vec<HandResult>,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Insurance stake (0 if no insurance taken).
    pub insurance_bet: usize,
    /// Insurance payout, stake included.
    pub insurance_payout: usize,
    /// Chips returned when surrendering.
    pub surrender_refund: usize,
    /// Total chips credited at settlement (hands and insurance).
    pub total_payout: usize,
    /// Net result of the round (positive = profit).
    pub net: isize,
}
