//! Phase and per-round state types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Choosing a bet for the next round.
    Betting,
    /// Waiting for player actions on the active hand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Payouts are being credited.
    Settlement,
}

/// Insurance side bet state for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Insurance {
    /// The dealer's up card is not an ace, or the table has no insurance.
    #[default]
    Unavailable,
    /// Offered and awaiting the player's decision.
    Offered,
    /// Declined, or closed by another player action.
    Declined,
    /// Taken with the given stake.
    Taken(usize),
}

impl Insurance {
    /// Returns the stake placed on insurance.
    #[must_use]
    pub const fn stake(self) -> usize {
        match self {
            Self::Taken(stake) => stake,
            Self::Unavailable | Self::Offered | Self::Declined => 0,
        }
    }
}

/// A player action available on the active hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Keep the hand.
    Stand,
    /// Double the bet and draw exactly one card.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
    /// Give up half the bet.
    Surrender,
    /// Take the insurance side bet.
    Insurance,
}
