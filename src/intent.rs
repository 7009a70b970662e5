//! User intents accepted by [`Game::dispatch`](crate::Game::dispatch).

/// Something the player asked the table to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Choose the bet for the next round.
    PlaceBet(usize),
    /// Lock the bet and deal.
    StartRound,
    /// Draw a card on the active hand.
    Hit,
    /// Finish the active hand.
    Stand,
    /// Double the bet on the active hand and draw one card.
    DoubleDown,
    /// Split the active pair.
    Split,
    /// Give up the hand for half the bet.
    Surrender,
    /// Take insurance against a dealer ace.
    TakeInsurance,
    /// Turn down insurance.
    DeclineInsurance,
    /// Top up the chip balance.
    RefillChips,
    /// Return to a fresh betting phase.
    NewRound,
}
