//! Error types for engine intents.
//!
//! A rejected intent never changes the table; the error's message is also
//! shown as the status message of the next snapshot.

use thiserror::Error;

/// Errors that can occur while choosing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets can only change between rounds.
    #[error("bets are locked until the round is over")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("not enough chips for that bet")]
    InsufficientFunds,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// No bet has been chosen.
    #[error("place a bet first")]
    NoBet,
    /// The chosen bet exceeds the chip balance.
    #[error("not enough chips for that bet")]
    InsufficientFunds,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Not the player's turn.
    #[error("it is not your turn")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// A hand has already been split this round.
    #[error("a hand can only be split once")]
    AlreadySplit,
    /// Cannot surrender at this point.
    #[error("cannot surrender at this point")]
    CannotSurrender,
    /// Insufficient funds for this action.
    #[error("not enough chips for this action")]
    InsufficientFunds,
}

/// Errors that can occur during insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance is not on offer right now.
    #[error("insurance is not on offer")]
    NotOffered,
    /// Player already made the insurance decision.
    #[error("insurance already decided")]
    AlreadyDecided,
    /// The bet is too small for a half-bet stake.
    #[error("bet is too small to insure")]
    StakeTooSmall,
    /// Insufficient funds for insurance.
    #[error("not enough chips for insurance")]
    InsufficientFunds,
}

/// Errors that can occur when refilling chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RefillError {
    /// The balance is already at or above the cap.
    #[error("chip balance is already at the {0} maximum")]
    AtCap(usize),
}

/// Any rejected intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Rejected bet.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Rejected round start.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Rejected player action.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Rejected insurance decision.
    #[error(transparent)]
    Insurance(#[from] InsuranceError),
    /// Rejected refill.
    #[error(transparent)]
    Refill(#[from] RefillError),
}
