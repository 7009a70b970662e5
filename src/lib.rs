//! A single-seat blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the whole round as a state
//! machine: bet locking, dealing, player actions (hit, stand, double down,
//! split, surrender, insurance), dealer play-out and settlement. Renderers
//! read a [`Snapshot`] after each transition and feed user [`Intent`]s back
//! in; they never compute game rules themselves.
//!
//! # Example
//!
//! ```
//! use bjround::{Card, Game, GameOptions, Intent, Phase, Rank, Suit};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.stack_shoe(&[
//!     Card::new(Rank::Ten, Suit::Spades),
//!     Card::new(Rank::Nine, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Clubs),
//!     Card::new(Rank::Seven, Suit::Diamonds),
//!     Card::new(Rank::Two, Suit::Hearts),
//! ]);
//! game.dispatch(Intent::PlaceBet(10)).unwrap();
//! game.dispatch(Intent::StartRound).unwrap();
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.phase, Phase::PlayerTurn);
//! assert_eq!(snapshot.hands[0].value, 20);
//! assert_eq!(snapshot.dealer.visible_value, 9);
//!
//! game.dispatch(Intent::Stand).unwrap();
//! let result = game.last_result().unwrap();
//! assert_eq!(result.net, 10);
//! assert_eq!(game.chips(), 210);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod intent;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealError, Error, InsuranceError, RefillError};
pub use game::{Action, Game, Insurance, Phase};
pub use hand::{DealerHand, Hand, HandStatus, can_split, hand_value, is_blackjack, is_bust, is_soft};
pub use intent::Intent;
pub use options::{DoubleOption, GameOptions, RoundingMode};
pub use player::{Player, Stats};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::{Shoe, ShoeKind};
pub use snapshot::{CardFace, DealerView, HandView, Snapshot};
