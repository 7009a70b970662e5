//! Read-only views of the table for renderers.
//!
//! A [`Snapshot`] is an owned copy taken after a transition. Renderers read
//! it and never recompute totals or rules themselves.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Action, Phase};
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::player::Stats;
use crate::result::RoundResult;

/// A dealer card as the player sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// Face up.
    Up(Card),
    /// The concealed hole card.
    Down,
}

/// The dealer's hand as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DealerView {
    /// Dealer cards in deal order.
    pub cards: Vec<CardFace>,
    /// Value of the face-up cards.
    pub visible_value: u8,
    /// Whether the hole card is still concealed.
    pub hole_hidden: bool,
}

impl From<&DealerHand> for DealerView {
    fn from(dealer: &DealerHand) -> Self {
        let hole_hidden = !dealer.is_hole_revealed();
        let cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if hole_hidden && index > 0 {
                    CardFace::Down
                } else {
                    CardFace::Up(*card)
                }
            })
            .collect();

        Self {
            cards,
            visible_value: dealer.visible_value(),
            hole_hidden,
        }
    }
}

/// One player hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// The hand index (1 is the split hand).
    pub index: usize,
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Best total.
    pub value: u8,
    /// Whether an ace counts as 11.
    pub is_soft: bool,
    /// Locked bet.
    pub bet: usize,
    /// Hand status.
    pub status: HandStatus,
    /// Whether the hand is over 21.
    pub is_bust: bool,
    /// Whether the hand is a natural blackjack.
    pub is_blackjack: bool,
    /// Whether the hand is the one acting.
    pub is_active: bool,
    /// Whether the hand doubled down.
    pub doubled: bool,
    /// Whether the hand came from a split.
    pub from_split: bool,
}

impl HandView {
    pub(crate) fn new(index: usize, hand: &Hand, is_active: bool) -> Self {
        Self {
            index,
            cards: hand.cards().to_vec(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            bet: hand.bet(),
            status: hand.status(),
            is_bust: hand.is_bust(),
            is_blackjack: hand.is_blackjack(),
            is_active,
            doubled: hand.is_doubled(),
            from_split: hand.is_from_split(),
        }
    }
}

/// The table after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// Chip balance, locked bets excluded.
    pub chips: usize,
    /// The bet chosen for the next round.
    pub bet: usize,
    /// Chips locked in the round in progress, insurance included.
    pub locked: usize,
    /// The dealer's hand.
    pub dealer: DealerView,
    /// The player's hands.
    pub hands: Vec<HandView>,
    /// Index of the acting hand during the player's turn.
    pub active_hand: Option<usize>,
    /// Whether insurance can be taken or declined now.
    pub insurance_offered: bool,
    /// Insurance stake (0 if none).
    pub insurance_bet: usize,
    /// Actions the active hand can take.
    pub available_actions: Vec<Action>,
    /// Cumulative stats.
    pub stats: Stats,
    /// Human-readable status message.
    pub message: String,
    /// The most recently settled round.
    pub last_result: Option<RoundResult>,
}
