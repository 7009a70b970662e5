//! The single owned state object every intent mutates.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::snapshot::{DealerView, HandView, Snapshot};

use super::{Insurance, Phase};

/// Transient state of the round in progress.
#[derive(Debug, Clone)]
pub(crate) struct Round {
    /// Player hands; a second one appears after a split.
    pub(super) hands: Vec<Hand>,
    /// Index of the acting hand.
    pub(super) active: usize,
    pub(super) dealer: DealerHand,
    pub(super) insurance: Insurance,
    /// The bet locked at the start of the round.
    pub(super) bet: usize,
    pub(super) surrender_refund: usize,
}

impl Round {
    pub(super) fn active_hand(&self) -> Result<&Hand, ActionError> {
        self.hands.get(self.active).ok_or(ActionError::InvalidState)
    }

    pub(super) fn active_hand_mut(&mut self) -> Result<&mut Hand, ActionError> {
        self.hands
            .get_mut(self.active)
            .ok_or(ActionError::InvalidState)
    }

    /// The insurance offer only stands until the player acts.
    pub(super) const fn close_insurance_offer(&mut self) {
        if matches!(self.insurance, Insurance::Offered) {
            self.insurance = Insurance::Declined;
        }
    }

    pub(super) fn is_split(&self) -> bool {
        self.hands.len() > 1
    }

    /// Chips locked in this round.
    pub(super) fn locked(&self) -> usize {
        self.hands.iter().map(Hand::bet).sum::<usize>() + self.insurance.stake()
    }
}

/// Returns the round if the player is to act.
pub(super) fn playing(phase: Phase, round: &mut Option<Round>) -> Result<&mut Round, ActionError> {
    if phase != Phase::PlayerTurn {
        return Err(ActionError::InvalidState);
    }
    round.as_mut().ok_or(ActionError::InvalidState)
}

#[derive(Debug)]
pub(crate) struct Table {
    pub(super) phase: Phase,
    pub(super) player: Player,
    /// The bet chosen for the next round.
    pub(super) bet: usize,
    pub(super) round: Option<Round>,
    pub(super) last_result: Option<RoundResult>,
    pub(super) message: String,
    pub(super) shoe: Shoe,
}

impl Table {
    pub(super) fn new(options: &GameOptions, seed: u64) -> Self {
        Self {
            phase: Phase::Betting,
            player: Player::new(options.starting_chips),
            bet: 0,
            round: None,
            last_result: None,
            message: String::from("Place your bet and start the round."),
            shoe: Shoe::new(options.shoe, seed),
        }
    }

    pub(super) fn enter(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    pub(super) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Returns to a fresh betting phase.
    ///
    /// A round still in progress is abandoned: every stake it locked is
    /// forfeited and nothing is recorded in the stats.
    pub(super) fn new_round(&mut self) {
        if let Some(round) = self.round.take() {
            log::info!("round abandoned, {} chips forfeited", round.locked());
        }
        self.last_result = None;
        self.enter(Phase::Betting);
        self.set_message("Place your bet and start the round.");
    }

    pub(super) fn snapshot(&self, options: &GameOptions) -> Snapshot {
        let (dealer, hands, active_hand, insurance, locked) = match &self.round {
            Some(round) => {
                let active = (self.phase == Phase::PlayerTurn).then_some(round.active);
                let hands = round
                    .hands
                    .iter()
                    .enumerate()
                    .map(|(index, hand)| HandView::new(index, hand, active == Some(index)))
                    .collect();
                (
                    DealerView::from(&round.dealer),
                    hands,
                    active,
                    round.insurance,
                    round.locked(),
                )
            }
            None => (DealerView::default(), Vec::new(), None, Insurance::Unavailable, 0),
        };

        Snapshot {
            phase: self.phase,
            chips: self.player.chips(),
            bet: self.bet,
            locked,
            dealer,
            hands,
            active_hand,
            insurance_offered: self.phase == Phase::PlayerTurn
                && matches!(insurance, Insurance::Offered),
            insurance_bet: insurance.stake(),
            available_actions: self.available_actions(options),
            stats: self.player.stats(),
            message: self.message.clone(),
            last_result: self.last_result.clone(),
        }
    }
}
