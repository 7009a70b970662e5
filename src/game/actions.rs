use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus, can_split};
use crate::options::GameOptions;

use super::dealer::round_amount;
use super::table::{Round, Table, playing};
use super::{Action, Insurance, Phase};

fn check_double(hand: &Hand, chips: usize, options: &GameOptions) -> Result<(), ActionError> {
    // Can only double on the first two cards
    if hand.len() != 2 {
        return Err(ActionError::CannotDouble);
    }
    if hand.is_from_split() && !options.double_after_split {
        return Err(ActionError::CannotDouble);
    }
    if !options.double.allows(hand.value()) {
        return Err(ActionError::CannotDouble);
    }
    if chips < hand.bet() {
        return Err(ActionError::InsufficientFunds);
    }
    Ok(())
}

fn check_split(round: &Round, hand: &Hand, chips: usize) -> Result<(), ActionError> {
    if round.is_split() {
        return Err(ActionError::AlreadySplit);
    }
    let pair = matches!(hand.cards(), [first, second] if first.value() == second.value());
    if !pair {
        return Err(ActionError::CannotSplit);
    }
    if !can_split(hand.cards(), chips, hand.bet()) {
        return Err(ActionError::InsufficientFunds);
    }
    Ok(())
}

fn check_surrender(round: &Round, hand: &Hand, options: &GameOptions) -> Result<(), ActionError> {
    if !options.surrender || round.is_split() || hand.len() != 2 {
        return Err(ActionError::CannotSurrender);
    }
    Ok(())
}

impl Table {
    /// Moves past finished hands. Once none is left to act, the dealer plays
    /// and the round settles.
    fn advance(&mut self, options: &GameOptions) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let before = round.active;
        while round.hands.get(round.active).is_some_and(|hand| !hand.is_active()) {
            round.active += 1;
        }

        if round.active < round.hands.len() {
            if round.active != before {
                log::debug!("now playing hand {}", round.active);
                self.set_message("Playing split hand.");
            }
            return;
        }

        self.play_dealer(options);
        self.settle(options);
    }

    pub(super) fn hit(&mut self, options: &GameOptions) -> Result<Card, ActionError> {
        let round = playing(self.phase, &mut self.round)?;
        let index = round.active;
        let hand = round.active_hand_mut()?;

        let card = self.shoe.draw();
        hand.add_card(card);
        let value = hand.value();
        log::debug!("hand {index} hit {card}, now {value}");

        let message = if hand.status() == HandStatus::Bust {
            "Bust!"
        } else if value == 21 && options.auto_stand_on_21 {
            hand.set_status(HandStatus::Stand);
            "21!"
        } else {
            "Hit or stand?"
        };

        round.close_insurance_offer();
        self.set_message(message);
        self.advance(options);
        Ok(card)
    }

    pub(super) fn stand(&mut self, options: &GameOptions) -> Result<(), ActionError> {
        let round = playing(self.phase, &mut self.round)?;
        round.active_hand_mut()?.set_status(HandStatus::Stand);
        round.close_insurance_offer();
        log::debug!("hand {} stands", round.active);

        self.advance(options);
        Ok(())
    }

    pub(super) fn double_down(&mut self, options: &GameOptions) -> Result<Card, ActionError> {
        let round = playing(self.phase, &mut self.round)?;
        check_double(round.active_hand()?, self.player.chips(), options)?;

        let hand = round.active_hand_mut()?;
        if !self.player.withdraw(hand.bet()) {
            return Err(ActionError::InsufficientFunds);
        }
        hand.double_bet();

        let card = self.shoe.draw();
        hand.add_card(card);
        // Doubling stands the hand whatever it drew, bust aside
        if hand.is_active() {
            hand.set_status(HandStatus::Stand);
        }
        log::debug!("doubled to {}, drew {card}, now {}", hand.bet(), hand.value());

        let message = if hand.status() == HandStatus::Bust {
            "Doubled and bust!"
        } else {
            "Doubled down!"
        };

        round.close_insurance_offer();
        self.set_message(message);
        self.advance(options);
        Ok(card)
    }

    pub(super) fn split(&mut self, options: &GameOptions) -> Result<(), ActionError> {
        let round = playing(self.phase, &mut self.round)?;
        check_split(round, round.active_hand()?, self.player.chips())?;

        let index = round.active;
        let hand = round.active_hand_mut()?;
        let bet = hand.bet();
        let Some(moved) = hand.take_split_card() else {
            return Err(ActionError::CannotSplit);
        };
        if !self.player.withdraw(bet) {
            hand.add_card(moved);
            return Err(ActionError::InsufficientFunds);
        }

        let aces = moved.is_ace();
        hand.mark_split();
        let mut second = Hand::from_split(moved, bet);
        hand.add_card(self.shoe.draw());
        second.add_card(self.shoe.draw());

        for split_hand in [&mut *hand, &mut second] {
            let one_card = aces && options.split_aces_receive_one_card;
            let reached_21 = options.auto_stand_on_21 && split_hand.value() == 21;
            if split_hand.is_active() && (one_card || reached_21) {
                split_hand.set_status(HandStatus::Stand);
            }
        }
        log::debug!("split {:?} / {:?}", hand.cards(), second.cards());

        round.hands.insert(index + 1, second);
        round.close_insurance_offer();
        self.set_message("Split: play the first hand, then the second.");

        self.advance(options);
        Ok(())
    }

    pub(super) fn surrender(&mut self, options: &GameOptions) -> Result<usize, ActionError> {
        let round = playing(self.phase, &mut self.round)?;
        check_surrender(round, round.active_hand()?, options)?;

        let hand = round.active_hand_mut()?;
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let refund = round_amount((hand.bet() as f64) * 0.5, options.rounding_surrender);
        hand.set_status(HandStatus::Surrendered);

        round.surrender_refund = refund;
        round.close_insurance_offer();
        self.player.credit(refund);
        log::debug!("surrendered, {refund} chips returned");

        // Surrender ends the round without the dealer playing
        self.settle(options);
        Ok(refund)
    }

    /// Lists the actions the active hand can take right now.
    pub(super) fn available_actions(&self, options: &GameOptions) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.phase != Phase::PlayerTurn {
            return actions;
        }
        let Some(round) = self.round.as_ref() else {
            return actions;
        };
        let Ok(hand) = round.active_hand() else {
            return actions;
        };
        let chips = self.player.chips();

        actions.push(Action::Hit);
        actions.push(Action::Stand);
        if check_double(hand, chips, options).is_ok() {
            actions.push(Action::DoubleDown);
        }
        if check_split(round, hand, chips).is_ok() {
            actions.push(Action::Split);
        }
        if check_surrender(round, hand, options).is_ok() {
            actions.push(Action::Surrender);
        }
        if round.insurance == Insurance::Offered {
            let stake = round.bet / 2;
            if stake > 0 && chips >= stake {
                actions.push(Action::Insurance);
            }
        }
        actions
    }
}
