use alloc::format;

use crate::error::{BetError, DealError, RefillError};
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::options::GameOptions;

use super::table::{Round, Table};
use super::{Insurance, Phase};

impl Table {
    pub(super) fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.player.chips() {
            return Err(BetError::InsufficientFunds);
        }

        self.bet = amount;
        self.set_message(format!("Bet: {amount}. Start the round when ready."));
        Ok(())
    }

    pub(super) fn start_round(&mut self, options: &GameOptions) -> Result<(), DealError> {
        if self.phase != Phase::Betting {
            return Err(DealError::InvalidState);
        }

        let bet = self.bet;
        if bet == 0 {
            return Err(DealError::NoBet);
        }
        if !self.player.withdraw(bet) {
            return Err(DealError::InsufficientFunds);
        }

        if self.shoe.needs_reshuffle(options.penetration) {
            self.shoe.reshuffle();
            log::info!("shoe reshuffled");
        }
        self.last_result = None;

        let mut hand = Hand::new(bet);
        let mut dealer = DealerHand::new();
        hand.add_card(self.shoe.draw());
        dealer.add_card(self.shoe.draw());
        hand.add_card(self.shoe.draw());
        dealer.add_card(self.shoe.draw());

        let up_card = dealer.up_card().copied();
        log::debug!(
            "bet {bet} locked, dealt {:?} against up card {:?}",
            hand.cards(),
            up_card
        );

        let natural = hand.status() == HandStatus::Blackjack;
        let insurance = if options.insurance && !natural && up_card.is_some_and(|c| c.is_ace()) {
            Insurance::Offered
        } else {
            Insurance::Unavailable
        };

        self.round = Some(Round {
            hands: alloc::vec![hand],
            active: 0,
            dealer,
            insurance,
            bet,
            surrender_refund: 0,
        });
        self.enter(Phase::PlayerTurn);

        if natural {
            // Settling against the full dealer hand is the peek: only an ace
            // or ten-value up card can hide a dealer blackjack.
            log::debug!("player natural against up card {up_card:?}");
            self.settle(options);
            return Ok(());
        }

        if insurance == Insurance::Offered {
            self.set_message("Dealer shows an ace. Insurance?");
        } else {
            self.set_message("Hit or stand?");
        }
        Ok(())
    }

    pub(super) fn refill_chips(&mut self, options: &GameOptions) -> Result<usize, RefillError> {
        let chips = self.player.chips();
        if chips >= options.chip_cap {
            return Err(RefillError::AtCap(options.chip_cap));
        }

        let added = options.refill_amount.min(options.chip_cap - chips);
        self.player.credit(added);
        let chips = self.player.chips();
        log::debug!("refilled {added} chips, balance {chips}");
        self.set_message(format!("Chips refilled: {chips}."));
        Ok(chips)
    }
}
