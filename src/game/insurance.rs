use crate::error::InsuranceError;

use super::table::{Round, Table};
use super::{Insurance, Phase};

impl Table {
    fn insurance_offer(&mut self) -> Result<&mut Round, InsuranceError> {
        if self.phase != Phase::PlayerTurn {
            return Err(InsuranceError::NotOffered);
        }
        let round = self.round.as_mut().ok_or(InsuranceError::NotOffered)?;
        match round.insurance {
            Insurance::Offered => Ok(round),
            Insurance::Declined | Insurance::Taken(_) => Err(InsuranceError::AlreadyDecided),
            Insurance::Unavailable => Err(InsuranceError::NotOffered),
        }
    }

    /// Takes insurance for half the locked bet, rounded down.
    ///
    /// The stake is paid 2:1 at settlement if the dealer has blackjack.
    pub(super) fn take_insurance(&mut self) -> Result<usize, InsuranceError> {
        let chips = self.player.chips();
        let round = self.insurance_offer()?;

        let stake = round.bet / 2;
        if stake == 0 {
            return Err(InsuranceError::StakeTooSmall);
        }
        if chips < stake {
            return Err(InsuranceError::InsufficientFunds);
        }

        round.insurance = Insurance::Taken(stake);
        self.player.withdraw(stake);
        log::debug!("insurance taken for {stake}");
        self.set_message("Insurance taken. Hit or stand?");
        Ok(stake)
    }

    pub(super) fn decline_insurance(&mut self) -> Result<(), InsuranceError> {
        let round = self.insurance_offer()?;
        round.insurance = Insurance::Declined;
        self.set_message("Insurance declined. Hit or stand?");
        Ok(())
    }
}
