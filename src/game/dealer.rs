use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::HandStatus;
use crate::options::{GameOptions, RoundingMode};
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::Phase;
use super::table::Table;

#[cfg(feature = "std")]
pub(super) fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(super) fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

fn settlement_message(result: &RoundResult) -> String {
    let mut message = match result.hands.as_slice() {
        [hand] => String::from(match hand.outcome {
            HandOutcome::Blackjack => "Blackjack! You win.",
            HandOutcome::Win if result.dealer_bust => "Dealer busts. You win!",
            HandOutcome::Win => "You win!",
            HandOutcome::Push if result.dealer_blackjack => "Push: both have blackjack.",
            HandOutcome::Push => "Push. Your bet is returned.",
            HandOutcome::Bust => "Bust! You lose.",
            HandOutcome::Surrendered => "Surrendered. Half your bet is returned.",
            HandOutcome::Lose => "You lose.",
        }),
        hands => {
            let count = |wanted: fn(HandOutcome) -> bool| {
                hands.iter().filter(|hand| wanted(hand.outcome)).count()
            };
            format!(
                "Round over: {} won, {} lost, {} pushed.",
                count(|o| matches!(o, HandOutcome::Win | HandOutcome::Blackjack)),
                count(HandOutcome::is_loss),
                count(|o| o == HandOutcome::Push),
            )
        }
    };

    message.push_str(&format!(" Dealer: {}.", result.dealer_value));
    if result.insurance_payout > 0 {
        message.push_str(" Insurance pays 2:1.");
    }
    message
}

impl Table {
    /// Reveals the hole card and draws to 17.
    ///
    /// With `stand_on_soft_17` off, the dealer also draws on soft 17. The
    /// dealer plays out even when every player hand is bust.
    pub(super) fn play_dealer(&mut self, options: &GameOptions) {
        self.enter(Phase::DealerTurn);
        let Some(round) = self.round.as_mut() else {
            return;
        };
        round.dealer.reveal_hole();

        loop {
            let value = round.dealer.value();
            let is_soft = round.dealer.is_soft();

            if value > 17 {
                break;
            }
            if value == 17 && (!is_soft || options.stand_on_soft_17) {
                break;
            }

            let card = self.shoe.draw();
            round.dealer.add_card(card);
            log::debug!("dealer draws {card}, now {}", round.dealer.value());
        }
    }

    /// Pays out every hand and the insurance side bet, records the stats and
    /// returns to betting.
    pub(super) fn settle(&mut self, options: &GameOptions) {
        self.enter(Phase::Settlement);
        let Some(mut round) = self.round.take() else {
            self.enter(Phase::Betting);
            return;
        };
        round.dealer.reveal_hole();

        let dealer_value = round.dealer.value();
        let dealer_bust = round.dealer.is_bust();
        let dealer_blackjack = round.dealer.is_blackjack();

        let mut hands = Vec::with_capacity(round.hands.len());
        let mut total_payout: usize = 0;
        let mut total_bet: usize = 0;

        for (hand_index, hand) in round.hands.iter().enumerate() {
            let bet = hand.bet();
            total_bet += bet;
            let player_value = hand.value();

            let (outcome, payout) = match hand.status() {
                // Half the bet was returned when surrendering
                HandStatus::Surrendered => (HandOutcome::Surrendered, 0),
                // The bet was forfeited on the busting draw
                HandStatus::Bust => (HandOutcome::Bust, 0),
                HandStatus::Blackjack => {
                    if dealer_blackjack {
                        (HandOutcome::Push, bet)
                    } else {
                        #[expect(
                            clippy::cast_precision_loss,
                            reason = "f64 has sufficient precision for monetary values"
                        )]
                        let winnings = round_amount(
                            (bet as f64) * options.blackjack_pays,
                            options.rounding_blackjack,
                        );
                        (HandOutcome::Blackjack, bet + winnings)
                    }
                }
                HandStatus::Stand | HandStatus::Active => {
                    if dealer_bust || player_value > dealer_value {
                        (HandOutcome::Win, bet * 2)
                    } else if player_value == dealer_value {
                        (HandOutcome::Push, bet)
                    } else {
                        (HandOutcome::Lose, 0)
                    }
                }
            };

            total_payout += payout;
            hands.push(HandResult {
                hand_index,
                cards: hand.cards().to_vec(),
                outcome,
                bet,
                payout,
                player_value,
                doubled: hand.is_doubled(),
            });
        }

        let insurance_bet = round.insurance.stake();
        let insurance_payout = if dealer_blackjack {
            // Stake back plus 2:1
            insurance_bet * 3
        } else {
            0
        };
        total_payout += insurance_payout;
        total_bet += insurance_bet;

        self.player.credit(total_payout);

        #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
        let net = (total_payout + round.surrender_refund) as isize - total_bet as isize;

        let result = RoundResult {
            hands,
            dealer_cards: round.dealer.cards().to_vec(),
            dealer_value,
            dealer_bust,
            dealer_blackjack,
            insurance_bet,
            insurance_payout,
            surrender_refund: round.surrender_refund,
            total_payout,
            net,
        };

        log::info!(
            "round settled: dealer {dealer_value}, paid {total_payout}, net {net}, chips {}",
            self.player.chips()
        );
        self.player.record(&result);
        self.set_message(settlement_message(&result));
        self.last_result = Some(result);
        self.enter(Phase::Betting);
    }
}
