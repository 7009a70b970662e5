//! Game integration tests.

use bjround::{
    Action, ActionError, BetError, Card, CardFace, DealError, DoubleOption, Error, Game,
    GameOptions, HandOutcome, HandStatus, Insurance, InsuranceError, Intent, Phase, Rank,
    RefillError, ShoeKind, Suit,
};

fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

/// Starts a round with `bet` after stacking `draws` on the shoe.
///
/// The first four draws are dealt player, dealer up, player, dealer hole.
fn start(options: GameOptions, bet: usize, draws: &[Rank]) -> Game {
    let game = Game::new(options, 7);
    let cards: Vec<Card> = draws.iter().copied().map(card).collect();
    game.stack_shoe(&cards);
    game.place_bet(bet).unwrap();
    game.start_round().unwrap();
    game
}

#[test]
fn natural_blackjack_settles_immediately() {
    use Rank::{Ace, King, Nine, Seven};
    let game = start(GameOptions::default(), 10, &[Ace, Seven, King, Nine]);

    assert_eq!(game.phase(), Phase::Betting);
    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 25);
    assert_eq!(result.net, 15);
    assert_eq!(game.chips(), 215);

    let stats = game.stats();
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.blackjacks, 1);
    assert_eq!(stats.rounds, 1);
}

#[test]
fn natural_against_dealer_blackjack_pushes() {
    use Rank::{Ace, King};
    let game = start(GameOptions::default(), 10, &[Ace, Ace, King, King]);

    let result = game.last_result().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.insurance_bet, 0);
    assert_eq!(game.chips(), 200);
    assert_eq!(game.stats().pushes, 1);
    assert_eq!(game.stats().blackjacks, 0);
}

#[test]
fn split_pair_of_eights_plays_two_hands() {
    use Rank::{Eight, Six, Ten, Three, Two};
    let options = GameOptions::default().with_starting_chips(100);
    let game = start(options, 10, &[Eight, Six, Eight, Ten, Three, Two, Ten]);

    assert!(game.available_actions().contains(&Action::Split));
    game.split().unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.chips, 80);
    assert_eq!(snapshot.locked, 20);
    assert_eq!(snapshot.hands.len(), 2);
    for hand in &snapshot.hands {
        assert_eq!(hand.cards.len(), 2);
        assert_eq!(hand.bet, 10);
        assert!(hand.from_split);
    }
    assert_eq!(snapshot.hands[0].value, 11);
    assert_eq!(snapshot.hands[1].value, 10);
    assert_eq!(snapshot.active_hand, Some(0));

    game.stand().unwrap();
    assert_eq!(game.active_hand(), Some(1));
    game.stand().unwrap();

    let result = game.last_result().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.hands.len(), 2);
    for hand in &result.hands {
        assert_eq!(hand.outcome, HandOutcome::Win);
        assert_eq!(hand.bet, 10);
        assert_eq!(hand.payout, 20);
    }
    assert_eq!(game.chips(), 120);
    assert_eq!(game.stats().wins, 2);
}

#[test]
fn dealer_bust_pays_even_money() {
    use Rank::{Queen, Six, Ten};
    let game = start(GameOptions::default(), 10, &[Ten, Six, Queen, Ten, Six]);

    game.stand().unwrap();

    let result = game.last_result().unwrap();
    assert_eq!(result.dealer_value, 22);
    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 20);
    assert_eq!(game.chips(), 210);
}

#[test]
fn surrender_returns_half_without_dealer_play() {
    use Rank::{Five, Nine, Ten};
    let options = GameOptions::default().with_starting_chips(100);
    let game = start(options, 10, &[Nine, Five, Nine, Ten]);

    assert_eq!(game.surrender().unwrap(), 5);

    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.chips(), 95);
    assert_eq!(game.stats().losses, 1);

    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Surrendered);
    assert_eq!(result.surrender_refund, 5);
    assert_eq!(result.net, -5);
    assert_eq!(result.dealer_cards.len(), 2);
}

#[test]
fn insurance_pays_against_dealer_blackjack() {
    use Rank::{Ace, King, Nine, Ten};
    let options = GameOptions::default().with_starting_chips(100);
    let game = start(options, 20, &[Ten, Ace, Nine, King]);

    let snapshot = game.snapshot();
    assert!(snapshot.insurance_offered);
    assert!(snapshot.available_actions.contains(&Action::Insurance));

    assert_eq!(game.take_insurance().unwrap(), 10);
    assert_eq!(game.chips(), 70);
    assert_eq!(game.insurance(), Insurance::Taken(10));

    game.stand().unwrap();

    let result = game.last_result().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.insurance_bet, 10);
    assert_eq!(result.insurance_payout, 30);
    assert_eq!(result.net, 0);
    assert_eq!(game.chips(), 100);
}

#[test]
fn insurance_is_lost_when_dealer_has_no_blackjack() {
    use Rank::{Ace, Nine, Seven, Ten};
    let game = start(GameOptions::default(), 20, &[Ten, Ace, Nine, Seven]);

    game.take_insurance().unwrap();
    game.stand().unwrap();

    // Dealer soft 18 against 19
    let result = game.last_result().unwrap();
    assert_eq!(result.insurance_payout, 0);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.net, 10);
    assert_eq!(game.chips(), 210);
}

#[test]
fn insurance_offer_closes_once_the_player_acts() {
    use Rank::{Ace, Five, Nine, Six, Two};
    let game = start(GameOptions::default(), 10, &[Five, Ace, Six, Nine, Two]);

    assert_eq!(game.insurance(), Insurance::Offered);
    game.hit().unwrap();

    assert_eq!(game.insurance(), Insurance::Declined);
    assert_eq!(
        game.take_insurance().unwrap_err(),
        InsuranceError::AlreadyDecided
    );
    assert!(!game.available_actions().contains(&Action::Insurance));
}

#[test]
fn insurance_errors() {
    use Rank::{Ace, Five, Nine, Six};

    let game = start(GameOptions::default(), 10, &[Five, Nine, Six, Ace]);
    assert_eq!(game.take_insurance().unwrap_err(), InsuranceError::NotOffered);
    assert_eq!(
        game.decline_insurance().unwrap_err(),
        InsuranceError::NotOffered
    );

    let game = start(GameOptions::default(), 10, &[Five, Ace, Six, Nine]);
    game.decline_insurance().unwrap();
    assert_eq!(game.insurance(), Insurance::Declined);
    assert_eq!(
        game.take_insurance().unwrap_err(),
        InsuranceError::AlreadyDecided
    );

    let game = start(GameOptions::default(), 1, &[Five, Ace, Six, Nine]);
    assert_eq!(
        game.take_insurance().unwrap_err(),
        InsuranceError::StakeTooSmall
    );

    let options = GameOptions::default().with_insurance(false);
    let game = start(options, 10, &[Five, Ace, Six, Nine]);
    assert_eq!(game.insurance(), Insurance::Unavailable);
}

#[test]
fn hit_to_bust_loses_and_dealer_still_plays() {
    use Rank::{Five, Nine, Six, Ten, Two};
    let game = start(GameOptions::default(), 10, &[Ten, Five, Six, Ten, Nine, Two]);

    let drawn = game.hit().unwrap();
    assert_eq!(drawn.rank, Nine);

    assert_eq!(game.phase(), Phase::Betting);
    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Bust);
    assert_eq!(result.hands[0].player_value, 25);
    assert_eq!(result.dealer_cards, vec![card(Five), card(Ten), card(Two)]);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(game.chips(), 190);
    assert_eq!(game.stats().losses, 1);
}

#[test]
fn hitting_to_21_stands_automatically() {
    use Rank::{Five, Nine, Seven, Six, Ten, Two};
    let game = start(GameOptions::default(), 10, &[Five, Nine, Six, Seven, Ten, Two]);

    game.hit().unwrap();

    // No stand needed: the dealer has already played
    assert_eq!(game.phase(), Phase::Betting);
    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].player_value, 21);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
}

#[test]
fn double_down_draws_one_card_and_doubles_the_bet() {
    use Rank::{Five, Six, Ten, Two};
    let game = start(GameOptions::default(), 10, &[Five, Six, Six, Ten, Ten, Two]);

    assert!(game.available_actions().contains(&Action::DoubleDown));
    let drawn = game.double_down().unwrap();
    assert_eq!(drawn.rank, Ten);

    let result = game.last_result().unwrap();
    let hand = &result.hands[0];
    assert!(hand.doubled);
    assert_eq!(hand.bet, 20);
    assert_eq!(hand.player_value, 21);
    assert_eq!(hand.outcome, HandOutcome::Win);
    assert_eq!(hand.payout, 40);
    assert_eq!(game.chips(), 220);
}

#[test]
fn double_down_stands_even_below_21() {
    use Rank::{Five, Four, Ten, Two};
    let game = start(GameOptions::default(), 10, &[Five, Ten, Four, Ten, Two]);

    game.double_down().unwrap();

    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].cards.len(), 3);
    assert_eq!(result.hands[0].player_value, 11);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(game.chips(), 180);
}

#[test]
fn double_down_restrictions() {
    use Rank::{Five, Seven, Six, Ten};

    let game = start(GameOptions::default(), 150, &[Five, Six, Seven, Ten]);
    assert_eq!(
        game.double_down().unwrap_err(),
        ActionError::InsufficientFunds
    );

    let options = GameOptions::default().with_double(DoubleOption::NineThrough11);
    let game = start(options, 10, &[Five, Six, Seven, Ten]);
    assert!(!game.available_actions().contains(&Action::DoubleDown));
    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);

    let game = start(GameOptions::default(), 10, &[Five, Six, Seven, Ten, Five]);
    game.hit().unwrap();
    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);
}

#[test]
fn split_accepts_equal_values_and_rejects_different_ones() {
    use Rank::{King, Nine, Six, Ten};

    let game = start(GameOptions::default(), 10, &[Ten, Six, King, Ten]);
    assert!(game.available_actions().contains(&Action::Split));

    let game = start(GameOptions::default(), 10, &[Nine, Six, Ten, Ten]);
    assert!(!game.available_actions().contains(&Action::Split));
    assert_eq!(game.split().unwrap_err(), ActionError::CannotSplit);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.chips(), 190);
    assert_eq!(game.hands().len(), 1);
}

#[test]
fn split_is_allowed_only_once() {
    use Rank::{Eight, Six, Ten, Two};
    let game = start(GameOptions::default(), 10, &[Eight, Six, Eight, Ten, Eight, Two]);

    game.split().unwrap();
    let hands = game.hands();
    assert_eq!(hands[0].value(), 16);
    assert_eq!(game.split().unwrap_err(), ActionError::AlreadySplit);
    assert_eq!(game.surrender().unwrap_err(), ActionError::CannotSurrender);
}

#[test]
fn split_aces_take_one_card_and_never_pay_as_blackjack() {
    use Rank::{Ace, King, Nine, Six, Ten};
    let game = start(GameOptions::default(), 10, &[Ace, Six, Ace, Ten, Nine, King, Ten]);

    game.split().unwrap();

    assert_eq!(game.phase(), Phase::Betting);
    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].player_value, 20);
    assert_eq!(result.hands[1].player_value, 21);
    for hand in &result.hands {
        assert_eq!(hand.cards.len(), 2);
        assert_eq!(hand.outcome, HandOutcome::Win);
        assert_eq!(hand.payout, 20);
    }
    assert_eq!(game.chips(), 220);
    assert_eq!(game.stats().blackjacks, 0);
}

#[test]
fn split_hand_reaching_21_stands() {
    use Rank::{Ace, Eight, Six, Ten, Three};
    let options = GameOptions::default().with_split_aces_receive_one_card(false);
    let game = start(options, 10, &[Ace, Six, Ace, Ten, Ten, Three]);

    game.split().unwrap();

    let hands = game.hands();
    assert_eq!(hands[0].value(), 21);
    assert_eq!(hands[0].status(), HandStatus::Stand);
    assert!(!hands[0].is_blackjack());
    assert_eq!(hands[1].status(), HandStatus::Active);
    assert_eq!(game.active_hand(), Some(1));

    game.stack_shoe(&[card(Eight)]);
    game.hit().unwrap();
    assert_eq!(game.hands()[1].value(), 12);
}

#[test]
fn hitting_to_21_waits_for_stand_when_auto_stand_is_off() {
    use Rank::{Ace, Five, Nine, Seven, Two};
    let options = GameOptions::default().with_auto_stand_on_21(false);
    let game = start(options, 10, &[Ace, Nine, Five, Seven, Five, Two]);

    game.hit().unwrap();

    let hands = game.hands();
    assert_eq!(hands[0].value(), 21);
    assert!(hands[0].is_soft());
    assert_eq!(hands[0].status(), HandStatus::Active);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert!(game.available_actions().contains(&Action::Hit));

    game.stand().unwrap();
    let result = game.last_result().unwrap();
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
}

#[test]
fn split_hand_reaching_21_stays_active_when_auto_stand_is_off() {
    use Rank::{Ace, Six, Ten, Three};
    let options = GameOptions::default()
        .with_split_aces_receive_one_card(false)
        .with_auto_stand_on_21(false);
    let game = start(options, 10, &[Ace, Six, Ace, Ten, Ten, Three]);

    game.split().unwrap();

    let hands = game.hands();
    assert_eq!(hands[0].value(), 21);
    assert_eq!(hands[0].status(), HandStatus::Active);
    assert_eq!(game.active_hand(), Some(0));
}

#[test]
fn surrender_restrictions() {
    use Rank::{Five, Nine, Six, Ten, Two};

    let game = start(GameOptions::default(), 10, &[Five, Nine, Six, Ten, Two]);
    game.hit().unwrap();
    assert_eq!(game.surrender().unwrap_err(), ActionError::CannotSurrender);

    let options = GameOptions::default().with_surrender(false);
    let game = start(options, 10, &[Five, Nine, Six, Ten]);
    assert!(!game.available_actions().contains(&Action::Surrender));
    assert_eq!(game.surrender().unwrap_err(), ActionError::CannotSurrender);
}

#[test]
fn dealer_stands_on_soft_17_by_default() {
    use Rank::{Ace, Four, Nine, Six, Ten};
    let game = start(GameOptions::default(), 10, &[Ten, Ace, Nine, Six, Four]);

    game.stand().unwrap();

    let result = game.last_result().unwrap();
    assert_eq!(result.dealer_cards.len(), 2);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    use Rank::{Ace, Four, Nine, Six, Ten};
    let options = GameOptions::default().with_stand_on_soft_17(false);
    let game = start(options, 10, &[Ten, Ace, Nine, Six, Four]);

    game.stand().unwrap();

    let result = game.last_result().unwrap();
    assert_eq!(result.dealer_cards.len(), 3);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
}

#[test]
fn equal_totals_push() {
    use Rank::{Eight, Nine, Ten};
    let game = start(GameOptions::default(), 10, &[Ten, Ten, Eight, Eight]);

    game.stand().unwrap();

    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.hands[0].payout, 10);
    assert_eq!(game.chips(), 200);

    // The bet persists, so the next round can start right away
    assert_eq!(game.bet(), 10);
    game.stack_shoe(&[card(Nine), card(Ten), card(Ten), card(Eight)]);
    game.start_round().unwrap();
    game.stand().unwrap();
    assert_eq!(game.last_result().unwrap().hands[0].outcome, HandOutcome::Win);
    assert_eq!(game.stats().rounds, 2);
}

#[test]
fn rejected_intents_leave_state_alone_and_report() {
    use Rank::{Five, Nine, Six, Ten};
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.message(), ActionError::InvalidState.to_string());

    assert_eq!(game.start_round().unwrap_err(), DealError::NoBet);
    assert_eq!(game.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(
        game.place_bet(201).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(game.message(), BetError::InsufficientFunds.to_string());
    assert_eq!(game.chips(), 200);
    assert_eq!(game.bet(), 0);
    assert_eq!(game.phase(), Phase::Betting);

    game.stack_shoe(&[card(Five), card(Nine), card(Six), card(Ten)]);
    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    let before = game.snapshot();

    assert_eq!(game.place_bet(20).unwrap_err(), BetError::InvalidState);
    assert_eq!(game.start_round().unwrap_err(), DealError::InvalidState);

    let after = game.snapshot();
    assert_eq!(after.chips, before.chips);
    assert_eq!(after.bet, 10);
    assert_eq!(after.hands, before.hands);
    assert_eq!(after.phase, Phase::PlayerTurn);
}

#[test]
fn start_round_rejects_bet_above_balance() {
    use Rank::{Five, Nine, Six, Ten, Two};
    let game = start(GameOptions::default(), 150, &[Five, Nine, Six, Ten, Two]);

    game.hit().unwrap();
    game.stand().unwrap();
    assert!(game.chips() < 150);

    assert_eq!(game.start_round().unwrap_err(), DealError::InsufficientFunds);
    assert_eq!(game.phase(), Phase::Betting);
}

#[test]
fn refill_tops_up_to_the_cap() {
    let game = Game::new(GameOptions::default().with_starting_chips(0), 1);
    assert_eq!(game.refill_chips().unwrap(), 200);

    let game = Game::new(GameOptions::default().with_starting_chips(900), 1);
    assert_eq!(game.refill_chips().unwrap(), 1000);
    assert_eq!(game.refill_chips().unwrap_err(), RefillError::AtCap(1000));
    assert_eq!(game.chips(), 1000);

    let options = GameOptions::default()
        .with_starting_chips(10)
        .with_refill(50, 25);
    let game = Game::new(options, 1);
    assert_eq!(game.refill_chips().unwrap(), 35);
    assert_eq!(game.refill_chips().unwrap(), 50);
    assert_eq!(game.refill_chips().unwrap_err(), RefillError::AtCap(50));
}

#[test]
fn new_round_forfeits_an_abandoned_round() {
    use Rank::{Ace, Five, Nine, Six};
    let game = start(GameOptions::default(), 10, &[Five, Ace, Six, Nine]);
    game.take_insurance().unwrap();
    assert_eq!(game.chips(), 185);

    game.new_round();

    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.chips(), 185);
    assert!(game.hands().is_empty());
    assert_eq!(game.snapshot().locked, 0);
    assert!(game.last_result().is_none());
    assert_eq!(game.stats().rounds, 0);
}

#[test]
fn abandoning_after_a_split_bust_returns_nothing() {
    use Rank::{Eight, Five, King, Seven, Six, Ten};
    let options = GameOptions::default().with_starting_chips(100);
    let game = start(options, 10, &[Eight, Ten, Eight, Seven, Six, Five, King]);

    game.split().unwrap();
    game.hit().unwrap();
    let hands = game.hands();
    assert_eq!(hands[0].status(), HandStatus::Bust);
    assert_eq!(hands[0].value(), 24);
    assert_eq!(game.active_hand(), Some(1));
    assert_eq!(game.chips(), 80);

    game.new_round();

    assert_eq!(game.chips(), 80);
    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.stats().losses, 0);
}

#[test]
fn new_round_clears_the_last_result() {
    use Rank::{Ace, King, Nine, Seven};
    let game = start(GameOptions::default(), 10, &[Ace, Seven, King, Nine]);
    assert!(game.last_result().is_some());

    game.new_round();

    assert!(game.last_result().is_none());
    assert_eq!(game.chips(), 215);
    assert_eq!(game.stats().rounds, 1);
}

#[test]
fn dispatch_routes_intents() {
    use Rank::{Queen, Six, Ten};
    let game = Game::new(GameOptions::default(), 3);

    assert_eq!(
        game.dispatch(Intent::Hit).unwrap_err(),
        Error::Action(ActionError::InvalidState)
    );
    assert_eq!(
        game.dispatch(Intent::PlaceBet(0)).unwrap_err(),
        Error::Bet(BetError::ZeroBet)
    );

    game.stack_shoe(&[card(Ten), card(Six), card(Queen), card(Ten), card(Six)]);
    game.dispatch(Intent::PlaceBet(10)).unwrap();
    game.dispatch(Intent::StartRound).unwrap();
    game.dispatch(Intent::Stand).unwrap();

    assert_eq!(game.chips(), 210);
    assert_eq!(
        game.dispatch(Intent::Split).unwrap_err().to_string(),
        game.message()
    );
    game.dispatch(Intent::NewRound).unwrap();
    assert!(game.last_result().is_none());
}

#[test]
fn snapshot_conceals_the_hole_card() {
    use Rank::{Nine, Seven, Six, Ten};
    let game = start(GameOptions::default(), 10, &[Ten, Seven, Nine, Six, Ten]);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, Phase::PlayerTurn);
    assert!(snapshot.dealer.hole_hidden);
    assert_eq!(snapshot.dealer.cards[0], CardFace::Up(card(Seven)));
    assert_eq!(snapshot.dealer.cards[1], CardFace::Down);
    assert_eq!(snapshot.dealer.visible_value, 7);
    assert_eq!(snapshot.hands[0].value, 19);
    assert!(snapshot.hands[0].is_active);
    assert_eq!(snapshot.chips + snapshot.locked, 200);
    assert_eq!(
        snapshot.available_actions,
        vec![Action::Hit, Action::Stand, Action::DoubleDown, Action::Surrender]
    );

    game.stand().unwrap();
    let snapshot = game.snapshot();
    assert!(snapshot.hands.is_empty());
    assert!(snapshot.available_actions.is_empty());
    let result = snapshot.last_result.unwrap();
    assert_eq!(result.dealer_cards, vec![card(Seven), card(Six), card(Ten)]);
}

#[test]
fn finite_shoe_counts_down() {
    let options = GameOptions::default().with_shoe(ShoeKind::Decks(1));
    let game = Game::new(options, 11);
    assert_eq!(game.cards_remaining(), Some(52));

    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    let dealt = 52 - game.cards_remaining().unwrap();
    assert!(dealt >= 4);

    let infinite = Game::new(GameOptions::default(), 11);
    assert_eq!(infinite.cards_remaining(), None);
}

#[test]
fn same_seed_deals_the_same_rounds() {
    let play = |seed| {
        let game = Game::new(GameOptions::default(), seed);
        let mut results = Vec::new();
        for _ in 0..20 {
            game.place_bet(5).unwrap();
            game.start_round().unwrap();
            while game.phase() == Phase::PlayerTurn {
                game.stand().unwrap();
            }
            results.push(game.last_result().unwrap());
        }
        results
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn chips_are_conserved_across_random_rounds() {
    let game = Game::new(GameOptions::default().with_starting_chips(1000), 5);
    for _ in 0..200 {
        let before = game.chips();
        game.place_bet(10).unwrap();
        game.start_round().unwrap();
        while game.phase() == Phase::PlayerTurn {
            let snapshot = game.snapshot();
            assert_eq!(snapshot.chips + snapshot.locked, before);
            if snapshot.hands[0].value < 17 {
                game.hit().unwrap();
            } else {
                game.stand().unwrap();
            }
        }

        let result = game.last_result().unwrap();
        let payout = result.hands[0].payout;
        assert!([0, 10, 20, 25].contains(&payout));
        assert_eq!(game.chips(), before - 10 + payout);
        if result.hands[0].outcome != HandOutcome::Blackjack {
            assert!(result.dealer_bust || result.dealer_value >= 17);
        }

        if game.chips() < 10 {
            game.refill_chips().unwrap();
        }
    }
}
