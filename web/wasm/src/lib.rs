use bjround::{
    Action, Card, CardFace, DealerView, Game, GameOptions, HandOutcome, HandResult, HandStatus,
    HandView, Intent, Phase, RoundResult, ShoeKind, Snapshot, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Creates a table with the default rules. `decks` of 0 selects the
    /// infinite shoe.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, decks: u8, stand_on_soft_17: bool) -> Self {
        Self {
            game: Game::new(options(decks, stand_on_soft_17), u64::from(seed)),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        let options = self.game.options().clone();
        self.game = Game::new(options, u64::from(seed));
    }

    pub fn place_bet(&self, amount: u32) -> Result<JsValue, JsValue> {
        self.apply(Intent::PlaceBet(amount as usize))
    }

    pub fn start_round(&self) -> Result<JsValue, JsValue> {
        self.apply(Intent::StartRound)
    }

    pub fn hit(&self) -> Result<JsValue, JsValue> {
        self.apply(Intent::Hit)
    }

    pub fn stand(&self) -> Result<JsValue, JsValue> {
        self.apply(Intent::Stand)
    }

    pub fn double_down(&self) -> Result<JsValue, JsValue> {
        self.apply(Intent::DoubleDown)
    }

    pub fn split(&self) -> Result<JsValue, JsValue> {
        self.apply(Intent::Split)
    }

    pub fn surrender(&self) -> Result<JsValue, JsValue> {
        self.apply(Intent::Surrender)
    }

    pub fn take_insurance(&self) -> Result<JsValue, JsValue> {
        self.apply(Intent::TakeInsurance)
    }

    pub fn decline_insurance(&self) -> Result<JsValue, JsValue> {
        self.apply(Intent::DeclineInsurance)
    }

    pub fn refill_chips(&self) -> Result<JsValue, JsValue> {
        self.apply(Intent::RefillChips)
    }

    pub fn new_round(&self) -> Result<JsValue, JsValue> {
        self.apply(Intent::NewRound)
    }

    /// Returns the table as a plain JS object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.game.snapshot()))
    }
}

impl WasmGame {
    /// Rejected intents are not exceptions in the UI: the message in the
    /// returned snapshot carries the reason.
    fn apply(&self, intent: Intent) -> Result<JsValue, JsValue> {
        let _ = self.game.dispatch(intent);
        self.snapshot()
    }
}

fn options(decks: u8, stand_on_soft_17: bool) -> GameOptions {
    let shoe = if decks == 0 {
        ShoeKind::Infinite
    } else {
        ShoeKind::Decks(decks)
    };
    GameOptions::default()
        .with_shoe(shoe)
        .with_stand_on_soft_17(stand_on_soft_17)
}

#[derive(Serialize)]
struct JsSnapshot {
    phase: &'static str,
    chips: u32,
    bet: u32,
    locked: u32,
    dealer: JsDealer,
    hands: Vec<JsHand>,
    active_hand: Option<u32>,
    insurance_offered: bool,
    insurance_bet: u32,
    actions: Vec<&'static str>,
    stats: JsStats,
    message: String,
    last_result: Option<JsRoundResult>,
}

impl From<Snapshot> for JsSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            phase: phase_to_str(snapshot.phase),
            chips: snapshot.chips as u32,
            bet: snapshot.bet as u32,
            locked: snapshot.locked as u32,
            dealer: JsDealer::from(snapshot.dealer),
            hands: snapshot.hands.iter().map(JsHand::from).collect(),
            active_hand: snapshot.active_hand.map(|index| index as u32),
            insurance_offered: snapshot.insurance_offered,
            insurance_bet: snapshot.insurance_bet as u32,
            actions: snapshot
                .available_actions
                .into_iter()
                .map(action_to_str)
                .collect(),
            stats: JsStats {
                wins: snapshot.stats.wins,
                losses: snapshot.stats.losses,
                pushes: snapshot.stats.pushes,
                blackjacks: snapshot.stats.blackjacks,
                rounds: snapshot.stats.rounds,
            },
            message: snapshot.message,
            last_result: snapshot.last_result.map(JsRoundResult::from),
        }
    }
}

#[derive(Serialize)]
struct JsStats {
    wins: u32,
    losses: u32,
    pushes: u32,
    blackjacks: u32,
    rounds: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
}

#[derive(Serialize)]
struct JsHand {
    index: u32,
    cards: Vec<JsCard>,
    value: u8,
    is_soft: bool,
    status: &'static str,
    bet: u32,
    is_active: bool,
    is_blackjack: bool,
    doubled: bool,
    from_split: bool,
}

impl From<&HandView> for JsHand {
    fn from(hand: &HandView) -> Self {
        Self {
            index: hand.index as u32,
            cards: hand.cards.iter().copied().map(card_to_js).collect(),
            value: hand.value,
            is_soft: hand.is_soft,
            status: hand_status_to_str(hand.status),
            bet: hand.bet as u32,
            is_active: hand.is_active,
            is_blackjack: hand.is_blackjack,
            doubled: hand.doubled,
            from_split: hand.from_split,
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    /// `None` marks the face-down hole card.
    cards: Vec<Option<JsCard>>,
    visible_value: u8,
    hole_hidden: bool,
}

impl From<DealerView> for JsDealer {
    fn from(dealer: DealerView) -> Self {
        Self {
            cards: dealer
                .cards
                .into_iter()
                .map(|face| match face {
                    CardFace::Up(card) => Some(card_to_js(card)),
                    CardFace::Down => None,
                })
                .collect(),
            visible_value: dealer.visible_value,
            hole_hidden: dealer.hole_hidden,
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    hands: Vec<JsHandResult>,
    dealer_cards: Vec<JsCard>,
    dealer_value: u8,
    dealer_bust: bool,
    dealer_blackjack: bool,
    insurance_bet: u32,
    insurance_payout: u32,
    surrender_refund: u32,
    total_payout: u32,
    net: i32,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            hands: result.hands.into_iter().map(JsHandResult::from).collect(),
            dealer_cards: result.dealer_cards.into_iter().map(card_to_js).collect(),
            dealer_value: result.dealer_value,
            dealer_bust: result.dealer_bust,
            dealer_blackjack: result.dealer_blackjack,
            insurance_bet: result.insurance_bet as u32,
            insurance_payout: result.insurance_payout as u32,
            surrender_refund: result.surrender_refund as u32,
            total_payout: result.total_payout as u32,
            net: result.net as i32,
        }
    }
}

#[derive(Serialize)]
struct JsHandResult {
    hand_index: u32,
    cards: Vec<JsCard>,
    outcome: &'static str,
    bet: u32,
    payout: u32,
    player_value: u8,
    doubled: bool,
}

impl From<HandResult> for JsHandResult {
    fn from(result: HandResult) -> Self {
        Self {
            hand_index: result.hand_index as u32,
            cards: result.cards.into_iter().map(card_to_js).collect(),
            outcome: outcome_to_str(result.outcome),
            bet: result.bet as u32,
            payout: result.payout as u32,
            player_value: result.player_value,
            doubled: result.doubled,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
        value: card.value(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Betting => "Betting",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Settlement => "Settlement",
    }
}

fn action_to_str(action: Action) -> &'static str {
    match action {
        Action::Hit => "Hit",
        Action::Stand => "Stand",
        Action::DoubleDown => "DoubleDown",
        Action::Split => "Split",
        Action::Surrender => "Surrender",
        Action::Insurance => "Insurance",
    }
}

fn hand_status_to_str(status: HandStatus) -> &'static str {
    match status {
        HandStatus::Active => "Active",
        HandStatus::Stand => "Stand",
        HandStatus::Bust => "Bust",
        HandStatus::Blackjack => "Blackjack",
        HandStatus::Surrendered => "Surrendered",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Win => "Win",
        HandOutcome::Lose => "Lose",
        HandOutcome::Bust => "Bust",
        HandOutcome::Push => "Push",
        HandOutcome::Blackjack => "Blackjack",
        HandOutcome::Surrendered => "Surrendered",
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
