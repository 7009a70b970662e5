//! Table rules and chip settings.

use crate::shoe::ShoeKind;

/// Conditions under which doubling down is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down allowed on any two cards.
    #[default]
    Any,
    /// Double down allowed only on 9 or 10.
    NineOrTen,
    /// Double down allowed only on 9 through 11.
    NineThrough11,
    /// Double down not allowed.
    None,
}

impl DoubleOption {
    /// Returns whether a hand with this total may double.
    #[must_use]
    pub fn allows(self, value: u8) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => value == 9 || value == 10,
            Self::NineThrough11 => (9..=11).contains(&value),
            Self::None => false,
        }
    }
}

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration for a [`Game`](crate::Game).
///
/// Use the builder methods to customize options:
///
/// ```
/// use bjround::{GameOptions, ShoeKind};
///
/// let options = GameOptions::default()
///     .with_shoe(ShoeKind::Decks(6))
///     .with_stand_on_soft_17(false)
///     .with_starting_chips(500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Card sampling model.
    pub shoe: ShoeKind,
    /// Fraction of a finite shoe dealt before it is reshuffled at the start
    /// of a round. 0 disables reshuffling.
    pub penetration: f64,
    /// Blackjack payout ratio (3:2 is 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Rounding mode for the half bet returned on surrender.
    pub rounding_surrender: RoundingMode,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Double down conditions.
    pub double: DoubleOption,
    /// Whether double down is allowed after a split.
    pub double_after_split: bool,
    /// Whether split aces receive only one card each.
    pub split_aces_receive_one_card: bool,
    /// Whether a hand reaching 21 stands without a stand action.
    pub auto_stand_on_21: bool,
    /// Whether surrender is allowed.
    pub surrender: bool,
    /// Whether insurance is offered against a dealer ace.
    pub insurance: bool,
    /// Chips the player starts with.
    pub starting_chips: usize,
    /// Refills never raise the balance above this.
    pub chip_cap: usize,
    /// Chips added by one refill.
    pub refill_amount: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shoe: ShoeKind::Infinite,
            penetration: 0.75,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            rounding_surrender: RoundingMode::Down,
            stand_on_soft_17: true,
            double: DoubleOption::Any,
            double_after_split: true,
            split_aces_receive_one_card: true,
            auto_stand_on_21: true,
            surrender: true,
            insurance: true,
            starting_chips: 200,
            chip_cap: 1000,
            refill_amount: 200,
        }
    }
}

impl GameOptions {
    /// Sets the card sampling model.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, ShoeKind};
    ///
    /// let options = GameOptions::default().with_shoe(ShoeKind::Decks(2));
    /// assert_eq!(options.shoe, ShoeKind::Decks(2));
    /// ```
    #[must_use]
    pub const fn with_shoe(mut self, shoe: ShoeKind) -> Self {
        self.shoe = shoe;
        self
    }

    /// Sets the shoe penetration.
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the rounding mode for surrender refunds.
    #[must_use]
    pub const fn with_rounding_surrender(mut self, mode: RoundingMode) -> Self {
        self.rounding_surrender = mode;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the double down conditions.
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Sets whether double down is allowed after a split.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether split aces receive only one card.
    #[must_use]
    pub const fn with_split_aces_receive_one_card(mut self, one_card: bool) -> Self {
        self.split_aces_receive_one_card = one_card;
        self
    }

    /// Sets whether a hand reaching 21 stands on its own.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_stand_on_21(false);
    /// assert!(!options.auto_stand_on_21);
    /// ```
    #[must_use]
    pub const fn with_auto_stand_on_21(mut self, auto_stand: bool) -> Self {
        self.auto_stand_on_21 = auto_stand;
        self
    }

    /// Sets whether surrender is allowed.
    #[must_use]
    pub const fn with_surrender(mut self, allowed: bool) -> Self {
        self.surrender = allowed;
        self
    }

    /// Sets whether insurance is offered.
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_starting_chips(50), 7);
    /// assert_eq!(game.chips(), 50);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the refill cap and increment.
    #[must_use]
    pub const fn with_refill(mut self, chip_cap: usize, refill_amount: usize) -> Self {
        self.chip_cap = chip_cap;
        self.refill_amount = refill_amount;
        self
    }
}
