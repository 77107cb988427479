use crate::errors::GameError;
use crate::payout::BetType;

/// Balance a new player sits down with.
pub const STARTING_BALANCE: f64 = 5000.0;

/// The single player at the table: a balance and the bet on the current round.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    balance: f64,
    bet_type: BetType,
    bet_amount: f64,
}

impl Player {
    pub fn new(balance: f64) -> Self {
        Self {
            balance,
            bet_type: BetType::None,
            bet_amount: 0.0,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Places a bet and takes the stake from the balance.
    ///
    /// Rejected bets leave the balance and any current bet unchanged.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoBetType`] for [`BetType::None`]
    /// - [`GameError::InvalidBetAmount`] for zero, negative or non-finite amounts
    /// - [`GameError::InsufficientFunds`] when the amount exceeds the current balance
    ///
    /// # Examples
    ///
    /// ```
    /// use baccarat_engine::errors::GameError;
    /// use baccarat_engine::payout::BetType;
    /// use baccarat_engine::player::Player;
    ///
    /// let mut p = Player::default();
    /// p.place_bet(BetType::Banker, 250.0).unwrap();
    /// assert_eq!(p.balance(), 4750.0);
    ///
    /// let err = p.place_bet(BetType::Tie, 10_000.0).unwrap_err();
    /// assert!(matches!(err, GameError::InsufficientFunds { .. }));
    /// assert_eq!(p.current_bet_type(), BetType::Banker);
    ///
    /// // Betting again before the deal swaps the stake.
    /// p.place_bet(BetType::Player, 100.0).unwrap();
    /// assert_eq!(p.balance(), 4900.0);
    /// assert_eq!(p.current_bet_amount(), 100.0);
    /// ```
    pub fn place_bet(&mut self, bet_type: BetType, amount: f64) -> Result<(), GameError> {
        if bet_type == BetType::None {
            return Err(GameError::NoBetType);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(GameError::InvalidBetAmount { amount });
        }
        if amount > self.balance {
            return Err(GameError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }
        // A bet placed before the deal replaces the earlier one; its stake comes back.
        self.balance += self.bet_amount;
        self.bet_type = bet_type;
        self.bet_amount = amount;
        self.balance -= amount;
        tracing::debug!(%bet_type, amount, balance = self.balance, "bet placed");
        Ok(())
    }

    pub fn current_bet_type(&self) -> BetType {
        self.bet_type
    }

    pub fn current_bet_amount(&self) -> f64 {
        self.bet_amount
    }

    pub fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Forgets the current bet without touching the balance.
    pub fn clear_bet(&mut self) {
        self.bet_type = BetType::None;
        self.bet_amount = 0.0;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(STARTING_BALANCE)
    }
}
