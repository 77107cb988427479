use serde::Serialize;

use crate::engine::{Engine, Round};
use crate::errors::GameError;
use crate::payout::{settle, BetType};
use crate::player::Player;

/// Result of one round after the player's bet has been settled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub round: Round,
    /// Bet that was riding on the round (`None` if the player sat out)
    pub bet_type: BetType,
    pub bet_amount: f64,
    /// Amount credited back to the balance (stake plus winnings, or zero)
    pub payout: f64,
    /// Balance after the payout
    pub balance: f64,
}

/// A table with one player: deals rounds and settles the player's bets.
#[derive(Debug, Clone)]
pub struct GameState {
    engine: Engine,
    player: Player,
}

impl GameState {
    pub fn new(engine: Engine, player: Player) -> Self {
        Self { engine, player }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn place_bet(&mut self, bet_type: BetType, amount: f64) -> Result<(), GameError> {
        self.player.place_bet(bet_type, amount)
    }

    /// Deals a round, pays out the current bet and clears it for the next round.
    ///
    /// # Examples
    ///
    /// ```
    /// use baccarat_engine::engine::Engine;
    /// use baccarat_engine::game::GameState;
    /// use baccarat_engine::payout::BetType;
    /// use baccarat_engine::player::Player;
    ///
    /// let mut game = GameState::new(Engine::new(Some(8)), Player::default());
    /// game.place_bet(BetType::Player, 100.0).unwrap();
    /// let summary = game.play();
    /// assert_eq!(summary.balance, 4900.0 + summary.payout);
    /// assert_eq!(game.player().current_bet_type(), BetType::None);
    /// ```
    pub fn play(&mut self) -> RoundSummary {
        let round = self.engine.play_round();
        let bet_type = self.player.current_bet_type();
        let bet_amount = self.player.current_bet_amount();
        let payout = settle(round.outcome, bet_type, bet_amount);
        if payout > 0.0 {
            self.player.credit(payout);
        }
        self.player.clear_bet();
        tracing::debug!(
            outcome = %round.outcome,
            %bet_type,
            bet_amount,
            payout,
            balance = self.player.balance(),
            "round settled"
        );
        RoundSummary {
            round,
            bet_type,
            bet_amount,
            payout,
            balance: self.player.balance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_bet_is_not_settled() {
        let mut game = GameState::new(Engine::new(Some(6)), Player::new(10.0));
        assert!(game.place_bet(BetType::Tie, 20.0).is_err());
        let summary = game.play();
        assert_eq!(summary.bet_type, BetType::None);
        assert_eq!(summary.payout, 0.0);
        assert_eq!(summary.balance, 10.0);
    }

    #[test]
    fn summary_balance_matches_player() {
        let mut game = GameState::new(Engine::new(Some(14)), Player::default());
        game.place_bet(BetType::Banker, 100.0).unwrap();
        let summary = game.play();
        assert_eq!(summary.balance, game.player().balance());
        assert_eq!(game.player().current_bet_amount(), 0.0);
        assert_eq!(game.engine().rounds_played(), 1);
    }
}
