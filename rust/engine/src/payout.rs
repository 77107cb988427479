use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::rules::Outcome;

/// Winnings per unit staked on a Player win (1:1).
pub const PAYOUT_PLAYER: f64 = 1.0;
/// Winnings per unit staked on a Banker win, before commission (1:1).
pub const PAYOUT_BANKER: f64 = 1.0;
/// Commission taken from Banker winnings.
pub const BANKER_COMMISSION: f64 = 0.05;
/// Winnings per unit staked on a Tie (8:1).
pub const PAYOUT_TIE: f64 = 8.0;

/// Side a wager is placed on. `None` means no bet this round.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetType {
    Player,
    Banker,
    Tie,
    #[default]
    None,
}

impl BetType {
    pub fn matches(self, outcome: Outcome) -> bool {
        matches!(
            (self, outcome),
            (BetType::Player, Outcome::Player)
                | (BetType::Banker, Outcome::Banker)
                | (BetType::Tie, Outcome::Tie)
        )
    }
}

impl std::fmt::Display for BetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BetType::Player => "PLAYER",
            BetType::Banker => "BANKER",
            BetType::Tie => "TIE",
            BetType::None => "NONE",
        };
        f.write_str(s)
    }
}

/// Parses `PLAYER`, `BANKER` or `TIE` (or `P`, `B`, `T`), ignoring case.
impl FromStr for BetType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PLAYER" | "P" => Ok(BetType::Player),
            "BANKER" | "B" => Ok(BetType::Banker),
            "TIE" | "T" => Ok(BetType::Tie),
            _ => Err(GameError::UnknownBetType(s.trim().to_string())),
        }
    }
}

/// Computes what a bet returns to the player's balance for a given outcome.
///
/// The stake is taken from the balance when the bet is placed, so a winning bet
/// returns the stake plus winnings and a losing bet (or no bet) returns nothing.
///
/// # Examples
///
/// ```
/// use baccarat_engine::payout::{settle, BetType};
/// use baccarat_engine::rules::Outcome;
///
/// assert_eq!(settle(Outcome::Player, BetType::Player, 100.0), 200.0);
/// assert_eq!(settle(Outcome::Tie, BetType::Tie, 100.0), 900.0);
/// assert_eq!(settle(Outcome::Banker, BetType::Player, 100.0), 0.0);
/// assert_eq!(settle(Outcome::Tie, BetType::None, 100.0), 0.0);
/// ```
pub fn settle(outcome: Outcome, bet_type: BetType, amount: f64) -> f64 {
    // `amount` was validated by `Player::place_bet`; only the winnings are computed here.
    if !bet_type.matches(outcome) {
        return 0.0;
    }
    match outcome {
        Outcome::Player => amount * (PAYOUT_PLAYER + 1.0),
        Outcome::Banker => amount * (PAYOUT_BANKER - BANKER_COMMISSION + 1.0),
        Outcome::Tie => amount * (PAYOUT_TIE + 1.0),
    }
}
