use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// A side draws a third card only when its two-card value is at most this.
pub const THIRD_CARD_THRESHOLD: u8 = 5;

pub const NATURAL_EIGHT: u8 = 8;
pub const NATURAL_NINE: u8 = 9;

/// Banker's drawing tableau used when the Player has taken a third card.
///
/// Rows are the Banker's two-card value (0-7), columns the point value of the
/// Player's third card (0-9). Banker never reaches this table holding 8 or 9.
pub const BANKER_DRAW_TABLE: [[bool; 10]; 8] = [
    [true, true, true, true, true, true, true, true, true, true],
    [true, true, true, true, true, true, true, true, true, true],
    [true, true, true, true, true, true, true, true, true, true],
    [true, true, true, true, true, true, true, true, false, true],
    [false, false, true, true, true, true, true, true, false, false],
    [false, false, false, false, true, true, true, true, false, false],
    [false, false, false, false, false, false, true, true, false, false],
    [false, false, false, false, false, false, false, false, false, false],
];

/// Result of a round: the side holding the higher final value, or a tie.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Player,
    Banker,
    Tie,
}

impl Outcome {
    pub fn from_values(player: u8, banker: u8) -> Outcome {
        use std::cmp::Ordering;
        match player.cmp(&banker) {
            Ordering::Greater => Outcome::Player,
            Ordering::Less => Outcome::Banker,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Outcome::Player => "PLAYER",
            Outcome::Banker => "BANKER",
            Outcome::Tie => "TIE",
        };
        f.write_str(s)
    }
}

pub fn is_natural(value: u8) -> bool {
    value == NATURAL_EIGHT || value == NATURAL_NINE
}

/// A natural on either side ends the round after the first four cards.
pub fn either_natural(player_value: u8, banker_value: u8) -> bool {
    is_natural(player_value) || is_natural(banker_value)
}

pub fn player_draws(player_value: u8) -> bool {
    player_value <= THIRD_CARD_THRESHOLD
}

/// Decides whether the Banker takes a third card.
///
/// `banker_value` is the Banker's two-card value and `player_third` the
/// Player's third card, or `None` if the Player stood.
///
/// # Examples
///
/// ```
/// use baccarat_engine::cards::Rank;
/// use baccarat_engine::rules::banker_draws;
///
/// // Player stood: Banker draws on 0-5.
/// assert!(banker_draws(4, None));
/// assert!(!banker_draws(6, None));
///
/// // Banker on 3 stands only against a Player third card worth 8.
/// assert!(!banker_draws(3, Some(Rank::Eight)));
/// assert!(banker_draws(3, Some(Rank::King)));
/// ```
pub fn banker_draws(banker_value: u8, player_third: Option<Rank>) -> bool {
    match player_third {
        None => banker_value <= THIRD_CARD_THRESHOLD,
        Some(card) => BANKER_DRAW_TABLE
            .get(banker_value as usize)
            .map(|row| row[card.point_value() as usize])
            .unwrap_or(false),
    }
}
