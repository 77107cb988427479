use serde::{Deserialize, Serialize};

/// Represents one of the 13 card ranks in a standard deck.
/// Suits play no part in baccarat scoring, so a card is fully described by its rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1 point)
    Ace,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10 (0 points)
    Ten,
    /// Jack (0 points)
    Jack,
    /// Queen (0 points)
    Queen,
    /// King (0 points)
    King,
}

/// Number of distinct ranks in a deck.
pub const NUM_RANKS: usize = 13;

const POINT_VALUES: [u8; NUM_RANKS] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0, 0, 0];

const SYMBOLS: [&str; NUM_RANKS] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

impl Rank {
    /// Position of the rank in `A, 2, ..., 10, J, Q, K` order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Rank> {
        all_ranks().get(i).copied()
    }

    /// Baccarat point value: ace counts one, tens and faces count zero.
    ///
    /// ```
    /// use baccarat_engine::cards::Rank;
    ///
    /// assert_eq!(Rank::Ace.point_value(), 1);
    /// assert_eq!(Rank::Seven.point_value(), 7);
    /// assert_eq!(Rank::King.point_value(), 0);
    /// ```
    pub fn point_value(self) -> u8 {
        POINT_VALUES[self.index()]
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self.index()]
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

pub fn all_ranks() -> [Rank; NUM_RANKS] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}
