use serde::{Deserialize, Serialize};

use crate::cards::Rank;

const HAND_VALUE_MODULO: u8 = 10;

/// Cards dealt to one side of the table (Player or Banker).
///
/// The value is kept up to date as cards are added and is always the last digit
/// of the point total.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "HandCards")]
pub struct Hand {
    cards: Vec<Rank>,
    value: u8,
}

/// Wire form read back into a [`Hand`]. Any serialized `value` is ignored and
/// recomputed from the cards.
#[derive(Deserialize)]
struct HandCards {
    cards: Vec<Rank>,
}

impl From<HandCards> for Hand {
    fn from(wire: HandCards) -> Self {
        wire.cards.into_iter().collect()
    }
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(3),
            value: 0,
        }
    }

    pub fn push(&mut self, rank: Rank) {
        self.cards.push(rank);
        self.value = (self.value + rank.point_value()) % HAND_VALUE_MODULO;
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True for a two-card hand worth 8 or 9.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && crate::rules::is_natural(self.value)
    }

    pub fn third_card(&self) -> Option<Rank> {
        self.cards.get(2).copied()
    }
}

impl FromIterator<Rank> for Hand {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut hand = Hand::new();
        for r in iter {
            hand.push(r);
        }
        hand
    }
}

/// Formats as comma-separated symbols, e.g. `Q,3`.
impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, r) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", r)?;
        }
        Ok(())
    }
}

/// Baccarat value of a set of cards: the point total modulo 10.
///
/// ```
/// use baccarat_engine::cards::Rank;
/// use baccarat_engine::hand::hand_value;
///
/// assert_eq!(hand_value(&[Rank::Seven, Rank::Six]), 3);
/// assert_eq!(hand_value(&[Rank::King, Rank::Nine]), 9);
/// ```
pub fn hand_value(cards: &[Rank]) -> u8 {
    let total: u32 = cards.iter().map(|r| r.point_value() as u32).sum();
    (total % HAND_VALUE_MODULO as u32) as u8
}
