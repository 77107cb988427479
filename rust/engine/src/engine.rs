use std::collections::BTreeMap;

use serde::Serialize;

use crate::cards::Rank;
use crate::hand::Hand;
use crate::rules::{banker_draws, either_natural, player_draws, Outcome};
use crate::shoe::{CardSource, Shoe};

/// Everything that happened in one deal.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Round {
    /// Winning side, or a tie
    pub outcome: Outcome,
    /// Player cards in the order they were dealt
    pub player: Hand,
    /// Banker cards in the order they were dealt
    pub banker: Hand,
    /// Whether the shoe ran out and was reset while dealing this round
    pub reshuffled: bool,
}

impl Round {
    pub fn cards_dealt(&self) -> usize {
        self.player.len() + self.banker.len()
    }
}

/// Deals one complete baccarat round from `source`.
///
/// Two cards go to the Player and two to the Banker. A natural 8 or 9 on either
/// side stops the deal. Otherwise the Player draws on 0-5, and the Banker
/// follows the drawing tableau using only two-card values.
///
/// # Examples
///
/// ```
/// use baccarat_engine::engine::deal_round;
/// use baccarat_engine::shoe::Shoe;
///
/// let mut shoe = Shoe::new_with_seed(3);
/// let round = deal_round(&mut shoe);
/// assert!((4..=6).contains(&round.cards_dealt()));
/// assert_eq!(shoe.total_drawn() as usize, round.cards_dealt());
/// ```
pub fn deal_round<S: CardSource + ?Sized>(source: &mut S) -> Round {
    let reshuffles_before = source.reshuffles();
    let mut player = Hand::new();
    let mut banker = Hand::new();

    player.push(source.draw());
    player.push(source.draw());
    banker.push(source.draw());
    banker.push(source.draw());

    if !either_natural(player.value(), banker.value()) {
        let banker_two_card = banker.value();

        let mut player_third: Option<Rank> = None;
        if player_draws(player.value()) {
            let card = source.draw();
            player.push(card);
            player_third = Some(card);
        }

        if banker_draws(banker_two_card, player_third) {
            banker.push(source.draw());
        }
    }

    let outcome = Outcome::from_values(player.value(), banker.value());
    tracing::debug!(
        %outcome,
        player = %player,
        banker = %banker,
        player_value = player.value(),
        banker_value = banker.value(),
        "round resolved"
    );

    Round {
        outcome,
        player,
        banker,
        reshuffled: source.reshuffles() != reshuffles_before,
    }
}

/// Card-dealing engine: owns the shoe and resolves rounds from it.
///
/// # Examples
///
/// ```
/// use baccarat_engine::engine::Engine;
///
/// let mut engine = Engine::new(Some(12345));
/// let round = engine.play_round();
/// let drawn: u32 = engine.draw_counts().values().sum();
/// assert_eq!(drawn as usize, round.cards_dealt());
///
/// engine.reset_shoe();
/// assert!(engine.draw_counts().values().all(|&n| n == 0));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    shoe: Shoe,
    rounds_played: u64,
}

impl Engine {
    /// Builds an engine with a seeded shoe, or an entropy-seeded one when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let shoe = match seed {
            Some(s) => Shoe::new_with_seed(s),
            None => Shoe::new(),
        };
        Self::with_shoe(shoe)
    }

    pub fn with_shoe(shoe: Shoe) -> Self {
        Self {
            shoe,
            rounds_played: 0,
        }
    }

    pub fn play_round(&mut self) -> Round {
        self.rounds_played += 1;
        deal_round(&mut self.shoe)
    }

    pub fn reset_shoe(&mut self) {
        self.shoe.reset();
    }

    pub fn draw_counts(&self) -> BTreeMap<Rank, u32> {
        self.shoe.drawn_counts()
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(None)
    }
}
