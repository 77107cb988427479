//! # baccarat-engine: Baccarat Card Shoe and Hand Resolution
//!
//! Simulates the dealing and payout rules of Punto Banco baccarat for a single
//! player. Cards come from an eight-deck shoe that tracks how often each rank
//! has been drawn, rounds follow the fixed natural and third-card rules, and
//! bets are settled against the player's balance.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card ranks and their baccarat point values
//! - [`shoe`] - Eight-deck shoe with per-rank draw tracking and seeded ChaCha20 RNG
//! - [`hand`] - Hand representation and value calculation
//! - [`rules`] - Natural hands, third-card rules and round outcome
//! - [`engine`] - Round dealing on top of the shoe
//! - [`payout`] - Bet types and payout computation
//! - [`player`] - Player balance and bet placement
//! - [`game`] - Round dealing combined with bet settlement
//! - [`errors`] - Error types for bet validation
//!
//! ## Quick Start
//!
//! ```rust
//! use baccarat_engine::engine::Engine;
//! use baccarat_engine::payout::{settle, BetType};
//!
//! let mut engine = Engine::new(Some(42));
//! let round = engine.play_round();
//! println!("Player: {} ({})", round.player, round.player.value());
//! println!("Banker: {} ({})", round.banker, round.banker.value());
//!
//! let winnings = settle(round.outcome, BetType::Banker, 100.0);
//! assert!(winnings == 0.0 || winnings == 195.0);
//! ```
//!
//! ## Deterministic Dealing
//!
//! A seeded shoe deals the same cards every time, including after resets:
//!
//! ```rust
//! use baccarat_engine::engine::Engine;
//!
//! let mut a = Engine::new(Some(7));
//! let mut b = Engine::new(Some(7));
//! assert_eq!(a.play_round(), b.play_round());
//! ```

pub mod cards;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod payout;
pub mod player;
pub mod rules;
pub mod shoe;
