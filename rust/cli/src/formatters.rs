//! Hand, outcome and draw-count formatters for terminal display.
//!
//! Pure functions turning engine values into the lines shown during a session.
//!
//! ## Example
//!
//! ```rust
//! use baccarat_engine::cards::Rank;
//! use baccarat_engine::hand::Hand;
//! use baccarat_engine::rules::Outcome;
//! use baccarat_cli::formatters::{format_hand_line, format_winner};
//!
//! let hand: Hand = [Rank::Queen, Rank::Three].into_iter().collect();
//! assert_eq!(format_hand_line("Player", &hand), "Player Cards: Q,3 (3)");
//! assert_eq!(format_winner(Outcome::Tie), "It's a tie!");
//! ```

use std::collections::BTreeMap;

use baccarat_engine::cards::Rank;
use baccarat_engine::engine::Round;
use baccarat_engine::hand::Hand;
use baccarat_engine::rules::Outcome;
use baccarat_engine::shoe::SHOE_SIZE;

pub fn format_hand_line(label: &str, hand: &Hand) -> String {
    format!("{} Cards: {} ({})", label, hand, hand.value())
}

pub fn format_winner(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player => "Player wins!",
        Outcome::Banker => "Banker wins!",
        Outcome::Tie => "It's a tie!",
    }
}

/// The three lines describing a dealt round: both hands and the winner.
pub fn format_round(round: &Round) -> Vec<String> {
    vec![
        format_hand_line("Player", &round.player),
        format_hand_line("Banker", &round.banker),
        format_winner(round.outcome).to_string(),
    ]
}

pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Draw-count report: one `RANK: COUNT` line per rank followed by the shoe total.
///
/// ```rust
/// use baccarat_engine::engine::Engine;
/// use baccarat_cli::formatters::format_draw_counts;
///
/// let engine = Engine::new(Some(1));
/// let report = format_draw_counts(&engine.draw_counts());
/// assert!(report.starts_with("Drawn Card Counter:\nA: 0\n"));
/// assert!(report.ends_with("Total drawn: 0/416\n"));
/// ```
pub fn format_draw_counts(counts: &BTreeMap<Rank, u32>) -> String {
    let mut s = String::from("Drawn Card Counter:\n");
    let mut total: u32 = 0;
    for (rank, n) in counts {
        s.push_str(&format!("{}: {}\n", rank, n));
        total += n;
    }
    s.push_str(&format!("Total drawn: {}/{}\n", total, SHOE_SIZE));
    s
}
