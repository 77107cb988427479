//! Deal command handler for dealing rounds without a player at the table.
//!
//! Deals one or more rounds from a fresh shoe and prints the cards and winner
//! of each, or one JSON object per round with `--json`. The seed is always
//! printed in text mode so a run can be reproduced.

use crate::error::CliError;
use crate::formatters::format_round;
use baccarat_engine::engine::Engine;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `rounds` - Number of rounds to deal (must be >= 1)
/// * `json` - Emit JSON lines instead of text
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    rounds: u32,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut eng = Engine::new(Some(seed));

    if !json {
        writeln!(out, "deal: seed={} rounds={}", seed, rounds)?;
    }
    for i in 1..=rounds {
        let round = eng.play_round();
        if json {
            writeln!(out, "{}", serde_json::to_string(&round)?)?;
            continue;
        }
        writeln!(out, "Round {}", i)?;
        if round.reshuffled {
            writeln!(out, "Shoe exhausted, reshuffled.")?;
        }
        for line in format_round(&round) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
