//! Draw-count report command.
//!
//! Deals a number of rounds from a fresh shoe and prints how many times each
//! rank has been drawn since the shoe was last reset.

use crate::error::CliError;
use crate::formatters::format_draw_counts;
use baccarat_engine::engine::Engine;
use std::io::Write;

pub fn handle_counts_command(
    seed: Option<u64>,
    rounds: u32,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut eng = Engine::new(Some(seed));
    for _ in 0..rounds {
        eng.play_round();
    }
    writeln!(out, "counts: seed={} rounds={}", seed, rounds)?;
    write!(out, "{}", format_draw_counts(&eng.draw_counts()))?;
    writeln!(out, "Reshuffles: {}", eng.shoe().reshuffles())?;
    Ok(())
}
