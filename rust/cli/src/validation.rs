//! Input parsing and validation for the interactive session.
//!
//! Every line typed during `play` is turned into a [`SessionInput`]. Bets use
//! the `TYPE-AMOUNT` form, e.g. `PLAYER-100` or `tie-12.5`.

use baccarat_engine::errors::GameError;
use baccarat_engine::payout::BetType;

/// One parsed line of session input.
#[derive(Debug, PartialEq)]
pub enum SessionInput {
    /// Empty line: deal the next round
    Deal,
    /// Leave the main menu and sit down at the table
    Start,
    /// Quit the session (`exit`, `quit` or `q`)
    Exit,
    /// Return to the main menu
    Menu,
    /// Put every card back in the shoe
    Reset,
    /// Show the per-rank draw counts
    Counts,
    /// Show the balance and current bet
    Balance,
    Help,
    /// Place a bet and deal the round
    Bet(BetType, f64),
    /// Unusable input with a message for the user
    Invalid(String),
}

/// Parse a session line into a command or a bet.
///
/// # Example
///
/// ```rust
/// # use baccarat_cli::validation::{parse_session_input, SessionInput};
/// use baccarat_engine::payout::BetType;
///
/// assert_eq!(parse_session_input(""), SessionInput::Deal);
/// assert_eq!(parse_session_input("RESET"), SessionInput::Reset);
/// assert_eq!(
///     parse_session_input("banker-250"),
///     SessionInput::Bet(BetType::Banker, 250.0)
/// );
///
/// match parse_session_input("dragon-5") {
///     SessionInput::Invalid(msg) => assert!(msg.contains("Unknown bet type")),
///     other => panic!("expected Invalid, got {:?}", other),
/// }
/// ```
pub fn parse_session_input(input: &str) -> SessionInput {
    let input = input.trim();
    if input.is_empty() {
        return SessionInput::Deal;
    }

    match input.to_lowercase().as_str() {
        "start" => SessionInput::Start,
        "exit" | "quit" | "q" => SessionInput::Exit,
        "menu" => SessionInput::Menu,
        "reset" => SessionInput::Reset,
        "counts" => SessionInput::Counts,
        "balance" => SessionInput::Balance,
        "help" | "h" => SessionInput::Help,
        _ if input.contains('-') => match parse_bet(input) {
            Ok((bet_type, amount)) => SessionInput::Bet(bet_type, amount),
            Err(e) => SessionInput::Invalid(e.to_string()),
        },
        _ => SessionInput::Invalid(
            "Invalid command. Type 'help' for available commands.".to_string(),
        ),
    }
}

/// Parse a `TYPE-AMOUNT` bet.
///
/// The type is `PLAYER`, `BANKER` or `TIE` in any case. The amount must be a
/// positive finite number. Whether the balance covers it is checked when the
/// bet is placed.
///
/// # Errors
///
/// - [`GameError::MalformedBet`] when the `-` separator or a numeric amount is missing
/// - [`GameError::UnknownBetType`] for an unrecognised type token
/// - [`GameError::InvalidBetAmount`] for zero, negative or non-finite amounts
///
/// # Example
///
/// ```rust
/// # use baccarat_cli::validation::parse_bet;
/// use baccarat_engine::errors::GameError;
/// use baccarat_engine::payout::BetType;
///
/// assert_eq!(parse_bet("TIE-10"), Ok((BetType::Tie, 10.0)));
/// assert!(matches!(parse_bet("PLAYER--5"), Err(GameError::InvalidBetAmount { .. })));
/// assert!(matches!(parse_bet("PLAYER-abc"), Err(GameError::MalformedBet(_))));
/// ```
pub fn parse_bet(input: &str) -> Result<(BetType, f64), GameError> {
    let input = input.trim();
    let (kind, amount) = input
        .split_once('-')
        .ok_or_else(|| GameError::MalformedBet(input.to_string()))?;

    let bet_type: BetType = kind.parse()?;
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| GameError::MalformedBet(input.to_string()))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(GameError::InvalidBetAmount { amount });
    }
    Ok((bet_type, amount))
}
