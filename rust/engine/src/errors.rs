use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, must be greater than zero")]
    InvalidBetAmount { amount: f64 },
    #[error("Insufficient balance to place the bet: requested {requested:.2}, balance {balance:.2}")]
    InsufficientFunds { requested: f64, balance: f64 },
    #[error("A bet must name PLAYER, BANKER or TIE")]
    NoBetType,
    #[error("Unknown bet type '{0}', expected PLAYER, BANKER or TIE")]
    UnknownBetType(String),
    #[error("Malformed bet '{0}', expected TYPE-AMOUNT (e.g. PLAYER-100)")]
    MalformedBet(String),
}
