//! # Play Command
//!
//! Interactive baccarat session for a single player.
//!
//! The session is a small state machine with two states:
//!
//! - **Main menu**: `start` sits the player down at the table
//! - **Game**: an empty line deals a round; `TYPE-AMOUNT` (e.g. `PLAYER-100`)
//!   places a bet and deals the round immediately
//!
//! In both states `exit`, `menu`, `reset`, `counts`, `balance` and `help` are
//! available. End of input closes the session cleanly.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_draw_counts, format_money, format_round};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{SessionInput, parse_session_input};
use baccarat_engine::engine::Engine;
use baccarat_engine::game::{GameState, RoundSummary};
use baccarat_engine::payout::BetType;
use baccarat_engine::player::Player;
use std::io::{BufRead, Write};

const HELP_TEXT: &str = "Available commands:
  start            leave the main menu and start playing
  <enter>          deal a round
  TYPE-AMOUNT      bet on PLAYER, BANKER or TIE and deal (e.g. BANKER-100)
  balance          show balance and current bet
  counts           show how often each rank has been drawn
  reset            put every card back in the shoe
  menu             return to the main menu
  exit             quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    MainMenu,
    Game,
}

/// What the session loop does after handling a line.
#[derive(Debug, PartialEq, Eq)]
enum Transition {
    Stay,
    Enter(SessionState),
    Exit,
}

struct Session<'a> {
    game: GameState,
    deal_only: bool,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

/// Handle the play command: an interactive session read line by line from `stdin`.
///
/// # Arguments
///
/// * `config` - Resolved configuration (seed, starting balance, deal-only mode)
/// * `out` - Output stream for the session
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for commands and bets
///
/// # Returns
///
/// * `Ok(())` when the player exits or input ends
/// * `Err(CliError)` for an invalid starting balance or I/O errors
pub fn handle_play_command(
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if !config.starting_balance.is_finite() || config.starting_balance <= 0.0 {
        return Err(CliError::InvalidInput(
            "starting balance must be > 0".to_string(),
        ));
    }

    let game = GameState::new(
        Engine::new(config.seed),
        Player::new(config.starting_balance),
    );
    tracing::info!(
        seed = ?config.seed,
        balance = config.starting_balance,
        deal_only = config.deal_only,
        "session started"
    );

    let mut session = Session {
        game,
        deal_only: config.deal_only,
        out,
        err,
    };
    session.run(stdin)
}

impl Session<'_> {
    fn run(&mut self, stdin: &mut dyn BufRead) -> Result<(), CliError> {
        let mut state = SessionState::MainMenu;
        self.enter(state)?;

        loop {
            let Some(line) = read_stdin_line(stdin) else {
                break;
            };
            let input = parse_session_input(&line);
            let transition = match state {
                SessionState::MainMenu => self.main_menu(input)?,
                SessionState::Game => self.game_table(input)?,
            };
            match transition {
                Transition::Stay => {}
                Transition::Enter(next) => {
                    state = next;
                    self.enter(state)?;
                }
                Transition::Exit => {
                    writeln!(self.out, "Exiting the game...")?;
                    break;
                }
            }
        }

        writeln!(
            self.out,
            "Rounds played: {}  Final balance: {}",
            self.game.engine().rounds_played(),
            format_money(self.game.player().balance())
        )?;
        Ok(())
    }

    fn enter(&mut self, state: SessionState) -> Result<(), CliError> {
        match state {
            SessionState::MainMenu => {
                ui::write_banner(self.out, "Welcome to the Baccarat game!")?;
                writeln!(self.out, "Enter 'start' to play or 'exit' to quit:")?;
            }
            SessionState::Game => {
                writeln!(self.out, "Starting a game of Baccarat!")?;
                if self.deal_only {
                    writeln!(self.out, "Deal-only mode: press enter to deal cards...")?;
                } else {
                    writeln!(
                        self.out,
                        "Press enter to deal cards, or bet with TYPE-AMOUNT (e.g. PLAYER-100)."
                    )?;
                    writeln!(
                        self.out,
                        "Balance: {}",
                        format_money(self.game.player().balance())
                    )?;
                }
            }
        }
        Ok(())
    }

    fn main_menu(&mut self, input: SessionInput) -> Result<Transition, CliError> {
        match input {
            SessionInput::Start => Ok(Transition::Enter(SessionState::Game)),
            // Blank lines are ignored at the menu.
            SessionInput::Deal => Ok(Transition::Stay),
            SessionInput::Bet(..) => {
                ui::write_error(self.err, "Enter 'start' before placing a bet.")?;
                Ok(Transition::Stay)
            }
            other => self.general(other),
        }
    }

    fn game_table(&mut self, input: SessionInput) -> Result<Transition, CliError> {
        match input {
            SessionInput::Deal => {
                self.deal()?;
                Ok(Transition::Stay)
            }
            SessionInput::Bet(bet_type, amount) => {
                if self.deal_only {
                    ui::write_error(self.err, "Betting is disabled in deal-only mode.")?;
                    return Ok(Transition::Stay);
                }
                match self.game.place_bet(bet_type, amount) {
                    Ok(()) => {
                        writeln!(self.out, "Bet placed: {} {}", bet_type, format_money(amount))?;
                        self.deal()?;
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "bet rejected");
                        ui::write_error(self.err, &e.to_string())?;
                    }
                }
                Ok(Transition::Stay)
            }
            SessionInput::Start => {
                writeln!(self.out, "Already at the table.")?;
                Ok(Transition::Stay)
            }
            other => self.general(other),
        }
    }

    /// Commands that behave the same in every state.
    fn general(&mut self, input: SessionInput) -> Result<Transition, CliError> {
        match input {
            SessionInput::Exit => return Ok(Transition::Exit),
            SessionInput::Menu => return Ok(Transition::Enter(SessionState::MainMenu)),
            SessionInput::Reset => {
                self.game.engine_mut().reset_shoe();
                writeln!(self.out, "Shoe has been reset.")?;
            }
            SessionInput::Counts => {
                write!(
                    self.out,
                    "{}",
                    format_draw_counts(&self.game.engine().draw_counts())
                )?;
            }
            SessionInput::Balance => {
                let player = self.game.player();
                writeln!(self.out, "Balance: {}", format_money(player.balance()))?;
                if player.current_bet_type() != BetType::None {
                    writeln!(
                        self.out,
                        "Current bet: {} {}",
                        player.current_bet_type(),
                        format_money(player.current_bet_amount())
                    )?;
                }
            }
            SessionInput::Help => writeln!(self.out, "{}", HELP_TEXT)?,
            SessionInput::Invalid(msg) => ui::write_error(self.err, &msg)?,
            SessionInput::Start | SessionInput::Deal | SessionInput::Bet(..) => {}
        }
        Ok(Transition::Stay)
    }

    fn deal(&mut self) -> Result<(), CliError> {
        let summary = self.game.play();
        if summary.round.reshuffled {
            writeln!(
                self.out,
                "All cards have been drawn from the shoe. Resetting the shoe..."
            )?;
        }
        for line in format_round(&summary.round) {
            writeln!(self.out, "{}", line)?;
        }
        if !self.deal_only {
            self.report_settlement(&summary)?;
        }
        Ok(())
    }

    fn report_settlement(&mut self, summary: &RoundSummary) -> Result<(), CliError> {
        if summary.bet_type == BetType::None {
            writeln!(self.out, "No bet placed.")?;
            return Ok(());
        }
        if summary.payout > 0.0 {
            writeln!(self.out, "Bet won! Payout: {}", format_money(summary.payout))?;
        } else {
            writeln!(self.out, "Bet lost. No payout.")?;
        }
        writeln!(self.out, "Balance: {}", format_money(summary.balance))?;
        Ok(())
    }
}
