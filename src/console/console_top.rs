//! Line-oriented debug console and command loop.
//!
//! Drives a `MatchState` from text commands so a match can be played, or a
//! scenario replayed, without a graphical front-end. Time only advances on
//! `tick`, which makes every session reproducible with a fixed seed.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{BoardCoords, Color, Side, Square};
use crate::input::action_event::{ActionEvent, ActionKind};
use crate::match_state::match_config::{CooldownSetting, MatchConfig};
use crate::match_state::match_state::MatchState;
use crate::utils::render_match_state::render_match_state;

pub fn run_stdio_loop(config: MatchConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(config);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    state: MatchState,
}

impl ConsoleState {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            state: MatchState::new(config),
        }
    }

    #[inline]
    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    /// Run one command line. Returns `Ok(true)` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        debug!(cmd, ?args, "console command");

        if cmd == "quit" || cmd == "exit" {
            return Ok(true);
        }

        match self.dispatch(cmd, &args) {
            Ok(text) => {
                if !text.is_empty() {
                    writeln!(out, "{}", text.trim_end())?;
                }
            }
            Err(err) => writeln!(out, "error: {}", err)?,
        }
        Ok(false)
    }

    fn dispatch(&mut self, cmd: &str, args: &[&str]) -> Result<String, ChessErrors> {
        match cmd {
            "ready" | "unready" => {
                let side = parse_side(args.first().copied())?;
                self.state.set_ready(side, cmd == "ready");
                Ok(String::new())
            }
            "cursor" => {
                let side = parse_side(args.first().copied())?;
                let square: Square = args
                    .get(1)
                    .ok_or(ChessErrors::MissingArgument("square"))?
                    .parse()?;
                self.state.set_cursor(side, BoardCoords::from_square(square));
                Ok(String::new())
            }
            "select" | "confirm" | "cancel" | "activate" => {
                let side = parse_side(args.first().copied())?;
                let kind: ActionKind = cmd.parse()?;
                self.state.submit(ActionEvent::new(side, kind));
                Ok(String::new())
            }
            "action" => {
                let side = args.first().ok_or(ChessErrors::MissingArgument("side"))?;
                let kind = args.get(1).ok_or(ChessErrors::MissingArgument("action"))?;
                self.state.submit(ActionEvent::from_tags(side, kind)?);
                Ok(String::new())
            }
            "tick" => {
                let ms = parse_number(args.first().copied(), "milliseconds")?;
                self.state.tick(Duration::from_millis(ms));
                let lines: Vec<String> = self
                    .state
                    .drain_events()
                    .iter()
                    .map(|event| format!("event {}", event))
                    .collect();
                Ok(lines.join("\n"))
            }
            "cooldown" => {
                let setting = match args.first().copied() {
                    None => return Ok(format!("cooldown {}", self.state.config().cooldown.seconds())),
                    Some("next") => self.state.cycle_cooldown(true)?,
                    Some("prev") => self.state.cycle_cooldown(false)?,
                    Some(secs) => {
                        let setting = CooldownSetting::from_seconds(parse_number(Some(secs), "seconds")?)?;
                        self.state.set_cooldown(setting)?;
                        setting
                    }
                };
                Ok(format!("cooldown {}", setting.seconds()))
            }
            "show" => {
                let perspective = match args.first().copied() {
                    None => Color::White,
                    Some(tag) => tag.parse::<Side>()?.color(),
                };
                Ok(render_match_state(&self.state, perspective))
            }
            "moves" => {
                let side = parse_side(args.first().copied())?;
                let moves: Vec<String> = self
                    .state
                    .legal_moves_for_selection(side)
                    .iter()
                    .map(|sq| sq.to_string())
                    .collect();
                Ok(format!("moves {}", moves.join(" ")).trim_end().to_string())
            }
            "reset" => {
                self.state.reset();
                Ok(String::new())
            }
            other => Err(ChessErrors::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_side(arg: Option<&str>) -> Result<Side, ChessErrors> {
    arg.ok_or(ChessErrors::MissingArgument("side"))?.parse()
}

fn parse_number(arg: Option<&str>, name: &'static str) -> Result<u64, ChessErrors> {
    let arg = arg.ok_or(ChessErrors::MissingArgument(name))?;
    arg.parse::<u64>()
        .map_err(|_| ChessErrors::InvalidNumber(arg.to_string()))
}
