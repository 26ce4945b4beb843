//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go programs. This
//! module implements the board-keeping subset of GTP version 2 on top of the
//! rules core, so the core can be driven from a GUI or a test harness.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start an empty board of the given size
//! - `clear_board` - Reset the board to empty
//! - `play <color> <vertex>` - Play a move (`pass` leaves the board as is)
//! - `undo` - Take back the last `play`
//! - `showboard` - Print the board
//! - `final_score` - Simple area score, no komi
//!
//! ## Example
//!
//! ```
//! use gorules::gtp::GtpEngine;
//!
//! let mut engine = GtpEngine::new(9).unwrap();
//! let mut out = Vec::new();
//! engine.run("play b D4\nfinal_score\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("= B+81"));
//! ```

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::{Board, Color};
use crate::error::BoardError;
use crate::point::{check_vertex_size, parse_vertex};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "final_score",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "undo",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    /// Boards after each accepted `play`; the last entry is current.
    history: Vec<Board>,
}

impl GtpEngine {
    /// Create an engine holding an empty board of `size`.
    ///
    /// Fails for boards wider than vertex letters can address.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        check_vertex_size(size)?;
        Ok(Self {
            history: vec![Board::new(size)],
        })
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        // history is never emptied: undo keeps the first entry
        &self.history[self.history.len() - 1]
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            // Parse command and arguments
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            debug!(%command, ?args, "gtp command");
            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    fn parse_color(s: &str) -> Option<Color> {
        match s.to_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<i64>() else {
                    return (false, "invalid size".to_string());
                };
                match Board::try_new(size) {
                    Ok(board) if check_vertex_size(board.size()).is_ok() => {
                        self.history = vec![board];
                        (true, String::new())
                    }
                    Ok(_) => (false, "unacceptable size".to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "clear_board" => {
                let size = self.board().size();
                self.history = vec![Board::new(size)];
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = Self::parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };

                if args[1].eq_ignore_ascii_case("pass") {
                    let board = self.board().clone();
                    self.history.push(board);
                    return (true, String::new());
                }

                let board = self.board();
                let result = parse_vertex(args[1], board.size())
                    .and_then(|p| board.play(color, p));
                match result {
                    Ok(next) => {
                        self.history.push(next);
                        (true, String::new())
                    }
                    Err(e) => (false, format!("illegal move: {e}")),
                }
            }

            "undo" => {
                if self.history.len() > 1 {
                    self.history.pop();
                    (true, String::new())
                } else {
                    (false, "cannot undo".to_string())
                }
            }

            "showboard" => (true, format!("\n{}", self.board())),

            "final_score" => (true, self.board().area_score().to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
