//! Text command parsing.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::stack::ValueKind;

static PUSH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^push\s+(.+?)(?:\s+as\s+([a-z]+))?$").expect("PUSH_RE regex should be valid")
});
static SPEED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^speed\s+([+-]?\d{1,9})$").expect("SPEED_RE regex should be valid")
});
static KIND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:kind|type)\s+([a-z]+)$").expect("KIND_RE regex should be valid")
});

pub const HELP_TEXT: &str = "\
Commands:
  push <value> [as <kind>]  push a value (kind: integer, character, string)
  pop                       remove the top element
  peek                      highlight the top element
  clear                     empty the stack and the history
  speed <1-10>              set the animation speed
  kind <kind>               select the kind used by `push`
  theme                     toggle light/dark theme
  help                      show this message
  quit                      leave";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?} (type `help` for a list of commands)")]
    InvalidInput { input: String },
    #[error("unknown kind {kind:?}, expected integer, character or string")]
    InvalidKind { kind: String },
    #[error("user exit")]
    UserExit,
}

impl From<io::Error> for InputError {
    fn from(error: io::Error) -> Self {
        InputError::IOError {
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandInput {
    Push {
        value: String,
        kind: Option<ValueKind>,
    },
    Pop,
    Peek,
    Clear,
    Speed {
        level: i64,
    },
    SelectKind {
        kind: ValueKind,
    },
    ToggleTheme,
    Help,
    Quit,
}

fn parse_kind(kind: &str) -> Result<ValueKind, InputError> {
    kind.parse().map_err(|_| InputError::InvalidKind {
        kind: kind.to_string(),
    })
}

impl FromStr for CommandInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        match trimmed.to_lowercase().as_str() {
            "pop" => return Ok(CommandInput::Pop),
            "peek" => return Ok(CommandInput::Peek),
            "clear" => return Ok(CommandInput::Clear),
            "theme" => return Ok(CommandInput::ToggleTheme),
            "help" | "?" => return Ok(CommandInput::Help),
            "quit" | "exit" | "q" => return Ok(CommandInput::Quit),
            _ => {}
        }

        if let Some(caps) = PUSH_RE.captures(trimmed) {
            let kind = match caps.get(2) {
                Some(kind) => Some(parse_kind(kind.as_str())?),
                None => None,
            };
            return Ok(CommandInput::Push {
                value: caps[1].to_string(),
                kind,
            });
        }

        if let Some(caps) = SPEED_RE.captures(trimmed) {
            let level = caps[1].parse().map_err(|_| InputError::InvalidInput {
                input: input.to_string(),
            })?;
            return Ok(CommandInput::Speed { level });
        }

        if let Some(caps) = KIND_RE.captures(trimmed) {
            return Ok(CommandInput::SelectKind {
                kind: parse_kind(&caps[1])?,
            });
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Parse a `;`-separated list of commands, skipping empty entries.
pub fn parse_script(script: &str) -> Result<Vec<CommandInput>, InputError> {
    script
        .split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.parse::<CommandInput>())
        .collect()
}

/// Read one command from stdin. End of input counts as the user leaving.
pub fn read_command_line() -> Result<CommandInput, InputError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Err(InputError::UserExit);
    }
    input.parse()
}
