use core::str::FromStr;

use blasting_core::{Side, TileIndex};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  r <index>  - reveal the tile at <index> (row * size + column)
  f <index>  - toggle the flag on the tile at <index>
  m          - show or hide the mines
  n          - start a new game
  s <size>   - board size for the next game
  h/help     - show this help
  q          - quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(TileIndex),
    ToggleMark(TileIndex),
    ToggleMines,
    Reset,
    Resize(Side),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'. Type 'h' for help.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

fn number<T: FromStr>(arg: Option<&str>, usage: &'static str) -> Result<T, ParseError> {
    let arg = arg.ok_or(ParseError::Usage(usage))?;
    arg.parse()
        .map_err(|_| ParseError::InvalidNumber(arg.to_string()))
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(ParseError::Empty)?.to_lowercase();

        let command = match name.as_str() {
            "r" | "reveal" => Self::Reveal(number(parts.next(), "r <index>")?),
            "f" | "flag" => Self::ToggleMark(number(parts.next(), "f <index>")?),
            "m" | "mines" => Self::ToggleMines,
            "n" | "new" | "reset" => Self::Reset,
            "s" | "size" => Self::Resize(number(parts.next(), "s <size>")?),
            "h" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return Err(ParseError::Unknown(name)),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!("r 4".parse(), Ok(Command::Reveal(4)));
        assert_eq!("  FLAG 12 ".parse(), Ok(Command::ToggleMark(12)));
        assert_eq!("s 10".parse(), Ok(Command::Resize(10)));
        assert_eq!("n".parse(), Ok(Command::Reset));
        assert_eq!("m".parse(), Ok(Command::ToggleMines));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!("r".parse::<Command>(), Err(ParseError::Usage("r <index>")));
        assert_eq!(
            "s 300".parse::<Command>(),
            Err(ParseError::InvalidNumber("300".into()))
        );
        assert_eq!(
            "x 1".parse::<Command>(),
            Err(ParseError::Unknown("x".into()))
        );
    }
}
