use drawer_core::{Point, Position, Size};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Translation of an in-progress drag, measured from where it started.
    Drag(Point),
    /// Predicted final translation of a finished drag.
    DragEnd(Point),
    Resize(Size),
    Reposition(Position),
    Tick,
    ConfigReload,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    UnknownVerb(String),
    #[error("Missing argument '{0}'")]
    MissingArgument(&'static str),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error("Invalid position '{0}'")]
    InvalidPosition(String),
    #[error("Unexpected argument '{0}'")]
    TrailingArgument(String),
}

/// Parses one line of the control socket protocol, e.g. `drag 0 42.5`.
impl FromStr for AppEvent {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let event = match verb.as_str() {
            "drag" => AppEvent::Drag(Point::new(
                number(words.next(), "x")?,
                number(words.next(), "y")?,
            )),
            "end" => AppEvent::DragEnd(Point::new(
                number(words.next(), "x")?,
                number(words.next(), "y")?,
            )),
            "resize" => AppEvent::Resize(Size::new(
                number(words.next(), "width")?,
                number(words.next(), "height")?,
            )),
            "position" => {
                let word = words
                    .next()
                    .ok_or(CommandError::MissingArgument("position"))?;
                let position = word
                    .parse()
                    .map_err(|_| CommandError::InvalidPosition(word.to_string()))?;
                AppEvent::Reposition(position)
            }
            "reload" => AppEvent::ConfigReload,
            _ => return Err(CommandError::UnknownVerb(verb)),
        };

        match words.next() {
            Some(extra) => Err(CommandError::TrailingArgument(extra.to_string())),
            None => Ok(event),
        }
    }
}

fn number(word: Option<&str>, name: &'static str) -> Result<f64, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument(name))?;
    word.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| CommandError::InvalidNumber(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        let cases = vec![
            ("drag 0 25", AppEvent::Drag(Point::new(0.0, 25.0))),
            ("DRAG -3.5 12", AppEvent::Drag(Point::new(-3.5, 12.0))),
            ("end 0 -26", AppEvent::DragEnd(Point::new(0.0, -26.0))),
            ("  resize 390 844  ", AppEvent::Resize(Size::new(390.0, 844.0))),
            ("position left", AppEvent::Reposition(Position::Leading)),
            ("position Top", AppEvent::Reposition(Position::Top)),
            ("reload", AppEvent::ConfigReload),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<AppEvent>().unwrap(), expected, "{line}");
        }
    }

    #[test]
    fn test_command_errors() {
        let cases = vec![
            ("", CommandError::Empty),
            ("fling 1 2", CommandError::UnknownVerb("fling".to_string())),
            ("drag 1", CommandError::MissingArgument("y")),
            ("resize", CommandError::MissingArgument("width")),
            ("end one 2", CommandError::InvalidNumber("one".to_string())),
            ("drag NaN 2", CommandError::InvalidNumber("NaN".to_string())),
            ("position", CommandError::MissingArgument("position")),
            (
                "position middle",
                CommandError::InvalidPosition("middle".to_string()),
            ),
            ("drag 1 2 3", CommandError::TrailingArgument("3".to_string())),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<AppEvent>().unwrap_err(), expected, "{line:?}");
        }
    }
}
