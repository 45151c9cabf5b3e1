use std::error::Error;
use std::fmt;

/// Text that has to be entered into the command field to record a pit stop.
pub const PIT_TOKEN: &str = "1p";

/// TimerCommand contains all operator actions. Numeric payloads are kept as the entered text,
/// validation happens in the timer such that rejected input leaves the timer untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerCommand {
    Start,
    Stop,
    Reset,
    RecordPit,
    SetDuration(String),
    SetLaps(String),
    Status, // console mode only
    Quit,   // console mode only
}

/// CommandParseError is returned for console lines that do not match any command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandParseError {
    pub line: String,
}

impl fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Unknown command {:?} (expected start, stop, reset, pit, duration <s>, laps <n>, \
             status or quit)",
            self.line
        )
    }
}

impl Error for CommandParseError {}

/// parse_pit_token handles the command text field: the pit token records a pit stop, anything
/// else is ignored.
pub fn parse_pit_token(text: &str) -> Option<TimerCommand> {
    if text.trim() == PIT_TOKEN {
        Some(TimerCommand::RecordPit)
    } else {
        None
    }
}

/// parse_console_line converts a line entered in console mode into a command. Keywords are case
/// insensitive, empty lines yield None.
pub fn parse_console_line(line: &str) -> Result<Option<TimerCommand>, CommandParseError> {
    let mut tokens = line.split_whitespace();

    let keyword = match tokens.next() {
        Some(keyword) => keyword.to_lowercase(),
        None => return Ok(None),
    };
    let arg = tokens.next();
    let err = || CommandParseError {
        line: line.trim().to_owned(),
    };

    if tokens.next().is_some() {
        return Err(err());
    }

    let command = match (keyword.as_str(), arg) {
        ("start", None) => TimerCommand::Start,
        ("stop", None) => TimerCommand::Stop,
        ("reset", None) => TimerCommand::Reset,
        ("pit", None) | (PIT_TOKEN, None) => TimerCommand::RecordPit,
        ("status", None) => TimerCommand::Status,
        ("quit", None) | ("exit", None) => TimerCommand::Quit,
        ("duration", Some(val)) => TimerCommand::SetDuration(val.to_owned()),
        ("laps", Some(val)) => TimerCommand::SetLaps(val.to_owned()),
        _ => return Err(err()),
    };

    Ok(Some(command))
}
