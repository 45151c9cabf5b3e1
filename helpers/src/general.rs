use std::error::Error;
use std::fmt;

/// InputValueError is used if some operator input does not fulfill the posed requirements, e.g.,
/// a race duration that is not a positive integer.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValueError {
    /// The text could not be parsed as a number of the expected kind.
    Malformed(String),
    /// The race duration must be strictly positive.
    NonPositiveDuration(i64),
    /// The race duration must fit into a signed 64 bit number of seconds.
    DurationTooLong(u64),
    /// The number of completed laps must be non-negative and finite.
    InvalidLaps(f64),
}

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputValueError::Malformed(text) => write!(f, "Invalid input value {:?}", text),
            InputValueError::NonPositiveDuration(val) => {
                write!(f, "Race duration must be positive, but is {}", val)
            }
            InputValueError::DurationTooLong(val) => write!(
                f,
                "Race duration must not exceed {}s, but is {}s",
                MAX_RACE_DURATION_S, val
            ),
            InputValueError::InvalidLaps(val) => {
                write!(f, "Laps completed must be non-negative, but is {}", val)
            }
        }
    }
}

impl Error for InputValueError {}

/// Largest accepted race duration, remaining times are calculated in signed seconds.
pub const MAX_RACE_DURATION_S: u64 = i64::MAX as u64;

/// check_race_duration validates a race duration given as number, e.g. from a parameter file.
pub fn check_race_duration(race_duration_s: u64) -> Result<u64, InputValueError> {
    if race_duration_s == 0 {
        Err(InputValueError::NonPositiveDuration(0))
    } else if race_duration_s > MAX_RACE_DURATION_S {
        Err(InputValueError::DurationTooLong(race_duration_s))
    } else {
        Ok(race_duration_s)
    }
}

/// parse_race_duration parses free-text operator input into a race duration in seconds. Only
/// strictly positive integers are accepted.
pub fn parse_race_duration(text: &str) -> Result<u64, InputValueError> {
    let val: i64 = text
        .trim()
        .parse()
        .map_err(|_| InputValueError::Malformed(text.to_owned()))?;

    if val <= 0 {
        return Err(InputValueError::NonPositiveDuration(val));
    }

    Ok(val as u64)
}

/// parse_laps_completed parses free-text operator input into a (possibly fractional) number of
/// completed laps. Negative, infinite and NaN values are rejected.
pub fn parse_laps_completed(text: &str) -> Result<f64, InputValueError> {
    let val: f64 = text
        .trim()
        .parse()
        .map_err(|_| InputValueError::Malformed(text.to_owned()))?;

    if !val.is_finite() || val < 0.0 {
        return Err(InputValueError::InvalidLaps(val));
    }

    // -0.0 passes the check above, store it as plain zero
    Ok(val.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_race_duration() {
        assert_eq!(parse_race_duration("14400"), Ok(14400));
        assert_eq!(parse_race_duration(" 60 "), Ok(60));
        assert_eq!(
            parse_race_duration("-5"),
            Err(InputValueError::NonPositiveDuration(-5))
        );
        assert_eq!(
            parse_race_duration("0"),
            Err(InputValueError::NonPositiveDuration(0))
        );
        assert!(matches!(
            parse_race_duration("abc"),
            Err(InputValueError::Malformed(_))
        ));
        assert!(parse_race_duration("12.5").is_err());
        assert!(parse_race_duration("").is_err());
    }

    #[test]
    fn test_check_race_duration() {
        assert_eq!(check_race_duration(1), Ok(1));
        assert_eq!(check_race_duration(MAX_RACE_DURATION_S), Ok(MAX_RACE_DURATION_S));
        assert_eq!(
            check_race_duration(0),
            Err(InputValueError::NonPositiveDuration(0))
        );
        assert_eq!(
            check_race_duration(u64::MAX),
            Err(InputValueError::DurationTooLong(u64::MAX))
        );
        assert_eq!(
            check_race_duration(MAX_RACE_DURATION_S + 1),
            Err(InputValueError::DurationTooLong(MAX_RACE_DURATION_S + 1))
        );
    }

    #[test]
    fn test_parse_laps_completed() {
        assert_eq!(parse_laps_completed("10"), Ok(10.0));
        assert_eq!(parse_laps_completed("12.75"), Ok(12.75));
        assert_eq!(parse_laps_completed("0"), Ok(0.0));
        assert_eq!(parse_laps_completed("-0"), Ok(0.0));
        assert_eq!(
            parse_laps_completed("-1.5"),
            Err(InputValueError::InvalidLaps(-1.5))
        );
        assert!(parse_laps_completed("NaN").is_err());
        assert!(parse_laps_completed("inf").is_err());
        assert!(parse_laps_completed("ten").is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            InputValueError::NonPositiveDuration(-5).to_string(),
            "Race duration must be positive, but is -5"
        );
        assert_eq!(
            InputValueError::Malformed(String::from("abc")).to_string(),
            "Invalid input value \"abc\""
        );
    }
}
