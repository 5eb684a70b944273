use thiserror::Error;

/// Errors raised while parsing schedule input strings.
///
/// Every variant is a precondition violation in the caller-supplied input;
/// parsing fails fast rather than propagating a nonsense timeline value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown weekday code `{0}`")]
    UnknownWeekday(String),

    #[error("malformed clock time `{0}`, expected `H:MM+Z` or `HH:MM+Z`")]
    MalformedClock(String),

    #[error("clock time `{0}` is out of range")]
    ClockOutOfRange(String),

    #[error("period end `{to}` comes before its start `{from}`")]
    ReversedPeriod { from: String, to: String },
}
