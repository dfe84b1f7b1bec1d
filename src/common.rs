//! Common types for the guessing game: check outcomes, guess status and
//! configuration errors.

/// Outcome of checking a player's answer against the secret number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    /// The answer is the secret number.
    Equal,
    /// The secret number is less than the answer.
    LessThan,
    /// The secret number is greater than the answer.
    GreaterThan,
    /// The answer lies outside the current hint window.
    Invalid,
}

/// Result of asking the guesser for a new candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum GuessStatus {
    /// A fresh candidate was sampled.
    Ok,
    /// No candidate remains that is consistent with the feedback so far.
    Exhausted,
}

/// Which side holds the secret number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameMode {
    BotHost,
    UserHost,
}

/// Errors returned while building or loading a [`crate::GameConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// `min_value` is greater than `max_value`.
    InvalidRange { min: i32, max: i32 },
    /// `min_distance` is greater than `max_distance`.
    InvalidHintSpread { min: u32, max: u32 },
    /// Answer length must be between 1 and 9 digits.
    InvalidAnswerDigits(usize),
    /// The answer box only takes digits, so the range cannot go below zero.
    NegativeRange(i32),
    /// `max_value` has more digits than an answer may hold.
    AnswerTooShort { max_value: i32, max_digits: usize },
    #[cfg(feature = "std")]
    Io(std::io::Error),
    #[cfg(feature = "std")]
    Parse(serde_json::Error),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidRange { min, max } => {
                write!(f, "min_value {} is greater than max_value {}", min, max)
            }
            ConfigError::InvalidHintSpread { min, max } => write!(
                f,
                "hint min_distance {} is greater than max_distance {}",
                min, max
            ),
            ConfigError::InvalidAnswerDigits(n) => {
                write!(f, "max_answer_digits must be between 1 and 9, got {}", n)
            }
            ConfigError::NegativeRange(min) => {
                write!(f, "min_value {} is negative and cannot be typed as an answer", min)
            }
            ConfigError::AnswerTooShort {
                max_value,
                max_digits,
            } => write!(
                f,
                "max_value {} does not fit in {} answer digits",
                max_value, max_digits
            ),
            #[cfg(feature = "std")]
            ConfigError::Io(e) => write!(f, "unable to read config: {}", e),
            #[cfg(feature = "std")]
            ConfigError::Parse(e) => write!(f, "malformed config: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

#[cfg(feature = "std")]
impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
