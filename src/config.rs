use crate::common::ConfigError;

pub const MIN_VALUE: i32 = 0;
pub const MAX_VALUE: i32 = 1000;
pub const HINT_MIN_DISTANCE: u32 = 500;
pub const HINT_MAX_DISTANCE: u32 = 500;
pub const MAX_ANSWER_DIGITS: usize = 4;

/// Longest answer that always fits in an `i32`.
const ANSWER_DIGITS_LIMIT: usize = 9;

/// Number of decimal digits in a non-negative value.
fn decimal_len(value: i32) -> usize {
    let mut len = 1;
    let mut rest = value / 10;
    while rest > 0 {
        len += 1;
        rest /= 10;
    }
    len
}

/// Range the hint distances are drawn from, on each side of the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct HintSpread {
    pub min_distance: u32,
    pub max_distance: u32,
}

impl HintSpread {
    pub const fn new(min_distance: u32, max_distance: u32) -> Self {
        Self {
            min_distance,
            max_distance,
        }
    }

    /// Spread that always places the hints exactly `distance` away.
    pub const fn fixed(distance: u32) -> Self {
        Self::new(distance, distance)
    }
}

impl Default for HintSpread {
    fn default() -> Self {
        Self::new(HINT_MIN_DISTANCE, HINT_MAX_DISTANCE)
    }
}

/// Numeric parameters shared by both game modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub min_value: i32,
    pub max_value: i32,
    pub hint: HintSpread,
    pub max_answer_digits: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            hint: HintSpread::default(),
            max_answer_digits: MAX_ANSWER_DIGITS,
        }
    }
}

impl GameConfig {
    /// Check the invariants the game logic relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_value > self.max_value {
            return Err(ConfigError::InvalidRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.hint.min_distance > self.hint.max_distance {
            return Err(ConfigError::InvalidHintSpread {
                min: self.hint.min_distance,
                max: self.hint.max_distance,
            });
        }
        if self.max_answer_digits == 0 || self.max_answer_digits > ANSWER_DIGITS_LIMIT {
            return Err(ConfigError::InvalidAnswerDigits(self.max_answer_digits));
        }
        if self.min_value < 0 {
            return Err(ConfigError::NegativeRange(self.min_value));
        }
        if decimal_len(self.max_value) > self.max_answer_digits {
            return Err(ConfigError::AnswerTooShort {
                max_value: self.max_value,
                max_digits: self.max_answer_digits,
            });
        }
        Ok(())
    }

    /// Parse a JSON document; missing fields fall back to the defaults.
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    #[cfg(feature = "std")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::info!(
            "loaded config from {}: range=[{}, {}] hint={:?}",
            path.as_ref().display(),
            config.min_value,
            config.max_value,
            config.hint
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hint, HintSpread::fixed(500));
    }

    #[test]
    fn rejects_inverted_range() {
        let config = GameConfig {
            min_value: 10,
            max_value: 5,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { min: 10, max: 5 })
        ));
    }

    #[test]
    fn digit_count() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(1000), 4);
        assert_eq!(decimal_len(i32::MAX), 10);
    }

    #[test]
    fn range_must_be_typeable() {
        let negative = GameConfig {
            min_value: -100,
            max_value: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::NegativeRange(-100))
        ));

        let wide = GameConfig {
            max_value: 100_000,
            ..GameConfig::default()
        };
        assert!(matches!(
            wide.validate(),
            Err(ConfigError::AnswerTooShort {
                max_value: 100_000,
                max_digits: 4
            })
        ));

        let exact = GameConfig {
            max_value: 9999,
            ..GameConfig::default()
        };
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn rejects_oversized_answers() {
        let config = GameConfig {
            max_answer_digits: 10,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAnswerDigits(10))
        ));
    }
}
