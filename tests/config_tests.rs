use number_guess::{ConfigError, GameConfig, HintSpread};
use std::io::Write;

#[test]
fn partial_json_uses_defaults() {
    let config = GameConfig::from_json_str(r#"{ "max_value": 50, "hint": { "max_distance": 900 } }"#)
        .unwrap();
    assert_eq!(config.min_value, 0);
    assert_eq!(config.max_value, 50);
    assert_eq!(config.hint, HintSpread::new(500, 900));
    assert_eq!(config.max_answer_digits, 4);
}

#[test]
fn invalid_values_are_rejected() {
    let err = GameConfig::from_json_str(r#"{ "min_value": 9, "max_value": 1 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange { min: 9, max: 1 }));

    let err = GameConfig::from_json_str(r#"{ "hint": { "min_distance": 10, "max_distance": 5 } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHintSpread { min: 10, max: 5 }));
    assert_eq!(
        err.to_string(),
        "hint min_distance 10 is greater than max_distance 5"
    );
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = GameConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("number-guess-config-{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "min_value": 5, "max_value": 20, "max_answer_digits": 2 }}"#).unwrap();
    }
    let config = GameConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!((config.min_value, config.max_value), (5, 20));
    assert_eq!(config.max_answer_digits, 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn ranges_the_answer_box_cannot_type_are_rejected() {
    let err = GameConfig::from_json_str(r#"{ "max_value": 100000 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::AnswerTooShort {
            max_value: 100000,
            max_digits: 4
        }
    ));
    assert_eq!(err.to_string(), "max_value 100000 does not fit in 4 answer digits");

    let err = GameConfig::from_json_str(r#"{ "min_value": -100, "max_value": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NegativeRange(-100)));

    let config =
        GameConfig::from_json_str(r#"{ "max_value": 100000, "max_answer_digits": 6 }"#).unwrap();
    assert_eq!(config.max_value, 100000);
}
