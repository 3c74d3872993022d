use tracing::Level;
use treedoc::cli::LogLevel;
use treedoc::logging::{effective_level, parse_level_str};

#[test]
fn flag_beats_environment() {
    assert_eq!(effective_level(Some(LogLevel::Warn), Some("trace")), Level::WARN);
    assert_eq!(effective_level(None, Some("debug")), Level::DEBUG);
    assert_eq!(effective_level(None, None), Level::INFO);
}

#[test]
fn unknown_environment_value_falls_back_to_info() {
    assert_eq!(effective_level(None, Some("verbose")), Level::INFO);
    assert_eq!(parse_level_str(" Warning "), Some(Level::WARN));
    assert_eq!(parse_level_str(""), None);
}
