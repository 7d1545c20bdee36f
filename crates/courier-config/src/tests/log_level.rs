use crate::LogLevel;

use log::LevelFilter;

#[test]
fn parses_known_levels_case_insensitively() {
    assert_eq!("debug".parse(), Ok(LogLevel::Debug));
    assert_eq!("WARN".parse(), Ok(LogLevel::Warn));
    assert_eq!("Off".parse(), Ok(LogLevel::Off));
}

#[test]
fn unknown_levels_fall_back_to_info() {
    assert_eq!("loud".parse(), Ok(LogLevel::Info));
    assert_eq!("".parse(), Ok(LogLevel::Info));
}

#[test]
fn maps_onto_the_log_facade_filters() {
    assert_eq!(LogLevel::Trace.to_filter(), LevelFilter::Trace);
    assert_eq!(LogLevel::Off.to_filter(), LevelFilter::Off);
    assert_eq!(LogLevel::default().to_filter(), LevelFilter::Info);
}

#[test]
fn displays_as_the_config_spelling() {
    assert_eq!(LogLevel::Warn.to_string(), "warn");
}
