use order_summary::core::config::{AppConfig, LOG_FORMAT_VAR, LogFormat, PRETTY_VAR};
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults_when_unset() {
    let config = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(!config.pretty);
}

#[test]
fn test_reads_values() {
    let config =
        AppConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "JSON"), (PRETTY_VAR, "1")])).unwrap();
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.pretty);

    let config = AppConfig::from_lookup(lookup(&[(PRETTY_VAR, "false")])).unwrap();
    assert!(!config.pretty);
}

#[test]
fn test_invalid_values_name_the_variable() {
    let err = AppConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
    assert!(err.starts_with(LOG_FORMAT_VAR), "Unexpected message: {err}");

    let err = AppConfig::from_lookup(lookup(&[(PRETTY_VAR, "maybe")])).unwrap_err();
    assert!(err.starts_with(PRETTY_VAR), "Unexpected message: {err}");
}

#[test]
fn test_log_format_round_trips_through_display() {
    for format in [LogFormat::Json, LogFormat::Text] {
        assert_eq!(format.to_string().parse::<LogFormat>().unwrap(), format);
    }
}
