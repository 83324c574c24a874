//! Integration tests for the typed accessor layer.

mod common;

use common::SAMPLE;
use inicfg::{COMMON_SECTION, parse_ini};

#[test]
fn test_defaults_pass_through_unchanged() {
    let ini = parse_ini(SAMPLE);
    assert_eq!(ini.get_str("db", "nosuch", "fallback"), "fallback");
    assert_eq!(ini.get_str("nosuch", "host", "fallback"), "fallback");
    assert_eq!(ini.get_i64("db", "nosuch", -7), -7);
    assert_eq!(ini.get_f64("db", "nosuch", 1.5), 1.5);
    assert!(ini.get_bool("db", "nosuch", true));
}

#[test]
fn test_typed_access() {
    let ini = parse_ini(SAMPLE);
    assert_eq!(ini.get_i64("db", "port", 0), 5432);
    assert_eq!(ini.get_f64("limits", "ratio", 0.0), 0.75);
    assert!(ini.get_bool("", "debug", false));
    assert_eq!(ini.get_i64("", "retries", 0), 3);
}

#[test]
fn test_bool_aliases() {
    let ini = parse_ini(b"a = On\nb = 0\nc = No\nd = TRUE\n");
    assert!(ini.get_bool("", "a", false));
    assert!(!ini.get_bool("", "b", true));
    assert!(!ini.get_bool("", "c", true));
    assert!(ini.get_bool("", "d", false));
}

#[test]
fn test_dot_notation_addressing() {
    let ini = parse_ini(b"[db]\nhost = localhost\nport = 5432\n");
    assert_eq!(ini.get_str("", "db.host", "x"), "localhost");
    assert_eq!(ini.get_i64("", "db.port", 0), 5432);
    assert_eq!(ini.get_str("", "db.nosuch", "x"), "x");
}

#[test]
fn test_section_listing_with_patterns() {
    let ini = parse_ini(SAMPLE);
    assert_eq!(
        ini.section_names(""),
        vec![COMMON_SECTION, "db", "db-replica", "limits"]
    );
    assert_eq!(ini.section_names("^db"), vec!["db", "db-replica"]);
    assert_eq!(ini.section_names("replica"), vec!["db-replica"]);
}

#[test]
fn test_key_listing_with_patterns() {
    let ini = parse_ini(SAMPLE);
    assert_eq!(ini.keys("db", "^p"), vec!["port", "password"]);
    assert!(ini.keys("nosuch", "").is_empty());
}

#[test]
fn test_invalid_pattern_is_empty_not_error() {
    let ini = parse_ini(SAMPLE);
    assert!(ini.section_names("(").is_empty());
    assert!(ini.keys("db", "(").is_empty());
}
