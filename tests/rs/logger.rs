//! Integration tests for logger behavior.

use elective_advisor::logger::{
    current_level, init_file_logging, is_verbose_enabled, set_level, set_level_from_str, Level,
};
use elective_advisor::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str(" debug "));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration (enabled: {})", is_verbose_enabled());
    assert!(current_level() >= Level::Error);
}

#[test]
fn file_logging_writes_tagged_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("advisor.log");

    assert!(init_file_logging(&path));
    set_level(Level::Debug);
    error!("file sink check");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[ERROR] file sink check"));
}
