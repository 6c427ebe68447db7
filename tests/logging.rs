// tests/logging.rs

use taskdag::LogLevel;
use taskdag::logging::init_logging;

#[test]
fn second_init_fails_instead_of_panicking() {
    // Whichever call runs first may succeed; the second must error.
    let _ = init_logging(Some(LogLevel::Warn));
    assert!(init_logging(Some(LogLevel::Debug)).is_err());
}
