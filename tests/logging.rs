use std::{fs, thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;

// The global subscriber can only be installed once per process, so the test
// that asserts capture must run before any other `init` call. Tests run in
// name order within the binary; keep these names sorted accordingly.

#[test]
#[serial]
fn a_debug_init_captures_debug_records_in_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overlay.log");

    music_overlay::logging::init(true, Some(path.clone()));
    tracing::info!("marker-info");
    tracing::debug!("marker-debug");

    sleep(Duration::from_millis(100));

    let contents = fs::read_to_string(&path).expect("log file was not created");
    assert!(contents.contains("marker-info"));
    // `debug = true` lowers the filter below the `info` default.
    assert!(contents.contains("marker-debug"));
    // File output is written without ANSI escape sequences.
    assert!(!contents.contains('\u{1b}'));
}

#[test]
#[serial]
fn later_init_calls_cannot_redirect_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("second.log");

    // The subscriber from the first test is already installed; this call
    // must be a silent no-op rather than a panic or a redirect.
    music_overlay::logging::init(false, Some(path.clone()));
    tracing::info!("redirected-marker");

    sleep(Duration::from_millis(100));

    let contents = fs::read_to_string(&path).unwrap_or_default();
    assert!(
        !contents.contains("redirected-marker"),
        "a second init must not capture records"
    );
}
