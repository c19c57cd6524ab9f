use music_overlay::now_playing::TitleSource;
use music_overlay::poller::{self, TitleCache};
use music_overlay::settings::Settings;
use std::sync::{Arc, Mutex};
use std::thread::sleep;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn cache_is_overwritten_wholesale() {
    let cache = TitleCache::default();
    assert_eq!(cache.get(), None);

    cache.set(Some("Song - Artist".into()));
    assert_eq!(cache.get(), Some("Song - Artist".into()));

    cache.set(None);
    assert_eq!(cache.get(), None);
}

#[test]
fn cache_clones_share_the_same_slot() {
    let cache = TitleCache::default();
    let reader = cache.clone();
    cache.set(Some("Track".into()));
    assert_eq!(reader.get(), Some("Track".into()));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn unsupported_source_keeps_cache_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    Settings::default().save(&path).unwrap();

    let cache = TitleCache::default();
    let shared = Arc::new(Mutex::new(Settings::default()));
    poller::spawn(
        TitleSource::Unsupported,
        cache.clone(),
        shared,
        path,
        Duration::from_millis(50),
    );

    sleep(Duration::from_millis(200));
    assert_eq!(cache.get(), None);
}

#[test]
fn settings_rewritten_on_disk_are_picked_up() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    Settings::default().save(&path).unwrap();

    let cache = TitleCache::default();
    let shared = Arc::new(Mutex::new(Settings::default()));
    poller::spawn(
        TitleSource::Unsupported,
        cache,
        shared.clone(),
        path.clone(),
        Duration::from_millis(100),
    );

    // Coarse mtime resolution on some filesystems: make sure the rewrite
    // lands in a later second than the initial save.
    sleep(Duration::from_millis(1100));
    let updated = Settings {
        y: 77,
        ..Settings::default()
    };
    updated.save(&path).unwrap();

    sleep(Duration::from_millis(1000));
    assert_eq!(shared.lock().unwrap().y, 77);
}
