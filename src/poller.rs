use crate::now_playing::TitleSource;
use crate::settings::Settings;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, SystemTime};

/// In-memory settings shared between the poll thread and the render path.
pub type SharedSettings = Arc<Mutex<Settings>>;

/// Single-slot cell holding the last known track title. The poll thread
/// overwrites it wholesale once per tick; the renderer reads it once per
/// frame and never blocks on the lookup itself.
#[derive(Clone, Default)]
pub struct TitleCache(Arc<Mutex<Option<String>>>);

impl TitleCache {
    pub fn set(&self, title: Option<String>) {
        *self.0.lock().unwrap() = title;
    }

    pub fn get(&self) -> Option<String> {
        self.0.lock().unwrap().clone()
    }
}

fn file_mtime(path: &PathBuf) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Spawn the background poll thread. Each tick it refreshes the cached title
/// and picks up settings rewritten on disk by the command surface. The thread
/// never outlives the process; exit simply abandons it.
pub fn spawn(
    source: TitleSource,
    cache: TitleCache,
    settings: SharedSettings,
    settings_path: PathBuf,
    interval: Duration,
) {
    thread::spawn(move || {
        let mut last_mtime = file_mtime(&settings_path);
        loop {
            let excluded = settings.lock().unwrap().excluded_titles.clone();
            cache.set(source.current_title(&excluded));

            let mtime = file_mtime(&settings_path);
            if mtime.is_some() && mtime != last_mtime {
                last_mtime = mtime;
                match Settings::load(&settings_path) {
                    Ok(new_settings) => {
                        *settings.lock().unwrap() = new_settings;
                        tracing::info!("settings reloaded from disk");
                    }
                    Err(e) => tracing::warn!("failed to reload settings: {e}"),
                }
            }

            thread::sleep(interval);
        }
    });
}
