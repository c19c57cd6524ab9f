mod color;
mod commands;
mod logging;
mod now_playing;
mod overlay;
mod poller;
mod screen;
mod settings;

use crate::commands::Cli;
use crate::now_playing::TitleSource;
use crate::overlay::OverlayApp;
use crate::poller::TitleCache;
use crate::settings::Settings;

use clap::Parser;
use eframe::egui;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug, cli.log_file.clone());

    let path = commands::settings_path(&cli);
    if let Some(cmd) = &cli.command {
        return commands::run(cmd, &path);
    }

    let settings = match Settings::load(&path) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to load settings, using defaults: {e}");
            Settings::default()
        }
    };
    if !path.exists() {
        // First run: materialise the defaults so the command surface has a
        // file to edit.
        settings.save_async(path.clone());
    }

    let source = TitleSource::detect();
    let shared = Arc::new(Mutex::new(settings));
    let cache = TitleCache::default();
    poller::spawn(
        source,
        cache.clone(),
        shared.clone(),
        path.clone(),
        Duration::from_secs(1),
    );

    let (screen_w, screen_h) = screen::screen_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_position([0.0, 0.0])
            .with_inner_size([screen_w as f32, screen_h as f32])
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_mouse_passthrough(true),
        ..Default::default()
    };

    let app = OverlayApp::new(shared, cache);
    if let Err(e) = eframe::run_native(
        "Music Overlay",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    ) {
        anyhow::bail!("failed to run overlay window: {e}");
    }
    Ok(())
}
