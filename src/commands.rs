use crate::color;
use crate::screen;
use crate::settings::{self, Settings};
use anyhow::bail;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "music_overlay", version, about = "Now-playing overlay for the NetEase Cloud Music desktop client")]
pub struct Cli {
    /// Path to the settings file. Defaults to the platform config directory.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write log output to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
    /// Without a subcommand the overlay itself is started.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set the text color (named color or hex code).
    Color { value: String },
    /// Set the overlay position. X of -1 means auto right-aligned.
    Pos {
        #[arg(value_parser = clap::value_parser!(i32).range(-1..))]
        x: i32,
        #[arg(value_parser = clap::value_parser!(i32).range(0..))]
        y: i32,
    },
    /// Set the maximum text box width in pixels.
    Width {
        #[arg(value_parser = clap::value_parser!(i32).range(50..=500))]
        pixels: i32,
    },
    /// Set the render scale.
    Scale { value: f32 },
    /// Toggle the overlay on or off.
    Toggle,
    /// Reset all settings to their defaults.
    Reset,
    /// Print the current settings.
    Status,
}

/// Apply a command to the in-memory settings and collect the feedback lines.
/// The caller is responsible for persisting the result.
pub fn apply(
    cmd: &Command,
    settings: &mut Settings,
    screen_height: i32,
) -> anyhow::Result<Vec<String>> {
    let mut feedback = Vec::new();
    match cmd {
        Command::Color { value } => {
            let Some(hex) = color::resolve(value) else {
                bail!("Invalid color. Use hex code (e.g., #FF5733) or color name (e.g., red, yellow)");
            };
            settings.color_hex = hex.clone();
            feedback.push(format!("Music display color set to: {hex}"));
        }
        Command::Pos { x, y } => {
            let max_y = screen::max_overlay_y(screen_height);
            let clamped = screen::clamp_y(*y, screen_height);
            if *y > max_y {
                feedback.push(format!(
                    "Y position clamped from {y} to {max_y} to prevent off-screen rendering"
                ));
            }
            settings.x = *x;
            settings.y = clamped;
            let x_text = if *x == -1 {
                "auto (right-aligned)".to_string()
            } else {
                x.to_string()
            };
            feedback.push(format!(
                "Music display position set to: X={x_text}, Y={clamped}"
            ));
        }
        Command::Width { pixels } => {
            settings.max_box_width = *pixels;
            feedback.push(format!("Music display max width set to: {pixels} pixels"));
        }
        Command::Scale { value } => {
            if !(0.5..=3.0).contains(value) {
                bail!("Scale must be between 0.5 and 3.0");
            }
            settings.scale = *value;
            feedback.push(format!("Music display scale set to: {value}"));
        }
        Command::Toggle => {
            settings.enabled = !settings.enabled;
            let state = if settings.enabled { "enabled" } else { "disabled" };
            feedback.push(format!("Music display is now {state}"));
        }
        Command::Reset => {
            *settings = Settings::default();
            feedback.push("Music display settings reset to defaults".to_string());
        }
        Command::Status => {
            let x_text = if settings.x == -1 {
                "auto".to_string()
            } else {
                settings.x.to_string()
            };
            let state = if settings.enabled { "enabled" } else { "disabled" };
            feedback.push("=== Music Overlay Status ===".to_string());
            feedback.push(format!("Status: {state}"));
            feedback.push(format!("Position: X={x_text}, Y={}", settings.y));
            feedback.push(format!("Color: {}", settings.color_hex));
            feedback.push(format!("Max Width: {}px", settings.max_box_width));
            feedback.push(format!("Scale: {}", settings.scale));
        }
    }
    Ok(feedback)
}

/// Load, mutate, persist, report. `status` does not rewrite the file.
pub fn run(cmd: &Command, path: &Path) -> anyhow::Result<()> {
    let mut settings = Settings::load(path).unwrap_or_else(|e| {
        tracing::warn!("failed to load settings, starting from defaults: {e}");
        Settings::default()
    });
    let before = settings.clone();
    let feedback = apply(cmd, &mut settings, screen::screen_size().1)?;
    if settings != before {
        settings.save(path)?;
    }
    for line in feedback {
        println!("{line}");
    }
    Ok(())
}

/// Resolve the settings path from the CLI flag or the platform default.
pub fn settings_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(settings::default_path)
}
