use crate::color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Flat configuration record persisted as pretty-printed JSON. Unknown fields
/// in the file are ignored and every field has a default so partial files
/// load cleanly.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Master switch for the overlay. When false nothing is rendered.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Horizontal position in scaled pixels. `-1` means auto: right-aligned
    /// against the screen edge.
    #[serde(default = "default_x")]
    pub x: i32,
    /// Vertical position in scaled pixels from the top of the screen.
    #[serde(default = "default_y")]
    pub y: i32,
    /// Text color as a `#RRGGBB` string. Falls back to yellow if invalid.
    #[serde(rename = "colorHex", default = "default_color_hex")]
    pub color_hex: String,
    /// Maximum width of the text box before marquee scrolling kicks in.
    #[serde(rename = "maxBoxWidth", default = "default_max_box_width")]
    pub max_box_width: i32,
    /// Render scale applied to font size, position and box width.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Window captions that are never treated as track titles. The player
    /// opens helper windows with these captions.
    #[serde(rename = "excludedTitles", default = "default_excluded_titles")]
    pub excluded_titles: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_x() -> i32 {
    -1
}

fn default_y() -> i32 {
    3
}

fn default_color_hex() -> String {
    "#FFFF00".into()
}

fn default_max_box_width() -> i32 {
    200
}

fn default_scale() -> f32 {
    1.0
}

fn default_excluded_titles() -> Vec<String> {
    vec!["DesktopLyrics".into(), "GDI+ Window".into()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            x: default_x(),
            y: default_y(),
            color_hex: default_color_hex(),
            max_box_width: default_max_box_width(),
            scale: default_scale(),
            excluded_titles: default_excluded_titles(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            // A missing file is the normal first-run case; any other I/O
            // error must surface so the caller can log it.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Persist on a fire-and-forget thread so the caller never blocks on
    /// disk. Failures are logged and otherwise ignored.
    pub fn save_async(&self, path: PathBuf) {
        let settings = self.clone();
        std::thread::spawn(move || match settings.save(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "settings saved"),
            Err(e) => tracing::error!(path = %path.display(), "failed to save settings: {e}"),
        });
    }

    /// The configured color as a 24-bit RGB value, falling back to the
    /// default yellow when the string does not parse.
    pub fn color(&self) -> u32 {
        color::parse_hex(&self.color_hex).unwrap_or(color::DEFAULT_COLOR)
    }
}

/// Default location of the settings file: the platform config directory, or
/// the working directory when none exists.
pub fn default_path() -> PathBuf {
    match dirs_next::config_dir() {
        Some(dir) => dir.join("music_overlay").join("settings.json"),
        None => PathBuf::from("music_overlay.json"),
    }
}
