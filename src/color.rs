use eframe::egui::Color32;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback text color (yellow) used whenever the configured value fails to
/// parse.
pub const DEFAULT_COLOR: u32 = 0xFFFF00;

/// Classic sixteen-color palette accepted by the `color` command in addition
/// to raw hex codes.
static NAMED_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("black", "#000000"),
        ("dark_blue", "#0000AA"),
        ("dark_green", "#00AA00"),
        ("dark_aqua", "#00AAAA"),
        ("dark_red", "#AA0000"),
        ("dark_purple", "#AA00AA"),
        ("gold", "#FFAA00"),
        ("gray", "#AAAAAA"),
        ("dark_gray", "#555555"),
        ("blue", "#5555FF"),
        ("green", "#55FF55"),
        ("aqua", "#55FFFF"),
        ("red", "#FF5555"),
        ("light_purple", "#FF55FF"),
        ("yellow", "#FFFF55"),
        ("white", "#FFFFFF"),
    ])
});

/// Parse a `#RRGGBB` string into a 24-bit RGB value. The leading `#` is
/// optional. Anything that is not exactly six hex digits is rejected.
pub fn parse_hex(value: &str) -> Option<u32> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

/// Resolve user input (a palette name or a hex code) to a normalized
/// `#RRGGBB` string. Returns `None` for anything unrecognised.
pub fn resolve(value: &str) -> Option<String> {
    let lower = value.trim().to_ascii_lowercase();
    if let Some(hex) = NAMED_COLORS.get(lower.as_str()) {
        return Some((*hex).to_string());
    }
    parse_hex(value).map(|rgb| format!("#{rgb:06X}"))
}

pub fn to_color32(rgb: u32) -> Color32 {
    Color32::from_rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    )
}
