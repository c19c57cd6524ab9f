use music_overlay::color;
use music_overlay::settings::Settings;

#[test]
fn valid_hex_with_or_without_prefix() {
    assert_eq!(color::parse_hex("#FF5733"), Some(0xFF5733));
    assert_eq!(color::parse_hex("FF5733"), Some(0xFF5733));
    assert_eq!(color::parse_hex("#ffff00"), Some(0xFFFF00));
    assert_eq!(color::parse_hex("000000"), Some(0x000000));
}

#[test]
fn invalid_hex_is_rejected() {
    for bad in ["", "#", "FFF", "#FFFF0", "#FFFF000", "zzzzzz", "#12 456"] {
        assert_eq!(color::parse_hex(bad), None, "{bad:?} should not parse");
    }
}

#[test]
fn invalid_color_falls_back_to_yellow() {
    let settings = Settings {
        color_hex: "not-a-color".into(),
        ..Settings::default()
    };
    assert_eq!(settings.color(), 0xFFFF00);
}

#[test]
fn configured_color_is_used_when_valid() {
    let settings = Settings {
        color_hex: "#AA00AA".into(),
        ..Settings::default()
    };
    assert_eq!(settings.color(), 0xAA00AA);
}

#[test]
fn named_colors_resolve_to_hex() {
    assert_eq!(color::resolve("yellow").as_deref(), Some("#FFFF55"));
    assert_eq!(color::resolve("RED").as_deref(), Some("#FF5555"));
    assert_eq!(color::resolve("dark_aqua").as_deref(), Some("#00AAAA"));
}

#[test]
fn hex_input_is_normalised() {
    assert_eq!(color::resolve("ff5733").as_deref(), Some("#FF5733"));
    assert_eq!(color::resolve("#ff5733").as_deref(), Some("#FF5733"));
    assert_eq!(color::resolve("tangerine"), None);
}
