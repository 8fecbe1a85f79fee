use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_accepts_stored_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
}

#[test]
fn theme_parse_rejects_unknown_values() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(" dark"), None);
    assert_eq!(Theme::parse("auto"), None);
}

#[test]
fn theme_opposite_never_self_loops() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.opposite(), theme);
        assert_eq!(theme.opposite().opposite(), theme);
    }
}

#[test]
fn theme_label_describes_next_action() {
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
}

#[test]
fn theme_serde_uses_lowercase_strings() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}

#[test]
fn theme_display_matches_as_str() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_strings() {
    assert_eq!(Direction::Ltr.as_str(), "ltr");
    assert_eq!(Direction::Rtl.as_str(), "rtl");
    assert_eq!(Direction::Rtl.to_string(), "rtl");
}
