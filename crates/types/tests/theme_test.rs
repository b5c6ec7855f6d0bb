use types::{Color, Theme};

#[test]
fn test_preset_lookup() {
    assert!(Theme::from_name("sunset").is_ok());
    assert!(Theme::from_name("neon").is_ok());
    let err = Theme::from_name("vaporwave").unwrap_err();
    assert!(err.to_string().contains("vaporwave"));
    assert!(err.to_string().contains("sunset"));
}

#[test]
fn test_presets_close_the_silhouette() {
    for theme in [Theme::sunset(), Theme::neon()] {
        let first = theme.skyline.first().unwrap();
        let last = theme.skyline.last().unwrap();
        assert_eq!(first.x, 0);
        assert_eq!(last.x, 1024);
        for p in &theme.skyline {
            assert!(p.y_frac > 0.0 && p.y_frac < 1.0);
        }
    }
}

#[test]
fn test_theme_json_round_trip() {
    let theme = Theme::neon();
    let json = serde_json::to_string(&theme).unwrap();
    let back: Theme = serde_json::from_str(&json).unwrap();
    assert_eq!(back.skyline.len(), theme.skyline.len());
    assert_eq!(back.badge.fill, theme.badge.fill);
    assert!(back.vignette.is_some());
}

#[test]
fn test_color_helpers() {
    assert_eq!(Color::rgb(1, 2, 3).a, 255);
    assert_eq!(Color::rgb(1, 2, 3).with_alpha(9), Color::rgba(1, 2, 3, 9));
}
