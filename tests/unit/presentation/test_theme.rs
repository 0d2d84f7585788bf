use crypto_tracker::presentation::theme::AppTheme;

#[test]
fn test_theme_defaults_to_dark() {
    assert_eq!(AppTheme::default(), AppTheme::Dark);
    assert!(AppTheme::default().is_dark());
}

#[test]
fn test_theme_round_trips_through_strings() {
    for theme in AppTheme::ALL {
        assert_eq!(theme.to_string().parse::<AppTheme>().unwrap(), theme);
    }
    assert_eq!(AppTheme::Light.as_str(), "light");
    assert!("Dark".parse::<AppTheme>().is_err());
}

#[test]
fn test_theme_toggle_and_labels() {
    assert_eq!(AppTheme::Light.toggle(), AppTheme::Dark);
    assert_eq!(AppTheme::Dark.toggle(), AppTheme::Light);
    assert_eq!(AppTheme::Light.display_name(), "Light");
    assert_eq!(AppTheme::Dark.display_name(), "Dark");
}

#[test]
fn test_theme_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&AppTheme::Light).unwrap(), "\"light\"");
    let theme: AppTheme = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(theme, AppTheme::Dark);
}
