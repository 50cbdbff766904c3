//! Login Model Integration Test
//!
//! Exercises the public API of the shared crate the way a frontend does:
//! typing into both fields, reading the provider catalog and loading
//! configuration from disk.

use deepthought_shared::config::Appearance;
use deepthought_shared::{
    provider_catalog, ConfigManager, FieldKind, LoginCredentials, PressState, ProviderKind,
    RenderMode,
};
use tempfile::TempDir;

/// Feed `input` one character at a time, the way a text field reports edits
fn type_into(credentials: &mut LoginCredentials, field: FieldKind, input: &str) {
    let mut current = String::new();
    for c in input.chars() {
        current.push(c);
        match field {
            FieldKind::Email => credentials.set_email(current.clone()),
            FieldKind::Password => credentials.set_password(current.clone()),
        }
    }
}

#[test]
fn test_typing_email_and_password_then_submitting() {
    let mut credentials = LoginCredentials::new();

    type_into(&mut credentials, FieldKind::Email, "a@b.com");
    type_into(&mut credentials, FieldKind::Password, "secret1");

    let before = credentials.clone();

    assert_eq!(credentials.email(), "a@b.com");
    assert_eq!(credentials.password(), "secret1");
    assert_eq!(credentials.masked_password(), "•".repeat(7));

    // Submitting is a placeholder and must leave the values untouched
    assert_eq!(credentials, before);
}

#[test]
fn test_fresh_screen_shows_placeholders() {
    let credentials = LoginCredentials::new();

    assert!(credentials.email().is_empty());
    assert!(credentials.password().is_empty());
    assert_eq!(FieldKind::Email.placeholder(), "Email");
    assert_eq!(FieldKind::Password.placeholder(), "Password");
}

#[test]
fn test_catalog_is_stable_across_calls() {
    let first = provider_catalog();
    let second = provider_catalog();

    assert_eq!(first, second);
    assert_eq!(first.len(), 7);
    assert_eq!(
        first.iter().map(|e| e.kind).collect::<Vec<_>>(),
        ProviderKind::ALL.to_vec()
    );

    let template: Vec<ProviderKind> = first
        .iter()
        .filter(|e| e.render_mode == RenderMode::Template)
        .map(|e| e.kind)
        .collect();
    assert_eq!(
        template,
        vec![ProviderKind::Apple, ProviderKind::Phone, ProviderKind::GitHub]
    );
}

#[test]
fn test_press_state_round_trip_through_opacity() {
    let resting = PressState::from_pressed(false);
    let pressed = PressState::from_pressed(true);

    assert!(pressed.opacity() < resting.opacity());
    assert!((pressed.opacity() - 0.9).abs() < f32::EPSILON);
}

#[test]
fn test_config_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deepthought").join("config.yml");

    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        "ui:\n  appearance: dark\n  accent_color: \"#EA4335\"\n  window_width: 430\n",
    )
    .unwrap();

    let mut manager = ConfigManager::new(&path);
    manager.load().unwrap();

    let ui = &manager.config().ui;
    assert_eq!(ui.appearance, Appearance::Dark);
    assert_eq!(ui.window_width, 430);
    assert_eq!(ui.window_height, 844);
    let accent = ui.accent().unwrap();
    assert_eq!((accent.r, accent.g, accent.b), (0xEA, 0x43, 0x35));
}
