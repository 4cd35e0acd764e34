/// Theme resolution and config merging.

use deckhand::models::presentation::{PresentationConfig, Spelling, Style};
use deckhand::models::theme::{Brand, ColorRole, TextRole, resolve_theme};

#[test]
fn test_resolve_theme_is_stable() {
    let first = resolve_theme("corporate").expect("corporate");
    let second = resolve_theme("corporate").expect("corporate");
    assert_eq!(first.palette, second.palette);
    assert_eq!(first.typography, second.typography);
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_aliases_resolve_to_the_same_theme() {
    assert!(std::ptr::eq(
        resolve_theme("mckinsey").expect("alias"),
        resolve_theme("corporate").expect("canonical")
    ));
    assert_eq!(resolve_theme("Marwyn").expect("alias").brand, Brand::Investment);
}

#[test]
fn test_unknown_brand_fails() {
    let err = resolve_theme("pastel").unwrap_err();
    assert_eq!(err.code(), "UnknownPresentationType");
}

#[test]
fn test_brands_differ_visually() {
    let corporate = resolve_theme("corporate").expect("corporate");
    let investment = resolve_theme("investment").expect("investment");
    assert_ne!(corporate.color(ColorRole::Primary), investment.color(ColorRole::Primary));
    assert!(investment.frame.width > corporate.frame.width);
}

#[test]
fn test_primary_override_applies_to_style_only() {
    let theme = resolve_theme("corporate").expect("corporate");
    let config = PresentationConfig {
        primary_color: Some("#12ab34".to_string()),
        ..PresentationConfig::default()
    };
    let style = Style::resolve(theme, &config).expect("style");
    assert_eq!(style.color(ColorRole::Primary).as_str(), "12AB34");
    assert_eq!(theme.color(ColorRole::Primary).as_str(), "003A70");
}

#[test]
fn test_spelling_selects_language() {
    let theme = resolve_theme("investment").expect("investment");
    let uk = Style::resolve(theme, &PresentationConfig::default()).expect("uk");
    assert_eq!(uk.spelling, Spelling::Uk);
    assert_eq!(uk.spelling.lang(), "en-GB");

    let config = PresentationConfig {
        spelling: Some("us".to_string()),
        ..PresentationConfig::default()
    };
    let us = Style::resolve(theme, &config).expect("us");
    assert_eq!(us.spelling.lang(), "en-US");
    assert_eq!(us.spelling.localise("Organisation colour"), "Organization color");

    let bad = PresentationConfig {
        spelling: Some("fr".to_string()),
        ..PresentationConfig::default()
    };
    assert_eq!(Style::resolve(theme, &bad).unwrap_err().code(), "InvalidConfig");
}

#[test]
fn test_text_styles_come_from_typography() {
    let theme = resolve_theme("corporate").expect("corporate");
    let style = Style::resolve(theme, &PresentationConfig::default()).expect("style");
    let title = style.text(TextRole::SlideTitle);
    let preset = theme.text(TextRole::SlideTitle);
    assert_eq!(title.font, preset.font);
    assert_eq!(title.size, preset.size);
    assert_eq!(&title.color, style.color(preset.color));
}
