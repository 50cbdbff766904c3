//! Theme and styling for the DeepThought sign-in screen
//!
//! Colors, embedded icons and the style functions shared by every component.
//! Style functions follow the Iced 0.13 closure form
//! `Fn(&Theme, Status) -> Style`; the accent and background colors are read
//! from the theme palette so the configuration flows through `Theme`.

use iced::{
    widget::{button, container, svg, text_input},
    Background, Border, Color, Shadow, Theme,
};

use deepthought_shared::config::{Appearance, Rgb};
use deepthought_shared::{IconRef, PressState, RenderMode};

/// Embedded Google mark (full color)
pub const GOOGLE_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/google.svg");

/// Embedded Microsoft mark (full color)
pub const MICROSOFT_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/microsoft.svg");

/// Embedded Facebook mark (full color)
pub const FACEBOOK_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/facebook.svg");

/// Embedded LinkedIn mark (full color)
pub const LINKEDIN_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/linkedin.svg");

/// Embedded GitHub mark (monochrome, drawn tinted)
pub const GITHUB_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/github.svg");

/// Stand-in for the platform Apple glyph
pub const APPLE_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/apple.svg");

/// Stand-in for the platform phone glyph
pub const PHONE_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/phone.svg");

/// Stand-in for the platform lock glyph
pub const LOCK_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/lock.svg");

/// Resolve an icon reference to embedded artwork
pub fn icon_handle(icon: IconRef) -> Option<svg::Handle> {
    let bytes = match icon {
        IconRef::Asset("google") => GOOGLE_ICON_SVG,
        IconRef::Asset("microsoft") => MICROSOFT_ICON_SVG,
        IconRef::Asset("facebook") => FACEBOOK_ICON_SVG,
        IconRef::Asset("linkedin") => LINKEDIN_ICON_SVG,
        IconRef::Asset("github") => GITHUB_ICON_SVG,
        IconRef::System("apple.logo") => APPLE_ICON_SVG,
        IconRef::System("phone.fill") => PHONE_ICON_SVG,
        IconRef::System("lock.fill") => LOCK_ICON_SVG,
        _ => return None,
    };

    Some(svg::Handle::from_memory(bytes))
}

/// Default accent color (#007AFF)
pub const DEFAULT_ACCENT: Color = Color::from_rgb(0.0, 122.0 / 255.0, 1.0);

/// Provider label color (#202124)
pub const PROVIDER_LABEL: Color = Color::from_rgb(32.0 / 255.0, 33.0 / 255.0, 36.0 / 255.0);

/// Neutral gray used for strokes and placeholders
pub const SYSTEM_GRAY: Color = Color::from_rgb(0.557, 0.557, 0.576);

/// Provider button outline (gray at 25%)
pub const PROVIDER_BORDER: Color = Color::from_rgba(0.557, 0.557, 0.576, 0.25);

/// Text field outline (gray at 30%)
pub const INPUT_BORDER: Color = Color::from_rgba(0.557, 0.557, 0.576, 0.3);

/// Divider between the form and the providers (black at 85%)
pub const DIVIDER: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.85);

/// Light appearance background
pub const LIGHT_BACKGROUND: Color = Color::WHITE;

/// Dark appearance background
pub const DARK_BACKGROUND: Color = Color::BLACK;

/// Light appearance text
pub const LIGHT_TEXT: Color = Color::BLACK;

/// Dark appearance text
pub const DARK_TEXT: Color = Color::WHITE;

/// Danger color for the palette
pub const ERROR_RED: Color = Color::from_rgb(1.0, 0.231, 0.188);

/// Success color for the palette
pub const SUCCESS_GREEN: Color = Color::from_rgb(0.204, 0.78, 0.349);

/// White color constant
pub const WHITE: Color = Color::WHITE;

/// Convert a configured color into an Iced color
pub fn color_from_rgb(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Multiply a color's alpha by `opacity`
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Creates the DeepThought theme for the given appearance and accent color
pub fn create_deepthought_theme(appearance: Appearance, accent: Color) -> Theme {
    let (background, text) = match appearance {
        Appearance::Light => (LIGHT_BACKGROUND, LIGHT_TEXT),
        Appearance::Dark => (DARK_BACKGROUND, DARK_TEXT),
    };

    Theme::custom(
        "DeepThought".to_string(),
        iced::theme::Palette {
            background,
            text,
            primary: accent,
            success: SUCCESS_GREEN,
            danger: ERROR_RED,
        },
    )
}

/// Custom button style functions
pub mod button_styles {
    use super::*;

    /// Label and glyph color of the primary button
    pub fn primary_foreground(state: PressState) -> Color {
        with_opacity(WHITE, state.opacity())
    }

    /// Filled capsule behind the primary button; the whole button fades
    /// together while pressed
    pub fn primary_capsule_style(accent: Color, state: PressState) -> container::Style {
        container::Style {
            background: Some(Background::Color(with_opacity(accent, state.opacity()))),
            text_color: Some(primary_foreground(state)),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: utils::capsule_radius().into(),
            },
            shadow: Shadow::default(),
        }
    }

    /// Primary capsule style using the theme accent
    pub fn primary_capsule(state: PressState) -> impl Fn(&Theme) -> container::Style {
        move |theme| primary_capsule_style(theme.palette().primary, state)
    }

    /// Outlined white pill used by the provider buttons. Plain: no hover or
    /// pressed variation.
    pub fn provider_outlined() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, _status| button::Style {
            background: Some(Background::Color(WHITE)),
            text_color: PROVIDER_LABEL,
            border: Border {
                color: PROVIDER_BORDER,
                width: 1.0,
                radius: utils::capsule_radius().into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Text input style functions
pub mod text_input_styles {
    use super::*;

    /// White rounded rectangle with a faint gray outline, in either
    /// appearance
    pub fn rounded() -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
        |theme, status| {
            let palette = theme.palette();
            let border_color = match status {
                text_input::Status::Focused => with_opacity(palette.primary, 0.6),
                _ => INPUT_BORDER,
            };

            text_input::Style {
                background: Background::Color(WHITE),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: utils::field_radius().into(),
                },
                icon: SYSTEM_GRAY,
                placeholder: SYSTEM_GRAY,
                value: LIGHT_TEXT,
                selection: with_opacity(palette.primary, 0.3),
            }
        }
    }
}

/// Container style functions
pub mod container_styles {
    use super::*;

    /// Full-screen background
    pub fn screen_background() -> impl Fn(&Theme) -> container::Style {
        |theme| container::Style {
            background: Some(Background::Color(theme.palette().background)),
            text_color: Some(theme.palette().text),
            ..Default::default()
        }
    }

    /// One-unit horizontal rule
    pub fn divider() -> impl Fn(&Theme) -> container::Style {
        |_theme| container::Style {
            background: Some(Background::Color(DIVIDER)),
            ..Default::default()
        }
    }
}

/// Icon style functions
pub mod svg_styles {
    use super::*;

    /// Tint for an icon drawn in `mode`; `None` keeps authored colors
    pub fn tint_for(mode: RenderMode, foreground: Color) -> Option<Color> {
        match mode {
            RenderMode::Template => Some(foreground),
            RenderMode::Original => None,
        }
    }

    pub fn render_mode(
        mode: RenderMode,
        foreground: Color,
    ) -> impl Fn(&Theme, svg::Status) -> svg::Style {
        move |_theme, _status| svg::Style {
            color: tint_for(mode, foreground),
        }
    }
}

/// Utility functions for consistent spacing, sizing, and styling
pub mod utils {
    use iced::Padding;

    /// Vertical spacing between stacked elements
    pub fn standard_spacing() -> u16 {
        12
    }

    /// Outer padding of the screen
    pub fn screen_padding() -> Padding {
        Padding::from(16)
    }

    /// Height of the primary and provider buttons
    pub fn button_height() -> f32 {
        56.0
    }

    /// Corner radius that makes a button a capsule
    pub fn capsule_radius() -> f32 {
        button_height() / 2.0
    }

    /// Corner radius of the text fields
    pub fn field_radius() -> f32 {
        12.0
    }

    /// Padding inside the text fields
    pub fn text_input_padding() -> Padding {
        Padding::from(16)
    }

    /// Horizontal padding inside provider buttons
    pub fn provider_button_padding() -> Padding {
        Padding::from([0, 16])
    }

    /// Gap between a provider icon and its label
    pub fn icon_label_spacing() -> u16 {
        12
    }

    /// Side length of provider icons
    pub fn provider_icon_size() -> f32 {
        20.0
    }

    /// Side length of the primary button's lock glyph
    pub fn lock_icon_size() -> f32 {
        18.0
    }

    /// Vertical padding around the divider
    pub fn divider_padding() -> Padding {
        Padding::from([12, 0])
    }

    /// Extra space reserved below the last provider button
    pub fn provider_list_trailing_space() -> f32 {
        16.0
    }

    /// Typography utilities for consistent font sizing
    pub mod typography {
        use std::sync::OnceLock;

        static FONT_SIZE: OnceLock<f32> = OnceLock::new();

        /// Initialize the global font size
        pub fn init_font_size(size: f32) {
            let _ = FONT_SIZE.set(size);
        }

        /// Get the base font size, defaulting to 16.0 if not set
        fn base_font_size() -> f32 {
            *FONT_SIZE.get().unwrap_or(&16.0)
        }

        /// Size of button labels
        pub fn label_text_size() -> f32 {
            base_font_size()
        }

        /// Size of typed text and placeholders
        pub fn text_input_size() -> f32 {
            base_font_size() + 1.0
        }

        /// Semibold variant of the default font
        pub fn semibold() -> iced::Font {
            iced::Font {
                weight: iced::font::Weight::Semibold,
                ..iced::Font::DEFAULT
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accent_theme() -> Theme {
        create_deepthought_theme(Appearance::Light, DEFAULT_ACCENT)
    }

    fn solid(background: Option<Background>) -> Color {
        match background {
            Some(Background::Color(color)) => color,
            other => panic!("expected solid background, got {other:?}"),
        }
    }

    #[test]
    fn test_theme_uses_accent_and_appearance() {
        let light = accent_theme();
        assert_eq!(light.palette().primary, DEFAULT_ACCENT);
        assert_eq!(light.palette().background, LIGHT_BACKGROUND);

        let dark = create_deepthought_theme(Appearance::Dark, DEFAULT_ACCENT);
        assert_eq!(dark.palette().background, DARK_BACKGROUND);
        assert_eq!(dark.palette().text, DARK_TEXT);
    }

    #[test]
    fn test_primary_capsule_dims_when_pressed() {
        let theme = accent_theme();

        let resting = button_styles::primary_capsule(PressState::Resting)(&theme);
        let pressed = button_styles::primary_capsule(PressState::Pressed)(&theme);

        assert_eq!(solid(resting.background).a, 1.0);
        assert!((solid(pressed.background).a - 0.9).abs() < 1e-6);
        assert_eq!(resting.text_color, Some(WHITE));
        assert_eq!(
            resting.border.radius,
            iced::border::Radius::from(utils::capsule_radius())
        );
    }

    #[test]
    fn test_lock_glyph_fades_with_the_capsule() {
        let resting = button_styles::primary_foreground(PressState::Resting);
        let pressed = button_styles::primary_foreground(PressState::Pressed);

        assert_eq!(resting, WHITE);
        assert!((pressed.a - 0.9).abs() < 1e-6);
        assert_eq!(
            button_styles::primary_capsule(PressState::Pressed)(&accent_theme()).text_color,
            Some(pressed)
        );
    }

    #[test]
    fn test_primary_capsule_follows_configured_accent() {
        let accent = color_from_rgb(Rgb::new(0xEA, 0x43, 0x35));
        let theme = create_deepthought_theme(Appearance::Light, accent);

        let style = button_styles::primary_capsule(PressState::Resting)(&theme);
        assert_eq!(solid(style.background), accent);
    }

    #[test]
    fn test_provider_outline() {
        let style = button_styles::provider_outlined()(&accent_theme(), button::Status::Pressed);
        assert_eq!(solid(style.background), WHITE);
        assert_eq!(style.text_color, PROVIDER_LABEL);
        assert_eq!(style.border.width, 1.0);
        assert_eq!(style.border.color, PROVIDER_BORDER);
    }

    #[test]
    fn test_text_inputs_are_white_in_both_appearances() {
        let style = text_input_styles::rounded();

        for appearance in [Appearance::Light, Appearance::Dark] {
            let theme = create_deepthought_theme(appearance, DEFAULT_ACCENT);
            let active = style(&theme, text_input::Status::Active);

            assert_eq!(active.background, Background::Color(WHITE));
            assert_eq!(active.value, LIGHT_TEXT);
            assert_eq!(active.border.color, INPUT_BORDER);
            assert_eq!(
                active.border.radius,
                iced::border::Radius::from(utils::field_radius())
            );
        }
    }

    #[test]
    fn test_template_icons_are_tinted() {
        use svg_styles::tint_for;

        assert_eq!(
            tint_for(RenderMode::Template, PROVIDER_LABEL),
            Some(PROVIDER_LABEL)
        );
        assert_eq!(tint_for(RenderMode::Original, PROVIDER_LABEL), None);
    }

    #[test]
    fn test_every_catalog_icon_resolves() {
        for entry in deepthought_shared::provider_catalog() {
            assert!(icon_handle(entry.icon).is_some(), "{}", entry.kind);
        }
        assert!(icon_handle(deepthought_shared::models::LOCK_ICON).is_some());
        assert!(icon_handle(IconRef::Asset("missing")).is_none());
    }

    #[test]
    fn test_capsule_radius_is_half_height() {
        assert_eq!(utils::capsule_radius() * 2.0, utils::button_height());
    }
}
