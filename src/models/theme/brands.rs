use std::sync::LazyLock;

use super::types::*;
use crate::models::error::GenerationError;
use crate::models::layout::Rect;

static CORPORATE: LazyLock<Theme> = LazyLock::new(corporate);
static INVESTMENT: LazyLock<Theme> = LazyLock::new(investment);

/// Look up the process-wide theme for a request `type`.
pub fn resolve_theme(brand: &str) -> Result<&'static Theme, GenerationError> {
    Brand::parse(brand)
        .map(theme_for)
        .ok_or_else(|| GenerationError::UnknownPresentationType(brand.to_string()))
}

pub fn theme_for(brand: Brand) -> &'static Theme {
    match brand {
        Brand::Corporate => &CORPORATE,
        Brand::Investment => &INVESTMENT,
    }
}

fn corporate() -> Theme {
    use ColorRole::*;
    const LIGHT: &str = "Segoe UI Light";
    const SEMIBOLD: &str = "Segoe UI Semibold";
    const REGULAR: &str = "Segoe UI";

    Theme {
        brand: Brand::Corporate,
        name: "Corporate",
        description: "Consulting-style presentations with a blue and teal colour scheme",
        palette: Palette {
            primary: Rgb::from_static("003A70"),
            secondary: Rgb::from_static("244061"),
            accent: Rgb::from_static("00B5A0"),
            highlight: Rgb::from_static("FDB913"),
            text: Rgb::from_static("2D2D2D"),
            muted: Rgb::from_static("58595B"),
            rule: Rgb::from_static("D0D0CE"),
            surface: Rgb::from_static("F5F5F0"),
            background: Rgb::from_static("FFFFFF"),
            on_primary: Rgb::from_static("FFFFFF"),
            data_positive: Rgb::from_static("70AD47"),
            data_negative: Rgb::from_static("C5504B"),
            data_neutral: Rgb::from_static("244061"),
            data_warning: Rgb::from_static("ED7D31"),
        },
        typography: Typography {
            title: TypePreset::new(44.0, false, Primary, LIGHT),
            section_title: TypePreset::new(28.0, false, Primary, LIGHT),
            slide_title: TypePreset::new(24.0, false, Primary, LIGHT),
            heading: TypePreset::new(16.0, true, Text, SEMIBOLD),
            subheading: TypePreset::new(14.0, true, Text, SEMIBOLD),
            body: TypePreset::new(12.0, false, Text, REGULAR),
            caption: TypePreset::new(11.0, false, Muted, REGULAR),
            data_large: TypePreset::new(32.0, false, Primary, LIGHT),
            data_small: TypePreset::new(18.0, true, Primary, SEMIBOLD),
            tagline: TypePreset::new(9.0, false, Muted, REGULAR).spaced(1.0),
        },
        frame: Frame {
            width: 10.0,
            height: 5.625,
            margin_x: 0.5,
            content_width: 9.0,
            title: Rect::new(0.5, 0.2, 8.0, 0.5),
            body: Rect::new(0.5, 1.2, 9.0, 3.85),
            hero: Rect::new(1.2, 1.8, 7.0, 1.3),
            tagline_top: Rect::new(0.5, 0.1, 9.0, 0.25),
            tagline_bottom: Rect::new(0.5, 5.25, 8.0, 0.25),
            page_number: Rect::new(9.3, 5.3, 0.4, 0.2),
            gap: 0.25,
            card_width: 2.5,
            card_height: 1.5,
            panel_height: 2.8,
            table_row_height: 0.3,
            table_font_size: 10.0,
        },
        decorations: Decorations {
            edge_accent: true,
            header_rule: true,
            page_numbers: true,
            full_bleed_key_messages: true,
        },
        tagline_anchor: Anchor::Bottom,
        default_organisation: "Your Organisation",
        default_tagline: "",
    }
}

fn investment() -> Theme {
    use ColorRole::*;
    const FONT: &str = "Calibri";
    const LIGHT: &str = "Calibri Light";

    Theme {
        brand: Brand::Investment,
        name: "Investment",
        description: "Investment-focused presentations with orange and charcoal branding",
        palette: Palette {
            primary: Rgb::from_static("FF6C2C"),
            secondary: Rgb::from_static("292B29"),
            accent: Rgb::from_static("FF8C42"),
            highlight: Rgb::from_static("FF6C2C"),
            text: Rgb::from_static("292929"),
            muted: Rgb::from_static("5F625F"),
            rule: Rgb::from_static("D9D9D9"),
            surface: Rgb::from_static("F2F2F2"),
            background: Rgb::from_static("FFFFFF"),
            on_primary: Rgb::from_static("FFFFFF"),
            data_positive: Rgb::from_static("70AD47"),
            data_negative: Rgb::from_static("C5504B"),
            data_neutral: Rgb::from_static("244061"),
            data_warning: Rgb::from_static("ED7D31"),
        },
        typography: Typography {
            title: TypePreset::new(44.0, false, Text, FONT),
            section_title: TypePreset::new(32.0, true, Text, FONT),
            slide_title: TypePreset::new(28.0, true, Text, FONT),
            heading: TypePreset::new(20.0, true, Text, FONT),
            subheading: TypePreset::new(18.0, true, Text, FONT),
            body: TypePreset::new(14.0, false, Text, FONT),
            caption: TypePreset::new(11.0, false, Muted, FONT),
            data_large: TypePreset::new(36.0, false, Text, LIGHT),
            data_small: TypePreset::new(20.0, true, Text, FONT),
            tagline: TypePreset::new(11.0, false, Muted, LIGHT).spaced(2.0),
        },
        frame: Frame {
            width: 13.333,
            height: 7.5,
            margin_x: 0.75,
            content_width: 11.83,
            title: Rect::new(0.75, 0.75, 11.83, 0.5),
            body: Rect::new(0.75, 1.8, 11.83, 4.8),
            hero: Rect::new(0.75, 2.5, 11.83, 1.3),
            tagline_top: Rect::new(0.5, 0.2, 12.33, 0.3),
            tagline_bottom: Rect::new(0.5, 6.8, 12.33, 0.3),
            page_number: Rect::new(12.5, 6.85, 0.5, 0.25),
            gap: 0.3,
            card_width: 3.8,
            card_height: 1.8,
            panel_height: 3.5,
            table_row_height: 0.4,
            table_font_size: 12.0,
        },
        decorations: Decorations {
            edge_accent: false,
            header_rule: false,
            page_numbers: false,
            full_bleed_key_messages: false,
        },
        tagline_anchor: Anchor::Bottom,
        default_organisation: "Marwyn",
        default_tagline: "STRAIGHT TALKING, FORWARD THINKING INVESTMENT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_brands() {
        assert_eq!(resolve_theme("corporate").unwrap().brand, Brand::Corporate);
        assert_eq!(resolve_theme("marwyn").unwrap().brand, Brand::Investment);
    }

    #[test]
    fn test_resolve_unknown_brand() {
        let err = resolve_theme("brandC").unwrap_err();
        assert!(matches!(err, GenerationError::UnknownPresentationType(ref t) if t == "brandC"));
    }

    #[test]
    fn test_resolution_returns_same_instance() {
        let a = resolve_theme("corporate").unwrap();
        let b = resolve_theme("mckinsey").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_frames_fit_inside_slide() {
        for brand in Brand::ALL {
            let frame = &theme_for(brand).frame;
            for rect in [frame.title, frame.body, frame.hero, frame.tagline_top, frame.tagline_bottom] {
                assert!(rect.right() <= frame.width + 1e-9, "{brand}: {rect:?}");
                assert!(rect.bottom() <= frame.height + 1e-9, "{brand}: {rect:?}");
            }
        }
    }
}
