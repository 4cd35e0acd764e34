use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

use crate::models::layout::Rect;

/// Six hex digit RGB colour, stored upper-case without a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(String);

impl Rgb {
    /// Accepts `"003A70"` or `"#003a70"`.
    pub fn parse(raw: &str) -> Option<Rgb> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Rgb(hex.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub(crate) fn from_static(hex: &'static str) -> Rgb {
        Rgb(hex.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registered brands. The request `type` string resolves to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Corporate,
    Investment,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::Corporate, Brand::Investment];

    /// Canonical request key, also used as the filename prefix.
    pub fn key(self) -> &'static str {
        match self {
            Brand::Corporate => "corporate",
            Brand::Investment => "investment",
        }
    }

    /// Resolve a request `type`. The legacy client names are accepted too.
    pub fn parse(raw: &str) -> Option<Brand> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "corporate" | "mckinsey" => Some(Brand::Corporate),
            "investment" | "marwyn" => Some(Brand::Investment),
            _ => None,
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Semantic colour roles. Builders only ever ask for roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Highlight,
    Text,
    Muted,
    Rule,
    Surface,
    Background,
    OnPrimary,
    DataPositive,
    DataNegative,
    DataNeutral,
    DataWarning,
}

impl ColorRole {
    pub const ALL: [ColorRole; 14] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Highlight,
        ColorRole::Text,
        ColorRole::Muted,
        ColorRole::Rule,
        ColorRole::Surface,
        ColorRole::Background,
        ColorRole::OnPrimary,
        ColorRole::DataPositive,
        ColorRole::DataNegative,
        ColorRole::DataNeutral,
        ColorRole::DataWarning,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Highlight => "highlight",
            ColorRole::Text => "text",
            ColorRole::Muted => "muted",
            ColorRole::Rule => "rule",
            ColorRole::Surface => "surface",
            ColorRole::Background => "background",
            ColorRole::OnPrimary => "onPrimary",
            ColorRole::DataPositive => "dataPositive",
            ColorRole::DataNegative => "dataNegative",
            ColorRole::DataNeutral => "dataNeutral",
            ColorRole::DataWarning => "dataWarning",
        }
    }

    /// Case-insensitive, ignores `_` and `-` so `data_positive` works too.
    pub fn from_name(raw: &str) -> Option<ColorRole> {
        let folded: String = raw
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        ColorRole::ALL
            .into_iter()
            .find(|role| role.name().to_ascii_lowercase() == folded)
    }
}

/// A caller-supplied colour: either a palette role or a literal hex value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    Role(ColorRole),
    Hex(Rgb),
}

impl ColorSpec {
    pub fn parse(raw: &str) -> Option<ColorSpec> {
        ColorRole::from_name(raw)
            .map(ColorSpec::Role)
            .or_else(|| Rgb::parse(raw).map(ColorSpec::Hex))
    }
}

impl<'de> Deserialize<'de> for ColorSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ColorSpec::parse(&raw).ok_or_else(|| de::Error::custom(format!("unknown colour '{raw}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub highlight: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub rule: Rgb,
    pub surface: Rgb,
    pub background: Rgb,
    pub on_primary: Rgb,
    pub data_positive: Rgb,
    pub data_negative: Rgb,
    pub data_neutral: Rgb,
    pub data_warning: Rgb,
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> &Rgb {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Highlight => &self.highlight,
            ColorRole::Text => &self.text,
            ColorRole::Muted => &self.muted,
            ColorRole::Rule => &self.rule,
            ColorRole::Surface => &self.surface,
            ColorRole::Background => &self.background,
            ColorRole::OnPrimary => &self.on_primary,
            ColorRole::DataPositive => &self.data_positive,
            ColorRole::DataNegative => &self.data_negative,
            ColorRole::DataNeutral => &self.data_neutral,
            ColorRole::DataWarning => &self.data_warning,
        }
    }
}

/// Semantic text roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextRole {
    Title,
    SectionTitle,
    SlideTitle,
    Heading,
    Subheading,
    Body,
    Caption,
    DataLarge,
    DataSmall,
    Tagline,
}

/// One typography preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypePreset {
    /// Points.
    pub size: f64,
    pub bold: bool,
    pub color: ColorRole,
    pub font: &'static str,
    /// Points of extra spacing between characters.
    pub letter_spacing: f64,
}

impl TypePreset {
    pub(crate) const fn new(size: f64, bold: bool, color: ColorRole, font: &'static str) -> Self {
        Self { size, bold, color, font, letter_spacing: 0.0 }
    }

    pub(crate) const fn spaced(self, letter_spacing: f64) -> Self {
        Self { letter_spacing, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typography {
    pub title: TypePreset,
    pub section_title: TypePreset,
    pub slide_title: TypePreset,
    pub heading: TypePreset,
    pub subheading: TypePreset,
    pub body: TypePreset,
    pub caption: TypePreset,
    pub data_large: TypePreset,
    pub data_small: TypePreset,
    pub tagline: TypePreset,
}

impl Typography {
    pub fn get(&self, role: TextRole) -> &TypePreset {
        match role {
            TextRole::Title => &self.title,
            TextRole::SectionTitle => &self.section_title,
            TextRole::SlideTitle => &self.slide_title,
            TextRole::Heading => &self.heading,
            TextRole::Subheading => &self.subheading,
            TextRole::Body => &self.body,
            TextRole::Caption => &self.caption,
            TextRole::DataLarge => &self.data_large,
            TextRole::DataSmall => &self.data_small,
            TextRole::Tagline => &self.tagline,
        }
    }
}

/// Where the brand tagline sits on content slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Bottom,
}

impl Anchor {
    pub fn flipped(self) -> Anchor {
        match self {
            Anchor::Top => Anchor::Bottom,
            Anchor::Bottom => Anchor::Top,
        }
    }
}

/// Fixed slide geometry for a brand, in inches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin_x: f64,
    pub content_width: f64,
    /// Slide title box on content slides.
    pub title: Rect,
    /// Region available to slide content below the title.
    pub body: Rect,
    /// Title slide headline block.
    pub hero: Rect,
    pub tagline_top: Rect,
    pub tagline_bottom: Rect,
    pub page_number: Rect,
    /// Gap between side-by-side cards, boxes and phases.
    pub gap: f64,
    pub card_width: f64,
    pub card_height: f64,
    pub panel_height: f64,
    pub table_row_height: f64,
    pub table_font_size: f64,
}

/// Brand-specific ornaments that builders switch on or off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decorations {
    /// Vertical accent bars on the title slide edge.
    pub edge_accent: bool,
    /// Thin rule under content slide titles.
    pub header_rule: bool,
    pub page_numbers: bool,
    /// Key messages on a primary-coloured full-bleed background.
    pub full_bleed_key_messages: bool,
}

/// A brand's palette, typography and layout bundle. Immutable; one per brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub brand: Brand,
    pub name: &'static str,
    pub description: &'static str,
    pub palette: Palette,
    pub typography: Typography,
    pub frame: Frame,
    pub decorations: Decorations,
    pub tagline_anchor: Anchor,
    pub default_organisation: &'static str,
    pub default_tagline: &'static str,
}

impl Theme {
    pub fn color(&self, role: ColorRole) -> &Rgb {
        self.palette.get(role)
    }

    pub fn text(&self, role: TextRole) -> &TypePreset {
        self.typography.get(role)
    }
}
