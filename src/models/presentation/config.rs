use serde::Deserialize;

use crate::models::deck::TextStyle;
use crate::models::error::GenerationError;
use crate::models::theme::{ColorRole, ColorSpec, Frame, Palette, Rgb, TextRole, Theme};

/// Caller overrides, as received in the request `config` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    #[serde(default)]
    pub organisation: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub spelling: Option<String>,
}

impl PresentationConfig {
    pub fn for_organisation(name: &str) -> Self {
        Self {
            organisation: Some(name.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spelling {
    Uk,
    Us,
}

impl Spelling {
    pub fn parse(raw: &str) -> Option<Spelling> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "UK" | "GB" | "EN-GB" => Some(Spelling::Uk),
            "US" | "EN-US" => Some(Spelling::Us),
            _ => None,
        }
    }

    /// Language tag written on every text run.
    pub fn lang(self) -> &'static str {
        match self {
            Spelling::Uk => "en-GB",
            Spelling::Us => "en-US",
        }
    }

    /// Applies the variant to a builder-supplied label.
    pub fn localise(self, label: &str) -> String {
        match self {
            Spelling::Uk => label.to_string(),
            Spelling::Us => label
                .replace("isation", "ization")
                .replace("colour", "color")
                .replace("programme", "program"),
        }
    }
}

/// Theme merged with caller overrides. Fixed for the lifetime of one deck.
#[derive(Debug, Clone)]
pub struct Style {
    pub theme: &'static Theme,
    pub palette: Palette,
    pub organisation: String,
    pub tagline: String,
    pub spelling: Spelling,
}

impl Style {
    pub fn resolve(theme: &'static Theme, config: &PresentationConfig) -> Result<Style, GenerationError> {
        let spelling = match config.spelling.as_deref() {
            None => Spelling::Uk,
            Some(raw) => Spelling::parse(raw).ok_or_else(|| {
                GenerationError::InvalidConfig(format!("spelling must be UK or US, got '{raw}'"))
            })?,
        };

        let mut palette = theme.palette.clone();
        if let Some(raw) = config.primary_color.as_deref() {
            palette.primary = Rgb::parse(raw).ok_or_else(|| {
                GenerationError::InvalidConfig(format!("primaryColor '{raw}' is not a 6-digit hex colour"))
            })?;
        }

        let organisation = non_blank(config.organisation.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| spelling.localise(theme.default_organisation));
        let tagline = non_blank(config.tagline.as_deref())
            .unwrap_or(theme.default_tagline)
            .to_string();

        Ok(Style {
            theme,
            palette,
            organisation,
            tagline,
            spelling,
        })
    }

    pub fn frame(&self) -> &Frame {
        &self.theme.frame
    }

    pub fn color(&self, role: ColorRole) -> &Rgb {
        self.palette.get(role)
    }

    /// A caller colour, resolved against this style's palette.
    pub fn paint(&self, spec: &ColorSpec) -> Rgb {
        match spec {
            ColorSpec::Role(role) => self.color(*role).clone(),
            ColorSpec::Hex(rgb) => rgb.clone(),
        }
    }

    pub fn text(&self, role: TextRole) -> TextStyle {
        let preset = self.theme.text(role);
        TextStyle::from_preset(preset, self.color(preset.color))
    }

    /// Footer text: the tagline, or the organisation name when none is set.
    pub fn tagline_text(&self) -> String {
        if self.tagline.is_empty() {
            self.organisation.to_uppercase()
        } else {
            self.tagline.clone()
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
