//! Caller-supplied content for each slide kind.
//!
//! These are the shapes positional `params` decode into. Field names follow
//! the JSON the generation endpoint accepts (camelCase).

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use crate::models::theme::ColorSpec;

/// Tag for every slide kind the builders know how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideKind {
    Title,
    Content,
    ExecutiveSummary,
    DataTable,
    Framework,
    NumberedFramework,
    Timeline,
    CaseStudy,
    KeyMessages,
    NextSteps,
    SectionDivider,
}

impl SlideKind {
    pub fn name(self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Content => "content",
            SlideKind::ExecutiveSummary => "executiveSummary",
            SlideKind::DataTable => "dataTable",
            SlideKind::Framework => "framework",
            SlideKind::NumberedFramework => "numberedFramework",
            SlideKind::Timeline => "timeline",
            SlideKind::CaseStudy => "caseStudy",
            SlideKind::KeyMessages => "keyMessages",
            SlideKind::NextSteps => "nextSteps",
            SlideKind::SectionDivider => "sectionDivider",
        }
    }
}

/// Text that may arrive as a JSON string or a bare number/bool.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn text_or_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(_) | Value::Object(_) => {
            Err(serde::de::Error::custom("expected text, found a list or object"))
        }
        scalar => Ok(display_text(&scalar)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleContent {
    pub line_one: String,
    pub line_two: String,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentSlide {
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metric {
    #[serde(deserialize_with = "text_or_scalar")]
    pub value: String,
    #[serde(deserialize_with = "text_or_scalar")]
    pub label: String,
    #[serde(default)]
    pub sublabel: Option<String>,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutiveSummary {
    pub title: String,
    pub metrics: Vec<Metric>,
}

/// A table cell: a plain scalar or an object with styling overrides.
#[derive(Debug, Clone, PartialEq)]
pub enum CellInput {
    Styled {
        value: Value,
        color: Option<ColorSpec>,
        bold: Option<bool>,
    },
    Plain(Value),
}

/// Objects are always styled cells; a bad override fails the cell instead of
/// turning the object into text.
impl<'de> Deserialize<'de> for CellInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(mut fields) => {
                let value = fields.remove("value").ok_or_else(|| de::Error::missing_field("value"))?;
                if matches!(value, Value::Array(_) | Value::Object(_)) {
                    return Err(de::Error::custom("cell value must be text, a number or a boolean"));
                }
                let color = match fields.remove("color") {
                    None | Some(Value::Null) => None,
                    Some(raw) => Some(ColorSpec::deserialize(raw).map_err(de::Error::custom)?),
                };
                let bold = match fields.remove("bold") {
                    None | Some(Value::Null) => None,
                    Some(Value::Bool(bold)) => Some(bold),
                    Some(other) => return Err(de::Error::custom(format!("bold must be true or false, got {other}"))),
                };
                Ok(CellInput::Styled { value, color, bold })
            }
            Value::Array(_) => Err(de::Error::custom("table cell must be a value or an object, found a list")),
            plain => Ok(CellInput::Plain(plain)),
        }
    }
}

impl CellInput {
    pub fn text(&self) -> String {
        match self {
            CellInput::Styled { value, .. } | CellInput::Plain(value) => display_text(value),
        }
    }

    pub fn color(&self) -> Option<&ColorSpec> {
        match self {
            CellInput::Styled { color, .. } => color.as_ref(),
            CellInput::Plain(_) => None,
        }
    }

    pub fn bold(&self) -> Option<bool> {
        match self {
            CellInput::Styled { bold, .. } => *bold,
            CellInput::Plain(_) => None,
        }
    }
}

impl From<&str> for CellInput {
    fn from(text: &str) -> Self {
        CellInput::Plain(Value::String(text.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    #[serde(default = "default_zebra")]
    pub zebra_stripe: bool,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub row_height: Option<f64>,
    #[serde(default)]
    pub header_color: Option<ColorSpec>,
}

fn default_zebra() -> bool {
    true
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            zebra_stripe: true,
            font_size: None,
            row_height: None,
            header_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellInput>>,
    pub options: TableOptions,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrameworkBox {
    pub title: String,
    #[serde(alias = "body")]
    pub content: String,
    #[serde(default)]
    pub color: Option<ColorSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Framework {
    pub title: String,
    pub boxes: Vec<FrameworkBox>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NumberedItem {
    pub header: String,
    #[serde(alias = "body")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberedFramework {
    pub title: String,
    pub items: Vec<NumberedItem>,
    pub closing_stat: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Phase {
    pub period: String,
    pub title: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub color: Option<ColorSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub title: String,
    pub phases: Vec<Phase>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    #[serde(deserialize_with = "text_or_scalar")]
    pub date: String,
    #[serde(deserialize_with = "text_or_scalar")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaseData {
    pub company: String,
    pub entry: Milestone,
    pub exit: Milestone,
    #[serde(rename = "return", alias = "returnMultiple", deserialize_with = "text_or_scalar")]
    pub return_multiple: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStudy {
    pub title: String,
    pub case: CaseData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMessages {
    pub title: String,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    pub phase: String,
    pub action: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub timing: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NextSteps {
    pub title: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDivider {
    pub heading: String,
}

/// Semantic content of one slide, one case per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideContent {
    Title(TitleContent),
    Content(ContentSlide),
    ExecutiveSummary(ExecutiveSummary),
    DataTable(DataTable),
    Framework(Framework),
    NumberedFramework(NumberedFramework),
    Timeline(Timeline),
    CaseStudy(CaseStudy),
    KeyMessages(KeyMessages),
    NextSteps(NextSteps),
    SectionDivider(SectionDivider),
}

impl SlideContent {
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideContent::Title(_) => SlideKind::Title,
            SlideContent::Content(_) => SlideKind::Content,
            SlideContent::ExecutiveSummary(_) => SlideKind::ExecutiveSummary,
            SlideContent::DataTable(_) => SlideKind::DataTable,
            SlideContent::Framework(_) => SlideKind::Framework,
            SlideContent::NumberedFramework(_) => SlideKind::NumberedFramework,
            SlideContent::Timeline(_) => SlideKind::Timeline,
            SlideContent::CaseStudy(_) => SlideKind::CaseStudy,
            SlideContent::KeyMessages(_) => SlideKind::KeyMessages,
            SlideContent::NextSteps(_) => SlideKind::NextSteps,
            SlideContent::SectionDivider(_) => SlideKind::SectionDivider,
        }
    }
}
