//! Rendered slide model handed to the document writer.
//!
//! A [`Deck`] only ever grows. Builders assemble a complete [`RenderedSlide`]
//! before pushing it, so a failed builder call never leaves a partial slide.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::layout::Rect;
use super::presentation::Style;
use super::slide::SlideKind;
use super::theme::{Rgb, TypePreset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Concrete run formatting, resolved from a theme preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub font: String,
    /// Points.
    pub size: f64,
    pub bold: bool,
    pub color: Rgb,
    /// Points.
    pub letter_spacing: f64,
}

impl TextStyle {
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: &Rgb) -> Self {
        self.color = color.clone();
        self
    }

    pub fn from_preset(preset: &TypePreset, color: &Rgb) -> Self {
        Self {
            font: preset.font.to_string(),
            size: preset.size,
            bold: preset.bold,
            color: color.clone(),
            letter_spacing: preset.letter_spacing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBox {
    pub rect: Rect,
    /// Newlines separate paragraphs.
    pub text: String,
    pub style: TextStyle,
    pub align: Align,
    pub valign: VAlign,
}

impl TextBox {
    pub fn new(rect: Rect, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            rect,
            text: text.into(),
            style,
            align: Align::Left,
            valign: VAlign::Top,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    Rect,
    Ellipse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    pub color: Rgb,
    /// Points.
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxShape {
    pub rect: Rect,
    pub geometry: Geometry,
    pub fill: Option<Rgb>,
    pub outline: Option<Outline>,
    /// Fill transparency, 0 (opaque) to 100.
    pub transparency: u8,
}

impl BoxShape {
    pub fn filled(rect: Rect, fill: &Rgb) -> Self {
        Self {
            rect,
            geometry: Geometry::Rect,
            fill: Some(fill.clone()),
            outline: None,
            transparency: 0,
        }
    }

    pub fn ellipse(rect: Rect, fill: &Rgb) -> Self {
        Self {
            geometry: Geometry::Ellipse,
            ..Self::filled(rect, fill)
        }
    }

    pub fn outlined(mut self, color: &Rgb, width: f64) -> Self {
        self.outline = Some(Outline { color: color.clone(), width });
        self
    }

    pub fn transparency(mut self, percent: u8) -> Self {
        self.transparency = percent.min(100);
        self
    }
}

/// Straight line from the rect's top-left to its bottom-right corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineShape {
    pub rect: Rect,
    pub color: Rgb,
    /// Points.
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub text: String,
    pub style: TextStyle,
    pub fill: Option<Rgb>,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableShape {
    pub rect: Rect,
    pub col_widths: Vec<f64>,
    pub row_height: f64,
    /// First row is the header.
    pub rows: Vec<Vec<TableCell>>,
    pub border: Option<Outline>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Text(TextBox),
    Box(BoxShape),
    Line(LineShape),
    Table(TableShape),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSlide {
    pub kind: SlideKind,
    pub background: Option<Rgb>,
    pub shapes: Vec<Shape>,
}

impl RenderedSlide {
    pub fn new(kind: SlideKind) -> Self {
        Self {
            kind,
            background: None,
            shapes: Vec::new(),
        }
    }

    pub fn with_background(mut self, color: &Rgb) -> Self {
        self.background = Some(color.clone());
        self
    }

    pub fn text(&mut self, text: TextBox) -> &mut Self {
        self.shapes.push(Shape::Text(text));
        self
    }

    pub fn shape(&mut self, shape: BoxShape) -> &mut Self {
        self.shapes.push(Shape::Box(shape));
        self
    }

    pub fn line(&mut self, rect: Rect, color: &Rgb, width: f64) -> &mut Self {
        self.shapes.push(Shape::Line(LineShape {
            rect,
            color: color.clone(),
            width,
        }));
        self
    }

    pub fn table(&mut self, table: TableShape) -> &mut Self {
        self.shapes.push(Shape::Table(table));
        self
    }

    /// Every piece of visible text on the slide, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for shape in &self.shapes {
            match shape {
                Shape::Text(t) => out.push(t.text.as_str()),
                Shape::Table(t) => out.extend(t.rows.iter().flatten().map(|c| c.text.as_str())),
                Shape::Box(_) | Shape::Line(_) => {}
            }
        }
        out
    }

    pub fn text_boxes(&self) -> impl Iterator<Item = &TextBox> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn boxes(&self) -> impl Iterator<Item = &BoxShape> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Box(b) => Some(b),
            _ => None,
        })
    }
}

/// Ordered, append-only slide sequence plus the style it was rendered with.
#[derive(Debug, Clone)]
pub struct Deck {
    style: Style,
    slides: Vec<RenderedSlide>,
    created: Option<DateTime<Utc>>,
}

impl Deck {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            slides: Vec::new(),
            created: None,
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Timestamp recorded in the document properties.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn stamp(&mut self, at: DateTime<Utc>) {
        self.created = Some(at);
    }

    pub fn push(&mut self, slide: RenderedSlide) -> &mut RenderedSlide {
        self.slides.push(slide);
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slides(&self) -> &[RenderedSlide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
