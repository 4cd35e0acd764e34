//! Brand furniture shared by the slide builders: titles, rules, accents,
//! taglines and page numbers.

use crate::models::deck::{Align, BoxShape, RenderedSlide, TextBox, VAlign};
use crate::models::layout::Rect;
use crate::models::presentation::Style;
use crate::models::theme::{Anchor, ColorRole, TextRole};

use super::SlideKind;

const HEADER_RULE_WIDTH: f64 = 0.5;
const PAGE_NUMBER_SIZE: f64 = 9.0;

/// White slide with the title in the theme's title slot.
pub fn titled(style: &Style, kind: SlideKind, title: &str) -> RenderedSlide {
    let frame = style.frame();
    let mut slide = RenderedSlide::new(kind).with_background(style.color(ColorRole::Background));
    slide.text(TextBox::new(frame.title, title, style.text(TextRole::SlideTitle)).valign(VAlign::Middle));

    if style.theme.decorations.header_rule {
        let y = frame.title.bottom();
        slide.line(
            Rect::new(frame.margin_x, y, frame.content_width, 0.0),
            style.color(ColorRole::Rule),
            HEADER_RULE_WIDTH,
        );
    }
    slide
}

/// Full-height bars down the left edge of the slide.
pub fn edge_accent(slide: &mut RenderedSlide, style: &Style) {
    let height = style.frame().height;
    slide
        .shape(BoxShape::filled(Rect::new(0.0, 0.0, 0.15, height), style.color(ColorRole::Primary)))
        .shape(BoxShape::filled(Rect::new(0.25, 0.0, 0.02, height), style.color(ColorRole::Accent)));
}

/// Tagline in the theme's usual position.
pub fn tagline(slide: &mut RenderedSlide, style: &Style) {
    let preset = style.theme.text(TextRole::Tagline);
    tagline_at(slide, style, style.theme.tagline_anchor, preset.color);
}

/// Tagline at an explicit anchor. Top-anchored taglines are right-aligned.
pub fn tagline_at(slide: &mut RenderedSlide, style: &Style, anchor: Anchor, color: ColorRole) {
    let frame = style.frame();
    let (rect, align) = match anchor {
        Anchor::Top => (frame.tagline_top, Align::Right),
        Anchor::Bottom => (frame.tagline_bottom, Align::Left),
    };
    let text_style = style.text(TextRole::Tagline).color(style.color(color));
    slide.text(
        TextBox::new(rect, style.tagline_text(), text_style)
            .align(align)
            .valign(VAlign::Middle),
    );
}

pub fn page_number(slide: &mut RenderedSlide, style: &Style, number: usize) {
    let text_style = style
        .text(TextRole::Caption)
        .size(PAGE_NUMBER_SIZE)
        .color(style.color(ColorRole::Rule));
    slide.text(TextBox::new(style.frame().page_number, number.to_string(), text_style).align(Align::Right));
}
