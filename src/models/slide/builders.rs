//! One pure function per slide kind.
//!
//! Every builder reads colours and type from the [`Style`] and geometry from
//! the theme frame, so the same content renders in either brand. Builders
//! return a finished slide or an error; they never touch the deck.

use crate::models::deck::{
    Align, BoxShape, Outline, RenderedSlide, TableCell, TableShape, TextBox, VAlign,
};
use crate::models::error::SlideError;
use crate::models::layout::{Rect, Track, distribute_horizontal, stack_vertical};
use crate::models::presentation::Style;
use crate::models::theme::{Anchor, ColorRole, TextRole};

use super::chrome;
use super::content::*;

/// Metric cards beyond this count are dropped, first ones kept.
pub const MAX_METRICS: usize = 3;
/// Framework boxes beyond this count are dropped, first ones kept.
pub const MAX_FRAMEWORK_BOXES: usize = 3;
/// Timeline phases beyond this count are dropped, first ones kept.
pub const MAX_TIMELINE_PHASES: usize = 6;

pub fn render(style: &Style, content: &SlideContent) -> Result<RenderedSlide, SlideError> {
    match content {
        SlideContent::Title(c) => Ok(title(style, c)),
        SlideContent::Content(c) => content_slide(style, c),
        SlideContent::ExecutiveSummary(c) => executive_summary(style, c),
        SlideContent::DataTable(c) => data_table(style, c),
        SlideContent::Framework(c) => framework(style, c),
        SlideContent::NumberedFramework(c) => numbered_framework(style, c),
        SlideContent::Timeline(c) => timeline(style, c),
        SlideContent::CaseStudy(c) => Ok(case_study(style, c)),
        SlideContent::KeyMessages(c) => key_messages(style, c),
        SlideContent::NextSteps(c) => next_steps(style, c),
        SlideContent::SectionDivider(c) => Ok(section_divider(style, c)),
    }
}

pub fn title(style: &Style, content: &TitleContent) -> RenderedSlide {
    let frame = style.frame();
    let hero = frame.hero;
    let mut slide = RenderedSlide::new(SlideKind::Title).with_background(style.color(ColorRole::Background));

    if style.theme.decorations.edge_accent {
        chrome::edge_accent(&mut slide, style);
    }

    slide
        .text(TextBox::new(hero.band(0.0, 0.6), &content.line_one, style.text(TextRole::Title)))
        .text(TextBox::new(hero.band(0.65, 0.6), &content.line_two, style.text(TextRole::Title)));

    if style.theme.decorations.edge_accent {
        slide.line(
            Rect::new(hero.x, hero.bottom() + 0.1, 3.0, 0.0),
            style.color(ColorRole::Accent),
            1.5,
        );
    }

    if let Some(subtitle) = content.subtitle.as_deref().filter(|s| !s.is_empty()) {
        slide.text(TextBox::new(
            hero.band(hero.h + 0.3, 0.4),
            subtitle,
            style.text(TextRole::Subheading),
        ));
    }

    chrome::tagline(&mut slide, style);
    slide
}

pub fn content_slide(style: &Style, content: &ContentSlide) -> Result<RenderedSlide, SlideError> {
    let body = style.frame().body;
    let mut slide = chrome::titled(style, SlideKind::Content, &content.title);

    let rows = stack_vertical(content.bullets.len(), body, Track::capped(0.1, 0.5))?;
    for (rect, bullet) in rows.into_iter().zip(&content.bullets) {
        slide.text(TextBox::new(rect, format!("\u{2022} {bullet}"), style.text(TextRole::Body)).valign(VAlign::Middle));
    }

    chrome::tagline(&mut slide, style);
    Ok(slide)
}

pub fn executive_summary(style: &Style, content: &ExecutiveSummary) -> Result<RenderedSlide, SlideError> {
    let frame = style.frame();
    let mut slide = chrome::titled(style, SlideKind::ExecutiveSummary, &content.title);

    let metrics = &content.metrics[..content.metrics.len().min(MAX_METRICS)];
    let region = frame.body.band(0.2, frame.card_height);
    let cards = distribute_horizontal(metrics.len(), region, Track::capped(frame.gap, frame.card_width))?;

    for (card, metric) in cards.into_iter().zip(metrics) {
        let accent = if metric.highlight { ColorRole::Highlight } else { ColorRole::Accent };
        slide
            .shape(BoxShape::filled(card, style.color(ColorRole::Surface)))
            .shape(BoxShape::filled(card.with_height(0.03), style.color(accent)));

        let mut value_style = style.text(TextRole::DataLarge);
        if metric.highlight {
            value_style = value_style.color(style.color(ColorRole::Highlight));
        }
        slide
            .text(TextBox::new(card.band(0.25, 0.6), &metric.value, value_style).align(Align::Center))
            .text(
                TextBox::new(card.band(0.9, 0.3), &metric.label, style.text(TextRole::Heading))
                    .align(Align::Center),
            );
        if let Some(sublabel) = &metric.sublabel {
            slide.text(
                TextBox::new(card.band(1.2, 0.25), sublabel, style.text(TextRole::Caption)).align(Align::Center),
            );
        }
    }

    chrome::tagline(&mut slide, style);
    Ok(slide)
}

pub fn data_table(style: &Style, content: &DataTable) -> Result<RenderedSlide, SlideError> {
    let columns = content.headers.len();
    if columns == 0 {
        return Err(SlideError::MalformedTable("table has no header cells".to_string()));
    }
    if let Some((i, row)) = content.rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
        return Err(SlideError::MalformedTable(format!(
            "row {i} has {} cells, header has {columns}",
            row.len()
        )));
    }

    let frame = style.frame();
    let options = &content.options;
    let font_size = options.font_size.unwrap_or(frame.table_font_size);
    let row_height = options.row_height.unwrap_or(frame.table_row_height);
    let header_fill = match &options.header_color {
        Some(spec) => style.paint(spec),
        None => style.color(ColorRole::Primary).clone(),
    };
    let body_text = style.text(TextRole::Body).size(font_size);

    let mut rows = Vec::with_capacity(content.rows.len() + 1);
    rows.push(
        content
            .headers
            .iter()
            .map(|h| TableCell {
                text: h.clone(),
                style: body_text.clone().bold(true).color(style.color(ColorRole::OnPrimary)),
                fill: Some(header_fill.clone()),
                align: Align::Center,
            })
            .collect(),
    );
    for (i, row) in content.rows.iter().enumerate() {
        let fill = if options.zebra_stripe && i % 2 == 0 {
            style.color(ColorRole::Surface)
        } else {
            style.color(ColorRole::Background)
        };
        rows.push(
            row.iter()
                .map(|cell| {
                    let mut text_style = body_text.clone();
                    if let Some(spec) = cell.color() {
                        text_style = text_style.color(&style.paint(spec));
                    }
                    if let Some(bold) = cell.bold() {
                        text_style = text_style.bold(bold);
                    }
                    TableCell {
                        text: cell.text(),
                        style: text_style,
                        fill: Some(fill.clone()),
                        align: Align::Center,
                    }
                })
                .collect(),
        );
    }

    let rect = frame.body.with_height(row_height * rows.len() as f64);
    let mut slide = chrome::titled(style, SlideKind::DataTable, &content.title);
    slide.table(TableShape {
        rect,
        col_widths: vec![rect.w / columns as f64; columns],
        row_height,
        rows,
        border: Some(Outline {
            color: style.color(ColorRole::Rule).clone(),
            width: 0.5,
        }),
    });
    chrome::tagline(&mut slide, style);
    Ok(slide)
}

pub fn framework(style: &Style, content: &Framework) -> Result<RenderedSlide, SlideError> {
    let frame = style.frame();
    let mut slide = chrome::titled(style, SlideKind::Framework, &content.title);

    let boxes = &content.boxes[..content.boxes.len().min(MAX_FRAMEWORK_BOXES)];
    let region = frame.body.with_height(frame.panel_height);
    let slots = MAX_FRAMEWORK_BOXES as f64;
    let box_width = (region.w - frame.gap * (slots - 1.0)) / slots;
    let rects = distribute_horizontal(boxes.len(), region, Track::capped(frame.gap, box_width))?;

    for (rect, item) in rects.into_iter().zip(boxes) {
        let bar = match &item.color {
            Some(spec) => style.paint(spec),
            None => style.color(ColorRole::Primary).clone(),
        };
        slide
            .shape(BoxShape::filled(rect, style.color(ColorRole::Surface)).outlined(style.color(ColorRole::Rule), 1.0))
            .shape(BoxShape::filled(rect.with_height(0.1), &bar))
            .text(TextBox::new(
                Rect::new(rect.x + 0.2, rect.y + 0.3, rect.w - 0.4, 0.4),
                &item.title,
                style.text(TextRole::Heading).color(&bar),
            ))
            .text(TextBox::new(
                Rect::new(rect.x + 0.2, rect.y + 0.8, rect.w - 0.4, rect.h - 1.0),
                &item.content,
                style.text(TextRole::Body),
            ));
    }

    chrome::tagline(&mut slide, style);
    Ok(slide)
}

pub fn numbered_framework(style: &Style, content: &NumberedFramework) -> Result<RenderedSlide, SlideError> {
    let body = style.frame().body;
    let mut slide = chrome::titled(style, SlideKind::NumberedFramework, &content.title);

    let closing = content.closing_stat.as_deref().filter(|s| !s.is_empty());
    let region = match closing {
        Some(_) => body.with_height(body.h - 0.6),
        None => body,
    };
    let rows = stack_vertical(content.items.len(), region, Track::capped(0.1, 0.9))?;

    for (i, (row, item)) in rows.into_iter().zip(&content.items).enumerate() {
        let d = row.h.min(0.5);
        let badge = Rect::new(row.x, row.y, d, d);
        let text_x = row.x + 0.7;
        let text_w = row.w - 0.7;
        slide
            .shape(BoxShape::ellipse(badge, style.color(ColorRole::Primary)))
            .text(
                TextBox::new(
                    badge,
                    format!("{:02}", i + 1),
                    style.text(TextRole::Subheading).color(style.color(ColorRole::OnPrimary)).bold(true),
                )
                .align(Align::Center)
                .valign(VAlign::Middle),
            )
            .text(TextBox::new(
                Rect::new(text_x, row.y, text_w, row.h * 0.35),
                &item.header,
                style.text(TextRole::Heading),
            ))
            .text(TextBox::new(
                Rect::new(text_x, row.y + row.h * 0.4, text_w, row.h * 0.6),
                &item.content,
                style.text(TextRole::Body),
            ));
    }

    if let Some(stat) = closing {
        slide.text(
            TextBox::new(
                body.band(body.h - 0.5, 0.5),
                stat,
                style.text(TextRole::Subheading).color(style.color(ColorRole::Primary)),
            )
            .align(Align::Center),
        );
    }

    chrome::tagline(&mut slide, style);
    Ok(slide)
}

pub fn timeline(style: &Style, content: &Timeline) -> Result<RenderedSlide, SlideError> {
    let frame = style.frame();
    let mut slide = chrome::titled(style, SlideKind::Timeline, &content.title);

    let phases = &content.phases[..content.phases.len().min(MAX_TIMELINE_PHASES)];
    let region = frame.body.band(0.2, frame.panel_height);
    let columns = distribute_horizontal(phases.len(), region, Track::fill(frame.gap))?;

    for (i, (col, phase)) in columns.iter().zip(phases).enumerate() {
        let color = match &phase.color {
            Some(spec) => style.paint(spec),
            None => style.color(ColorRole::Primary).clone(),
        };
        let dot_y = col.y + 0.4;

        slide.text(
            TextBox::new(col.with_height(0.3), &phase.period, style.text(TextRole::Caption)).align(Align::Center),
        );
        slide.shape(BoxShape::ellipse(Rect::new(col.center_x() - 0.1, dot_y, 0.2, 0.2), &color));
        if let Some(next) = columns.get(i + 1) {
            let from = col.center_x() + 0.1;
            slide.line(
                Rect::new(from, dot_y + 0.1, next.center_x() - 0.1 - from, 0.0),
                style.color(ColorRole::Rule),
                1.0,
            );
        }
        slide.text(
            TextBox::new(col.band(0.75, 0.4), &phase.title, style.text(TextRole::Subheading).color(&color))
                .align(Align::Center),
        );
        if let Some(details) = &phase.details {
            slide.text(
                TextBox::new(col.band(1.2, col.h - 1.2), details, style.text(TextRole::Caption))
                    .align(Align::Center),
            );
        }
    }

    chrome::tagline(&mut slide, style);
    Ok(slide)
}

pub fn case_study(style: &Style, content: &CaseStudy) -> RenderedSlide {
    let body = style.frame().body;
    let case = &content.case;
    let spelling = style.spelling;
    let mut slide = chrome::titled(style, SlideKind::CaseStudy, &content.title);

    slide.text(TextBox::new(
        body.with_height(0.5),
        &case.company,
        style.text(TextRole::SectionTitle).color(style.color(ColorRole::Primary)).bold(true),
    ));

    let bar_y = body.y + 0.7;
    slide.shape(BoxShape::filled(
        Rect::new(body.x, bar_y, body.w, 0.05),
        style.color(ColorRole::Primary),
    ));

    let column_w = (body.w / 3.0).min(4.0);
    let milestones = [
        (body.x, Align::Left, "Entry", &case.entry, ColorRole::Text),
        (body.right() - column_w, Align::Right, "Exit", &case.exit, ColorRole::DataPositive),
    ];
    for (x, align, label, milestone, value_color) in milestones {
        slide
            .text(
                TextBox::new(
                    Rect::new(x, bar_y + 0.2, column_w, 0.3),
                    spelling.localise(label),
                    style.text(TextRole::Caption),
                )
                .align(align),
            )
            .text(
                TextBox::new(
                    Rect::new(x, bar_y + 0.5, column_w, 0.3),
                    &milestone.date,
                    style.text(TextRole::Body).bold(true),
                )
                .align(align),
            )
            .text(
                TextBox::new(
                    Rect::new(x, bar_y + 0.85, column_w, 0.35),
                    &milestone.value,
                    style.text(TextRole::DataSmall).color(style.color(value_color)),
                )
                .align(align),
            );
    }

    let multiple_w = 3.33;
    slide.text(
        TextBox::new(
            Rect::new(body.center_x() - multiple_w / 2.0, bar_y + 0.5, multiple_w, 0.7),
            &case.return_multiple,
            style.text(TextRole::DataLarge).color(style.color(ColorRole::Primary)),
        )
        .align(Align::Center)
        .valign(VAlign::Middle),
    );

    let heading_y = bar_y + 1.7;
    slide.text(TextBox::new(
        Rect::new(body.x, heading_y, body.w, 0.3),
        spelling.localise("Key Achievements"),
        style.text(TextRole::Heading),
    ));
    let list_y = heading_y + 0.4;
    slide.text(TextBox::new(
        Rect::new(body.x, list_y, body.w, body.bottom() - list_y),
        case.achievements.join("\n"),
        style.text(TextRole::Body),
    ));

    chrome::tagline(&mut slide, style);
    slide
}

pub fn key_messages(style: &Style, content: &KeyMessages) -> Result<RenderedSlide, SlideError> {
    if style.theme.decorations.full_bleed_key_messages {
        full_bleed_key_messages(style, content)
    } else {
        listed_key_messages(style, content)
    }
}

/// Messages on a primary-coloured background; the tagline moves to the
/// opposite anchor.
fn full_bleed_key_messages(style: &Style, content: &KeyMessages) -> Result<RenderedSlide, SlideError> {
    let frame = style.frame();
    let mut slide = RenderedSlide::new(SlideKind::KeyMessages).with_background(style.color(ColorRole::Primary));

    let stripe_x = frame.width - 1.5;
    for i in 0..5u8 {
        slide.shape(
            BoxShape::filled(
                Rect::new(stripe_x + f64::from(i) * 0.3, 0.0, 0.02, frame.height),
                style.color(ColorRole::Accent),
            )
            .transparency(50 - i * 10),
        );
    }

    slide.text(TextBox::new(
        Rect::new(1.0, 0.8, 6.0, 0.6),
        &content.title,
        style.text(TextRole::Title).size(36.0).color(style.color(ColorRole::Accent)),
    ));

    let region = Rect::new(1.0, 1.8, stripe_x - 1.3, frame.body.bottom() - 1.8);
    let rows = stack_vertical(content.messages.len(), region, Track::capped(0.1, 0.5))?;
    for (i, (row, message)) in rows.into_iter().zip(&content.messages).enumerate() {
        slide
            .text(
                TextBox::new(
                    Rect::new(row.x, row.y, 0.5, row.h),
                    (i + 1).to_string(),
                    style.text(TextRole::DataSmall).bold(false).size(24.0).color(style.color(ColorRole::Highlight)),
                )
                .align(Align::Center)
                .valign(VAlign::Middle),
            )
            .text(
                TextBox::new(
                    Rect::new(row.x + 0.6, row.y, row.w - 0.6, row.h),
                    message,
                    style.text(TextRole::Body).size(18.0).color(style.color(ColorRole::OnPrimary)),
                )
                .valign(VAlign::Middle),
            );
    }

    chrome::tagline_at(&mut slide, style, style.theme.tagline_anchor.flipped(), ColorRole::OnPrimary);
    Ok(slide)
}

fn listed_key_messages(style: &Style, content: &KeyMessages) -> Result<RenderedSlide, SlideError> {
    let body = style.frame().body;
    let mut slide = chrome::titled(style, SlideKind::KeyMessages, &content.title);

    let rows = stack_vertical(content.messages.len(), body, Track::capped(0.2, 1.0))?;
    for (i, (row, message)) in rows.into_iter().zip(&content.messages).enumerate() {
        slide
            .text(TextBox::new(
                Rect::new(row.x, row.y, 0.5, row.h.min(0.4)),
                format!("{}.", i + 1),
                style.text(TextRole::Heading).color(style.color(ColorRole::Primary)),
            ))
            .text(TextBox::new(
                Rect::new(row.x + 0.6, row.y, row.w - 0.6, row.h),
                message,
                style.text(TextRole::Body),
            ));
    }

    chrome::tagline(&mut slide, style);
    Ok(slide)
}

pub fn next_steps(style: &Style, content: &NextSteps) -> Result<RenderedSlide, SlideError> {
    let body = style.frame().body;
    let mut slide = chrome::titled(style, SlideKind::NextSteps, &content.title);

    let region = body.band(0.2, body.h - 0.2);
    let rows = stack_vertical(content.steps.len(), region, Track::capped(0.3, 0.6))?;
    let phase_w = (region.w * 0.25).min(3.0);
    let meta_w = (region.w * 0.22).min(2.8);
    let action_x = region.x + phase_w + 0.3;
    let action_w = region.right() - meta_w - 0.2 - action_x;

    for (row, step) in rows.into_iter().zip(&content.steps) {
        let bar = Rect::new(row.x, row.y, phase_w, row.h);
        slide
            .shape(BoxShape::filled(bar, style.color(ColorRole::Primary)))
            .text(
                TextBox::new(
                    bar.inset(0.2, 0.0),
                    &step.phase,
                    style.text(TextRole::Body).bold(true).color(style.color(ColorRole::OnPrimary)),
                )
                .valign(VAlign::Middle),
            )
            .text(
                TextBox::new(Rect::new(action_x, row.y, action_w, row.h), &step.action, style.text(TextRole::Body))
                    .valign(VAlign::Middle),
            );

        let meta = step_meta(step);
        if !meta.is_empty() {
            slide.text(
                TextBox::new(Rect::new(row.right() - meta_w, row.y, meta_w, row.h), meta, style.text(TextRole::Caption))
                    .align(Align::Right)
                    .valign(VAlign::Middle),
            );
        }
    }

    chrome::tagline(&mut slide, style);
    Ok(slide)
}

fn step_meta(step: &Step) -> String {
    match (step.owner.trim(), step.timing.trim()) {
        ("", "") => String::new(),
        (owner, "") => owner.to_string(),
        ("", timing) => timing.to_string(),
        (owner, timing) => format!("{owner} | {timing}"),
    }
}

/// Section heading with the tagline moved to the opposite anchor.
pub fn section_divider(style: &Style, content: &SectionDivider) -> RenderedSlide {
    let frame = style.frame();
    let mut slide = RenderedSlide::new(SlideKind::SectionDivider).with_background(style.color(ColorRole::Background));

    let heading = Rect::new(1.0, frame.height * 0.4, frame.width - 2.0, 1.5);
    slide
        .shape(BoxShape::filled(
            Rect::new(1.0, heading.y - 0.2, 1.0, 0.08),
            style.color(ColorRole::Primary),
        ))
        .text(TextBox::new(heading, &content.heading, style.text(TextRole::SectionTitle)).valign(VAlign::Middle));

    let anchor: Anchor = style.theme.tagline_anchor.flipped();
    chrome::tagline_at(&mut slide, style, anchor, ColorRole::Primary);
    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::presentation::PresentationConfig;
    use crate::models::theme::{Brand, theme_for};

    fn style(brand: Brand) -> Style {
        Style::resolve(theme_for(brand), &PresentationConfig::for_organisation("Acme")).unwrap()
    }

    #[test]
    fn test_step_meta_skips_blank_parts() {
        let step = |owner: &str, timing: &str| Step {
            phase: "P".into(),
            action: "A".into(),
            owner: owner.into(),
            timing: timing.into(),
        };
        assert_eq!(step_meta(&step("CFO", "Q1")), "CFO | Q1");
        assert_eq!(step_meta(&step("CFO", "")), "CFO");
        assert_eq!(step_meta(&step("", "")), "");
    }

    #[test]
    fn test_framework_boxes_keep_three_slot_width() {
        let style = style(Brand::Investment);
        let one = Framework {
            title: "F".into(),
            boxes: vec![FrameworkBox {
                title: "Only".into(),
                content: "Body".into(),
                color: None,
            }],
        };
        let slide = framework(&style, &one).unwrap();
        let panel = slide.boxes().next().unwrap();
        assert!(panel.rect.w < style.frame().content_width / 2.0);
    }

    #[test]
    fn test_section_divider_tagline_opposite_anchor() {
        let style = style(Brand::Investment);
        let slide = section_divider(&style, &SectionDivider { heading: "Part two".into() });
        let tagline = slide.text_boxes().last().unwrap();
        assert_eq!(tagline.rect, style.frame().tagline_top);
    }
}
