//! Slide part rendering: background, text boxes, preset shapes, connectors
//! and tables.

use std::fmt::{self, Write};

use crate::models::deck::{
    Align, BoxShape, Geometry, LineShape, Outline, RenderedSlide, Shape, TableCell, TableShape, TextBox,
    TextStyle, VAlign,
};
use crate::models::layout::Rect;
use crate::models::theme::Rgb;

use super::escape;
use super::parts::{NS_PML, XML_DECL};

const EMU_PER_INCH: f64 = 914_400.0;
const EMU_PER_POINT: f64 = 12_700.0;

/// Non-visual group properties every shape tree starts with.
pub(super) const GROUP_HEADER: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

pub(super) fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

fn line_width(points: f64) -> i64 {
    (points * EMU_PER_POINT).round() as i64
}

/// Writes one slide. Shape ids start at 2; id 1 is the group.
pub(super) fn slide(slide: &RenderedSlide, lang: &str) -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    write!(xml, "<p:sld {NS_PML}><p:cSld>")?;

    if let Some(color) = &slide.background {
        write!(
            xml,
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{color}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#
        )?;
    }

    xml.push_str("<p:spTree>");
    xml.push_str(GROUP_HEADER);
    for (i, shape) in slide.shapes.iter().enumerate() {
        let id = i + 2;
        match shape {
            Shape::Text(text) => text_box(&mut xml, id, text, lang)?,
            Shape::Box(shape) => preset_shape(&mut xml, id, shape)?,
            Shape::Line(line) => connector(&mut xml, id, line)?,
            Shape::Table(table) => graphic_table(&mut xml, id, table, lang)?,
        }
    }
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
    Ok(xml)
}

fn xfrm(xml: &mut String, tag: &str, attrs: &str, rect: &Rect) -> fmt::Result {
    write!(
        xml,
        r#"<{tag}{attrs}><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{tag}>"#,
        emu(rect.x),
        emu(rect.y),
        emu(rect.w.max(0.0)),
        emu(rect.h.max(0.0))
    )
}

fn solid_fill(xml: &mut String, color: &Rgb, transparency: u8) -> fmt::Result {
    if transparency == 0 {
        write!(xml, r#"<a:solidFill><a:srgbClr val="{color}"/></a:solidFill>"#)
    } else {
        let alpha = (100 - u32::from(transparency.min(100))) * 1000;
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{color}"><a:alpha val="{alpha}"/></a:srgbClr></a:solidFill>"#
        )
    }
}

fn outline(xml: &mut String, tag: &str, outline: Option<&Outline>) -> fmt::Result {
    match outline {
        Some(o) => {
            write!(xml, r#"<{tag} w="{}">"#, line_width(o.width))?;
            solid_fill(xml, &o.color, 0)?;
            write!(xml, "</{tag}>")
        }
        None => write!(xml, "<{tag}><a:noFill/></{tag}>"),
    }
}

fn run_properties(xml: &mut String, tag: &str, style: &TextStyle, lang: &str) -> fmt::Result {
    write!(xml, r#"<{tag} lang="{lang}" sz="{}""#, (style.size * 100.0).round() as i64)?;
    if style.bold {
        xml.push_str(r#" b="1""#);
    }
    if style.letter_spacing != 0.0 {
        write!(xml, r#" spc="{}""#, (style.letter_spacing * 100.0).round() as i64)?;
    }
    xml.push_str(r#" dirty="0">"#);
    solid_fill(xml, &style.color, 0)?;
    let face = escape(style.font.as_str());
    write!(xml, r#"<a:latin typeface="{face}"/><a:cs typeface="{face}"/>"#)?;
    write!(xml, "</{tag}>")
}

fn align_attr(align: Align) -> &'static str {
    match align {
        Align::Left => "l",
        Align::Center => "ctr",
        Align::Right => "r",
    }
}

fn anchor_attr(valign: VAlign) -> &'static str {
    match valign {
        VAlign::Top => "t",
        VAlign::Middle => "ctr",
        VAlign::Bottom => "b",
    }
}

/// One `a:p` per line of `text`; empty lines keep their formatting.
fn paragraphs(xml: &mut String, text: &str, style: &TextStyle, align: Align, lang: &str) -> fmt::Result {
    for line in text.split('\n') {
        write!(xml, r#"<a:p><a:pPr algn="{}"/>"#, align_attr(align))?;
        if line.is_empty() {
            run_properties(xml, "a:endParaRPr", style, lang)?;
        } else {
            xml.push_str("<a:r>");
            run_properties(xml, "a:rPr", style, lang)?;
            write!(xml, "<a:t>{}</a:t></a:r>", escape(line))?;
        }
        xml.push_str("</a:p>");
    }
    Ok(())
}

fn text_box(xml: &mut String, id: usize, text: &TextBox, lang: &str) -> fmt::Result {
    write!(
        xml,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>"#
    )?;
    xfrm(xml, "a:xfrm", "", &text.rect)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#);
    write!(
        xml,
        r#"<p:txBody><a:bodyPr wrap="square" lIns="91440" tIns="45720" rIns="91440" bIns="45720" anchor="{}" rtlCol="0"><a:noAutofit/></a:bodyPr><a:lstStyle/>"#,
        anchor_attr(text.valign)
    )?;
    paragraphs(xml, &text.text, &text.style, text.align, lang)?;
    xml.push_str("</p:txBody></p:sp>");
    Ok(())
}

fn preset_shape(xml: &mut String, id: usize, shape: &BoxShape) -> fmt::Result {
    let (preset, label) = match shape.geometry {
        Geometry::Rect => ("rect", "Rectangle"),
        Geometry::Ellipse => ("ellipse", "Oval"),
    };
    write!(
        xml,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{label} {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>"#
    )?;
    xfrm(xml, "a:xfrm", "", &shape.rect)?;
    write!(xml, r#"<a:prstGeom prst="{preset}"><a:avLst/></a:prstGeom>"#)?;
    match &shape.fill {
        Some(color) => solid_fill(xml, color, shape.transparency)?,
        None => xml.push_str("<a:noFill/>"),
    }
    outline(xml, "a:ln", shape.outline.as_ref())?;
    xml.push_str("</p:spPr></p:sp>");
    Ok(())
}

fn connector(xml: &mut String, id: usize, line: &LineShape) -> fmt::Result {
    let r = line.rect;
    let flip_h = if r.w < 0.0 { r#" flipH="1""# } else { "" };
    let flip_v = if r.h < 0.0 { r#" flipV="1""# } else { "" };
    let normalised = Rect::new(r.x.min(r.x + r.w), r.y.min(r.y + r.h), r.w.abs(), r.h.abs());

    write!(
        xml,
        r#"<p:cxnSp><p:nvCxnSpPr><p:cNvPr id="{id}" name="Connector {id}"/><p:cNvCxnSpPr/><p:nvPr/></p:nvCxnSpPr><p:spPr>"#
    )?;
    xfrm(xml, "a:xfrm", &format!("{flip_h}{flip_v}"), &normalised)?;
    xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
    outline(
        xml,
        "a:ln",
        Some(&Outline {
            color: line.color.clone(),
            width: line.width,
        }),
    )?;
    xml.push_str("</p:spPr></p:cxnSp>");
    Ok(())
}

fn table_cell(xml: &mut String, cell: &TableCell, border: Option<&Outline>, lang: &str) -> fmt::Result {
    xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
    paragraphs(xml, &cell.text, &cell.style, cell.align, lang)?;
    xml.push_str(r#"</a:txBody><a:tcPr anchor="ctr">"#);
    for edge in ["a:lnL", "a:lnR", "a:lnT", "a:lnB"] {
        outline(xml, edge, border)?;
    }
    match &cell.fill {
        Some(color) => solid_fill(xml, color, 0)?,
        None => xml.push_str("<a:noFill/>"),
    }
    xml.push_str("</a:tcPr></a:tc>");
    Ok(())
}

fn graphic_table(xml: &mut String, id: usize, table: &TableShape, lang: &str) -> fmt::Result {
    write!(
        xml,
        r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="{id}" name="Table {id}"/><p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr><p:nvPr/></p:nvGraphicFramePr>"#
    )?;
    xfrm(xml, "p:xfrm", "", &table.rect)?;
    xml.push_str(r#"<a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#);
    xml.push_str(r#"<a:tbl><a:tblPr firstRow="1"/><a:tblGrid>"#);
    for width in &table.col_widths {
        write!(xml, r#"<a:gridCol w="{}"/>"#, emu(*width))?;
    }
    xml.push_str("</a:tblGrid>");
    for row in &table.rows {
        write!(xml, r#"<a:tr h="{}">"#, emu(table.row_height))?;
        for cell in row {
            table_cell(xml, cell, table.border.as_ref(), lang)?;
        }
        xml.push_str("</a:tr>");
    }
    xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
    Ok(())
}
