//! Package-level parts: content types, relationships, properties, the
//! presentation part, and the single master/layout/theme trio.

use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::deck::Deck;
use crate::models::theme::{ColorRole, TextRole};

use super::escape;
use super::shapes::{GROUP_HEADER, emu};

pub(super) const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
pub(super) const NS_PML: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
);

const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_OFFICE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CT_PML: &str = "application/vnd.openxmlformats-officedocument.presentationml";

/// Master ids must be at least 2^31.
const MASTER_ID: u32 = 2_147_483_648;
const LAYOUT_ID: u32 = 2_147_483_649;
const FIRST_SLIDE_ID: usize = 256;

pub(super) fn content_types(slide_count: usize) -> Result<String, std::fmt::Error> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    write!(xml, r#"<Override PartName="/ppt/presentation.xml" ContentType="{CT_PML}.presentation.main+xml"/>"#)?;
    write!(xml, r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="{CT_PML}.slideMaster+xml"/>"#)?;
    write!(xml, r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="{CT_PML}.slideLayout+xml"/>"#)?;
    xml.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    for n in 1..=slide_count {
        write!(xml, r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="{CT_PML}.slide+xml"/>"#)?;
    }
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#);
    xml.push_str("</Types>");
    Ok(xml)
}

/// `(id, type, target)` triples rendered as a relationships part.
fn relationships(rels: &[(String, String, String)]) -> Result<String, std::fmt::Error> {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECL);
    write!(xml, r#"<Relationships xmlns="{REL_NS}">"#)?;
    for (id, kind, target) in rels {
        write!(xml, r#"<Relationship Id="{id}" Type="{kind}" Target="{target}"/>"#)?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn rel(id: usize, kind: &str, target: impl Into<String>) -> (String, String, String) {
    (format!("rId{id}"), kind.to_string(), target.into())
}

pub(super) fn root_rels() -> Result<String, std::fmt::Error> {
    relationships(&[
        rel(1, &format!("{REL_OFFICE}/officeDocument"), "ppt/presentation.xml"),
        rel(
            2,
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            "docProps/core.xml",
        ),
        rel(3, &format!("{REL_OFFICE}/extended-properties"), "docProps/app.xml"),
    ])
}

pub(super) fn app_properties(deck: &Deck) -> Result<String, std::fmt::Error> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    write!(xml, "<Application>{}</Application>", env!("CARGO_PKG_NAME"))?;
    write!(xml, "<Slides>{}</Slides>", deck.len())?;
    write!(xml, "<Company>{}</Company>", escape(deck.style().organisation.as_str()))?;
    xml.push_str("</Properties>");
    Ok(xml)
}

pub(super) fn core_properties(deck: &Deck, created: DateTime<Utc>) -> Result<String, std::fmt::Error> {
    let style = deck.style();
    let stamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    write!(xml, "<dc:title>{} presentation</dc:title>", escape(style.theme.name))?;
    write!(xml, "<dc:subject>{}</dc:subject>", escape(style.tagline_text().as_str()))?;
    write!(xml, "<dc:creator>{}</dc:creator>", escape(style.organisation.as_str()))?;
    write!(xml, "<dc:language>{}</dc:language>", style.spelling.lang())?;
    write!(xml, r#"<dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created>"#)?;
    write!(xml, r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified>"#)?;
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

pub(super) fn presentation(deck: &Deck) -> Result<String, std::fmt::Error> {
    let frame = deck.style().frame();
    let mut xml = String::with_capacity(1024 + deck.len() * 48);
    xml.push_str(XML_DECL);
    write!(xml, r#"<p:presentation {NS_PML} saveSubsetFonts="1">"#)?;
    write!(
        xml,
        r#"<p:sldMasterIdLst><p:sldMasterId id="{MASTER_ID}" r:id="rId1"/></p:sldMasterIdLst>"#
    )?;
    if !deck.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for i in 0..deck.len() {
            write!(xml, r#"<p:sldId id="{}" r:id="rId{}"/>"#, FIRST_SLIDE_ID + i, i + 2)?;
        }
        xml.push_str("</p:sldIdLst>");
    }
    write!(xml, r#"<p:sldSz cx="{}" cy="{}"/>"#, emu(frame.width), emu(frame.height))?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

/// Master first, slides next, theme last.
pub(super) fn presentation_rels(slide_count: usize) -> Result<String, std::fmt::Error> {
    let mut rels = Vec::with_capacity(slide_count + 2);
    rels.push(rel(1, &format!("{REL_OFFICE}/slideMaster"), "slideMasters/slideMaster1.xml"));
    for n in 1..=slide_count {
        rels.push(rel(n + 1, &format!("{REL_OFFICE}/slide"), format!("slides/slide{n}.xml")));
    }
    rels.push(rel(slide_count + 2, &format!("{REL_OFFICE}/theme"), "theme/theme1.xml"));
    relationships(&rels)
}

pub(super) fn slide_master() -> Result<String, std::fmt::Error> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    write!(xml, "<p:sldMaster {NS_PML}>")?;
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    write!(xml, "<p:spTree>{GROUP_HEADER}</p:spTree></p:cSld>")?;
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    ));
    write!(
        xml,
        r#"<p:sldLayoutIdLst><p:sldLayoutId id="{LAYOUT_ID}" r:id="rId1"/></p:sldLayoutIdLst>"#
    )?;
    xml.push_str("<p:txStyles><p:titleStyle/><p:bodyStyle/><p:otherStyle/></p:txStyles>");
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

pub(super) fn slide_master_rels() -> Result<String, std::fmt::Error> {
    relationships(&[
        rel(1, &format!("{REL_OFFICE}/slideLayout"), "../slideLayouts/slideLayout1.xml"),
        rel(2, &format!("{REL_OFFICE}/theme"), "../theme/theme1.xml"),
    ])
}

pub(super) fn slide_layout() -> Result<String, std::fmt::Error> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    write!(xml, r#"<p:sldLayout {NS_PML} type="blank" preserve="1">"#)?;
    write!(xml, r#"<p:cSld name="Blank"><p:spTree>{GROUP_HEADER}</p:spTree></p:cSld>"#)?;
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>");
    Ok(xml)
}

pub(super) fn slide_layout_rels() -> Result<String, std::fmt::Error> {
    relationships(&[rel(1, &format!("{REL_OFFICE}/slideMaster"), "../slideMasters/slideMaster1.xml")])
}

pub(super) fn slide_rels() -> Result<String, std::fmt::Error> {
    relationships(&[rel(1, &format!("{REL_OFFICE}/slideLayout"), "../slideLayouts/slideLayout1.xml")])
}

/// Theme part carrying the deck's palette and heading/body fonts.
pub(super) fn theme(deck: &Deck) -> Result<String, std::fmt::Error> {
    let style = deck.style();
    let name = escape(style.theme.name);
    let scheme = [
        ("dk1", ColorRole::Text),
        ("lt1", ColorRole::Background),
        ("dk2", ColorRole::Secondary),
        ("lt2", ColorRole::Surface),
        ("accent1", ColorRole::Primary),
        ("accent2", ColorRole::Accent),
        ("accent3", ColorRole::Highlight),
        ("accent4", ColorRole::DataPositive),
        ("accent5", ColorRole::DataNegative),
        ("accent6", ColorRole::DataWarning),
        ("hlink", ColorRole::Primary),
        ("folHlink", ColorRole::Muted),
    ];

    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    write!(
        xml,
        r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="{name}"><a:themeElements>"#
    )?;

    write!(xml, r#"<a:clrScheme name="{name}">"#)?;
    for (slot, role) in scheme {
        write!(xml, r#"<a:{slot}><a:srgbClr val="{}"/></a:{slot}>"#, style.color(role))?;
    }
    xml.push_str("</a:clrScheme>");

    write!(xml, r#"<a:fontScheme name="{name}">"#)?;
    for (slot, role) in [("majorFont", TextRole::Title), ("minorFont", TextRole::Body)] {
        write!(
            xml,
            r#"<a:{slot}><a:latin typeface="{}"/><a:ea typeface=""/><a:cs typeface=""/></a:{slot}>"#,
            escape(style.theme.text(role).font)
        )?;
    }
    xml.push_str("</a:fontScheme>");

    const PH_FILL: &str = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    write!(xml, r#"<a:fmtScheme name="{name}"><a:fillStyleLst>"#)?;
    for _ in 0..3 {
        xml.push_str(PH_FILL);
    }
    xml.push_str("</a:fillStyleLst><a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        write!(xml, r#"<a:ln w="{width}">{PH_FILL}</a:ln>"#)?;
    }
    xml.push_str("</a:lnStyleLst><a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst><a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(PH_FILL);
    }
    xml.push_str("</a:bgFillStyleLst></a:fmtScheme>");

    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_rels_order() {
        let xml = presentation_rels(2).unwrap();
        assert!(xml.contains(r#"Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster""#));
        assert!(xml.contains(r#"Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide2.xml""#));
        assert!(xml.contains(r#"Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme""#));
    }

    #[test]
    fn test_content_types_lists_every_slide() {
        let xml = content_types(3).unwrap();
        assert_eq!(xml.matches("/ppt/slides/slide").count(), 3);
    }
}
