/// Package-level checks on the PresentationML writer.

use serde_json::json;

use deckhand::models::dispatch::{DispatchPolicy, generate};
use deckhand::models::presentation::PresentationConfig;
use deckhand::writer::PptxWriter;

mod common;
use common::{fixed_now, instr, part_names, read_part, setup_output_dir};

#[test]
fn test_package_has_one_part_per_slide() {
    let (_dir, out) = setup_output_dir();
    let generated = generate(
        "investment",
        &PresentationConfig::for_organisation("Acme & Sons"),
        &[
            instr("createTitleSlide", json!(["Quarterly <Review>", "2024"])),
            instr("createKeyMessages", json!(["Takeaways", ["Margins up", "Costs down"]])),
            instr("createTableSlide", json!(["Returns", ["Fund", "IRR"], [["Alpha", "21%"]]])),
        ],
        DispatchPolicy::Strict,
        &PptxWriter::new(),
        &out,
        fixed_now(),
    )
    .expect("generate");
    let path = out.path().join(&generated.filename);

    let names = part_names(&path);
    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/theme/theme1.xml",
    ] {
        assert!(names.iter().any(|n| n == required), "missing {required}");
    }
    let slides = names
        .iter()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    assert_eq!(slides, 3);

    let title = read_part(&path, "ppt/slides/slide1.xml");
    assert!(title.contains("Quarterly &lt;Review&gt;"));
    assert!(title.contains("lang=\"en-GB\""));

    let messages = read_part(&path, "ppt/slides/slide2.xml");
    assert!(messages.contains("Margins up"));

    let table = read_part(&path, "ppt/slides/slide3.xml");
    assert!(table.contains("<a:tbl>"));
    assert!(table.contains("21%"));

    let core = read_part(&path, "docProps/core.xml");
    assert!(core.contains("2024-03-15T09:30:00Z"));
}

#[test]
fn test_slide_size_and_theme_follow_brand() {
    let (_dir, out) = setup_output_dir();
    let corporate = generate(
        "corporate",
        &PresentationConfig::default(),
        &[instr("createTitleSlide", json!(["a", "b"]))],
        DispatchPolicy::Strict,
        &PptxWriter::new(),
        &out,
        fixed_now(),
    )
    .expect("corporate");
    let investment = generate(
        "investment",
        &PresentationConfig::default(),
        &[instr("createTitleSlide", json!(["a", "b"]))],
        DispatchPolicy::Strict,
        &PptxWriter::new(),
        &out,
        fixed_now(),
    )
    .expect("investment");

    let corp_pres = read_part(&out.path().join(&corporate.filename), "ppt/presentation.xml");
    let inv_pres = read_part(&out.path().join(&investment.filename), "ppt/presentation.xml");
    // 10in x 5.625in and 13.333in x 7.5in
    assert!(corp_pres.contains("cx=\"9144000\" cy=\"5143500\""));
    assert!(inv_pres.contains("cy=\"6858000\""));

    let corp_theme = read_part(&out.path().join(&corporate.filename), "ppt/theme/theme1.xml");
    let inv_theme = read_part(&out.path().join(&investment.filename), "ppt/theme/theme1.xml");
    assert!(corp_theme.contains("003A70"));
    assert!(inv_theme.contains("FF6C2C"));
}

#[test]
fn test_control_characters_never_reach_the_package() {
    let (_dir, out) = setup_output_dir();
    let config = PresentationConfig {
        organisation: Some("Acme\u{0}Corp".to_string()),
        tagline: Some("bell\u{7}".to_string()),
        ..PresentationConfig::default()
    };
    let generated = generate(
        "corporate",
        &config,
        &[
            instr("createTitleSlide", json!(["a\u{1}b", "two\u{FFFF}"])),
            instr("createTableSlide", json!(["T", ["H\u{1F}"], [["\u{B}cell"]]])),
        ],
        DispatchPolicy::Strict,
        &PptxWriter::new(),
        &out,
        fixed_now(),
    )
    .expect("generate");
    let path = out.path().join(&generated.filename);

    let forbidden = |c: char| {
        matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
    };
    for part in part_names(&path) {
        let xml = read_part(&path, &part);
        assert!(!xml.chars().any(forbidden), "{part} carries a character XML forbids");
    }
    let title = read_part(&path, "ppt/slides/slide1.xml");
    assert!(title.contains("a\u{FFFD}b"));
}
