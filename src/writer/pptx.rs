use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::models::deck::Deck;

use super::{DocumentWriter, WriteError, parts, shapes};

/// Writes decks as PresentationML (`.pptx`) packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PptxWriter;

impl PptxWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_package<W: Write + std::io::Seek>(&self, deck: &Deck, zip: &mut ZipWriter<W>) -> Result<(), WriteError> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut part = |name: &str, body: String| -> Result<(), WriteError> {
            zip.start_file(name, options)?;
            zip.write_all(body.as_bytes())?;
            Ok(())
        };

        let count = deck.len();
        let created = deck.created().unwrap_or_else(Utc::now);
        let lang = deck.style().spelling.lang();

        part("[Content_Types].xml", parts::content_types(count)?)?;
        part("_rels/.rels", parts::root_rels()?)?;
        part("docProps/app.xml", parts::app_properties(deck)?)?;
        part("docProps/core.xml", parts::core_properties(deck, created)?)?;
        part("ppt/presentation.xml", parts::presentation(deck)?)?;
        part("ppt/_rels/presentation.xml.rels", parts::presentation_rels(count)?)?;
        part("ppt/slideMasters/slideMaster1.xml", parts::slide_master()?)?;
        part("ppt/slideMasters/_rels/slideMaster1.xml.rels", parts::slide_master_rels()?)?;
        part("ppt/slideLayouts/slideLayout1.xml", parts::slide_layout()?)?;
        part("ppt/slideLayouts/_rels/slideLayout1.xml.rels", parts::slide_layout_rels()?)?;
        part("ppt/theme/theme1.xml", parts::theme(deck)?)?;

        for (i, slide) in deck.slides().iter().enumerate() {
            let n = i + 1;
            part(&format!("ppt/slides/slide{n}.xml"), shapes::slide(slide, lang)?)?;
            part(&format!("ppt/slides/_rels/slide{n}.xml.rels"), parts::slide_rels()?)?;
        }
        Ok(())
    }
}

impl DocumentWriter for PptxWriter {
    fn serialize(&self, deck: &Deck, path: &Path) -> Result<(), WriteError> {
        let file = File::create(path)?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        self.write_package(deck, &mut zip)?;
        let mut out = zip.finish()?;
        out.flush()?;
        log::debug!("Wrote {} slides to {}", deck.len(), path.display());
        Ok(())
    }
}
