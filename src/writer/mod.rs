//! Document writers turn a rendered [`Deck`] into a file on disk.

mod parts;
mod pptx;
mod shapes;

use std::borrow::Cow;
use std::path::Path;

use thiserror::Error;

use crate::models::deck::Deck;

pub use pptx::PptxWriter;

/// File extension of everything the shipped writer produces.
pub const DECK_EXTENSION: &str = "pptx";

/// Media type served for downloaded decks.
pub const DECK_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to format document part")]
    Format(#[from] std::fmt::Error),
}

/// Persists a deck at a destination path.
///
/// Implementations must either write a complete file or return an error;
/// cleaning up a partial file is the caller's job.
pub trait DocumentWriter: Send + Sync {
    fn serialize(&self, deck: &Deck, path: &Path) -> Result<(), WriteError>;
}

/// Escape text for XML content or attribute values. Characters XML 1.0
/// cannot carry become U+FFFD.
pub(crate) fn escape(raw: &str) -> Cow<'_, str> {
    if raw.chars().all(is_xml_char) {
        return quick_xml::escape::escape(raw);
    }
    let cleaned: String = raw
        .chars()
        .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
        .collect();
    Cow::Owned(quick_xml::escape::escape(cleaned.as_str()).into_owned())
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}
