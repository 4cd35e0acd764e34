use chrono::{DateTime, Utc};

use crate::models::deck::{Deck, RenderedSlide};
use crate::models::error::{GenerationError, SlideError};
use crate::models::slide::{self, SlideContent, chrome};
use crate::models::theme::{Brand, theme_for};
use crate::storage::{OutputDir, generate_filename};
use crate::writer::DocumentWriter;

use super::config::{PresentationConfig, Style};

/// Result of a successful [`PresentationBuilder::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct SavedDeck {
    pub filename: String,
    pub slide_count: usize,
    /// Bytes on disk.
    pub size: u64,
}

/// Owns one deck for one `(brand, config)` pair.
#[derive(Debug)]
pub struct PresentationBuilder {
    brand: Brand,
    deck: Deck,
}

impl PresentationBuilder {
    pub fn new(brand: Brand, config: &PresentationConfig) -> Result<Self, GenerationError> {
        let style = Style::resolve(theme_for(brand), config)?;
        Ok(Self {
            brand,
            deck: Deck::new(style),
        })
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn style(&self) -> &Style {
        self.deck.style()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    /// Render `content` and append it. On error the deck is unchanged.
    ///
    /// The returned slide may be decorated further by the caller.
    pub fn add(&mut self, content: &SlideContent) -> Result<&mut RenderedSlide, SlideError> {
        let kind = content.kind();
        if !kind.available_for(self.brand) {
            return Err(SlideError::UnsupportedKind(kind.name()));
        }

        let style = self.deck.style();
        let mut rendered = slide::render(style, content)?;
        if style.theme.decorations.page_numbers && kind.is_numbered() {
            chrome::page_number(&mut rendered, style, self.deck.len() + 1);
        }
        Ok(self.deck.push(rendered))
    }

    /// Serialize the deck into `out` under a fresh name. Consumes the builder.
    pub fn save(
        mut self,
        writer: &dyn DocumentWriter,
        out: &OutputDir,
        now: DateTime<Utc>,
    ) -> Result<SavedDeck, GenerationError> {
        let filename = generate_filename(self.brand, &self.deck.style().organisation, now);
        self.deck.stamp(now);

        let deck = &self.deck;
        let size = out.persist(&filename, |path| writer.serialize(deck, path))?;

        log::info!(
            "Saved {} ({} slides, {} bytes)",
            filename,
            deck.len(),
            size
        );
        Ok(SavedDeck {
            filename,
            slide_count: deck.len(),
            size,
        })
    }
}
