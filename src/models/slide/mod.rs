pub mod builders;
pub mod chrome;
pub mod content;

pub use builders::{MAX_FRAMEWORK_BOXES, MAX_METRICS, MAX_TIMELINE_PHASES, render};
pub use content::*;

use crate::models::theme::Brand;

const BOTH: &[Brand] = &[Brand::Corporate, Brand::Investment];
const INVESTMENT_ONLY: &[Brand] = &[Brand::Investment];

impl SlideKind {
    /// Brands whose decks may contain this kind.
    pub fn brands(self) -> &'static [Brand] {
        match self {
            SlideKind::SectionDivider | SlideKind::NumberedFramework | SlideKind::CaseStudy => INVESTMENT_ONLY,
            _ => BOTH,
        }
    }

    pub fn available_for(self, brand: Brand) -> bool {
        self.brands().contains(&brand)
    }

    /// Page numbers go on every slide except openers and dividers.
    pub fn is_numbered(self) -> bool {
        !matches!(self, SlideKind::Title | SlideKind::SectionDivider)
    }
}
