//! Rectangle geometry for slide content.
//!
//! All values are inches measured from the top-left corner of the slide.
//! Two strategies cover every slide kind: an even horizontal distribution
//! (metric cards, framework boxes, timeline phases) and a vertical stack
//! (numbered items, key messages, next steps). Both are pure functions of
//! the item count and the target region.

use serde::Serialize;

use super::error::LayoutError;

/// Smallest extent an item may shrink to before the layout is rejected.
const MIN_EXTENT: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w - 2.0 * dx, self.h - 2.0 * dy)
    }

    /// Same origin and width, new height.
    pub fn with_height(&self, h: f64) -> Self {
        Self::new(self.x, self.y, self.w, h)
    }

    /// A band of height `h` starting `dy` below this rectangle's top edge.
    pub fn band(&self, dy: f64, h: f64) -> Self {
        Self::new(self.x, self.y + dy, self.w, h)
    }

    /// Strict interior overlap; touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        const EPS: f64 = 1e-9;
        self.x + EPS < other.right()
            && other.x + EPS < self.right()
            && self.y + EPS < other.bottom()
            && other.y + EPS < self.bottom()
    }
}

/// Spacing rules for one distribution axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Fixed gap between neighbouring items.
    pub gap: f64,
    /// Upper bound on an item's extent along the axis. Without it items
    /// stretch to fill the region.
    pub max_extent: Option<f64>,
}

impl Track {
    pub const fn fill(gap: f64) -> Self {
        Self { gap, max_extent: None }
    }

    pub const fn capped(gap: f64, max_extent: f64) -> Self {
        Self { gap, max_extent: Some(max_extent) }
    }
}

/// Extent of each of `n` items sharing `span` under `track`.
fn fit(n: usize, span: f64, track: Track) -> Result<f64, LayoutError> {
    let gaps = track.gap * (n.saturating_sub(1)) as f64;
    let fitted = (span - gaps) / n as f64;
    let extent = match track.max_extent {
        Some(max) => fitted.min(max),
        None => fitted,
    };
    if !extent.is_finite() || extent < MIN_EXTENT {
        return Err(LayoutError::Degenerate {
            count: n,
            available: span,
            gap: track.gap,
        });
    }
    Ok(extent)
}

/// `n` equal-width boxes, left-aligned to `region.x`, each as tall as the region.
pub fn distribute_horizontal(n: usize, region: Rect, track: Track) -> Result<Vec<Rect>, LayoutError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let w = fit(n, region.w, track)?;
    Ok((0..n)
        .map(|i| Rect::new(region.x + i as f64 * (w + track.gap), region.y, w, region.h))
        .collect())
}

/// `n` equal-height rows, top-aligned to `region.y`, each as wide as the region.
pub fn stack_vertical(n: usize, region: Rect, track: Track) -> Result<Vec<Rect>, LayoutError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let h = fit(n, region.h, track)?;
    Ok((0..n)
        .map(|i| Rect::new(region.x, region.y + i as f64 * (h + track.gap), region.w, h))
        .collect())
}
