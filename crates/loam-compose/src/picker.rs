//! The picker strip: one slot per catalog pattern, plus hit testing.
//!
//! The strip is laid out on an intensity canvas with the same stamping
//! rules as the play grid, then shaded once through the active color
//! map. Geometry is driven entirely by the catalog's largest pattern:
//! every slot gets the same box so the strip reads as a row of uniform
//! tiles regardless of individual pattern sizes.

use smallvec::SmallVec;

use loam_core::{Anchor, Catalog, Raster};

use crate::color::ColorMap;
use crate::error::ComposeError;
use crate::image::Image;

/// Background intensity; renders just off-white after inversion.
const STRIP_BACKGROUND: f32 = 0.05;
/// Border intensity of the selected slot's highlight ring.
const HIGHLIGHT_BORDER: f32 = 0.5;
/// Rows added below the tallest pattern to set the strip height.
const STRIP_PADDING: u32 = 5;
/// Columns added to the widest pattern to set the slot pitch.
const SLOT_GAP: u32 = 4;

/// Horizontal pixel span owned by one slot, inclusive on both ends.
///
/// Adjacent spans deliberately share their boundary pixel; hit testing
/// resolves the tie in favour of the later slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// First strip-local x inside the span.
    pub start: u32,
    /// Last strip-local x inside the span (inclusive).
    pub end: u32,
}

/// A laid-out picker strip: the shaded image plus per-slot hit spans.
///
/// ```
/// use loam_compose::{ColorMap, Picker};
/// use loam_core::{Catalog, Pattern};
///
/// let mut catalog = Catalog::new();
/// catalog.insert(Pattern::parse("dot", &["#"]).unwrap()).unwrap();
/// catalog.insert(Pattern::parse("bar", &["###"]).unwrap()).unwrap();
/// let picker = Picker::layout(&catalog, 0, &ColorMap::bone(), 40).unwrap();
/// // Slot pitch is max_w + 4 = 7; x = 7 lies on both spans, later wins.
/// assert_eq!(picker.select_at(0), Some(0));
/// assert_eq!(picker.select_at(7), Some(1));
/// assert_eq!(picker.select_at(15), None);
/// ```
#[derive(Clone, Debug)]
pub struct Picker {
    image: Image,
    spans: SmallVec<[Span; 8]>,
}

impl Picker {
    /// Lays out and shades the strip for `catalog` at `width` pixels.
    ///
    /// `selected` gets a highlight ring around its slot; an out-of-range
    /// index renders every slot plain. Fails on an empty catalog or when
    /// a slot box cannot fit the strip.
    pub fn layout(
        catalog: &Catalog,
        selected: usize,
        map: &ColorMap,
        width: u32,
    ) -> Result<Self, ComposeError> {
        let (max_h, max_w) = catalog.max_extent().ok_or(ComposeError::EmptyCatalog)?;
        let mut canvas = Raster::filled(max_h + STRIP_PADDING, width, STRIP_BACKGROUND)?;

        let plain = Raster::filled(max_h + 2, max_w + 2, 0.0f32)?;
        let mut highlight = Raster::filled(max_h + 4, max_w + 4, HIGHLIGHT_BORDER)?;
        for r in 1..max_h + 3 {
            highlight.row_mut(r)[1..(max_w + 3) as usize].fill(0.0);
        }

        let pitch = max_w + SLOT_GAP;
        let row = (max_h / 2 + 2) as i32;
        let mut spans = SmallVec::new();
        for (i, pattern) in catalog.iter().enumerate() {
            let slot = i as u32;
            let col = (slot * pitch + max_w / 2 + 2) as i32;
            let frame = if i == selected { &highlight } else { &plain };
            canvas.stamp(frame, row, col, Anchor::Center)?;
            canvas.stamp(&pattern.intensity(), row, col, Anchor::Center)?;
            spans.push(Span {
                start: slot * pitch,
                end: (slot + 1) * pitch,
            });
        }

        Ok(Self {
            image: map.shade(&canvas),
            spans,
        })
    }

    /// The shaded strip, ready to stack under the play area.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Strip height in pixels (the tallest pattern plus padding).
    pub fn height(&self) -> u32 {
        self.image.rows()
    }

    /// Per-slot hit spans in selection order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Resolves a strip-local x to a slot, or `None` between and beyond
    /// slots. On the shared boundary pixel the later slot wins.
    pub fn select_at(&self, x: u32) -> Option<usize> {
        let mut hit = None;
        for (i, span) in self.spans.iter().enumerate() {
            if span.start <= x && x <= span.end {
                hit = Some(i);
            }
        }
        hit
    }
}
