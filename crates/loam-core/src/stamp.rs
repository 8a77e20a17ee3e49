//! Stamping: copying one raster into another with edge clipping.
//!
//! A stamp overwrites a window of the destination with the full source,
//! dead cells included, so an all-zero source doubles as an eraser. The
//! clipping rules are deliberately asymmetric: a placement pushed past the
//! top or left edge snaps to a small inset, while one pushed past the
//! bottom or right edge clamps flush against it. Clamps are applied in
//! that order, so the flush clamp wins when both trigger.

use crate::error::StampError;
use crate::raster::Raster;

/// Rows/columns between the top-left edges and a placement that was
/// clipped there.
pub const EDGE_INSET: i32 = 2;

/// How a placement coordinate relates to the source raster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The coordinate is the source's top-left corner.
    TopLeft,
    /// The coordinate is the source's center; the top-left corner is
    /// `coordinate - extent / 2` per axis (flooring division).
    #[default]
    Center,
}

impl<T: Copy> Raster<T> {
    /// Copies `src` into `self` around `(row, col)`, clipping per the
    /// module rules.
    ///
    /// Rejects sources larger than `self` on either axis without writing
    /// anything; every smaller source lands fully inside the bounds.
    ///
    /// ```
    /// use loam_core::{Anchor, Raster};
    ///
    /// let mut dest = Raster::filled(8, 8, 0u8).unwrap();
    /// let src = Raster::filled(3, 3, 1u8).unwrap();
    /// // Centered over the corner: clipped to the inset, not the edge.
    /// dest.stamp(&src, 0, 0, Anchor::Center).unwrap();
    /// assert_eq!(dest.get(2, 2), Some(1));
    /// assert_eq!(dest.get(1, 1), Some(0));
    /// ```
    pub fn stamp(
        &mut self,
        src: &Raster<T>,
        row: i32,
        col: i32,
        anchor: Anchor,
    ) -> Result<(), StampError> {
        if src.rows() > self.rows() {
            return Err(StampError::OutOfRange {
                axis: "rows",
                source: src.rows(),
                dest: self.rows(),
            });
        }
        if src.cols() > self.cols() {
            return Err(StampError::OutOfRange {
                axis: "cols",
                source: src.cols(),
                dest: self.cols(),
            });
        }

        let top = clip_axis(row, src.rows(), self.rows(), anchor);
        let left = clip_axis(col, src.cols(), self.cols(), anchor);

        for r in 0..src.rows() {
            let dest_row = self.row_mut(top + r);
            let start = left as usize;
            dest_row[start..start + src.cols() as usize].copy_from_slice(src.row(r));
        }
        Ok(())
    }
}

/// Resolves one axis of a placement to its final in-bounds origin.
///
/// Caller has already established `extent <= len`, so the result of the
/// flush clamp is never negative.
fn clip_axis(coord: i32, extent: u32, len: u32, anchor: Anchor) -> u32 {
    let extent = i64::from(extent);
    let len = i64::from(len);
    let mut origin = i64::from(coord);
    if let Anchor::Center = anchor {
        origin -= extent / 2;
    }
    if origin < 0 {
        origin = i64::from(EDGE_INSET);
    }
    if origin + extent >= len {
        origin = len - extent;
    }
    origin as u32
}
