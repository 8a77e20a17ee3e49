//! Dense row-major 2D buffers.
//!
//! Every surface in the workspace is a [`Raster`]: the cell grid and its
//! double buffer (`u8`), the trail and picker canvases (`f32`), and pattern
//! bitmaps (`u8`). Dimensions are validated once at construction so that
//! coordinate arithmetic elsewhere can use plain `i32`/`u32` without
//! re-checking.

use crate::error::GridError;

/// Maximum extent of either raster axis.
///
/// Bounded so signed placement arithmetic cannot overflow `i32`.
pub const MAX_DIM: u32 = i32::MAX as u32;

/// A dense row-major 2D buffer with fixed dimensions.
///
/// ```
/// use loam_core::Raster;
///
/// let mut r = Raster::filled(2, 3, 0u8).unwrap();
/// r.row_mut(1)[2] = 7;
/// assert_eq!(r.get(1, 2), Some(7));
/// assert_eq!(r.get(2, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    rows: u32,
    cols: u32,
    data: Vec<T>,
}

fn validate_extent(axis: &'static str, extent: u32) -> Result<(), GridError> {
    if extent == 0 {
        return Err(GridError::Empty { axis });
    }
    if extent > MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            axis,
            extent,
            max: MAX_DIM,
        });
    }
    Ok(())
}

impl<T: Copy> Raster<T> {
    /// Creates a `rows x cols` raster with every element set to `value`.
    pub fn filled(rows: u32, cols: u32, value: T) -> Result<Self, GridError> {
        validate_extent("rows", rows)?;
        validate_extent("cols", cols)?;
        let data = vec![value; rows as usize * cols as usize];
        Ok(Self { rows, cols, data })
    }

    /// Wraps an existing row-major buffer.
    ///
    /// `data.len()` must equal `rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, data: Vec<T>) -> Result<Self, GridError> {
        validate_extent("rows", rows)?;
        validate_extent("cols", cols)?;
        let expected = rows as usize * cols as usize;
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Returns the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.index(row, col)])
        } else {
            None
        }
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Produces a same-shaped raster by applying `f` to every element.
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Raster<U> {
        Raster {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl<T> Raster<T> {
    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total element count (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: zero-sized rasters cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The full buffer in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the full buffer in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: u32) -> &[T] {
        let start = self.index(row, 0);
        &self.data[start..start + self.cols as usize]
    }

    /// One row as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row_mut(&mut self, row: u32) -> &mut [T] {
        let start = self.index(row, 0);
        &mut self.data[start..start + self.cols as usize]
    }

    fn index(&self, row: u32, col: u32) -> usize {
        assert!(row < self.rows, "row {row} out of range 0..{}", self.rows);
        row as usize * self.cols as usize + col as usize
    }
}
