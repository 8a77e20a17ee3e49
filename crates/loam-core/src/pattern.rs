//! Named life-form patterns and their text-row source format.

use crate::error::PatternError;
use crate::raster::Raster;

/// An immutable, named bitmap describing one life form.
///
/// Patterns are parsed from equal-length text rows where `#` marks a live
/// cell and any other character a dead one:
///
/// ```
/// use loam_core::Pattern;
///
/// let glider = Pattern::parse("glider", &[
///     ".#.",
///     "..#",
///     "###",
/// ]).unwrap();
/// assert_eq!((glider.rows(), glider.cols()), (3, 3));
/// assert_eq!(glider.live_cells(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    name: String,
    cells: Raster<u8>,
}

impl Pattern {
    /// Parses a pattern from text rows.
    ///
    /// Every row must have the same number of characters as the first;
    /// a ragged or empty definition is rejected rather than padded.
    pub fn parse(name: &str, rows: &[&str]) -> Result<Self, PatternError> {
        let expected = rows.first().map_or(0, |r| r.chars().count());
        if expected == 0 {
            return Err(PatternError::Empty {
                name: name.to_owned(),
            });
        }
        let mut data = Vec::with_capacity(rows.len() * expected);
        for (i, row) in rows.iter().enumerate() {
            let before = data.len();
            data.extend(row.chars().map(|c| u8::from(c == '#')));
            let len = data.len() - before;
            if len != expected {
                return Err(PatternError::RaggedRow {
                    name: name.to_owned(),
                    row: i,
                    len,
                    expected,
                });
            }
        }
        let cells = Raster::from_vec(rows.len() as u32, expected as u32, data)?;
        Ok(Self {
            name: name.to_owned(),
            cells,
        })
    }

    /// Creates an all-dead pattern, usable as an eraser stamp.
    pub fn blank(name: &str, rows: u32, cols: u32) -> Result<Self, PatternError> {
        let cells = Raster::filled(rows, cols, 0)?;
        Ok(Self {
            name: name.to_owned(),
            cells,
        })
    }

    /// Returns a horizontally mirrored copy under a new name.
    pub fn mirrored(&self, name: &str) -> Self {
        let mut cells = self.cells.clone();
        for r in 0..cells.rows() {
            cells.row_mut(r).reverse();
        }
        Self {
            name: name.to_owned(),
            cells,
        }
    }

    /// The pattern's registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Height in cells.
    pub fn rows(&self) -> u32 {
        self.cells.rows()
    }

    /// Width in cells.
    pub fn cols(&self) -> u32 {
        self.cells.cols()
    }

    /// The underlying bitmap: 1 is live, 0 is dead.
    pub fn cells(&self) -> &Raster<u8> {
        &self.cells
    }

    /// Number of live cells in the bitmap.
    pub fn live_cells(&self) -> usize {
        self.cells.as_slice().iter().filter(|&&c| c == 1).count()
    }

    /// The bitmap as intensities, 0.0 dead and 1.0 live, for compositing.
    pub fn intensity(&self) -> Raster<f32> {
        self.cells.map(f32::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    #[test]
    fn parse_maps_hash_to_live() {
        let p = Pattern::parse("blinker", &["###"]).unwrap();
        assert_eq!(p.rows(), 1);
        assert_eq!(p.cols(), 3);
        assert_eq!(p.cells().as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn parse_treats_any_other_char_as_dead() {
        let p = Pattern::parse("mixed", &["#.# ", "x##."]).unwrap();
        assert_eq!(p.cells().as_slice(), &[1, 0, 1, 0, 0, 1, 1, 0]);
        assert_eq!(p.live_cells(), 4);
    }

    #[test]
    fn empty_definition_rejected() {
        assert_eq!(
            Pattern::parse("void", &[]),
            Err(PatternError::Empty {
                name: "void".into()
            })
        );
        assert_eq!(
            Pattern::parse("void", &[""]),
            Err(PatternError::Empty {
                name: "void".into()
            })
        );
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Pattern::parse("ragged", &["###", "##"]).unwrap_err();
        assert_eq!(
            err,
            PatternError::RaggedRow {
                name: "ragged".into(),
                row: 1,
                len: 2,
                expected: 3,
            }
        );
    }

    #[test]
    fn blank_has_no_live_cells() {
        let p = Pattern::blank("eraser", 13, 13).unwrap();
        assert_eq!(p.rows(), 13);
        assert_eq!(p.cols(), 13);
        assert_eq!(p.live_cells(), 0);
    }

    #[test]
    fn mirrored_reverses_each_row() {
        let p = Pattern::parse("l", &["#..", "#.."]).unwrap();
        let m = p.mirrored("l-flipped");
        assert_eq!(m.name(), "l-flipped");
        assert_eq!(m.cells().as_slice(), &[0, 0, 1, 0, 0, 1]);
        // Original untouched.
        assert_eq!(p.cells().as_slice(), &[1, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn intensity_casts_to_unit_floats() {
        let p = Pattern::parse("dot", &["#."]).unwrap();
        assert_eq!(p.intensity().as_slice(), &[1.0, 0.0]);
    }
}
