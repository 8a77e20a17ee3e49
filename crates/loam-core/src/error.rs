//! Error types for rasters, patterns, and placement.
//!
//! Organized by subsystem: raster construction, pattern parsing, catalog
//! registration, and stamping. Higher layers wrap these rather than
//! restating them.

use std::error::Error;
use std::fmt;

/// Errors from raster construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A raster dimension was zero.
    Empty {
        /// Which axis was zero (`"rows"` or `"cols"`).
        axis: &'static str,
    },
    /// A raster dimension exceeds [`MAX_DIM`](crate::raster::MAX_DIM).
    DimensionTooLarge {
        /// Which axis overflowed (`"rows"` or `"cols"`).
        axis: &'static str,
        /// The offending extent.
        extent: u32,
        /// The largest supported extent.
        max: u32,
    },
    /// A backing buffer's length does not match `rows * cols`.
    LengthMismatch {
        /// Expected number of elements.
        expected: usize,
        /// Actual number of elements supplied.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { axis } => write!(f, "raster {axis} must be non-zero"),
            Self::DimensionTooLarge { axis, extent, max } => {
                write!(f, "raster {axis} {extent} exceeds maximum {max}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer length {actual} does not match rows * cols = {expected}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from parsing a pattern out of its text-row form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern has no rows, or its first row is empty.
    Empty {
        /// Name of the offending pattern.
        name: String,
    },
    /// A row's cell count differs from the first row's.
    RaggedRow {
        /// Name of the offending pattern.
        name: String,
        /// Zero-based index of the short or long row.
        row: usize,
        /// Cell count of that row.
        len: usize,
        /// Cell count of the first row.
        expected: usize,
    },
    /// The pattern's bitmap could not be allocated as a raster.
    Grid(GridError),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { name } => write!(f, "pattern '{name}' has no cells"),
            Self::RaggedRow {
                name,
                row,
                len,
                expected,
            } => {
                write!(
                    f,
                    "pattern '{name}' row {row} has {len} cells, expected {expected}"
                )
            }
            Self::Grid(err) => write!(f, "pattern bitmap rejected: {err}"),
        }
    }
}

impl Error for PatternError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for PatternError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

/// Errors from catalog registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// A pattern with this name is already registered.
    DuplicateName {
        /// The colliding name.
        name: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "catalog already contains a pattern named '{name}'")
            }
        }
    }
}

impl Error for CatalogError {}

/// Placement rejection: the source raster cannot fit inside the
/// destination on at least one axis, so no cells were written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StampError {
    /// The source extent exceeds the destination extent on this axis.
    ///
    /// Stamping clamps an out-of-bounds placement back inside the
    /// destination, which is only possible when the source fits.
    OutOfRange {
        /// Which axis cannot fit (`"rows"` or `"cols"`).
        axis: &'static str,
        /// Source extent on that axis.
        source: u32,
        /// Destination extent on that axis.
        dest: u32,
    },
}

impl fmt::Display for StampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { axis, source, dest } => {
                write!(
                    f,
                    "source spans {source} {axis} but destination has only {dest}"
                )
            }
        }
    }
}

impl Error for StampError {}
