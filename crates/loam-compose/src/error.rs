//! Error types for compositing.

use std::error::Error;
use std::fmt;

use loam_core::{GridError, StampError};

/// Errors from color-map construction and frame composition.
#[derive(Clone, Debug, PartialEq)]
pub enum ComposeError {
    /// Gradient stops are malformed.
    InvalidGradient {
        /// Description of the violated constraint.
        reason: String,
    },
    /// Vertically stacked images differ in width.
    WidthMismatch {
        /// Width of the upper image in pixels.
        top: u32,
        /// Width of the lower image in pixels.
        bottom: u32,
    },
    /// The picker cannot lay out an empty catalog.
    EmptyCatalog,
    /// A picker canvas could not be allocated.
    Canvas(GridError),
    /// A slot box or pattern could not be placed on the strip.
    Placement(StampError),
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGradient { reason } => write!(f, "invalid gradient: {reason}"),
            Self::WidthMismatch { top, bottom } => {
                write!(f, "cannot stack images {top} px over {bottom} px wide")
            }
            Self::EmptyCatalog => write!(f, "picker strip requires at least one pattern"),
            Self::Canvas(e) => write!(f, "picker canvas: {e}"),
            Self::Placement(e) => write!(f, "strip placement: {e}"),
        }
    }
}

impl Error for ComposeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Canvas(e) => Some(e),
            Self::Placement(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ComposeError {
    fn from(e: GridError) -> Self {
        Self::Canvas(e)
    }
}

impl From<StampError> for ComposeError {
    fn from(e: StampError) -> Self {
        Self::Placement(e)
    }
}
