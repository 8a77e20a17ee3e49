//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the input for constructing a [`World`](crate::World).
//! [`validate()`](WorldConfig::validate) checks structural invariants at
//! startup so the stepping loop can run on plain unchecked arithmetic.

use std::error::Error;
use std::fmt;

use loam_core::{GridError, MAX_DIM};

use crate::boundary::Boundary;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A grid dimension is zero.
    ZeroDimension {
        /// Which dimension was zero (`"width"` or `"height"`).
        axis: &'static str,
    },
    /// A grid dimension exceeds [`MAX_DIM`].
    DimensionTooLarge {
        /// Which dimension overflowed (`"width"` or `"height"`).
        axis: &'static str,
        /// The configured extent.
        extent: u32,
        /// The largest supported extent.
        max: u32,
    },
    /// `decay` is NaN, negative, or not below 1.
    InvalidDecay {
        /// The invalid value.
        value: f32,
    },
    /// A backing raster was rejected during construction.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { axis } => write!(f, "grid {axis} must be non-zero"),
            Self::DimensionTooLarge { axis, extent, max } => {
                write!(f, "grid {axis} {extent} exceeds maximum {max}")
            }
            Self::InvalidDecay { value } => {
                write!(f, "decay must be in [0.0, 1.0), got {value}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a world.
///
/// The default matches the classic sandbox: a 600x300 bounded grid with
/// a 0.6 trail decay.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Grid width in cells. Default: 600.
    pub width: u32,
    /// Grid height in cells. Default: 300.
    pub height: u32,
    /// Edge topology for neighbour lookups. Default: [`Boundary::Bounded`].
    pub boundary: Boundary,
    /// Trail decay factor in `[0.0, 1.0)`; with 0.0 the trail equals the
    /// raw grid each generation. Default: 0.6.
    pub decay: f32,
    /// Seed for the world's deterministic RNG. Default: 0.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 300,
            boundary: Boundary::Bounded,
            decay: 0.6,
            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Both dimensions non-zero and within coordinate range.
        for (axis, extent) in [("width", self.width), ("height", self.height)] {
            if extent == 0 {
                return Err(ConfigError::ZeroDimension { axis });
            }
            if extent > MAX_DIM {
                return Err(ConfigError::DimensionTooLarge {
                    axis,
                    extent,
                    max: MAX_DIM,
                });
            }
        }
        // 2. Decay must keep the trail a converging series.
        if !self.decay.is_finite() || self.decay < 0.0 || self.decay >= 1.0 {
            return Err(ConfigError::InvalidDecay { value: self.decay });
        }
        Ok(())
    }
}
