//! Session configuration and validation.

use std::error::Error;
use std::fmt;

use loam_compose::{ColorMap, ComposeError};
use loam_core::Catalog;
use loam_engine::{ConfigError, Rect, WorldConfig, WorldError};

use crate::species;

/// Errors rejected when building a session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionError {
    /// Magnification of zero would render nothing.
    ZeroMagnification,
    /// The species catalog has no entries.
    EmptyCatalog,
    /// The color map table has no entries.
    NoColorMaps,
    /// The initial color map index points past the table.
    ColorMapOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of configured maps.
        len: usize,
    },
    /// The initial species index points past the catalog.
    SpeciesOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of catalog entries.
        len: usize,
    },
    /// The world configuration was rejected.
    World(ConfigError),
    /// Seeding the aquarium was rejected.
    Seed(WorldError),
    /// The picker strip could not be laid out at the world width.
    Compose(ComposeError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMagnification => write!(f, "magnification must be at least 1"),
            Self::EmptyCatalog => write!(f, "species catalog has no entries"),
            Self::NoColorMaps => write!(f, "color map table has no entries"),
            Self::ColorMapOutOfRange { index, len } => {
                write!(f, "color map index {index} out of range for {len} maps")
            }
            Self::SpeciesOutOfRange { index, len } => {
                write!(f, "species index {index} out of range for {len} species")
            }
            Self::World(err) => write!(f, "world configuration rejected: {err}"),
            Self::Seed(err) => write!(f, "aquarium seeding rejected: {err}"),
            Self::Compose(err) => write!(f, "picker strip layout failed: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::World(err) => Some(err),
            Self::Seed(err) => Some(err),
            Self::Compose(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        Self::World(err)
    }
}

impl From<WorldError> for SessionError {
    fn from(err: WorldError) -> Self {
        Self::Seed(err)
    }
}

impl From<ComposeError> for SessionError {
    fn from(err: ComposeError) -> Self {
        Self::Compose(err)
    }
}

/// A rectangular band seeded with random life when the session starts,
/// so the world is not empty before the first click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aquarium {
    /// Region to randomize, in cell coordinates.
    pub rect: Rect,
    /// Probability that each cell in the region starts live.
    pub density: f64,
}

impl Aquarium {
    /// The default band: the bottom three tenths of the world at
    /// density 0.15, stopping one cell short of the last row and
    /// column.
    pub fn floor_band(world: &WorldConfig) -> Self {
        Self {
            rect: Rect::new(
                world.height * 7 / 10,
                0,
                world.height.saturating_sub(1),
                world.width.saturating_sub(1),
            ),
            density: 0.15,
        }
    }
}

/// Everything needed to build a [`Session`](crate::Session).
///
/// The default configuration is a playable sandbox: a 600x300 bounded
/// world at 2x magnification with the built-in species and color maps,
/// and an aquarium band along the floor.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Grid dimensions, boundary mode, trail decay, and RNG seed.
    pub world: WorldConfig,
    /// Display scale; each cell renders as an NxN pixel block.
    /// Default: 2.
    pub magnification: u32,
    /// Index of the initially active color map. Default: 0.
    pub color_map: usize,
    /// Index of the initially selected species. Default: 0.
    pub species: usize,
    /// Optional region randomized at startup. Default: the floor band.
    pub aquarium: Option<Aquarium>,
    /// Species available in the picker strip, in display order.
    pub catalog: Catalog,
    /// Color maps selectable with the digit keys, in key order.
    pub maps: Vec<ColorMap>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let world = WorldConfig::default();
        let aquarium = Aquarium::floor_band(&world);
        Self {
            world,
            magnification: 2,
            color_map: 0,
            species: 0,
            aquarium: Some(aquarium),
            catalog: species::standard_catalog(),
            maps: ColorMap::standard_set(),
        }
    }
}

impl SessionConfig {
    /// Checks the configuration before any allocation.
    ///
    /// Aquarium bounds are not checked here; seeding validates them
    /// against the world when the session is built.
    pub fn validate(&self) -> Result<(), SessionError> {
        // 1. The world itself must be constructible.
        self.world.validate()?;

        // 2. Zero magnification would collapse the output image.
        if self.magnification == 0 {
            return Err(SessionError::ZeroMagnification);
        }

        // 3. Both selection tables must have at least one entry.
        if self.catalog.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        if self.maps.is_empty() {
            return Err(SessionError::NoColorMaps);
        }

        // 4. Initial selections must point into their tables.
        if self.color_map >= self.maps.len() {
            return Err(SessionError::ColorMapOutOfRange {
                index: self.color_map,
                len: self.maps.len(),
            });
        }
        if self.species >= self.catalog.len() {
            return Err(SessionError::SpeciesOutOfRange {
                index: self.species,
                len: self.catalog.len(),
            });
        }

        Ok(())
    }
}
