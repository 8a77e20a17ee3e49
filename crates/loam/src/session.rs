//! The interactive sandbox session: one world, one picker strip, one
//! pointer.
//!
//! A [`Session`] owns every piece of mutable sandbox state: the cell
//! grid and its trail, the selected species, the active color map, and
//! the laid-out picker strip. The embedding run loop calls
//! [`Session::pointer_down`] and [`Session::key_down`] from its event
//! hooks, then [`Session::step`] and [`Session::render`] once per
//! tick.

use std::fmt;

use loam_compose::{frame, ColorMap, Image, Picker};
use loam_core::{Anchor, Catalog, StampError};
use loam_engine::{StepMetrics, World};

use crate::config::{SessionConfig, SessionError};

/// What a pointer press did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The selected species was stamped onto the play grid.
    Placed {
        /// Catalog index of the stamped species.
        species: usize,
        /// Clicked cell row, before any edge clipping.
        row: u32,
        /// Clicked cell column, before any edge clipping.
        col: u32,
    },
    /// The selected species cannot fit the grid; nothing changed.
    Rejected(StampError),
    /// A picker slot was clicked and is now the active species.
    Selected(usize),
    /// The click landed outside every picker slot; nothing changed.
    Ignored,
}

/// An interactive Game-of-Life sandbox.
pub struct Session {
    world: World,
    catalog: Catalog,
    maps: Vec<ColorMap>,
    map_index: usize,
    species: usize,
    magnification: u32,
    picker: Picker,
}

impl Session {
    /// Builds a session: validates the configuration, allocates the
    /// world, seeds the aquarium, and lays out the picker strip.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let SessionConfig {
            world,
            magnification,
            color_map,
            species,
            aquarium,
            catalog,
            maps,
        } = config;

        let mut world = World::new(&world)?;
        if let Some(aquarium) = aquarium {
            world.seed_region(aquarium.rect, aquarium.density)?;
        }
        let picker = Picker::layout(&catalog, species, &maps[color_map], world.width())?;

        Ok(Self {
            world,
            catalog,
            maps,
            map_index: color_map,
            species,
            magnification,
            picker,
        })
    }

    /// Advances the world by one generation and decays the trail.
    pub fn step(&mut self) -> StepMetrics {
        self.world.step()
    }

    /// Handles a pointer press at display pixel `(x, y)`.
    ///
    /// The press is mapped back to cell coordinates by the session's
    /// magnification. Rows below the play area fall into the picker
    /// strip and move the selection; rows inside it stamp the selected
    /// species centered on the clicked cell, clipped at the edges.
    pub fn pointer_down(&mut self, x: u32, y: u32) -> ClickOutcome {
        let col = x / self.magnification;
        let row = y / self.magnification;

        if row >= self.world.height() {
            return match self.picker.select_at(col) {
                Some(slot) if slot != self.species => {
                    self.species = slot;
                    self.rebuild_picker();
                    ClickOutcome::Selected(slot)
                }
                Some(slot) => ClickOutcome::Selected(slot),
                None => ClickOutcome::Ignored,
            };
        }

        let species = self.species;
        let pattern = self
            .catalog
            .get(species)
            .expect("selected species is in the catalog");
        let anchor_row = i32::try_from(row).unwrap_or(i32::MAX);
        let anchor_col = i32::try_from(col).unwrap_or(i32::MAX);
        match self.world.place(pattern, anchor_row, anchor_col, Anchor::Center) {
            Ok(()) => ClickOutcome::Placed { species, row, col },
            Err(err) => ClickOutcome::Rejected(err),
        }
    }

    /// Handles a digit key: key `1` activates the first color map, `2`
    /// the second, and so on. Returns `true` when the active map
    /// changed; any other key is ignored.
    pub fn key_down(&mut self, key: char) -> bool {
        let Some(digit) = key.to_digit(10) else {
            return false;
        };
        let Some(index) = (digit as usize).checked_sub(1) else {
            return false;
        };
        if index >= self.maps.len() || index == self.map_index {
            return false;
        }
        self.map_index = index;
        self.rebuild_picker();
        true
    }

    /// Composes the current frame: the shaded trail stacked over the
    /// picker strip, magnified for display.
    ///
    /// # Panics
    ///
    /// Never: the strip is laid out at the world's width when the
    /// session is built and whenever the selection or palette changes.
    pub fn render(&self) -> Image {
        frame::render(
            self.world.trail(),
            self.picker.image(),
            &self.maps[self.map_index],
            self.magnification,
        )
        .expect("picker strip spans the world width")
    }

    /// Dimensions of [`render`](Self::render)'s output as
    /// `(rows, cols)`.
    pub fn frame_extent(&self) -> (u32, u32) {
        (
            (self.world.height() + self.picker.height()) * self.magnification,
            self.world.width() * self.magnification,
        )
    }

    /// The simulated world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The species available in the picker strip.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The laid-out picker strip.
    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Catalog index of the species the next play-area click stamps.
    pub fn species(&self) -> usize {
        self.species
    }

    /// Index of the active color map.
    pub fn color_map(&self) -> usize {
        self.map_index
    }

    /// Display scale in pixels per cell.
    pub fn magnification(&self) -> u32 {
        self.magnification
    }

    fn rebuild_picker(&mut self) {
        self.picker = Picker::layout(
            &self.catalog,
            self.species,
            &self.maps[self.map_index],
            self.world.width(),
        )
        .expect("picker layout was validated at construction");
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("world", &self.world)
            .field("species", &self.species)
            .field("map_index", &self.map_index)
            .field("magnification", &self.magnification)
            .finish_non_exhaustive()
    }
}
