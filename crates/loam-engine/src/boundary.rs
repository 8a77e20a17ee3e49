//! Grid edge topology.

/// How neighbour lookups treat coordinates outside the grid.
///
/// Chosen once at world construction; the stepping loop resolves border
/// lookups through it while interior cells skip resolution entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Out-of-bounds cells read as permanently dead (zero padding).
    #[default]
    Bounded,
    /// Coordinates wrap modulo the grid dimensions, joining opposite
    /// edges into a torus.
    Wrapped,
}

impl Boundary {
    /// Resolves one axis of a neighbour coordinate against this topology.
    ///
    /// Returns `None` for coordinates that fall outside a [`Bounded`]
    /// grid; wrapping always resolves.
    ///
    /// [`Bounded`]: Boundary::Bounded
    pub fn resolve_axis(self, coord: i32, len: u32) -> Option<u32> {
        if coord >= 0 && (coord as u32) < len {
            return Some(coord as u32);
        }
        match self {
            Self::Bounded => None,
            Self::Wrapped => Some(coord.rem_euclid(len as i32) as u32),
        }
    }
}
