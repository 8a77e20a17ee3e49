//! Benchmark profiles for the loam sandbox.
//!
//! Provides pre-seeded worlds shared by the benchmarks:
//!
//! - [`reference_world`]: the default 600x300 sandbox with its floor
//!   band seeded
//! - [`stress_world`]: a 1200x600 wrapped world seeded edge to edge

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use loam_engine::{Boundary, Rect, World, WorldConfig};

/// Build the reference profile: the default 600x300 bounded world with
/// the bottom three tenths seeded at density 0.15.
///
/// # Panics
///
/// Never: the profile parameters are statically valid.
pub fn reference_world(seed: u64) -> World {
    let config = WorldConfig {
        seed,
        ..WorldConfig::default()
    };
    let mut world = World::new(&config).expect("profile config is valid");
    world
        .seed_region(Rect::new(210, 0, 299, 599), 0.15)
        .expect("floor band fits the world");
    world
}

/// Build the stress profile: a 1200x600 wrapped world (4x the
/// reference cell count) seeded edge to edge at density 0.15.
///
/// # Panics
///
/// Never: the profile parameters are statically valid.
pub fn stress_world(seed: u64) -> World {
    let config = WorldConfig {
        width: 1200,
        height: 600,
        boundary: Boundary::Wrapped,
        seed,
        ..WorldConfig::default()
    };
    let mut world = World::new(&config).expect("profile config is valid");
    world
        .seed_region(Rect::new(0, 0, 600, 1200), 0.15)
        .expect("seed region fits the world");
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_world_is_populated_and_deterministic() {
        let a = reference_world(42);
        let b = reference_world(42);
        assert!(a.population() > 0);
        assert_eq!(a.population(), b.population());
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn stress_world_steps() {
        let mut world = stress_world(42);
        let before = world.population();
        assert!(before > 0);
        world.step();
        assert_eq!(world.generation(), 1);
    }
}
