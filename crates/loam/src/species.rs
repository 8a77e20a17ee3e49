//! Built-in species, authored as row strings with `#` for a live cell.
//!
//! The definitions are compiled into immutable [`Pattern`]s on first
//! use; [`standard_catalog`] collects them in the order the picker
//! strip displays them.

use loam_core::{Catalog, Pattern};

const GLIDER_GUN: &[&str] = &[
    "........................#...........",
    "......................#.#...........",
    "............##......##............##",
    "...........#...#....##............##",
    "##........#.....#...##..............",
    "##........#...#.##....#.#...........",
    "..........#.....#.......#...........",
    "...........#...#....................",
    "............##......................",
];

const GLIDERS: &[&str] = &[
    "..##.##..",
    ".#.#.#.#.",
    "#..#.#..#",
    ".#.#.#.#.",
    "..##.##..",
];

const TURTLE: &[&str] = &[
    ".###.......#",
    ".##..#.##.##",
    "...###....#.",
    ".#..#.#...#.",
    "#....#....#.",
    "#....#....#.",
    ".#..#.#...#.",
    "...###....#.",
    ".##..#.##.##",
    ".###.......#",
];

const BLINKER_PUFFER: &[&str] = &[
    ".............###.",
    "............#####",
    "...........##.###",
    "............##...",
    ".................",
    ".................",
    ".........#.#.....",
    "..#.....#..#.....",
    ".#####...#.#.....",
    "##...##.##.......",
    ".#.......#.......",
    "..##..#..#.......",
    "..........#......",
    "..##..#..#.......",
    ".#.......#.......",
    "##...##.##.......",
    ".#####...#.#.....",
    "..#.....#..#.....",
    ".........#.#.....",
    ".................",
    ".................",
    "............##...",
    "...........##.###",
    "............#####",
    ".............###.",
];

const GALAXY: &[&str] = &[
    "......##...",
    ".......#...",
    "..###..##..",
    "###.#...#..",
    "#....#.##..",
    "....#.#....",
    "..##.#....#",
    "..#...#.###",
    "..##..###..",
    "...#.......",
    "...##......",
];

const PULSAR: &[&str] = &[
    "..###...###..",
    ".............",
    "#....#.#....#",
    "#....#.#....#",
    "#....#.#....#",
    "..###...###..",
    ".............",
    "..###...###..",
    "#....#.#....#",
    "#....#.#....#",
    "#....#.#....#",
    ".............",
    "..###...###..",
];

/// The Gosper glider gun, firing a glider every 30 generations.
///
/// # Panics
///
/// Never: the definition is statically valid.
pub fn glider_gun() -> Pattern {
    Pattern::parse("glider-gun", GLIDER_GUN).expect("species definition is valid")
}

/// Four gliders arranged to fly apart diagonally.
///
/// # Panics
///
/// Never: the definition is statically valid.
pub fn gliders() -> Pattern {
    Pattern::parse("gliders", GLIDERS).expect("species definition is valid")
}

/// The turtle spaceship, mirrored to crawl to the right.
///
/// # Panics
///
/// Never: the definition is statically valid.
pub fn turtle() -> Pattern {
    Pattern::parse("turtle-seed", TURTLE)
        .expect("species definition is valid")
        .mirrored("turtle")
}

/// A puffer that leaves a wake of blinkers behind it.
///
/// # Panics
///
/// Never: the definition is statically valid.
pub fn blinker_puffer() -> Pattern {
    Pattern::parse("blinker-puffer", BLINKER_PUFFER).expect("species definition is valid")
}

/// Kok's galaxy, a period-8 oscillator.
///
/// # Panics
///
/// Never: the definition is statically valid.
pub fn galaxy() -> Pattern {
    Pattern::parse("galaxy", GALAXY).expect("species definition is valid")
}

/// The pulsar, a period-3 oscillator.
///
/// # Panics
///
/// Never: the definition is statically valid.
pub fn pulsar() -> Pattern {
    Pattern::parse("pulsar", PULSAR).expect("species definition is valid")
}

/// An all-dead 13x13 stamp; placing it erases whatever it covers.
///
/// # Panics
///
/// Never: the extent is statically valid.
pub fn blank() -> Pattern {
    Pattern::blank("blank", 13, 13).expect("species extent is valid")
}

/// The built-in species menu in display order.
///
/// # Panics
///
/// Never: the built-in names are distinct.
pub fn standard_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for species in [
        glider_gun(),
        gliders(),
        turtle(),
        blinker_puffer(),
        galaxy(),
        pulsar(),
        blank(),
    ] {
        catalog
            .insert(species)
            .expect("built-in species names are distinct");
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_keeps_display_order() {
        let catalog = standard_catalog();
        let names: Vec<_> = catalog.iter().map(Pattern::name).collect();
        assert_eq!(
            names,
            [
                "glider-gun",
                "gliders",
                "turtle",
                "blinker-puffer",
                "galaxy",
                "pulsar",
                "blank",
            ]
        );
    }

    #[test]
    fn extents_match_the_definitions() {
        let checks = [
            (glider_gun(), 9, 36),
            (gliders(), 5, 9),
            (turtle(), 10, 12),
            (blinker_puffer(), 25, 17),
            (galaxy(), 11, 11),
            (pulsar(), 13, 13),
            (blank(), 13, 13),
        ];
        for (species, rows, cols) in checks {
            assert_eq!(species.rows(), rows, "{} rows", species.name());
            assert_eq!(species.cols(), cols, "{} cols", species.name());
        }
    }

    #[test]
    fn turtle_faces_right() {
        // The authored seed points left; the shipped turtle is its
        // horizontal mirror, so row 0 starts live and ends dead.
        let turtle = turtle();
        let cells = turtle.cells();
        assert_eq!(cells.get(0, 0), Some(1));
        assert_eq!(cells.get(0, 11), Some(0));
    }

    #[test]
    fn blank_is_all_dead() {
        assert_eq!(blank().live_cells(), 0);
    }

    #[test]
    fn pulsar_population_is_stable() {
        assert_eq!(pulsar().live_cells(), 48);
    }
}
