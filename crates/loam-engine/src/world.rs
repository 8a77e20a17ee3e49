//! The live world: cell grid, trail buffer, and the generation step.
//!
//! Stepping is double-buffered so every cell is judged against the same
//! frozen generation, then the buffers swap. Interior cells use direct
//! index arithmetic; only the border resolves neighbours through the
//! [`Boundary`] topology.

use std::fmt;
use std::time::Instant;

use loam_core::{Anchor, Pattern, Raster, StampError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::boundary::Boundary;
use crate::config::{ConfigError, WorldConfig};
use crate::metrics::StepMetrics;

/// Moore neighbourhood offsets as `(row, col)` deltas.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// ── Rect ───────────────────────────────────────────────────────────

/// A rectangular cell region, half-open on both axes: rows span
/// `top..bottom`, columns span `left..right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// First row inside the region.
    pub top: u32,
    /// First column inside the region.
    pub left: u32,
    /// First row below the region (exclusive).
    pub bottom: u32,
    /// First column past the region (exclusive).
    pub right: u32,
}

impl Rect {
    /// Creates a region from its half-open bounds.
    pub fn new(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Number of rows spanned.
    pub fn rows(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Number of columns spanned.
    pub fn cols(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }
}

// ── WorldError ─────────────────────────────────────────────────────

/// Errors from world operations that take caller-supplied regions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WorldError {
    /// The region is inverted or extends past the grid.
    RegionOutOfBounds {
        /// The rejected region.
        rect: Rect,
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
    },
    /// Density is NaN or outside `[0.0, 1.0]`.
    InvalidDensity {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionOutOfBounds {
                rect,
                width,
                height,
            } => {
                write!(
                    f,
                    "region rows {}..{} cols {}..{} does not fit a {width}x{height} grid",
                    rect.top, rect.bottom, rect.left, rect.right
                )
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be in [0.0, 1.0], got {value}")
            }
        }
    }
}

impl std::error::Error for WorldError {}

// ── World ──────────────────────────────────────────────────────────

/// A stepping Life world with a fading trail.
///
/// ```
/// use loam_core::{Anchor, Pattern};
/// use loam_engine::{World, WorldConfig};
///
/// let mut world = World::new(&WorldConfig {
///     width: 16,
///     height: 16,
///     ..WorldConfig::default()
/// }).unwrap();
/// let glider = Pattern::parse("glider", &[".#.", "..#", "###"]).unwrap();
/// world.place(&glider, 8, 8, Anchor::Center).unwrap();
/// let metrics = world.step();
/// assert_eq!(metrics.generation, 1);
/// assert_eq!(metrics.population, 5);
/// ```
pub struct World {
    cells: Raster<u8>,
    next: Raster<u8>,
    trail: Raster<f32>,
    boundary: Boundary,
    decay: f32,
    rng: ChaCha8Rng,
    generation: u64,
}

impl World {
    /// Builds an all-dead world from a validated configuration.
    pub fn new(config: &WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let cells = Raster::filled(config.height, config.width, 0u8)?;
        let next = cells.clone();
        let trail = Raster::filled(config.height, config.width, 0.0f32)?;
        Ok(Self {
            cells,
            next,
            trail,
            boundary: config.boundary,
            decay: config.decay,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            generation: 0,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.cells.cols()
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.cells.rows()
    }

    /// Edge topology the world was built with.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Generations stepped since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation's cells: 1 live, 0 dead.
    pub fn cells(&self) -> &Raster<u8> {
        &self.cells
    }

    /// The trail buffer: 1.0 where a cell is live now, decayed echoes of
    /// past generations below, unbounded sums where cells stay live.
    pub fn trail(&self) -> &Raster<f32> {
        &self.trail
    }

    /// Live cells in the current generation.
    pub fn population(&self) -> u64 {
        self.cells.as_slice().iter().map(|&c| u64::from(c)).sum()
    }

    /// Stamps `pattern` onto the current generation.
    ///
    /// Both live and dead cells overwrite, so an all-dead pattern erases.
    /// Clipping follows [`Raster::stamp`]; a pattern larger than the grid
    /// is rejected without touching any cell.
    pub fn place(
        &mut self,
        pattern: &Pattern,
        row: i32,
        col: i32,
        anchor: Anchor,
    ) -> Result<(), StampError> {
        self.cells.stamp(pattern.cells(), row, col, anchor)
    }

    /// Randomizes a region of the current generation, each cell drawn
    /// live with probability `density` from the world's seeded RNG.
    pub fn seed_region(&mut self, rect: Rect, density: f64) -> Result<(), WorldError> {
        if !density.is_finite() || !(0.0..=1.0).contains(&density) {
            return Err(WorldError::InvalidDensity { value: density });
        }
        if rect.top > rect.bottom
            || rect.left > rect.right
            || rect.bottom > self.height()
            || rect.right > self.width()
        {
            return Err(WorldError::RegionOutOfBounds {
                rect,
                width: self.width(),
                height: self.height(),
            });
        }
        for r in rect.top..rect.bottom {
            let row = self.cells.row_mut(r);
            for c in rect.left..rect.right {
                let p: f64 = self.rng.gen();
                row[c as usize] = u8::from(p < density);
            }
        }
        Ok(())
    }

    /// Advances one generation and updates the trail.
    ///
    /// Applies B3/S23 against a frozen snapshot of the current cells,
    /// swaps buffers, then folds the new generation into the trail as
    /// `trail = trail * decay + cells`.
    pub fn step(&mut self) -> StepMetrics {
        let start = Instant::now();
        let rows = self.cells.rows();
        let cols = self.cells.cols();
        let mut births = 0u64;
        let mut deaths = 0u64;

        // Interior fast path: all 8 neighbours resolve by index arithmetic.
        {
            let cur = self.cells.as_slice();
            let next = self.next.as_mut_slice();
            let w = cols as usize;
            for r in 1..rows.saturating_sub(1) as usize {
                for c in 1..cols.saturating_sub(1) as usize {
                    let i = r * w + c;
                    let n = cur[i - w - 1]
                        + cur[i - w]
                        + cur[i - w + 1]
                        + cur[i - 1]
                        + cur[i + 1]
                        + cur[i + w - 1]
                        + cur[i + w]
                        + cur[i + w + 1];
                    let alive = cur[i];
                    let lives = u8::from(n == 3 || (alive == 1 && n == 2));
                    if lives != alive {
                        if lives == 1 {
                            births += 1;
                        } else {
                            deaths += 1;
                        }
                    }
                    next[i] = lives;
                }
            }
        }

        // Border pass: each neighbour goes through the boundary topology.
        self.step_border(&mut births, &mut deaths);

        std::mem::swap(&mut self.cells, &mut self.next);

        // Trail: decay the history, then superimpose the new generation.
        let decay = self.decay;
        for (t, &cell) in self
            .trail
            .as_mut_slice()
            .iter_mut()
            .zip(self.cells.as_slice())
        {
            *t = *t * decay + f32::from(cell);
        }

        self.generation += 1;
        StepMetrics {
            generation: self.generation,
            population: self.population(),
            births,
            deaths,
            step_us: start.elapsed().as_micros() as u64,
        }
    }

    fn step_border(&mut self, births: &mut u64, deaths: &mut u64) {
        let rows = self.cells.rows();
        let cols = self.cells.cols();
        for c in 0..cols {
            self.step_cell(0, c, births, deaths);
        }
        if rows > 1 {
            for c in 0..cols {
                self.step_cell(rows - 1, c, births, deaths);
            }
        }
        for r in 1..rows.saturating_sub(1) {
            self.step_cell(r, 0, births, deaths);
            if cols > 1 {
                self.step_cell(r, cols - 1, births, deaths);
            }
        }
    }

    fn step_cell(&mut self, row: u32, col: u32, births: &mut u64, deaths: &mut u64) {
        let rows = self.cells.rows();
        let cols = self.cells.cols();
        let mut n = 0u8;
        for (dr, dc) in MOORE_OFFSETS {
            let Some(r) = self.boundary.resolve_axis(row as i32 + dr, rows) else {
                continue;
            };
            let Some(c) = self.boundary.resolve_axis(col as i32 + dc, cols) else {
                continue;
            };
            n += self.cells.row(r)[c as usize];
        }
        let alive = self.cells.row(row)[col as usize];
        let lives = u8::from(n == 3 || (alive == 1 && n == 2));
        if lives != alive {
            if lives == 1 {
                *births += 1;
            } else {
                *deaths += 1;
            }
        }
        self.next.row_mut(row)[col as usize] = lives;
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("boundary", &self.boundary)
            .field("decay", &self.decay)
            .field("generation", &self.generation)
            .field("population", &self.population())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn world(width: u32, height: u32, boundary: Boundary) -> World {
        World::new(&WorldConfig {
            width,
            height,
            boundary,
            decay: 0.5,
            seed: 7,
        })
        .unwrap()
    }

    fn live_cells(w: &World) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for r in 0..w.height() {
            for c in 0..w.width() {
                if w.cells().get(r, c) == Some(1) {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Text rows for `rows x cols` cells taken from the low bits of `bits`.
    fn bit_rows(rows: u32, cols: u32, bits: u64) -> Vec<String> {
        (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| {
                        if bits >> (r * cols + c) & 1 == 1 {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn place_rows(w: &mut World, rows: &[String], row: i32, col: i32) {
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let p = Pattern::parse("bits", &refs).unwrap();
        w.place(&p, row, col, Anchor::TopLeft).unwrap();
    }

    #[test]
    fn rule_matches_b3s23_truth_table() {
        // The 8 cells around the centre of a 3x3 block, filled in order.
        let spots = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ];
        for alive in [0u8, 1] {
            for n in 0..=8usize {
                let mut chars = [['.'; 3]; 3];
                if alive == 1 {
                    chars[1][1] = '#';
                }
                for &(r, c) in spots.iter().take(n) {
                    chars[r][c] = '#';
                }
                let rows: Vec<String> = chars.iter().map(|r| r.iter().collect()).collect();
                let mut w = world(5, 5, Boundary::Bounded);
                place_rows(&mut w, &rows, 1, 1);
                w.step();
                let expected = u8::from(n == 3 || (alive == 1 && n == 2));
                assert_eq!(
                    w.cells().get(2, 2),
                    Some(expected),
                    "alive={alive} neighbours={n}"
                );
            }
        }
    }

    #[test]
    fn lone_cell_dies_of_isolation() {
        let mut w = world(3, 3, Boundary::Bounded);
        place_rows(&mut w, &["#".to_string()], 1, 1);
        let m = w.step();
        assert!(live_cells(&w).is_empty());
        assert_eq!(m.deaths, 1);
        assert_eq!(m.births, 0);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut w = world(5, 5, Boundary::Bounded);
        place_rows(&mut w, &["###".to_string()], 2, 1);
        let horizontal = live_cells(&w);

        w.step();
        assert_eq!(live_cells(&w), [(1, 2), (2, 2), (3, 2)]);

        w.step();
        assert_eq!(live_cells(&w), horizontal);
    }

    #[test]
    fn block_is_a_still_life() {
        let mut w = world(5, 5, Boundary::Bounded);
        place_rows(&mut w, &["##".to_string(), "##".to_string()], 1, 1);
        let before = live_cells(&w);
        let m = w.step();
        assert_eq!(live_cells(&w), before);
        assert_eq!(m.births, 0);
        assert_eq!(m.deaths, 0);
    }

    #[test]
    fn boundary_changes_the_rule_outcome_at_the_seam() {
        // (1,0) is dead with two live vertical neighbours. Its west
        // neighbour across the seam, (1,3), is live: bounded reads it as
        // dead (stays dead at n=2), wrapped sees n=3 and births it.
        let rows = vec!["#...".to_string(), "...#".to_string(), "#...".to_string()];

        let mut bounded = world(4, 3, Boundary::Bounded);
        place_rows(&mut bounded, &rows, 0, 0);
        bounded.step();
        assert_eq!(bounded.cells().get(1, 0), Some(0));

        let mut wrapped = world(4, 3, Boundary::Wrapped);
        place_rows(&mut wrapped, &rows, 0, 0);
        wrapped.step();
        assert_eq!(wrapped.cells().get(1, 0), Some(1));
    }

    #[test]
    fn step_counts_births_deaths_and_population() {
        let mut w = world(5, 5, Boundary::Bounded);
        place_rows(&mut w, &["###".to_string()], 2, 1);
        let m = w.step();
        // Horizontal to vertical: both ends die, top and bottom are born.
        assert_eq!(m.generation, 1);
        assert_eq!(m.births, 2);
        assert_eq!(m.deaths, 2);
        assert_eq!(m.population, 3);
        assert_eq!(w.population(), 3);
    }

    #[test]
    fn trail_of_a_cell_live_once_decays_geometrically() {
        let mut w = world(5, 5, Boundary::Bounded);
        place_rows(&mut w, &["###".to_string()], 2, 1);
        w.step();
        // (1,2) is live in the vertical phase: trail reads 1.0.
        assert_eq!(w.trail().get(1, 2), Some(1.0));

        // Erase everything with a grid-sized blank, then keep stepping.
        let blank = Pattern::blank("eraser", 5, 5).unwrap();
        w.place(&blank, 0, 0, Anchor::TopLeft).unwrap();
        for expected in [0.5f32, 0.25, 0.125] {
            w.step();
            let got = w.trail().get(1, 2).unwrap();
            assert!((got - expected).abs() < 1e-6, "got {got}");
        }
    }

    #[test]
    fn zero_decay_trail_mirrors_the_grid() {
        let mut w = World::new(&WorldConfig {
            width: 5,
            height: 5,
            decay: 0.0,
            ..WorldConfig::default()
        })
        .unwrap();
        place_rows(&mut w, &["###".to_string()], 2, 1);
        w.step();
        for r in 0..5 {
            for c in 0..5 {
                let cell = w.cells().get(r, c).unwrap();
                assert_eq!(w.trail().get(r, c), Some(f32::from(cell)));
            }
        }
    }

    #[test]
    fn trail_accumulates_past_one_on_persistent_cells() {
        let mut w = World::new(&WorldConfig {
            width: 5,
            height: 5,
            decay: 0.6,
            ..WorldConfig::default()
        })
        .unwrap();
        place_rows(&mut w, &["##".to_string(), "##".to_string()], 1, 1);
        w.step();
        w.step();
        // Still life: 1.0 * 0.6 + 1.0 after the second step.
        let t = w.trail().get(1, 1).unwrap();
        assert!((t - 1.6).abs() < 1e-6, "got {t}");
        // Bounded above by the geometric series limit 1 / (1 - decay).
        for _ in 0..100 {
            w.step();
        }
        assert!(w.trail().get(1, 1).unwrap() <= 1.0 / (1.0 - 0.6) + 1e-3);
    }

    #[test]
    fn seed_region_full_density_fills_exactly_the_rect() {
        let mut w = world(6, 6, Boundary::Bounded);
        w.seed_region(Rect::new(1, 2, 3, 5), 1.0).unwrap();
        assert_eq!(
            live_cells(&w),
            [(1, 2), (1, 3), (1, 4), (2, 2), (2, 3), (2, 4)]
        );

        let mut w = world(6, 6, Boundary::Bounded);
        w.seed_region(Rect::new(1, 2, 3, 5), 0.0).unwrap();
        assert!(live_cells(&w).is_empty());
    }

    #[test]
    fn seed_region_rejects_bad_regions_and_densities() {
        let mut w = world(6, 6, Boundary::Bounded);
        let oob = Rect::new(1, 1, 7, 4);
        match w.seed_region(oob, 0.5) {
            Err(WorldError::RegionOutOfBounds { rect, .. }) => assert_eq!(rect, oob),
            other => panic!("expected RegionOutOfBounds, got {other:?}"),
        }
        let inverted = Rect::new(4, 1, 2, 3);
        assert!(matches!(
            w.seed_region(inverted, 0.5),
            Err(WorldError::RegionOutOfBounds { .. })
        ));
        for bad in [f64::NAN, -0.1, 1.5] {
            assert!(matches!(
                w.seed_region(Rect::new(0, 0, 2, 2), bad),
                Err(WorldError::InvalidDensity { .. })
            ));
        }
        assert!(live_cells(&w).is_empty());
    }

    #[test]
    fn seeding_is_deterministic_per_seed() {
        let mut a = world(8, 8, Boundary::Bounded);
        let mut b = world(8, 8, Boundary::Bounded);
        a.seed_region(Rect::new(0, 0, 8, 8), 0.5).unwrap();
        b.seed_region(Rect::new(0, 0, 8, 8), 0.5).unwrap();
        assert_eq!(live_cells(&a), live_cells(&b));
        for _ in 0..10 {
            a.step();
            b.step();
        }
        assert_eq!(live_cells(&a), live_cells(&b));
    }

    #[test]
    fn place_rejects_patterns_larger_than_the_grid() {
        let mut w = world(5, 5, Boundary::Bounded);
        let tall = Pattern::blank("tall", 7, 3).unwrap();
        let err = w.place(&tall, 2, 2, Anchor::Center).unwrap_err();
        assert_eq!(
            err,
            StampError::OutOfRange {
                axis: "rows",
                source: 7,
                dest: 5,
            }
        );
        assert_eq!(w.population(), 0);
    }

    #[test]
    fn single_row_world_steps_without_panicking() {
        let mut w = world(4, 1, Boundary::Wrapped);
        place_rows(&mut w, &["##..".to_string()], 0, 0);
        w.step();
        let mut b = world(4, 1, Boundary::Bounded);
        place_rows(&mut b, &["##..".to_string()], 0, 0);
        b.step();
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        /// Bounded semantics are exactly zero padding: stepping a grid
        /// embedded in a dead margin gives the same interior.
        #[test]
        fn bounded_step_equals_zero_padded_step(
            rows in 1u32..=6,
            cols in 1u32..=6,
            bits in any::<u64>(),
        ) {
            let content = bit_rows(rows, cols, bits);

            let mut inner = world(cols, rows, Boundary::Bounded);
            place_rows(&mut inner, &content, 0, 0);
            inner.step();

            let mut outer = world(cols + 2, rows + 2, Boundary::Bounded);
            place_rows(&mut outer, &content, 1, 1);
            outer.step();

            for r in 0..rows {
                for c in 0..cols {
                    prop_assert_eq!(
                        inner.cells().get(r, c),
                        outer.cells().get(r + 1, c + 1),
                        "cell ({}, {})", r, c
                    );
                }
            }
        }

        /// Wrapped semantics equal the centre tile of a 3x3 tiling
        /// stepped under bounded rules.
        #[test]
        fn wrapped_step_equals_tiled_centre(
            rows in 1u32..=5,
            cols in 1u32..=5,
            bits in any::<u64>(),
        ) {
            let content = bit_rows(rows, cols, bits);

            let mut wrapped = world(cols, rows, Boundary::Wrapped);
            place_rows(&mut wrapped, &content, 0, 0);
            wrapped.step();

            let mut tiled = world(cols * 3, rows * 3, Boundary::Bounded);
            for tr in 0..3 {
                for tc in 0..3 {
                    place_rows(&mut tiled, &content, (tr * rows) as i32, (tc * cols) as i32);
                }
            }
            tiled.step();

            for r in 0..rows {
                for c in 0..cols {
                    prop_assert_eq!(
                        wrapped.cells().get(r, c),
                        tiled.cells().get(rows + r, cols + c),
                        "cell ({}, {})", r, c
                    );
                }
            }
        }
    }
}
