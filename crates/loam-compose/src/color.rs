//! Color maps: 256-entry RGB lookup tables built from gradient stops.

use loam_core::Raster;

use crate::error::ComposeError;
use crate::image::Image;

/// A named 256-entry RGB lookup table.
///
/// Built once from a handful of gradient stops and applied per frame, so
/// shading a surface is a single table index per cell. Entry 0 is the
/// "hot" end (a live cell after inversion), entry 255 the background.
#[derive(Clone, PartialEq, Eq)]
pub struct ColorMap {
    name: String,
    table: [[u8; 3]; 256],
}

impl ColorMap {
    /// Builds a table by linear interpolation between gradient stops.
    ///
    /// Stops are `(position, [r, g, b])` with positions non-decreasing
    /// from exactly 0.0 to exactly 1.0 and channels in `[0.0, 1.0]`. At
    /// least two stops are required.
    pub fn from_stops(name: &str, stops: &[(f32, [f32; 3])]) -> Result<Self, ComposeError> {
        if stops.len() < 2 {
            return Err(ComposeError::InvalidGradient {
                reason: format!("need at least 2 stops, got {}", stops.len()),
            });
        }
        if stops[0].0 != 0.0 {
            return Err(ComposeError::InvalidGradient {
                reason: format!("first stop must sit at 0.0, got {}", stops[0].0),
            });
        }
        let last = stops[stops.len() - 1].0;
        if last != 1.0 {
            return Err(ComposeError::InvalidGradient {
                reason: format!("last stop must sit at 1.0, got {last}"),
            });
        }
        for pair in stops.windows(2) {
            if !(pair[1].0 >= pair[0].0) {
                return Err(ComposeError::InvalidGradient {
                    reason: format!("positions must be non-decreasing: {} > {}", pair[0].0, pair[1].0),
                });
            }
        }
        for &(pos, rgb) in stops {
            if rgb.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(ComposeError::InvalidGradient {
                    reason: format!("channels at {pos} outside [0.0, 1.0]: {rgb:?}"),
                });
            }
        }

        let mut table = [[0u8; 3]; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let t = i as f32 / 255.0;
            *entry = sample(stops, t);
        }
        Ok(Self {
            name: name.to_owned(),
            table,
        })
    }

    /// The map's registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The RGB entry for one 8-bit level.
    pub fn color(&self, level: u8) -> [u8; 3] {
        self.table[level as usize]
    }

    /// Shades a float surface into an RGB image.
    ///
    /// Each value is inverted (`1 - v`) so live and recently-live cells
    /// render at the dark end, saturated into `[0, 1]` (long-lived trail
    /// sums clamp rather than wrap), scaled by 255, and truncated to the
    /// table index.
    pub fn shade(&self, surface: &Raster<f32>) -> Image {
        let mut data = Vec::with_capacity(surface.len() * 3);
        for &v in surface.as_slice() {
            let level = ((1.0 - v).clamp(0.0, 1.0) * 255.0) as u8;
            data.extend_from_slice(&self.table[level as usize]);
        }
        Image::from_raw(surface.rows(), surface.cols(), data)
    }

    // ── Presets ────────────────────────────────────────────────

    /// Grayscale with a blue cast, the classic X-ray look.
    ///
    /// # Panics
    ///
    /// Never: the preset stops are statically valid.
    pub fn bone() -> Self {
        Self::from_stops(
            "bone",
            &[
                (0.0, [0.0, 0.0, 0.0]),
                (0.375, [0.3281, 0.3281, 0.4531]),
                (0.75, [0.6562, 0.7812, 0.7812]),
                (1.0, [1.0, 1.0, 1.0]),
            ],
        )
        .expect("preset stops are valid")
    }

    /// Black through red and yellow to white.
    ///
    /// # Panics
    ///
    /// Never: the preset stops are statically valid.
    pub fn hot() -> Self {
        Self::from_stops(
            "hot",
            &[
                (0.0, [0.0, 0.0, 0.0]),
                (0.375, [1.0, 0.0, 0.0]),
                (0.75, [1.0, 1.0, 0.0]),
                (1.0, [1.0, 1.0, 1.0]),
            ],
        )
        .expect("preset stops are valid")
    }

    /// Abyssal blue through green to white.
    ///
    /// # Panics
    ///
    /// Never: the preset stops are statically valid.
    pub fn ocean() -> Self {
        Self::from_stops(
            "ocean",
            &[
                (0.0, [0.0, 0.0, 0.0]),
                (0.3333, [0.0, 0.0, 0.3333]),
                (0.6667, [0.0, 0.5, 0.6667]),
                (1.0, [1.0, 1.0, 1.0]),
            ],
        )
        .expect("preset stops are valid")
    }

    /// Sepia-tinted pastel ramp.
    ///
    /// # Panics
    ///
    /// Never: the preset stops are statically valid.
    pub fn pink() -> Self {
        Self::from_stops(
            "pink",
            &[
                (0.0, [0.1176, 0.0, 0.0]),
                (0.375, [0.7608, 0.5059, 0.5059]),
                (0.75, [0.902, 0.7882, 0.6784]),
                (1.0, [1.0, 1.0, 1.0]),
            ],
        )
        .expect("preset stops are valid")
    }

    /// The built-in maps in their selection order: bone, hot, ocean, pink.
    pub fn standard_set() -> Vec<Self> {
        vec![Self::bone(), Self::hot(), Self::ocean(), Self::pink()]
    }
}

impl std::fmt::Debug for ColorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorMap").field("name", &self.name).finish()
    }
}

/// Linearly interpolates the stop list at `t`, assuming validated stops.
fn sample(stops: &[(f32, [f32; 3])], t: f32) -> [u8; 3] {
    let mut rgb = stops[stops.len() - 1].1;
    for pair in stops.windows(2) {
        let (p0, c0) = pair[0];
        let (p1, c1) = pair[1];
        if t <= p1 {
            let s = if p1 > p0 { (t - p0) / (p1 - p0) } else { 0.0 };
            rgb = [
                c0[0] + (c1[0] - c0[0]) * s,
                c0[1] + (c1[1] - c0[1]) * s,
                c0[2] + (c1[2] - c0[2]) * s,
            ];
            break;
        }
    }
    [
        (rgb[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb[2].clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}
