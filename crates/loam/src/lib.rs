//! Loam: an interactive Game-of-Life sandbox.
//!
//! A [`Session`] owns a cell world evolving under Conway's rule, a
//! catalog of placeable species, and a rendered picker strip. The
//! embedder forwards pointer and key events to the session, ticks it,
//! and blits the composed frame; everything else happens here. Loam
//! does not open windows or read input devices.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! // A 600x300 bounded world, built-in species, aquarium pre-seeded.
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//!
//! // Stamp the selected species at display pixel (200, 100).
//! let outcome = session.pointer_down(200, 100);
//! assert!(matches!(outcome, ClickOutcome::Placed { .. }));
//!
//! // One tick: advance the world, then compose the frame.
//! let metrics = session.step();
//! assert_eq!(metrics.generation, 1);
//! let frame = session.render();
//! assert_eq!(frame.cols(), 600 * session.magnification());
//! ```
//!
//! # Modules
//!
//! Each re-exported module corresponds to a sub-crate; [`config`],
//! [`session`], and [`species`] live in this crate.
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `loam-core` | Rasters, patterns, the catalog, stamp clipping |
//! | [`engine`] | `loam-engine` | The world: life rule, boundary modes, trail, seeding |
//! | [`compose`] | `loam-compose` | Color maps, the picker strip, frame assembly |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Rasters, patterns, the catalog, and stamp clipping (`loam-core`).
pub use loam_core as types;

/// The simulated world and its configuration (`loam-engine`).
pub use loam_engine as engine;

/// Color maps, picker layout, and frame assembly (`loam-compose`).
pub use loam_compose as compose;

pub mod config;
pub mod session;
pub mod species;

pub use config::{Aquarium, SessionConfig, SessionError};
pub use session::{ClickOutcome, Session};

/// Common imports for typical sandbox usage.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Aquarium, SessionConfig, SessionError};
    pub use crate::session::{ClickOutcome, Session};
    pub use crate::species::standard_catalog;

    pub use loam_core::{Anchor, Catalog, Pattern, Raster};

    pub use loam_engine::{Boundary, Rect, StepMetrics, World, WorldConfig};

    pub use loam_compose::{ColorMap, Image, Picker};
}
