//! The grid engine for the loam sandbox.
//!
//! A [`World`] owns the cell grid, its double buffer, and the fading
//! trail, and advances them one generation per [`step()`](World::step)
//! under the B3/S23 rule:
//!
//! - [`Boundary`]: bounded (zero-padded) or wrapped (toroidal) edges
//! - [`WorldConfig`]: validated startup configuration
//! - [`StepMetrics`]: per-generation population and timing counters
//!
//! Everything here is synchronous and single-threaded; callers own the
//! cadence and interleave placements between steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod config;
pub mod metrics;
pub mod world;

pub use boundary::Boundary;
pub use config::{ConfigError, WorldConfig};
pub use metrics::StepMetrics;
pub use world::{Rect, World, WorldError};
