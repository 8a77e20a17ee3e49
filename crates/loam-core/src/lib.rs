//! Core buffers, patterns, and placement rules for the loam sandbox.
//!
//! This is the leaf crate with zero internal dependencies. Everything 2D
//! in the workspace is built on one type:
//!
//! - [`Raster`]: a dense row-major buffer, generic over the cell type
//!   (`u8` grids and bitmaps, `f32` trail and picker canvases)
//!
//! plus the model layered on top of it:
//!
//! - [`Pattern`]: a named life-form bitmap parsed from text rows
//! - [`Catalog`]: the insertion-ordered pattern registry
//! - [`Raster::stamp`]: edge-clipped placement of one raster into another
//!
//! The stamping rules (center anchoring, top-left inset, flush
//! bottom-right clamp) live in [`stamp`] and are shared by the grid
//! engine and the picker compositor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod pattern;
pub mod raster;
pub mod stamp;

pub use catalog::Catalog;
pub use error::{CatalogError, GridError, PatternError, StampError};
pub use pattern::Pattern;
pub use raster::{Raster, MAX_DIM};
pub use stamp::{Anchor, EDGE_INSET};
