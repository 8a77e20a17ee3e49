//! Rendering for the loam sandbox: color maps, the picker strip, and
//! final frame assembly.
//!
//! The play grid and picker are composed as `f32` intensity rasters,
//! shaded through a [`ColorMap`] into RGB [`Image`]s, stacked, and
//! magnified for display. Intensity is inverted during shading so a
//! dead background renders light and live cells render dark.
//!
//! Rendering here is purely in-memory; putting pixels on a screen is
//! the embedder's job.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod frame;
pub mod image;
pub mod picker;

pub use color::ColorMap;
pub use error::ComposeError;
pub use image::Image;
pub use picker::{Picker, Span};
