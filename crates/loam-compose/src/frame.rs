//! Final frame assembly: shade, stack, magnify.

use loam_core::Raster;

use crate::color::ColorMap;
use crate::error::ComposeError;
use crate::image::Image;

/// Composes one displayable frame: the play surface shaded through
/// `map`, the pre-rendered picker strip stacked beneath it, and the
/// whole image magnified for the screen.
///
/// Fails when the strip was laid out for a different width than the
/// play surface.
pub fn render(
    play: &Raster<f32>,
    strip: &Image,
    map: &ColorMap,
    magnification: u32,
) -> Result<Image, ComposeError> {
    let shaded = map.shade(play);
    let stacked = shaded.vstack(strip)?;
    Ok(stacked.magnify(magnification))
}
