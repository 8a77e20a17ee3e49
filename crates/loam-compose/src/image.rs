//! 8-bit RGB images and the pixel operations frames are built from.

use crate::error::ComposeError;

/// A row-major RGB image, 3 bytes per pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    rows: u32,
    cols: u32,
    data: Vec<u8>,
}

impl Image {
    /// Wraps a raw RGB buffer. Internal: callers go through
    /// [`ColorMap::shade`](crate::ColorMap::shade).
    pub(crate) fn from_raw(rows: u32, cols: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), rows as usize * cols as usize * 3);
        Self { rows, cols, data }
    }

    /// Height in pixels.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Width in pixels.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// The raw buffer, row-major, RGB byte triples.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The pixel at `(row, col)`, or `None` when out of bounds.
    pub fn pixel(&self, row: u32, col: u32) -> Option<[u8; 3]> {
        if row < self.rows && col < self.cols {
            let i = (row as usize * self.cols as usize + col as usize) * 3;
            Some([self.data[i], self.data[i + 1], self.data[i + 2]])
        } else {
            None
        }
    }

    /// Stacks `below` underneath `self`.
    ///
    /// Both images must share a width.
    pub fn vstack(&self, below: &Image) -> Result<Image, ComposeError> {
        if self.cols != below.cols {
            return Err(ComposeError::WidthMismatch {
                top: self.cols,
                bottom: below.cols,
            });
        }
        let mut data = Vec::with_capacity(self.data.len() + below.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&below.data);
        Ok(Image::from_raw(self.rows + below.rows, self.cols, data))
    }

    /// Nearest-neighbour upscale: every pixel becomes a `factor x factor`
    /// block. Factors below 2 return the image unchanged.
    pub fn magnify(&self, factor: u32) -> Image {
        if factor < 2 {
            return self.clone();
        }
        let f = factor as usize;
        let cols = self.cols as usize;
        let mut data = Vec::with_capacity(self.data.len() * f * f);
        let mut wide = Vec::with_capacity(cols * f * 3);
        for row in self.data.chunks_exact(cols * 3) {
            wide.clear();
            for px in row.chunks_exact(3) {
                for _ in 0..f {
                    wide.extend_from_slice(px);
                }
            }
            for _ in 0..f {
                data.extend_from_slice(&wide);
            }
        }
        Image::from_raw(self.rows * factor, self.cols * factor, data)
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(rows: u32, cols: u32, seed: u8) -> Image {
        let data = (0..rows as usize * cols as usize * 3)
            .map(|i| seed.wrapping_add(i as u8))
            .collect();
        Image::from_raw(rows, cols, data)
    }

    #[test]
    fn vstack_concatenates_rows() {
        let top = image(2, 3, 0);
        let bottom = image(1, 3, 100);
        let stacked = top.vstack(&bottom).unwrap();
        assert_eq!(stacked.rows(), 3);
        assert_eq!(stacked.cols(), 3);
        assert_eq!(stacked.pixel(0, 0), top.pixel(0, 0));
        assert_eq!(stacked.pixel(2, 2), bottom.pixel(0, 2));
    }

    #[test]
    fn vstack_rejects_width_mismatch() {
        let top = image(2, 3, 0);
        let bottom = image(2, 4, 0);
        assert_eq!(
            top.vstack(&bottom).unwrap_err(),
            ComposeError::WidthMismatch { top: 3, bottom: 4 }
        );
    }

    #[test]
    fn magnify_replicates_pixels_in_blocks() {
        let img = image(2, 2, 0);
        let big = img.magnify(3);
        assert_eq!(big.rows(), 6);
        assert_eq!(big.cols(), 6);
        for r in 0..6 {
            for c in 0..6 {
                assert_eq!(big.pixel(r, c), img.pixel(r / 3, c / 3), "({r}, {c})");
            }
        }
    }

    #[test]
    fn magnify_by_one_is_identity() {
        let img = image(2, 3, 7);
        assert_eq!(img.magnify(1), img);
        assert_eq!(img.magnify(0), img);
    }
}
