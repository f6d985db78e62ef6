//! Pixel-addressable color surfaces consumed by the image encoder.

use crate::colormap::Color;

/// Pixel layout a surface produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    /// 8 bits per channel, red, green, blue, alpha.
    Rgba8,
}

impl ColorModel {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            ColorModel::Rgba8 => 4,
        }
    }
}

/// Anything that can answer "what color is pixel (x, y)".
pub trait PixelSurface {
    /// Width in pixels.
    fn width(&self) -> usize;

    /// Height in pixels.
    fn height(&self) -> usize;

    /// Color of the pixel at column `x`, row `y`.
    fn color_at(&self, x: usize, y: usize) -> Color;

    fn color_model(&self) -> ColorModel {
        ColorModel::Rgba8
    }
}

/// Render a surface into row-major RGBA pixel data (4 bytes per pixel).
///
/// No size limit is applied here; `png::encode_surface` checks it first.
pub fn rasterize<S: PixelSurface + ?Sized>(surface: &S) -> Vec<u8> {
    let width = surface.width();
    let height = surface.height();
    let capacity = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(surface.color_model().bytes_per_pixel()))
        .unwrap_or(0);
    let mut pixels = Vec::with_capacity(capacity);

    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&surface.color_at(x, y).to_array());
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Checkerboard;

    impl PixelSurface for Checkerboard {
        fn width(&self) -> usize {
            3
        }

        fn height(&self) -> usize {
            2
        }

        fn color_at(&self, x: usize, y: usize) -> Color {
            if (x + y) % 2 == 0 {
                Color::new(255, 255, 255, 255)
            } else {
                Color::transparent()
            }
        }
    }

    #[test]
    fn test_rasterize_row_major() {
        let pixels = rasterize(&Checkerboard);
        assert_eq!(pixels.len(), 3 * 2 * 4);
        assert_eq!(&pixels[0..4], &[255, 255, 255, 255]);
        assert_eq!(&pixels[4..8], &[0, 0, 0, 0]);
        // First pixel of the second row
        assert_eq!(&pixels[12..16], &[0, 0, 0, 0]);
    }
}
