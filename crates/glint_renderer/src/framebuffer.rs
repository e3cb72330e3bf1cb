//! CPU-side image storage and PNG output.

use glint_core::Color;
use image::RgbImage;
use std::path::Path;

/// A row-major grid of linear RGB radiance values.
///
/// Radiance is unbounded above; values clamp to `[0, 1]` only when the
/// buffer is converted for output.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn write_pixel(&mut self, col: u32, row: u32, color: Color) {
        let index = (row * self.width + col) as usize;
        self.pixels[index] = color;
    }

    pub fn pixel(&self, col: u32, row: u32) -> Color {
        self.pixels[(row * self.width + col) as usize]
    }

    /// Overlay grid lines every `interval` pixels, a render-debugging aid.
    pub fn print_grid(&mut self, interval: u32, color: Color) {
        for row in 0..self.height {
            for col in 0..self.width {
                if row % interval == 0 || col % interval == 0 {
                    self.write_pixel(col, row, color);
                }
            }
        }
    }

    /// Convert to an 8-bit RGB image, clamping each channel to `[0, 1]`.
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut img = RgbImage::new(self.width, self.height);
        for (col, row, pixel) in img.enumerate_pixels_mut() {
            let color = self.pixel(col, row);
            *pixel = image::Rgb([
                (color.x.clamp(0.0, 1.0) * 255.0) as u8,
                (color.y.clamp(0.0, 1.0) * 255.0) as u8,
                (color.z.clamp(0.0, 1.0) * 255.0) as u8,
            ]);
        }
        img
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.to_rgb_image().save(path)
    }
}
