//! In-memory RGBA canvas.
//!
//! Stand-in for the browser's offscreen canvas during export: the render
//! pipeline allocates one, optionally fills it with a background color,
//! composites the source image onto it, and encodes the result. Keeping it
//! as a plain pixel buffer means every transform is testable headless.

use image::imageops;
use image::{Rgba, RgbaImage};

use crate::color::Color;
use crate::encode::{encode_png, EncodeError};

/// An RGBA drawing surface with canvas-like operations.
///
/// New canvases start fully transparent (all channels zero), matching a
/// freshly created `<canvas>` element.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Allocate a transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Fill the entire canvas with a solid color.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Draw a source image at `(x, y)` scaled to `width x height`.
    ///
    /// Scaling uses Lanczos3 (export quality); when the draw size matches
    /// the source size the image is composited as-is. Compositing is
    /// alpha-over, so translucent sources blend with the background fill.
    /// Regions outside the canvas are clipped.
    pub fn draw_image(&mut self, source: &RgbaImage, x: i64, y: i64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if source.dimensions() == (width, height) {
            imageops::overlay(&mut self.pixels, source, x, y);
        } else {
            let scaled = imageops::resize(source, width, height, imageops::FilterType::Lanczos3);
            imageops::overlay(&mut self.pixels, &scaled, x, y);
        }
    }

    /// Read a single pixel. Used by tests to probe composited output.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Encode the canvas contents as PNG.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        encode_png(self.pixels.as_raw(), self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A solid RGBA image for compositing tests.
    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(rgba))
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(4, 4);
        assert_eq!(canvas.pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(3, 3), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill() {
        let mut canvas = Canvas::new(3, 3);
        canvas.fill(Color::WHITE);

        assert_eq!(canvas.pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(2, 2), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_draw_image_native_size() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill(Color::WHITE);
        canvas.draw_image(&solid(4, 4, [0, 0, 255, 255]), 3, 3, 4, 4);

        // Inside the drawn region
        assert_eq!(canvas.pixel(3, 3), Rgba([0, 0, 255, 255]));
        assert_eq!(canvas.pixel(6, 6), Rgba([0, 0, 255, 255]));
        // Outside stays white
        assert_eq!(canvas.pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(2, 3), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_draw_image_scaled() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw_image(&solid(2, 2, [255, 0, 0, 255]), 0, 0, 8, 8);

        // A solid source stays solid under any filter
        assert_eq!(canvas.pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(7, 7), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_draw_image_zero_size_is_noop() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_image(&solid(2, 2, [255, 0, 0, 255]), 0, 0, 0, 0);

        assert_eq!(canvas.pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_draw_image_clips_at_edges() {
        let mut canvas = Canvas::new(4, 4);
        // Draw partially past the bottom-right corner
        canvas.draw_image(&solid(4, 4, [0, 255, 0, 255]), 2, 2, 4, 4);

        assert_eq!(canvas.pixel(3, 3), Rgba([0, 255, 0, 255]));
        assert_eq!(canvas.pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_alpha_over_compositing() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill(Color::WHITE);
        // Fully transparent source leaves the background untouched
        canvas.draw_image(&solid(2, 2, [0, 0, 0, 0]), 0, 0, 2, 2);

        assert_eq!(canvas.pixel(0, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_encode_matches_contents() {
        let mut canvas = Canvas::new(3, 2);
        canvas.fill(Color {
            r: 10,
            g: 20,
            b: 30,
            a: 255,
        });

        let png = canvas.encode().unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(1, 1), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_encode_zero_size_canvas_fails() {
        let canvas = Canvas::new(0, 0);
        assert!(canvas.encode().is_err());
    }
}
