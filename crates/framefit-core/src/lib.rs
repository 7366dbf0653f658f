//! Framefit Core - Image padding and resize engine
//!
//! This crate provides the transform engine behind the Framefit image tools:
//! scale-aware padding, aspect-fit and stretch resizing, background
//! compositing onto an in-memory RGBA canvas, and PNG export.
//!
//! The surrounding UI (file picking, previews, download links) lives in the
//! browser; this crate only receives decoded pixels plus option values and
//! hands back encoded bytes.

pub mod canvas;
pub mod color;
pub mod encode;
pub mod padding;
pub mod render;
pub mod resize;
pub mod session;

pub use canvas::Canvas;
pub use color::Color;
pub use encode::{encode_png, EncodeError};
pub use padding::{
    compute_padded_layout, scale_factor, PaddedLayout, PaddingSettings, ScaledPadding, BASE_WIDTH,
};
pub use render::{render_padding, render_resize, RenderError, RenderResult};
pub use resize::{
    compute_resize_layout, ResizeLayout, ResizeOptions, ResizeUpdate, MAX_TARGET, MIN_TARGET,
};
pub use session::{PaddingField, PaddingSession, ResizeSession, DEFAULT_MAX_PADDING};

/// Natural pixel size of a loaded source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A decoded source image with RGBA pixel data.
///
/// The pixel layout matches what `CanvasRenderingContext2D.getImageData`
/// produces: 4 bytes per pixel, row-major order. The core never loads or
/// decodes image files itself; the UI supplies this once per loaded image.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl SourceImage {
    /// Create a new SourceImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a SourceImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbaImage for compositing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Natural dimensions of this image.
    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_image_creation() {
        let pixels = vec![0u8; 100 * 50 * 4];
        let img = SourceImage::new(100, 50, pixels);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.byte_size(), 20000);
        assert_eq!(img.dimensions(), ImageDimensions::new(100, 50));
        assert!(!img.is_empty());
    }

    #[test]
    fn test_source_image_empty() {
        let img = SourceImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_rgba_round_trip() {
        let mut rgba = image::RgbaImage::new(4, 2);
        rgba.put_pixel(1, 0, image::Rgba([10, 20, 30, 40]));

        let src = SourceImage::from_rgba_image(rgba);
        assert_eq!(src.width, 4);
        assert_eq!(src.height, 2);

        let back = src.to_rgba_image().unwrap();
        assert_eq!(back.get_pixel(1, 0), &image::Rgba([10, 20, 30, 40]));
    }

    #[test]
    fn test_to_rgba_image_rejects_bad_buffer() {
        let img = SourceImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 7],
        };
        assert!(img.to_rgba_image().is_none());
    }
}
