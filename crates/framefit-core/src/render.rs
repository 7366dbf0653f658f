//! Export rendering: compositing plus PNG encoding.
//!
//! These functions tie the pure layout calculators to the [`Canvas`]
//! surface. Each call allocates a fresh canvas, composites the source
//! image per the computed layout, and returns encoded PNG bytes. Failures
//! are local to the call; the owning session stays usable afterwards.

use thiserror::Error;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::encode::EncodeError;
use crate::padding::{compute_padded_layout, PaddingSettings};
use crate::resize::{compute_resize_layout, ResizeOptions, MAX_TARGET, MIN_TARGET};
use crate::SourceImage;

/// Errors that can occur while rendering an export.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A precondition was violated (no image, degenerate dimensions,
    /// out-of-range options). No output was produced.
    #[error("Render unavailable: {0}")]
    Unavailable(String),

    /// The platform failed to produce encoded bytes. Retryable: rerunning
    /// the render is safe.
    #[error(transparent)]
    EncodeFailed(#[from] EncodeError),
}

/// An encoded export: PNG bytes plus their pixel dimensions.
///
/// Created fresh per render call; ownership passes to the caller.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// PNG-encoded image data.
    pub bytes: Vec<u8>,
}

fn source_rgba(image: &SourceImage) -> Result<image::RgbaImage, RenderError> {
    if image.is_empty() {
        return Err(RenderError::Unavailable(
            "no loaded image to render".to_string(),
        ));
    }
    image.to_rgba_image().ok_or_else(|| {
        RenderError::Unavailable("source pixel buffer does not match its dimensions".to_string())
    })
}

/// Render a padded export.
///
/// Allocates a canvas of the padded size, fills it opaque white unless the
/// transparent option is set, draws the source at native resolution offset
/// by the scaled padding, and encodes the result as PNG.
pub fn render_padding(
    image: &SourceImage,
    settings: &PaddingSettings,
) -> Result<RenderResult, RenderError> {
    let source = source_rgba(image)?;
    let layout = compute_padded_layout(image.dimensions(), settings);

    let width = layout.padded_width.round() as u32;
    let height = layout.padded_height.round() as u32;

    let mut canvas = Canvas::new(width, height);
    if !settings.is_transparent {
        canvas.fill(Color::WHITE);
    }
    canvas.draw_image(
        &source,
        layout.scaled_padding.horizontal.round() as i64,
        layout.scaled_padding.vertical.round() as i64,
        image.width,
        image.height,
    );

    let bytes = canvas.encode()?;
    Ok(RenderResult {
        width,
        height,
        bytes,
    })
}

/// Render a resized export.
///
/// Allocates a canvas at the exact target size, fills it when a background
/// color is set (letterbox bars take this color), draws the source per the
/// stretch or contain layout, and encodes the result as PNG.
pub fn render_resize(
    image: &SourceImage,
    options: &ResizeOptions,
) -> Result<RenderResult, RenderError> {
    let source = source_rgba(image)?;

    // The session clamps at update time, so an out-of-range target here
    // means the options came from somewhere else entirely.
    for edge in [options.width, options.height] {
        if !(MIN_TARGET..=MAX_TARGET).contains(&edge) {
            return Err(RenderError::Unavailable(format!(
                "resize target {edge} outside [{MIN_TARGET}, {MAX_TARGET}]"
            )));
        }
    }

    let background = match &options.background_color {
        Some(hex) => Some(Color::parse_hex(hex).ok_or_else(|| {
            RenderError::Unavailable(format!("invalid background color {hex:?}"))
        })?),
        None => None,
    };

    let layout = compute_resize_layout(image.dimensions(), options);

    let mut canvas = Canvas::new(layout.canvas_width, layout.canvas_height);
    if let Some(color) = background {
        canvas.fill(color);
    }
    canvas.draw_image(
        &source,
        layout.draw_x.round() as i64,
        layout.draw_y.round() as i64,
        layout.draw_width.round() as u32,
        layout.draw_height.round() as u32,
    );

    let bytes = canvas.encode()?;
    Ok(RenderResult {
        width: layout.canvas_width,
        height: layout.canvas_height,
        bytes,
    })
}
