//! Resize layout: stretch-to-fill and aspect-fit placement.
//!
//! The output canvas always takes the user's exact target dimensions. The
//! two placement policies differ only in how the source is drawn onto it:
//!
//! - **Stretch**: the image fills the whole canvas, aspect ratio discarded.
//! - **Contain** (default): the image is scaled by
//!   `min(target_w/src_w, target_h/src_h)`, fully visible and centered;
//!   letterbox/pillarbox bars show the background fill.

use serde::{Deserialize, Serialize};

use crate::ImageDimensions;

/// Smallest accepted target edge, in pixels.
pub const MIN_TARGET: u32 = 1;
/// Largest accepted target edge, in pixels.
pub const MAX_TARGET: u32 = 4000;

/// Target dimensions and fill options for a resize session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeOptions {
    /// Output canvas width in pixels, within `[MIN_TARGET, MAX_TARGET]`.
    pub width: u32,
    /// Output canvas height in pixels, within `[MIN_TARGET, MAX_TARGET]`.
    pub height: u32,
    /// CSS hex fill for the canvas background; `None` leaves it transparent.
    pub background_color: Option<String>,
    /// Ignore the source aspect ratio and fill the whole canvas.
    pub stretch_to_fill: bool,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background_color: Some("#ffffff".to_string()),
            stretch_to_fill: false,
        }
    }
}

/// Partial update for [`ResizeOptions`], mirroring the UI's
/// `Partial<ResizeOptions>` object. Absent fields leave the stored value
/// untouched; `background_color: null` explicitly clears the fill.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeUpdate {
    pub width: Option<f64>,
    pub height: Option<f64>,
    // Double Option: outer = field present in the update, inner = the value
    // (None meaning transparent).
    #[serde(default, deserialize_with = "deserialize_present")]
    pub background_color: Option<Option<String>>,
    pub stretch_to_fill: Option<bool>,
}

/// Any value present in the payload (including `null`) becomes `Some(..)`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Canvas size and draw placement for a resize render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeLayout {
    /// Output canvas width, always the user-specified target.
    pub canvas_width: u32,
    /// Output canvas height, always the user-specified target.
    pub canvas_height: u32,
    /// Left edge of the drawn image.
    pub draw_x: f64,
    /// Top edge of the drawn image.
    pub draw_y: f64,
    /// Drawn image width.
    pub draw_width: f64,
    /// Drawn image height.
    pub draw_height: f64,
}

/// Compute the draw placement for a resize.
///
/// Pure and deterministic. Assumes a non-degenerate source and a target
/// within bounds; both are enforced before rendering.
pub fn compute_resize_layout(original: ImageDimensions, options: &ResizeOptions) -> ResizeLayout {
    let canvas_width = options.width;
    let canvas_height = options.height;

    if options.stretch_to_fill {
        return ResizeLayout {
            canvas_width,
            canvas_height,
            draw_x: 0.0,
            draw_y: 0.0,
            draw_width: f64::from(canvas_width),
            draw_height: f64::from(canvas_height),
        };
    }

    let scale = (f64::from(canvas_width) / f64::from(original.width))
        .min(f64::from(canvas_height) / f64::from(original.height));

    let draw_width = f64::from(original.width) * scale;
    let draw_height = f64::from(original.height) * scale;

    ResizeLayout {
        canvas_width,
        canvas_height,
        draw_x: (f64::from(canvas_width) - draw_width) / 2.0,
        draw_y: (f64::from(canvas_height) - draw_height) / 2.0,
        draw_width,
        draw_height,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
