//! Scale-aware padding layout.
//!
//! Padding values are specified in reference pixels at a 1000px-wide image
//! and scale up proportionally for wider sources, so a border of 20 looks
//! similar on an 800px snapshot and a 4000px photo. Scaling is only ever
//! upward: images narrower than the reference width keep their padding
//! values as-is.
//!
//! The layout calculation is pure; compositing and encoding live in
//! [`crate::render`].

use serde::{Deserialize, Serialize};

use crate::ImageDimensions;

/// Reference width for padding scale calculations.
pub const BASE_WIDTH: f64 = 1000.0;

/// Padding amounts and background mode for one editing session.
///
/// `horizontal` and `vertical` are in reference pixels (see module docs)
/// and are kept within `[0, max_padding]` by the owning session, so the
/// calculator can assume non-negative finite values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddingSettings {
    /// Left/right padding in reference pixels.
    pub horizontal: f64,
    /// Top/bottom padding in reference pixels.
    pub vertical: f64,
    /// Leave the border fully transparent instead of filling it white.
    pub is_transparent: bool,
}

impl Default for PaddingSettings {
    fn default() -> Self {
        Self {
            horizontal: 0.0,
            vertical: 0.0,
            is_transparent: false,
        }
    }
}

/// Padding amounts after scale compensation, in output pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledPadding {
    pub horizontal: f64,
    pub vertical: f64,
}

/// Output canvas size and image offset for a padded render.
///
/// Derived fresh from dimensions + settings on every render; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddedLayout {
    /// Output canvas width: original width plus padding on both sides.
    pub padded_width: f64,
    /// Output canvas height: original height plus padding on both sides.
    pub padded_height: f64,
    /// Effective padding after scale compensation. The source image is
    /// drawn at this offset.
    pub scaled_padding: ScaledPadding,
}

/// Compute the padding scale factor for a source image.
///
/// Returns `max(width / BASE_WIDTH, 1)`: proportional for images wider
/// than the reference width, exactly 1 for everything narrower.
pub fn scale_factor(original: ImageDimensions) -> f64 {
    (f64::from(original.width) / BASE_WIDTH).max(1.0)
}

/// Compute the padded canvas size and image placement.
///
/// Pure and deterministic. Assumes `settings` has already been clamped to
/// non-negative values by the option-update boundary.
pub fn compute_padded_layout(
    original: ImageDimensions,
    settings: &PaddingSettings,
) -> PaddedLayout {
    let factor = scale_factor(original);

    let scaled_padding = ScaledPadding {
        horizontal: settings.horizontal * factor,
        vertical: settings.vertical * factor,
    };

    PaddedLayout {
        padded_width: f64::from(original.width) + scaled_padding.horizontal * 2.0,
        padded_height: f64::from(original.height) + scaled_padding.vertical * 2.0,
        scaled_padding,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
