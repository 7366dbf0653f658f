//! Per-tool option state.
//!
//! Each tool owns one session: it holds the current option values, clamps
//! every update to the field's declared bounds, and delegates rendering to
//! the matching transform. Clamping happens at update time, never at
//! render time, so a render can never observe an out-of-bound stored
//! value. Out-of-range updates are silently clamped rather than rejected;
//! interaction is never interrupted over a slider overshoot.

use crate::padding::PaddingSettings;
use crate::render::{render_padding, render_resize, RenderError, RenderResult};
use crate::resize::{ResizeOptions, ResizeUpdate, MAX_TARGET, MIN_TARGET};
use crate::SourceImage;

/// Default upper bound for padding values, in reference pixels.
pub const DEFAULT_MAX_PADDING: f64 = 500.0;

/// The two numeric padding fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingField {
    Horizontal,
    Vertical,
}

/// Option state for the padding tool.
#[derive(Debug, Clone)]
pub struct PaddingSession {
    settings: PaddingSettings,
    max_padding: f64,
}

impl Default for PaddingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PaddingSession {
    /// Create a session with default settings and the standard 500 bound.
    pub fn new() -> Self {
        Self::with_max_padding(DEFAULT_MAX_PADDING)
    }

    /// Create a session with a custom padding upper bound.
    pub fn with_max_padding(max_padding: f64) -> Self {
        Self {
            settings: PaddingSettings::default(),
            max_padding,
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &PaddingSettings {
        &self.settings
    }

    /// Set one padding field, clamped to `[0, max_padding]`.
    ///
    /// Non-finite values clamp to 0 so a bad numeric entry can never be
    /// stored.
    pub fn update_padding(&mut self, field: PaddingField, value: f64) {
        let clamped = if value.is_finite() {
            value.clamp(0.0, self.max_padding)
        } else {
            0.0
        };
        match field {
            PaddingField::Horizontal => self.settings.horizontal = clamped,
            PaddingField::Vertical => self.settings.vertical = clamped,
        }
    }

    /// Flip between an opaque white and a fully transparent border.
    pub fn toggle_transparent(&mut self) {
        self.settings.is_transparent = !self.settings.is_transparent;
    }

    /// Render the padded export for the current settings.
    pub fn render(&self, image: &SourceImage) -> Result<RenderResult, RenderError> {
        render_padding(image, &self.settings)
    }

    /// Filename the UI should suggest for the exported file.
    pub fn download_filename(&self) -> &'static str {
        "padded-image.png"
    }
}

/// Option state for the resize tool.
#[derive(Debug, Clone, Default)]
pub struct ResizeSession {
    options: ResizeOptions,
}

impl ResizeSession {
    /// Create a session with the default 800x600 white-background target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current options.
    pub fn options(&self) -> &ResizeOptions {
        &self.options
    }

    /// Apply a partial update. Present fields replace the stored values
    /// (last write wins); width and height are clamped to
    /// `[MIN_TARGET, MAX_TARGET]`.
    pub fn update(&mut self, update: ResizeUpdate) {
        if let Some(width) = update.width {
            self.options.width = clamp_target(width);
        }
        if let Some(height) = update.height {
            self.options.height = clamp_target(height);
        }
        if let Some(background_color) = update.background_color {
            self.options.background_color = background_color;
        }
        if let Some(stretch_to_fill) = update.stretch_to_fill {
            self.options.stretch_to_fill = stretch_to_fill;
        }
    }

    /// Render the resized export for the current options.
    pub fn render(&self, image: &SourceImage) -> Result<RenderResult, RenderError> {
        render_resize(image, &self.options)
    }

    /// Filename the UI should suggest for the exported file.
    pub fn download_filename(&self) -> &'static str {
        "resized-image.png"
    }
}

fn clamp_target(value: f64) -> u32 {
    if !value.is_finite() {
        return MIN_TARGET;
    }
    value.round().clamp(f64::from(MIN_TARGET), f64::from(MAX_TARGET)) as u32
}


// ============================================================================
// Property-Based Tests
// ============================================================================
