//! Padding tool bindings.
//!
//! Wraps a core `PaddingSession` behind a `#[wasm_bindgen]` struct so the
//! UI can push slider values into it and request the padded export.

use framefit_core::{PaddingField, PaddingSession};
use wasm_bindgen::prelude::*;

use crate::types::JsSourceImage;

/// The padding tool: border margins with optional transparency.
///
/// One instance per editing session. Padding values are in reference
/// pixels at a 1000px-wide image and are clamped to `[0, 500]` on update.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const tool = new PaddingTool();
/// tool.update_padding('horizontal', 20);
/// tool.update_padding('vertical', 10);
/// tool.toggle_transparent_padding();
///
/// const png = tool.render(source);
/// download(png, tool.download_filename());
/// ```
#[wasm_bindgen]
#[derive(Default)]
pub struct PaddingTool {
    session: PaddingSession,
}

#[wasm_bindgen]
impl PaddingTool {
    /// Create a padding tool with zero padding and a white background.
    #[wasm_bindgen(constructor)]
    pub fn new() -> PaddingTool {
        PaddingTool {
            session: PaddingSession::new(),
        }
    }

    /// Set one padding field (`'horizontal'` or `'vertical'`), clamped to
    /// `[0, 500]`. Unknown field names are ignored.
    pub fn update_padding(&mut self, field: &str, value: f64) {
        let field = match field {
            "horizontal" => PaddingField::Horizontal,
            "vertical" => PaddingField::Vertical,
            _ => return,
        };
        self.session.update_padding(field, value);
    }

    /// Flip between an opaque white and a fully transparent border.
    pub fn toggle_transparent_padding(&mut self) {
        self.session.toggle_transparent();
    }

    /// Current horizontal padding in reference pixels.
    #[wasm_bindgen(getter)]
    pub fn horizontal(&self) -> f64 {
        self.session.settings().horizontal
    }

    /// Current vertical padding in reference pixels.
    #[wasm_bindgen(getter)]
    pub fn vertical(&self) -> f64 {
        self.session.settings().vertical
    }

    /// Whether the border is left transparent.
    #[wasm_bindgen(getter)]
    pub fn is_transparent(&self) -> bool {
        self.session.settings().is_transparent
    }

    /// Render the padded export as PNG bytes.
    ///
    /// Failures are logged to the browser console and returned as an
    /// error string.
    pub fn render(&self, image: &JsSourceImage) -> Result<Vec<u8>, JsValue> {
        let source = image.to_source();
        self.session
            .render(&source)
            .map(|result| result.bytes)
            .map_err(|e| {
                let message = e.to_string();
                web_sys::console::error_1(&JsValue::from_str(&message));
                JsValue::from_str(&message)
            })
    }

    /// Filename the UI should suggest when saving the export.
    pub fn download_filename(&self) -> String {
        self.session.download_filename().to_string()
    }
}
