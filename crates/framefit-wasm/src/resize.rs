//! Resize tool bindings.
//!
//! Wraps a core `ResizeSession`. Option updates arrive as a plain JS
//! object (`Partial<ResizeOptions>`) and are deserialized through
//! serde-wasm-bindgen, matching how the UI batches field changes.

use framefit_core::{ResizeSession, ResizeUpdate};
use wasm_bindgen::prelude::*;

use crate::types::JsSourceImage;

/// The resize tool: fit or stretch to explicit target dimensions.
///
/// One instance per editing session. Targets are clamped to `[1, 4000]`
/// on update; defaults are 800x600 on a white background with aspect-fit.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const tool = new ResizeTool();
/// tool.update_options({ width: 1200, stretchToFill: false });
/// tool.update_options({ backgroundColor: null }); // transparent bars
///
/// const png = tool.render(source);
/// download(png, tool.download_filename());
/// ```
#[wasm_bindgen]
#[derive(Default)]
pub struct ResizeTool {
    session: ResizeSession,
}

#[wasm_bindgen]
impl ResizeTool {
    /// Create a resize tool with the default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> ResizeTool {
        ResizeTool {
            session: ResizeSession::new(),
        }
    }

    /// Apply a partial options object. Absent keys leave the stored values
    /// untouched; `backgroundColor: null` clears the fill; unknown keys
    /// are ignored.
    pub fn update_options(&mut self, updates: JsValue) -> Result<(), JsValue> {
        let update: ResizeUpdate = serde_wasm_bindgen::from_value(updates)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.session.update(update);
        Ok(())
    }

    /// Current target width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.session.options().width
    }

    /// Current target height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.session.options().height
    }

    /// Current background fill as a CSS hex string, or undefined when the
    /// background is transparent.
    #[wasm_bindgen(getter)]
    pub fn background_color(&self) -> Option<String> {
        self.session.options().background_color.clone()
    }

    /// Whether the source is stretched to fill the canvas.
    #[wasm_bindgen(getter)]
    pub fn stretch_to_fill(&self) -> bool {
        self.session.options().stretch_to_fill
    }

    /// Render the resized export as PNG bytes.
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

impl ResizeTool {
    /// Apply an update without crossing the JS boundary. Used by tests.
    #[allow(dead_code)]
    pub(crate) fn apply_update(&mut self, update: ResizeUpdate) {
        self.session.update(update);
    }
}


/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_update_options_from_js_object() {
        let mut tool = ResizeTool::new();

        let updates = js_sys::Object::new();
        js_sys::Reflect::set(&updates, &"width".into(), &1200.into()).unwrap();
        tool.update_options(updates.into()).unwrap();

        assert_eq!(tool.width(), 1200);
        assert_eq!(tool.height(), 600);
    }

    #[wasm_bindgen_test]
    fn test_render_produces_png() {
        let tool = ResizeTool::new();
        let image = JsSourceImage::new(40, 30, vec![255u8; 40 * 30 * 4]);

        let png = tool.render(&image).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[wasm_bindgen_test]
    fn test_render_empty_image_fails() {
        let tool = ResizeTool::new();
        let image = JsSourceImage::new(0, 0, vec![]);

        assert!(tool.render(&image).is_err());
    }
}
