//! Framefit WASM - WebAssembly bindings for the Framefit image tools
//!
//! This crate exposes the framefit-core sessions to a JavaScript/TypeScript
//! UI. Each tool (padding, resize) gets one stateful wrapper holding its
//! option values; the UI pushes clamped updates into it and asks it to
//! render when the user exports.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for decoded image data
//! - `padding` - The padding tool session
//! - `resize` - The resize tool session
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSourceImage, PaddingTool } from '@framefit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Hand over the decoded pixels once the image element has loaded
//! const data = ctx.getImageData(0, 0, img.naturalWidth, img.naturalHeight);
//! const source = new JsSourceImage(data.width, data.height, new Uint8Array(data.data));
//!
//! const tool = new PaddingTool();
//! tool.update_padding('horizontal', 20);
//! const png = tool.render(source);
//! ```

use wasm_bindgen::prelude::*;

mod padding;
mod resize;
mod types;

// Re-export public types
pub use padding::PaddingTool;
pub use resize::ResizeTool;
pub use types::JsSourceImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
