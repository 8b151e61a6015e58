//! WASM bindings for flowchart-ascii.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;
use crate::syntax::types::Direction;

/// Render flowchart source to Unicode box-drawing text with default settings.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_to_string(src, &RenderConfig::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Render flowchart source with full control over options.
///
/// - `unicode`: true for Unicode box-drawing chars, false for plain ASCII
/// - `padding`: spaces between a node border and its label
/// - `direction`: "LR", "RL", "TB", "BT", or empty string for the header's own
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    src: &str,
    unicode: bool,
    padding: usize,
    direction: &str,
) -> Result<String, JsError> {
    let base = if unicode {
        RenderConfig::default()
    } else {
        RenderConfig::ascii()
    };
    let mut config = base.with_padding(padding);
    if !direction.is_empty() {
        let direction = direction
            .parse::<Direction>()
            .map_err(|e| JsError::new(&e.to_string()))?;
        config = config.with_direction(direction);
    }
    crate::render_to_string(src, &config).map_err(|e| JsError::new(&e.to_string()))
}
