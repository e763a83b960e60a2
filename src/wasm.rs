//! JavaScript bindings.
//!
//! Available with the `tsify` feature, which also emits TypeScript
//! declarations for [`AvatarProfile`]:
//!
//! ```toml
//! [dependencies]
//! boring-avatars = { version = "0.1", features = ["tsify"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { generateAvatar, AvatarRenderer } from 'boring-avatars';
//!
//! await init();
//!
//! // One-off
//! element.innerHTML = generateAvatar('Mary Baker', { variant: 'beam', square: true });
//!
//! // Reusable settings
//! const renderer = new AvatarRenderer();
//! renderer.importProfileJson('{"variant":"ring"}');
//! const svg = renderer.render('Amelia Earhart');
//! ```

use wasm_bindgen::prelude::*;

use crate::avatar::{AvatarGenerator, Configurable};
use crate::error::AvatarError;
use crate::profile::AvatarProfile;

/// Decodes a profile passed from JS. `undefined` and `null` give the defaults.
fn profile_from_js(value: JsValue) -> Result<AvatarProfile, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(AvatarProfile::default());
    }

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Failed to decode profile: {}", e)))
}

fn to_js_error(err: AvatarError) -> JsError {
    JsError::new(&err.to_string())
}

/// Renders the SVG document for `name` with the given profile object.
#[wasm_bindgen(js_name = "generateAvatar")]
pub fn generate_avatar(name: &str, profile: JsValue) -> Result<String, JsError> {
    let profile = profile_from_js(profile)?;
    let generator = AvatarGenerator::from_profile(&profile).map_err(to_js_error)?;

    generator
        .render(name)
        .map(|avatar| avatar.into_string())
        .map_err(to_js_error)
}

// ============================================================================
// AvatarRenderer
// ============================================================================

/// An [`AvatarGenerator`] held on the JS side across renders.
#[wasm_bindgen]
pub struct AvatarRenderer {
    generator: AvatarGenerator,
}

#[wasm_bindgen]
impl AvatarRenderer {
    /// Creates a renderer with the default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> AvatarRenderer {
        AvatarRenderer {
            generator: AvatarGenerator::default(),
        }
    }

    /// Renders the SVG document for `name`.
    pub fn render(&self, name: &str) -> Result<String, JsError> {
        self.generator
            .render(name)
            .map(|avatar| avatar.into_string())
            .map_err(to_js_error)
    }

    /// Applies a profile object. Invalid profiles leave the settings unchanged.
    #[wasm_bindgen(js_name = "applyProfile")]
    pub fn apply_profile(&mut self, profile: JsValue) -> Result<(), JsError> {
        let profile = profile_from_js(profile)?;
        self.generator.apply_profile(&profile).map_err(to_js_error)
    }

    // ---- Profile Import/Export ----

    /// Exports the current settings as a JSON string.
    #[wasm_bindgen(js_name = "exportProfileJson")]
    pub fn export_profile_json(&self) -> Result<String, JsError> {
        self.generator
            .export_profile()
            .to_json()
            .map_err(|e| JsError::new(&format!("Failed to serialize profile: {}", e)))
    }

    /// Imports settings from a JSON string.
    #[wasm_bindgen(js_name = "importProfileJson")]
    pub fn import_profile_json(&mut self, json: &str) -> Result<(), JsError> {
        let profile = AvatarProfile::from_json(json)
            .map_err(|e| JsError::new(&format!("Failed to parse profile: {}", e)))?;
        self.generator.apply_profile(&profile).map_err(to_js_error)
    }

    /// Returns to the default settings.
    pub fn reset(&mut self) {
        self.generator = AvatarGenerator::default();
    }
}

impl Default for AvatarRenderer {
    fn default() -> Self {
        Self::new()
    }
}
