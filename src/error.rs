//! Error type shared by configuration loading and browser wiring.
//!
//! Nothing here reaches the user. Setup functions propagate these with `?`
//! and the caller logs them before skipping the affected effect.

#[derive(Debug, thiserror::Error)]
pub enum EffectsError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("javascript call failed: {0}")]
    Js(String),
    #[error("invalid config json: {0}")]
    Config(#[from] serde_json::Error),
    #[error("config value out of range: {field} = {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for EffectsError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
