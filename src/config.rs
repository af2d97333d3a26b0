//! Page-level configuration embedded as JSON.
//!
//! A page may carry `<script type="application/json" id="page-effects-config">`
//! to override selectors and tuning values. Every field is optional; missing
//! fields keep the defaults from [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::error::EffectsError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub storage_key: String,
    pub transition_ms: u32,
    pub entrance: EntranceConfig,
    pub hover: HoverConfig,
    pub scroll: ScrollConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            transition_ms: DEFAULT_TRANSITION_MS,
            entrance: EntranceConfig::default(),
            hover: HoverConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin_bottom_px: u32,
    pub stagger_ms: u32,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            selector: ENTRANCE_SELECTOR.to_owned(),
            threshold: ENTRANCE_THRESHOLD,
            root_margin_bottom_px: ENTRANCE_ROOT_MARGIN_BOTTOM_PX,
            stagger_ms: ENTRANCE_STAGGER_MS,
        }
    }
}

impl EntranceConfig {
    /// Observer root margin shrinking the viewport from the bottom.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.root_margin_bottom_px)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub selector: String,
    pub lift_px: f64,
    pub scale: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self { selector: HOVER_SELECTOR.to_owned(), lift_px: HOVER_LIFT_PX, scale: HOVER_SCALE }
    }
}

impl HoverConfig {
    /// CSS transform applied while the pointer is over an element.
    pub fn transform_css(&self) -> String {
        format!("translateY(-{}px) scale({})", self.lift_px, self.scale)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub progress_bar_id: String,
    pub parallax_selectors: Vec<String>,
    pub parallax_factor: f64,
    pub respect_reduced_motion: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            progress_bar_id: PROGRESS_BAR_ID.to_owned(),
            parallax_selectors: PARALLAX_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            parallax_factor: PARALLAX_FACTOR,
            respect_reduced_motion: true,
        }
    }
}

impl EffectsConfig {
    /// Parse and validate a JSON config block.
    pub fn from_json(raw: &str) -> Result<Self, EffectsError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `raw` when present, falling back to defaults on any error.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("page-effects: ignoring config: {err}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), EffectsError> {
        let threshold = self.entrance.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(EffectsError::OutOfRange { field: "entrance.threshold", value: threshold });
        }
        let lift = self.hover.lift_px;
        if !lift.is_finite() || lift < 0.0 {
            return Err(EffectsError::OutOfRange { field: "hover.lift_px", value: lift });
        }
        let scale = self.hover.scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(EffectsError::OutOfRange { field: "hover.scale", value: scale });
        }
        if !self.scroll.parallax_factor.is_finite() {
            return Err(EffectsError::OutOfRange { field: "scroll.parallax_factor", value: self.scroll.parallax_factor });
        }
        Ok(())
    }
}
