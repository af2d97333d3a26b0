//! Browser entry point and DOM wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `browser` feature. The wasm start function waits
//! for the DOM, builds one [`PageEffects`] context, and publishes the theme
//! handle on `window`. Listener closures are leaked for the page lifetime, so
//! nothing here is torn down.

pub mod animation;
pub mod dom;
pub mod style;
pub mod theme;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use self::animation::AnimationManager;
use self::theme::{SharedTheme, ThemeHandle, mount_theme};
use crate::config::EffectsConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::EffectsError;

/// Everything mounted for the current page.
pub struct PageEffects {
    pub theme: Option<SharedTheme>,
    pub animations: AnimationManager,
}

impl PageEffects {
    /// Mount both managers. A theme failure leaves the animations running.
    pub fn mount(window: &Window, document: &Document) -> Self {
        let config = load_config(document);
        let theme = match mount_theme(window, document, &config) {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::warn!("theme manager disabled: {err}");
                None
            }
        };
        let animations = AnimationManager::mount(window, document, &config);

        Self { theme, animations }
    }

    /// Expose the theme controller as `window.themeManager`.
    pub fn publish(&self, window: &Window) -> Result<(), EffectsError> {
        let Some(theme) = &self.theme else {
            return Ok(());
        };
        ThemeHandle::new(Rc::clone(theme)).publish(window)
    }

    fn current_theme(&self) -> Option<&'static str> {
        let theme = self.theme.as_ref()?;
        match theme.try_borrow() {
            Ok(manager) => Some(manager.theme().as_str()),
            Err(_) => None,
        }
    }
}

fn load_config(document: &Document) -> EffectsConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    EffectsConfig::from_json_or_default(raw.as_deref())
}

fn boot() -> Result<(), EffectsError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let effects = PageEffects::mount(&window, &document);
    effects.publish(&window)?;
    log::info!(
        "page effects ready: theme={}, entrance pending={:?}, hover targets={}, scroll bound={}",
        effects.current_theme().unwrap_or("none"),
        effects.animations.pending_entrances(),
        effects.animations.hover_targets(),
        effects.animations.scroll_bound(),
    );
    Ok(())
}

fn boot_logged() {
    if let Err(err) = boot() {
        log::warn!("page effects unavailable: {err}");
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::warn!("logger already installed: {err}");
    }

    let document = match dom::window().and_then(|window| dom::document(&window)) {
        Ok(document) => document,
        Err(err) => {
            log::warn!("page effects unavailable: {err}");
            return;
        }
    };
    if !dom::is_loading(&document) {
        boot_logged();
        return;
    }
    if let Err(err) = dom::listen(&document, "DOMContentLoaded", |_| boot_logged()) {
        log::warn!("cannot wait for DOMContentLoaded: {err}");
    }
}
