//! Browser wiring for the theme state machine.
//!
//! [`BrowserThemeHost`] maps [`ThemeHost`] onto `localStorage`, the root
//! element's classes and style, and the icon elements. [`mount_theme`] wires
//! the toggle button and the OS color-scheme listener, and [`ThemeHandle`] is
//! the object published on `window` for debugging.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MediaQueryListEvent, Storage, Window};

use super::dom::{add_class, listen, media_matches, remove_class, root_element, set_style};
use super::style::inject_styles;
use crate::config::EffectsConfig;
use crate::consts::*;
use crate::error::EffectsError;
use crate::state::theme::{Theme, ThemeHost, ThemeManager};
use crate::util::color::{color_rgb_var, color_var};

pub type SharedTheme = Rc<RefCell<ThemeManager<BrowserThemeHost>>>;

pub struct BrowserThemeHost {
    window: Window,
    document: Document,
    root: Element,
    storage: Option<Storage>,
    storage_key: String,
    pending_transition: RefCell<Option<Timeout>>,
}

impl BrowserThemeHost {
    pub fn new(window: Window, document: Document, storage_key: String) -> Result<Self, EffectsError> {
        let root = root_element(&document)?;
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                None
            }
        };
        Ok(Self { window, document, root, storage, storage_key, pending_transition: RefCell::new(None) })
    }
}

impl ThemeHost for BrowserThemeHost {
    fn stored_theme(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(&self.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("reading {} failed: {err:?}", self.storage_key);
                None
            }
        }
    }

    fn store_theme(&self, theme: Theme) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(&self.storage_key, theme.as_str()) {
            log::debug!("writing {} failed: {err:?}", self.storage_key);
        }
    }

    fn system_prefers_dark(&self) -> bool {
        media_matches(&self.window, DARK_SCHEME_QUERY)
    }

    fn set_dark_class(&self, dark: bool) {
        if dark {
            add_class(&self.root, DARK_CLASS);
        } else {
            remove_class(&self.root, DARK_CLASS);
        }
    }

    fn set_icon_display(&self, sun: &str, moon: &str) {
        if let (Some(sun_icon), Some(moon_icon)) =
            (self.document.get_element_by_id(SUN_ICON_ID), self.document.get_element_by_id(MOON_ICON_ID))
        {
            set_style(&sun_icon, "display", sun);
            set_style(&moon_icon, "display", moon);
        }
    }

    fn computed_color(&self, name: &str) -> Option<String> {
        let style = match self.window.get_computed_style(&self.root) {
            Ok(Some(style)) => style,
            Ok(None) => return None,
            Err(err) => {
                log::debug!("computed style unavailable: {err:?}");
                return None;
            }
        };
        match style.get_property_value(&color_var(name)) {
            Ok(value) if !value.trim().is_empty() => Some(value),
            Ok(_) => None,
            Err(err) => {
                log::debug!("reading --color-{name} failed: {err:?}");
                None
            }
        }
    }

    fn set_color_rgb(&self, name: &str, triplet: &str) {
        set_style(&self.root, &color_rgb_var(name), triplet);
    }

    fn start_transition(&self, duration_ms: u32) {
        add_class(&self.root, TRANSITION_CLASS);
        let root = self.root.clone();
        let removal = Timeout::new(duration_ms, move || remove_class(&root, TRANSITION_CLASS));
        // Replacing the previous timeout drops it, which cancels its removal.
        drop(self.pending_transition.replace(Some(removal)));
    }
}

/// Inject the stylesheet, build the theme manager, and attach its listeners.
pub fn mount_theme(window: &Window, document: &Document, config: &EffectsConfig) -> Result<SharedTheme, EffectsError> {
    inject_styles(document, config.transition_ms, &config.entrance.selector)?;
    let host = BrowserThemeHost::new(window.clone(), document.clone(), config.storage_key.clone())?;
    let manager: SharedTheme = Rc::new(RefCell::new(ThemeManager::new(host, config.transition_ms)));

    if let Some(toggle) = document.get_element_by_id(TOGGLE_ID) {
        let on_click = Rc::clone(&manager);
        listen(&toggle, "click", move |_| {
            with_manager(&on_click, |m| {
                m.toggle_theme();
            });
        })?;
    } else {
        log::debug!("no #{TOGGLE_ID} on this page");
    }

    match window.match_media(DARK_SCHEME_QUERY) {
        Ok(Some(query)) => {
            let on_change = Rc::clone(&manager);
            listen(&query, "change", move |event| {
                let prefers_dark = event.dyn_ref::<MediaQueryListEvent>().is_some_and(MediaQueryListEvent::matches);
                with_manager(&on_change, |m| {
                    m.on_system_change(prefers_dark);
                });
            })?;
        }
        Ok(None) => {}
        Err(err) => log::debug!("color-scheme query unavailable: {err:?}"),
    }

    Ok(manager)
}

fn with_manager<R>(shared: &SharedTheme, f: impl FnOnce(&mut ThemeManager<BrowserThemeHost>) -> R) -> Option<R> {
    match shared.try_borrow_mut() {
        Ok(mut manager) => Some(f(&mut manager)),
        Err(err) => {
            log::debug!("theme manager busy: {err}");
            None
        }
    }
}

/// Theme controller exposed to page scripts as `window.themeManager`.
#[wasm_bindgen]
pub struct ThemeHandle {
    inner: SharedTheme,
}

impl ThemeHandle {
    pub fn new(inner: SharedTheme) -> Self {
        Self { inner }
    }

    /// Publish this handle on `window`, transferring ownership to JS.
    pub fn publish(self, window: &Window) -> Result<(), EffectsError> {
        js_sys::Reflect::set(window, &JsValue::from_str(GLOBAL_THEME_HANDLE), &JsValue::from(self))?;
        Ok(())
    }
}

#[wasm_bindgen]
impl ThemeHandle {
    /// Flip the theme and return the new value.
    pub fn toggle(&self) -> Option<String> {
        with_manager(&self.inner, |m| m.toggle_theme().as_str().to_owned())
    }

    /// Apply `light` or `dark`; anything else is ignored.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, theme: &str) -> bool {
        with_manager(&self.inner, |m| m.set_theme(theme)).unwrap_or(false)
    }

    /// Current theme, or `undefined` while a change is in progress.
    #[wasm_bindgen(js_name = getTheme)]
    pub fn get_theme(&self) -> Option<String> {
        match self.inner.try_borrow() {
            Ok(manager) => Some(manager.theme().as_str().to_owned()),
            Err(err) => {
                log::debug!("theme manager busy: {err}");
                None
            }
        }
    }
}
