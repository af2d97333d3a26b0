//! Browser wiring for the scroll and hover effects.
//!
//! Three independent behaviors are attached at mount: one-shot entrance
//! animations driven by an `IntersectionObserver`, hover lift on pointer
//! enter/leave, and scroll-linked progress bar plus parallax. A failure in
//! one is logged and leaves the others in place.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::dom::{add_class, listen, media_matches, query_all, remove_style, root_element, set_style, sibling_index};
use crate::config::{EffectsConfig, EntranceConfig, HoverConfig, ScrollConfig};
use crate::consts::{ANIMATED_CLASS, REDUCED_MOTION_QUERY};
use crate::error::EffectsError;
use crate::state::entrance::{EntranceTracker, Intersection};
use crate::util::scroll::{parallax_transform_css, progress_width_css, scroll_progress_percent};
use crate::util::stylesheet::ENTRANCE_READY_CLASS;

#[derive(Default)]
pub struct AnimationManager {
    entrance: Option<Rc<RefCell<EntranceTracker>>>,
    hover_targets: usize,
    scroll_bound: bool,
}

impl AnimationManager {
    pub fn mount(window: &Window, document: &Document, config: &EffectsConfig) -> Self {
        let mut manager = Self::default();

        match mount_entrance(window, document, &config.entrance) {
            Ok(tracker) => manager.entrance = tracker,
            Err(err) => log::warn!("entrance animations disabled: {err}"),
        }
        match mount_hover(document, &config.hover) {
            Ok(count) => manager.hover_targets = count,
            Err(err) => log::warn!("hover effects disabled: {err}"),
        }
        match mount_scroll(window, document, &config.scroll) {
            Ok(bound) => manager.scroll_bound = bound,
            Err(err) => log::warn!("scroll effects disabled: {err}"),
        }

        manager
    }

    /// Entrance targets not yet revealed, or `None` without an observer.
    pub fn pending_entrances(&self) -> Option<usize> {
        let tracker = self.entrance.as_ref()?;
        match tracker.try_borrow() {
            Ok(tracker) => Some(tracker.pending()),
            Err(_) => None,
        }
    }

    pub fn hover_targets(&self) -> usize {
        self.hover_targets
    }

    pub fn scroll_bound(&self) -> bool {
        self.scroll_bound
    }
}

fn mount_entrance(
    window: &Window,
    document: &Document,
    config: &EntranceConfig,
) -> Result<Option<Rc<RefCell<EntranceTracker>>>, EffectsError> {
    if !js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))? {
        log::debug!("IntersectionObserver missing; entrance animations off");
        return Ok(None);
    }

    let targets = Rc::new(query_all(document, &config.selector)?);
    let tracker = Rc::new(RefCell::new(EntranceTracker::new(targets.len(), config.stagger_ms)));

    let cb_targets = Rc::clone(&targets);
    let cb_tracker = Rc::clone(&tracker);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let batch = entries
            .iter()
            .flat_map(|value| value.dyn_into::<IntersectionObserverEntry>())
            .filter_map(|entry| {
                let el = entry.target();
                let target = cb_targets.iter().position(|candidate| *candidate == el)?;
                Some(Intersection { target, is_intersecting: entry.is_intersecting(), sibling_index: sibling_index(&el) })
            })
            .collect::<Vec<_>>();

        let reveals = match cb_tracker.try_borrow_mut() {
            Ok(mut tracker) => tracker.observe(batch),
            Err(err) => {
                log::debug!("entrance tracker busy: {err}");
                return;
            }
        };

        for reveal in reveals {
            let Some(el) = cb_targets.get(reveal.target) else {
                continue;
            };
            set_style(el, "animation-delay", &reveal.delay_css());
            add_class(el, ANIMATED_CLASS);
            observer.unobserve(el);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in targets.iter() {
        observer.observe(el);
    }
    add_class(&root_element(document)?, ENTRANCE_READY_CLASS);
    log::debug!("observing {} entrance targets", targets.len());

    Ok(Some(tracker))
}

fn mount_hover(document: &Document, config: &HoverConfig) -> Result<usize, EffectsError> {
    let targets = query_all(document, &config.selector)?;
    let transform: Rc<str> = Rc::from(config.transform_css());

    for el in &targets {
        let entered = el.clone();
        let lifted = Rc::clone(&transform);
        listen(el, "mouseenter", move |_| set_style(&entered, "transform", &lifted))?;

        let left = el.clone();
        listen(el, "mouseleave", move |_| remove_style(&left, "transform"))?;
    }

    Ok(targets.len())
}

fn mount_scroll(window: &Window, document: &Document, config: &ScrollConfig) -> Result<bool, EffectsError> {
    let root = root_element(document)?;
    let progress_bar = document.get_element_by_id(&config.progress_bar_id);

    let mut images: Vec<Element> = Vec::new();
    if config.respect_reduced_motion && media_matches(window, REDUCED_MOTION_QUERY) {
        log::debug!("reduced motion requested; parallax off");
    } else {
        for selector in &config.parallax_selectors {
            images.extend(query_all(document, selector)?);
        }
    }

    if progress_bar.is_none() && images.is_empty() {
        return Ok(false);
    }

    let factor = config.parallax_factor;
    let win = window.clone();
    listen(window, "scroll", move |_| {
        let offset = win.scroll_y().unwrap_or(0.0);

        if let Some(bar) = &progress_bar {
            let viewport = win.inner_height().map_or(0.0, |h| h.as_f64().unwrap_or(0.0));
            let percent = scroll_progress_percent(offset, f64::from(root.scroll_height()), viewport);
            set_style(bar, "width", &progress_width_css(percent));
        }

        if !images.is_empty() {
            let transform = parallax_transform_css(offset, factor);
            for img in &images {
                set_style(img, "transform", &transform);
            }
        }
    })?;

    Ok(true)
}
