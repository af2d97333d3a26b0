//! Small `web-sys` helpers shared by the browser managers.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::EffectsError;

pub fn window() -> Result<Window, EffectsError> {
    web_sys::window().ok_or(EffectsError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, EffectsError> {
    window.document().ok_or(EffectsError::NoDocument)
}

/// Whether the parser is still building the document.
pub fn is_loading(document: &Document) -> bool {
    match js_sys::Reflect::get(document, &JsValue::from_str("readyState")) {
        Ok(state) => state.as_string().as_deref() == Some("loading"),
        Err(err) => {
            log::debug!("readyState unavailable: {err:?}");
            false
        }
    }
}

pub fn root_element(document: &Document) -> Result<Element, EffectsError> {
    document.document_element().ok_or(EffectsError::NoDocument)
}

pub fn media_matches(window: &Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(list)) if list.matches())
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EffectsError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect())
}

/// Set an inline style property; non-HTML elements are skipped.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().set_property(property, value) {
        log::debug!("style {property}={value} rejected: {err:?}");
    }
}

pub fn remove_style(el: &Element, property: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().remove_property(property) {
        log::debug!("style {property} removal failed: {err:?}");
    }
}

pub fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::debug!("adding class {class} failed: {err:?}");
    }
}

pub fn remove_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().remove_1(class) {
        log::debug!("removing class {class} failed: {err:?}");
    }
}

/// Attach `handler` for the page lifetime.
///
/// The closure is leaked; listeners live as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EffectsError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Zero-based position of `el` among its parent's element children.
pub fn sibling_index(el: &Element) -> usize {
    let Some(parent) = el.parent_element() else {
        return 0;
    };
    let children = parent.children();
    (0..children.length())
        .position(|i| children.item(i).as_ref() == Some(el))
        .unwrap_or(0)
}
