//! Injection of the page effects stylesheet.

use web_sys::Document;

use crate::consts::STYLE_ELEMENT_ID;
use crate::error::EffectsError;
use crate::util::stylesheet::stylesheet;

/// Append the stylesheet to `<head>` unless a previous mount already did.
pub fn inject_styles(document: &Document, transition_ms: u32, entrance_selector: &str) -> Result<(), EffectsError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(EffectsError::NoDocument)?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&stylesheet(transition_ms, entrance_selector)));
    head.append_child(&style)?;
    Ok(())
}
