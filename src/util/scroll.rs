//! Scroll-linked geometry: progress bar width and parallax offsets.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Percentage of the scrollable range covered by `offset`, within `0..=100`.
///
/// A page with no scrollable range reports 0.
pub fn scroll_progress_percent(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Width value for the progress bar element.
pub fn progress_width_css(percent: f64) -> String {
    format!("{percent}%")
}

/// Vertical translation applied to parallax images.
pub fn parallax_offset(offset: f64, factor: f64) -> f64 {
    let shift = offset * factor;
    // Avoid rendering "-0px" at the top of the page.
    if shift.abs() < f64::EPSILON { 0.0 } else { shift }
}

pub fn parallax_transform_css(offset: f64, factor: f64) -> String {
    format!("translateY({}px)", parallax_offset(offset, factor))
}
