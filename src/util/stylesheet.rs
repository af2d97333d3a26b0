//! The stylesheet injected once per page.
//!
//! Entrance targets are only hidden once the observer is installed (the root
//! carries [`ENTRANCE_READY_CLASS`]), so pages without `IntersectionObserver`
//! keep their content visible.

#[cfg(test)]
#[path = "stylesheet_test.rs"]
mod stylesheet_test;

use crate::consts::{ANIMATED_CLASS, REDUCED_MOTION_QUERY, TRANSITION_CLASS};

/// Root class set when the entrance observer is active.
pub const ENTRANCE_READY_CLASS: &str = "entrance-ready";

/// Scope every comma-separated part of `selector` under the ready class.
pub fn scoped_selector(selector: &str, suffix: &str) -> String {
    selector
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| format!(".{ENTRANCE_READY_CLASS} {part}{suffix}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn stylesheet(transition_ms: u32, entrance_selector: &str) -> String {
    let t = TRANSITION_CLASS;
    let hidden = scoped_selector(entrance_selector, "");
    let revealed = scoped_selector(entrance_selector, &format!(".{ANIMATED_CLASS}"));
    format!(
        r".{t}, .{t} *, .{t} *::before, .{t} *::after {{
  transition: background-color {transition_ms}ms ease, color {transition_ms}ms ease,
    border-color {transition_ms}ms ease, box-shadow {transition_ms}ms ease, fill {transition_ms}ms ease !important;
}}
{hidden} {{
  opacity: 0;
  transform: translateY(30px);
}}
{revealed} {{
  animation: page-effects-fade-in-up 0.6s ease forwards;
}}
@keyframes page-effects-fade-in-up {{
  from {{ opacity: 0; transform: translateY(30px); }}
  to {{ opacity: 1; transform: translateY(0); }}
}}
@media {REDUCED_MOTION_QUERY} {{
  .{t}, .{t} *, .{t} *::before, .{t} *::after {{
    transition: none !important;
  }}
  {hidden}, {revealed} {{
    animation: none;
    opacity: 1;
    transform: none;
  }}
}}
"
    )
}
