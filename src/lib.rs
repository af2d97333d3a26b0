//! # page-effects
//!
//! WASM presentation layer for a static site: a light/dark theme toggle
//! persisted to `localStorage`, and scroll-driven visual effects (entrance
//! animations, hover lift, parallax, scroll progress).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Theme state machine and one-shot entrance tracking |
//! | [`util`] | Hex colors, scroll geometry, injected stylesheet |
//! | [`config`] | Optional JSON page configuration |
//! | [`consts`] | DOM names and default tuning values |
//! | [`error`] | Error type for setup paths |
//! | `browser` | `web-sys` wiring and the wasm start function (`browser` feature) |

pub mod config;
pub mod consts;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "browser")]
pub mod browser;
