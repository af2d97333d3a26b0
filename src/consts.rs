//! Shared names and default values for the page effects crate.

// ── Theme ───────────────────────────────────────────────────────

/// Default `localStorage` key holding the explicit theme preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Media query signalling an OS-level dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class toggled on the root element while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Transient class enabling color transitions during a theme switch.
pub const TRANSITION_CLASS: &str = "theme-transition";

/// How long the transition class stays on the root element.
pub const DEFAULT_TRANSITION_MS: u32 = 300;

pub const TOGGLE_ID: &str = "theme-toggle";
pub const SUN_ICON_ID: &str = "sun-icon";
pub const MOON_ICON_ID: &str = "moon-icon";

/// Semantic color names whose `--color-<name>` values get an `-rgb` twin.
pub const COLOR_NAMES: [&str; 6] = ["primary", "secondary", "accent", "gaming", "tech", "media"];

// ── Entrance ────────────────────────────────────────────────────

pub const ENTRANCE_SELECTOR: &str = ".animate-on-scroll";

/// Class marking an element whose entrance animation has started.
pub const ANIMATED_CLASS: &str = "animated";

/// Fraction of the element that must be visible to count as intersecting.
pub const ENTRANCE_THRESHOLD: f64 = 0.1;

/// Bottom inset of the observer root, in pixels.
pub const ENTRANCE_ROOT_MARGIN_BOTTOM_PX: u32 = 50;

/// Delay added per sibling position (0.1 s).
pub const ENTRANCE_STAGGER_MS: u32 = 100;

// ── Hover ───────────────────────────────────────────────────────

pub const HOVER_SELECTOR: &str = ".hover-lift";
pub const HOVER_LIFT_PX: f64 = 8.0;
pub const HOVER_SCALE: f64 = 1.02;

// ── Scroll ──────────────────────────────────────────────────────

pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const PARALLAX_SELECTORS: [&str; 2] = [".hero img", ".parallax img"];

/// Parallax translation per pixel scrolled.
pub const PARALLAX_FACTOR: f64 = -0.2;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Page ────────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "page-effects-config";

/// Id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "page-effects-styles";

/// Name under which the theme handle is published on `window`.
pub const GLOBAL_THEME_HANDLE: &str = "themeManager";
