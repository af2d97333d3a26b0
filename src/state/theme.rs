//! Light/dark theme state machine.
//!
//! [`ThemeManager`] owns the authoritative theme and pushes every change out
//! through a [`ThemeHost`]. The browser host lives in `crate::browser::theme`;
//! tests drive the same logic with an in-memory host.
//!
//! TRADE-OFFS
//! ==========
//! Construction only reads storage: the initial theme is reflected into the
//! page without being written back. Every later change (toggle, `set_theme`,
//! or an OS change while nothing is stored) persists, so the first OS change
//! becomes the stored preference and later ones are ignored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::consts::COLOR_NAMES;
use crate::util::color::hex_to_rgb_triplet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the exact stored literal; anything else is not a theme.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// `display` values for the sun and moon icons.
    ///
    /// The sun is offered while dark is active and the moon while light is.
    pub fn icon_display(self) -> (&'static str, &'static str) {
        match self {
            Self::Dark => ("block", "none"),
            Self::Light => ("none", "block"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page surface the theme state machine writes to.
pub trait ThemeHost {
    /// Raw persisted preference, if any.
    fn stored_theme(&self) -> Option<String>;
    fn store_theme(&self, theme: Theme);
    fn system_prefers_dark(&self) -> bool;
    fn set_dark_class(&self, dark: bool);
    /// Set icon `display` values. Hosts skip this unless both icons exist.
    fn set_icon_display(&self, sun: &str, moon: &str);
    /// Computed hex value of a semantic color, if the page defines one.
    fn computed_color(&self, name: &str) -> Option<String>;
    fn set_color_rgb(&self, name: &str, triplet: &str);
    /// Add the transition class and schedule its removal.
    fn start_transition(&self, duration_ms: u32);
}

#[derive(Debug)]
pub struct ThemeManager<H: ThemeHost> {
    host: H,
    current: Theme,
    transition_ms: u32,
}

/// Valid persisted preference, if one exists.
pub fn stored_preference<H: ThemeHost>(host: &H) -> Option<Theme> {
    host.stored_theme().as_deref().and_then(Theme::parse)
}

/// Stored preference when valid, otherwise the OS color scheme.
pub fn resolve_initial_theme<H: ThemeHost>(host: &H) -> Theme {
    stored_preference(host).unwrap_or_else(|| Theme::from_system(host.system_prefers_dark()))
}

impl<H: ThemeHost> ThemeManager<H> {
    /// Resolve the initial theme and reflect it into the page.
    ///
    /// Storage is read here, never written.
    pub fn new(host: H, transition_ms: u32) -> Self {
        let theme = resolve_initial_theme(&host);
        let mut manager = Self { host, current: theme, transition_ms };
        manager.update(theme, false);
        manager
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Push `theme` to every page surface and persist it, in a fixed order.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.update(theme, true);
    }

    fn update(&mut self, theme: Theme, persist: bool) {
        self.host.set_dark_class(theme.is_dark());
        let (sun, moon) = theme.icon_display();
        self.host.set_icon_display(sun, moon);
        if persist {
            self.host.store_theme(theme);
        }
        self.current = theme;
        self.refresh_rgb_variables();
        self.host.start_transition(self.transition_ms);
        log::debug!("theme applied: {theme} (persisted: {persist})");
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply_theme(next);
        next
    }

    /// Apply a validated theme literal. Returns `false` for anything other
    /// than `light` or `dark`, leaving state untouched.
    pub fn set_theme(&mut self, raw: &str) -> bool {
        let Some(theme) = Theme::parse(raw) else {
            log::debug!("ignoring unknown theme {raw:?}");
            return false;
        };
        self.apply_theme(theme);
        true
    }

    /// Follow an OS color-scheme change unless a preference is stored.
    ///
    /// The applied theme is persisted like any other change.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> bool {
        if stored_preference(&self.host).is_some() {
            return false;
        }
        self.apply_theme(Theme::from_system(prefers_dark));
        true
    }

    /// Recompute `--color-<name>-rgb` for every semantic color.
    pub fn refresh_rgb_variables(&self) {
        for name in COLOR_NAMES {
            let Some(raw) = self.host.computed_color(name) else {
                continue;
            };
            match hex_to_rgb_triplet(&raw) {
                Some(triplet) => self.host.set_color_rgb(name, &triplet),
                None => log::debug!("skipping --color-{name}: not a hex color ({raw:?})"),
            }
        }
    }
}
