//! Light/dark theme state and the controller that reflects it onto the page.
//!
//! The theme lives in the document's `data-theme` attribute; the toggle's
//! label always names the theme a click switches to.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Parse a `data-theme` value. Anything but `dark`/`light` is unknown.
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_attribute(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle label while this theme is active.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "☀️ Light",
            Self::Light => "🌙 Dark",
        }
    }
}

/// Where the theme is displayed and, optionally, remembered.
pub trait ThemeSurface {
    /// System-level `prefers-color-scheme: dark`.
    fn prefers_dark(&self) -> bool;

    fn theme_attribute(&self) -> Option<String>;

    fn set_theme_attribute(&self, value: &str);

    fn set_toggle_label(&self, label: &str);

    /// Explicit choice saved by an earlier visit.
    fn stored_theme(&self) -> Option<Theme> {
        None
    }

    fn store_theme(&self, _theme: Theme) {}
}

pub struct ThemeController<S: ThemeSurface> {
    surface: S,
    persist: bool,
}

impl<S: ThemeSurface> ThemeController<S> {
    /// `persist` keeps explicit toggles across reloads; otherwise every load
    /// follows the system preference.
    pub fn new(surface: S, persist: bool) -> Self {
        Self { surface, persist }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Apply the starting theme: a stored choice when persistence is on,
    /// else the system preference.
    pub fn init(&self) -> Theme {
        let stored = if self.persist { self.surface.stored_theme() } else { None };
        let theme = stored.unwrap_or_else(|| Theme::from_prefers_dark(self.surface.prefers_dark()));
        self.apply(theme);
        theme
    }

    /// Theme currently on the document; an unset or unknown attribute reads as light.
    pub fn current(&self) -> Theme {
        self.surface
            .theme_attribute()
            .and_then(|value| Theme::from_attribute(&value))
            .unwrap_or_default()
    }

    pub fn apply(&self, theme: Theme) {
        self.surface.set_theme_attribute(theme.as_attribute());
        self.surface.set_toggle_label(theme.toggle_label());
    }

    /// Flip the document theme. Saved only when persistence is on.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        if self.persist {
            self.surface.store_theme(next);
        }
        log::debug!("theme toggled to {}", next.as_attribute());
        next
    }

    /// Follow a change of the system preference.
    pub fn system_changed(&self, prefers_dark: bool) -> Theme {
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.apply(theme);
        theme
    }
}
