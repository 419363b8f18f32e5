//! Browser side of the theme: `data-theme` on `<html>`, the `#theme-toggle`
//! label, the system color-scheme query, and optional `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Every call is best-effort browser-only behavior; native builds no-op so
//! the theme controller stays testable off the page.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeSurface;
#[cfg(feature = "browser")]
use crate::state::theme::THEME_ATTRIBUTE;
use crate::state::theme::Theme;

pub const TOGGLE_ID: &str = "theme-toggle";
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
#[cfg(feature = "browser")]
const STORAGE_KEY: &str = "sitenav_theme";

/// The live document as a [`ThemeSurface`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeSurface for DocumentTheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "browser")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "browser"))]
        {
            false
        }
    }

    fn theme_attribute(&self) -> Option<String> {
        #[cfg(feature = "browser")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
                .and_then(|el| el.get_attribute(THEME_ATTRIBUTE))
        }
        #[cfg(not(feature = "browser"))]
        {
            None
        }
    }

    fn set_theme_attribute(&self, value: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.set_attribute(THEME_ATTRIBUTE, value);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = value;
        }
    }

    fn set_toggle_label(&self, label: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(toggle) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(TOGGLE_ID))
            {
                toggle.set_text_content(Some(label));
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = label;
        }
    }

    fn stored_theme(&self) -> Option<Theme> {
        #[cfg(feature = "browser")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
            Theme::from_attribute(&raw)
        }
        #[cfg(not(feature = "browser"))]
        {
            None
        }
    }

    fn store_theme(&self, theme: Theme) {
        #[cfg(feature = "browser")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, theme.as_attribute());
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = theme;
        }
    }
}

/// Call `on_change` with the new `matches` value whenever the system color
/// scheme flips. The listener lives as long as the page.
#[cfg(feature = "browser")]
pub fn watch_system_preference(on_change: impl Fn(bool) + 'static) {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
        log::warn!("matchMedia unavailable; theme will not follow the system");
        return;
    };
    let listener = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
        on_change(ev.matches());
    });
    let _ = query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    listener.forget();
}

/// Attach `on_click` to `#theme-toggle` for the page lifetime.
#[cfg(feature = "browser")]
pub fn bind_toggle(on_click: impl Fn() + 'static) {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(toggle) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(TOGGLE_ID))
    else {
        log::warn!("no #{TOGGLE_ID} element; theme toggle disabled");
        return;
    };
    let listener = Closure::<dyn Fn()>::new(on_click);
    let _ = toggle.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
    listener.forget();
}
