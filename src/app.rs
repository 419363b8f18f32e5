//! Browser bootstrap: logging, site configuration, and event wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once when the wasm module starts. Theme setup comes first so the
//! page paints in the right colors before any fragment arrives; the
//! navigator then owns everything inside `#content-container`.

use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};

use crate::config::{ConfigError, SiteConfig};
use crate::net::fragments::HttpFragments;
use crate::state::navigator::Navigator;
use crate::state::theme::ThemeController;
use crate::util::dark_mode::{self, DocumentTheme};
use crate::util::debounce::{Debouncer, TimeoutScheduler};
use crate::util::page_shell::{CONTENT_CONTAINER_ID, PageShell};

/// Id of the optional `<script type="application/json">` config override.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Install logging, then boot once the DOM is parsed.
pub fn start() {
    console_error_panic_hook::set_once();
    let (config, config_error) = load_config();
    let _ = console_log::init_with_level(config.log_level());
    if let Some(e) = config_error {
        log::error!("{e}; using built-in site config");
    }
    run_when_ready(move || boot(config));
}

fn load_config() -> (SiteConfig, Option<ConfigError>) {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match raw.as_deref().map(SiteConfig::from_json) {
        None => (SiteConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (SiteConfig::default(), Some(e)),
    }
}

fn run_when_ready(task: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        task();
        return;
    }
    let listener = Closure::once(task);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", listener.as_ref().unchecked_ref());
    listener.forget();
}

fn boot(config: SiteConfig) {
    let theme = Rc::new(ThemeController::new(DocumentTheme, config.persist_theme));
    theme.init();
    let system_theme = Rc::clone(&theme);
    dark_mode::watch_system_preference(move |prefers_dark| {
        system_theme.system_changed(prefers_dark);
    });
    dark_mode::bind_toggle(move || {
        theme.toggle();
    });

    let Some(shell) = PageShell::attach() else {
        log::error!("no #{CONTENT_CONTAINER_ID} element; section navigation disabled");
        return;
    };
    let debouncer = Debouncer::new(TimeoutScheduler, config.resize_debounce_ms);
    let nav = Rc::new(Navigator::new(config, shell, HttpFragments));

    let starting = Rc::clone(&nav);
    wasm_bindgen_futures::spawn_local(async move { starting.start().await });

    let on_resize = Closure::<dyn Fn()>::new(move || {
        let nav = Rc::clone(&nav);
        debouncer.trigger(move || wasm_bindgen_futures::spawn_local(async move { nav.relayout().await }));
    });
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}
