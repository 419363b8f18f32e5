//! # sitenav
//!
//! WASM navigation layer for a single-page personal site. Section fragments
//! are fetched on demand and stacked into the page shell's content
//! container; viewport width picks between a one-section desktop layout and
//! a long-scroll mobile layout, and the URL hash follows the selection.
//! A small theme controller switches the page between light and dark.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Site configuration and registry validation |
//! | [`state`] | Navigator, section registry, theme controller, and the `Shell` seam |
//! | [`net`] | Fragment retrieval and the load-failure panel |
//! | [`util`] | Debounce, viewport classes, and browser glue |
//! | `app` | Browser bootstrap (`browser` feature) |

#[cfg(feature = "browser")]
pub mod app;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// wasm entry point.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::start();
}
