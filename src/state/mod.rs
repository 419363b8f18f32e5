//! Navigation and theme state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `navigator` and `theme` hold page-lifetime state and drive the page only
//! through the `Shell` and `ThemeSurface` seams, so the same logic runs in
//! the browser and under native tests.

pub mod navigator;
pub mod registry;
pub mod shell;
pub mod theme;
